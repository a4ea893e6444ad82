use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Check if a string ends with a suffix (case-insensitive)
pub fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
    s.len() >= suffix.len() && s[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Split a comma-separated header value into its trimmed, non-empty parts.
pub fn split_name_list(value: &str) -> Vec<String> {
    value.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// The variant name of an error enum, taken from its `Debug` rendering.
pub fn error_variant_name(err: &impl std::fmt::Debug) -> String {
    let debug_str = format!("{err:?}");
    debug_str
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .next()
        .unwrap_or_default()
        .to_string()
}

pub fn get_fixtures_dir() -> &'static Path {
    static FIXTURES_DIR: OnceLock<PathBuf> = OnceLock::new();
    FIXTURES_DIR.get_or_init(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/test/snapshot_tests/fixtures")
    })
}
