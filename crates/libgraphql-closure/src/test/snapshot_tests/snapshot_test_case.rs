use crate::test::snapshot_tests::ExpectedErrorPattern;
use crate::test::snapshot_tests::utils;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

const SEED_HEADER: &str = "SEED:";
const EXPECTED_NAMES_HEADER: &str = "EXPECTED_NAMES:";
const EXPECTED_ERROR_TYPE_HEADER: &str = "EXPECTED_ERROR_TYPE:";
const EXPECTED_ERROR_CONTAINS_HEADER: &str = "EXPECTED_ERROR_CONTAINS:";

/// One multi-file candidate set, the names to seed a closure with, and what
/// that closure is expected to produce.
#[derive(Debug, Clone)]
pub struct SnapshotTestCase {
    pub name: String,
    pub schema_paths: Vec<PathBuf>,
    pub seed_names: Vec<String>,
    pub expected_names: Option<Vec<String>>,
    pub expected_errors: Vec<ExpectedErrorPattern>,
}

impl SnapshotTestCase {
    /// Discovers all snapshot test cases from the fixtures directory
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Self> {
        let mut cases = Vec::new();
        cases.extend(Self::discover_in(&fixtures_dir.join("closed_sets")));
        cases.extend(Self::discover_in(&fixtures_dir.join("unresolvable_sets")));
        cases
    }

    fn discover_in(suites_dir: &Path) -> Vec<Self> {
        let Ok(entries) = fs::read_dir(suites_dir) else {
            return Vec::new();
        };

        let suites_dir_name = suites_dir.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        let mut cases: Vec<Self> = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_dir() {
                    eprintln!("ERROR: Unexpected file in {suites_dir_name}/: {}", path.display());
                    eprintln!("       Each test case must be a directory of *.schema.graphql files.");
                    return None;
                }

                let case_name = path.file_name()?.to_str()?.to_string();
                let schema_paths = Self::discover_schema_files(&path)?;
                Some(Self::from_schema_files(
                    format!("{suites_dir_name}/{case_name}"),
                    schema_paths,
                ))
            })
            .collect();

        cases.sort_by(|a, b| a.name.cmp(&b.name));
        cases
    }

    /// Schema files are loaded in file name order.
    fn discover_schema_files(dir: &Path) -> Option<Vec<PathBuf>> {
        let mut schema_files: Vec<PathBuf> = fs::read_dir(dir).ok()?
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| utils::ends_with_ignore_case(name, ".schema.graphql"))
            })
            .collect();

        if schema_files.is_empty() {
            return None;
        }
        schema_files.sort();
        Some(schema_files)
    }

    fn from_schema_files(name: String, schema_paths: Vec<PathBuf>) -> Self {
        let mut case = Self {
            name,
            schema_paths: vec![],
            seed_names: vec![],
            expected_names: None,
            expected_errors: vec![],
        };

        for schema_path in &schema_paths {
            let Ok(content) = fs::read_to_string(schema_path) else {
                continue;
            };
            case.parse_headers(&content);
        }

        case.schema_paths = schema_paths;
        case
    }

    fn parse_headers(&mut self, content: &str) {
        for line in content.lines() {
            let Some(comment) = line.trim_start().strip_prefix('#') else {
                continue;
            };
            let comment = comment.trim();

            if let Some(value) = comment.strip_prefix(SEED_HEADER) {
                self.seed_names.extend(utils::split_name_list(value));
            } else if let Some(value) = comment.strip_prefix(EXPECTED_NAMES_HEADER) {
                self.expected_names
                    .get_or_insert_with(Vec::new)
                    .extend(utils::split_name_list(value));
            } else if let Some(value) = comment.strip_prefix(EXPECTED_ERROR_TYPE_HEADER) {
                self.expected_errors.push(
                    ExpectedErrorPattern::ExactType(value.trim().to_string()),
                );
            } else if let Some(value) = comment.strip_prefix(EXPECTED_ERROR_CONTAINS_HEADER) {
                self.expected_errors.push(
                    ExpectedErrorPattern::Contains(value.trim().to_string()),
                );
            }
        }
    }
}
