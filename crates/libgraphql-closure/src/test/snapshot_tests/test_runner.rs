use crate::DefinitionExt;
use crate::candidates::CandidateSetBuilder;
use crate::closure::compute_closure_for_names;
use crate::test::snapshot_tests::SnapshotTestCase;
use crate::test::snapshot_tests::utils;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Result of a single snapshot test
#[derive(Debug)]
pub struct SnapshotTestResult {
    pub test_name: String,
    pub passed: bool,
    pub error_message: Option<String>,
    pub file_path: PathBuf,
    pub file_snippet: Option<String>,
}

impl SnapshotTestResult {
    fn pass(test_case: &SnapshotTestCase) -> Self {
        Self {
            test_name: test_case.name.clone(),
            passed: true,
            error_message: None,
            file_path: test_case.schema_paths[0].clone(),
            file_snippet: None,
        }
    }

    fn fail(test_case: &SnapshotTestCase, error_message: String) -> Self {
        let file_path = test_case.schema_paths[0].clone();
        let file_snippet = extract_header_snippet(&file_path, 5).ok();
        Self {
            test_name: test_case.name.clone(),
            passed: false,
            error_message: Some(error_message),
            file_path,
            file_snippet,
        }
    }
}

/// Collection of snapshot test results
#[derive(Debug, Default)]
pub struct SnapshotTestResults {
    pub results: Vec<SnapshotTestResult>,
}

impl SnapshotTestResults {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failure_report(&self) -> String {
        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures
            .iter()
            .map(|r| format_detailed_failure(r))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} snapshot tests failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let all_passed = self.all_passed();
        let emoji = if all_passed { "✅" } else { "❌" };
        let banner = format!("{emoji} ========================================");
        let header = format!("{emoji} CLOSURE SNAPSHOT SUMMARY");
        let total = self.results.len();
        let failed: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        let passed = total - failed.len();

        let mut summary = format!(
            "{banner}\n{header}\n{banner}\nTotal tests: {total}\nPassed: {passed}\nFailed: {}\n",
            failed.len(),
        );
        if !failed.is_empty() {
            let failed_list = failed
                .iter()
                .map(|r| format!("  - {}", r.test_name))
                .collect::<Vec<_>>()
                .join("\n");
            summary.push_str(&format!("\nFailed snapshot tests:\n{failed_list}\n"));
        }
        summary.push_str(&banner);
        summary
    }
}

fn format_detailed_failure(result: &SnapshotTestResult) -> String {
    let mut output = String::new();
    let test_name = &result.test_name;
    let file_path = result.file_path.display();

    output.push_str(&format!("❌ {test_name}\n"));
    output.push_str(&format!("   File: {file_path}\n"));
    if let Some(msg) = &result.error_message {
        output.push_str(&format!("   {msg}\n"));
    }
    if let Some(snippet) = &result.file_snippet {
        output.push('\n');
        output.push_str(snippet);
    }

    output
}

/// Run every discovered closure fixture, in parallel.
pub fn run_closure_tests(fixtures_dir: &Path) -> SnapshotTestResults {
    let test_cases = SnapshotTestCase::discover_all(fixtures_dir);
    SnapshotTestResults {
        results: test_cases.par_iter().map(run_test_case).collect(),
    }
}

/// A failure while building candidates or computing the closure: the error's
/// variant name and its rendered message.
struct ClosureFailure {
    variant: String,
    message: String,
}
impl ClosureFailure {
    fn from_err<E: std::fmt::Debug + std::fmt::Display>(err: E) -> Self {
        Self {
            variant: utils::error_variant_name(&err),
            message: err.to_string(),
        }
    }
}

fn compute_names(test_case: &SnapshotTestCase) -> Result<Vec<String>, ClosureFailure> {
    let candidates = CandidateSetBuilder::new()
        .load_files(test_case.schema_paths.clone())
        .and_then(|builder| builder.build())
        .map_err(ClosureFailure::from_err)?;

    let closure = compute_closure_for_names(candidates.definitions(), &test_case.seed_names)
        .map_err(ClosureFailure::from_err)?;

    Ok(closure.iter().map(|def| def.name().to_string()).collect())
}

fn run_test_case(test_case: &SnapshotTestCase) -> SnapshotTestResult {
    if test_case.seed_names.is_empty() {
        return SnapshotTestResult::fail(
            test_case,
            "Fixture is missing a `# SEED:` header".to_string(),
        );
    }

    match (compute_names(test_case), test_case.expected_errors.is_empty()) {
        (Ok(actual_names), true) => match &test_case.expected_names {
            Some(expected_names) if expected_names != &actual_names =>
                SnapshotTestResult::fail(test_case, format!(
                    "Expected: [{}]\nGot:      [{}]",
                    expected_names.join(", "),
                    actual_names.join(", "),
                )),
            _ => SnapshotTestResult::pass(test_case),
        },

        (Ok(actual_names), false) => SnapshotTestResult::fail(test_case, format!(
            "Expected: Closure should fail\nGot: [{}] (false negative!)",
            actual_names.join(", "),
        )),

        (Err(failure), true) => SnapshotTestResult::fail(test_case, format!(
            "Expected: Closure should succeed\nGot: {}: {}",
            failure.variant,
            failure.message,
        )),

        (Err(failure), false) => {
            let unmatched = test_case.expected_errors
                .iter()
                .filter(|pattern| !pattern.matches(&failure.variant, &failure.message))
                .map(|pattern| format!("  ✗ {pattern}"))
                .collect::<Vec<_>>();

            if unmatched.is_empty() {
                SnapshotTestResult::pass(test_case)
            } else {
                SnapshotTestResult::fail(test_case, format!(
                    "Expected: All error patterns must match\n\nUnmatched patterns:\n{}\n\nActual error:\n{}: {}",
                    unmatched.join("\n"),
                    failure.variant,
                    failure.message,
                ))
            }
        },
    }
}

/// The leading lines of a fixture file, with line numbers.
fn extract_header_snippet(
    file_path: &Path,
    context_lines: usize,
) -> Result<String, std::io::Error> {
    let content = fs::read_to_string(file_path)?;
    let lines: Vec<&str> = content.lines().take(context_lines).collect();
    let line_num_width = (lines.len() + 1).to_string().len();

    let mut snippet = String::new();
    for (idx, line) in lines.iter().enumerate() {
        let line_num = idx + 1;
        snippet.push_str(&format!("   {line_num:>line_num_width$} │ {line}\n"));
    }

    Ok(snippet)
}
