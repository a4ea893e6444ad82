//! Fixture-driven tests that load multi-file schema sets from disk, compute a
//! closure from a seed, and compare the result against expectations written
//! as header comments in the fixture files.
//!
//! For the fixture format, see the [README](snapshot_tests/fixtures/README.md).

mod expected_error_pattern;
mod snapshot_test_case;
mod test_runner;
mod utils;

pub use expected_error_pattern::ExpectedErrorPattern;
pub use snapshot_test_case::SnapshotTestCase;

#[cfg(test)]
mod tests {
    use crate::test::snapshot_tests::test_runner;
    use crate::test::snapshot_tests::utils;

    #[test]
    fn verify_closure_snapshot_tests() {
        let fixtures_dir = utils::get_fixtures_dir();
        let results = test_runner::run_closure_tests(fixtures_dir);

        let all_passed = results.all_passed();
        if !all_passed {
            eprintln!("{}", results.failure_report());
            eprintln!("\n{}", results.summary());
        } else {
            println!("{}", results.summary());
        }

        assert!(!results.results.is_empty(), "No snapshot fixtures were discovered");
        assert!(
            all_passed,
            "Closure snapshot tests failed:\n{}",
            results.failure_report()
        );
    }
}
