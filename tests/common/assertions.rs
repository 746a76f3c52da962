//! Assertion macros for Stagehand integration tests.

/// Assert a file exists under the Programs/ tree.
#[macro_export]
macro_rules! assert_deployed {
    ($env:expr, $relative:expr) => {
        let path = $env.programs_path($relative);
        assert!(path.exists(), "expected deployed file at {}", path.display());
    };
}

/// Assert the combined command output contains a substring.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "expected output to contain {:?}:\n{}",
            $needle,
            combined
        );
    };
}
