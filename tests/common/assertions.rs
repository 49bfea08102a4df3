//! Assertion macros with descriptive failure messages.

/// Assert that stdout or stderr contains `needle`.
///
/// ```ignore
/// assert_output_contains!(result, "No resources found");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {{
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "expected output to contain {:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    }};
}

/// Assert that some stub call line contains `needle`.
#[macro_export]
macro_rules! assert_called {
    ($env:expr, $needle:expr) => {{
        let calls = $env.calls();
        assert!(
            calls.iter().any(|c| c.contains($needle)),
            "expected a call containing {:?}, got:\n{}",
            $needle,
            calls.join("\n")
        );
    }};
}

/// Assert that no stub call line contains `needle`.
#[macro_export]
macro_rules! assert_not_called {
    ($env:expr, $needle:expr) => {{
        let calls = $env.calls();
        assert!(
            !calls.iter().any(|c| c.contains($needle)),
            "expected no call containing {:?}, got:\n{}",
            $needle,
            calls.join("\n")
        );
    }};
}
