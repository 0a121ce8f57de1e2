//! Assertion macros for use in tests.

/// Asserts that `actual` deeply equals `expected`, panicking with the
/// rendered difference report otherwise.
///
/// Both arguments are evaluated exactly once. The expected value is the
/// second argument and drives composite traversal.
///
/// ```
/// use deepcmp_core::assert_deeply_equal;
///
/// assert_deeply_equal!(vec![1_i64, 2, 3], vec![1_i64, 2, 3]);
/// ```
///
/// ```should_panic
/// use deepcmp_core::assert_deeply_equal;
///
/// // Panics with:
/// // Differences found: 1. The details are as follows:
/// // Property '[1].' mismatch: Expected '2', but was '5'.
/// assert_deeply_equal!(vec![1_i64, 5, 3], vec![1_i64, 2, 3]);
/// ```
#[macro_export]
macro_rules! assert_deeply_equal {
    ($actual:expr, $expected:expr $(,)?) => {{
        let actual = &$actual;
        let expected = &$expected;
        match $crate::compare(expected, actual) {
            Ok(report) => {
                if !report.is_empty() {
                    panic!("{}", report.render());
                }
            }
            Err(err) => panic!("deep comparison aborted: {err}"),
        }
    }};
}

/// Asserts that `actual` matches `expected` member by member, panicking with
/// the rendered difference report otherwise.
///
/// This is [`assert_deeply_equal!`] under a name that reads naturally when
/// the expected value is a partial template: members the expected side does
/// not declare are never compared.
///
/// ```
/// use deepcmp_core::assert_matches_deeply;
/// use serde_json::json;
///
/// let response = json!({"version": 3, "server_time": 1_724_300_000});
/// assert_matches_deeply!(response, json!({"version": 3}));
/// ```
#[macro_export]
macro_rules! assert_matches_deeply {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::assert_deeply_equal!($actual, $expected)
    };
}
