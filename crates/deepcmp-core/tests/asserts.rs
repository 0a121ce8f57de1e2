//! The assertion macros pass quietly and fail with the rendered report.

use deepcmp_core::{assert_deeply_equal, assert_matches_deeply};
use serde_json::json;

#[test]
fn passing_assertions_return_quietly() {
    assert_deeply_equal!(json!({"a": [1, 2]}), json!({"a": [1, 2]}));
    assert_deeply_equal!(vec![1_i64, 2, 3], vec![1_i64, 2, 3]);
}

#[test]
fn matching_tolerates_extra_actual_members() {
    assert_matches_deeply!(json!({"version": 3, "server_time": 99}), json!({"version": 3}));
}

#[test]
#[should_panic(expected = "Differences found: 1. The details are as follows:")]
fn failing_assertions_panic_with_the_report_header() {
    assert_deeply_equal!(json!({"version": 2}), json!({"version": 1}));
}

#[test]
#[should_panic(expected = "Property 'version' mismatch: Expected '1', but was '2'.")]
fn the_second_argument_is_the_expected_side() {
    assert_deeply_equal!(json!({"version": 2}), json!({"version": 1}));
}

#[test]
#[should_panic(expected = "deep comparison aborted")]
fn depth_overflow_aborts_instead_of_reporting() {
    let mut value = json!(1);
    for _ in 0..200 {
        value = json!([value]);
    }
    assert_deeply_equal!(value.clone(), value);
}
