//! Fuzzing harnesses for the deepcmp toolkit.
//!
//! The helpers in this crate are intentionally lightweight so they can be
//! reused both from `cargo fuzz` targets and from deterministic smoke tests.
//! Each public function accepts raw bytes and exercises the parsing,
//! comparison, and rendering pipelines, asserting the invariants that must
//! hold for any input.
//!
//! # Examples
//!
//! Run the parsing harness on a JSON snippet:
//!
//! ```
//! deepcmp_fuzz::fuzz_parse(b"{\"a\":1}");
//! ```
//!
//! Invoke the comparison harness on deterministic input:
//!
//! ```
//! deepcmp_fuzz::fuzz_compare(&[1, 2, 3, 4]);
//! ```
//!
//! Exercise the renderer with arbitrary bytes:
//!
//! ```
//! deepcmp_fuzz::fuzz_render(b"example");
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use arbitrary::Unstructured;
use deepcmp_core::{compare, from_json_str, from_yaml_str};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

const MAX_DEPTH: usize = 4;
const MAX_ARRAY_LEN: u8 = 6;
const MAX_OBJECT_LEN: u8 = 6;
const MAX_STRING_LEN: u8 = 12;

/// Feeds arbitrary bytes through the JSON and YAML parsing routines.
///
/// The function ignores decoding failures so that fuzzers can keep exploring.
///
/// ```
/// deepcmp_fuzz::fuzz_parse(b"{\"key\":\"value\"}");
/// ```
pub fn fuzz_parse(data: &[u8]) {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = from_json_str(text);
        let _ = from_yaml_str(text);
    }
}

/// Drives the comparison with randomly generated documents.
///
/// The generated documents stay well below the comparator's depth limit, so
/// every comparison must succeed. The harness asserts that comparing the same
/// pair twice yields the same report and that every document is deeply equal
/// to itself.
///
/// ```
/// deepcmp_fuzz::fuzz_compare(b"seed");
/// ```
pub fn fuzz_compare(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Ok(expected) = random_document(&mut unstructured, 0) else {
        return;
    };
    let Ok(actual) = random_document(&mut unstructured, 0) else {
        return;
    };

    let first = compare(&expected, &actual).expect("bounded documents fit the depth limit");
    let second = compare(&expected, &actual).expect("bounded documents fit the depth limit");
    assert_eq!(first, second);

    let reflexive = compare(&expected, &expected).expect("bounded documents fit the depth limit");
    assert!(reflexive.is_empty());
}

/// Renders reports for randomly generated document pairs.
///
/// Asserts the rendering contract: an empty report renders as the empty
/// string, and a non-empty one renders as a header plus one line per
/// difference. The serialized form is exercised as well.
///
/// ```
/// deepcmp_fuzz::fuzz_render(b"render fuzz");
/// ```
pub fn fuzz_render(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Ok(expected) = random_document(&mut unstructured, 0) else {
        return;
    };
    let Ok(actual) = random_document(&mut unstructured, 0) else {
        return;
    };

    let report = compare(&expected, &actual).expect("bounded documents fit the depth limit");
    let rendered = report.render();
    if report.is_empty() {
        assert!(rendered.is_empty());
    } else {
        assert!(rendered.starts_with("Differences found: "));
        assert_eq!(rendered.lines().count(), report.len() + 1);
    }

    let _ = serde_json::to_string(&report);
}

fn random_document(
    unstructured: &mut Unstructured<'_>,
    depth: usize,
) -> Result<JsonValue, arbitrary::Error> {
    if depth >= MAX_DEPTH {
        return random_leaf(unstructured);
    }

    let choice = unstructured.int_in_range::<u8>(0..=5)?;
    match choice {
        0 => Ok(JsonValue::Null),
        1 => Ok(JsonValue::Bool(unstructured.arbitrary()?)),
        2 => Ok(JsonValue::Number(random_number(unstructured)?)),
        3 => Ok(JsonValue::String(random_string(unstructured)?)),
        4 => {
            let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_ARRAY_LEN)?);
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(random_document(unstructured, depth + 1)?);
            }
            Ok(JsonValue::Array(items))
        }
        _ => {
            let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_OBJECT_LEN)?);
            let mut map = JsonMap::new();
            for _ in 0..len {
                let key = random_string(unstructured)?;
                let value = random_document(unstructured, depth + 1)?;
                map.insert(key, value);
            }
            Ok(JsonValue::Object(map))
        }
    }
}

fn random_leaf(unstructured: &mut Unstructured<'_>) -> Result<JsonValue, arbitrary::Error> {
    let choice = unstructured.int_in_range::<u8>(0..=3)?;
    match choice {
        0 => Ok(JsonValue::Null),
        1 => Ok(JsonValue::Bool(unstructured.arbitrary()?)),
        2 => Ok(JsonValue::Number(random_number(unstructured)?)),
        _ => Ok(JsonValue::String(random_string(unstructured)?)),
    }
}

fn random_number(unstructured: &mut Unstructured<'_>) -> Result<JsonNumber, arbitrary::Error> {
    if unstructured.arbitrary()? {
        let int = unstructured.arbitrary::<i64>()?;
        Ok(JsonNumber::from(int))
    } else {
        let numerator = unstructured.arbitrary::<i32>()? as f64;
        let denominator = f64::from(unstructured.int_in_range::<u16>(1..=1024)?);
        let value = numerator / denominator;
        JsonNumber::from_f64(value).ok_or(arbitrary::Error::IncorrectFormat)
    }
}

fn random_string(unstructured: &mut Unstructured<'_>) -> Result<String, arbitrary::Error> {
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_STRING_LEN)?);
    let mut string = String::with_capacity(len);
    for _ in 0..len {
        let byte = unstructured.int_in_range::<u8>(0x20..=0x7e)?;
        string.push(char::from(byte));
    }
    Ok(string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_harness_handles_utf8() {
        fuzz_parse(br"{}");
    }

    #[test]
    fn compare_harness_runs() {
        fuzz_compare(b"compare");
    }

    #[test]
    fn render_harness_runs() {
        fuzz_render(b"render");
    }
}
