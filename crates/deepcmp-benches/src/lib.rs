//! Benchmark corpora for the deepcmp toolkit.
//!
//! The crate exposes a small set of generated document pairs with known
//! difference profiles so the Criterion benches and their smoke tests share
//! one source of inputs.
//!
//! # Examples
//!
//! ```
//! let corpora = deepcmp_benches::available_corpora();
//! assert!(corpora.iter().any(|corpus| corpus.name() == "identical"));
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use serde_json::{json, Value};

/// A named pair of documents with a known difference profile.
#[derive(Clone, Debug)]
pub struct Corpus {
    name: &'static str,
    expected: Value,
    actual: Value,
}

impl Corpus {
    /// Returns the corpus name used as the benchmark parameter.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the expected document.
    #[must_use]
    pub fn expected(&self) -> &Value {
        &self.expected
    }

    /// Returns the actual document.
    #[must_use]
    pub fn actual(&self) -> &Value {
        &self.actual
    }

    /// Returns the serialized size of both documents in bytes.
    #[must_use]
    pub fn byte_size(&self) -> usize {
        let expected = serde_json::to_vec(&self.expected).map_or(0, |bytes| bytes.len());
        let actual = serde_json::to_vec(&self.actual).map_or(0, |bytes| bytes.len());
        expected + actual
    }
}

/// Builds the standard benchmark corpora.
///
/// `identical` measures the equal-documents fast path, `scattered-updates`
/// a deep object tree with string edits sprinkled through it, and
/// `wide-collection` a single large array with every tenth element bumped.
#[must_use]
pub fn available_corpora() -> Vec<Corpus> {
    let balanced = tree(4, 4, 1);
    let mut scattered = balanced.clone();
    mutate_string_leaves(&mut scattered);

    let wide_expected: Vec<i64> = (0..1000).collect();
    let mut wide_actual = wide_expected.clone();
    for value in wide_actual.iter_mut().step_by(10) {
        *value += 1;
    }

    vec![
        Corpus { name: "identical", expected: balanced.clone(), actual: balanced },
        Corpus { name: "scattered-updates", expected: tree(4, 4, 1), actual: scattered },
        Corpus {
            name: "wide-collection",
            expected: json!(wide_expected),
            actual: json!(wide_actual),
        },
    ]
}

fn tree(depth: usize, fanout: usize, seed: u64) -> Value {
    if depth == 0 {
        return json!({
            "id": seed,
            "label": format!("leaf-{seed}"),
            "enabled": seed % 2 == 0,
        });
    }

    let mut entries = serde_json::Map::new();
    entries.insert("id".to_owned(), json!(seed));
    for index in 0..fanout {
        let child_seed = seed * 31 + index as u64 + 1;
        entries.insert(format!("child_{index}"), tree(depth - 1, fanout, child_seed));
    }
    Value::Object(entries)
}

fn mutate_string_leaves(value: &mut Value) {
    fn walk(value: &mut Value, counter: &mut usize) {
        match value {
            Value::String(text) => {
                *counter += 1;
                if *counter % 7 == 0 {
                    text.push('!');
                }
            }
            Value::Array(items) => {
                for item in items {
                    walk(item, counter);
                }
            }
            Value::Object(entries) => {
                for (_, child) in entries.iter_mut() {
                    walk(child, counter);
                }
            }
            _ => {}
        }
    }

    let mut counter = 0;
    walk(value, &mut counter);
}
