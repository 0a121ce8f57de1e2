use thiserror::Error;

/// Errors that can abort a comparison.
///
/// A mismatch between the compared values is never an error; mismatches are
/// reported as data on the [`Report`](crate::Report). This type covers the
/// cases where the traversal itself cannot continue.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    /// The value graphs nest deeper than the comparator supports.
    #[error("comparison exceeded the maximum nesting depth of {limit} at '{path}'")]
    DepthLimitExceeded {
        /// The depth limit that was exceeded.
        limit: usize,
        /// Rendered path of the value at which the limit was hit.
        path: String,
    },
}

/// Errors produced while parsing a document into a comparable value.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The provided JSON input was invalid.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The provided YAML input was invalid.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
