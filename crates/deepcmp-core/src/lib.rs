//! Core primitives of the `deepcmp` structural comparison toolkit.
//!
//! `deepcmp-core` compares two value graphs member by member and element by
//! element, accumulating every difference into a [`Report`] instead of
//! stopping at the first one. Values take part in a comparison by
//! implementing [`Comparable`], which classifies them into one of five
//! shapes; implementations for the common standard library types and for
//! [`serde_json::Value`] ship with the crate.
//!
//! ```
//! use deepcmp_core::{compare, Comparable, Member, Shape};
//!
//! struct Release {
//!     version: i64,
//!     channel: String,
//! }
//!
//! impl Comparable for Release {
//!     fn classify(&self) -> Shape<'_> {
//!         Shape::Composite(vec![
//!             Member::new("version", &self.version),
//!             Member::new("channel", &self.channel),
//!         ])
//!     }
//! }
//!
//! fn main() -> Result<(), deepcmp_core::CompareError> {
//!     let expected = Release { version: 1, channel: "stable".to_owned() };
//!     let actual = Release { version: 2, channel: "stable".to_owned() };
//!
//!     let report = compare(&expected, &actual)?;
//!     assert_eq!(
//!         report.render(),
//!         "Differences found: 1. The details are as follows:\n\
//!          Property 'version' mismatch: Expected '1', but was '2'.\n"
//!     );
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assert;
pub mod compare;
mod error;
mod json;
mod value;

pub use compare::{
    compare, compare_at, path_from_segments, root_path, Difference, DifferenceKind, Path, Report,
    RenderStyle, Segment, MAX_DEPTH,
};
pub use error::{CompareError, ParseError};
pub use json::{from_json_str, from_yaml_str};
pub use value::{Comparable, Member, Scalar, Shape};

/// Returns the semantic version of the `deepcmp-core` crate.
///
/// ```
/// assert!(!deepcmp_core::version().is_empty());
/// ```
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
