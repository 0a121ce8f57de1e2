use super::{Difference, DifferenceKind, Path};
use crate::value::{short_type_name, Comparable, Scalar, Shape};

/// Records a value difference for two scalars that disagree.
pub(super) fn compare_scalars(
    expected: Scalar,
    actual: Scalar,
    path: &Path,
    differences: &mut Vec<Difference>,
) {
    if expected != actual {
        differences.push(Difference {
            path: path.clone(),
            kind: DifferenceKind::Value,
            expected: Some(expected.to_string()),
            actual: Some(actual.to_string()),
        });
    }
}

/// Records a value difference for two strings, comparing them atomically.
pub(super) fn compare_text(
    expected: &str,
    actual: &str,
    path: &Path,
    differences: &mut Vec<Difference>,
) {
    if expected != actual {
        differences.push(Difference {
            path: path.clone(),
            kind: DifferenceKind::Value,
            expected: Some(expected.to_owned()),
            actual: Some(actual.to_owned()),
        });
    }
}

/// Produces the textual rendering of one side of a difference.
///
/// `None` stands for an absent or null side; containers render as their
/// shortened type name, matching what the report can usefully say about a
/// value that only differs somewhere inside.
pub(super) fn describe(value: &dyn Comparable, shape: &Shape<'_>) -> Option<String> {
    match shape {
        Shape::Void => None,
        Shape::Scalar(scalar) => Some(scalar.to_string()),
        Shape::Text(text) => Some((*text).to_string()),
        Shape::Collection(_) | Shape::Composite(_) => Some(short_type_name(value.type_name())),
    }
}
