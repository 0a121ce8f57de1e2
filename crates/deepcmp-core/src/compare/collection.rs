use super::{walk, Difference, DifferenceKind, Path, Segment};
use crate::error::CompareError;
use crate::value::Comparable;

/// Compares two collections positionally.
///
/// A length disagreement produces a single count difference and suppresses
/// all element comparison; equal lengths recurse into every position and
/// accumulate whatever the elements report.
pub(super) fn compare_collections(
    expected: &[&dyn Comparable],
    actual: &[&dyn Comparable],
    path: &Path,
    depth: usize,
    differences: &mut Vec<Difference>,
) -> Result<(), CompareError> {
    if expected.len() != actual.len() {
        differences.push(Difference {
            path: path.clone().with_segment(Segment::Count),
            kind: DifferenceKind::Count,
            expected: Some(format!("Count {}", expected.len())),
            actual: Some(format!("Count {}", actual.len())),
        });
        return Ok(());
    }

    for (index, (expected_item, actual_item)) in expected.iter().zip(actual).enumerate() {
        let item_path = path.clone().with_segment(Segment::index(index));
        walk(*expected_item, *actual_item, &item_path, depth + 1, differences)?;
    }
    Ok(())
}
