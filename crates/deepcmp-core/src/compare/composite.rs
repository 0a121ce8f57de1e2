use super::{primitives, walk, Difference, DifferenceKind, Path, Segment};
use crate::error::CompareError;
use crate::value::{Member, Shape};

/// Compares two composites member by member, driven by the expected side's
/// declaration order.
///
/// A member missing on the actual side counts as null there; members present
/// only on the actual side are ignored. Differences accumulate across all
/// members.
pub(super) fn compare_composites(
    expected: &[Member<'_>],
    actual: &[Member<'_>],
    path: &Path,
    depth: usize,
    differences: &mut Vec<Difference>,
) -> Result<(), CompareError> {
    for member in expected {
        let member_path = path.clone().with_segment(Segment::member(member.name));
        match actual.iter().find(|candidate| candidate.name == member.name) {
            Some(counterpart) => {
                walk(member.value, counterpart.value, &member_path, depth + 1, differences)?;
            }
            None => {
                let shape = member.value.classify();
                if !matches!(shape, Shape::Void) {
                    differences.push(Difference {
                        path: member_path,
                        kind: DifferenceKind::Null,
                        expected: primitives::describe(member.value, &shape),
                        actual: None,
                    });
                }
            }
        }
    }
    Ok(())
}
