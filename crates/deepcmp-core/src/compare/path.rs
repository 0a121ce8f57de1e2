use std::fmt;

use serde::{Serialize, Serializer};

/// Represents a single element within a difference path.
///
/// A segment can refer to a named member, a collection index, or the count
/// pseudo-member emitted when two collections disagree on length.
///
/// ```
/// # use deepcmp_core::Segment;
/// let member = Segment::member("numbers");
/// let index = Segment::index(2);
/// assert!(matches!(member, Segment::Member(_)));
/// assert!(matches!(index, Segment::Index(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Named member lookup.
    Member(String),
    /// Collection index lookup.
    Index(usize),
    /// Collection length pseudo-member; always final in a path.
    Count,
}

impl Segment {
    /// Creates a member segment.
    #[must_use]
    pub fn member<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self::Member(name.into())
    }

    /// Creates an index segment.
    #[must_use]
    pub fn index(value: usize) -> Self {
        Self::Index(value)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member(name) => f.write_str(name),
            Self::Index(index) => write!(f, "[{index}]."),
            Self::Count => f.write_str("Count"),
        }
    }
}

/// The location of a difference within the compared graphs.
///
/// Paths render in the dotted form used by the report: member names joined
/// with `.`, indices as `[i].` with the trailing dot included, and the count
/// pseudo-member as a final `Count`. The root renders as the empty string.
///
/// ```
/// # use deepcmp_core::{Path, Segment};
/// let path = Path::new()
///     .with_segment(Segment::member("numbers"))
///     .with_segment(Segment::index(3));
/// assert_eq!(path.to_string(), "numbers.[3].");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    /// Creates an empty path pointing at the root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new segment, returning the extended path.
    #[must_use]
    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.0.push(segment);
        self
    }

    /// Returns the underlying segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether the path points at the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the path and returns the owned segments.
    ///
    /// ```
    /// # use deepcmp_core::{Path, Segment};
    /// let path = Path::from(Segment::member("id"));
    /// assert_eq!(path.into_segments().len(), 1);
    /// ```
    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.0
    }

    /// Pushes a new segment in-place.
    ///
    /// ```
    /// # use deepcmp_core::{Path, Segment};
    /// let mut path = Path::new();
    /// path.push(Segment::member("name"));
    /// assert_eq!(path.len(), 1);
    /// ```
    pub fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    /// Pops the last segment off the path.
    ///
    /// ```
    /// # use deepcmp_core::{Path, Segment};
    /// let mut path = Path::from(Segment::index(0));
    /// assert!(path.pop().is_some());
    /// assert!(path.is_empty());
    /// ```
    pub fn pop(&mut self) -> Option<Segment> {
        self.0.pop()
    }
}

impl From<Vec<Segment>> for Path {
    fn from(value: Vec<Segment>) -> Self {
        Self(value)
    }
}

impl From<Segment> for Path {
    fn from(value: Segment) -> Self {
        Self(vec![value])
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut after_member = false;
        for segment in &self.0 {
            if after_member {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
            after_member = matches!(segment, Segment::Member(_));
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Path {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Creates a path representing the root of a value graph.
///
/// ```
/// # use deepcmp_core::compare::root_path;
/// assert!(root_path().is_empty());
/// ```
#[must_use]
pub fn root_path() -> Path {
    Path::new()
}

/// Builds a path from an iterator of segments.
///
/// ```
/// # use deepcmp_core::compare::path_from_segments;
/// # use deepcmp_core::Segment;
/// let path = path_from_segments([Segment::member("a"), Segment::index(1)]);
/// assert_eq!(path.len(), 2);
/// ```
#[must_use]
pub fn path_from_segments<I>(segments: I) -> Path
where
    I: IntoIterator<Item = Segment>,
{
    Path(segments.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_follows_the_report_grammar() {
        let cases: Vec<(Vec<Segment>, &str)> = vec![
            (vec![], ""),
            (vec![Segment::member("a")], "a"),
            (vec![Segment::member("a"), Segment::member("b")], "a.b"),
            (vec![Segment::member("numbers"), Segment::index(3)], "numbers.[3]."),
            (vec![Segment::index(2)], "[2]."),
            (vec![Segment::member("numbers"), Segment::Count], "numbers.Count"),
            (vec![Segment::Count], "Count"),
            (
                vec![Segment::member("strings"), Segment::index(1), Segment::member("chars")],
                "strings.[1].chars",
            ),
            (vec![Segment::index(0), Segment::Count], "[0].Count"),
        ];
        for (segments, rendered) in cases {
            assert_eq!(path_from_segments(segments).to_string(), rendered);
        }
    }

    #[test]
    fn serializes_as_the_display_string() {
        let path = path_from_segments([Segment::member("numbers"), Segment::Count]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"numbers.Count\"");
    }
}
