//! Comparison engine and difference reporting.
//!
//! The module defines the difference representation produced by [`compare`]
//! along with the path grammar used to locate each mismatch and the renderer
//! that turns a report into the canonical failure text. The traversal
//! accumulates differences instead of stopping at the first one, so a single
//! report describes everything that disagrees between the two graphs.

mod collection;
mod composite;
mod path;
mod primitives;

pub use path::{path_from_segments, root_path, Path, Segment};

use serde::Serialize;

use crate::error::CompareError;
use crate::value::{short_type_name, Comparable, Shape};

/// Maximum supported nesting depth for a single comparison.
///
/// Recursing past this many levels aborts the comparison with
/// [`CompareError::DepthLimitExceeded`] instead of overflowing the stack.
pub const MAX_DEPTH: usize = 128;

const COLOR_RESET: &str = "\u{1b}[0m";
const COLOR_RED: &str = "\u{1b}[31m";
const COLOR_GREEN: &str = "\u{1b}[32m";

/// The kind of mismatch a [`Difference`] records.
///
/// Kinds travel as data on the difference; the rendered line always uses the
/// same two formats regardless of kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceKind {
    /// Exactly one side is null or absent.
    Null,
    /// The sides have different types.
    Type,
    /// Two collections disagree on length.
    Count,
    /// Two leaf values disagree.
    Value,
}

/// Represents a single recorded mismatch.
///
/// ```
/// # use deepcmp_core::{Difference, DifferenceKind, Segment};
/// let difference = Difference::new(DifferenceKind::Value)
///     .with_path(Segment::member("version"))
///     .with_expected("1")
///     .with_actual("2");
/// assert_eq!(difference.path.to_string(), "version");
/// assert_eq!(difference.expected.as_deref(), Some("1"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Difference {
    /// Structural location of the mismatch; empty at the root.
    pub path: Path,
    /// The kind of mismatch.
    pub kind: DifferenceKind,
    /// Rendering of the expected side; `None` when that side is null.
    pub expected: Option<String>,
    /// Rendering of the actual side; `None` when that side is null.
    pub actual: Option<String>,
}

impl Difference {
    /// Creates a difference of the given kind at the root with both sides
    /// absent.
    #[must_use]
    pub fn new(kind: DifferenceKind) -> Self {
        Self { path: Path::new(), kind, expected: None, actual: None }
    }

    /// Sets the path of the difference.
    #[must_use]
    pub fn with_path<P>(mut self, path: P) -> Self
    where
        P: Into<Path>,
    {
        self.path = path.into();
        self
    }

    /// Sets the expected side's rendering.
    #[must_use]
    pub fn with_expected<S>(mut self, value: S) -> Self
    where
        S: Into<String>,
    {
        self.expected = Some(value.into());
        self
    }

    /// Sets the actual side's rendering.
    #[must_use]
    pub fn with_actual<S>(mut self, value: S) -> Self
    where
        S: Into<String>,
    {
        self.actual = Some(value.into());
        self
    }
}

/// The ordered collection of differences produced by one comparison.
///
/// An empty report means the two graphs are deeply equal. The order of
/// differences follows the traversal: depth-first, members in declaration
/// order, collection elements by index.
///
/// ```
/// # use deepcmp_core::{Difference, DifferenceKind, Report};
/// let report = Report::from_differences(vec![Difference::new(DifferenceKind::Value)]);
/// assert_eq!(report.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    differences: Vec<Difference>,
}

/// Configuration toggles for report rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderStyle {
    color: bool,
}

impl RenderStyle {
    /// Constructs a style with default settings (no ANSI color).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables ANSI color output.
    #[must_use]
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Indicates whether color output is enabled.
    #[must_use]
    pub fn color_enabled(self) -> bool {
        self.color
    }
}

impl Report {
    /// Constructs an empty report.
    #[must_use]
    pub fn empty() -> Self {
        Self { differences: Vec::new() }
    }

    /// Builds a report from the provided differences.
    #[must_use]
    pub fn from_differences(differences: Vec<Difference>) -> Self {
        Self { differences }
    }

    /// Returns the number of recorded differences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.differences.len()
    }

    /// Indicates whether the compared graphs were deeply equal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Returns the recorded differences in traversal order.
    #[must_use]
    pub fn differences(&self) -> &[Difference] {
        &self.differences
    }

    /// Returns an iterator over the differences.
    pub fn iter(&self) -> std::slice::Iter<'_, Difference> {
        self.differences.iter()
    }

    /// Consumes the report and returns the differences.
    #[must_use]
    pub fn into_differences(self) -> Vec<Difference> {
        self.differences
    }

    /// Renders the report as the canonical failure text.
    ///
    /// An empty report renders as the empty string. Otherwise the output is
    /// a header naming the difference count followed by one line per
    /// difference, every line newline-terminated.
    ///
    /// ```
    /// # use deepcmp_core::compare;
    /// let report = compare(&true, &false)?;
    /// assert_eq!(
    ///     report.render(),
    ///     "Differences found: 1. The details are as follows:\n\
    ///      Mismatch: Expected 'true', but was 'false'.\n"
    /// );
    /// # Ok::<(), deepcmp_core::CompareError>(())
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.render_styled(&RenderStyle::default())
    }

    /// Renders the report with the given style.
    ///
    /// The default style is byte-identical to [`Report::render`]; enabling
    /// color wraps the expected value in green and the actual value in red.
    ///
    /// ```
    /// # use deepcmp_core::{compare, RenderStyle};
    /// let report = compare(&1_i64, &2_i64)?;
    /// let rendered = report.render_styled(&RenderStyle::new().with_color(true));
    /// assert!(rendered.contains("\u{1b}[32m1\u{1b}[0m"));
    /// assert!(rendered.contains("\u{1b}[31m2\u{1b}[0m"));
    /// # Ok::<(), deepcmp_core::CompareError>(())
    /// ```
    #[must_use]
    pub fn render_styled(&self, style: &RenderStyle) -> String {
        if self.differences.is_empty() {
            return String::new();
        }
        let mut output =
            format!("Differences found: {}. The details are as follows:\n", self.differences.len());
        for difference in &self.differences {
            output.push_str(&render_line(difference, style));
            output.push('\n');
        }
        output
    }
}

impl IntoIterator for Report {
    type Item = Difference;
    type IntoIter = std::vec::IntoIter<Difference>;

    fn into_iter(self) -> Self::IntoIter {
        self.differences.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Difference;
    type IntoIter = std::slice::Iter<'a, Difference>;

    fn into_iter(self) -> Self::IntoIter {
        self.differences.iter()
    }
}

impl From<Vec<Difference>> for Report {
    fn from(value: Vec<Difference>) -> Self {
        Self::from_differences(value)
    }
}

fn display_value(value: Option<&str>) -> &str {
    match value {
        None => "null",
        Some("") => "Empty",
        Some(text) => text,
    }
}

fn render_line(difference: &Difference, style: &RenderStyle) -> String {
    let expected = display_value(difference.expected.as_deref());
    let actual = display_value(difference.actual.as_deref());
    let (expected, actual) = if style.color_enabled() {
        (
            format!("{COLOR_GREEN}{expected}{COLOR_RESET}"),
            format!("{COLOR_RED}{actual}{COLOR_RESET}"),
        )
    } else {
        (expected.to_owned(), actual.to_owned())
    };

    if difference.path.is_empty() {
        format!("Mismatch: Expected '{expected}', but was '{actual}'.")
    } else {
        format!(
            "Property '{}' mismatch: Expected '{expected}', but was '{actual}'.",
            difference.path
        )
    }
}

/// Compares two value graphs and reports every difference.
///
/// The first argument carries the expected values; composite traversal is
/// driven by its declared members. Mismatches are data on the returned
/// [`Report`], never errors; the only error is exceeding [`MAX_DEPTH`].
///
/// ```
/// use deepcmp_core::compare;
///
/// let report = compare(&vec![1_i64, 2, 3], &vec![3_i64, 2, 1])?;
/// assert_eq!(report.len(), 2);
/// assert_eq!(report.differences()[0].path.to_string(), "[0].");
/// assert_eq!(report.differences()[1].path.to_string(), "[2].");
/// # Ok::<(), deepcmp_core::CompareError>(())
/// ```
pub fn compare<E, A>(expected: &E, actual: &A) -> Result<Report, CompareError>
where
    E: Comparable,
    A: Comparable,
{
    compare_at(expected, actual, Path::new())
}

/// Compares two value graphs, reporting differences under a path prefix.
///
/// ```
/// use deepcmp_core::{compare_at, Path, Segment};
///
/// let path = Path::from(Segment::member("payload"));
/// let report = compare_at(&true, &false, path)?;
/// assert!(report.render().contains("Property 'payload' mismatch"));
/// # Ok::<(), deepcmp_core::CompareError>(())
/// ```
pub fn compare_at<E, A>(expected: &E, actual: &A, path: Path) -> Result<Report, CompareError>
where
    E: Comparable,
    A: Comparable,
{
    let mut differences = Vec::new();
    walk(expected, actual, &path, 0, &mut differences)?;
    Ok(Report::from_differences(differences))
}

/// One step of the traversal, applied to every value pair in strict order:
/// depth guard, null tie-break, type tie-break, then the shape rules.
fn walk(
    expected: &dyn Comparable,
    actual: &dyn Comparable,
    path: &Path,
    depth: usize,
    differences: &mut Vec<Difference>,
) -> Result<(), CompareError> {
    if depth > MAX_DEPTH {
        return Err(CompareError::DepthLimitExceeded {
            limit: MAX_DEPTH,
            path: path.to_string(),
        });
    }

    let expected_shape = expected.classify();
    let actual_shape = actual.classify();

    let expected_void = matches!(expected_shape, Shape::Void);
    let actual_void = matches!(actual_shape, Shape::Void);
    if expected_void && actual_void {
        return Ok(());
    }
    if expected_void || actual_void {
        differences.push(Difference {
            path: path.clone(),
            kind: DifferenceKind::Null,
            expected: primitives::describe(expected, &expected_shape),
            actual: primitives::describe(actual, &actual_shape),
        });
        return Ok(());
    }

    if expected.type_name() != actual.type_name() {
        differences.push(Difference {
            path: path.clone(),
            kind: DifferenceKind::Type,
            expected: Some(short_type_name(expected.type_name())),
            actual: Some(short_type_name(actual.type_name())),
        });
        return Ok(());
    }

    match (expected_shape, actual_shape) {
        (Shape::Scalar(expected_scalar), Shape::Scalar(actual_scalar)) => {
            primitives::compare_scalars(expected_scalar, actual_scalar, path, differences);
        }
        (Shape::Text(expected_text), Shape::Text(actual_text)) => {
            primitives::compare_text(expected_text, actual_text, path, differences);
        }
        (Shape::Collection(expected_items), Shape::Collection(actual_items)) => {
            collection::compare_collections(
                &expected_items,
                &actual_items,
                path,
                depth,
                differences,
            )?;
        }
        (Shape::Composite(expected_members), Shape::Composite(actual_members)) => {
            composite::compare_composites(
                &expected_members,
                &actual_members,
                path,
                depth,
                differences,
            )?;
        }
        // Equal labels with disagreeing shapes can only come from a
        // misbehaving classification; degrade to a type difference.
        (expected_shape, actual_shape) => {
            differences.push(Difference {
                path: path.clone(),
                kind: DifferenceKind::Type,
                expected: Some(expected_shape.kind_name().to_owned()),
                actual: Some(actual_shape.kind_name().to_owned()),
            });
        }
    }
    Ok(())
}
