use std::borrow::Cow;
use std::collections::{BTreeSet, VecDeque};
use std::fmt;

/// A value that can take part in structural deep comparison.
///
/// Implementations classify themselves into one of the closed [`Shape`]
/// variants; the comparison engine drives the whole traversal from that
/// classification. Composite types list their members in declaration order,
/// which fixes the order in which differences are reported.
///
/// ```
/// use deepcmp_core::{Comparable, Member, Shape};
///
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// impl Comparable for Endpoint {
///     fn classify(&self) -> Shape<'_> {
///         Shape::Composite(vec![
///             Member::new("host", &self.host),
///             Member::new("port", &self.port),
///         ])
///     }
/// }
///
/// let endpoint = Endpoint { host: "localhost".into(), port: 8080 };
/// assert!(matches!(endpoint.classify(), Shape::Composite(_)));
/// ```
pub trait Comparable {
    /// Classifies the value for traversal.
    fn classify(&self) -> Shape<'_>;

    /// Label consulted by the type tie-break; two values are only compared
    /// further when their labels agree.
    ///
    /// The default reports the compile-time type name. Dynamic value models
    /// such as `serde_json::Value` override this to report the runtime kind
    /// of the concrete value instead.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The closed classification of a value, produced once per node by
/// [`Comparable::classify`].
#[derive(Clone)]
pub enum Shape<'a> {
    /// The absence of a value (`Option::None`, JSON `null`).
    Void,
    /// A leaf compared by value equality.
    Scalar(Scalar),
    /// A string, compared atomically rather than element-wise.
    Text(&'a str),
    /// An ordered sequence compared positionally.
    Collection(Vec<&'a dyn Comparable>),
    /// A named-member record compared member by member.
    Composite(Vec<Member<'a>>),
}

impl Shape<'_> {
    /// Returns the lowercase name of the shape kind.
    ///
    /// ```
    /// use deepcmp_core::Comparable;
    ///
    /// assert_eq!(1_i64.classify().kind_name(), "scalar");
    /// assert_eq!("one".classify().kind_name(), "text");
    /// ```
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Scalar(_) => "scalar",
            Self::Text(_) => "text",
            Self::Collection(_) => "collection",
            Self::Composite(_) => "composite",
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => f.write_str("Void"),
            Self::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Self::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Self::Collection(items) => f.debug_tuple("Collection").field(&items.len()).finish(),
            Self::Composite(members) => f.debug_tuple("Composite").field(members).finish(),
        }
    }
}

/// A value-typed leaf compared by built-in equality.
///
/// Numbers keep their signedness so that the full `u64` range stays exact;
/// the widths never mix because the type tie-break fires before any scalar
/// comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    /// Boolean.
    Bool(bool),
    /// Single character.
    Char(char),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating-point number, compared with IEEE semantics.
    Float(f64),
    /// Variant name of a fieldless enum.
    Symbol(&'static str),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Char(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Uint(value) => write!(f, "{value}"),
            // Integral floats keep a decimal point so a float never renders
            // with the same text as an integer.
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Self::Float(value) => write!(f, "{value}"),
            Self::Symbol(name) => f.write_str(name),
        }
    }
}

/// A named member of a composite value.
///
/// ```
/// use deepcmp_core::Member;
///
/// let retries = 3_u32;
/// let member = Member::new("retries", &retries);
/// assert_eq!(member.name, "retries");
/// ```
#[derive(Clone, Copy)]
pub struct Member<'a> {
    /// The member's declared name, as it appears in difference paths.
    pub name: &'a str,
    /// The member's value.
    pub value: &'a dyn Comparable,
}

impl<'a> Member<'a> {
    /// Creates a member from a name and a reference to its value.
    #[must_use]
    pub fn new(name: &'a str, value: &'a dyn Comparable) -> Self {
        Self { name, value }
    }
}

impl fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("type", &self.value.type_name())
            .finish()
    }
}

impl<T> Comparable for &T
where
    T: Comparable + ?Sized,
{
    fn classify(&self) -> Shape<'_> {
        (**self).classify()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T> Comparable for &mut T
where
    T: Comparable + ?Sized,
{
    fn classify(&self) -> Shape<'_> {
        (**self).classify()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T> Comparable for Box<T>
where
    T: Comparable + ?Sized,
{
    fn classify(&self) -> Shape<'_> {
        (**self).classify()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T> Comparable for Option<T>
where
    T: Comparable,
{
    fn classify(&self) -> Shape<'_> {
        match self {
            Some(value) => value.classify(),
            None => Shape::Void,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Some(value) => value.type_name(),
            None => std::any::type_name::<Self>(),
        }
    }
}

macro_rules! impl_comparable_int {
    ($($ty:ty),+) => {
        $(impl Comparable for $ty {
            fn classify(&self) -> Shape<'_> {
                Shape::Scalar(Scalar::Int(*self as i64))
            }
        })+
    };
}

macro_rules! impl_comparable_uint {
    ($($ty:ty),+) => {
        $(impl Comparable for $ty {
            fn classify(&self) -> Shape<'_> {
                Shape::Scalar(Scalar::Uint(*self as u64))
            }
        })+
    };
}

impl_comparable_int!(i8, i16, i32, i64, isize);
impl_comparable_uint!(u8, u16, u32, u64, usize);

impl Comparable for f32 {
    fn classify(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Float(f64::from(*self)))
    }
}

impl Comparable for f64 {
    fn classify(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Float(*self))
    }
}

impl Comparable for bool {
    fn classify(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Bool(*self))
    }
}

impl Comparable for char {
    fn classify(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Char(*self))
    }
}

impl Comparable for str {
    fn classify(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

// All text types share one label so that owned and borrowed strings
// compare by content.
impl Comparable for String {
    fn classify(&self) -> Shape<'_> {
        Shape::Text(self)
    }

    fn type_name(&self) -> &'static str {
        "str"
    }
}

impl Comparable for Cow<'_, str> {
    fn classify(&self) -> Shape<'_> {
        Shape::Text(self.as_ref())
    }

    fn type_name(&self) -> &'static str {
        "str"
    }
}

impl<T> Comparable for Vec<T>
where
    T: Comparable,
{
    fn classify(&self) -> Shape<'_> {
        Shape::Collection(self.iter().map(|item| item as &dyn Comparable).collect())
    }
}

impl<T> Comparable for [T]
where
    T: Comparable,
{
    fn classify(&self) -> Shape<'_> {
        Shape::Collection(self.iter().map(|item| item as &dyn Comparable).collect())
    }
}

impl<T, const N: usize> Comparable for [T; N]
where
    T: Comparable,
{
    fn classify(&self) -> Shape<'_> {
        Shape::Collection(self.iter().map(|item| item as &dyn Comparable).collect())
    }
}

impl<T> Comparable for VecDeque<T>
where
    T: Comparable,
{
    fn classify(&self) -> Shape<'_> {
        Shape::Collection(self.iter().map(|item| item as &dyn Comparable).collect())
    }
}

// BTreeSet iterates in sorted order, so positional comparison is
// deterministic. Hash-based containers get no implementation.
impl<T> Comparable for BTreeSet<T>
where
    T: Comparable,
{
    fn classify(&self) -> Shape<'_> {
        Shape::Collection(self.iter().map(|item| item as &dyn Comparable).collect())
    }
}

/// Strips module paths from a compile-time type name, including inside
/// generic arguments.
pub(crate) fn short_type_name(full: &str) -> String {
    fn last_segment(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }

    let mut result = String::with_capacity(full.len());
    let mut start = 0;
    for (idx, ch) in full.char_indices() {
        if matches!(ch, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&') {
            result.push_str(last_segment(&full[start..idx]));
            result.push(ch);
            start = idx + ch.len_utf8();
        }
    }
    result.push_str(last_segment(&full[start..]));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_classify_by_signedness() {
        assert!(matches!(3_i32.classify(), Shape::Scalar(Scalar::Int(3))));
        assert!(matches!(3_u32.classify(), Shape::Scalar(Scalar::Uint(3))));
        assert!(matches!((-7_i64).classify(), Shape::Scalar(Scalar::Int(-7))));
    }

    #[test]
    fn text_types_share_one_label() {
        let owned = String::from("hello");
        let borrowed = "hello";
        let cow: Cow<'_, str> = Cow::Borrowed("hello");
        assert_eq!(owned.type_name(), "str");
        assert_eq!(borrowed.type_name(), "str");
        assert_eq!(cow.type_name(), "str");
    }

    #[test]
    fn option_none_is_void_and_some_is_transparent() {
        assert!(matches!(None::<i64>.classify(), Shape::Void));
        assert!(matches!(Some(5_i64).classify(), Shape::Scalar(Scalar::Int(5))));
        assert_eq!(Some(5_i64).type_name(), 5_i64.type_name());
    }

    #[test]
    fn sequences_classify_as_collections() {
        let items = vec![1_i64, 2, 3];
        let Shape::Collection(elements) = items.classify() else {
            panic!("expected a collection shape");
        };
        assert_eq!(elements.len(), 3);

        let fixed = [true, false];
        assert!(matches!(fixed.classify(), Shape::Collection(_)));
    }

    #[test]
    fn btree_set_iterates_in_sorted_order() {
        let set: BTreeSet<i64> = [3, 1, 2].into_iter().collect();
        let Shape::Collection(elements) = set.classify() else {
            panic!("expected a collection shape");
        };
        assert!(matches!(elements[0].classify(), Shape::Scalar(Scalar::Int(1))));
        assert!(matches!(elements[2].classify(), Shape::Scalar(Scalar::Int(3))));
    }

    #[test]
    fn symbols_compare_by_variant_name() {
        assert_eq!(Scalar::Symbol("Get"), Scalar::Symbol("Get"));
        assert_ne!(Scalar::Symbol("Get"), Scalar::Symbol("Post"));
    }

    #[test]
    fn scalar_display_is_bare() {
        assert_eq!(Scalar::Bool(true).to_string(), "true");
        assert_eq!(Scalar::Char('x').to_string(), "x");
        assert_eq!(Scalar::Int(-4).to_string(), "-4");
        assert_eq!(Scalar::Float(1.5).to_string(), "1.5");
        assert_eq!(Scalar::Symbol("Get").to_string(), "Get");
    }

    #[test]
    fn integral_floats_keep_a_decimal_point() {
        assert_eq!(Scalar::Float(1.0).to_string(), "1.0");
        assert_eq!(Scalar::Float(-3.0).to_string(), "-3.0");
        assert_eq!(Scalar::Float(0.25).to_string(), "0.25");
        assert_eq!(Scalar::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Scalar::Float(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn short_type_name_strips_module_paths() {
        assert_eq!(short_type_name("alloc::string::String"), "String");
        assert_eq!(short_type_name("alloc::vec::Vec<alloc::string::String>"), "Vec<String>");
        assert_eq!(short_type_name("i64"), "i64");
        assert_eq!(short_type_name("[i32; 3]"), "[i32; 3]");
        assert_eq!(
            short_type_name("std::collections::BTreeSet<core::option::Option<u8>>"),
            "BTreeSet<Option<u8>>"
        );
    }
}
