//! Path-based lookup into nested arrays and objects.
use std::borrow::Cow;

use crate::{JsonValue, Map, Number};

/// A single step of a path: an array index or an object key.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Step<'a> {
    /// Selects an array element.
    Index(usize),
    /// Selects an object member.
    Key(Cow<'a, str>),
}

impl From<usize> for Step<'_> {
    fn from(value: usize) -> Self {
        Step::Index(value)
    }
}

impl<'a> From<&'a str> for Step<'a> {
    fn from(value: &'a str) -> Self {
        Step::Key(Cow::Borrowed(value))
    }
}

impl From<String> for Step<'_> {
    fn from(value: String) -> Self {
        Step::Key(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Step<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Step::Key(value)
    }
}

/// Builds an array of [`Step`]s from indices and keys.
///
/// ```
/// use jsonette::{from_str, path};
///
/// let value = from_str(r#"{"a":[1,{"b":2}]}"#).unwrap();
/// assert_eq!(value.dig_path(&path!["a", 1, "b"]).unwrap().render(), "2");
/// ```
#[macro_export]
macro_rules! path {
    ($($step:expr),* $(,)?) => {
        [$($crate::Step::from($step)),*]
    };
}

impl JsonValue {
    /// Follows `first` and then every step of `rest`.
    ///
    /// An index step only applies to an array and a key step only to an object. Returns `None`
    /// as soon as a step is out of bounds, missing, or applied to the wrong kind of value.
    ///
    /// ```
    /// use jsonette::{from_str, path};
    ///
    /// let value = from_str(r#"{"a":[1,{"b":2}]}"#).unwrap();
    /// assert!(value.dig("a", &path![1, "b"]).is_some());
    /// assert!(value.dig("a", &path!["x"]).is_none());
    /// ```
    #[must_use]
    pub fn dig<'s>(&self, first: impl Into<Step<'s>>, rest: &[Step<'_>]) -> Option<&JsonValue> {
        self.step(&first.into())?.dig_path(rest)
    }

    /// Follows every step of `path`. An empty path returns `self`.
    #[must_use]
    pub fn dig_path(&self, path: &[Step<'_>]) -> Option<&JsonValue> {
        path.iter().try_fold(self, JsonValue::step)
    }

    #[must_use]
    pub fn dig_null<'s>(&self, first: impl Into<Step<'s>>, rest: &[Step<'_>]) -> Option<()> {
        self.dig(first, rest).and_then(JsonValue::as_null)
    }

    #[must_use]
    pub fn dig_bool<'s>(&self, first: impl Into<Step<'s>>, rest: &[Step<'_>]) -> Option<bool> {
        self.dig(first, rest).and_then(JsonValue::as_bool)
    }

    #[must_use]
    pub fn dig_number<'s>(
        &self,
        first: impl Into<Step<'s>>,
        rest: &[Step<'_>],
    ) -> Option<&Number> {
        self.dig(first, rest).and_then(JsonValue::as_number)
    }

    #[must_use]
    pub fn dig_str<'s>(&self, first: impl Into<Step<'s>>, rest: &[Step<'_>]) -> Option<&str> {
        self.dig(first, rest).and_then(JsonValue::as_str)
    }

    #[must_use]
    pub fn dig_array<'s>(
        &self,
        first: impl Into<Step<'s>>,
        rest: &[Step<'_>],
    ) -> Option<&[JsonValue]> {
        self.dig(first, rest).and_then(JsonValue::as_array)
    }

    #[must_use]
    pub fn dig_object<'s>(&self, first: impl Into<Step<'s>>, rest: &[Step<'_>]) -> Option<&Map> {
        self.dig(first, rest).and_then(JsonValue::as_object)
    }

    fn step(&self, step: &Step<'_>) -> Option<&JsonValue> {
        match (self, step) {
            (JsonValue::Array(items), Step::Index(idx)) => items.get(*idx),
            (JsonValue::Object(map), Step::Key(key)) => map.get(key.as_ref()),
            _ => None,
        }
    }
}
