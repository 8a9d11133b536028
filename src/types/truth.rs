use std::collections::HashSet;
use std::fmt;

use super::error::ShapeError;
use super::value::Value;
use crate::diagnostics;

/// A sequence of booleans with aggregate tests and fork dispatch.
///
/// ```
/// use booltable::Truth;
///
/// let t = Truth::of([true, true, true, false]);
/// assert!(!t.and());
/// assert!(t.or());
/// assert!(t.xor());
/// assert!(!t.nor());
///
/// let verdict = t.fork_and(|| "denied", || "allowed");
/// assert_eq!(verdict, "denied");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Truth {
    values: Vec<bool>,
}

impl Truth {
    pub fn of(values: impl IntoIterator<Item = bool>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Build from an untyped value. Anything other than a list is reported
    /// on the diagnostic channel and replaced by `Truth([false])`.
    /// List elements are coerced with [`Value::truthy`].
    pub fn of_value(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::try_from(&value).unwrap_or_else(|_| {
            diagnostics::decision_type_error(&value);
            Self::of([false])
        })
    }

    /// True iff the sequence is non-empty and every element is true.
    #[must_use]
    pub fn and(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(|&b| b)
    }

    /// True iff at least one element is true.
    #[must_use]
    pub fn or(&self) -> bool {
        self.values.iter().any(|&b| b)
    }

    /// True iff the sequence is non-empty and every element is false.
    #[must_use]
    pub fn nor(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(|&b| !b)
    }

    /// True iff the elements are not all equal.
    ///
    /// This is not single-true exclusive or: `[true, true, false]` is `true`.
    #[must_use]
    pub fn xor(&self) -> bool {
        self.values.iter().collect::<HashSet<_>>().len() > 1
    }

    /// Invoke `on_true` if [`and`](Self::and) holds, otherwise `on_false`.
    pub fn fork_and<R>(&self, on_false: impl FnOnce() -> R, on_true: impl FnOnce() -> R) -> R {
        fork(self.and(), on_false, on_true)
    }

    pub fn fork_or<R>(&self, on_false: impl FnOnce() -> R, on_true: impl FnOnce() -> R) -> R {
        fork(self.or(), on_false, on_true)
    }

    pub fn fork_xor<R>(&self, on_false: impl FnOnce() -> R, on_true: impl FnOnce() -> R) -> R {
        fork(self.xor(), on_false, on_true)
    }

    pub fn fork_nor<R>(&self, on_false: impl FnOnce() -> R, on_true: impl FnOnce() -> R) -> R {
        fork(self.nor(), on_false, on_true)
    }

    /// Invoke `on_false` only if [`and`](Self::and) does not hold.
    pub fn fork_and_l<R>(&self, on_false: impl FnOnce() -> R) -> Option<R> {
        (!self.and()).then(on_false)
    }

    /// Invoke `on_true` only if [`and`](Self::and) holds.
    pub fn fork_and_r<R>(&self, on_true: impl FnOnce() -> R) -> Option<R> {
        self.and().then(on_true)
    }

    pub fn fork_or_l<R>(&self, on_false: impl FnOnce() -> R) -> Option<R> {
        (!self.or()).then(on_false)
    }

    pub fn fork_or_r<R>(&self, on_true: impl FnOnce() -> R) -> Option<R> {
        self.or().then(on_true)
    }

    pub fn fork_xor_l<R>(&self, on_false: impl FnOnce() -> R) -> Option<R> {
        (!self.xor()).then(on_false)
    }

    pub fn fork_xor_r<R>(&self, on_true: impl FnOnce() -> R) -> Option<R> {
        self.xor().then(on_true)
    }

    pub fn fork_nor_l<R>(&self, on_false: impl FnOnce() -> R) -> Option<R> {
        (!self.nor()).then(on_false)
    }

    pub fn fork_nor_r<R>(&self, on_true: impl FnOnce() -> R) -> Option<R> {
        self.nor().then(on_true)
    }

    /// Transform the contained sequence.
    pub fn map(self, f: impl FnOnce(Vec<bool>) -> Vec<bool>) -> Self {
        Self::of(f(self.values))
    }

    /// Hand the contained sequence to a wrapper-producing function.
    pub fn chain<R>(self, f: impl FnOnce(Vec<bool>) -> R) -> R {
        f(self.values)
    }

    /// Apply a function held in another wrapper. An empty wrapper leaves the
    /// sequence unchanged.
    pub fn ap<F>(self, wrapped: Option<F>) -> Self
    where
        F: FnOnce(Vec<bool>) -> Vec<bool>,
    {
        match wrapped {
            Some(f) => self.map(f),
            None => self,
        }
    }

    /// Append the other sequence to this one.
    pub fn concat(mut self, other: Truth) -> Self {
        self.values.extend(other.values);
        self
    }

    #[must_use]
    pub fn head(&self) -> Option<bool> {
        self.values.first().copied()
    }

    #[must_use]
    pub fn tail(&self) -> Option<bool> {
        self.values.last().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Borrow the contained sequence.
    #[must_use]
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Unwrap the contained sequence.
    #[must_use]
    pub fn join(self) -> Vec<bool> {
        self.values
    }

    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

fn fork<R>(result: bool, on_false: impl FnOnce() -> R, on_true: impl FnOnce() -> R) -> R {
    if result { on_true() } else { on_false() }
}

impl FromIterator<bool> for Truth {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl TryFrom<&Value> for Truth {
    type Error = ShapeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let items = value
            .as_list()
            .ok_or(ShapeError::NotAList { found: value.kind() })?;
        Ok(items.iter().map(Value::truthy).collect())
    }
}

impl TryFrom<Value> for Truth {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Truth({:?})", self.values)
    }
}
