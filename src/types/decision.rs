use std::fmt;

use super::error::ShapeError;
use super::row::{Row, RowKind, RunMode};
use super::value::Value;
use crate::diagnostics;

/// The result of a successful [`Decision::run`].
///
/// `First` and `Last` runs produce a single result, `Any` and `Take` runs a
/// list. A run that matches nothing produces `None` instead, so an empty
/// `Multiple` only ever comes from `Take(0)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Decided<T> {
    Single(T),
    Multiple(Vec<T>),
}

impl<T> Decided<T> {
    #[must_use]
    pub fn single(self) -> Option<T> {
        match self {
            Decided::Single(v) => Some(v),
            Decided::Multiple(_) => None,
        }
    }

    #[must_use]
    pub fn multiple(self) -> Option<Vec<T>> {
        match self {
            Decided::Multiple(v) => Some(v),
            Decided::Single(_) => None,
        }
    }

    /// Flatten into a list; a single result becomes a one-element list.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Decided::Single(v) => vec![v],
            Decided::Multiple(v) => v,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Decided<U> {
        match self {
            Decided::Single(v) => Decided::Single(f(v)),
            Decided::Multiple(v) => Decided::Multiple(v.into_iter().map(f).collect()),
        }
    }
}

/// A decision table: an ordered list of conditional rows evaluated under a
/// selectable [`RunMode`].
///
/// Every row in a table is of the same kind, either value rows or function
/// rows. A table that is empty or mixes kinds is rejected by
/// [`try_of`](Self::try_of); [`of`](Self::of) reports it on the diagnostic
/// channel and returns a broken table whose runs produce nothing.
///
/// # Example
///
/// ```
/// use booltable::{Decision, Row, RunMode};
///
/// let age = 30;
/// let tier = Decision::of(vec![
///     Row::value(age < 13, "child"),
///     Row::value(age < 20, "teen"),
///     Row::value(age >= 20, "adult"),
/// ]);
///
/// assert_eq!(tier.first(), Some("adult"));
/// assert_eq!(tier.run(RunMode::Any).and_then(|d| d.multiple()), Some(vec!["adult"]));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Decision<T> {
    rows: Vec<Row<T>>,
    kind: Option<RowKind>,
}

impl<T> Decision<T> {
    /// Validate and wrap `rows`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::EmptyTable`] for an empty table and
    /// [`ShapeError::MixedRows`] when rows of both kinds are present.
    pub fn try_of(rows: impl IntoIterator<Item = Row<T>>) -> Result<Self, ShapeError> {
        let rows: Vec<Row<T>> = rows.into_iter().collect();
        let kind = classify(&rows)?;
        Ok(Self {
            rows,
            kind: Some(kind),
        })
    }

    /// Validate and wrap `rows`, degrading to a broken table on bad input.
    pub fn of(rows: impl IntoIterator<Item = Row<T>>) -> Self
    where
        T: fmt::Debug,
    {
        let rows: Vec<Row<T>> = rows.into_iter().collect();
        match classify(&rows) {
            Ok(kind) => Self {
                rows,
                kind: Some(kind),
            },
            Err(_) => {
                diagnostics::decision_type_error(&rows);
                Self::broken()
            }
        }
    }

    fn broken() -> Self {
        Self {
            rows: Vec::new(),
            kind: None,
        }
    }

    /// Evaluate the table. See [`RunMode`] for the selection rules.
    #[must_use]
    pub fn run(&self, mode: RunMode) -> Option<Decided<T>>
    where
        T: Clone,
    {
        crate::decide::decide(&self.rows, self.kind, mode)
    }

    /// Result of the first row whose condition holds.
    #[must_use]
    pub fn first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.run(RunMode::First).and_then(Decided::single)
    }

    /// Result of the last row whose condition holds.
    #[must_use]
    pub fn last(&self) -> Option<T>
    where
        T: Clone,
    {
        self.run(RunMode::Last).and_then(Decided::single)
    }

    /// Results of every row whose condition holds, in table order.
    #[must_use]
    pub fn any(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.run(RunMode::Any).and_then(Decided::multiple)
    }

    /// Results of at most the first `n` rows whose condition holds.
    #[must_use]
    pub fn take(&self, n: usize) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.run(RunMode::Take(n)).and_then(Decided::multiple)
    }

    /// Transform the rows. The result is validated like [`of`](Self::of).
    pub fn map(self, f: impl FnOnce(Vec<Row<T>>) -> Vec<Row<T>>) -> Self
    where
        T: fmt::Debug,
    {
        Self::of(f(self.rows))
    }

    /// Hand the rows to a wrapper-producing function.
    pub fn chain<R>(self, f: impl FnOnce(Vec<Row<T>>) -> R) -> R {
        f(self.rows)
    }

    /// Apply a function held in another wrapper. An empty wrapper leaves the
    /// table unchanged.
    pub fn ap<F>(self, wrapped: Option<F>) -> Self
    where
        F: FnOnce(Vec<Row<T>>) -> Vec<Row<T>>,
        T: fmt::Debug,
    {
        match wrapped {
            Some(f) => self.map(f),
            None => self,
        }
    }

    /// Append the other table's rows, keeping order.
    pub fn concat(self, other: Decision<T>) -> Self
    where
        T: fmt::Debug,
    {
        let mut rows = self.rows;
        rows.extend(other.rows);
        Self::of(rows)
    }

    #[must_use]
    pub fn head(&self) -> Option<&Row<T>> {
        self.rows.first()
    }

    #[must_use]
    pub fn tail(&self) -> Option<&Row<T>> {
        self.rows.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// The kind shared by every row, or `None` for a broken table.
    #[must_use]
    pub fn kind(&self) -> Option<RowKind> {
        self.kind
    }

    #[must_use]
    pub fn is_broken(&self) -> bool {
        self.kind.is_none()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    /// Unwrap the rows.
    #[must_use]
    pub fn join(self) -> Vec<Row<T>> {
        self.rows
    }

    #[must_use]
    pub fn inspect(&self) -> String
    where
        T: fmt::Debug,
    {
        self.to_string()
    }
}

impl Decision<Value> {
    /// Build a value-row table from an untyped list of `[condition, value]`
    /// pairs. Conditions are coerced with [`Value::truthy`]. Any other shape
    /// is reported on the diagnostic channel and yields a broken table.
    pub fn of_value(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::try_from(&value).unwrap_or_else(|_| {
            diagnostics::decision_type_error(&value);
            Self::broken()
        })
    }
}

fn classify<T>(rows: &[Row<T>]) -> Result<RowKind, ShapeError> {
    let expected = rows.first().ok_or(ShapeError::EmptyTable)?.kind();
    match rows.iter().position(|row| row.kind() != expected) {
        Some(index) => Err(ShapeError::MixedRows {
            index,
            expected,
            found: rows[index].kind(),
        }),
        None => Ok(expected),
    }
}

impl TryFrom<&Value> for Decision<Value> {
    type Error = ShapeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let items = value
            .as_list()
            .ok_or(ShapeError::NotAList { found: value.kind() })?;
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item.as_list() {
                Some([condition, result]) => Ok(Row::value(condition.truthy(), result.clone())),
                _ => Err(ShapeError::BadRow {
                    index,
                    found: item.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_of(rows)
    }
}

impl TryFrom<Value> for Decision<Value> {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl<T: fmt::Debug> fmt::Display for Decision<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_broken() {
            write!(f, "Decision(<broken>)")
        } else {
            write!(f, "Decision({:?})", self.rows)
        }
    }
}
