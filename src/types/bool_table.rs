use std::fmt;

use super::error::ShapeError;
use super::value::Value;
use crate::diagnostics;

/// Label of the synthetic row that stands in for a rejected table.
pub const DEGRADED_LABEL: &str = "<invalid BoolTable>";

/// How a table that failed validation answers queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DegradePolicy {
    /// Every query answers `true`.
    #[default]
    FailOpen,
    /// Every query answers `false`.
    FailClosed,
}

impl DegradePolicy {
    #[must_use]
    pub fn answer(self) -> bool {
        matches!(self, DegradePolicy::FailOpen)
    }

    /// `FailClosed` if either side is.
    #[must_use]
    pub fn stricter(self, other: DegradePolicy) -> DegradePolicy {
        if self == DegradePolicy::FailClosed || other == DegradePolicy::FailClosed {
            DegradePolicy::FailClosed
        } else {
            DegradePolicy::FailOpen
        }
    }
}

/// A lookup table mapping condition labels to boolean outcomes.
///
/// ```
/// use booltable::BoolTable;
///
/// let age = 30;
/// let checks = BoolTable::of([
///     ("is adult", age >= 18),
///     ("is senior", age >= 65),
/// ]);
///
/// assert!(checks.query("is adult"));
/// assert!(!checks.q("is senior"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBoolTable"))]
#[must_use]
pub struct BoolTable {
    rows: Vec<(String, Value)>,
    policy: DegradePolicy,
    degraded: bool,
}

impl BoolTable {
    /// Validate and wrap `rows` with the default [`DegradePolicy`].
    pub fn of<K, V>(rows: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::of_with_policy(rows, DegradePolicy::default())
    }

    /// Validate and wrap `rows`. An empty table is reported on the
    /// diagnostic channel and replaced by a degraded table answering every
    /// query according to `policy`.
    pub fn of_with_policy<K, V>(
        rows: impl IntoIterator<Item = (K, V)>,
        policy: DegradePolicy,
    ) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let rows = collect(rows);
        if rows.is_empty() {
            diagnostics::bool_table_type_error(&rows);
            return Self::degraded(policy);
        }
        Self {
            rows,
            policy,
            degraded: false,
        }
    }

    /// Validate and wrap `rows`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::EmptyTable`] if `rows` is empty.
    pub fn try_of<K, V>(rows: impl IntoIterator<Item = (K, V)>) -> Result<Self, ShapeError>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let rows = collect(rows);
        if rows.is_empty() {
            return Err(ShapeError::EmptyTable);
        }
        Ok(Self {
            rows,
            policy: DegradePolicy::default(),
            degraded: false,
        })
    }

    /// Build from an untyped list of `[label, outcome]` pairs with the
    /// default [`DegradePolicy`].
    pub fn of_value(value: impl Into<Value>) -> Self {
        Self::of_value_with_policy(value, DegradePolicy::default())
    }

    pub fn of_value_with_policy(value: impl Into<Value>, policy: DegradePolicy) -> Self {
        let value = value.into();
        match Self::try_from(&value) {
            Ok(table) => Self { policy, ..table },
            Err(_) => {
                diagnostics::bool_table_type_error(&value);
                Self::degraded(policy)
            }
        }
    }

    fn degraded(policy: DegradePolicy) -> Self {
        Self {
            rows: vec![(DEGRADED_LABEL.to_owned(), Value::Bool(policy.answer()))],
            policy,
            degraded: true,
        }
    }

    /// Outcome of the first row labelled `label`, coerced with
    /// [`Value::truthy`]. A missing label is reported and answers `false`,
    /// unless the table is degraded, in which case it answers per the
    /// [`DegradePolicy`].
    #[must_use]
    pub fn query(&self, label: &str) -> bool {
        match self.rows.iter().find(|(l, _)| l == label) {
            Some((_, outcome)) => outcome.truthy(),
            None if self.degraded => self.policy.answer(),
            None => {
                diagnostics::condition_not_found(label);
                false
            }
        }
    }

    /// Alias for [`query`](Self::query).
    #[must_use]
    pub fn q(&self, label: &str) -> bool {
        self.query(label)
    }

    /// Transform the rows. The result is validated like [`of`](Self::of)
    /// and keeps this table's policy. A degraded table stays degraded.
    pub fn map(self, f: impl FnOnce(Vec<(String, Value)>) -> Vec<(String, Value)>) -> Self {
        let mut table = Self::of_with_policy(f(self.rows), self.policy);
        table.degraded |= self.degraded;
        table
    }

    /// Hand the rows to a wrapper-producing function.
    pub fn chain<R>(self, f: impl FnOnce(Vec<(String, Value)>) -> R) -> R {
        f(self.rows)
    }

    /// Apply a function held in another wrapper. An empty wrapper leaves the
    /// table unchanged.
    pub fn ap<F>(self, wrapped: Option<F>) -> Self
    where
        F: FnOnce(Vec<(String, Value)>) -> Vec<(String, Value)>,
    {
        match wrapped {
            Some(f) => self.map(f),
            None => self,
        }
    }

    /// Append the other table's rows.
    ///
    /// The result is degraded if either side is, and takes the stricter of
    /// the two policies. Labels present in either side still answer from
    /// their rows; only missing labels fall back to the policy.
    pub fn concat(mut self, other: BoolTable) -> Self {
        self.rows.extend(other.rows);
        self.degraded |= other.degraded;
        self.policy = self.policy.stricter(other.policy);
        self
    }

    #[must_use]
    pub fn head(&self) -> Option<(&str, &Value)> {
        self.rows.first().map(|(l, v)| (l.as_str(), v))
    }

    #[must_use]
    pub fn tail(&self) -> Option<(&str, &Value)> {
        self.rows.last().map(|(l, v)| (l.as_str(), v))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    #[must_use]
    pub fn policy(&self) -> DegradePolicy {
        self.policy
    }

    /// Unwrap the rows.
    #[must_use]
    pub fn join(self) -> Vec<(String, Value)> {
        self.rows
    }

    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

fn collect<K, V>(rows: impl IntoIterator<Item = (K, V)>) -> Vec<(String, Value)>
where
    K: Into<String>,
    V: Into<Value>,
{
    rows.into_iter()
        .map(|(label, outcome)| (label.into(), outcome.into()))
        .collect()
}

impl TryFrom<&Value> for BoolTable {
    type Error = ShapeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let items = value
            .as_list()
            .ok_or(ShapeError::NotAList { found: value.kind() })?;
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item.as_list() {
                Some([label, outcome]) => label
                    .as_str()
                    .map(|l| (l.to_owned(), outcome.clone()))
                    .ok_or(ShapeError::BadLabel { found: label.kind() }),
                _ => Err(ShapeError::BadRow {
                    index,
                    found: item.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_of(rows)
    }
}

/// Serialized form of a [`BoolTable`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBoolTable {
    rows: Vec<(String, Value)>,
    #[serde(default)]
    policy: DegradePolicy,
    #[serde(default)]
    degraded: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBoolTable> for BoolTable {
    type Error = ShapeError;

    fn try_from(raw: RawBoolTable) -> Result<Self, Self::Error> {
        let table = Self::try_of(raw.rows)?;
        Ok(Self {
            policy: raw.policy,
            degraded: raw.degraded,
            ..table
        })
    }
}

impl TryFrom<Value> for BoolTable {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl fmt::Display for BoolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoolTable([")?;
        for (i, (label, outcome)) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{label}\": {outcome}")?;
        }
        write!(f, "])")
    }
}
