use std::fmt;
use std::sync::Arc;

/// A deferred call captured by a function row: the function together with
/// the argument it will be invoked with.
pub type Thunk<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// One conditional row of a [`Decision`](super::Decision) table.
///
/// A value row yields its stored value when selected. A function row
/// stores a function and its argument and only invokes the function when
/// the row is selected by a run.
pub enum Row<T> {
    Value { condition: bool, value: T },
    Call { condition: bool, call: Thunk<T> },
}

/// The explicit kind tag of a [`Row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Value,
    Call,
}

impl<T> Row<T> {
    /// A `(condition, value)` row.
    pub fn value(condition: bool, value: T) -> Self {
        Row::Value { condition, value }
    }

    /// A `(condition, function, argument)` row. `f(arg)` runs each time the
    /// row is selected, never while it is not.
    pub fn call<A, F>(condition: bool, f: F, arg: A) -> Self
    where
        F: Fn(A) -> T + Send + Sync + 'static,
        A: Clone + Send + Sync + 'static,
        T: 'static,
    {
        Row::Call {
            condition,
            call: Arc::new(move || f(arg.clone())),
        }
    }

    #[must_use]
    pub fn condition(&self) -> bool {
        match self {
            Row::Value { condition, .. } | Row::Call { condition, .. } => *condition,
        }
    }

    #[must_use]
    pub fn kind(&self) -> RowKind {
        match self {
            Row::Value { .. } => RowKind::Value,
            Row::Call { .. } => RowKind::Call,
        }
    }
}

impl<T: Clone> Clone for Row<T> {
    fn clone(&self) -> Self {
        match self {
            Row::Value { condition, value } => Row::Value {
                condition: *condition,
                value: value.clone(),
            },
            Row::Call { condition, call } => Row::Call {
                condition: *condition,
                call: Arc::clone(call),
            },
        }
    }
}

/// Function rows compare equal only when they share the same captured call.
impl<T: PartialEq> PartialEq for Row<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Row::Value {
                    condition: c1,
                    value: v1,
                },
                Row::Value {
                    condition: c2,
                    value: v2,
                },
            ) => c1 == c2 && v1 == v2,
            (
                Row::Call {
                    condition: c1,
                    call: f1,
                },
                Row::Call {
                    condition: c2,
                    call: f2,
                },
            ) => c1 == c2 && Arc::ptr_eq(f1, f2),
            _ => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Row<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Row::Value { condition, value } => {
                f.debug_tuple("Value").field(condition).field(value).finish()
            }
            Row::Call { condition, .. } => f
                .debug_tuple("Call")
                .field(condition)
                .field(&format_args!("<fn>"))
                .finish(),
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKind::Value => write!(f, "value"),
            RowKind::Call => write!(f, "function"),
        }
    }
}

/// Which rows a [`Decision::run`](super::Decision::run) selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunMode {
    /// The first row whose condition holds.
    #[default]
    First,
    /// The last row whose condition holds.
    Last,
    /// Every row whose condition holds, in table order.
    Any,
    /// At most the first `n` rows whose condition holds.
    Take(usize),
}

impl From<usize> for RunMode {
    fn from(n: usize) -> Self {
        RunMode::Take(n)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn invoke<T>(row: &Row<T>) -> Option<T> {
        match row {
            Row::Call { call, .. } => Some(call()),
            Row::Value { .. } => None,
        }
    }

    #[test]
    fn value_row_holds_value() {
        let row = Row::value(true, 3);
        assert!(row.condition());
        assert_eq!(row.kind(), RowKind::Value);
        assert!(matches!(row, Row::Value { value: 3, .. }));
    }

    #[test]
    fn call_row_invokes_with_argument() {
        let row = Row::call(false, |x: i64| x * 3, 3_i64);
        assert!(!row.condition());
        assert_eq!(row.kind(), RowKind::Call);
        assert_eq!(invoke(&row), Some(9));
    }

    #[test]
    fn call_row_is_lazy() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let row = Row::call(
            true,
            |x: usize| CALLS.fetch_add(x, Ordering::SeqCst),
            1_usize,
        );
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
        invoke(&row);
        invoke(&row);
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn cloned_call_rows_are_equal() {
        let row = Row::call(true, |x: i64| x + 1, 2_i64);
        let copy = row.clone();
        assert_eq!(row, copy);
        assert_ne!(row, Row::call(true, |x: i64| x + 1, 2_i64));
    }

    #[test]
    fn debug_hides_function() {
        let row: Row<i64> = Row::call(true, |x: i64| x, 1_i64);
        assert_eq!(format!("{row:?}"), "Call(true, <fn>)");
        assert_eq!(format!("{:?}", Row::value(false, 2)), "Value(false, 2)");
    }

    #[test]
    fn run_mode_defaults_to_first() {
        assert_eq!(RunMode::default(), RunMode::First);
        assert_eq!(RunMode::from(2), RunMode::Take(2));
    }

    #[test]
    fn kind_display() {
        assert_eq!(RowKind::Value.to_string(), "value");
        assert_eq!(RowKind::Call.to_string(), "function");
    }
}
