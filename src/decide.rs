use crate::{Decided, Row, RowKind, RunMode};

/// One of the eight ways a table can be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    CallFirst,
    CallLast,
    CallAny,
    CallTake(usize),
    ValueFirst,
    ValueLast,
    ValueAny,
    ValueTake(usize),
}

pub(crate) fn select(kind: RowKind, mode: RunMode) -> Strategy {
    match (kind, mode) {
        (RowKind::Call, RunMode::First) => Strategy::CallFirst,
        (RowKind::Call, RunMode::Last) => Strategy::CallLast,
        (RowKind::Call, RunMode::Any) => Strategy::CallAny,
        (RowKind::Call, RunMode::Take(n)) => Strategy::CallTake(n),
        (RowKind::Value, RunMode::First) => Strategy::ValueFirst,
        (RowKind::Value, RunMode::Last) => Strategy::ValueLast,
        (RowKind::Value, RunMode::Any) => Strategy::ValueAny,
        (RowKind::Value, RunMode::Take(n)) => Strategy::ValueTake(n),
    }
}

/// Evaluate `rows` under `mode`.
///
/// `kind` is `None` for a table that failed validation. It was reported when
/// it was built, so running it silently produces nothing.
pub(crate) fn decide<T: Clone>(
    rows: &[Row<T>],
    kind: Option<RowKind>,
    mode: RunMode,
) -> Option<Decided<T>> {
    let kind = kind?;

    match select(kind, mode) {
        Strategy::CallFirst => first(rows, invoked),
        Strategy::CallLast => last(rows, invoked),
        Strategy::CallAny => any(rows, invoked),
        Strategy::CallTake(n) => take(rows, n, invoked),
        Strategy::ValueFirst => first(rows, stored),
        Strategy::ValueLast => last(rows, stored),
        Strategy::ValueAny => any(rows, stored),
        Strategy::ValueTake(n) => take(rows, n, stored),
    }
}

fn stored<T: Clone>(row: &Row<T>) -> Option<T> {
    match row {
        Row::Value { value, .. } => Some(value.clone()),
        Row::Call { .. } => None,
    }
}

fn invoked<T>(row: &Row<T>) -> Option<T> {
    match row {
        Row::Call { call, .. } => Some(call()),
        Row::Value { .. } => None,
    }
}

fn first<T>(rows: &[Row<T>], extract: fn(&Row<T>) -> Option<T>) -> Option<Decided<T>> {
    rows.iter()
        .find(|row| row.condition())
        .and_then(extract)
        .map(Decided::Single)
}

fn last<T>(rows: &[Row<T>], extract: fn(&Row<T>) -> Option<T>) -> Option<Decided<T>> {
    rows.iter()
        .rev()
        .find(|row| row.condition())
        .and_then(extract)
        .map(Decided::Single)
}

fn any<T>(rows: &[Row<T>], extract: fn(&Row<T>) -> Option<T>) -> Option<Decided<T>> {
    take(rows, usize::MAX, extract)
}

// No true rows is "no match", distinct from a match that takes zero rows.
fn take<T>(rows: &[Row<T>], n: usize, extract: fn(&Row<T>) -> Option<T>) -> Option<Decided<T>> {
    let mut matched = rows.iter().filter(|row| row.condition()).peekable();
    matched.peek()?;
    Some(Decided::Multiple(
        matched.take(n).filter_map(extract).collect(),
    ))
}
