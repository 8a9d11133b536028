use booltable::{Row, Truth};
use proptest::prelude::*;

/// A value-row table with at least one row.
pub fn arb_value_rows() -> impl Strategy<Value = Vec<Row<i64>>> {
    prop::collection::vec((any::<bool>(), -1000_i64..1000), 1..24).prop_map(|rows| {
        rows.into_iter()
            .map(|(condition, value)| Row::value(condition, value))
            .collect::<Vec<_>>()
    })
}

/// A function-row table paired with the plain conditions and arguments it
/// was built from. Every function doubles its argument.
pub fn arb_call_rows() -> impl Strategy<Value = (Vec<Row<i64>>, Vec<(bool, i64)>)> {
    prop::collection::vec((any::<bool>(), -1000_i64..1000), 1..24).prop_map(|plain| {
        let rows: Vec<Row<i64>> = plain
            .iter()
            .map(|&(condition, arg)| Row::call(condition, |x: i64| x * 2, arg))
            .collect();
        (rows, plain)
    })
}

pub fn arb_truth() -> impl Strategy<Value = Truth> {
    prop::collection::vec(any::<bool>(), 0..32).prop_map(Truth::of)
}

pub fn arb_take() -> impl Strategy<Value = usize> {
    0_usize..30
}
