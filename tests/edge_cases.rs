use booltable::{BoolTable, Decided, Decision, Row, RowKind, RunMode, Truth, Value};

#[test]
fn single_row_table() {
    let d = Decision::of(vec![Row::value(true, "only")]);
    assert_eq!(d.first(), d.last());
    assert_eq!(d.any(), Some(vec!["only"]));
    assert_eq!(d.head(), d.tail());
}

#[test]
fn every_row_true() {
    let d = Decision::of((0..5).map(|i| Row::value(true, i)).collect::<Vec<_>>());
    assert_eq!(d.first(), Some(0));
    assert_eq!(d.last(), Some(4));
    assert_eq!(d.any(), Some(vec![0, 1, 2, 3, 4]));
}

#[test]
fn large_table_last_row_only() {
    let rows: Vec<_> = (0..1000).map(|i| Row::value(i == 999, i)).collect();
    let d = Decision::of(rows);
    assert_eq!(d.first(), Some(999));
    assert_eq!(d.last(), Some(999));
    assert_eq!(d.take(10), Some(vec![999]));
}

#[test]
fn take_zero_distinguishes_match_from_no_match() {
    let matched = Decision::of(vec![Row::value(true, 1)]);
    assert_eq!(matched.run(RunMode::Take(0)), Some(Decided::Multiple(vec![])));

    let unmatched = Decision::of(vec![Row::value(false, 1)]);
    assert_eq!(unmatched.run(RunMode::Take(0)), None);
}

#[test]
fn unit_values_are_distinct_from_no_match() {
    let d = Decision::of(vec![Row::value(true, ())]);
    assert_eq!(d.first(), Some(()));
}

#[test]
fn option_values_nest() {
    let d = Decision::of(vec![Row::value(true, None::<i32>), Row::value(true, Some(2))]);
    assert_eq!(d.first(), Some(None));
    assert_eq!(d.last(), Some(Some(2)));
}

#[test]
fn broken_table_operations_are_harmless() {
    let d = Decision::<i32>::of(Vec::new());
    assert!(d.is_broken());
    assert_eq!(d.kind(), None);
    assert!(d.is_empty());
    assert_eq!(d.head(), None);
    assert_eq!(d.first(), None);
    assert_eq!(d.take(3), None);
}

#[test]
fn broken_table_recovers_through_concat() {
    let broken = Decision::<i32>::of(Vec::new());
    let d = broken.concat(Decision::of(vec![Row::value(true, 7)]));
    assert_eq!(d.kind(), Some(RowKind::Value));
    assert_eq!(d.first(), Some(7));
}

#[test]
fn try_of_accepts_uniform_call_rows() {
    let d = Decision::try_of(vec![
        Row::call(false, |s: String| s.len(), "abc".to_owned()),
        Row::call(true, |s: String| s.len() * 2, "abcd".to_owned()),
    ])
    .unwrap();
    assert_eq!(d.first(), Some(8));
}

#[test]
fn empty_truth_is_valid() {
    let t = Truth::of_value(Value::List(vec![]));
    assert!(t.is_empty());
    assert!(!t.and());
    assert_eq!(t.head(), None);
    assert_eq!(t.fork_or_l(|| "none"), Some("none"));
}

#[test]
fn untyped_decision_with_empty_list_is_broken() {
    assert!(Decision::of_value(Value::List(vec![])).is_broken());
}

#[test]
fn lookup_label_with_whitespace_and_unicode() {
    let t = BoolTable::of([(" padded ", true), ("größer", true)]);
    assert!(t.q(" padded "));
    assert!(!t.q("padded"));
    assert!(t.q("größer"));
}
