//! Diagnostic channel for rejected input and lookup misses.
//!
//! Messages are emitted as `tracing` events with the `booltable` target.
//! The text is fixed; dependent tooling matches on it.

use std::fmt;

/// Emitted when a `Truth` or `Decision` is built from input of the wrong shape.
pub const DECISION_TYPE_ERROR: &str =
    "Decision must be passed parameters that adhere to the documented type. Value that was passed:";

/// Emitted when a `BoolTable` is built from input of the wrong shape.
pub const BOOL_TABLE_TYPE_ERROR: &str =
    "BoolTable must be passed parameters that adhere to the documented type. Value that was passed:";

/// Prefix of the warning emitted when a lookup label is missing.
pub const CONDITION_NOT_FOUND: &str = "`if` condition not found: ";

pub(crate) fn decision_type_error(value: &dyn fmt::Debug) {
    tracing::error!(target: "booltable", value = ?value, "{DECISION_TYPE_ERROR}");
}

pub(crate) fn bool_table_type_error(value: &dyn fmt::Debug) {
    tracing::error!(target: "booltable", value = ?value, "{BOOL_TABLE_TYPE_ERROR}");
}

pub(crate) fn condition_not_found(label: &str) {
    tracing::warn!(target: "booltable", label, "{CONDITION_NOT_FOUND}{label}");
}
