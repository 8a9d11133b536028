//! Declarative conditional logic with three small wrappers.
//!
//! - [`Truth`] aggregates a sequence of booleans (`and`, `or`, `xor`, `nor`)
//!   and forks on the result.
//! - [`Decision`] evaluates a table of conditional rows under a [`RunMode`].
//! - [`BoolTable`] answers boolean queries by condition label.
//!
//! Bad input never aborts: the `of` factories report it through
//! [`tracing`] and hand back a harmless stand-in. The `try_of` factories
//! return a [`ShapeError`] instead.

mod decide;
pub mod diagnostics;
mod types;

pub use types::{
    BoolTable, Decided, Decision, DegradePolicy, Row, RowKind, RunMode, ShapeError, Thunk, Truth,
    Value, DEGRADED_LABEL,
};
