use thiserror::Error;

use super::row::RowKind;

/// Why a table could not be wrapped as given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("table is empty; at least one row is required")]
    EmptyTable,

    #[error("row {index} is a {found} row but the table holds {expected} rows")]
    MixedRows {
        index: usize,
        expected: RowKind,
        found: RowKind,
    },

    #[error("expected a list, found {found}")]
    NotAList { found: &'static str },

    #[error("row {index} must be a two-element list, found {found}")]
    BadRow { index: usize, found: String },

    #[error("lookup label must be a string, found {found}")]
    BadLabel { found: &'static str },
}
