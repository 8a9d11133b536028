mod bool_table;
mod decision;
mod error;
mod row;
mod truth;
mod value;

pub use bool_table::{BoolTable, DegradePolicy, DEGRADED_LABEL};
pub use decision::{Decided, Decision};
pub use error::ShapeError;
pub use row::{Row, RowKind, RunMode, Thunk};
pub use truth::Truth;
pub use value::Value;
