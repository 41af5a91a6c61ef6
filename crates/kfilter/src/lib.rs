//! ## Crate layout
//! - `core`: value model, leaf predicates, the `FilterExpr` tree and its
//!   canonical serialized form.
//! - `error`: stable public error type for callers.
//!
//! The `prelude` module carries the vocabulary needed to build a filter and
//! hand its canonical form to a query backend.

pub use kfilter_core as core;

pub mod error;

pub use error::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        core::{
            expr::{Comparison, FilterExpr, FilterOp, Membership},
            policy::BuildPolicy,
            value::{FilterValue as _, Float64, Value},
        },
        error::{Error, ErrorKind},
    };
    pub use serde::{Deserialize, Serialize};
}
