//! Core of kfilter: the closed primitive value model, leaf predicates, the
//! `FilterExpr` tree, and its canonical serialized form.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod expr;
pub mod policy;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or serializers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        expr::{FilterExpr, FilterOp},
        policy::BuildPolicy,
        value::{FilterValue, Value},
    };
}
