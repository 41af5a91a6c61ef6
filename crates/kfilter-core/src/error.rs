use crate::expr::FilterOp;
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// FilterError
///
/// Failures surfaced synchronously while building or decoding a filter tree.
/// Composition and serialization never produce one.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FilterError {
    #[error("canonical form decode failed: {0}")]
    Decode(String),

    #[error("{op} predicate requires a non-empty key")]
    EmptyKey { op: FilterOp },

    #[error("IN predicate on '{key}' requires at least one value")]
    EmptyValues { key: String },

    #[error("{op} predicate on '{key}' received a non-finite float")]
    NonFiniteFloat { op: FilterOp, key: String },
}

impl FilterError {
    /// Stable classification of this error.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Decode(_) => ErrorClass::Decode,
            Self::EmptyKey { .. } | Self::EmptyValues { .. } | Self::NonFiniteFloat { .. } => {
                ErrorClass::InvalidArgument
            }
        }
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorClass {
    #[display("invalid_argument")]
    InvalidArgument,

    #[display("decode")]
    Decode,
}

///
/// TESTS
///
