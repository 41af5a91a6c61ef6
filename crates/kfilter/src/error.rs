use derive_more::Display;
use kfilter_core::error::{ErrorClass, FilterError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{kind}: {message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<FilterError> for Error {
    fn from(err: FilterError) -> Self {
        Self::new(err.class().into(), err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers and adapters.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// A leaf predicate was built from structurally meaningless input.
    #[display("invalid argument")]
    InvalidArgument,

    /// A canonical mapping could not be turned back into a tree.
    #[display("decode")]
    Decode,
}

impl From<ErrorClass> for ErrorKind {
    fn from(class: ErrorClass) -> Self {
        match class {
            ErrorClass::InvalidArgument => Self::InvalidArgument,
            ErrorClass::Decode => Self::Decode,
        }
    }
}

///
/// TESTS
///
