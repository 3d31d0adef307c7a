//! Host-level faults raised by the object model.
//!
//! These never reach user code directly. The evaluator converts them into an
//! `Error` value (`Value::from(err)`) at the point they occur, so they
//! propagate like any other Nuru error.

use crate::kind::Kind;
use crate::value::Value;

/// A misuse of a value that the object model refuses to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ObjectError {
    /// A value of this kind was used as a dict key.
    #[error("huwezi kutumia {kind} kama ufunguo wa kamusi")]
    NotHashable { kind: Kind },
    /// A value of this kind was used as the subject of a loop.
    #[error("huwezi kuzungusha {kind}")]
    NotIterable { kind: Kind },
}

impl ObjectError {
    /// The kind of the offending value.
    pub fn kind(self) -> Kind {
        match self {
            ObjectError::NotHashable { kind } | ObjectError::NotIterable { kind } => kind,
        }
    }
}

impl From<ObjectError> for Value {
    #[cold]
    fn from(err: ObjectError) -> Self {
        Value::error(err.to_string())
    }
}
