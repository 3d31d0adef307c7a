//! Payload of the `Error` signal value.

use std::fmt;

/// A user-visible runtime error.
///
/// Holds only the message. The `Kosa: ` label and any terminal styling are
/// added when the value is rendered, never stored here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorValue {
    message: String,
}

impl ErrorValue {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
