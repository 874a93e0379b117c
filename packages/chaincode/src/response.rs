//! Invocation response returned to the peer

use serde::{Deserialize, Serialize};

use crate::error::ChaincodeError;

/// Status code for a successful invocation
pub const OK: i32 = 200;

/// Status code for a failed invocation
pub const ERROR: i32 = 500;

/// Outcome of `init` or `invoke`, as the peer expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// [`OK`] or [`ERROR`]
    pub status: i32,
    /// Error message, empty on success
    pub message: String,
    /// Result bytes, empty on error
    pub payload: Vec<u8>,
}

impl Response {
    /// Successful response carrying `payload`
    pub fn success(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            status: OK,
            message: String::new(),
            payload: payload.into(),
        }
    }

    /// Failed response carrying `message`
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Whether the status is [`OK`]
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == OK
    }
}

impl From<ChaincodeError> for Response {
    fn from(err: ChaincodeError) -> Self {
        Self::error(err.to_string())
    }
}
