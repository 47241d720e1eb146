//! Error types for the todo controller.
//!
//! # Design
//! Failures fall into two kinds. A protocol failure is an exchange that
//! completed with a non-2xx status; it carries the raw status and body.
//! Everything else (no connection, unreadable body, a list body that is not
//! valid JSON, a payload that cannot be encoded) is a transport failure.
//! Controller actions never panic on either kind; they record a diagnostic
//! and hand the error back to the caller.

use thiserror::Error;

/// Failure raised by a `Transport` when an exchange cannot complete.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The connection could not be established (refused, unreachable, DNS).
    #[error("connection failed: {0}")]
    Connect(String),

    /// The response arrived but its body could not be read as text.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Any other failure while sending the request.
    #[error("request failed: {0}")]
    Request(String),
}

/// The two error categories an action can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Protocol,
    Transport,
}

/// Errors returned by controller actions and `TodoClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The exchange never completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::HttpError { .. } => ErrorKind::Protocol,
            ApiError::Transport(_)
            | ApiError::DeserializationError(_)
            | ApiError::SerializationError(_) => ErrorKind::Transport,
        }
    }

    /// Status code of a protocol failure, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
