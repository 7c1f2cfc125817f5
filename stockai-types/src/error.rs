use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the stockai workspace.
///
/// Covers non-success HTTP responses, transport failures, malformed payloads
/// (including undecodable date/time keys), argument validation and
/// capability mismatches.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StockaiError {
    /// The server answered with a non-2xx status.
    ///
    /// `message` is the response body verbatim, or a generic
    /// `"Request failed with <status>"` when the body was empty.
    #[error("{message}")]
    Request {
        /// HTTP status code returned by the server.
        status: u16,
        /// Server-provided body, displayed to users as-is.
        message: String,
    },

    /// The request never produced a response (DNS, connect, reset, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// Issues with the returned or expected data (bad JSON, malformed date keys).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label describing what was requested (e.g. "patterns").
        capability: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "bars for AAPL.US".
        what: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl StockaiError {
    /// Helper: build a `Request` error, falling back to a generic message for empty bodies.
    pub fn request(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            format!("Request failed with {status}")
        } else {
            body
        };
        Self::Request { status, message }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// HTTP status carried by this error, if the server produced one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Capability absence is a wiring problem, not something a user can fix.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}
