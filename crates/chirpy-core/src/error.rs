//! Shared error type across Chirpy crates.

use thiserror::Error;

/// Message returned to clients for every non-specific failure.
pub const GENERIC_ERROR_MSG: &str = "Something went wrong";

/// Message returned to clients when a chirp exceeds the length limit.
pub const TOO_LONG_MSG: &str = "Chirp is too long";

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Request body could not be decoded.
    MalformedBody,
    /// Chirp text longer than the configured limit.
    ChirpTooLong,
    /// Invalid configuration.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::MalformedBody => "MALFORMED_BODY",
            ClientCode::ChirpTooLong => "CHIRP_TOO_LONG",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ChirpyError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ChirpyError {
    #[error("malformed body: {0}")]
    MalformedBody(String),
    #[error("chirp too long: {len} > {max}")]
    ChirpTooLong { len: usize, max: usize },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ChirpyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ChirpyError::MalformedBody(_) => ClientCode::MalformedBody,
            ChirpyError::ChirpTooLong { .. } => ClientCode::ChirpTooLong,
            ChirpyError::BadConfig(_) => ClientCode::BadConfig,
            ChirpyError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            ChirpyError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Message placed in the `{"error": ...}` body. Details stay in logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            ChirpyError::ChirpTooLong { .. } => TOO_LONG_MSG,
            _ => GENERIC_ERROR_MSG,
        }
    }
}
