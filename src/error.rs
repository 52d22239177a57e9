//! Error types for passcrypt

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for passcrypt
///
/// Every decryption-side failure a caller can trigger with bad input maps to
/// [`Error::MalformedEnvelope`], [`Error::AuthenticationFailure`] or
/// [`Error::InvalidEncoding`]. None of them say *why* authentication failed.
#[derive(Error, Debug)]
pub enum Error {
    // Crypto errors
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("Authentication failed - wrong password, wrong iteration count, or corrupted data")]
    AuthenticationFailure,

    #[error("Decrypted data is not valid UTF-8")]
    InvalidEncoding,

    // Envelope errors
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    // Config errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True for the failures that mean "this envelope cannot be opened with
    /// these inputs", as opposed to caller or runtime mistakes.
    pub fn is_decryption_failure(&self) -> bool {
        matches!(
            self,
            Error::MalformedEnvelope(_) | Error::AuthenticationFailure | Error::InvalidEncoding
        )
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(_: std::string::FromUtf8Error) -> Self {
        Error::InvalidEncoding
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(e: tokio::task::JoinError) -> Self {
        Error::Internal(format!("Blocking crypto task failed: {}", e))
    }
}
