// crates/addrverify-core/src/error.rs
use thiserror::Error;

/// Errors raised while talking to the address API or preparing a request.
///
/// [`AddressVerifier::verify`](crate::AddressVerifier::verify) never returns
/// these to the caller; it folds them into a
/// [`VerificationOutcome`](crate::VerificationOutcome). They surface directly
/// from construction ([`AddressVerifier::new`](crate::AddressVerifier::new))
/// and from the lower-level helpers.
#[derive(Debug, Error)]
pub enum AddrError {
    /// The request never produced a response (DNS, TLS, refused, timeout).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expect.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with a non-success status.
    #[error("{reason}")]
    Status { code: u16, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A candidate match is structurally unusable.
    #[error("malformed match data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, AddrError>;

impl AddrError {
    /// Builds a [`AddrError::Status`] from an HTTP status, using the
    /// canonical reason phrase as the human-readable description.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        AddrError::Status {
            code: status.as_u16(),
            reason: status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string()),
        }
    }
}
