use thiserror::Error;

/// Error type for token operations.
///
/// `Expired` and `Invalid` are distinct, caller-mappable failure kinds;
/// everything else about a failed verification collapses into `Invalid`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token expired")]
    Expired,

    #[error("Token invalid")]
    Invalid,
}
