use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for DisplayName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DisplayNameError {
    #[error("Display name must not be empty")]
    Empty,

    #[error("Display name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error raised by user store implementations.
///
/// `DuplicateEmail` is the unique-constraint signal the service relies on to
/// close the race between the existence check and the insert.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Caller-facing error taxonomy for authentication operations.
///
/// Display strings are the exact messages callers receive. Anything outside
/// this taxonomy is logged with full detail at the service boundary and
/// surfaced as `Internal`, whose message deliberately says nothing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists, please login")]
    DuplicateUser,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Error creating user")]
    CreateUserFailed,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token invalid")]
    TokenInvalid,

    #[error("Please check logs")]
    Internal,
}
