//! Credential primitives library
//!
//! Provides the cryptographic building blocks for the authentication service:
//! - Password hashing and verification (Argon2id)
//! - Bearer token issuance and verification (JWT)
//!
//! The service defines its own domain traits and composes these
//! implementations. Keeping them in a separate crate keeps the domain logic
//! free of crypto details.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use credentials::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use chrono::Duration;
//! use credentials::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let token = issuer.issue("user123").unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
