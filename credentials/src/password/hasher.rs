use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// One-way transform with a per-call random salt (internally Argon2id).
/// The work factor comes from the algorithm's default parameters.
#[derive(Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// Output is non-deterministic across calls (fresh salt per call) but
    /// always in PHC string format.
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// A digest that does not parse as a PHC string (corrupted storage)
    /// counts as a mismatch, not an error.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        let Ok(parsed_digest) = PasswordHash::new(digest) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_digest)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let digest = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &digest));
        assert!(!hasher.verify("wrong_password", &digest));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("secret").expect("Failed to hash password");
        let second = hasher.hash("secret").expect("Failed to hash password");

        // Same plaintext, different salt, different digest
        assert_ne!(first, second);
        assert!(hasher.verify("secret", &first));
        assert!(hasher.verify("secret", &second));
    }

    #[test]
    fn test_digest_format() {
        let hasher = PasswordHasher::new();
        let digest = hasher.hash("password123").expect("Failed to hash password");
        assert!(digest.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_malformed_digest() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify("password", "not_a_phc_string"));
        assert!(!hasher.verify("password", ""));
    }
}
