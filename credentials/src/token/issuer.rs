use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signs and validates bearer tokens.
///
/// Constructed once from the signing secret and the expiry window, then
/// shared for the process lifetime. Uses HS256 (HMAC with SHA-256).
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    window: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing (at least 32 bytes for HS256)
    /// * `window` - Validity window applied to every issued token
    pub fn new(secret: &[u8], window: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            window,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// Claims are `{sub, iat = now, exp = now + window}`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: impl ToString) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.window).timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and recover its claims.
    ///
    /// Expiry is checked with zero leeway.
    ///
    /// # Errors
    /// * `Expired` - Token expiry has elapsed
    /// * `Invalid` - Signature mismatch or malformed structure
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Re-issue a fresh token for an already-verified subject.
    ///
    /// Used after login and after every successful verification so callers
    /// extend their session transparently.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn refresh(&self, subject: impl ToString) -> Result<String, TokenError> {
        self.issue(subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, Duration::hours(1))
    }

    #[test]
    fn test_issue_and_verify() {
        let issuer = issuer();

        let token = issuer.issue("user123").expect("Failed to issue token");
        let claims = issuer.verify(&token).expect("Failed to verify token");

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_verify_expired_token() {
        let issuer = TokenIssuer::new(SECRET, Duration::seconds(-60));

        let token = issuer.issue("user123").expect("Failed to issue token");
        let result = issuer.verify(&token);

        assert_eq!(result, Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_garbage_token() {
        let result = issuer().verify("not.a.token");
        assert_eq!(result, Err(TokenError::Invalid));
    }

    #[test]
    fn test_verify_tampered_signature() {
        let issuer = issuer();
        let token = issuer.issue("user123").expect("Failed to issue token");

        let mut parts: Vec<&str> = token.split('.').collect();
        let tampered_signature = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
        parts[2] = tampered_signature;
        let tampered = parts.join(".");

        assert_eq!(issuer.verify(&tampered), Err(TokenError::Invalid));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer1 = TokenIssuer::new(b"secret1_at_least_32_bytes_long_key!", Duration::hours(1));
        let issuer2 = TokenIssuer::new(b"secret2_at_least_32_bytes_long_key!", Duration::hours(1));

        let token = issuer1.issue("user123").expect("Failed to issue token");

        assert_eq!(issuer2.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_refresh_extends_expiry() {
        let issuer = issuer();

        let original = issuer.issue("user123").expect("Failed to issue token");
        let original_claims = issuer.verify(&original).expect("Failed to verify token");

        let refreshed = issuer.refresh("user123").expect("Failed to refresh token");
        let refreshed_claims = issuer.verify(&refreshed).expect("Failed to verify token");

        assert_eq!(refreshed_claims.sub, original_claims.sub);
        assert!(refreshed_claims.exp > original_claims.iat);
    }
}
