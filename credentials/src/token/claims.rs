use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a signed bearer token.
///
/// Minimal set: the subject plus the issuance and expiry instants. The only
/// representation of these claims outside this crate is the signed token
/// string itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}
