use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::AuthSession;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::models::TokenVerification;
use crate::domain::auth::models::User;

/// Port for authentication domain service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and issue a token for it.
    ///
    /// # Errors
    /// * `DuplicateUser` - Email is already registered
    /// * `CreateUserFailed` - Persisting the user failed
    /// * `Internal` - Unexpected failure, details in the logs
    async fn register_user(&self, command: RegisterUserCommand) -> Result<AuthSession, AuthError>;

    /// Authenticate a credential pair and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password,
    ///   deliberately indistinguishable
    /// * `Internal` - Unexpected failure, details in the logs
    async fn login_user(&self, credentials: Credentials) -> Result<AuthSession, AuthError>;

    /// Verify a bearer token and refresh it.
    ///
    /// Performs no store access; the token is self-contained.
    ///
    /// # Errors
    /// * `TokenExpired` - Token expiry has elapsed
    /// * `TokenInvalid` - Signature or structure check failed
    /// * `Internal` - Unexpected failure, details in the logs
    async fn verify_token(&self, token: &str) -> Result<TokenVerification, AuthError>;
}

/// Persistence operations the authentication core needs from the user store.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, StoreError>;

    /// Persist a new user.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email uniqueness constraint violated
    /// * `Database` - Store operation failed
    async fn create(&self, user: User) -> Result<User, StoreError>;
}
