use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use credentials::PasswordHasher;
use credentials::TokenError;
use credentials::TokenIssuer;

use crate::auth::errors::AuthError;
use crate::auth::errors::StoreError;
use crate::auth::ports::AuthServicePort;
use crate::auth::ports::UserStore;
use crate::domain::auth::models::AuthSession;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::models::TokenVerification;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::models::UserProfile;

/// Domain service implementation for authentication operations.
///
/// Concrete implementation of AuthServicePort with dependency injection:
/// the user store is a capability supplied at construction, the hasher and
/// token issuer are owned. Stateless across requests.
pub struct AuthService<S>
where
    S: UserStore,
{
    store: Arc<S>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

impl<S> AuthService<S>
where
    S: UserStore,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    /// * `token_issuer` - Configured token issuer (secret + expiry window)
    pub fn new(store: Arc<S>, token_issuer: TokenIssuer) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }

    /// Hash a password on the blocking pool.
    ///
    /// Hashing is the only CPU-bound step of any operation and stays off
    /// the async dispatch path.
    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let hasher = self.password_hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing task failed");
                AuthError::Internal
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                AuthError::Internal
            })
    }

    /// Verify a password against a stored digest on the blocking pool.
    ///
    /// A malformed digest counts as a mismatch, not a system error.
    async fn verify_password(&self, password: String, digest: String) -> Result<bool, AuthError> {
        let hasher = self.password_hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password verification task failed");
                AuthError::Internal
            })
    }

    fn issue_token(&self, user_id: &UserId) -> Result<String, AuthError> {
        self.token_issuer.issue(user_id).map_err(|e| {
            tracing::error!(error = %e, "Token issuance failed");
            AuthError::Internal
        })
    }
}

#[async_trait]
impl<S> AuthServicePort for AuthService<S>
where
    S: UserStore,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<AuthSession, AuthError> {
        let existing = self.store.find_by_email(&command.email).await.map_err(|e| {
            tracing::error!(error = %e, "User lookup failed during registration");
            AuthError::Internal
        })?;

        if existing.is_some() {
            return Err(AuthError::DuplicateUser);
        }

        let password_hash = self.hash_password(command.password).await?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            name: command.name,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = match self.store.create(user).await {
            Ok(user) => user,
            // Lost the race between the existence check and the insert:
            // the constraint violation is still a duplicate, not a failure.
            Err(StoreError::DuplicateEmail(_)) => return Err(AuthError::DuplicateUser),
            Err(e) => {
                tracing::error!(error = %e, "User creation failed");
                return Err(AuthError::CreateUserFailed);
            }
        };

        let token = self.issue_token(&created_user.id)?;

        Ok(AuthSession {
            user: UserProfile::from(&created_user),
            token,
        })
    }

    async fn login_user(&self, credentials: Credentials) -> Result<AuthSession, AuthError> {
        let user = self
            .store
            .find_by_email(&credentials.email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "User lookup failed during login");
                AuthError::Internal
            })?
            // Unknown email and wrong password answer identically.
            .ok_or(AuthError::InvalidCredentials)?;

        let password_matches = self
            .verify_password(credentials.password, user.password_hash.clone())
            .await?;

        if !password_matches {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issue_token(&user.id)?;

        Ok(AuthSession {
            user: UserProfile::from(&user),
            token,
        })
    }

    async fn verify_token(&self, token: &str) -> Result<TokenVerification, AuthError> {
        let claims = self.token_issuer.verify(token).map_err(|e| match e {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Invalid => AuthError::TokenInvalid,
            TokenError::EncodingFailed(_) => {
                tracing::error!(error = %e, "Token verification failed unexpectedly");
                AuthError::Internal
            }
        })?;

        let user_id = UserId::from_string(&claims.sub).map_err(|_| AuthError::TokenInvalid)?;

        let refreshed = self.token_issuer.refresh(&user_id).map_err(|e| {
            tracing::error!(error = %e, "Token refresh failed");
            AuthError::Internal
        })?;

        Ok(TokenVerification {
            user_id,
            token: refreshed,
        })
    }
}
