use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth_service::auth::errors::StoreError;
use auth_service::domain::auth::models::EmailAddress;
use auth_service::domain::auth::models::User;
use auth_service::domain::auth::ports::AuthServicePort;
use auth_service::domain::auth::ports::UserStore;
use auth_service::domain::auth::service::AuthService;
use auth_service::inbound::http::router::create_router;
use chrono::Duration;
use credentials::TokenIssuer;
use tokio::sync::RwLock;

pub const JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory user store substituted for Postgres in API tests.
///
/// Enforces the same email uniqueness the database constraint does.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(email.as_str()).cloned())
    }

    async fn create(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email.as_str()) {
            return Err(StoreError::DuplicateEmail(user.email.as_str().to_string()));
        }
        users.insert(user.email.as_str().to_string(), user.clone());
        Ok(user)
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_store = Arc::new(InMemoryUserStore::default());
        let token_issuer = TokenIssuer::new(JWT_SECRET.as_bytes(), Duration::hours(1));
        let auth_service: Arc<dyn AuthServicePort> =
            Arc::new(AuthService::new(user_store, token_issuer));

        let application = create_router(auth_service);
        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}
