use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::errors::StoreError;
use crate::domain::auth::models::DisplayName;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::UserStore;

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape of the users table.
#[derive(Debug, FromRow)]
struct UserRecord {
    id: Uuid,
    email: String,
    name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRecord {
    fn try_into_user(self) -> Result<User, StoreError> {
        // A stored row that no longer passes domain validation is corrupt
        Ok(User {
            id: UserId(self.id),
            email: EmailAddress::new(self.email)
                .map_err(|e| StoreError::Database(format!("Corrupt user record: {}", e)))?,
            name: DisplayName::new(self.name)
                .map_err(|e| StoreError::Database(format!("Corrupt user record: {}", e)))?,
            password_hash: self.password_hash,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, name, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        record.map(UserRecord::try_into_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.0)
        .bind(user.email.as_str())
        .bind(user.name.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return StoreError::DuplicateEmail(user.email.as_str().to_string());
                }
            }
            StoreError::Database(e.to_string())
        })?;

        Ok(user)
    }
}
