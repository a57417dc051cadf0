use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::register::UserData;
use super::ApiError;
use super::ApiSuccess;
use crate::auth::errors::AuthError;
use crate::domain::auth::models::AuthSession;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::EmailAddress;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // An email that does not even parse answers like any other bad credential
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::from(AuthError::InvalidCredentials))?;

    state
        .auth_service
        .login_user(Credentials::new(email, body.password))
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::new(StatusCode::OK, session.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub user: UserData,
    pub token: String,
}

impl From<&AuthSession> for LoginResponseData {
    fn from(session: &AuthSession) -> Self {
        Self {
            user: (&session.user).into(),
            token: session.token.clone(),
        }
    }
}
