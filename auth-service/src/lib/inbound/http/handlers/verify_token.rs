use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::TokenVerification;
use crate::inbound::http::router::AppState;

pub async fn verify_token(
    State(state): State<AppState>,
    Json(body): Json<VerifyTokenRequest>,
) -> Result<ApiSuccess<VerifyTokenResponseData>, ApiError> {
    state
        .auth_service
        .verify_token(&body.token)
        .await
        .map_err(ApiError::from)
        .map(|ref verification| ApiSuccess::new(StatusCode::OK, verification.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyTokenRequest {
    token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyTokenResponseData {
    pub user_id: String,
    pub token: String,
}

impl From<&TokenVerification> for VerifyTokenResponseData {
    fn from(verification: &TokenVerification) -> Self {
        Self {
            user_id: verification.user_id.to_string(),
            token: verification.token.clone(),
        }
    }
}
