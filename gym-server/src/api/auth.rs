//! Authentication endpoint: admin login

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::error::ApiError;

use crate::state::AppState;
use crate::util::verify_password;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// POST /api/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    if req.username.trim() != state.admin_username
        || !verify_password(&req.password, &state.admin_password_hash)
    {
        return Err(ApiError::InvalidCredentials);
    }

    let token = crate::auth::create_token(&state.admin_username, &state.jwt_secret).map_err(|e| {
        tracing::error!("JWT creation failed: {e}");
        ApiError::internal("token creation failed")
    })?;

    Ok(Json(LoginResponse { token }))
}
