//! Admin JWT authentication for the dashboard API

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::ApiError;

use crate::state::AppState;

/// JWT claims for the admin session
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Username
    pub sub: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Authenticated admin identity extracted from JWT
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub username: String,
}

const JWT_EXPIRY_HOURS: i64 = 24;

/// Create a JWT token for the admin account
pub fn create_token(username: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = AdminClaims {
        sub: username.to_string(),
        exp: (now + chrono::Duration::hours(JWT_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Middleware that extracts and verifies the admin JWT from the
/// Authorization header
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized.into_response())?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::invalid_token("invalid Authorization format").into_response())?;

    let token_data = jsonwebtoken::decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        tracing::debug!("JWT validation failed: {e}");
        ApiError::invalid_token("invalid or expired token").into_response()
    })?;

    request.extensions_mut().insert(AdminIdentity {
        username: token_data.claims.sub,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let token = create_token("admin", "test-secret").unwrap();
        let data = jsonwebtoken::decode::<AdminClaims>(
            &token,
            &DecodingKey::from_secret("test-secret".as_bytes()),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(data.claims.sub, "admin");
        assert!(data.claims.exp > data.claims.iat);
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let token = create_token("admin", "test-secret").unwrap();
        let result = jsonwebtoken::decode::<AdminClaims>(
            &token,
            &DecodingKey::from_secret("other-secret".as_bytes()),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
