//! Unified service-layer error type for the record store
//!
//! `ServiceError` bridges DB-layer errors (`sqlx::Error`) and the shared
//! `ApiError`. It enables `?` propagation without manual
//! `.map_err(|e| { tracing::error!(...); ApiError::storage(...) })` boilerplate.

use axum::response::IntoResponse;
use shared::error::ApiError;

/// Service-layer error — only two variants, keeps things simple.
///
/// - `Db`: database/infrastructure errors (auto-logged, mapped to Storage)
/// - `App`: domain errors (transparent pass-through to the caller)
#[derive(Debug)]
pub enum ServiceError {
    /// Database or infrastructure error
    Db(sqlx::Error),
    /// Domain error (already an ApiError with the correct code)
    App(ApiError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e)
    }
}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "record store database error");
                ApiError::storage("database operation failed")
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let api_error: ApiError = self.into();
        api_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
