//! API routes for the dashboard server

pub mod auth;
pub mod export;
pub mod health;
pub mod members;
pub mod payments;

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::auth::admin_auth_middleware;
use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Dashboard API (JWT authenticated)
    let protected = Router::new()
        .route(
            "/api/members",
            get(members::list_members).post(members::create_member),
        )
        .route("/api/members/export", get(export::export_members))
        .route(
            "/api/members/{id}",
            get(members::get_member).delete(members::delete_member),
        )
        .route(
            "/api/members/{id}/payments",
            get(payments::list_member_payments).post(payments::record_payment),
        )
        .route("/api/payments", get(payments::list_payments))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/login", post(auth::login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
