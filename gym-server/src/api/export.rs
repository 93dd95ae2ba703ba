//! CSV export endpoint

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use http::header;
use shared::error::ApiError;
use shared::export::members_to_csv;

use crate::db;
use crate::state::AppState;

/// GET /api/members/export
pub async fn export_members(State(state): State<AppState>) -> Result<Response, ApiError> {
    let members = db::members::list_members(&state.pool, None).await?;
    let csv = members_to_csv(&members);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"members.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
