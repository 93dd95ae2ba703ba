//! Member endpoints: roster, create, detail, delete

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::error::ApiError;
use shared::models::member::{Member, MemberCreate};
use shared::models::payment::Payment;
use shared::status::DueStatus;

use crate::db;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Query parameters for the roster listing
#[derive(Deserialize)]
pub struct ListQuery {
    /// Name/phone substring filter
    pub search: Option<String>,
    /// Status filter: overdue | due-soon | ok | all
    pub status: Option<String>,
}

/// Member plus its classification against today
#[derive(Serialize)]
pub struct MemberWithStatus {
    #[serde(flatten)]
    pub member: Member,
    pub status: DueStatus,
    pub status_label: &'static str,
}

impl MemberWithStatus {
    fn new(member: Member, status: DueStatus) -> Self {
        Self {
            member,
            status,
            status_label: status.label(),
        }
    }
}

/// Roster response with dashboard statistics
///
/// The counts cover the whole roster, not just the filtered page, matching
/// what the dashboard tiles display.
#[derive(Serialize)]
pub struct RosterResponse {
    pub members: Vec<MemberWithStatus>,
    pub total_members: i64,
    pub overdue_count: i64,
    pub due_soon_count: i64,
}

/// GET /api/members
pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<RosterResponse> {
    let today = Utc::now().date_naive();

    let mut members = db::members::list_members(&state.pool, query.search.as_deref()).await?;
    if let Some(filter) = query.status.as_deref().filter(|f| *f != "all") {
        members.retain(|m| m.status_on(today).code() == filter);
    }

    let total_members = db::members::count_members(&state.pool).await?;
    let (overdue_count, due_soon_count) = db::members::status_counts(&state.pool, today).await?;

    let members = members
        .into_iter()
        .map(|m| {
            let status = m.status_on(today);
            MemberWithStatus::new(m, status)
        })
        .collect();

    Ok(Json(RosterResponse {
        members,
        total_members,
        overdue_count,
        due_soon_count,
    }))
}

/// POST /api/members
pub async fn create_member(
    State(state): State<AppState>,
    Json(data): Json<MemberCreate>,
) -> ApiResult<Member> {
    let member = db::members::create_member(&state.pool, &data).await?;
    tracing::info!(member_id = member.id, "member created");
    Ok(Json(member))
}

/// Member detail with status and payment history
#[derive(Serialize)]
pub struct MemberDetail {
    #[serde(flatten)]
    pub member: Member,
    pub status: DueStatus,
    pub status_label: &'static str,
    pub payments: Vec<Payment>,
}

/// GET /api/members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> ApiResult<MemberDetail> {
    let member = db::members::get_member(&state.pool, member_id).await?;
    let payments = db::payments::list_payments(&state.pool, Some(member_id)).await?;
    let status = member.status_on(Utc::now().date_naive());

    Ok(Json(MemberDetail {
        status,
        status_label: status.label(),
        member,
        payments,
    }))
}

/// DELETE /api/members/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    db::members::delete_member(&state.pool, member_id).await?;
    tracing::info!(member_id, "member deleted");
    Ok(Json(serde_json::json!({ "deleted": member_id })))
}
