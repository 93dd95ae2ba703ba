//! Payment endpoints: record and list

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use serde::Serialize;
use shared::error::ApiError;
use shared::models::payment::{Payment, PaymentCreate};

use crate::db;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Response for a recorded payment, carrying the member's advanced due date
#[derive(Serialize)]
pub struct PaymentRecorded {
    pub payment: Payment,
    pub next_due_date: NaiveDate,
}

/// POST /api/members/{id}/payments
pub async fn record_payment(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
    Json(data): Json<PaymentCreate>,
) -> ApiResult<PaymentRecorded> {
    let payment = db::payments::record_payment(&state.pool, member_id, &data).await?;
    let member = db::members::get_member(&state.pool, member_id).await?;
    tracing::info!(member_id, payment_id = payment.id, "payment recorded");

    Ok(Json(PaymentRecorded {
        payment,
        next_due_date: member.next_due_date,
    }))
}

/// GET /api/members/{id}/payments
pub async fn list_member_payments(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> ApiResult<Vec<Payment>> {
    // Distinguish "no payments yet" from "no such member"
    db::members::get_member(&state.pool, member_id).await?;
    let payments = db::payments::list_payments(&state.pool, Some(member_id)).await?;
    Ok(Json(payments))
}

/// GET /api/payments
pub async fn list_payments(State(state): State<AppState>) -> ApiResult<Vec<Payment>> {
    let payments = db::payments::list_payments(&state.pool, None).await?;
    Ok(Json(payments))
}
