//! Payment record store operations

use chrono::Utc;
use sqlx::SqlitePool;

use shared::calendar::add_months;
use shared::error::ApiError;
use shared::models::payment::{Payment, PaymentCreate};

use crate::db::members::{MemberRow, amount_to_db, member_from_row, parse_amount, parse_date, parse_timestamp};
use crate::error::ServiceResult;

/// Raw `payments` row as stored.
#[derive(sqlx::FromRow)]
pub(crate) struct PaymentRow {
    pub id: i64,
    pub member_id: i64,
    pub amount: String,
    pub paid_on: String,
    pub recorded_at: String,
}

/// Map a storage row into the domain record.
pub(crate) fn payment_from_row(row: PaymentRow) -> ServiceResult<Payment> {
    Ok(Payment {
        id: row.id,
        member_id: row.member_id,
        amount: parse_amount(&row.amount)?,
        paid_on: parse_date(&row.paid_on)?,
        recorded_at: parse_timestamp(&row.recorded_at)?,
    })
}

/// Record a payment and advance the member's due date in one transaction.
///
/// The due date advances from the member's current `next_due_date`, not from
/// `paid_on`, so early or late payments do not shift the cycle anchor. Both
/// writes commit together or not at all.
pub async fn record_payment(
    pool: &SqlitePool,
    member_id: i64,
    data: &PaymentCreate,
) -> ServiceResult<Payment> {
    data.validate()?;

    let mut tx = pool.begin().await?;

    let row: Option<MemberRow> = sqlx::query_as("SELECT * FROM members WHERE id = ?1")
        .bind(member_id)
        .fetch_optional(&mut *tx)
        .await?;
    let member = match row {
        Some(row) => member_from_row(row)?,
        None => return Err(ApiError::not_found(format!("member {member_id}")).into()),
    };

    let next_due = add_months(member.next_due_date, member.plan_months)?;
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO payments (member_id, amount, paid_on, recorded_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(member_id)
    .bind(amount_to_db(data.amount))
    .bind(data.paid_on.to_string())
    .bind(now.to_rfc3339())
    .execute(&mut *tx)
    .await?;
    let payment_id = result.last_insert_rowid();

    sqlx::query("UPDATE members SET next_due_date = ?1 WHERE id = ?2")
        .bind(next_due.to_string())
        .bind(member_id)
        .execute(&mut *tx)
        .await?;

    let row: PaymentRow = sqlx::query_as("SELECT * FROM payments WHERE id = ?1")
        .bind(payment_id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    payment_from_row(row)
}

pub async fn get_payment(pool: &SqlitePool, payment_id: i64) -> ServiceResult<Payment> {
    let row: Option<PaymentRow> = sqlx::query_as("SELECT * FROM payments WHERE id = ?1")
        .bind(payment_id)
        .fetch_optional(pool)
        .await?;
    match row {
        Some(row) => payment_from_row(row),
        None => Err(ApiError::not_found(format!("payment {payment_id}")).into()),
    }
}

/// List payments, most recent `paid_on` first, optionally for one member.
pub async fn list_payments(
    pool: &SqlitePool,
    member_id: Option<i64>,
) -> ServiceResult<Vec<Payment>> {
    let rows: Vec<PaymentRow> = match member_id {
        Some(id) => {
            sqlx::query_as(
                "SELECT * FROM payments WHERE member_id = ?1 ORDER BY paid_on DESC, id DESC",
            )
            .bind(id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM payments ORDER BY paid_on DESC, id DESC")
                .fetch_all(pool)
                .await?
        }
    };
    rows.into_iter().map(payment_from_row).collect()
}
