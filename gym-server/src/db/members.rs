//! Member record store operations

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::SqlitePool;

use shared::calendar::add_months;
use shared::error::ApiError;
use shared::models::member::{MAX_MEMBERS, Member, MemberCreate};
use shared::status::DUE_SOON_WINDOW_DAYS;

use crate::error::ServiceResult;

/// Raw `members` row as stored (dates and amounts as ISO/decimal text).
#[derive(sqlx::FromRow)]
pub(crate) struct MemberRow {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub admission_date: String,
    pub plan_months: i64,
    pub fee_amount: String,
    pub next_due_date: String,
    pub created_at: String,
}

/// Map a storage row into the domain record.
pub(crate) fn member_from_row(row: MemberRow) -> ServiceResult<Member> {
    Ok(Member {
        id: row.id,
        name: row.name,
        phone: row.phone,
        admission_date: parse_date(&row.admission_date)?,
        plan_months: row.plan_months as i32,
        fee_amount: parse_amount(&row.fee_amount)?,
        next_due_date: parse_date(&row.next_due_date)?,
        created_at: parse_timestamp(&row.created_at)?,
    })
}

pub(crate) fn parse_date(value: &str) -> ServiceResult<NaiveDate> {
    NaiveDate::from_str(value)
        .map_err(|e| ApiError::storage(format!("malformed stored date '{value}': {e}")).into())
}

pub(crate) fn parse_amount(value: &str) -> ServiceResult<Decimal> {
    Decimal::from_str(value)
        .map_err(|e| ApiError::storage(format!("malformed stored amount '{value}': {e}")).into())
}

pub(crate) fn parse_timestamp(value: &str) -> ServiceResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ApiError::storage(format!("malformed stored timestamp '{value}': {e}")).into())
}

/// Canonical text encoding for stored amounts (2 fractional digits).
pub(crate) fn amount_to_db(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Create a member, computing its initial due date.
///
/// The cap check and the insert share one transaction, so a concurrent
/// writer cannot slip a 5001st member between the two.
pub async fn create_member(pool: &SqlitePool, data: &MemberCreate) -> ServiceResult<Member> {
    data.validate()?;

    let next_due = add_months(data.admission_date, data.plan_months)?;
    let now = Utc::now();

    let mut tx = pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
        .fetch_one(&mut *tx)
        .await?;
    if count >= MAX_MEMBERS {
        return Err(ApiError::capacity_exceeded(MAX_MEMBERS).into());
    }

    let result = sqlx::query(
        r#"
        INSERT INTO members (name, phone, admission_date, plan_months, fee_amount, next_due_date, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(&data.name)
    .bind(&data.phone)
    .bind(data.admission_date.to_string())
    .bind(data.plan_months)
    .bind(amount_to_db(data.fee_amount))
    .bind(next_due.to_string())
    .bind(now.to_rfc3339())
    .execute(&mut *tx)
    .await?;
    let member_id = result.last_insert_rowid();

    let row: MemberRow = sqlx::query_as("SELECT * FROM members WHERE id = ?1")
        .bind(member_id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    member_from_row(row)
}

pub async fn get_member(pool: &SqlitePool, member_id: i64) -> ServiceResult<Member> {
    let row: Option<MemberRow> = sqlx::query_as("SELECT * FROM members WHERE id = ?1")
        .bind(member_id)
        .fetch_optional(pool)
        .await?;
    match row {
        Some(row) => member_from_row(row),
        None => Err(ApiError::not_found(format!("member {member_id}")).into()),
    }
}

/// List members, newest first, optionally filtered by a name/phone substring.
pub async fn list_members(pool: &SqlitePool, search: Option<&str>) -> ServiceResult<Vec<Member>> {
    let rows: Vec<MemberRow> = match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => {
            let pattern = format!("%{term}%");
            sqlx::query_as(
                "SELECT * FROM members WHERE name LIKE ?1 OR phone LIKE ?1 ORDER BY created_at DESC, id DESC",
            )
            .bind(&pattern)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM members ORDER BY created_at DESC, id DESC")
                .fetch_all(pool)
                .await?
        }
    };
    rows.into_iter().map(member_from_row).collect()
}

pub async fn count_members(pool: &SqlitePool) -> ServiceResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Overdue and due-soon counts relative to a reference date.
///
/// ISO date strings compare lexicographically in date order, so the filters
/// run in SQL instead of classifying every row in memory.
pub async fn status_counts(pool: &SqlitePool, today: NaiveDate) -> ServiceResult<(i64, i64)> {
    let today_s = today.to_string();
    let window_end = (today + chrono::Duration::days(DUE_SOON_WINDOW_DAYS)).to_string();

    let (overdue,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members WHERE next_due_date < ?1")
        .bind(&today_s)
        .fetch_one(pool)
        .await?;
    let (due_soon,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM members WHERE next_due_date >= ?1 AND next_due_date <= ?2",
    )
    .bind(&today_s)
    .bind(&window_end)
    .fetch_one(pool)
    .await?;
    Ok((overdue, due_soon))
}

/// Delete a member; payments go with it via the FK cascade.
pub async fn delete_member(pool: &SqlitePool, member_id: i64) -> ServiceResult<()> {
    let result = sqlx::query("DELETE FROM members WHERE id = ?1")
        .bind(member_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ApiError::not_found(format!("member {member_id}")).into());
    }
    Ok(())
}
