//! Record store integration tests against an in-memory SQLite database.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use gym_server::db;
use shared::error::ApiError;
use shared::models::member::{MAX_MEMBERS, MemberCreate};
use shared::models::payment::PaymentCreate;

async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new().in_memory(true).foreign_keys(true);
    // One connection only: each connection to :memory: is its own database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("apply migrations");
    pool
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn amount(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn sample_member(name: &str) -> MemberCreate {
    MemberCreate {
        name: name.to_string(),
        phone: Some("555-0100".to_string()),
        admission_date: d(2024, 2, 15),
        plan_months: 1,
        fee_amount: amount("35.00"),
    }
}

#[tokio::test]
async fn create_member_computes_initial_due_date() {
    let pool = test_pool().await;

    let member = db::members::create_member(&pool, &sample_member("Jane Doe"))
        .await
        .unwrap();

    assert_eq!(member.name, "Jane Doe");
    assert_eq!(member.next_due_date, d(2024, 3, 15));
    assert_eq!(member.fee_amount, amount("35.00"));

    let fetched = db::members::get_member(&pool, member.id).await.unwrap();
    assert_eq!(fetched.next_due_date, member.next_due_date);
    assert_eq!(fetched.created_at, member.created_at);
}

#[tokio::test]
async fn create_member_clamps_month_end_admission() {
    let pool = test_pool().await;

    let mut data = sample_member("Jan");
    data.admission_date = d(2024, 1, 31);
    let member = db::members::create_member(&pool, &data).await.unwrap();

    assert_eq!(member.next_due_date, d(2024, 2, 29));
}

#[tokio::test]
async fn create_member_rejects_invalid_plan() {
    let pool = test_pool().await;

    let mut data = sample_member("Bad Plan");
    data.plan_months = 0;
    let err = ApiError::from(
        db::members::create_member(&pool, &data).await.unwrap_err(),
    );

    assert!(matches!(err, ApiError::InvalidArgument { .. }));
    assert_eq!(db::members::count_members(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn amounts_are_stored_at_currency_precision() {
    let pool = test_pool().await;

    let mut data = sample_member("Rounded");
    data.fee_amount = amount("39.5");
    let member = db::members::create_member(&pool, &data).await.unwrap();

    assert_eq!(member.fee_amount, amount("39.50"));
}

#[tokio::test]
async fn record_payment_advances_from_existing_due_date() {
    let pool = test_pool().await;

    let member = db::members::create_member(&pool, &sample_member("Jane Doe"))
        .await
        .unwrap();
    assert_eq!(member.next_due_date, d(2024, 3, 15));

    // Paid early: the anchor stays on the 15th regardless of paid_on.
    let payment = db::payments::record_payment(
        &pool,
        member.id,
        &PaymentCreate {
            amount: amount("35.00"),
            paid_on: d(2024, 3, 10),
        },
    )
    .await
    .unwrap();

    assert_eq!(payment.member_id, member.id);
    assert_eq!(payment.paid_on, d(2024, 3, 10));

    let updated = db::members::get_member(&pool, member.id).await.unwrap();
    assert_eq!(updated.next_due_date, d(2024, 4, 15));

    let payments = db::payments::list_payments(&pool, Some(member.id))
        .await
        .unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].id, payment.id);
}

#[tokio::test]
async fn record_payment_for_missing_member_is_not_found() {
    let pool = test_pool().await;

    let err = ApiError::from(
        db::payments::record_payment(
            &pool,
            999,
            &PaymentCreate {
                amount: amount("35.00"),
                paid_on: d(2024, 3, 10),
            },
        )
        .await
        .unwrap_err(),
    );

    assert!(matches!(err, ApiError::NotFound { .. }));
    assert!(db::payments::list_payments(&pool, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_member_cascades_to_payments() {
    let pool = test_pool().await;

    let member = db::members::create_member(&pool, &sample_member("Jane Doe"))
        .await
        .unwrap();
    let payment = db::payments::record_payment(
        &pool,
        member.id,
        &PaymentCreate {
            amount: amount("35.00"),
            paid_on: d(2024, 3, 15),
        },
    )
    .await
    .unwrap();

    db::members::delete_member(&pool, member.id).await.unwrap();

    let err = ApiError::from(db::members::get_member(&pool, member.id).await.unwrap_err());
    assert!(matches!(err, ApiError::NotFound { .. }));

    let err = ApiError::from(db::payments::get_payment(&pool, payment.id).await.unwrap_err());
    assert!(matches!(err, ApiError::NotFound { .. }));

    assert!(db::payments::list_payments(&pool, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_member_is_not_found() {
    let pool = test_pool().await;

    let err = ApiError::from(db::members::delete_member(&pool, 42).await.unwrap_err());
    assert!(matches!(err, ApiError::NotFound { .. }));
}

#[tokio::test]
async fn search_matches_name_and_phone() {
    let pool = test_pool().await;

    let mut a = sample_member("Alice Smith");
    a.phone = Some("555-1111".to_string());
    let mut b = sample_member("Bob Jones");
    b.phone = Some("555-2222".to_string());
    db::members::create_member(&pool, &a).await.unwrap();
    db::members::create_member(&pool, &b).await.unwrap();

    let by_name = db::members::list_members(&pool, Some("alice")).await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Alice Smith");

    let by_phone = db::members::list_members(&pool, Some("2222")).await.unwrap();
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].name, "Bob Jones");

    let all = db::members::list_members(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn status_counts_split_roster_by_due_date() {
    let pool = test_pool().await;
    let today = d(2024, 3, 15);

    for (name, admission) in [
        ("Overdue", d(2024, 1, 1)),   // due 2024-02-01
        ("Due Today", d(2024, 2, 15)), // due 2024-03-15
        ("In Window", d(2024, 2, 18)), // due 2024-03-18
        ("Fine", d(2024, 3, 1)),       // due 2024-04-01
    ] {
        let mut data = sample_member(name);
        data.admission_date = admission;
        db::members::create_member(&pool, &data).await.unwrap();
    }

    let (overdue, due_soon) = db::members::status_counts(&pool, today).await.unwrap();
    assert_eq!(overdue, 1);
    assert_eq!(due_soon, 2);
}

#[tokio::test]
async fn connect_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gym.db");

    let pool = db::connect(path.to_str().unwrap()).await.unwrap();
    db::members::create_member(&pool, &sample_member("On Disk"))
        .await
        .unwrap();

    assert!(path.exists());
}

async fn seed_members(pool: &SqlitePool, count: i64) {
    let mut tx = pool.begin().await.unwrap();
    for i in 0..count {
        sqlx::query(
            "INSERT INTO members (name, phone, admission_date, plan_months, fee_amount, next_due_date, created_at)
             VALUES (?1, NULL, '2024-01-01', 1, '10.00', '2024-02-01', '2024-01-01T00:00:00+00:00')",
        )
        .bind(format!("member-{i}"))
        .execute(&mut *tx)
        .await
        .unwrap();
    }
    tx.commit().await.unwrap();
}

#[tokio::test]
async fn member_cap_is_enforced() {
    let pool = test_pool().await;
    seed_members(&pool, MAX_MEMBERS - 1).await;

    // The 5000th member still fits.
    db::members::create_member(&pool, &sample_member("Last One"))
        .await
        .unwrap();
    assert_eq!(db::members::count_members(&pool).await.unwrap(), MAX_MEMBERS);

    // At the cap, creation fails cleanly and persists nothing.
    let err = ApiError::from(
        db::members::create_member(&pool, &sample_member("Too Many"))
            .await
            .unwrap_err(),
    );
    assert!(matches!(err, ApiError::CapacityExceeded { limit } if limit == MAX_MEMBERS));
    assert_eq!(db::members::count_members(&pool).await.unwrap(), MAX_MEMBERS);
}
