//! Database access layer (SQLite billing record store)

pub mod members;
pub mod payments;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Open (creating if missing) the SQLite database and apply migrations.
///
/// Foreign keys are enabled on every pooled connection so that deleting a
/// member cascades to its payments.
pub async fn connect(path: &str) -> Result<SqlitePool, BoxError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(options).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}
