//! Application state for the dashboard server

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;
use crate::util::hash_password;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Admin account username
    pub admin_username: String,
    /// Argon2 hash of the admin password (computed once at startup so the
    /// plaintext never lives in the state)
    pub admin_password_hash: String,
    /// JWT signing secret
    pub jwt_secret: String,
}

impl AppState {
    /// Create a new AppState: open the store and prepare auth material.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database_path).await?;
        tracing::info!("record store ready at {}", config.database_path);

        let admin_password_hash = hash_password(&config.admin_password)?;

        Ok(Self {
            pool,
            admin_username: config.admin_username.clone(),
            admin_password_hash,
            jwt_secret: config.jwt_secret.clone(),
        })
    }
}
