//! gym-server — membership billing dashboard API
//!
//! Long-running service that:
//! - Owns the SQLite billing record store (members, payments)
//! - Serves the dashboard API (JWT authenticated)
//! - Exposes roster CSV export

use gym_server::api;
use gym_server::config::Config;
use gym_server::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gym_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting gym-server (env: {})", config.environment);

    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("gym-server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
