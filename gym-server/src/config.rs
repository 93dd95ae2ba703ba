//! Dashboard server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Dashboard server configuration
///
/// All values come from the environment; nothing is hardcoded and nothing is
/// read from module-level globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database path (env: GYM_DB)
    pub database_path: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Admin account username
    pub admin_username: String,
    /// Admin account password (hashed at startup, never logged)
    pub admin_password: String,
    /// JWT secret for dashboard authentication
    pub jwt_secret: String,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development
    /// environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_path: std::env::var("GYM_DB").unwrap_or_else(|_| "gym.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: Self::require_secret("ADMIN_PASSWORD", &environment)?,
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            environment,
        })
    }
}
