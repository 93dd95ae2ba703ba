//! Shared types for the gym billing system
//!
//! Domain models, calendar arithmetic, due-status classification and the
//! unified error/response types used by both the dashboard server and the CLI.

pub mod calendar;
pub mod error;
pub mod export;
pub mod models;
pub mod response;
pub mod status;

// Re-exports
pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use models::member::{MAX_MEMBERS, Member, MemberCreate};
pub use models::payment::{Payment, PaymentCreate};
pub use status::DueStatus;
