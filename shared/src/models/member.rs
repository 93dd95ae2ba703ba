//! Member Model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::status::DueStatus;

/// Hard ceiling on stored member records.
pub const MAX_MEMBERS: i64 = 5000;

/// Member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub admission_date: NaiveDate,
    /// Billing cycle length in months (>= 1)
    pub plan_months: i32,
    /// Monthly-cycle fee at currency precision (2 fractional digits)
    pub fee_amount: Decimal,
    /// Maintained by the store: admission date advanced by `plan_months`
    /// at creation, then advanced again per recorded payment
    pub next_due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Classify this member's due date against a reference date.
    pub fn status_on(&self, today: NaiveDate) -> DueStatus {
        DueStatus::classify(self.next_due_date, today)
    }
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreate {
    pub name: String,
    pub phone: Option<String>,
    pub admission_date: NaiveDate,
    pub plan_months: i32,
    pub fee_amount: Decimal,
}

impl MemberCreate {
    /// Reject payloads the store must not accept.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::invalid_argument("name must not be empty"));
        }
        if self.plan_months < 1 {
            return Err(ApiError::invalid_argument("plan_months must be at least 1"));
        }
        if self.fee_amount < Decimal::ZERO {
            return Err(ApiError::invalid_argument("fee_amount must be non-negative"));
        }
        Ok(())
    }
}
