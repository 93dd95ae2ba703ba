//! Payment Model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Payment entity
///
/// Created only by the payment-recording operation and never mutated or
/// individually deleted; rows disappear with their member (cascade).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub member_id: i64,
    pub amount: Decimal,
    /// Caller-supplied payment date
    pub paid_on: NaiveDate,
    pub recorded_at: DateTime<Utc>,
}

/// Record payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub amount: Decimal,
    pub paid_on: NaiveDate,
}

impl PaymentCreate {
    /// Reject payloads the store must not accept.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.amount < Decimal::ZERO {
            return Err(ApiError::invalid_argument("amount must be non-negative"));
        }
        Ok(())
    }
}
