//! Due-date status classification

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days before (or on) the due date that still count as "due soon".
pub const DUE_SOON_WINDOW_DAYS: i64 = 3;

/// Payment status of a member relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DueStatus {
    #[serde(rename = "overdue")]
    Overdue,
    #[serde(rename = "due-soon")]
    DueSoon,
    #[serde(rename = "ok")]
    Ok,
}

impl DueStatus {
    /// Classify a due date against a reference date.
    ///
    /// A due date falling on the reference date itself is DueSoon, not
    /// Overdue.
    pub fn classify(next_due_date: NaiveDate, today: NaiveDate) -> Self {
        let days_until_due = next_due_date.signed_duration_since(today).num_days();
        if days_until_due < 0 {
            Self::Overdue
        } else if days_until_due <= DUE_SOON_WINDOW_DAYS {
            Self::DueSoon
        } else {
            Self::Ok
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "due-soon",
            Self::Ok => "ok",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::DueSoon => "Due Soon",
            Self::Ok => "OK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_due_today_is_due_soon_not_overdue() {
        let today = d(2024, 3, 15);
        assert_eq!(DueStatus::classify(today, today), DueStatus::DueSoon);
    }

    #[test]
    fn test_one_day_past_is_overdue() {
        assert_eq!(
            DueStatus::classify(d(2024, 3, 14), d(2024, 3, 15)),
            DueStatus::Overdue
        );
    }

    #[test]
    fn test_window_boundary() {
        let today = d(2024, 3, 15);
        assert_eq!(DueStatus::classify(d(2024, 3, 18), today), DueStatus::DueSoon);
        assert_eq!(DueStatus::classify(d(2024, 3, 19), today), DueStatus::Ok);
    }

    #[test]
    fn test_codes_and_labels() {
        assert_eq!(DueStatus::Overdue.code(), "overdue");
        assert_eq!(DueStatus::Overdue.label(), "Overdue");
        assert_eq!(DueStatus::DueSoon.code(), "due-soon");
        assert_eq!(DueStatus::DueSoon.label(), "Due Soon");
        assert_eq!(DueStatus::Ok.code(), "ok");
        assert_eq!(DueStatus::Ok.label(), "OK");
    }
}
