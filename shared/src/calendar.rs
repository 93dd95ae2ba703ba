//! Calendar-month arithmetic for billing cycles

use chrono::{Datelike, NaiveDate};

use crate::error::ApiError;

/// Advance a date by a whole number of calendar months.
///
/// The day of month is preserved when possible, otherwise clamped to the last
/// valid day of the target month: Jan 31 + 1 month lands on Feb 28 (Feb 29 in
/// leap years) rather than rolling into March. Only advances time; a negative
/// month count is rejected.
pub fn add_months(start: NaiveDate, months: i32) -> Result<NaiveDate, ApiError> {
    if months < 0 {
        return Err(ApiError::invalid_argument("months must be non-negative"));
    }
    let month_index = start.month0() as i32 + months;
    let year = start.year() + month_index / 12;
    let month = (month_index % 12 + 1) as u32;
    let day = start.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ApiError::invalid_argument(format!("date out of range: {year}-{month:02}-{day:02}")))
}

/// Number of days in a Gregorian calendar month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_identity_at_zero_months() {
        for date in [d(2024, 1, 31), d(2023, 2, 28), d(2024, 2, 29), d(2021, 12, 1)] {
            assert_eq!(add_months(date, 0).unwrap(), date);
        }
    }

    #[test]
    fn test_clamps_into_leap_february() {
        assert_eq!(add_months(d(2024, 1, 31), 1).unwrap(), d(2024, 2, 29));
    }

    #[test]
    fn test_clamps_into_short_february() {
        assert_eq!(add_months(d(2023, 1, 31), 1).unwrap(), d(2023, 2, 28));
    }

    #[test]
    fn test_carries_into_next_year() {
        assert_eq!(add_months(d(2024, 1, 31), 13).unwrap(), d(2025, 2, 28));
        assert_eq!(add_months(d(2023, 11, 15), 2).unwrap(), d(2024, 1, 15));
        assert_eq!(add_months(d(2020, 6, 30), 36).unwrap(), d(2023, 6, 30));
    }

    #[test]
    fn test_thirty_day_month_clamp() {
        assert_eq!(add_months(d(2024, 3, 31), 1).unwrap(), d(2024, 4, 30));
        assert_eq!(add_months(d(2024, 8, 31), 1).unwrap(), d(2024, 9, 30));
    }

    #[test]
    fn test_additive_for_unclamped_days() {
        // Days 1-28 exist in every month, so splitting the advance can never
        // hit the clamp and the two paths must agree.
        for (m, n) in [(1, 1), (2, 3), (5, 7), (0, 12), (11, 1)] {
            for start in [d(2024, 1, 28), d(2023, 3, 15), d(2021, 12, 1)] {
                let split = add_months(add_months(start, m).unwrap(), n).unwrap();
                let joined = add_months(start, m + n).unwrap();
                assert_eq!(split, joined, "start {start}, split {m}+{n}");
            }
        }
    }

    #[test]
    fn test_advance_from_clamped_date_keeps_clamped_day() {
        // Once a cycle anchor has been clamped to Feb 28, later advances move
        // from the 28th; they do not recover the original day 31.
        let due = add_months(d(2023, 1, 31), 1).unwrap();
        assert_eq!(add_months(due, 1).unwrap(), d(2023, 3, 28));
    }

    #[test]
    fn test_negative_months_rejected() {
        let err = add_months(d(2024, 1, 31), -1).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument { .. }));
    }

    #[test]
    fn test_days_in_month_gregorian_rule() {
        assert_eq!(days_in_month(2024, 2), 29); // divisible by 4
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28); // century, not divisible by 400
        assert_eq!(days_in_month(2000, 2), 29); // divisible by 400
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }
}
