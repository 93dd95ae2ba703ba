//! CSV export formatting for member rosters

use crate::models::member::Member;

/// Fixed header row for member exports.
pub const CSV_HEADER: &str =
    "id,name,phone,admission_date,plan_months,fee_amount,next_due_date,created_at";

/// Render members as CSV, one row per member ordered by id ascending.
///
/// Fees are formatted to exactly 2 fractional digits; an absent phone becomes
/// an empty cell.
pub fn members_to_csv(members: &[Member]) -> String {
    let mut sorted: Vec<&Member> = members.iter().collect();
    sorted.sort_by_key(|m| m.id);

    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for m in sorted {
        out.push_str(&format!(
            "{},{},{},{},{},{:.2},{},{}\n",
            m.id,
            m.name,
            m.phone.as_deref().unwrap_or(""),
            m.admission_date,
            m.plan_months,
            m.fee_amount.round_dp(2),
            m.next_due_date,
            m.created_at.to_rfc3339(),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn member(id: i64, name: &str, phone: Option<&str>, fee: &str) -> Member {
        Member {
            id,
            name: name.to_string(),
            phone: phone.map(String::from),
            admission_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            plan_months: 1,
            fee_amount: Decimal::from_str(fee).unwrap(),
            next_due_date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_header_and_order() {
        let members = [member(2, "Bob", None, "35.00"), member(1, "Alice", Some("555-0100"), "40.5")];
        let csv = members_to_csv(&members);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("1,Alice,555-0100,"));
        assert!(lines[2].starts_with("2,Bob,,"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_fee_has_two_fractional_digits() {
        let csv = members_to_csv(&[member(1, "Alice", None, "40.5")]);
        assert!(csv.contains(",40.50,"), "csv was: {csv}");
    }

    #[test]
    fn test_empty_roster_is_header_only() {
        assert_eq!(members_to_csv(&[]), format!("{CSV_HEADER}\n"));
    }
}
