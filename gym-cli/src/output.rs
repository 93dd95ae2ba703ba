//! Table rendering for CLI output

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use shared::models::member::Member;
use shared::models::payment::Payment;

#[derive(Tabled)]
struct MemberLine {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Admission")]
    admission: String,
    #[tabled(rename = "Cycle (months)")]
    plan_months: i32,
    #[tabled(rename = "Fee")]
    fee: String,
    #[tabled(rename = "Next Due")]
    next_due: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Print the member roster as a table with a status column.
pub fn render_members(members: &[Member], today: NaiveDate) {
    let lines: Vec<MemberLine> = members
        .iter()
        .map(|m| MemberLine {
            id: m.id,
            name: m.name.clone(),
            phone: m.phone.clone().unwrap_or_else(|| "-".to_string()),
            admission: m.admission_date.to_string(),
            plan_months: m.plan_months,
            fee: format!("{:.2}", m.fee_amount.round_dp(2)),
            next_due: m.next_due_date.to_string(),
            status: m.status_on(today).label().to_string(),
        })
        .collect();

    println!("{}", Table::new(lines).with(Style::markdown()));
}

#[derive(Tabled)]
struct PaymentLine {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Member")]
    member_id: i64,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Paid On")]
    paid_on: String,
    #[tabled(rename = "Recorded")]
    recorded: String,
}

/// Print payment history as a table.
pub fn render_payments(payments: &[Payment]) {
    let lines: Vec<PaymentLine> = payments
        .iter()
        .map(|p| PaymentLine {
            id: p.id,
            member_id: p.member_id,
            amount: format!("{:.2}", p.amount.round_dp(2)),
            paid_on: p.paid_on.to_string(),
            recorded: p.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    println!("{}", Table::new(lines).with(Style::markdown()));
}
