//! Gym membership monitoring CLI
//!
//! Command-line front end over the same SQLite record store the dashboard
//! server uses.
//!
//! # Usage
//!
//! ```bash
//! gym add-member --name "Jane Doe" --fee-amount 35.00
//! gym list-members --overdue-only
//! gym record-payment --member-id 7 --amount 35.00
//! gym list-payments --member-id 7
//! gym export --output members.csv
//! ```

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use gym_server::db;
use shared::DueStatus;
use shared::error::ApiError;
use shared::export::members_to_csv;
use shared::models::member::MemberCreate;
use shared::models::payment::PaymentCreate;

mod output;

#[derive(Parser)]
#[command(name = "gym")]
#[command(version)]
#[command(about = "Gym membership monitoring tool", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, env = "GYM_DB", default_value = "gym.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new gym member
    AddMember {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: Option<String>,
        /// Admission date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        admission_date: Option<NaiveDate>,
        /// Billing cycle in months
        #[arg(long, default_value_t = 1)]
        plan_months: i32,
        #[arg(long)]
        fee_amount: Decimal,
    },
    /// List the member roster
    ListMembers {
        /// Show only members with overdue fees
        #[arg(long)]
        overdue_only: bool,
    },
    /// Record a fee payment
    RecordPayment {
        #[arg(long)]
        member_id: i64,
        #[arg(long)]
        amount: Decimal,
        /// Payment date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        paid_on: Option<NaiveDate>,
    },
    /// List payment history
    ListPayments {
        #[arg(long)]
        member_id: Option<i64>,
    },
    /// Export members to CSV
    Export {
        #[arg(long)]
        output: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let pool = db::connect(&cli.db)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("failed to open database at {}", cli.db))?;

    let today = Utc::now().date_naive();

    match cli.command {
        Commands::AddMember {
            name,
            phone,
            admission_date,
            plan_months,
            fee_amount,
        } => {
            let data = MemberCreate {
                name,
                phone,
                admission_date: admission_date.unwrap_or(today),
                plan_months,
                fee_amount,
            };
            match db::members::create_member(&pool, &data).await.map_err(ApiError::from) {
                Ok(member) => println!("Created member #{}: {}", member.id, member.name),
                Err(ApiError::CapacityExceeded { limit }) => {
                    eprintln!("Error: member limit of {limit} has been reached.");
                    eprintln!(
                        "The system supports up to {limit} members. \
                         Consider exporting or archiving old records."
                    );
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::ListMembers { overdue_only } => {
            let mut members = db::members::list_members(&pool, None)
                .await
                .map_err(ApiError::from)?;
            if overdue_only {
                members.retain(|m| m.status_on(today) == DueStatus::Overdue);
            }
            if members.is_empty() {
                println!("No members found.");
            } else {
                output::render_members(&members, today);
            }
        }
        Commands::RecordPayment {
            member_id,
            amount,
            paid_on,
        } => {
            let data = PaymentCreate {
                amount,
                paid_on: paid_on.unwrap_or(today),
            };
            let payment = db::payments::record_payment(&pool, member_id, &data)
                .await
                .map_err(ApiError::from)?;
            let member = db::members::get_member(&pool, member_id)
                .await
                .map_err(ApiError::from)?;
            println!(
                "Recorded payment #{} for member #{}. Next due date: {}",
                payment.id, payment.member_id, member.next_due_date
            );
        }
        Commands::ListPayments { member_id } => {
            let payments = db::payments::list_payments(&pool, member_id)
                .await
                .map_err(ApiError::from)?;
            if payments.is_empty() {
                println!("No payments found.");
            } else {
                output::render_payments(&payments);
            }
        }
        Commands::Export { output } => {
            let members = db::members::list_members(&pool, None)
                .await
                .map_err(ApiError::from)?;
            let csv = members_to_csv(&members);
            std::fs::write(&output, csv)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Exported members to {}", output.display());
        }
    }

    Ok(())
}
