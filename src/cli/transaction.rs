//! Deposit and withdrawal pre-check commands
//!
//! Runs the composite transaction validators over a transaction described
//! either as a JSON file (the same shape the entry forms submit) or inline
//! via flags. Errors are blocking and produce a non-zero exit; warnings are
//! printed but do not fail the check.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::CompliancePolicy;
use crate::display::format_validation_result;
use crate::error::{TrustError, TrustResult};
use crate::models::{Deposit, Money, PaymentMethod, Withdrawal};
use crate::validation::{validate_deposit, validate_withdrawal, ValidationResult};

/// Deposit subcommands
#[derive(Subcommand)]
pub enum DepositCommands {
    /// Validate a deposit before submitting it to the backend
    Check {
        /// JSON file describing the deposit; omit to use the flags below
        file: Option<PathBuf>,
        /// Amount (e.g., "1500.00")
        #[arg(short, long)]
        amount: Option<String>,
        /// Description of the funds
        #[arg(short, long)]
        description: Option<String>,
        /// Who the funds came from
        #[arg(short, long)]
        payor: Option<String>,
        /// Deposit date (ISO 8601)
        #[arg(long)]
        date: Option<String>,
        /// Date the funds were received (ISO 8601)
        #[arg(long)]
        received: Option<String>,
    },
}

/// Withdrawal subcommands
#[derive(Subcommand)]
pub enum WithdrawalCommands {
    /// Validate a withdrawal before submitting it to the backend
    Check {
        /// JSON file describing the withdrawal; omit to use the flags below
        file: Option<PathBuf>,
        /// Amount to disburse (e.g., "500.00")
        #[arg(short, long)]
        amount: Option<String>,
        /// Current account balance (e.g., "1000.00")
        #[arg(short, long)]
        balance: Option<String>,
        /// Purpose of the disbursement
        #[arg(short, long)]
        description: Option<String>,
        /// Who the funds go to
        #[arg(short, long)]
        payee: Option<String>,
        /// Payment method (check, wire, ach, eft, cash, atm, other)
        #[arg(short, long)]
        method: Option<String>,
        /// Check number (required for check withdrawals)
        #[arg(long)]
        check_number: Option<String>,
    },
}

/// Handle a deposit command
pub fn handle_deposit_command(policy: &CompliancePolicy, cmd: DepositCommands) -> TrustResult<()> {
    let DepositCommands::Check {
        file,
        amount,
        description,
        payor,
        date,
        received,
    } = cmd;

    let deposit = match file {
        Some(path) => read_json(&path)?,
        None => Deposit {
            amount: parse_amount(amount.as_deref(), "--amount")?,
            description,
            payor,
            funds_received: received,
            deposited_at: date.ok_or_else(|| {
                TrustError::InvalidInput("--date is required when no file is given".into())
            })?,
        },
    };

    finish_check("Deposit", validate_deposit(&deposit, policy))
}

/// Handle a withdrawal command
pub fn handle_withdrawal_command(
    policy: &CompliancePolicy,
    cmd: WithdrawalCommands,
) -> TrustResult<()> {
    let WithdrawalCommands::Check {
        file,
        amount,
        balance,
        description,
        payee,
        method,
        check_number,
    } = cmd;

    let withdrawal = match file {
        Some(path) => read_json(&path)?,
        None => Withdrawal {
            amount: parse_amount(amount.as_deref(), "--amount")?,
            current_balance: parse_amount(balance.as_deref(), "--balance")?,
            description,
            payee,
            method: method
                .ok_or_else(|| {
                    TrustError::InvalidInput("--method is required when no file is given".into())
                })?
                .parse::<PaymentMethod>()
                .map_err(TrustError::InvalidInput)?,
            check_number,
        },
    };

    finish_check("Withdrawal", validate_withdrawal(&withdrawal, policy))
}

fn parse_amount(value: Option<&str>, flag: &str) -> TrustResult<Money> {
    let value = value.ok_or_else(|| TrustError::invalid_field(flag, "value is required"))?;
    Money::parse(value).map_err(|e| TrustError::invalid_field(flag, e.to_string()))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> TrustResult<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| TrustError::Io(format!("Failed to read {:?}: {}", path, e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| TrustError::Json(format!("Failed to parse {:?}: {}", path, e)))
}

/// Print the outcome; a non-empty error list fails the command
fn finish_check(label: &str, result: ValidationResult) -> TrustResult<()> {
    print!("{}", format_validation_result(label, &result));

    if result.is_valid() {
        Ok(())
    } else {
        Err(TrustError::CheckFailed(format!(
            "{} blocking error{}",
            result.errors().len(),
            if result.errors().len() == 1 { "" } else { "s" },
        )))
    }
}
