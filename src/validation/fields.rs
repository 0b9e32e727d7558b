//! Field-level compliance rules
//!
//! Pure, single-concern checks: account title wording, transaction amount
//! sanity, required-field presence, payment-method legality, and the
//! pre-numbered-check requirement. Composite transaction validation in
//! `validation::transaction` is built out of these.

use crate::config::CompliancePolicy;
use crate::models::{Money, PaymentMethod, TransactionKind};

use super::outcome::ValidationResult;

/// Check whether an account display name satisfies title-compliance wording
///
/// Trust-accounting rules require the account title to clearly identify the
/// account as holding client funds. Returns `true` iff the name contains
/// "trust account" or "escrow account", case-insensitively; anything else,
/// including an empty name, fails.
pub fn validate_account_title(account_name: &str) -> bool {
    let name = account_name.to_lowercase();
    name.contains("trust account") || name.contains("escrow account")
}

/// Check that a transaction amount is a usable positive amount
pub fn validate_amount(amount: Money) -> ValidationResult {
    if amount.is_zero() {
        ValidationResult::error("Transaction amount is required and must be greater than zero")
    } else if amount.is_negative() {
        ValidationResult::error(format!(
            "Transaction amount must be greater than zero (got {})",
            amount
        ))
    } else {
        ValidationResult::new()
    }
}

/// Check that a required free-text field is present and non-blank
pub fn validate_required(value: Option<&str>, field_name: &str) -> ValidationResult {
    match value {
        Some(v) if !v.trim().is_empty() => ValidationResult::new(),
        _ => ValidationResult::error(format!("{} is required", field_name)),
    }
}

/// First violation message for a payment method, if any
///
/// Single source of truth for the prohibition: both `validate_payment_method`
/// and `check_cash_withdrawal_prohibition` are built on this.
fn prohibited_method_violation(
    method: PaymentMethod,
    kind: TransactionKind,
    policy: &CompliancePolicy,
) -> Option<String> {
    if kind == TransactionKind::Deposit {
        // Deposit methods are unrestricted by these rules
        return None;
    }
    if policy.prohibits_withdrawal_method(method) {
        Some(format!(
            "Payment method '{}' is prohibited for trust account withdrawals. \
             Use check, wire, ACH, or EFT instead",
            method
        ))
    } else {
        None
    }
}

/// Check a payment method against the prohibited-withdrawal-method set
///
/// Deposits are always valid regardless of method.
pub fn validate_payment_method(
    method: PaymentMethod,
    kind: TransactionKind,
    policy: &CompliancePolicy,
) -> ValidationResult {
    match prohibited_method_violation(method, kind, policy) {
        Some(violation) => ValidationResult::error(violation),
        None => ValidationResult::new(),
    }
}

/// Detailed form of the withdrawal payment-method check
#[derive(Debug, Clone)]
pub struct MethodCheck {
    /// Whether the method is allowed for withdrawals
    pub compliant: bool,
    /// The violation message when not compliant
    pub violation: Option<String>,
}

/// Check whether a withdrawal method falls under the cash/ATM prohibition
pub fn check_cash_withdrawal_prohibition(
    method: PaymentMethod,
    policy: &CompliancePolicy,
) -> MethodCheck {
    let violation = prohibited_method_violation(method, TransactionKind::Withdrawal, policy);
    MethodCheck {
        compliant: violation.is_none(),
        violation,
    }
}

/// Check the pre-numbered check requirement
///
/// Check withdrawals must carry a check number; all other methods pass.
pub fn validate_check_number(
    method: PaymentMethod,
    check_number: Option<&str>,
) -> ValidationResult {
    if method != PaymentMethod::Check {
        return ValidationResult::new();
    }
    match check_number {
        Some(n) if !n.trim().is_empty() => ValidationResult::new(),
        _ => ValidationResult::error(
            "Check withdrawals require a check number; trust disbursements must use \
             pre-numbered checks",
        ),
    }
}
