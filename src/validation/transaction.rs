//! Composite transaction validation
//!
//! Combines the field-level rules into a single verdict for a whole deposit
//! or withdrawal, in the order the entry forms present the fields.

use crate::config::CompliancePolicy;
use crate::models::{Deposit, TransactionKind, Withdrawal};

use super::balance::validate_zero_balance;
use super::fields::{
    validate_amount, validate_check_number, validate_payment_method, validate_required,
};
use super::outcome::ValidationResult;
use super::timing::check_prompt_deposit;

/// Validate a deposit before it is submitted to the backend
///
/// Blocking checks: amount, description, payor. The prompt-deposit timing
/// check is advisory here: late or unverifiable timing flags the deposit in
/// `warnings` but never rejects it, since refusing to record a deposit that
/// already happened would only compound the violation.
pub fn validate_deposit(deposit: &Deposit, policy: &CompliancePolicy) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(validate_amount(deposit.amount));
    result.merge(validate_required(deposit.description.as_deref(), "Description"));
    result.merge(validate_required(deposit.payor.as_deref(), "Payor"));

    let timing = check_prompt_deposit(
        deposit.funds_received.as_deref(),
        &deposit.deposited_at,
        policy,
    );
    let mut timing_result = ValidationResult::new();
    if let Some(violation) = timing.violation {
        timing_result.push_error(violation);
    }
    if let Some(warning) = timing.warning {
        timing_result.push_warning(warning);
    }
    result.merge_as_warnings(timing_result);

    result
}

/// Validate a withdrawal before it is submitted to the backend
///
/// All checks are blocking, in the order: amount, description, payee, payment
/// method, check number, zero balance.
pub fn validate_withdrawal(withdrawal: &Withdrawal, policy: &CompliancePolicy) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(validate_amount(withdrawal.amount));
    result.merge(validate_required(withdrawal.description.as_deref(), "Description"));
    result.merge(validate_required(withdrawal.payee.as_deref(), "Payee"));
    result.merge(validate_payment_method(
        withdrawal.method,
        TransactionKind::Withdrawal,
        policy,
    ));
    result.merge(validate_check_number(
        withdrawal.method,
        withdrawal.check_number.as_deref(),
    ));
    result.merge(validate_zero_balance(
        withdrawal.current_balance,
        withdrawal.amount,
    ));

    result
}
