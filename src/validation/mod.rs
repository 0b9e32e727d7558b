//! Trust-accounting compliance rules
//!
//! Pure, synchronous rule checks: field validators, the composite deposit and
//! withdrawal validators built from them, and the portfolio scanner. Nothing
//! in this module performs I/O or reads the wall clock; thresholds come from
//! `CompliancePolicy` and the scan date is passed in by the caller.

pub mod balance;
pub mod fields;
pub mod outcome;
pub mod portfolio;
pub mod timing;
pub mod transaction;

pub use balance::{check_zero_balance, validate_zero_balance, BalanceCheck};
pub use fields::{
    check_cash_withdrawal_prohibition, validate_account_title, validate_amount,
    validate_check_number, validate_payment_method, validate_required, MethodCheck,
};
pub use outcome::{Severity, ValidationResult};
pub use portfolio::{identify_compliance_issues, ComplianceIssue};
pub use timing::{check_prompt_deposit, prompt_deposit_within_limit, PromptDepositCheck};
pub use transaction::{validate_deposit, validate_withdrawal};
