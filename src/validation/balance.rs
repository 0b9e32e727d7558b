//! Zero-balance rule
//!
//! A trust account may never be drawn below zero: a withdrawal is only
//! permitted if the balance after the withdrawal is non-negative. Overdrawing
//! a pooled client trust account means spending one client's funds on
//! another's matter.

use crate::models::Money;

use super::outcome::ValidationResult;

/// Detailed form of the zero-balance check
#[derive(Debug, Clone, Copy)]
pub struct BalanceCheck {
    /// Whether the withdrawal leaves a non-negative balance
    pub valid: bool,
    /// Balance after the withdrawal (may be negative)
    pub new_balance: Money,
    /// Amount by which the account would be overdrawn, when invalid
    pub shortfall: Option<Money>,
}

/// Check a withdrawal against the zero-balance principle
pub fn check_zero_balance(current_balance: Money, withdrawal_amount: Money) -> BalanceCheck {
    let new_balance = current_balance - withdrawal_amount;
    if new_balance.is_negative() {
        BalanceCheck {
            valid: false,
            new_balance,
            shortfall: Some(new_balance.abs()),
        }
    } else {
        BalanceCheck {
            valid: true,
            new_balance,
            shortfall: None,
        }
    }
}

/// List form of the zero-balance check
pub fn validate_zero_balance(current_balance: Money, withdrawal_amount: Money) -> ValidationResult {
    let check = check_zero_balance(current_balance, withdrawal_amount);
    match check.shortfall {
        Some(shortfall) => ValidationResult::error(format!(
            "Insufficient funds: withdrawing {} from a balance of {} would overdraw \
             the trust account by {}",
            withdrawal_amount, current_balance, shortfall
        )),
        None => ValidationResult::new(),
    }
}
