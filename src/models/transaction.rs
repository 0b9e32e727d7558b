//! Trust transaction models
//!
//! Deposits into and withdrawals from a trust account, as entered on the
//! deposit/withdrawal forms before submission to the backend. The validators
//! in `crate::validation` check these records against the compliance rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Direction of a trust transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Funds entering the trust account
    Deposit,
    /// Funds leaving the trust account
    Withdrawal,
}

/// Method of payment for a trust transaction
///
/// Withdrawal rules prohibit methods that leave no payee-level paper trail
/// (cash, ATM). Deposits are unrestricted by these rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Pre-numbered check
    Check,
    /// Wire transfer
    Wire,
    /// ACH transfer
    Ach,
    /// Electronic funds transfer
    Eft,
    /// Cash
    Cash,
    /// ATM withdrawal
    Atm,
    /// Any other method
    Other,
}

impl PaymentMethod {
    /// Parse a payment method from user or backend input, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "check" | "cheque" => Some(Self::Check),
            "wire" | "wire_transfer" => Some(Self::Wire),
            "ach" => Some(Self::Ach),
            "eft" => Some(Self::Eft),
            "cash" => Some(Self::Cash),
            "atm" => Some(Self::Atm),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Check => write!(f, "check"),
            Self::Wire => write!(f, "wire"),
            Self::Ach => write!(f, "ACH"),
            Self::Eft => write!(f, "EFT"),
            Self::Cash => write!(f, "cash"),
            Self::Atm => write!(f, "ATM"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Unknown payment method '{}'. Valid methods: check, wire, ach, eft, cash, atm, other",
                s
            )
        })
    }
}

/// A deposit into a trust account, as entered on the deposit form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deposit {
    /// Amount received into trust
    pub amount: Money,

    /// Description of the funds (e.g., "Retainer - Smith v. Jones")
    #[serde(default)]
    pub description: Option<String>,

    /// Who the funds came from
    #[serde(default)]
    pub payor: Option<String>,

    /// When the funds were physically received, if recorded (ISO 8601)
    #[serde(default)]
    pub funds_received: Option<String>,

    /// When the funds were deposited into the account (ISO 8601)
    pub deposited_at: String,
}

impl Deposit {
    /// Create a deposit with the required fields
    pub fn new(amount: Money, deposited_at: impl Into<String>) -> Self {
        Self {
            amount,
            description: None,
            payor: None,
            funds_received: None,
            deposited_at: deposited_at.into(),
        }
    }
}

/// A withdrawal from a trust account, as entered on the disbursement form
///
/// Carries the account balance as of validation time so the zero-balance rule
/// can be applied without a round trip to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Withdrawal {
    /// Amount to disburse
    pub amount: Money,

    /// Account balance at the time of validation
    pub current_balance: Money,

    /// Purpose of the disbursement
    #[serde(default)]
    pub description: Option<String>,

    /// Who the funds go to
    #[serde(default)]
    pub payee: Option<String>,

    /// How the funds leave the account
    pub method: PaymentMethod,

    /// Check number, required when `method` is `Check`
    #[serde(default)]
    pub check_number: Option<String>,
}

impl Withdrawal {
    /// Create a withdrawal with the required fields
    pub fn new(amount: Money, current_balance: Money, method: PaymentMethod) -> Self {
        Self {
            amount,
            current_balance,
            description: None,
            payee: None,
            method,
            check_number: None,
        }
    }
}
