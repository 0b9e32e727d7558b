//! Compliance policy for TrustComply
//!
//! The thresholds and prohibitions the rules engine applies. Defaults encode
//! the common IOLTA baseline (48-hour prompt-deposit rule with 24-hour
//! guidance, 7-day reconciliation warning window, cash and ATM withdrawals
//! prohibited); a jurisdiction with different rules can persist its own values
//! to the policy file instead of editing code.

use serde::{Deserialize, Serialize};

use super::paths::TrustPaths;
use crate::error::TrustError;
use crate::models::PaymentMethod;

/// Hard limit on hours between receipt of funds and deposit
pub const DEFAULT_PROMPT_DEPOSIT_HOURS: i64 = 48;

/// Best-practice guidance on hours between receipt of funds and deposit
pub const DEFAULT_PROMPT_DEPOSIT_WARNING_HOURS: i64 = 24;

/// Days a reconciliation may run overdue before it escalates to an error
pub const DEFAULT_RECONCILIATION_WARNING_DAYS: i64 = 7;

/// Thresholds and prohibitions applied by the validators
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompliancePolicy {
    /// Deposits later than this many hours after receipt are violations
    pub prompt_deposit_hours: i64,

    /// Deposits later than this many hours (but within the hard limit)
    /// draw a best-practice warning
    pub prompt_deposit_warning_hours: i64,

    /// Reconciliations overdue by more than this many days are errors
    /// rather than warnings
    pub reconciliation_warning_days: i64,

    /// Payment methods that may not be used for withdrawals
    pub prohibited_withdrawal_methods: Vec<PaymentMethod>,
}

impl Default for CompliancePolicy {
    fn default() -> Self {
        Self {
            prompt_deposit_hours: DEFAULT_PROMPT_DEPOSIT_HOURS,
            prompt_deposit_warning_hours: DEFAULT_PROMPT_DEPOSIT_WARNING_HOURS,
            reconciliation_warning_days: DEFAULT_RECONCILIATION_WARNING_DAYS,
            prohibited_withdrawal_methods: vec![PaymentMethod::Cash, PaymentMethod::Atm],
        }
    }
}

impl CompliancePolicy {
    /// Check whether a payment method is prohibited for withdrawals
    pub fn prohibits_withdrawal_method(&self, method: PaymentMethod) -> bool {
        self.prohibited_withdrawal_methods.contains(&method)
    }

    /// Load the policy from disk, or fall back to defaults if no file exists
    pub fn load_or_default(paths: &TrustPaths) -> Result<Self, TrustError> {
        let policy_path = paths.policy_file();

        if policy_path.exists() {
            let contents = std::fs::read_to_string(&policy_path)
                .map_err(|e| TrustError::Io(format!("Failed to read policy file: {}", e)))?;

            let policy: CompliancePolicy = serde_json::from_str(&contents)
                .map_err(|e| TrustError::Policy(format!("Failed to parse policy file: {}", e)))?;

            policy.validate()?;
            Ok(policy)
        } else {
            Ok(CompliancePolicy::default())
        }
    }

    /// Save the policy to disk
    pub fn save(&self, paths: &TrustPaths) -> Result<(), TrustError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrustError::Policy(format!("Failed to serialize policy: {}", e)))?;

        std::fs::write(paths.policy_file(), contents)
            .map_err(|e| TrustError::Io(format!("Failed to write policy file: {}", e)))?;

        Ok(())
    }

    /// Reject threshold combinations that would make the rules meaningless
    pub fn validate(&self) -> Result<(), TrustError> {
        if self.prompt_deposit_hours <= 0 {
            return Err(TrustError::Policy(
                "prompt_deposit_hours must be positive".into(),
            ));
        }
        if self.prompt_deposit_warning_hours <= 0
            || self.prompt_deposit_warning_hours > self.prompt_deposit_hours
        {
            return Err(TrustError::Policy(
                "prompt_deposit_warning_hours must be positive and no greater than prompt_deposit_hours"
                    .into(),
            ));
        }
        if self.reconciliation_warning_days < 0 {
            return Err(TrustError::Policy(
                "reconciliation_warning_days must not be negative".into(),
            ));
        }
        Ok(())
    }
}
