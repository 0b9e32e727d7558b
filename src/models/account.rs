//! Trust account model
//!
//! Represents a pooled client trust (IOLTA) or escrow account as reported by
//! the practice-management backend. This crate only reads these records; they
//! are created and maintained upstream.
//!
//! Every field carries a serde default so that an incomplete or malformed
//! backend record still deserializes. The portfolio scanner then skips records
//! without a usable identifier and reports whatever issues remain computable,
//! instead of failing the whole scan on one bad row.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// A trust account record fetched from the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustAccount {
    /// Backend-assigned identifier
    pub id: AccountId,

    /// Display name (e.g., "Smith & Associates IOLTA Trust Account")
    pub name: String,

    /// Current balance; negative balances violate the zero balance principle
    pub balance: Money,

    /// Whether the backend has already determined the account title to be
    /// compliant. `None` means undetermined, in which case the scanner falls
    /// back to checking the display name itself.
    pub account_title_compliant: Option<bool>,

    /// Next scheduled three-way reconciliation date, as reported upstream.
    /// Kept as a raw string: an unparseable date must not fail the scan.
    pub next_reconciliation_due: Option<String>,

    /// Whether the depository institution is approved by the state bar
    pub state_bar_approved: Option<bool>,

    /// Identifiers of signatories authorized to draw on the account
    pub authorized_signatories: Vec<String>,
}

impl TrustAccount {
    /// Create an account record with the fields every record must have
    pub fn new(id: impl Into<AccountId>, name: impl Into<String>, balance: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            ..Default::default()
        }
    }

    /// Builder-style setter for the title-compliance flag
    pub fn with_title_compliant(mut self, compliant: bool) -> Self {
        self.account_title_compliant = Some(compliant);
        self
    }

    /// Builder-style setter for the next reconciliation due date
    pub fn with_reconciliation_due(mut self, due: impl Into<String>) -> Self {
        self.next_reconciliation_due = Some(due.into());
        self
    }

    /// Builder-style setter for the state bar approval flag
    pub fn with_state_bar_approved(mut self, approved: bool) -> Self {
        self.state_bar_approved = Some(approved);
        self
    }

    /// Builder-style setter for the authorized signatory list
    pub fn with_signatories<I, S>(mut self, signatories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authorized_signatories = signatories.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Display for TrustAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} ({})", self.name, self.id)
        }
    }
}
