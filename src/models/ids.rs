//! Strongly-typed ID wrapper for trust accounts
//!
//! Account identifiers are issued by the practice-management backend and are
//! opaque strings from this crate's point of view. The newtype keeps them from
//! being mixed up with other string fields at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a trust account, as assigned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account ID from a backend identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the identifier is missing or blank
    ///
    /// Records without a usable identifier are skipped by the portfolio
    /// scanner rather than reported against an unnameable account.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
