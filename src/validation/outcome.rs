//! Validation outcome types
//!
//! One canonical result type carries every rule finding, split by severity:
//! `errors` block persistence of the transaction, `warnings` are advisory and
//! never affect validity. The specialized check structs elsewhere in this
//! module (`BalanceCheck`, `PromptDepositCheck`, `MethodCheck`) are derived
//! from the same rule functions that feed `ValidationResult`, so the two
//! presentations cannot disagree about what the rules say.

use serde::Serialize;
use std::fmt;

/// Severity of a compliance finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory; the operation may proceed but should be flagged
    Warning,
    /// Blocking; the operation must be rejected
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Aggregate outcome of validating a transaction
///
/// Valid iff there are no errors; warnings never affect validity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    /// An outcome with no findings
    pub fn new() -> Self {
        Self::default()
    }

    /// An outcome carrying a single blocking error
    pub fn error(message: impl Into<String>) -> Self {
        let mut result = Self::new();
        result.push_error(message);
        result
    }

    /// Whether the transaction may be persisted
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Blocking error messages, in rule order
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Advisory warning messages, in rule order
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Append a blocking error
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Append an advisory warning
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append another outcome's findings, preserving their severities
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Append another outcome's findings, demoting its errors to warnings
    ///
    /// Used where a rule is advisory in one context but blocking in another,
    /// e.g. deposit timing issues flag the deposit without rejecting it.
    pub fn merge_as_warnings(&mut self, other: ValidationResult) {
        self.warnings.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}
