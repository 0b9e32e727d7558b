//! TrustComply - IOLTA trust-account compliance checker
//!
//! This library implements the trust-accounting compliance rules that state
//! bars impose on attorney trust (IOLTA) and escrow accounts: the zero-balance
//! principle, prompt-deposit timing, payment-method prohibitions,
//! account-title wording, and portfolio-wide issue scanning.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Compliance policy (thresholds) and path management
//! - `error`: Custom error types
//! - `models`: Core data models (trust accounts, deposits, withdrawals)
//! - `validation`: The rules engine itself
//! - `display`: Terminal rendering of scan reports and check results
//! - `export`: JSON/CSV/YAML report export
//! - `cli`: Command handlers for the `trustcomply` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use trustcomply::config::policy::CompliancePolicy;
//! use trustcomply::validation::identify_compliance_issues;
//!
//! let policy = CompliancePolicy::default();
//! let issues = identify_compliance_issues(&accounts, &policy, as_of);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod validation;

pub use error::TrustError;
