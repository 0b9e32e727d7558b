//! Core data models for TrustComply
//!
//! This module contains the data structures the rules engine operates on:
//! trust accounts as reported by the backend, and deposit/withdrawal records
//! as entered on transaction forms.

pub mod account;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::TrustAccount;
pub use ids::AccountId;
pub use money::Money;
pub use transaction::{Deposit, PaymentMethod, TransactionKind, Withdrawal};
