//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the validation layer.

pub mod policy;
pub mod scan;
pub mod transaction;

pub use policy::{handle_policy_command, PolicyCommands};
pub use scan::{handle_scan_command, ScanArgs};
pub use transaction::{
    handle_deposit_command, handle_withdrawal_command, DepositCommands, WithdrawalCommands,
};
