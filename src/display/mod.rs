//! Display formatting for terminal output
//!
//! Provides utilities for formatting scan reports and check results for
//! terminal display.

pub mod issues;
pub mod outcome;

pub use issues::{format_issue_list, format_issue_summary};
pub use outcome::format_validation_result;
