//! Check result formatting
//!
//! Renders a deposit or withdrawal validation outcome the way the entry forms
//! surface it: errors as blocking messages, warnings as advisory flags.

use crate::validation::ValidationResult;

/// Format a transaction validation outcome for terminal output
pub fn format_validation_result(label: &str, result: &ValidationResult) -> String {
    let mut output = String::new();

    if result.is_valid() {
        output.push_str(&format!("{}: OK\n", label));
    } else {
        output.push_str(&format!(
            "{}: REJECTED ({} error{})\n",
            label,
            result.errors().len(),
            if result.errors().len() == 1 { "" } else { "s" },
        ));
    }

    for error in result.errors() {
        output.push_str(&format!("  error: {}\n", error));
    }
    for warning in result.warnings() {
        output.push_str(&format!("  warning: {}\n", warning));
    }

    output
}
