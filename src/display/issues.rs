//! Scan report formatting
//!
//! Formats portfolio scan results for terminal output.

use crate::validation::{ComplianceIssue, Severity};

/// Format a list of compliance issues as a table
pub fn format_issue_list(issues: &[ComplianceIssue]) -> String {
    if issues.is_empty() {
        return "No compliance issues found.".to_string();
    }

    // Calculate column widths
    let account_width = issues
        .iter()
        .map(|i| i.account_id.as_str().len())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<account_width$}  {:<8}  {}\n",
        "Account",
        "Severity",
        "Issue",
        account_width = account_width,
    ));
    output.push_str(&format!(
        "{:-<account_width$}  {:-<8}  {:-<40}\n",
        "",
        "",
        "",
        account_width = account_width,
    ));

    for issue in issues {
        output.push_str(&format!(
            "{:<account_width$}  {:<8}  {}\n",
            issue.account_id.as_str(),
            issue.severity.to_string(),
            issue.message,
            account_width = account_width,
        ));
    }

    output
}

/// Format the one-line scan summary shown under the table
pub fn format_issue_summary(issues: &[ComplianceIssue], account_count: usize) -> String {
    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = issues.len() - errors;

    format!(
        "Scanned {} account{}: {} error{}, {} warning{}",
        account_count,
        if account_count == 1 { "" } else { "s" },
        errors,
        if errors == 1 { "" } else { "s" },
        warnings,
        if warnings == 1 { "" } else { "s" },
    )
}
