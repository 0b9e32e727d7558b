//! Portfolio compliance scanner
//!
//! Walks a collection of trust accounts and produces a flat list of
//! compliance issues with severities, for dashboards and compliance reports.
//!
//! Per account, checks run in a fixed order: negative balance, title
//! compliance, reconciliation overdue, state bar approval, authorized
//! signatories. Issues for one account never suppress issues for another, and
//! output order follows input order. Records without a usable identifier are
//! skipped; other malformed fields produce whatever partial results remain
//! computable. The scanner never reads the wall clock: callers pass the
//! `as_of` date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::CompliancePolicy;
use crate::models::{AccountId, TrustAccount};

use super::fields::validate_account_title;
use super::outcome::Severity;
use super::timing::parse_timestamp;

/// A single compliance finding against one account
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceIssue {
    /// The account the issue was found on
    pub account_id: AccountId,
    /// Human-readable description of the issue
    pub message: String,
    /// Whether the issue is blocking or advisory
    pub severity: Severity,
}

impl ComplianceIssue {
    fn error(account_id: &AccountId, message: impl Into<String>) -> Self {
        Self {
            account_id: account_id.clone(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    fn warning(account_id: &AccountId, message: impl Into<String>) -> Self {
        Self {
            account_id: account_id.clone(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

/// Scan a portfolio of trust accounts for compliance issues
pub fn identify_compliance_issues(
    accounts: &[TrustAccount],
    policy: &CompliancePolicy,
    as_of: NaiveDate,
) -> Vec<ComplianceIssue> {
    let mut issues = Vec::new();

    for account in accounts {
        if account.id.is_blank() {
            continue;
        }
        scan_account(account, policy, as_of, &mut issues);
    }

    issues
}

fn scan_account(
    account: &TrustAccount,
    policy: &CompliancePolicy,
    as_of: NaiveDate,
    issues: &mut Vec<ComplianceIssue>,
) {
    if account.balance.is_negative() {
        issues.push(ComplianceIssue::error(
            &account.id,
            format!(
                "Balance of {} violates the zero balance principle",
                account.balance
            ),
        ));
    }

    if !title_is_compliant(account) {
        issues.push(ComplianceIssue::error(
            &account.id,
            "Account title must identify the account as a trust account or escrow account",
        ));
    }

    if let Some(days_overdue) = days_reconciliation_overdue(account, as_of) {
        let severity = if days_overdue > policy.reconciliation_warning_days {
            Severity::Error
        } else {
            Severity::Warning
        };
        issues.push(ComplianceIssue {
            account_id: account.id.clone(),
            message: format!(
                "Three-way reconciliation is {} day{} overdue",
                days_overdue,
                if days_overdue == 1 { "" } else { "s" }
            ),
            severity,
        });
    }

    if account.state_bar_approved == Some(false) {
        issues.push(ComplianceIssue::warning(
            &account.id,
            "Depository institution is not recorded as approved by the state bar",
        ));
    }

    if account.authorized_signatories.is_empty() {
        issues.push(ComplianceIssue::error(
            &account.id,
            "Account has no authorized signatories on record",
        ));
    }
}

/// Resolve title compliance from the backend flag, falling back to the name
///
/// An explicit `false` is a violation; an explicit `true` is trusted. When the
/// backend left the flag undetermined, a non-empty name is checked against the
/// title wording rule; a record with neither flag nor name raises no issue.
fn title_is_compliant(account: &TrustAccount) -> bool {
    match account.account_title_compliant {
        Some(flag) => flag,
        None => account.name.is_empty() || validate_account_title(&account.name),
    }
}

/// Whole days the next reconciliation is overdue, if strictly in the past
///
/// Returns `None` when the due date is today, in the future, missing, or
/// unparseable.
fn days_reconciliation_overdue(account: &TrustAccount, as_of: NaiveDate) -> Option<i64> {
    let raw = account.next_reconciliation_due.as_deref()?;
    let due = parse_timestamp(raw)?.date_naive();
    let days = (as_of - due).num_days();
    (days > 0).then_some(days)
}
