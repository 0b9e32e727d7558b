//! Prompt-deposit timing rule
//!
//! Client funds must reach the trust account promptly after receipt: within
//! the policy's hard limit (48 hours by default), with best-practice guidance
//! at a tighter window (24 hours by default).
//!
//! The elapsed time is the absolute difference between the two timestamps. A
//! deposit timestamped before its funds-received timestamp is treated as a
//! transposed date pair rather than as automatically compliant, so using the
//! magnitude can only flag more, never less.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::config::CompliancePolicy;

/// Parse an ISO 8601 timestamp, with or without a UTC offset
///
/// Form input arrives both as full RFC 3339 strings and as bare local
/// datetimes ("2025-01-01T10:00:00"); bare datetimes are read as UTC. A bare
/// date is read as midnight UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Absolute hours elapsed between two timestamps, if both parse
fn elapsed_hours(funds_received: &str, deposited_at: &str) -> Option<f64> {
    let received = parse_timestamp(funds_received)?;
    let deposited = parse_timestamp(deposited_at)?;
    Some((deposited - received).num_seconds().abs() as f64 / 3600.0)
}

/// Boolean form of the prompt-deposit rule
///
/// `true` iff both dates parse and the elapsed time is within the policy's
/// hard limit. Unparseable input yields `false`.
pub fn prompt_deposit_within_limit(
    funds_received: &str,
    deposited_at: &str,
    policy: &CompliancePolicy,
) -> bool {
    match elapsed_hours(funds_received, deposited_at) {
        Some(hours) => hours <= policy.prompt_deposit_hours as f64,
        None => false,
    }
}

/// Detailed form of the prompt-deposit rule
#[derive(Debug, Clone)]
pub struct PromptDepositCheck {
    /// Whether the deposit satisfies the hard limit (or could not be tested)
    pub compliant: bool,
    /// Absolute hours between receipt and deposit, when both dates parse
    pub hours_elapsed: Option<f64>,
    /// Best-practice advisory, or a note that compliance was unverifiable
    pub warning: Option<String>,
    /// Violation message when the hard limit is exceeded or dates are invalid
    pub violation: Option<String>,
}

impl PromptDepositCheck {
    fn compliant_quietly(hours: f64) -> Self {
        Self {
            compliant: true,
            hours_elapsed: Some(hours),
            warning: None,
            violation: None,
        }
    }
}

/// Check a deposit against the prompt-deposit rule
///
/// A missing funds-received date is never itself a violation: the check passes
/// with an advisory that compliance could not be verified. Unparseable dates,
/// by contrast, are explicit input and are rejected.
pub fn check_prompt_deposit(
    funds_received: Option<&str>,
    deposited_at: &str,
    policy: &CompliancePolicy,
) -> PromptDepositCheck {
    let Some(received) = funds_received else {
        return PromptDepositCheck {
            compliant: true,
            hours_elapsed: None,
            warning: Some(
                "Funds-received date not provided; prompt deposit compliance could not be verified"
                    .into(),
            ),
            violation: None,
        };
    };

    let Some(hours) = elapsed_hours(received, deposited_at) else {
        return PromptDepositCheck {
            compliant: false,
            hours_elapsed: None,
            warning: None,
            violation: Some(
                "Funds-received or deposit date is not a valid ISO 8601 date".into(),
            ),
        };
    };

    let hard_limit = policy.prompt_deposit_hours as f64;
    let guidance = policy.prompt_deposit_warning_hours as f64;

    if hours > hard_limit {
        PromptDepositCheck {
            compliant: false,
            hours_elapsed: Some(hours),
            warning: None,
            violation: Some(format!(
                "Funds were deposited {:.1} hours after receipt; the {}-hour prompt \
                 deposit rule requires deposit within {} hours",
                hours, policy.prompt_deposit_hours, policy.prompt_deposit_hours
            )),
        }
    } else if hours > guidance {
        PromptDepositCheck {
            compliant: true,
            hours_elapsed: Some(hours),
            warning: Some(format!(
                "Funds were deposited {:.1} hours after receipt; best practice is \
                 deposit within {} hours",
                hours, policy.prompt_deposit_warning_hours
            )),
            violation: None,
        }
    } else {
        PromptDepositCheck::compliant_quietly(hours)
    }
}
