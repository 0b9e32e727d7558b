//! Scan report export
//!
//! Exports portfolio scan results to JSON, YAML, or CSV so reports can feed
//! dashboards and record-retention workflows.

pub mod csv;
pub mod json;
pub mod yaml;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::str::FromStr;

use crate::validation::{ComplianceIssue, Severity};

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A portfolio scan result packaged for export
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// The date the scan was evaluated against
    pub as_of: NaiveDate,

    /// Application version that created the report
    pub app_version: String,

    /// Number of account records scanned (including skipped ones)
    pub accounts_scanned: usize,

    /// Number of error-severity issues
    pub error_count: usize,

    /// Number of warning-severity issues
    pub warning_count: usize,

    /// All issues found, in scan order
    pub issues: Vec<ComplianceIssue>,
}

impl ScanReport {
    /// Package scan results for export
    pub fn new(issues: Vec<ComplianceIssue>, accounts_scanned: usize, as_of: NaiveDate) -> Self {
        let error_count = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            as_of,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            accounts_scanned,
            error_count,
            warning_count: issues.len() - error_count,
            issues,
        }
    }

    /// Whether the scan found any blocking issues
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Output format for scan results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable table on stdout
    #[default]
    Table,
    Json,
    Csv,
    Yaml,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!(
                "Unknown format '{}'. Valid formats: table, json, csv, yaml",
                s
            )),
        }
    }
}
