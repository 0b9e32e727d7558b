//! CSV report export
//!
//! Flattens a scan report to one row per issue. Report-level fields
//! (as-of date, severity counts) appear on every row so the file remains
//! self-describing when rows are filtered in a spreadsheet.

use std::io::Write;

use crate::error::{TrustError, TrustResult};

use super::ScanReport;

/// Write a scan report as CSV, one row per issue
pub fn write_csv<W: Write>(report: &ScanReport, writer: W) -> TrustResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["as_of", "account_id", "severity", "message"])
        .map_err(|e| TrustError::Export(e.to_string()))?;

    let as_of = report.as_of.to_string();
    for issue in &report.issues {
        csv_writer
            .write_record([
                as_of.as_str(),
                issue.account_id.as_str(),
                &issue.severity.to_string(),
                &issue.message,
            ])
            .map_err(|e| TrustError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrustError::Export(e.to_string()))?;
    Ok(())
}
