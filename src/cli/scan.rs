//! Portfolio scan command
//!
//! Reads a JSON file of trust account records (as fetched from the
//! practice-management backend) and runs the portfolio compliance scanner
//! over it.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Args;

use crate::config::CompliancePolicy;
use crate::display::{format_issue_list, format_issue_summary};
use crate::error::{TrustError, TrustResult};
use crate::export::{self, ReportFormat, ScanReport};
use crate::models::TrustAccount;
use crate::validation::identify_compliance_issues;

/// Arguments for the scan command
#[derive(Args)]
pub struct ScanArgs {
    /// JSON file containing an array of trust account records
    pub accounts_file: PathBuf,

    /// Evaluate reconciliation due dates against this date instead of today
    /// (YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Output format (table, json, csv, yaml)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the scan command
///
/// Returns an error (and thus a non-zero exit) when the scan finds any
/// error-severity issue; warnings alone exit cleanly.
pub fn handle_scan_command(policy: &CompliancePolicy, args: ScanArgs) -> TrustResult<()> {
    let as_of = resolve_as_of(args.as_of.as_deref())?;
    let format: ReportFormat = args
        .format
        .parse()
        .map_err(TrustError::InvalidInput)?;

    let accounts = load_accounts(&args.accounts_file)?;
    let issues = identify_compliance_issues(&accounts, policy, as_of);
    let report = ScanReport::new(issues, accounts.len(), as_of);

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)
                .map_err(|e| TrustError::Io(format!("Failed to create {:?}: {}", path, e)))?;
            render_report(&report, format, &mut file)?;
            println!("{}", format_issue_summary(&report.issues, report.accounts_scanned));
            println!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout();
            render_report(&report, format, &mut stdout)?;
            if format == ReportFormat::Table {
                println!("{}", format_issue_summary(&report.issues, report.accounts_scanned));
            }
        }
    }

    if report.has_errors() {
        return Err(TrustError::CheckFailed(format!(
            "{} error-severity compliance issue{} found",
            report.error_count,
            if report.error_count == 1 { "" } else { "s" },
        )));
    }
    Ok(())
}

fn resolve_as_of(as_of: Option<&str>) -> TrustResult<NaiveDate> {
    match as_of {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            TrustError::InvalidInput(format!("Invalid --as-of date '{}'; expected YYYY-MM-DD", s))
        }),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Load the account array, surfacing a structured error for malformed files
fn load_accounts(path: &PathBuf) -> TrustResult<Vec<TrustAccount>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| TrustError::Io(format!("Failed to read {:?}: {}", path, e)))?;

    serde_json::from_str(&contents).map_err(|e| {
        TrustError::Json(format!(
            "{:?} is not a JSON array of trust account records: {}",
            path, e
        ))
    })
}

fn render_report<W: Write>(
    report: &ScanReport,
    format: ReportFormat,
    writer: &mut W,
) -> TrustResult<()> {
    match format {
        ReportFormat::Table => {
            write!(writer, "{}", format_issue_list(&report.issues))
                .map_err(|e| TrustError::Io(e.to_string()))?;
            Ok(())
        }
        ReportFormat::Json => export::json::write_json(report, writer),
        ReportFormat::Csv => export::csv::write_csv(report, writer),
        ReportFormat::Yaml => export::yaml::write_yaml(report, writer),
    }
}
