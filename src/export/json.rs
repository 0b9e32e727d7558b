//! JSON report export

use std::io::Write;

use crate::error::{TrustError, TrustResult};

use super::ScanReport;

/// Write a scan report as pretty-printed JSON
pub fn write_json<W: Write>(report: &ScanReport, writer: &mut W) -> TrustResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|e| TrustError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrustError::Export(e.to_string()))?;
    Ok(())
}
