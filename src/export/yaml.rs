//! YAML report export

use std::io::Write;

use crate::error::{TrustError, TrustResult};

use super::ScanReport;

/// Write a scan report as YAML
pub fn write_yaml<W: Write>(report: &ScanReport, writer: &mut W) -> TrustResult<()> {
    serde_yaml::to_writer(writer, report).map_err(|e| TrustError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_report;

    #[test]
    fn test_yaml_export_contains_issues() {
        let mut buf = Vec::new();
        write_yaml(&sample_report(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("schema_version: 1.0.0"));
        assert!(text.contains("account_id: trust-001"));
        assert!(text.contains("severity: error"));
    }
}
