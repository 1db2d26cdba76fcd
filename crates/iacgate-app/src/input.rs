use anyhow::Context;
use iacgate_types::IacScanReport;

/// Decode an IaC validation report from JSON text.
pub fn parse_scan_report_json(text: &str) -> anyhow::Result<IacScanReport> {
    let report: IacScanReport =
        serde_json::from_str(text).context("parse IaC validation report JSON")?;
    tracing::debug!(
        violations = report.violations().len(),
        name = %report.response.name,
        "decoded scan report"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_json() {
        let err = parse_scan_report_json("{ not json").unwrap_err();
        assert!(format!("{err:#}").contains("parse IaC validation report JSON"));
    }

    #[test]
    fn rejects_wrongly_typed_fields() {
        let text = r#"{"response": {"iacValidationReport": {"violations": 3}}}"#;
        assert!(parse_scan_report_json(text).is_err());
    }

    #[test]
    fn accepts_empty_document() {
        let report = parse_scan_report_json("{}").expect("parse");
        assert!(report.violations().is_empty());
    }
}
