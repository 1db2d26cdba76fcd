//! Fuzz target for scan report decoding, counting, and SARIF conversion.
//!
//! Goal: none of these stages should **ever panic**.
//! A successful conversion has one result per violation and at most one rule per violation.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_scan_report
//! ```

#![no_main]

use iacgate_types::IacScanReport;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(report) = serde_json::from_slice::<IacScanReport>(data) else {
        return;
    };
    let violations = report.violations();

    let counted = iacgate_domain::count_violations(violations);
    let rendered = iacgate_render::render_sarif(&report.response.iac_validation_report);

    // Both stages reject exactly the same reports.
    assert_eq!(counted.is_ok(), rendered.is_ok());

    if let (Ok(counts), Ok(log)) = (counted, rendered) {
        assert_eq!(counts.total(), violations.len() as u64);
        let run = &log.runs[0];
        assert_eq!(run.results.len(), violations.len());
        assert!(run.tool.driver.rules.len() <= violations.len());
    }
});
