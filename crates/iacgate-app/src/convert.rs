//! The `sarif` use case: convert a scan report to SARIF.

use anyhow::Context;
use iacgate_settings::{IacgateConfigV1, Overrides};
use iacgate_types::SarifLog;

use crate::input::parse_scan_report_json;

/// Input for the convert use case.
#[derive(Clone, Debug)]
pub struct ConvertInput<'a> {
    /// Scan report JSON.
    pub report_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides. Only `sarif_out` is consulted.
    pub overrides: Overrides,
}

/// Output from the convert use case.
#[derive(Clone, Debug)]
pub struct ConvertOutput {
    pub log: SarifLog,
    /// Where the caller should write the log.
    pub sarif_out: String,
}

pub fn run_convert(input: ConvertInput<'_>) -> anyhow::Result<ConvertOutput> {
    let cfg = if input.config_text.trim().is_empty() {
        IacgateConfigV1::default()
    } else {
        iacgate_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    iacgate_settings::check_schema(&cfg).context("resolve config")?;
    let sarif_out = iacgate_settings::resolve_sarif_out(&cfg, &input.overrides);

    let report = parse_scan_report_json(input.report_text)?;
    let log = iacgate_render::render_sarif(&report.response.iac_validation_report)
        .context("convert IaC validation report to SARIF")?;

    if let Some(run) = log.runs.first() {
        tracing::info!(
            rules = run.tool.driver.rules.len(),
            results = run.results.len(),
            "converted report to SARIF"
        );
    }
    Ok(ConvertOutput { log, sarif_out })
}

/// Pretty-printed JSON with a trailing newline.
pub fn serialize_sarif(log: &SarifLog) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(log).context("serialize SARIF log")?;
    text.push('\n');
    Ok(text)
}
