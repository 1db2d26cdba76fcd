//! The `validate` use case: evaluate a scan report against a failure expression.

use anyhow::Context;
use iacgate_settings::{IacgateConfigV1, Overrides, ResolvedConfig};
use iacgate_types::{SCHEMA_VALIDATION_V1, ToolMeta, ValidationSummary, Verdict};

use crate::input::parse_scan_report_json;

/// Input for the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateInput<'a> {
    /// Scan report JSON.
    pub report_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateOutput {
    pub summary: ValidationSummary,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Resolve the failure policy, decode the report, and evaluate it.
///
/// The policy is resolved first so a bad expression is reported before the report is read.
pub fn run_validate(input: ValidateInput<'_>) -> anyhow::Result<ValidateOutput> {
    let cfg = if input.config_text.trim().is_empty() {
        IacgateConfigV1::default()
    } else {
        iacgate_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        iacgate_settings::resolve_config(cfg, input.overrides).context("resolve config")?;
    tracing::debug!(
        expression = %resolved.expression,
        source = ?resolved.source,
        operator = %resolved.policy.operator,
        "resolved failure policy"
    );

    let report = parse_scan_report_json(input.report_text)?;
    let assessment =
        iacgate_domain::assess(&report.response.iac_validation_report, &resolved.policy)
            .context("evaluate IaC validation report")?;
    tracing::debug!(
        counts = ?assessment.counts.as_map(),
        flags = ?assessment.flags.as_map(),
        "assessed report"
    );

    let verdict = if assessment.breached {
        Verdict::Fail
    } else {
        Verdict::Pass
    };
    tracing::info!(
        violations = assessment.counts.total(),
        verdict = ?verdict,
        "validation complete"
    );

    let summary = ValidationSummary {
        schema: SCHEMA_VALIDATION_V1.to_string(),
        tool: ToolMeta {
            name: "iacgate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        expression: resolved.expression.clone(),
        operator: resolved.policy.operator,
        thresholds: resolved.policy.thresholds.as_map().clone(),
        counts: assessment.counts.as_map().clone(),
        breaches: assessment.flags.as_map().clone(),
        violations_total: assessment.counts.total(),
        verdict,
    };

    Ok(ValidateOutput {
        summary,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iacgate_types::{Operator, Severity};

    const REPORT: &str = r#"{
      "response": {
        "iacValidationReport": {
          "violations": [
            { "policyId": "p1", "assetId": "a1", "severity": "CRITICAL" },
            { "policyId": "p1", "assetId": "a2", "severity": "critical" },
            { "policyId": "p2", "assetId": "a3", "severity": "HIGH" },
            { "policyId": "p3", "assetId": "a4", "severity": "MEDIUM" },
            { "policyId": "p3", "assetId": "a5", "severity": "MEDIUM" },
            { "policyId": "p3", "assetId": "a6", "severity": "MEDIUM" },
            { "policyId": "p3", "assetId": "a7", "severity": "MEDIUM" }
          ]
        }
      }
    }"#;

    fn validate(expr: Option<&str>, config_text: &str) -> anyhow::Result<ValidateOutput> {
        run_validate(ValidateInput {
            report_text: REPORT,
            config_text,
            overrides: Overrides {
                failure_expression: expr.map(str::to_string),
                ..Overrides::default()
            },
        })
    }

    #[test]
    fn or_expression_breaches_on_medium() {
        let out = validate(Some("critical:2,high:1,medium:3,operator:or"), "").expect("validate");
        assert_eq!(out.summary.verdict, Verdict::Fail);
        assert_eq!(out.summary.counts.get(&Severity::Medium), Some(&4));
        assert_eq!(out.summary.breaches.get(&Severity::Medium), Some(&true));
        assert_eq!(out.summary.violations_total, 7);
        assert_eq!(out.summary.schema, SCHEMA_VALIDATION_V1);
    }

    #[test]
    fn and_expression_passes_when_one_severity_is_under() {
        let out = validate(Some("critical:2,high:2,operator:and"), "").expect("validate");
        assert_eq!(out.summary.verdict, Verdict::Pass);
        assert_eq!(out.summary.operator, Operator::And);
        assert_eq!(out.summary.breaches.get(&Severity::High), Some(&false));
    }

    #[test]
    fn default_policy_fails_any_violation() {
        let out = validate(None, "").expect("validate");
        assert_eq!(out.summary.verdict, Verdict::Fail);
        assert_eq!(out.summary.thresholds.len(), 4);
        assert!(!out.summary.counts.contains_key(&Severity::Low));
    }

    #[test]
    fn config_expression_applies_without_cli_override() {
        let out = validate(None, "failure_expression = \"low:1,operator:or\"\n").expect("validate");
        assert_eq!(out.summary.verdict, Verdict::Pass);
        assert_eq!(out.summary.expression, "low:1,operator:or");
    }

    #[test]
    fn bad_expression_fails_before_report_is_read() {
        let err = run_validate(ValidateInput {
            report_text: "not json",
            config_text: "",
            overrides: Overrides {
                failure_expression: Some("high:-1,operator:or".to_string()),
                ..Overrides::default()
            },
        })
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("resolve config"), "{msg}");
        assert!(!msg.contains("JSON"), "{msg}");
    }

    #[test]
    fn invalid_severity_is_an_error() {
        let err = run_validate(ValidateInput {
            report_text: r#"{"response":{"iacValidationReport":{"violations":[{"severity":"INVALID"}]}}}"#,
            config_text: "",
            overrides: Overrides::default(),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("INVALID"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
