use crate::fingerprint::fingerprint_for_violation;
use iacgate_types::{
    IacValidationReport, InvalidSeverity, LogicalLocation, ResultProperties, RuleProperties,
    SarifDriver, SarifLocation, SarifLog, SarifResult, SarifRule, SarifRun, SarifText, SarifTool,
    Severity, Violation, ids,
};
use std::collections::{BTreeMap, BTreeSet};

/// Re-express a validation report as a SARIF log with a single run.
///
/// Rules are built first; an invalid severity anywhere in the report fails the whole
/// conversion and nothing is returned.
pub fn render_sarif(report: &IacValidationReport) -> Result<SarifLog, InvalidSeverity> {
    let rules = build_rules(&report.violations)?;
    let results = build_results(&report.violations);

    Ok(SarifLog {
        version: ids::SARIF_VERSION.to_string(),
        schema: ids::SARIF_SCHEMA.to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: ids::SCANNER_TOOL_NAME.to_string(),
                    version: ids::SCANNER_TOOL_VERSION.to_string(),
                    information_uri: ids::SCANNER_DOCUMENTATION_URI.to_string(),
                    rules,
                },
            },
            results,
        }],
    })
}

/// One rule per distinct policy id, seeded by its first violation, in first-seen order.
///
/// Every violation's severity is validated, including those whose policy id was already seen.
pub fn build_rules(violations: &[Violation]) -> Result<Vec<SarifRule>, InvalidSeverity> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut rules = Vec::new();

    for v in violations {
        let severity = Severity::parse(&v.severity)?;
        if !seen.insert(v.policy_id.as_str()) {
            continue;
        }
        rules.push(rule_for(v, severity));
    }

    Ok(rules)
}

/// One result per violation, in input order. No deduplication.
pub fn build_results(violations: &[Violation]) -> Vec<SarifResult> {
    violations.iter().map(result_for).collect()
}

/// Human-readable result text. Blank fields stay blank; the sentence is never shortened.
pub fn result_message(violation: &Violation) -> String {
    format!(
        "Asset type: {} has a violation, next steps: {}",
        violation.violated_asset.asset_type, violation.next_steps
    )
}

fn rule_for(v: &Violation, severity: Severity) -> SarifRule {
    SarifRule {
        id: v.policy_id.clone(),
        full_description: SarifText {
            text: v.violated_policy.description.clone(),
        },
        properties: RuleProperties {
            severity: severity.as_str().to_string(),
            policy_type: v.violated_policy.constraint_type.clone(),
            compliance_standard: v.violated_policy.compliance_standards.clone(),
            policy_set: v.violated_posture.policy_set.clone(),
            posture: v.violated_posture.posture.clone(),
            posture_revision_id: v.violated_posture.posture_revision_id.clone(),
            posture_deployment_id: v.violated_posture.posture_deployment.clone(),
            constraints: v.violated_policy.constraint.clone(),
            next_steps: v.next_steps.clone(),
        },
    }
}

fn result_for(v: &Violation) -> SarifResult {
    let mut partial_fingerprints = BTreeMap::new();
    partial_fingerprints.insert(
        ids::FINGERPRINT_KEY.to_string(),
        fingerprint_for_violation(&v.policy_id, &v.asset_id),
    );

    SarifResult {
        rule_id: v.policy_id.clone(),
        message: SarifText {
            text: result_message(v),
        },
        locations: vec![SarifLocation {
            logical_locations: vec![LogicalLocation {
                fully_qualified_name: v.asset_id.clone(),
            }],
        }],
        partial_fingerprints,
        properties: ResultProperties {
            asset_id: v.asset_id.clone(),
            asset_type: v.violated_asset.asset_type.clone(),
            asset: v.violated_asset.asset.clone(),
        },
    }
}
