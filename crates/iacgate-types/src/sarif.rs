//! Output model: the subset of SARIF 2.1.0 that iacgate emits.
//!
//! <https://docs.oasis-open.org/sarif/sarif/v2.1.0/sarif-v2.1.0.html>

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SarifLog {
    pub version: String,
    #[serde(rename = "$schema")]
    pub schema: String,
    pub runs: Vec<SarifRun>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SarifRun {
    pub tool: SarifTool,
    pub results: Vec<SarifResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SarifTool {
    pub driver: SarifDriver,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SarifDriver {
    pub name: String,
    pub version: String,
    pub information_uri: String,
    pub rules: Vec<SarifRule>,
}

/// Catalog entry for one distinct policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SarifRule {
    pub id: String,
    pub full_description: SarifText,
    pub properties: RuleProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SarifText {
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleProperties {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub severity: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub policy_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub compliance_standard: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub policy_set: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub posture: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub posture_revision_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub posture_deployment_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub constraints: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_steps: String,
}

/// One occurrence of a violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    pub rule_id: String,
    pub message: SarifText,
    pub locations: Vec<SarifLocation>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub partial_fingerprints: BTreeMap<String, String>,
    pub properties: ResultProperties,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SarifLocation {
    pub logical_locations: Vec<LogicalLocation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogicalLocation {
    pub fully_qualified_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultProperties {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub asset_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub asset_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub asset: String,
}
