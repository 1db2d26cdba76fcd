//! Input model: the Security Command Center IaC validation report.
//!
//! Every field is defaultable so partial documents decode. `severity` is kept as raw text here;
//! it is validated where it is consumed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Top-level document, as returned by the IaC validation API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct IacScanReport {
    pub response: ScanResponse,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanResponse {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub create_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub update_time: String,
    pub iac_validation_report: IacValidationReport,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct IacValidationReport {
    pub violations: Vec<Violation>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub note: String,
}

/// One finding: a policy, the asset it was evaluated against, and a severity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Violation {
    pub asset_id: String,
    pub policy_id: String,
    pub violated_posture: PostureDetails,
    pub violated_policy: PolicyDetails,
    pub violated_asset: AssetDetails,
    pub severity: String,
    pub next_steps: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PostureDetails {
    pub posture_deployment: String,
    pub posture_deployment_target_resource: String,
    pub posture: String,
    pub posture_revision_id: String,
    pub policy_set: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyDetails {
    pub constraint: String,
    pub constraint_type: String,
    pub compliance_standards: Vec<String>,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetDetails {
    pub asset: String,
    pub asset_type: String,
}

impl IacScanReport {
    pub fn violations(&self) -> &[Violation] {
        &self.response.iac_validation_report.violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_document() {
        let text = r#"{
          "response": {
            "name": "organizations/1/locations/global/reports/r1",
            "iacValidationReport": {
              "violations": [{
                "assetId": "storage.googleapis.com/bucket",
                "policyId": "policies/p1",
                "severity": "high",
                "nextSteps": "Enable versioning",
                "violatedPolicy": {
                  "constraintType": "ORG_POLICY",
                  "complianceStandards": ["CIS 2.0"]
                },
                "violatedPosture": { "postureRevisionId": "rev-1" },
                "violatedAsset": { "assetType": "storage.googleapis.com/Bucket" }
              }]
            }
          }
        }"#;

        let report: IacScanReport = serde_json::from_str(text).expect("decode");
        let v = &report.violations()[0];
        assert_eq!(v.asset_id, "storage.googleapis.com/bucket");
        assert_eq!(v.severity, "high");
        assert_eq!(v.violated_policy.compliance_standards, vec!["CIS 2.0"]);
        assert_eq!(v.violated_posture.posture_revision_id, "rev-1");
        assert_eq!(v.violated_asset.asset_type, "storage.googleapis.com/Bucket");
        assert!(v.violated_asset.asset.is_empty());
    }

    #[test]
    fn empty_object_decodes_to_no_violations() {
        let report: IacScanReport = serde_json::from_str("{}").expect("decode");
        assert!(report.violations().is_empty());
    }
}
