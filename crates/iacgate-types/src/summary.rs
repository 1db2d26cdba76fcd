use crate::{Operator, Severity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable schema identifier for the validation summary.
pub const SCHEMA_VALIDATION_V1: &str = "iacgate.validation.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Machine-readable record of one `validate` run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationSummary {
    pub schema: String,
    pub tool: ToolMeta,
    /// The failure expression as supplied (empty means the default policy).
    pub expression: String,
    pub operator: Operator,
    pub thresholds: BTreeMap<Severity, u64>,
    /// Observed violations; severities with no violations are absent.
    pub counts: BTreeMap<Severity, u64>,
    pub breaches: BTreeMap<Severity, bool>,
    pub violations_total: u64,
    pub verdict: Verdict,
}
