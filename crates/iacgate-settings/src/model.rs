use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `iacgate.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct IacgateConfigV1 {
    /// Optional schema string for tooling (`iacgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Failure expression, e.g. `critical:1,high:3,operator:or`. Empty means the default policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_expression: Option<String>,

    /// Where `iacgate sarif` writes its output when `--output` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sarif_out: Option<String>,
}
