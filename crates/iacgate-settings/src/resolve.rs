use crate::model::IacgateConfigV1;
use anyhow::Context;
use iacgate_domain::{FailurePolicy, parse_failure_expression};
use iacgate_types::ids;

/// Output path used by `iacgate sarif` when neither the CLI nor the config names one.
pub const DEFAULT_SARIF_OUT: &str = "output.json";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub failure_expression: Option<String>,
    pub sarif_out: Option<String>,
}

/// Where the effective failure expression came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicySource {
    Cli,
    Config,
    Default,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub expression: String,
    pub source: PolicySource,
    pub policy: FailurePolicy,
    pub sarif_out: String,
}

pub fn resolve_config(
    cfg: IacgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    check_schema(&cfg)?;
    let sarif_out = resolve_sarif_out(&cfg, &overrides);

    let (expression, source) = match (overrides.failure_expression, cfg.failure_expression) {
        (Some(expr), _) => (expr, PolicySource::Cli),
        (None, Some(expr)) => (expr, PolicySource::Config),
        (None, None) => (String::new(), PolicySource::Default),
    };

    let policy = parse_failure_expression(&expression).with_context(|| match source {
        PolicySource::Cli => "invalid --failure-expression".to_string(),
        PolicySource::Config => "invalid failure_expression in config".to_string(),
        PolicySource::Default => "invalid default failure expression".to_string(),
    })?;

    Ok(ResolvedConfig {
        expression,
        source,
        policy,
        sarif_out,
    })
}

/// SARIF output path only. Does not look at the failure expression.
pub fn resolve_sarif_out(cfg: &IacgateConfigV1, overrides: &Overrides) -> String {
    overrides
        .sarif_out
        .clone()
        .or_else(|| cfg.sarif_out.clone())
        .unwrap_or_else(|| DEFAULT_SARIF_OUT.to_string())
}

pub fn check_schema(cfg: &IacgateConfigV1) -> anyhow::Result<()> {
    match cfg.schema.as_deref() {
        None => Ok(()),
        Some(schema) if schema == ids::SCHEMA_CONFIG_V1 => Ok(()),
        Some(other) => anyhow::bail!(
            "unsupported config schema: {other} (expected {})",
            ids::SCHEMA_CONFIG_V1
        ),
    }
}
