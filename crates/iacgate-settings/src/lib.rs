//! Config parsing and failure policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::IacgateConfigV1;
pub use resolve::{
    DEFAULT_SARIF_OUT, Overrides, PolicySource, ResolvedConfig, check_schema, resolve_sarif_out,
};

/// Parse `iacgate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<IacgateConfigV1> {
    let cfg: IacgateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings (CLI overrides over config over defaults).
pub fn resolve_config(
    cfg: IacgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
