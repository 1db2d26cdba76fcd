//! Stable identifiers and constants shared by producers and consumers of iacgate artifacts.

// SARIF log
pub const SARIF_VERSION: &str = "2.1.0";
pub const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

// SARIF driver. The driver describes the scanner that produced the findings, not iacgate.
pub const SCANNER_TOOL_NAME: &str = "analyze-code-security-scc";
pub const SCANNER_TOOL_VERSION: &str = "1.0.0";
pub const SCANNER_DOCUMENTATION_URI: &str =
    "https://cloud.google.com/security-command-center/docs/validate-iac";

// Result fingerprints
pub const FINGERPRINT_KEY: &str = "iacgate/v1";

// Config
pub const SCHEMA_CONFIG_V1: &str = "iacgate.config.v1";

// Expression keys
pub const EXPRESSION_OPERATOR_KEY: &str = "OPERATOR";
