//! Stable DTOs and IDs used across the iacgate workspace.
//!
//! This crate is intentionally boring:
//! - the closed `Severity` and `Operator` vocabularies and their single parse functions
//! - the IaC validation report consumed as input
//! - the SARIF log and validation summary emitted as output
//! - stable string IDs and constants

#![forbid(unsafe_code)]

pub mod ids;
pub mod operator;
pub mod sarif;
pub mod scan;
pub mod severity;
pub mod summary;

pub use operator::{InvalidOperator, Operator};
pub use sarif::{
    LogicalLocation, ResultProperties, RuleProperties, SarifDriver, SarifLocation, SarifLog,
    SarifResult, SarifRule, SarifRun, SarifText, SarifTool,
};
pub use scan::{
    AssetDetails, IacScanReport, IacValidationReport, PolicyDetails, PostureDetails,
    ScanResponse, Violation,
};
pub use severity::{InvalidSeverity, Severity};
pub use summary::{SCHEMA_VALIDATION_V1, ToolMeta, ValidationSummary, Verdict};
