//! Rendering utilities for CI surfaces (SARIF, Markdown).

#![forbid(unsafe_code)]

mod fingerprint;
mod markdown;
mod sarif;

pub use fingerprint::fingerprint_for_violation;
pub use markdown::render_markdown;
pub use sarif::{build_results, build_rules, render_sarif, result_message};
