//! Use case orchestration for iacgate.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! and render layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod convert;
mod input;
mod render;
mod validate;

pub use convert::{ConvertInput, ConvertOutput, run_convert, serialize_sarif};
pub use input::parse_scan_report_json;
pub use render::{render_markdown, serialize_summary};
pub use validate::{ValidateInput, ValidateOutput, run_validate, verdict_exit_code};
