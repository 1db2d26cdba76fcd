//! Render use cases: Markdown and JSON from an in-memory validation summary.

use anyhow::Context;
use iacgate_types::ValidationSummary;

pub fn render_markdown(summary: &ValidationSummary) -> String {
    iacgate_render::render_markdown(summary)
}

/// Pretty-printed JSON with a trailing newline.
pub fn serialize_summary(summary: &ValidationSummary) -> anyhow::Result<String> {
    let mut text =
        serde_json::to_string_pretty(summary).context("serialize validation summary")?;
    text.push('\n');
    Ok(text)
}
