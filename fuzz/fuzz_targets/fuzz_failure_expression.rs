//! Fuzz target for failure expression parsing and evaluation.
//!
//! Goal: parsing and evaluation should **never panic** on any input.
//! Parsing may return errors, but an accepted expression must name at least one severity.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_failure_expression
//! ```

#![no_main]

use arbitrary::Arbitrary;
use iacgate_domain::{SeverityCounts, evaluate, parse_failure_expression};
use iacgate_types::Severity;
use libfuzzer_sys::fuzz_target;

const KEYS: [&str; 7] = ["critical", "HIGH", "Medium", "low", "operator", "OPERATOR", "info"];

/// Structured input so libFuzzer spends most of its time near the grammar.
#[derive(Arbitrary, Debug)]
struct ExpressionInput {
    /// (key index, value) pairs joined as `key:value`.
    pairs: Vec<(u8, String)>,
    /// Raw suffix appended after the structured pairs.
    raw: String,
    /// Observed counts per severity, in `Severity::ALL` order.
    counts: [u16; 4],
}

fuzz_target!(|input: ExpressionInput| {
    if input.pairs.len() > 16 || input.raw.len() > 256 {
        return;
    }

    let mut expression = input
        .pairs
        .iter()
        .map(|(k, v)| format!("{}:{}", KEYS[*k as usize % KEYS.len()], v))
        .collect::<Vec<_>>()
        .join(",");
    expression.push_str(&input.raw);

    let Ok(policy) = parse_failure_expression(&expression) else {
        return;
    };
    assert!(!policy.thresholds.is_empty());

    let counts: SeverityCounts = Severity::ALL
        .iter()
        .zip(input.counts)
        .map(|(s, c)| (*s, u64::from(c)))
        .collect();
    let _ = evaluate(&counts, &policy.thresholds, policy.operator);
});
