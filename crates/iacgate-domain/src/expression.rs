//! Failure expression parsing.
//!
//! Grammar (keys and operator values are case-insensitive):
//!
//! ```text
//! expr  := "" | pair ("," pair)*
//! pair  := key ":" value
//! key   := "OPERATOR" | "CRITICAL" | "HIGH" | "MEDIUM" | "LOW"
//! value := "AND" | "OR"          (key = OPERATOR)
//!        | non-negative integer  (key = severity)
//! ```
//!
//! Example: `critical:2,high:1,operator:or`.

use crate::error::{ExpressionError, PolicyError};
use crate::policy::{FailurePolicy, Thresholds};
use iacgate_types::{Operator, Severity, ids};

/// Parse a failure expression into an operator and per-severity thresholds.
///
/// The empty expression is the default policy: `OR` with a threshold of 1 on every severity.
/// A non-empty expression must name an operator exactly once and at least one severity, each
/// severity at most once.
pub fn parse_failure_expression(expression: &str) -> Result<FailurePolicy, PolicyError> {
    if expression.is_empty() {
        return Ok(FailurePolicy::default());
    }
    parse_pairs(expression).map_err(PolicyError::from)
}

fn parse_pairs(expression: &str) -> Result<FailurePolicy, ExpressionError> {
    let mut operator: Option<Operator> = None;
    let mut thresholds = Thresholds::default();

    for pair in expression.split(',') {
        let (raw_key, value) = pair
            .split_once(':')
            .ok_or_else(|| ExpressionError::MalformedPair {
                pair: pair.to_string(),
            })?;
        let key = raw_key.to_ascii_uppercase();

        if key == ids::EXPRESSION_OPERATOR_KEY {
            if operator.is_some() {
                return Err(ExpressionError::DuplicateOperator);
            }
            let parsed = Operator::parse(value)
                .map_err(|e| ExpressionError::InvalidOperator { value: e.value })?;
            operator = Some(parsed);
            continue;
        }

        let severity = Severity::parse(&key)
            .map_err(|_| ExpressionError::UnknownSeverity { key: key.clone() })?;
        if thresholds.contains(severity) {
            return Err(ExpressionError::DuplicateSeverity { key });
        }
        let threshold = parse_threshold(&key, value)?;
        thresholds.insert_new(severity, threshold);
    }

    // With both missing, the threshold error wins.
    if thresholds.is_empty() {
        return Err(ExpressionError::NoThresholds);
    }
    let operator = operator.ok_or(ExpressionError::NoOperator)?;

    Ok(FailurePolicy {
        operator,
        thresholds,
    })
}

fn parse_threshold(key: &str, value: &str) -> Result<u64, ExpressionError> {
    let parsed: i64 = value.parse().map_err(|_| ExpressionError::NotAnInteger {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    u64::try_from(parsed).map_err(|_| ExpressionError::NegativeThreshold {
        key: key.to_string(),
        value: parsed,
    })
}
