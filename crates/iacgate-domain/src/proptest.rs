//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Failure expression parsing (acceptance and rejection)
//! - Counting and threshold evaluation agreeing with a direct reading of the rules

use crate::counts::{SeverityCounts, count_violations};
use crate::error::{ExpressionError, PolicyError};
use crate::evaluate::{breach_flags, combine, evaluate};
use crate::expression::parse_failure_expression;
use crate::policy::Thresholds;
use crate::test_support::violation;
use iacgate_types::{Operator, Severity};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

// ============================================================================
// Strategies
// ============================================================================

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn arb_operator() -> impl Strategy<Value = Operator> {
    prop_oneof![Just(Operator::And), Just(Operator::Or)]
}

/// Render a keyword in upper, lower, or title case.
fn arb_casing(word: &'static str) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(word.to_ascii_uppercase()),
        Just(word.to_ascii_lowercase()),
        Just({
            let lower = word.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        }),
    ]
}

/// A non-empty set of distinct severities with non-negative thresholds.
fn arb_threshold_pairs() -> impl Strategy<Value = Vec<(Severity, u64)>> {
    prop::sample::subsequence(Severity::ALL.to_vec(), 1..=4).prop_flat_map(|sevs| {
        let n = sevs.len();
        (Just(sevs), prop::collection::vec(0u64..1000, n))
            .prop_map(|(sevs, values)| sevs.into_iter().zip(values).collect::<Vec<_>>())
    })
}

/// A well-formed expression and the policy it should parse to.
fn arb_expression() -> impl Strategy<Value = (String, Operator, Vec<(Severity, u64)>)> {
    (arb_threshold_pairs(), arb_operator(), any::<bool>()).prop_flat_map(
        |(pairs, operator, lower)| {
            let mut tokens: Vec<String> = pairs
                .iter()
                .map(|(sev, t)| {
                    let key = if lower {
                        sev.as_str().to_ascii_lowercase()
                    } else {
                        sev.as_str().to_string()
                    };
                    format!("{key}:{t}")
                })
                .collect();
            tokens.push(format!("operator:{}", operator.as_str().to_ascii_lowercase()));
            (Just(tokens).prop_shuffle(), Just(operator), Just(pairs))
        },
    )
    .prop_map(|(tokens, operator, pairs)| (tokens.join(","), operator, pairs))
}

fn arb_counts() -> impl Strategy<Value = BTreeMap<Severity, u64>> {
    prop::collection::btree_map(arb_severity(), 0u64..20, 0..=4)
}

// ============================================================================
// Expression parsing
// ============================================================================

proptest! {
    #[test]
    fn well_formed_expressions_parse((expr, operator, pairs) in arb_expression()) {
        let policy = parse_failure_expression(&expr).expect("well-formed expression");
        prop_assert_eq!(policy.operator, operator);

        let expected: BTreeSet<Severity> = pairs.iter().map(|(s, _)| *s).collect();
        let actual: BTreeSet<Severity> = policy.thresholds.iter().map(|(s, _)| s).collect();
        prop_assert_eq!(actual, expected);

        for (sev, t) in pairs {
            prop_assert_eq!(policy.thresholds.get(sev), Some(t));
        }
    }

    #[test]
    fn keyword_casing_does_not_matter(
        key in arb_casing("critical"),
        op_key in arb_casing("operator"),
        op in arb_casing("and"),
        value in 0u64..100,
    ) {
        let policy = parse_failure_expression(&format!("{key}:{value},{op_key}:{op}"))
            .expect("parse");
        prop_assert_eq!(policy.operator, Operator::And);
        prop_assert_eq!(policy.thresholds.get(Severity::Critical), Some(value));
    }

    #[test]
    fn repeated_severity_is_rejected(sev in arb_severity(), a in 0u64..100, b in 0u64..100) {
        let expr = format!("{sev}:{a},{}:{b},operator:or", sev.as_str().to_ascii_lowercase());
        let err = parse_failure_expression(&expr).unwrap_err();
        prop_assert_eq!(
            err,
            PolicyError::InvalidExpression(ExpressionError::DuplicateSeverity {
                key: sev.as_str().to_string()
            })
        );
    }

    #[test]
    fn negative_threshold_is_rejected(sev in arb_severity(), value in 1i64..10_000) {
        let expr = format!("{sev}:-{value},operator:and");
        let is_negative_error = matches!(
            parse_failure_expression(&expr),
            Err(PolicyError::InvalidExpression(ExpressionError::NegativeThreshold { .. }))
        );
        prop_assert!(is_negative_error);
    }

    #[test]
    fn arbitrary_text_never_panics(expr in ".{0,64}") {
        let _ = parse_failure_expression(&expr);
    }
}

// ============================================================================
// Counting and evaluation
// ============================================================================

proptest! {
    #[test]
    fn count_matches_input(sevs in prop::collection::vec(arb_severity(), 0..50)) {
        let violations: Vec<_> = sevs
            .iter()
            .enumerate()
            .map(|(i, s)| violation(&format!("p{i}"), s.as_str()))
            .collect();
        let counts = count_violations(&violations).expect("count");

        prop_assert_eq!(counts.total(), sevs.len() as u64);
        for sev in Severity::ALL {
            let expected = sevs.iter().filter(|s| **s == sev).count() as u64;
            prop_assert_eq!(counts.get(sev), expected);
        }
        // Absent severities are not materialized as zeros.
        prop_assert!(counts.as_map().values().all(|n| *n > 0));
    }

    #[test]
    fn evaluation_agrees_with_rule_reading(
        observed in arb_counts(),
        pairs in arb_threshold_pairs(),
        operator in arb_operator(),
    ) {
        let counts: SeverityCounts = observed.iter().map(|(s, n)| (*s, *n)).collect();
        let thresholds: Thresholds = pairs.iter().copied().collect();

        let expected_flags: Vec<bool> = pairs
            .iter()
            .map(|(sev, t)| {
                let n = observed.get(sev).copied().unwrap_or(0);
                n > 0 && n >= *t
            })
            .collect();
        let expected = match operator {
            Operator::And => expected_flags.iter().all(|b| *b),
            Operator::Or => expected_flags.iter().any(|b| *b),
        };

        let flags = breach_flags(&counts, &thresholds);
        prop_assert_eq!(flags.as_map().len(), pairs.len());
        prop_assert_eq!(combine(operator, &flags), expected);
        prop_assert_eq!(evaluate(&counts, &thresholds, operator), expected);
    }
}
