use crate::counts::SeverityCounts;
use crate::policy::Thresholds;
use iacgate_types::{Operator, Severity};
use std::collections::BTreeMap;

/// Per-severity breach outcome, one entry per configured threshold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreachFlags(BTreeMap<Severity, bool>);

impl BreachFlags {
    pub fn get(&self, severity: Severity) -> Option<bool> {
        self.0.get(&severity).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<Severity, bool> {
        &self.0
    }
}

impl FromIterator<(Severity, bool)> for BreachFlags {
    fn from_iter<I: IntoIterator<Item = (Severity, bool)>>(iter: I) -> Self {
        BreachFlags(iter.into_iter().collect())
    }
}

/// Compare observed counts to thresholds.
///
/// Only severities present in `thresholds` get a flag. A severity that was never observed is not
/// breached, even when its threshold is 0.
pub fn breach_flags(counts: &SeverityCounts, thresholds: &Thresholds) -> BreachFlags {
    thresholds
        .iter()
        .map(|(severity, threshold)| {
            let observed = counts.get(severity);
            (severity, observed != 0 && observed >= threshold)
        })
        .collect()
}

/// Fold breach flags with the operator. An empty flag set never breaches.
pub fn combine(operator: Operator, flags: &BreachFlags) -> bool {
    if flags.is_empty() {
        return false;
    }
    let mut values = flags.0.values().copied();
    match operator {
        Operator::And => values.all(|b| b),
        Operator::Or => values.any(|b| b),
    }
}

/// `true` when the policy is breached and validation should fail.
pub fn evaluate(counts: &SeverityCounts, thresholds: &Thresholds, operator: Operator) -> bool {
    combine(operator, &breach_flags(counts, thresholds))
}
