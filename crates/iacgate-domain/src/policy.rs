use iacgate_types::{Operator, Severity};
use std::collections::BTreeMap;

/// Minimum violation count per severity. Only severities the user named are present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Thresholds(BTreeMap<Severity, u64>);

impl Thresholds {
    pub fn get(&self, severity: Severity) -> Option<u64> {
        self.0.get(&severity).copied()
    }

    pub fn contains(&self, severity: Severity) -> bool {
        self.0.contains_key(&severity)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Severity, u64)> + '_ {
        self.0.iter().map(|(s, t)| (*s, *t))
    }

    pub fn as_map(&self) -> &BTreeMap<Severity, u64> {
        &self.0
    }

    /// Returns `false` (and leaves the map untouched) if `severity` is already present.
    pub(crate) fn insert_new(&mut self, severity: Severity, threshold: u64) -> bool {
        if self.0.contains_key(&severity) {
            return false;
        }
        self.0.insert(severity, threshold);
        true
    }
}

impl FromIterator<(Severity, u64)> for Thresholds {
    fn from_iter<I: IntoIterator<Item = (Severity, u64)>>(iter: I) -> Self {
        Thresholds(iter.into_iter().collect())
    }
}

/// Parsed failure expression: which severities to watch, and how to combine them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailurePolicy {
    pub operator: Operator,
    pub thresholds: Thresholds,
}

impl Default for FailurePolicy {
    /// Any single violation of any severity breaches.
    fn default() -> Self {
        Self {
            operator: Operator::Or,
            thresholds: Severity::ALL.into_iter().map(|s| (s, 1)).collect(),
        }
    }
}
