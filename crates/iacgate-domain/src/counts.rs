use crate::error::PolicyError;
use iacgate_types::{Severity, Violation};
use std::collections::BTreeMap;

/// Violations observed per severity. Severities with no violations are absent, not zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts(BTreeMap<Severity, u64>);

impl SeverityCounts {
    /// Observed count, `0` when the severity never occurred.
    pub fn get(&self, severity: Severity) -> u64 {
        self.0.get(&severity).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<Severity, u64> {
        &self.0
    }

    fn record(&mut self, severity: Severity) {
        *self.0.entry(severity).or_insert(0) += 1;
    }
}

impl FromIterator<(Severity, u64)> for SeverityCounts {
    fn from_iter<I: IntoIterator<Item = (Severity, u64)>>(iter: I) -> Self {
        SeverityCounts(iter.into_iter().collect())
    }
}

/// Count violations by severity, failing on the first unrecognized severity.
pub fn count_violations(violations: &[Violation]) -> Result<SeverityCounts, PolicyError> {
    let mut counts = SeverityCounts::default();
    for v in violations {
        counts.record(Severity::parse(&v.severity)?);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::violation;

    #[test]
    fn counts_one_of_each() {
        let violations = vec![
            violation("p1", "CRITICAL"),
            violation("p2", "HIGH"),
            violation("p3", "MEDIUM"),
            violation("p4", "LOW"),
        ];
        let counts = count_violations(&violations).expect("count");
        for sev in Severity::ALL {
            assert_eq!(counts.get(sev), 1);
        }
        assert_eq!(counts.as_map().len(), 4);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        let counts = count_violations(&[]).expect("count");
        assert!(counts.is_empty());
        assert_eq!(counts.get(Severity::High), 0);
    }

    #[test]
    fn severities_are_case_folded() {
        let violations = vec![
            violation("p1", "high"),
            violation("p2", "High"),
            violation("p3", "HIGH"),
        ];
        let counts = count_violations(&violations).expect("count");
        assert_eq!(counts.get(Severity::High), 3);
        assert_eq!(counts.as_map().len(), 1);
    }

    #[test]
    fn unknown_severity_fails() {
        let violations = vec![violation("p1", "HIGH"), violation("p2", "INVALID")];
        let err = count_violations(&violations).unwrap_err();
        match err {
            PolicyError::InvalidSeverity(e) => assert_eq!(e.value, "INVALID"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_severity_fails() {
        let violations = vec![violation("p1", "")];
        assert!(matches!(
            count_violations(&violations),
            Err(PolicyError::InvalidSeverity(_))
        ));
    }
}
