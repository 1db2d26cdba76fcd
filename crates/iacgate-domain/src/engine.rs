use crate::counts::{SeverityCounts, count_violations};
use crate::error::PolicyError;
use crate::evaluate::{BreachFlags, breach_flags, combine};
use crate::policy::FailurePolicy;
use iacgate_types::IacValidationReport;

/// Everything the evaluator derived from one report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assessment {
    pub counts: SeverityCounts,
    pub flags: BreachFlags,
    pub breached: bool,
}

/// Count the report's violations and evaluate them against the policy.
pub fn assess(
    report: &IacValidationReport,
    policy: &FailurePolicy,
) -> Result<Assessment, PolicyError> {
    let counts = count_violations(&report.violations)?;
    let flags = breach_flags(&counts, &policy.thresholds);
    let breached = combine(policy.operator, &flags);

    Ok(Assessment {
        counts,
        flags,
        breached,
    })
}
