use iacgate_types::{IacValidationReport, Violation};

pub fn violation(policy_id: &str, severity: &str) -> Violation {
    Violation {
        asset_id: format!("assets/{policy_id}"),
        policy_id: policy_id.to_string(),
        severity: severity.to_string(),
        ..Violation::default()
    }
}

pub fn report(violations: Vec<Violation>) -> IacValidationReport {
    IacValidationReport {
        violations,
        note: String::new(),
    }
}
