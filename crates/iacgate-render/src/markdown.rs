use iacgate_types::{Severity, ValidationSummary, Verdict};

pub fn render_markdown(summary: &ValidationSummary) -> String {
    let mut out = String::new();

    out.push_str("# IaC validation report\n\n");
    let verdict = match summary.verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
    };
    let expression = if summary.expression.is_empty() {
        "(default)".to_string()
    } else {
        format!("`{}`", summary.expression)
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Failure expression: {}\n- Operator: `{}`\n- Violations: {}\n\n",
        verdict, expression, summary.operator, summary.violations_total
    ));

    out.push_str("| Severity | Observed | Threshold | Breached |\n");
    out.push_str("|---|---:|---:|:---:|\n");
    for sev in Severity::ALL {
        let observed = summary.counts.get(&sev).copied().unwrap_or(0);
        let threshold = summary
            .thresholds
            .get(&sev)
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        let breached = match summary.breaches.get(&sev) {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            sev, observed, threshold, breached
        ));
    }

    out
}
