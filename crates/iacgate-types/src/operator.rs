use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Boolean operator that folds per-severity breach flags into one verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    And,
    Or,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid operator: {value:?} (expected AND or OR)")]
pub struct InvalidOperator {
    pub value: String,
}

impl Operator {
    /// The only text-to-operator conversion in the workspace.
    pub fn parse(raw: &str) -> Result<Self, InvalidOperator> {
        match raw.to_ascii_uppercase().as_str() {
            "AND" => Ok(Operator::And),
            "OR" => Ok(Operator::Or),
            _ => Err(InvalidOperator {
                value: raw.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = InvalidOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::parse(s)
    }
}
