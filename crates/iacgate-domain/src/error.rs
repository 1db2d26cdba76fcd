use iacgate_types::{InvalidOperator, InvalidSeverity};

/// Errors raised by the policy core. Each one aborts the whole operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("invalid failure expression: {0}")]
    InvalidExpression(#[from] ExpressionError),

    #[error(transparent)]
    InvalidSeverity(#[from] InvalidSeverity),

    #[error(transparent)]
    InvalidOperator(#[from] InvalidOperator),
}

/// The specific rule a failure expression broke.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
    #[error("pair {pair:?} is not of the form key:value")]
    MalformedPair { pair: String },

    #[error("invalid operator: {value:?} (expected AND or OR)")]
    InvalidOperator { value: String },

    #[error("more than one operator found in the expression")]
    DuplicateOperator,

    #[error("invalid severity: {key:?}")]
    UnknownSeverity { key: String },

    #[error("duplicate severity found: {key}")]
    DuplicateSeverity { key: String },

    #[error("value {value:?} for {key} is not an integer")]
    NotAnInteger { key: String, value: String },

    #[error("negative value {value} for {key}; thresholds must be >= 0")]
    NegativeThreshold { key: String, value: i64 },

    #[error("no violation parameter found in expression")]
    NoThresholds,

    #[error("no operator found in expression")]
    NoOperator,
}
