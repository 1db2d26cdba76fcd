//! Pure policy evaluation (no IO).
//!
//! Input: a failure expression and a decoded validation report.
//! Output: severity counts, per-severity breach flags, and a breached/not-breached verdict.

#![forbid(unsafe_code)]

pub mod counts;
pub mod error;
pub mod evaluate;
pub mod expression;
pub mod policy;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use counts::{SeverityCounts, count_violations};
pub use engine::{Assessment, assess};
pub use error::{ExpressionError, PolicyError};
pub use evaluate::{BreachFlags, breach_flags, combine, evaluate};
pub use expression::parse_failure_expression;
pub use policy::{FailurePolicy, Thresholds};
