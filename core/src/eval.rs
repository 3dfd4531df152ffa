//! Template evaluation interface
//!
//! The expression evaluator itself lives outside this workspace; the engine
//! consumes it through `TemplateEvaluator`. Evaluation of a value template
//! yields either a `BoundedValue` or an `EvalError` whose message is shown
//! to the user verbatim, so the two outcomes are an ordinary `Result` and
//! every consumer has to match on it.

use thiserror::Error;

use crate::value::BoundedValue;

/// A failed template evaluation
///
/// Carries the human-readable message produced by the evaluator. `Display`
/// renders the message unchanged; the overlay draws it in place of the
/// value text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvalError {
    message: String,
}

impl EvalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of evaluating a template against live game state
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates template strings against the current game-state snapshot
///
/// Implementations must be pure with respect to a fixed snapshot: the same
/// template against the same state produces the same output. Calls are
/// synchronous and assumed expensive relative to a draw, which is why the
/// cache throttles them.
pub trait TemplateEvaluator {
    /// Format a text template into zero or more display lines
    fn format_lines(&self, template: &str) -> Vec<String>;

    /// Evaluate a value template into a bounded gauge value
    fn evaluate_value(&self, template: &str) -> EvalResult<BoundedValue>;
}
