//! Statbar core
//!
//! Value model and evaluation plumbing for templated bar overlays: the
//! bounded gauge value produced by value templates, the evaluator
//! collaborator trait with its success/error result channel, and the
//! throttled cache that decouples evaluation rate from draw rate.

pub mod cache;
pub mod eval;
pub mod value;

// Re-exports for convenience
pub use cache::{CachedEvaluation, TemplateCache, current_millis};
pub use eval::{EvalError, EvalResult, TemplateEvaluator};
pub use value::BoundedValue;
