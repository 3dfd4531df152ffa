//! Throttled template evaluation cache
//!
//! Overlays draw every frame but re-evaluating a template every frame is
//! wasteful: evaluation walks game state and parses expressions, a draw
//! just replays cached output. `TemplateCache` decouples the two rates.
//! Each overlay owns exactly one cache; caches are never shared because
//! two overlays may run different templates.

use crate::eval::{EvalResult, TemplateEvaluator};
use crate::value::BoundedValue;

/// Current wall-clock time in milliseconds since the Unix epoch
///
/// The only wall-clock read in the workspace. Frame drivers sample it once
/// per frame and pass it down, so everything below stays deterministic
/// under test.
pub fn current_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// One evaluation pass's output
///
/// Text and value always originate from the same pass; the cache replaces
/// them as a unit and never lets one go stale independently of the other.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedEvaluation {
    /// Formatted display lines, joined with single spaces
    pub text: String,
    /// Evaluated value, or the failure to show in its place
    pub value: EvalResult<BoundedValue>,
}

/// Most recent evaluation output plus the throttle deadline
#[derive(Debug, Clone)]
pub struct TemplateCache {
    entry: CachedEvaluation,
    /// Millis timestamp at which the next refresh becomes eligible.
    /// Starts at `i64::MIN` so the first refresh always runs.
    next_refresh_at: i64,
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self {
            entry: CachedEvaluation {
                text: String::new(),
                value: Ok(BoundedValue::EMPTY),
            },
            next_refresh_at: i64::MIN,
        }
    }
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluate both templates if the throttle window has elapsed
    ///
    /// No-op while `now_millis` is still before the deadline; the previous
    /// entry is reused verbatim. On refresh, both templates are evaluated
    /// in the same pass and stored together, and the deadline advances by
    /// `interval_secs`.
    pub fn refresh(
        &mut self,
        evaluator: &dyn TemplateEvaluator,
        text_template: &str,
        value_template: &str,
        now_millis: i64,
        interval_secs: f32,
    ) {
        if now_millis < self.next_refresh_at {
            return;
        }

        let lines = evaluator.format_lines(text_template);
        let value = evaluator.evaluate_value(value_template);
        tracing::trace!(
            lines = lines.len(),
            ok = value.is_ok(),
            "refreshed template cache"
        );

        self.entry = CachedEvaluation {
            text: lines.join(" "),
            value,
        };
        let interval_millis = (interval_secs.max(0.0) * 1000.0) as i64;
        self.next_refresh_at = now_millis.saturating_add(interval_millis);
    }

    /// Cached display text from the last refresh
    pub fn text(&self) -> &str {
        &self.entry.text
    }

    /// Cached value (or failure) from the last refresh
    pub fn value(&self) -> &EvalResult<BoundedValue> {
        &self.entry.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::EvalError;
    use std::cell::Cell;

    /// Evaluator that tags every pass with a call counter, so tests can
    /// detect both extra evaluations and text/value interleaving.
    struct CountingEvaluator {
        passes: Cell<i64>,
    }

    impl CountingEvaluator {
        fn new() -> Self {
            Self {
                passes: Cell::new(0),
            }
        }

        fn pass_count(&self) -> i64 {
            self.passes.get()
        }
    }

    impl TemplateEvaluator for CountingEvaluator {
        fn format_lines(&self, _template: &str) -> Vec<String> {
            let n = self.passes.get() + 1;
            self.passes.set(n);
            vec!["pass".to_string(), format!("{n}")]
        }

        fn evaluate_value(&self, _template: &str) -> EvalResult<BoundedValue> {
            Ok(BoundedValue::new(self.passes.get(), 100))
        }
    }

    #[test]
    fn test_first_refresh_always_trips() {
        let evaluator = CountingEvaluator::new();
        let mut cache = TemplateCache::new();

        // Even at time zero, a fresh cache must evaluate
        cache.refresh(&evaluator, "{text}", "{value}", 0, 60.0);
        assert_eq!(evaluator.pass_count(), 1);
        assert_eq!(cache.text(), "pass 1");
    }

    #[test]
    fn test_refresh_throttled_within_interval() {
        let evaluator = CountingEvaluator::new();
        let mut cache = TemplateCache::new();

        cache.refresh(&evaluator, "{text}", "{value}", 1_000, 0.1);
        let text_before = cache.text().to_string();
        let value_before = cache.value().clone();

        // 99ms later: under the 100ms window, cache must be untouched
        cache.refresh(&evaluator, "{text}", "{value}", 1_099, 0.1);
        assert_eq!(evaluator.pass_count(), 1);
        assert_eq!(cache.text(), text_before);
        assert_eq!(cache.value(), &value_before);
    }

    #[test]
    fn test_refresh_trips_at_interval_boundary() {
        let evaluator = CountingEvaluator::new();
        let mut cache = TemplateCache::new();

        cache.refresh(&evaluator, "{text}", "{value}", 1_000, 0.1);
        // Exactly 100ms elapsed counts as stale
        cache.refresh(&evaluator, "{text}", "{value}", 1_100, 0.1);
        assert_eq!(evaluator.pass_count(), 2);
        assert_eq!(cache.text(), "pass 2");
    }

    #[test]
    fn test_text_and_value_from_same_pass() {
        let evaluator = CountingEvaluator::new();
        let mut cache = TemplateCache::new();

        for now in [0, 500, 999, 1_000, 2_500] {
            cache.refresh(&evaluator, "{text}", "{value}", now, 1.0);

            let text_tag: i64 = cache
                .text()
                .rsplit(' ')
                .next()
                .and_then(|t| t.parse().ok())
                .expect("tagged text");
            let value_tag = cache.value().as_ref().expect("value pass").current;
            assert_eq!(text_tag, value_tag, "text and value must share a pass");
        }
    }

    #[test]
    fn test_failure_stored_until_next_refresh() {
        struct FailingEvaluator;
        impl TemplateEvaluator for FailingEvaluator {
            fn format_lines(&self, _template: &str) -> Vec<String> {
                vec!["ignored".into()]
            }
            fn evaluate_value(&self, _template: &str) -> EvalResult<BoundedValue> {
                Err(EvalError::new("no such stat"))
            }
        }

        let mut cache = TemplateCache::new();
        cache.refresh(&FailingEvaluator, "{text}", "{value}", 0, 1.0);
        assert_eq!(
            cache.value(),
            &Err(EvalError::new("no such stat")),
            "failure is cached like any other outcome"
        );
    }

    #[test]
    fn test_lines_joined_with_single_space() {
        let evaluator = CountingEvaluator::new();
        let mut cache = TemplateCache::new();
        cache.refresh(&evaluator, "{text}", "{value}", 0, 1.0);
        assert_eq!(cache.text(), "pass 1");
    }
}
