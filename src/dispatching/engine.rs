//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules lexicographically: the next rule is
//! consulted only when all previous rules tie.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, SchedulingContext};
use crate::models::Process;

/// A composable rule engine for process prioritization.
///
/// Ties that survive every rule keep input order, so selection is
/// stable with respect to the slice the caller passes in.
///
/// # Example
/// ```
/// use mlq_sched::dispatching::{rules, RuleEngine, SchedulingContext};
/// use mlq_sched::models::Process;
///
/// let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
/// let processes = vec![
///     Process::new("A", 0, 5),
///     Process::new("B", 0, 2),
///     Process::new("C", 3, 1),
/// ];
/// // C is shorter but has not arrived at tick 0.
/// assert_eq!(engine.select_eligible(&processes, &SchedulingContext::at_time(0)), Some(1));
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The arrival pre-sort: earliest arrival first, higher priority on ties.
    pub fn arrival_order() -> Self {
        Self::new()
            .with_rule(rules::Arrival)
            .with_tie_breaker(rules::Priority)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes in place (stable).
    pub fn sort(&self, processes: &mut [Process]) {
        processes.sort_by(|a, b| self.compare(a, b));
    }

    /// Returns the index of the best process that has arrived by the
    /// context's clock.
    ///
    /// Among equally scored candidates, the earliest index wins.
    pub fn select_eligible(
        &self,
        processes: &[Process],
        context: &SchedulingContext,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, process) in processes.iter().enumerate() {
            if !context.is_eligible(process) {
                continue;
            }
            best = match best {
                Some(b) if self.compare(process, &processes[b]) != Ordering::Less => Some(b),
                _ => Some(idx),
            };
        }
        best
    }

    /// Lexicographic comparison over all rules.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
