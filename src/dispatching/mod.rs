//! Dispatching rules and rule engine for process selection.
//!
//! Every algorithm in this crate picks its next process through a
//! [`RuleEngine`]: the arrival pre-sort is `Arrival` with a `Priority`
//! tie-breaker, SJF selects with `ShortestBurst`, and STCF selects with
//! `ShortestRemaining`.
//!
//! # Usage
//!
//! ```
//! use mlq_sched::dispatching::RuleEngine;
//! use mlq_sched::dispatching::rules;
//! use mlq_sched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Arrival)
//!     .with_tie_breaker(rules::Priority);
//!
//! let mut processes = vec![
//!     Process::new("late", 4, 1),
//!     Process::new("low", 0, 1).with_priority(1),
//!     Process::new("high", 0, 1).with_priority(9),
//! ];
//! engine.sort(&mut processes);
//! let order: Vec<&str> = processes.iter().map(|p| p.id.as_str()).collect();
//! assert_eq!(order, vec!["high", "low", "late"]);
//! ```
//!
//! # Tie Handling
//! When every rule ties, the earlier position in the input slice wins.

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a process; lower runs first.
    fn evaluate(&self, process: &Process) -> RuleScore;
}
