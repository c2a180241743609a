//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Order-based**: ARRIVAL, PRIORITY
//! - **Time-based**: SJF (burst), STCF (remaining)
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

// ======================== Order-based rules ========================

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct Arrival;

impl DispatchingRule for Arrival {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time
    }
}

/// Highest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        -RuleScore::from(process.priority)
    }
}

// ======================== Time-based rules ========================

/// Shortest burst time first (non-preemptive SJF).
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time
    }
}

/// Least remaining work first (preemptive STCF).
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "STCF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.remaining_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival() {
        let early = Process::new("early", 1, 5);
        let late = Process::new("late", 4, 5);
        assert!(Arrival.evaluate(&early) < Arrival.evaluate(&late));
    }

    #[test]
    fn test_priority() {
        let high = Process::new("high", 0, 1).with_priority(100);
        let low = Process::new("low", 0, 1).with_priority(1);
        assert!(Priority.evaluate(&high) < Priority.evaluate(&low));
    }

    #[test]
    fn test_shortest_burst_ignores_progress() {
        let mut long = Process::new("long", 0, 10);
        long.remaining_time = 1;
        let short = Process::new("short", 0, 3);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_shortest_remaining() {
        let mut nearly_done = Process::new("nearly_done", 0, 10);
        nearly_done.remaining_time = 1;
        let fresh = Process::new("fresh", 0, 3);
        assert!(
            ShortestRemaining.evaluate(&nearly_done)
                < ShortestRemaining.evaluate(&fresh)
        );
    }
}
