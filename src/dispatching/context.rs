//! Scheduling context for dispatching rule evaluation.

use crate::models::{Process, Ticks};

/// Runtime scheduling state passed to dispatching rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulated clock.
    pub current_time: Ticks,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: Ticks) -> Self {
        Self { current_time }
    }

    /// Whether a process has arrived by the current time.
    #[inline]
    pub fn is_eligible(&self, process: &Process) -> bool {
        process.arrival_time <= self.current_time
    }
}
