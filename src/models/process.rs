//! Process record model.
//!
//! A process is a unit of CPU work with static inputs (arrival, burst,
//! queue band, priority) and the timing metrics an algorithm computes
//! for it.
//!
//! # Time Representation
//! All times are integer ticks of a simulated clock starting at t=0.

use serde::{Deserialize, Serialize};

/// Simulated clock value (ticks).
pub type Ticks = i64;

/// Lowest valid queue band.
pub const MIN_QUEUE_LEVEL: u8 = 1;
/// Highest valid queue band.
pub const MAX_QUEUE_LEVEL: u8 = 3;

/// A process to be scheduled, plus its computed metrics.
///
/// Computed fields (`completion_time`, `waiting_time`, `response_time`,
/// `turnaround_time`) are zero until an algorithm finalizes the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier. Not required to be unique.
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU ticks required.
    pub burst_time: Ticks,
    /// Static band assignment (1..=3), used by the MLQ orchestrator.
    pub queue: u8,
    /// Tie-break priority (higher = more important).
    pub priority: i32,
    /// Ticks of work still owed.
    pub remaining_time: Ticks,
    /// Clock at first dispatch. `None` until the process first runs.
    pub first_execution_time: Option<Ticks>,
    /// Completion time (CT).
    pub completion_time: Ticks,
    /// Waiting time (WT).
    pub waiting_time: Ticks,
    /// Response time (RT).
    pub response_time: Ticks,
    /// Turnaround time (TAT).
    pub turnaround_time: Ticks,
}

impl Process {
    /// Creates a process in queue 1 with priority 0.
    pub fn new(id: impl Into<String>, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            queue: MIN_QUEUE_LEVEL,
            priority: 0,
            remaining_time: burst_time,
            first_execution_time: None,
            completion_time: 0,
            waiting_time: 0,
            response_time: 0,
            turnaround_time: 0,
        }
    }

    /// Sets the queue band.
    pub fn with_queue(mut self, queue: u8) -> Self {
        self.queue = queue;
        self
    }

    /// Sets the tie-break priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether all work has been executed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time <= 0
    }

    /// Records the first dispatch. Later calls are no-ops.
    pub(crate) fn mark_dispatched(&mut self, clock: Ticks) {
        if self.first_execution_time.is_none() {
            self.first_execution_time = Some(clock);
        }
    }

    /// Writes CT, TAT and WT from a completion tick.
    ///
    /// `TAT = CT - AT` and `WT = TAT - BT`.
    pub(crate) fn finalize(&mut self, completion_time: Ticks) {
        self.remaining_time = 0;
        self.completion_time = completion_time;
        self.turnaround_time = completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Clears remaining work and every computed metric.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.first_execution_time = None;
        self.completion_time = 0;
        self.waiting_time = 0;
        self.response_time = 0;
        self.turnaround_time = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_queue(2).with_priority(5);

        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.remaining_time, 7);
        assert_eq!(p.queue, 2);
        assert_eq!(p.priority, 5);
        assert!(p.first_execution_time.is_none());
        assert!(!p.is_finished());
    }

    #[test]
    fn test_finalize_metrics() {
        let mut p = Process::new("P2", 1, 3);
        p.finalize(8);

        assert_eq!(p.completion_time, 8);
        assert_eq!(p.turnaround_time, 7);
        assert_eq!(p.waiting_time, 4);
        assert_eq!(p.turnaround_time, p.waiting_time + p.burst_time);
        assert!(p.is_finished());
    }

    #[test]
    fn test_mark_dispatched_once() {
        let mut p = Process::new("P1", 0, 4);
        p.mark_dispatched(0);
        p.mark_dispatched(6);
        assert_eq!(p.first_execution_time, Some(0));
    }

    #[test]
    fn test_reset() {
        let mut p = Process::new("P1", 0, 4);
        p.mark_dispatched(2);
        p.response_time = 2;
        p.finalize(6);
        p.reset();

        assert_eq!(p, Process::new("P1", 0, 4));
    }
}
