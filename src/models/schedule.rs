//! Schedule (simulation result) model.
//!
//! A schedule is the completed, metric-annotated process sequence
//! produced by one algorithm run, together with the timeline of CPU
//! slices that produced it.

use serde::{Deserialize, Serialize};

use super::{Process, Ticks};

/// Result of one scheduling run.
///
/// `processes` is in completion order (the order the algorithm finished
/// them), not input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Completed processes with all metrics populated.
    pub processes: Vec<Process>,
    /// CPU slices in the order they were granted.
    pub dispatches: Vec<Dispatch>,
}

/// One contiguous CPU slice granted to a process.
///
/// Covers `[start, end)`. Idle time is never recorded as a dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    /// Dispatched process ID.
    pub process_id: String,
    /// Clock at which the slice starts.
    pub start: Ticks,
    /// Clock at which the slice ends.
    pub end: Ticks,
}

impl Dispatch {
    /// Creates a new dispatch.
    pub fn new(process_id: impl Into<String>, start: Ticks, end: Ticks) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a CPU slice.
    pub(crate) fn record_dispatch(&mut self, process_id: &str, start: Ticks, end: Ticks) {
        self.dispatches.push(Dispatch::new(process_id, start, end));
    }

    /// Records a CPU slice, growing the previous one if the same process
    /// was already running up to `start`.
    pub(crate) fn extend_dispatch(&mut self, process_id: &str, start: Ticks, end: Ticks) {
        if let Some(last) = self.dispatches.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.dispatches.push(Dispatch::new(process_id, start, end));
    }

    /// Appends a finished process.
    pub(crate) fn complete(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Appends another schedule, preserving both orders.
    pub fn append(&mut self, mut other: Schedule) {
        self.processes.append(&mut other.processes);
        self.dispatches.append(&mut other.dispatches);
    }

    /// Latest completion time, or `None` if nothing completed.
    pub fn last_completion(&self) -> Option<Ticks> {
        self.processes.iter().map(|p| p.completion_time).max()
    }

    /// Makespan: latest completion time (0 when empty).
    pub fn makespan(&self) -> Ticks {
        self.last_completion().unwrap_or(0)
    }

    /// Total ticks the CPU spent executing processes.
    pub fn busy_time(&self) -> Ticks {
        self.dispatches.iter().map(Dispatch::duration).sum()
    }

    /// Finds the first completed process with the given ID.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Returns all slices granted to a process.
    pub fn dispatches_for(&self, id: &str) -> Vec<&Dispatch> {
        self.dispatches
            .iter()
            .filter(|d| d.process_id == id)
            .collect()
    }

    /// Number of completed processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether no process completed.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
