//! Round-Robin with a fixed quantum.
//!
//! # Algorithm
//!
//! 1. Pre-sort by `(arrival_time, -priority)` into a FIFO queue.
//! 2. Take the first process in queue order that has arrived.
//! 3. Run it for `min(quantum, remaining)` ticks. If work remains, append
//!    it to the tail of the queue; otherwise finalize it.
//! 4. If nothing in the queue has arrived, idle until the next arrival.
//!
//! Unlike SJF/STCF there is no cost function: selection is pure queue
//! order. RT is the clock at first dispatch.

use std::collections::VecDeque;

use log::debug;

use super::{idle_until, prepare, Scheduler};
use crate::dispatching::SchedulingContext;
use crate::error::{Result, SchedulerError};
use crate::models::{Process, Schedule, Ticks};

/// Preemptive Round-Robin scheduler.
///
/// # Example
///
/// ```
/// use mlq_sched::models::Process;
/// use mlq_sched::scheduler::{RoundRobin, Scheduler};
///
/// let schedule = RoundRobin::new(2)
///     .schedule(vec![Process::new("P1", 0, 4)], 0)
///     .unwrap();
///
/// assert_eq!(schedule.dispatches.len(), 2);
/// assert_eq!(schedule.processes[0].completion_time, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    /// Creates a Round-Robin scheduler. `quantum` is checked when scheduling.
    pub fn new(quantum: Ticks) -> Self {
        Self { quantum }
    }

    /// Tick allotment per dispatch.
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: Vec<Process>, start: Ticks) -> Result<Schedule> {
        if self.quantum <= 0 {
            return Err(SchedulerError::InvalidQuantum(self.quantum));
        }

        let mut queue: VecDeque<Process> = prepare(processes)?.into();
        let mut schedule = Schedule::new();
        let mut clock = start;

        while !queue.is_empty() {
            let ctx = SchedulingContext::at_time(clock);
            let next = queue.iter().position(|p| ctx.is_eligible(p));
            let Some(mut process) = next.and_then(|idx| queue.remove(idx)) else {
                clock = idle_until(&queue, clock);
                continue;
            };

            process.mark_dispatched(clock);

            if process.remaining_time > self.quantum {
                debug!("RR slice '{}' [{}, {})", process.id, clock, clock + self.quantum);
                schedule.record_dispatch(&process.id, clock, clock + self.quantum);
                clock += self.quantum;
                process.remaining_time -= self.quantum;
                queue.push_back(process);
            } else {
                let end = clock + process.remaining_time;
                debug!("RR final slice '{}' [{}, {})", process.id, clock, end);
                schedule.record_dispatch(&process.id, clock, end);
                clock = end;
                process.response_time = process.first_execution_time.unwrap_or(clock);
                process.finalize(clock);
                schedule.complete(process);
            }
        }

        Ok(schedule)
    }
}
