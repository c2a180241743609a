//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Pre-sort by `(arrival_time, -priority)`.
//! 2. Run each process to completion in that order, starting at the
//!    current clock.
//!
//! The clock never waits for an arrival: a process reached before its
//! arrival time starts immediately and gets a negative waiting time.
//! This is logged at `warn` level.

use log::{debug, warn};

use super::{prepare, Scheduler};
use crate::error::Result;
use crate::models::{Process, Schedule, Ticks};

/// Non-preemptive FCFS scheduler.
///
/// # Example
///
/// ```
/// use mlq_sched::models::Process;
/// use mlq_sched::scheduler::{Fcfs, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let schedule = Fcfs.schedule(processes, 0).unwrap();
///
/// let p2 = schedule.process("P2").unwrap();
/// assert_eq!(p2.completion_time, 8);
/// assert_eq!(p2.waiting_time, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: Vec<Process>, start: Ticks) -> Result<Schedule> {
        let ordered = prepare(processes)?;
        let mut schedule = Schedule::new();
        let mut clock = start;

        for mut process in ordered {
            if process.arrival_time > clock {
                warn!(
                    "FCFS dispatches '{}' at {} before its arrival at {}",
                    process.id, clock, process.arrival_time
                );
            }

            let end = clock + process.burst_time;
            debug!("FCFS run '{}' [{}, {})", process.id, clock, end);

            process.mark_dispatched(clock);
            process.response_time = clock;
            schedule.record_dispatch(&process.id, clock, end);
            process.finalize(end);
            schedule.complete(process);
            clock = end;
        }

        Ok(schedule)
    }
}
