//! Shortest-Job-First (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Pre-sort by `(arrival_time, -priority)`.
//! 2. Among processes with `arrival_time <= clock`, run the one with the
//!    smallest burst time to completion. Ties go to the earlier process
//!    in the pre-sort.
//! 3. If nothing has arrived, idle until the next arrival.

use log::debug;

use super::{idle_until, prepare, Scheduler};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::Result;
use crate::models::{Process, Schedule, Ticks};

/// Non-preemptive SJF scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: Vec<Process>, start: Ticks) -> Result<Schedule> {
        let mut pending = prepare(processes)?;
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        let mut schedule = Schedule::new();
        let mut clock = start;

        while !pending.is_empty() {
            let ctx = SchedulingContext::at_time(clock);
            let Some(idx) = engine.select_eligible(&pending, &ctx) else {
                clock = idle_until(&pending, clock);
                continue;
            };

            let mut process = pending.remove(idx);
            let end = clock + process.burst_time;
            debug!("SJF run '{}' [{}, {})", process.id, clock, end);

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
