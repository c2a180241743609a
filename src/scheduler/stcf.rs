//! Shortest-Time-to-Completion-First (preemptive SJF).
//!
//! # Algorithm
//!
//! Tick-driven. At every tick the arrived process with the least
//! remaining time runs for one tick; a newly arrived shorter process
//! therefore preempts the running one at the next tick boundary. Ties
//! go to the earlier process in the `(arrival_time, -priority)` pre-sort.
//!
//! RT is the clock at first dispatch.

use log::debug;

use super::{idle_until, prepare, Scheduler};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::Result;
use crate::models::{Process, Schedule, Ticks};

/// Preemptive STCF scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stcf;

impl Scheduler for Stcf {
    fn name(&self) -> &'static str {
        "STCF"
    }

    fn schedule(&self, processes: Vec<Process>, start: Ticks) -> Result<Schedule> {
        let mut pending = prepare(processes)?;
        let engine = RuleEngine::new().with_rule(rules::ShortestRemaining);
        let mut schedule = Schedule::new();
        let mut clock = start;

        while !pending.is_empty() {
            let ctx = SchedulingContext::at_time(clock);
            let Some(idx) = engine.select_eligible(&pending, &ctx) else {
                clock = idle_until(&pending, clock);
                continue;
            };

            let finished = {
                let process = &mut pending[idx];
                process.mark_dispatched(clock);
                process.remaining_time -= 1;
                schedule.extend_dispatch(&process.id, clock, clock + 1);
                process.is_finished()
            };
            clock += 1;

            if finished {
                let mut process = pending.remove(idx);
                process.response_time = process.first_execution_time.unwrap_or(clock - 1);
                process.finalize(clock);
                debug!("STCF finished '{}' at {}", process.id, clock);
                schedule.complete(process);
            }
        }

        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_process(id: &str, burst: Ticks, arrival: Ticks) -> Process {
        Process::new(id, arrival, burst)
    }

    #[test]
    fn test_stcf_preempts_for_shorter_arrival() {
        let processes = vec![make_process("long", 8, 0), make_process("short", 2, 1)];
        let schedule = Stcf.schedule(processes, 0).unwrap();

        let short = schedule.process("short").unwrap();
        assert_eq!(short.response_time, 1);
        assert_eq!(short.completion_time, 3);
        assert_eq!(short.waiting_time, 0);

        let long = schedule.process("long").unwrap();
        assert_eq!(long.response_time, 0);
        assert_eq!(long.completion_time, 10);
        assert_eq!(long.waiting_time, 2);

        // long [0,1), short [1,3), long [3,10)
        assert_eq!(schedule.dispatches_for("long").len(), 2);
        assert_eq!(schedule.dispatches.len(), 3);
    }

    #[test]
    fn test_stcf_response_survives_preemption_at_zero() {
        let processes = vec![
            make_process("A", 5, 0),
            make_process("B", 1, 1),
            make_process("C", 1, 2),
        ];
        let schedule = Stcf.schedule(processes, 0).unwrap();

        let a = schedule.process("A").unwrap();
        assert_eq!(a.first_execution_time, Some(0));
        assert_eq!(a.response_time, 0);
        assert_eq!(a.completion_time, 7);
    }

    #[test]
    fn test_stcf_no_preemption_for_equal_remaining() {
        // At t=2 both have 2 remaining; the earlier arrival keeps the CPU.
        let processes = vec![make_process("first", 4, 0), make_process("second", 2, 2)];
        let schedule = Stcf.schedule(processes, 0).unwrap();

        assert_eq!(schedule.processes[0].id, "first");
        assert_eq!(schedule.process("first").unwrap().completion_time, 4);
        assert_eq!(schedule.process("second").unwrap().completion_time, 6);
    }

    #[test]
    fn test_stcf_idles_until_arrival() {
        let processes = vec![make_process("P1", 3, 5)];
        let schedule = Stcf.schedule(processes, 0).unwrap();

        let p1 = &schedule.processes[0];
        assert_eq!(p1.response_time, 5);
        assert_eq!(p1.completion_time, 8);
        assert_eq!(schedule.dispatches.len(), 1);
    }

    #[test]
    fn test_stcf_busy_time_equals_total_burst() {
        let processes = vec![
            make_process("P1", 7, 0),
            make_process("P2", 4, 2),
            make_process("P3", 1, 4),
            make_process("P4", 4, 5),
        ];
        let total: Ticks = processes.iter().map(|p| p.burst_time).sum();
        let schedule = Stcf.schedule(processes, 0).unwrap();

        assert_eq!(schedule.busy_time(), total);
        assert_eq!(schedule.len(), 4);
        for p in &schedule.processes {
            assert_eq!(p.turnaround_time, p.completion_time - p.arrival_time);
            assert_eq!(p.turnaround_time, p.waiting_time + p.burst_time);
        }
    }

    #[test]
    fn test_stcf_empty() {
        assert!(Stcf.schedule(Vec::new(), 0).unwrap().is_empty());
    }
}
