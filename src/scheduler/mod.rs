//! Scheduling algorithms and KPI evaluation.
//!
//! Four single-queue disciplines and the multi-level queue that chains
//! them. Every algorithm consumes an owned process set plus a starting
//! clock and returns a [`Schedule`] in completion order.
//!
//! # Algorithms
//!
//! | Type | Preemptive | Selection |
//! |------|-----------|-----------|
//! | [`Fcfs`] | no | arrival order, no idle wait |
//! | [`Sjf`] | no | shortest burst among arrived |
//! | [`Stcf`] | per tick | least remaining among arrived |
//! | [`RoundRobin`] | per quantum | first arrived in FIFO queue |
//! | [`Mlq`] | by band | RR, RR, then FCFS/SJF/STCF |
//!
//! All algorithms pre-sort by `(arrival_time, -priority)` and break
//! remaining ties by position in that pre-sort.
//!
//! # KPI
//!
//! [`ScheduleKpi`] computes the averages written by the output
//! collaborator plus makespan, utilization and throughput.

mod fcfs;
mod kpi;
mod mlq;
mod round_robin;
mod sjf;
mod stcf;

pub use fcfs::Fcfs;
pub use kpi::ScheduleKpi;
pub use mlq::{BandOutcome, Mlq};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use stcf::Stcf;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dispatching::RuleEngine;
use crate::error::{Result, SchedulerError};
use crate::models::{Process, Schedule, Ticks};
use crate::validation::validate_processes;

/// A CPU scheduling discipline.
pub trait Scheduler: fmt::Debug {
    /// Algorithm name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Runs the algorithm on `processes` with the clock starting at `start`.
    ///
    /// Fails without partial results if any record violates the input
    /// preconditions.
    fn schedule(&self, processes: Vec<Process>, start: Ticks) -> Result<Schedule>;
}

/// Algorithm run on MLQ band 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalAlgorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First.
    #[default]
    Sjf,
    /// Shortest-Time-to-Completion-First.
    Stcf,
}

impl TerminalAlgorithm {
    /// Instantiates the algorithm.
    pub fn scheduler(self) -> Box<dyn Scheduler> {
        match self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjf => Box::new(Sjf),
            Self::Stcf => Box::new(Stcf),
        }
    }
}

impl fmt::Display for TerminalAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Stcf => "STCF",
        };
        f.write_str(name)
    }
}

impl FromStr for TerminalAlgorithm {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Self::Fcfs),
            "SJF" => Ok(Self::Sjf),
            "STCF" => Ok(Self::Stcf),
            other => Err(SchedulerError::Config(format!(
                "unknown terminal algorithm '{other}' (expected FCFS, SJF or STCF)"
            ))),
        }
    }
}

/// Validates, resets and arrival-sorts a process set.
fn prepare(mut processes: Vec<Process>) -> Result<Vec<Process>> {
    validate_processes(&processes).map_err(SchedulerError::InvalidProcess)?;
    for p in &mut processes {
        p.reset();
    }
    RuleEngine::arrival_order().sort(&mut processes);
    Ok(processes)
}

/// Clock value after idling with nothing eligible.
///
/// Jumps straight to the earliest pending arrival; tick-by-tick idling
/// would land on the same value.
fn idle_until<'a>(pending: impl IntoIterator<Item = &'a Process>, clock: Ticks) -> Ticks {
    let next = pending
        .into_iter()
        .map(|p| p.arrival_time)
        .min()
        .map_or(clock + 1, |arrival| arrival.max(clock + 1));
    log::trace!("cpu idle from {clock} to {next}");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::WorkloadGenerator;

    #[test]
    fn test_terminal_from_str() {
        assert_eq!("sjf".parse::<TerminalAlgorithm>().unwrap(), TerminalAlgorithm::Sjf);
        assert_eq!(" FCFS ".parse::<TerminalAlgorithm>().unwrap(), TerminalAlgorithm::Fcfs);
        assert_eq!("Stcf".parse::<TerminalAlgorithm>().unwrap(), TerminalAlgorithm::Stcf);
        assert!("RR".parse::<TerminalAlgorithm>().is_err());
    }

    #[test]
    fn test_terminal_display_roundtrip() {
        for alg in [TerminalAlgorithm::Fcfs, TerminalAlgorithm::Sjf, TerminalAlgorithm::Stcf] {
            assert_eq!(alg.to_string().parse::<TerminalAlgorithm>().unwrap(), alg);
            assert_eq!(alg.scheduler().name(), alg.to_string());
        }
    }

    #[test]
    fn test_prepare_sorts_and_resets() {
        let mut stale = Process::new("P2", 0, 4).with_priority(1);
        stale.remaining_time = 0;
        stale.completion_time = 99;
        let processes = vec![
            Process::new("P3", 2, 1),
            stale,
            Process::new("P1", 0, 1).with_priority(5),
        ];

        let prepared = prepare(processes).unwrap();
        let ids: Vec<&str> = prepared.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
        assert_eq!(prepared[1].remaining_time, 4);
        assert_eq!(prepared[1].completion_time, 0);
    }

    #[test]
    fn test_prepare_rejects_invalid() {
        let result = prepare(vec![Process::new("P1", 0, 0)]);
        assert!(matches!(result, Err(SchedulerError::InvalidProcess(_))));
    }

    fn workloads() -> Vec<Vec<Process>> {
        (0..25)
            .map(|seed| {
                WorkloadGenerator::new(12)
                    .with_max_arrival(30)
                    .with_burst_range(1, 9)
                    .with_seed(seed)
                    .generate()
            })
            .collect()
    }

    fn all_schedulers() -> Vec<Box<dyn Scheduler>> {
        vec![
            Box::new(Sjf),
            Box::new(Stcf),
            Box::new(RoundRobin::new(1)),
            Box::new(RoundRobin::new(3)),
            Box::new(Mlq::new(1, 3, TerminalAlgorithm::Sjf)),
            Box::new(Mlq::new(2, 4, TerminalAlgorithm::Stcf)),
        ]
    }

    fn assert_invariants(name: &str, input: &[Process], schedule: &Schedule) {
        assert_eq!(schedule.len(), input.len(), "{name}: every process once");
        for p in &schedule.processes {
            assert_eq!(p.turnaround_time, p.completion_time - p.arrival_time, "{name}: {}", p.id);
            assert_eq!(p.turnaround_time, p.waiting_time + p.burst_time, "{name}: {}", p.id);
            assert!(p.completion_time >= p.arrival_time + p.burst_time, "{name}: {}", p.id);
            assert_eq!(p.remaining_time, 0, "{name}: {}", p.id);
            assert_eq!(p.first_execution_time, Some(p.response_time), "{name}: {}", p.id);
            assert!(p.response_time >= p.arrival_time, "{name}: {}", p.id);
        }

        let total_burst: Ticks = input.iter().map(|p| p.burst_time).sum();
        assert_eq!(schedule.busy_time(), total_burst, "{name}: busy time");

        for pair in schedule.dispatches.windows(2) {
            assert!(pair[0].end <= pair[1].start, "{name}: clock moved backward");
        }
    }

    #[test]
    fn test_invariants_hold_on_random_workloads() {
        for input in workloads() {
            for scheduler in all_schedulers() {
                let schedule = scheduler.schedule(input.clone(), 0).unwrap();
                assert_invariants(scheduler.name(), &input, &schedule);
            }
        }
    }

    #[test]
    fn test_fcfs_invariants_when_all_arrived() {
        for input in workloads() {
            let input: Vec<Process> = input
                .into_iter()
                .map(|mut p| {
                    p.arrival_time = 0;
                    p
                })
                .collect();
            let schedule = Fcfs.schedule(input.clone(), 0).unwrap();
            assert_invariants("FCFS", &input, &schedule);
        }
    }

    #[test]
    fn test_first_dispatch_waits_for_arrival() {
        let input: Vec<Process> = WorkloadGenerator::new(8)
            .with_seed(11)
            .generate()
            .into_iter()
            .map(|mut p| {
                p.arrival_time += 3;
                p
            })
            .collect();
        let earliest = input.iter().map(|p| p.arrival_time).min().unwrap();

        for scheduler in [
            Box::new(Sjf) as Box<dyn Scheduler>,
            Box::new(Stcf),
            Box::new(RoundRobin::new(2)),
        ] {
            let schedule = scheduler.schedule(input.clone(), 0).unwrap();
            assert_eq!(schedule.dispatches[0].start, earliest, "{}", scheduler.name());
            let first = &schedule.dispatches[0].process_id;
            let p = schedule.process(first).unwrap();
            assert_eq!(p.response_time, p.arrival_time, "{}", scheduler.name());
        }
    }

    #[test]
    fn test_work_conserving_algorithms_share_makespan() {
        for input in workloads() {
            let sjf = ScheduleKpi::calculate(&Sjf.schedule(input.clone(), 0).unwrap());
            let stcf = ScheduleKpi::calculate(&Stcf.schedule(input.clone(), 0).unwrap());
            let rr = ScheduleKpi::calculate(&RoundRobin::new(2).schedule(input, 0).unwrap());
            assert_eq!(stcf.makespan, sjf.makespan);
            assert_eq!(rr.makespan, sjf.makespan);
            assert!(stcf.avg_turnaround_time <= sjf.avg_turnaround_time + 1e-9);
        }
    }

    #[test]
    fn test_idle_until_next_arrival() {
        let pending = vec![Process::new("P1", 7, 1), Process::new("P2", 4, 1)];
        assert_eq!(idle_until(&pending, 0), 4);
        assert_eq!(idle_until(&Vec::<Process>::new(), 3), 4);
    }
}
