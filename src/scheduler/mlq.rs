//! Multi-level queue orchestrator.
//!
//! # Algorithm
//!
//! 1. Partition processes by `queue` into bands 1, 2 and 3.
//! 2. Band 1: Round-Robin with `quantum1`, starting at the given clock.
//! 3. Band 2: Round-Robin with `quantum2`, starting at the latest
//!    completion time of band 1.
//! 4. Band 3: the terminal algorithm, starting at the latest completion
//!    time of band 2.
//!
//! An empty band hands the incoming clock through unchanged.

use log::info;

use super::{RoundRobin, Scheduler, TerminalAlgorithm};
use crate::error::{Result, SchedulerError};
use crate::models::{Process, Schedule, Ticks, MAX_QUEUE_LEVEL, MIN_QUEUE_LEVEL};
use crate::validation::validate_processes;

/// Result of running one band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandOutcome {
    /// Queue level (1..=3).
    pub level: u8,
    /// Clock handed to this band.
    pub start_clock: Ticks,
    /// The band's completed sequence.
    pub schedule: Schedule,
}

impl BandOutcome {
    /// Clock handed to the next band: latest completion, or the start
    /// clock when the band was empty.
    pub fn hand_off_clock(&self) -> Ticks {
        self.schedule.last_completion().unwrap_or(self.start_clock)
    }
}

/// Three-band MLQ scheduler.
///
/// # Example
///
/// ```
/// use mlq_sched::models::Process;
/// use mlq_sched::scheduler::{Mlq, Scheduler, TerminalAlgorithm};
///
/// let processes = vec![
///     Process::new("A", 0, 3).with_queue(1),
///     Process::new("B", 0, 2).with_queue(2),
///     Process::new("C", 0, 1).with_queue(3),
/// ];
/// let schedule = Mlq::new(1, 3, TerminalAlgorithm::Sjf)
///     .schedule(processes, 0)
///     .unwrap();
///
/// assert_eq!(schedule.process("B").unwrap().response_time, 3);
/// assert_eq!(schedule.process("C").unwrap().completion_time, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mlq {
    /// Quantum for band 1.
    pub quantum1: Ticks,
    /// Quantum for band 2.
    pub quantum2: Ticks,
    /// Algorithm for band 3.
    pub terminal: TerminalAlgorithm,
}

impl Mlq {
    /// Creates an MLQ scheduler.
    pub fn new(quantum1: Ticks, quantum2: Ticks, terminal: TerminalAlgorithm) -> Self {
        Self {
            quantum1,
            quantum2,
            terminal,
        }
    }

    /// Runs every band and returns one outcome per band, in band order.
    pub fn run_bands(&self, processes: Vec<Process>, start: Ticks) -> Result<Vec<BandOutcome>> {
        validate_processes(&processes).map_err(SchedulerError::InvalidProcess)?;
        for quantum in [self.quantum1, self.quantum2] {
            if quantum <= 0 {
                return Err(SchedulerError::InvalidQuantum(quantum));
            }
        }

        let mut bands: Vec<Vec<Process>> = vec![Vec::new(); usize::from(MAX_QUEUE_LEVEL)];
        for p in processes {
            bands[usize::from(p.queue - MIN_QUEUE_LEVEL)].push(p);
        }

        let mut outcomes = Vec::with_capacity(bands.len());
        let mut clock = start;

        for (level, band) in (MIN_QUEUE_LEVEL..=MAX_QUEUE_LEVEL).zip(bands) {
            let scheduler = self.band_scheduler(level);
            let size = band.len();
            let schedule = scheduler.schedule(band, clock)?;
            let outcome = BandOutcome {
                level,
                start_clock: clock,
                schedule,
            };
            clock = outcome.hand_off_clock();
            info!(
                "MLQ band {} ({}, {} processes) started at {}, hands off at {}",
                level,
                scheduler.name(),
                size,
                outcome.start_clock,
                clock
            );
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    fn band_scheduler(&self, level: u8) -> Box<dyn Scheduler> {
        match level {
            1 => Box::new(RoundRobin::new(self.quantum1)),
            2 => Box::new(RoundRobin::new(self.quantum2)),
            _ => self.terminal.scheduler(),
        }
    }
}

impl Default for Mlq {
    fn default() -> Self {
        Self::new(1, 3, TerminalAlgorithm::Sjf)
    }
}

impl Scheduler for Mlq {
    fn name(&self) -> &'static str {
        "MLQ"
    }

    fn schedule(&self, processes: Vec<Process>, start: Ticks) -> Result<Schedule> {
        let mut schedule = Schedule::new();
        for outcome in self.run_bands(processes, start)? {
            schedule.append(outcome.schedule);
        }
        Ok(schedule)
    }
}
