//! Simulation driver.
//!
//! Owns the process collection, runs the configured algorithm and hands
//! the result to the output collaborator.

use std::path::Path;

use log::info;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::io::{format_results, read_processes, write_results_to_file};
use crate::models::{Process, Schedule};
use crate::scheduler::ScheduleKpi;

/// A process set ready to be simulated under one or more configurations.
///
/// # Example
///
/// ```
/// use mlq_sched::config::{AlgorithmConfig, SimulationConfig};
/// use mlq_sched::models::Process;
/// use mlq_sched::simulation::Simulation;
///
/// let sim = Simulation::new(vec![Process::new("P1", 0, 4)]);
/// let report = sim
///     .run(&SimulationConfig::new(AlgorithmConfig::RoundRobin { quantum: 2 }))
///     .unwrap();
/// assert_eq!(report.schedule.processes[0].completion_time, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    processes: Vec<Process>,
}

/// Result of one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Name of the algorithm that ran.
    pub algorithm: &'static str,
    /// Completed processes and dispatch timeline.
    pub schedule: Schedule,
    /// Aggregate metrics.
    pub kpi: ScheduleKpi,
}

impl Simulation {
    /// Creates a simulation over the given processes.
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    /// Loads processes from a process file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(read_processes(path)?))
    }

    /// Input processes, in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Runs the configured algorithm on a copy of the process set.
    pub fn run(&self, config: &SimulationConfig) -> Result<SimulationReport> {
        config.validate()?;
        let scheduler = config.algorithm.build();
        let schedule = scheduler.schedule(self.processes.clone(), config.start_clock)?;
        let kpi = ScheduleKpi::calculate(&schedule);

        info!(
            "{} finished {} processes: makespan {}, avg WT {:.2}, avg TAT {:.2}",
            scheduler.name(),
            kpi.process_count,
            kpi.makespan,
            kpi.avg_waiting_time,
            kpi.avg_turnaround_time
        );

        Ok(SimulationReport {
            algorithm: scheduler.name(),
            schedule,
            kpi,
        })
    }
}

impl SimulationReport {
    /// Writes the report in the result file format.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_results_to_file(path, &self.schedule)
    }

    /// Formats the report in the result file format.
    pub fn to_text(&self) -> String {
        format_results(&self.schedule)
    }
}

/// Reads `input`, runs `config` and writes the results to `output`.
pub fn simulate_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &SimulationConfig,
) -> Result<SimulationReport> {
    let report = Simulation::from_file(input)?.run(config)?;
    report.write_to(output)?;
    Ok(report)
}
