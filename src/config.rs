//! Simulation configuration.
//!
//! Selects the algorithm and its parameters. Loadable from JSON:
//!
//! ```json
//! { "algorithm": { "kind": "mlq", "quantum1": 1, "quantum2": 3, "terminal": "sjf" } }
//! ```
//!
//! The default is MLQ with quanta 1 and 3 and SJF on band 3.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::models::Ticks;
use crate::scheduler::{Fcfs, Mlq, RoundRobin, Scheduler, Sjf, Stcf, TerminalAlgorithm};

/// Algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmConfig {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First.
    Sjf,
    /// Shortest-Time-to-Completion-First.
    Stcf,
    /// Round-Robin with a fixed quantum.
    RoundRobin {
        /// Tick allotment per dispatch.
        quantum: Ticks,
    },
    /// Three-band multi-level queue.
    Mlq {
        /// Band 1 quantum.
        quantum1: Ticks,
        /// Band 2 quantum.
        quantum2: Ticks,
        /// Band 3 algorithm.
        #[serde(default)]
        terminal: TerminalAlgorithm,
    },
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self::Mlq {
            quantum1: 1,
            quantum2: 3,
            terminal: TerminalAlgorithm::Sjf,
        }
    }
}

impl AlgorithmConfig {
    /// Instantiates the configured scheduler.
    pub fn build(&self) -> Box<dyn Scheduler> {
        match *self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjf => Box::new(Sjf),
            Self::Stcf => Box::new(Stcf),
            Self::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
            Self::Mlq {
                quantum1,
                quantum2,
                terminal,
            } => Box::new(Mlq::new(quantum1, quantum2, terminal)),
        }
    }

    /// Checks quanta before any scheduling starts.
    pub fn validate(&self) -> Result<()> {
        let quanta = match *self {
            Self::RoundRobin { quantum } => vec![quantum],
            Self::Mlq {
                quantum1, quantum2, ..
            } => vec![quantum1, quantum2],
            _ => Vec::new(),
        };
        match quanta.into_iter().find(|&q| q <= 0) {
            Some(q) => Err(SchedulerError::InvalidQuantum(q)),
            None => Ok(()),
        }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Algorithm to run.
    #[serde(default)]
    pub algorithm: AlgorithmConfig,
    /// Clock value the run starts at.
    #[serde(default)]
    pub start_clock: Ticks,
}

impl SimulationConfig {
    /// Creates a configuration running `algorithm` from clock 0.
    pub fn new(algorithm: AlgorithmConfig) -> Self {
        Self {
            algorithm,
            start_clock: 0,
        }
    }

    /// Sets the starting clock.
    pub fn with_start_clock(mut self, start_clock: Ticks) -> Self {
        self.start_clock = start_clock;
        self
    }

    /// Parses a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SchedulerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| SchedulerError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.start_clock < 0 {
            return Err(SchedulerError::Config(format!(
                "start clock must be non-negative, got {}",
                self.start_clock
            )));
        }
        self.algorithm.validate()
    }
}
