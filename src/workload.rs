//! Seeded random workload generation.
//!
//! Produces reproducible process sets for benchmarking algorithms
//! against each other and for property checks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Process, Ticks, MAX_QUEUE_LEVEL, MIN_QUEUE_LEVEL};

/// Random process-set generator.
///
/// # Example
///
/// ```
/// use mlq_sched::workload::WorkloadGenerator;
///
/// let a = WorkloadGenerator::new(10).with_seed(7).generate();
/// let b = WorkloadGenerator::new(10).with_seed(7).generate();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival time (inclusive).
    pub max_arrival: Ticks,
    /// Shortest burst (inclusive, at least 1).
    pub min_burst: Ticks,
    /// Longest burst (inclusive).
    pub max_burst: Ticks,
    /// Priorities are drawn from `0..=max_priority`.
    pub max_priority: i32,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
            seed: 0,
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: Ticks) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: Ticks, max_burst: Ticks) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the highest priority value.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates processes `P1..=Pn` spread over all three queue bands.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let max_arrival = self.max_arrival.max(0);
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);
        let max_priority = self.max_priority.max(0);

        (1..=self.count)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(0..=max_arrival),
                    rng.random_range(min_burst..=max_burst),
                )
                .with_queue(rng.random_range(MIN_QUEUE_LEVEL..=MAX_QUEUE_LEVEL))
                .with_priority(rng.random_range(0..=max_priority))
            })
            .collect()
    }
}
