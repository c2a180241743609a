//! Schedule quality metrics (KPIs).
//!
//! Computes the per-run aggregates reported alongside per-process
//! metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg WT / CT / RT / TAT | Arithmetic mean over completed processes |
//! | Makespan | Latest completion time |
//! | Busy Time | Ticks spent executing |
//! | Utilization | Busy time / (makespan - earliest arrival) |
//! | Throughput | Completed processes per tick of makespan |

use serde::{Deserialize, Serialize};

use crate::models::{Process, Schedule, Ticks};

/// Schedule performance indicators.
///
/// Every average is 0.0 for an empty schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of completed processes.
    pub process_count: usize,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean completion time.
    pub avg_completion_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Latest completion time.
    pub makespan: Ticks,
    /// Ticks the CPU spent executing.
    pub busy_time: Ticks,
    /// Fraction of the active span the CPU was busy (0.0..=1.0).
    pub utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let processes = &schedule.processes;
        let count = processes.len();

        let mean = |metric: fn(&Process) -> Ticks| -> f64 {
            if count == 0 {
                0.0
            } else {
                processes.iter().map(metric).sum::<Ticks>() as f64 / count as f64
            }
        };

        let makespan = schedule.makespan();
        let busy_time = schedule.busy_time();

        let span = processes
            .iter()
            .map(|p| p.arrival_time)
            .min()
            .map_or(0, |earliest| makespan - earliest);
        let utilization = if span <= 0 {
            0.0
        } else {
            (busy_time as f64 / span as f64).min(1.0)
        };

        let throughput = if makespan <= 0 {
            0.0
        } else {
            count as f64 / makespan as f64
        };

        Self {
            process_count: count,
            avg_waiting_time: mean(|p| p.waiting_time),
            avg_completion_time: mean(|p| p.completion_time),
            avg_response_time: mean(|p| p.response_time),
            avg_turnaround_time: mean(|p| p.turnaround_time),
            makespan,
            busy_time,
            utilization,
            throughput,
        }
    }
}
