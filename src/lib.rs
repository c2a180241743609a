//! CPU scheduling simulator.
//!
//! Computes per-process completion, waiting, response and turnaround
//! times for a fixed batch of processes under classical disciplines and
//! a three-band multi-level queue (MLQ) that chains them.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Schedule`, `Dispatch`
//! - **`dispatching`**: Rule engine used by every algorithm to pick the
//!   next process (arrival pre-sort, SJF, STCF selection)
//! - **`scheduler`**: `Fcfs`, `Sjf`, `Stcf`, `RoundRobin`, `Mlq` and
//!   `ScheduleKpi`
//! - **`validation`**: Input preconditions (burst, arrival, queue level)
//! - **`io`**: Process file reader and result file writer
//! - **`config`**: Algorithm selection, loadable from JSON
//! - **`simulation`**: Driver tying input, algorithm and output together
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use mlq_sched::models::Process;
//! use mlq_sched::scheduler::{Mlq, Scheduler, TerminalAlgorithm};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5).with_queue(1),
//!     Process::new("P2", 1, 3).with_queue(3),
//! ];
//! let schedule = Mlq::new(2, 3, TerminalAlgorithm::Fcfs)
//!     .schedule(processes, 0)
//!     .unwrap();
//! assert_eq!(schedule.process("P2").unwrap().completion_time, 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8

pub mod config;
pub mod dispatching;
pub mod error;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{Result, SchedulerError};
