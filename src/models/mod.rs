//! Simulation domain models.
//!
//! Provides the process record consumed by every algorithm and the
//! schedule they produce.
//!
//! # Metric Definitions
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | CT | Tick at which the process finishes |
//! | TAT | `CT - AT` |
//! | WT | `TAT - BT` |
//! | RT | Tick of first dispatch |

mod process;
mod schedule;

pub use process::{Process, Ticks, MAX_QUEUE_LEVEL, MIN_QUEUE_LEVEL};
pub use schedule::{Dispatch, Schedule};
