//! Process file input and result file output.
//!
//! # Input Format
//!
//! One process per line, semicolon-separated: `PID; BT; AT; Q; P`.
//! Blank lines and lines starting with `#` are skipped.
//!
//! # Output Format
//!
//! A `#` header, one line per process in schedule order
//! (`PID; BT; AT; Q; P; WT; CT; RT; TAT`), then a trailer with the
//! averages: `WT=..; CT=..; RT=..; TAT=..`.

mod reader;
mod writer;

pub use reader::{parse_processes, read_processes};
pub use writer::{format_results, write_results, write_results_to_file, HEADER};
