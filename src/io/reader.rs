//! Input collaborator: process file parsing.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, SchedulerError};
use crate::models::{Process, MAX_QUEUE_LEVEL, MIN_QUEUE_LEVEL};

const FIELD_COUNT: usize = 5;

/// Reads and parses a process file.
pub fn read_processes(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| SchedulerError::io(path, e))?;
    let processes = parse_processes(&content)?;
    debug!("read {} processes from {}", processes.len(), path.display());
    Ok(processes)
}

/// Parses process records from text, preserving line order.
///
/// # Example
///
/// ```
/// use mlq_sched::io::parse_processes;
///
/// let processes = parse_processes("# PID; BT; AT; Q; P\nA; 5; 0; 1; 2\n").unwrap();
/// assert_eq!(processes[0].burst_time, 5);
/// assert_eq!(processes[0].priority, 2);
/// ```
pub fn parse_processes(input: &str) -> Result<Vec<Process>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

fn parse_line(line: &str, line_no: usize) -> Result<Process> {
    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(parse_error(
            line_no,
            format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
        ));
    }

    let id = fields[0];
    if id.is_empty() {
        return Err(parse_error(line_no, "empty process id"));
    }

    let burst = parse_field::<i64>(fields[1], "burst time", line_no)?;
    let arrival = parse_field::<i64>(fields[2], "arrival time", line_no)?;
    let queue = parse_field::<u8>(fields[3], "queue level", line_no)?;
    let priority = parse_field::<i32>(fields[4], "priority", line_no)?;

    if !(MIN_QUEUE_LEVEL..=MAX_QUEUE_LEVEL).contains(&queue) {
        return Err(parse_error(
            line_no,
            format!("queue level {queue} outside {MIN_QUEUE_LEVEL}..={MAX_QUEUE_LEVEL}"),
        ));
    }

    Ok(Process::new(id, arrival, burst)
        .with_queue(queue)
        .with_priority(priority))
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str, line_no: usize) -> Result<T> {
    raw.parse()
        .map_err(|_| parse_error(line_no, format!("invalid {name} '{raw}'")))
}

fn parse_error(line: usize, message: impl Into<String>) -> SchedulerError {
    SchedulerError::Parse {
        line,
        message: message.into(),
    }
}
