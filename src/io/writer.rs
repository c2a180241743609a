//! Output collaborator: result file formatting.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{Result, SchedulerError};
use crate::models::Schedule;
use crate::scheduler::ScheduleKpi;

/// Header line written before the process rows.
pub const HEADER: &str = "#PID;BT;AT;Q;P;WT;CT;RT;TAT";

/// Formats the header, one row per process in schedule order, and the
/// averages trailer.
pub fn format_results(schedule: &Schedule) -> String {
    let mut text = format!("{HEADER}\n");
    for p in &schedule.processes {
        text.push_str(&format!(
            "{}; {}; {}; {}; {}; {}; {}; {}; {}\n",
            p.id,
            p.burst_time,
            p.arrival_time,
            p.queue,
            p.priority,
            p.waiting_time,
            p.completion_time,
            p.response_time,
            p.turnaround_time
        ));
    }

    let kpi = ScheduleKpi::calculate(schedule);
    text.push_str(&format!(
        "WT={:.2}; CT={:.2}; RT={:.2}; TAT={:.2}",
        kpi.avg_waiting_time, kpi.avg_completion_time, kpi.avg_response_time, kpi.avg_turnaround_time
    ));
    text
}

/// Writes [`format_results`] to any writer.
pub fn write_results<W: Write>(out: &mut W, schedule: &Schedule) -> io::Result<()> {
    out.write_all(format_results(schedule).as_bytes())
}

/// Writes the results to a file, replacing any existing content.
pub fn write_results_to_file(path: impl AsRef<Path>, schedule: &Schedule) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SchedulerError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_results(&mut out, schedule)
        .and_then(|()| out.flush())
        .map_err(|e| SchedulerError::io(path, e))?;
    info!("wrote {} results to {}", schedule.len(), path.display());
    Ok(())
}
