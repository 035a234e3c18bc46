//! Replays a finished report with a wall-clock delay per time unit.
//!
//! Purely presentational: the report is already complete when playback
//! starts, so the delay cannot change any scheduling outcome.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::timeline::Label;
use crate::Report;

/// Writes one line per timeline segment to `out`, sleeping `delay` for
/// every time unit of the segment.
pub fn play<W: Write>(report: &Report, delay: Duration, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== {} ===", report.policy())?;
    for segment in report.timeline().segments() {
        match segment.label {
            Label::Process(pid) => writeln!(
                out,
                "Process {pid} executing for {} unit(s) starting at time {}",
                segment.duration, segment.start
            )?,
            Label::Idle => writeln!(
                out,
                "CPU idle for {} unit(s) starting at time {}",
                segment.duration, segment.start
            )?,
        }
        out.flush()?;

        if !delay.is_zero() {
            let units = u32::try_from(segment.duration).unwrap_or(u32::MAX);
            thread::sleep(delay.saturating_mul(units));
        }
    }
    Ok(())
}
