use super::{pick_ready, single_unit};
use crate::{Process, Scheduler, SchedulingDecision, Ticks};

/// Shortest-Remaining-Time-First, preemptive.
///
/// Decides every time unit, so a newly arrived shorter process takes
/// the CPU at the next unit boundary.
pub struct Srtf;

impl Scheduler for Srtf {
    fn name(&self) -> &'static str {
        "SJF Preemptive (SRTF)"
    }

    fn next(&mut self, processes: &[Process], now: Ticks) -> SchedulingDecision {
        single_unit(pick_ready(processes, now, Process::remaining), processes, now)
    }
}
