use std::num::NonZeroUsize;

use crate::SchedulingDecision::{Done, Idle, Run};
use crate::{Process, Scheduler, SchedulingDecision, Ticks};

/// First-Come-First-Served, non-preemptive.
///
/// Processes are served by arrival time, ties by PID, and each one runs
/// its whole burst in a single slice. A gap before the next arrival is
/// reported as one idle slice covering the whole gap.
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn next(&mut self, processes: &[Process], now: Ticks) -> SchedulingDecision {
        let Some(process) = processes
            .iter()
            .filter(|process| !process.is_finished())
            .min_by_key(|process| (process.arrival(), process.pid()))
        else {
            return Done;
        };

        if let Some(gap) = NonZeroUsize::new(process.arrival().saturating_sub(now)) {
            return Idle(gap);
        }

        NonZeroUsize::new(process.remaining()).map_or(Done, |timeslice| Run {
            pid: process.pid(),
            timeslice,
        })
    }
}
