//! The scheduling policies.
//!
//! Every policy lives in its own file and is exported here.
//! [`Srtf`] and [`PreemptivePriority`] decide one time unit at a time
//! and share [`pick_ready`] and [`single_unit`].

use std::num::NonZeroUsize;

use crate::{Pid, Process, ProcessState, SchedulingDecision, Ticks};

mod fcfs;
pub use fcfs::Fcfs;

mod srtf;
pub use srtf::Srtf;

mod priority;
pub use priority::PreemptivePriority;

mod round_robin;
pub use round_robin::RoundRobin;

/// Returns the ready process with the smallest `key`.
///
/// Ties go to the lowest PID.
pub(crate) fn pick_ready<K, F>(processes: &[Process], now: Ticks, key: F) -> Option<Pid>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    processes
        .iter()
        .filter(|process| process.is_ready(now))
        .min_by_key(|process| (key(process), process.pid()))
        .map(Process::pid)
}

/// Runs `pid` for one time unit. With nothing ready, idles until the
/// next arrival.
pub(crate) fn single_unit(
    pid: Option<Pid>,
    processes: &[Process],
    now: Ticks,
) -> SchedulingDecision {
    match pid {
        Some(pid) => SchedulingDecision::Run {
            pid,
            timeslice: NonZeroUsize::MIN,
        },
        None => idle_or_done(processes, now),
    }
}

/// Idles until the earliest pending arrival, or reports `Done` when no
/// process is pending.
pub(crate) fn idle_or_done(processes: &[Process], now: Ticks) -> SchedulingDecision {
    processes
        .iter()
        .filter(|process| process.state(now) == ProcessState::Pending)
        .map(|process| process.arrival() - now)
        .min()
        .and_then(NonZeroUsize::new)
        .map_or(SchedulingDecision::Done, SchedulingDecision::Idle)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::num::NonZeroUsize;

    use crate::{Process, ProcessSpec, SchedulingDecision};

    /// P1(0, 5, 2), P2(1, 3, 1), P3(2, 1, 3) as (arrival, burst, priority).
    pub fn three_processes() -> Vec<Process> {
        Process::table([
            ProcessSpec::new(0, 5, 2),
            ProcessSpec::new(1, 3, 1),
            ProcessSpec::new(2, 1, 3),
        ])
    }

    #[test]
    fn pick_ready_breaks_ties_by_pid() {
        let processes = Process::table([
            ProcessSpec::new(0, 4, 0),
            ProcessSpec::new(0, 2, 0),
            ProcessSpec::new(0, 2, 0),
        ]);
        let pid = super::pick_ready(&processes, 0, Process::remaining);
        assert_eq!(pid.map(|pid| pid.get()), Some(2));
    }

    #[test]
    fn idle_reaches_the_earliest_pending_arrival() {
        let mut processes = Process::table([
            ProcessSpec::new(0, 1, 0),
            ProcessSpec::new(9, 1, 0),
            ProcessSpec::new(4, 1, 0),
        ]);
        processes[0].execute(0, 1);
        assert_eq!(
            super::idle_or_done(&processes, 1),
            SchedulingDecision::Idle(NonZeroUsize::new(3).unwrap())
        );

        processes[2].execute(4, 1);
        processes[1].execute(9, 1);
        assert_eq!(super::idle_or_done(&processes, 10), SchedulingDecision::Done);
    }

    #[test]
    fn pick_ready_skips_pending_processes() {
        let processes = three_processes();
        let pid = super::pick_ready(&processes, 0, Process::remaining);
        assert_eq!(pid.map(|pid| pid.get()), Some(1));
    }
}
