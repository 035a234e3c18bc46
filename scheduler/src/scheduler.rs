use std::fmt::{self, Display};
use std::num::NonZeroUsize;

use serde::Serialize;

use crate::Process;

/// Simulated time, measured in time units.
pub type Ticks = usize;

/// The PID of a process
///
/// The PID cannot be 0, PIDs start from 1 and follow the input order,
/// so the process with PID `n` sits at index `n - 1` of the process table.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Pid(NonZeroUsize);

impl Pid {
    /// Returns `None` for 0.
    pub fn new(pid: usize) -> Option<Pid> {
        NonZeroUsize::new(pid).map(Pid)
    }

    /// The PID of the process stored at `index` in the process table.
    pub fn from_index(index: usize) -> Pid {
        Pid(NonZeroUsize::MIN.saturating_add(index))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Position of the process in the process table.
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl PartialEq<usize> for Pid {
    fn eq(&self, other: &usize) -> bool {
        self.0.get() == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The action that the scheduler asks the simulated CPU to take.
///
/// This is returned by the [`Scheduler::next`] function.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulingDecision {
    /// Run the process with PID `pid` for a maximum of `timeslice` time units.
    Run { pid: Pid, timeslice: NonZeroUsize },

    /// Leave the CPU idle for the specified amount of time units.
    ///
    /// Returned when no process has arrived yet and at least one is
    /// still owed CPU time.
    Idle(NonZeroUsize),

    /// There are no more processes to schedule.
    Done,
}

impl Display for SchedulingDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingDecision::Run { pid, timeslice } => {
                write!(f, "Run {} for {} units", pid, timeslice)
            }
            SchedulingDecision::Idle(amount) => {
                write!(f, "Idle for {} units", amount)
            }
            SchedulingDecision::Done => {
                write!(f, "Done, no more processes")
            }
        }
    }
}

/// The reason that a process has stopped and the simulator
/// has called the scheduler.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The timeslice allocated for the process has expired and the process
    /// still needs CPU time.
    Expired,

    /// The process has received all of its burst time.
    Exited,
}

impl Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Expired => write!(f, "Expired"),
            StopReason::Exited => write!(f, "Exited"),
        }
    }
}

/// The state of a process at a given simulated time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProcessState {
    /// The process has not arrived yet.
    Pending,

    /// The process has arrived and still needs CPU time.
    Ready,

    /// The process has received all of its burst time.
    Finished,
}

impl Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessState::Pending => write!(f, "PENDING"),
            ProcessState::Ready => write!(f, "READY"),
            ProcessState::Finished => write!(f, "DONE"),
        }
    }
}

/// The trait that any scheduling policy has to implement.
pub trait Scheduler {
    /// The policy name, used as the title of its report.
    fn name(&self) -> &'static str;

    /// Returns the action that the simulated CPU has to perform next.
    ///
    /// * `processes` - the process table, indexed by [`Pid::index`].
    /// * `now` - the current simulated time.
    fn next(&mut self, processes: &[Process], now: Ticks) -> SchedulingDecision;

    /// The scheduler is informed that the process it picked has stopped
    /// at time `now`, and the reason.
    fn stop(&mut self, _processes: &[Process], _now: Ticks, _pid: Pid, _reason: StopReason) {}
}
