use std::fmt::{self, Display};

use crate::{Pid, Ticks};

/// The reasons a simulation refuses to run or stops early.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A policy was invoked with zero processes.
    EmptyProcessSet,

    /// Round Robin was invoked with a quantum smaller than 1.
    InvalidQuantum(usize),

    /// A process needs no CPU time at all.
    ZeroBurst(Pid),

    /// The process at `index` of the table does not carry PID `index + 1`.
    MisplacedPid { pid: Pid, index: usize },

    /// The last arrival plus every burst does not fit in [`Ticks`].
    TimeOverflow,

    /// The scheduler picked a process that cannot run at `now`.
    InvalidDecision { pid: Pid, now: Ticks },

    /// The scheduler reported that it is done while a process still needs CPU time.
    Unfinished(Pid),
}

impl Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::EmptyProcessSet => write!(f, "no processes to schedule"),
            SimError::InvalidQuantum(quantum) => {
                write!(f, "invalid time quantum {quantum}, must be at least 1")
            }
            SimError::ZeroBurst(pid) => write!(f, "process {pid} has a burst time of 0"),
            SimError::MisplacedPid { pid, index } => {
                write!(f, "process {pid} stored at index {index} of the process table")
            }
            SimError::TimeOverflow => {
                write!(f, "arrival and burst times exceed the simulated clock")
            }
            SimError::InvalidDecision { pid, now } => {
                write!(f, "process {pid} cannot run at time {now}")
            }
            SimError::Unfinished(pid) => {
                write!(f, "scheduler stopped before process {pid} finished")
            }
        }
    }
}

impl std::error::Error for SimError {}
