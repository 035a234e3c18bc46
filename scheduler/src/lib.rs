//! A CPU scheduling policy library.
//!
//! This library provides the process table, the [`Scheduler`] trait
//! and four classical policies that decide, at every decision point
//! of a simulation, which process gets the CPU and for how long.
//!

use std::num::NonZeroUsize;

mod error;
mod process;
mod scheduler;

pub use crate::error::SimError;
pub use crate::process::{reset_processes, Process, ProcessSpec};
pub use crate::scheduler::{
    Pid, ProcessState, Scheduler, SchedulingDecision, StopReason, Ticks,
};

mod schedulers;

use schedulers::{Fcfs, PreemptivePriority, RoundRobin, Srtf};

/// Returns a structure that implements the `Scheduler` trait with a
/// non-preemptive First-Come-First-Served policy.
pub fn fcfs() -> impl Scheduler {
    Fcfs
}

/// Returns a structure that implements the `Scheduler` trait with a
/// preemptive Shortest-Remaining-Time-First policy.
pub fn srtf() -> impl Scheduler {
    Srtf
}

/// Returns a structure that implements the `Scheduler` trait with a
/// preemptive priority policy (lower value means higher priority).
pub fn preemptive_priority() -> impl Scheduler {
    PreemptivePriority
}

/// Returns a structure that implements the `Scheduler` trait with a round robin scheduler policy
///
/// * `timeslice` - the time quantum that a process can run before it is preempted
pub fn round_robin(timeslice: NonZeroUsize) -> impl Scheduler {
    RoundRobin::new(timeslice)
}
