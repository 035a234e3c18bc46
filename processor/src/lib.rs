//! A processor simulation library
//!
//! This is used for running the policies from the [`scheduler`] crate
//! over a process table in simulated time. A run records every slice in
//! a [`Timeline`] and ends with a [`Report`].

use std::num::NonZeroUsize;

use log::{debug, info};

use scheduler::SchedulingDecision::{Done, Idle, Run};
use scheduler::{
    reset_processes, Pid, Process, ProcessState, Scheduler, SimError, StopReason,
};

mod metrics;
pub mod playback;
mod report;
mod timeline;

pub use metrics::ProcessMetrics;
pub use report::Report;
pub use timeline::{Label, Segment, Timeline};

/// The processor simulator.
///
/// Owns a private copy of the process table, so a run never changes
/// the caller's processes and runs are independent of each other.
pub struct Processor<S: Scheduler> {
    scheduler: S,
    processes: Vec<Process>,
    timeline: Timeline,
}

impl<S: Scheduler> Processor<S> {
    /// Runs a simulation to completion.
    ///
    /// * `scheduler` - the policy to use for the simulation.
    /// * `processes` - the process table; PID `n` must be at index `n - 1`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::{Process, ProcessSpec};
    ///
    /// let processes = Process::table([ProcessSpec::new(0, 3, 0), ProcessSpec::new(1, 2, 0)]);
    /// let report = Processor::run(scheduler::fcfs(), &processes).unwrap();
    /// assert_eq!(report.final_time(), 5);
    /// ```
    pub fn run(scheduler: S, processes: &[Process]) -> Result<Report, SimError> {
        validate(processes)?;

        let mut processes = processes.to_vec();
        reset_processes(&mut processes);

        let mut processor = Processor {
            scheduler,
            processes,
            timeline: Timeline::new(),
        };
        while processor.step()? {}

        let report = Report::new(
            processor.scheduler.name(),
            &processor.processes,
            processor.timeline,
        )?;
        info!(
            "{}: {} processes finished at t={}",
            report.policy(),
            report.processes().len(),
            report.final_time()
        );
        Ok(report)
    }

    // Returns false once the scheduler is done
    fn step(&mut self) -> Result<bool, SimError> {
        let now = self.timeline.now();
        let decision = self.scheduler.next(&self.processes, now);
        debug!("t={now} {decision}");

        match decision {
            Run { pid, timeslice } => self.dispatch(pid, timeslice)?,
            Idle(units) => self.timeline.record(Label::Idle, units.get()),
            Done => {
                if let Some(process) = self.processes.iter().find(|p| !p.is_finished()) {
                    return Err(SimError::Unfinished(process.pid()));
                }
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn dispatch(&mut self, pid: Pid, timeslice: NonZeroUsize) -> Result<(), SimError> {
        let now = self.timeline.now();
        let process = self
            .processes
            .get_mut(pid.index())
            .filter(|process| process.is_ready(now))
            .ok_or(SimError::InvalidDecision { pid, now })?;

        let units = timeslice.get().min(process.remaining());
        let reason = match process.execute(now, units) {
            ProcessState::Finished => StopReason::Exited,
            _ => StopReason::Expired,
        };
        self.timeline.record(Label::Process(pid), units);

        debug!("t={} {pid} stopped: {reason}", now + units);
        self.scheduler.stop(&self.processes, now + units, pid, reason);
        Ok(())
    }
}

fn validate(processes: &[Process]) -> Result<(), SimError> {
    if processes.is_empty() {
        return Err(SimError::EmptyProcessSet);
    }
    for (index, process) in processes.iter().enumerate() {
        if process.pid().index() != index {
            return Err(SimError::MisplacedPid {
                pid: process.pid(),
                index,
            });
        }
        if process.burst() == 0 {
            return Err(SimError::ZeroBurst(process.pid()));
        }
    }

    // Every run ends by the last arrival plus the total burst.
    let last_arrival = processes.iter().map(Process::arrival).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(last_arrival, |end, process| end.checked_add(process.burst()))
        .ok_or(SimError::TimeOverflow)?;
    Ok(())
}

/// Runs First-Come-First-Served over a private copy of `processes`.
pub fn run_fcfs(processes: &[Process]) -> Result<Report, SimError> {
    Processor::run(scheduler::fcfs(), processes)
}

/// Runs preemptive Shortest-Remaining-Time-First over a private copy of `processes`.
pub fn run_srtf(processes: &[Process]) -> Result<Report, SimError> {
    Processor::run(scheduler::srtf(), processes)
}

/// Runs preemptive priority scheduling over a private copy of `processes`.
pub fn run_preemptive_priority(processes: &[Process]) -> Result<Report, SimError> {
    Processor::run(scheduler::preemptive_priority(), processes)
}

/// Runs Round Robin over a private copy of `processes`.
///
/// Fails with [`SimError::InvalidQuantum`] when `quantum` is 0.
pub fn run_round_robin(processes: &[Process], quantum: usize) -> Result<Report, SimError> {
    let timeslice = NonZeroUsize::new(quantum).ok_or(SimError::InvalidQuantum(quantum))?;
    Processor::run(scheduler::round_robin(timeslice), processes)
}

/// Format the [`Processor`]'s reports to a [`String`].
///
/// * `reports` - the reports returned by the [`Processor`].
///
/// ## Example
///
/// ```rust
/// use processor::format_reports;
/// use scheduler::{Process, ProcessSpec};
///
/// let processes = Process::table([ProcessSpec::new(0, 2, 0)]);
/// let report = processor::run_fcfs(&processes).unwrap();
///
/// println!("{}", format_reports(&[report]));
/// ```
pub fn format_reports(reports: &[Report]) -> String {
    let mut s = String::new();
    for (run, report) in reports.iter().enumerate() {
        s.push_str(&format_report(run + 1, report));
    }
    s
}

/// Format a single report, titled with its 1-based `run` number.
pub fn format_report(run: usize, report: &Report) -> String {
    format!("===== Run {}: {} =====\n{}\n", run, report.policy(), report)
}
