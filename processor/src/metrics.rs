use average::Estimate;
use serde::Serialize;

use scheduler::{Pid, Process, SimError, Ticks};

/// Timing metrics of one finished process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: u32,
    pub start: Ticks,
    pub completion: Ticks,
    /// Completion minus arrival.
    pub turnaround: Ticks,
    /// Turnaround minus burst.
    pub waiting: Ticks,
    /// First start minus arrival.
    pub response: Ticks,
}

impl ProcessMetrics {
    pub fn new(process: &Process) -> Result<ProcessMetrics, SimError> {
        let pid = process.pid();
        let (Some(start), Some(completion)) = (process.start(), process.completion()) else {
            return Err(SimError::Unfinished(pid));
        };
        debug_assert!(completion >= start && start >= process.arrival());

        let turnaround = completion - process.arrival();
        Ok(ProcessMetrics {
            pid,
            arrival: process.arrival(),
            burst: process.burst(),
            priority: process.priority(),
            start,
            completion,
            turnaround,
            waiting: turnaround - process.burst(),
            response: start - process.arrival(),
        })
    }
}

pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = Ticks>,
{
    values
        .into_iter()
        .map(|value| value as f64)
        .collect::<average::Mean>()
        .estimate()
}

/// Percentage of `elapsed` during which a process was running.
pub fn cpu_utilization(busy: Ticks, elapsed: Ticks) -> f64 {
    if elapsed == 0 {
        return 0.0;
    }
    100.0 * busy as f64 / elapsed as f64
}
