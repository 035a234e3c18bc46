use std::fmt::{self, Display};

use serde::Serialize;

use scheduler::{Process, SimError, Ticks};

use crate::metrics::{cpu_utilization, mean, ProcessMetrics};
use crate::timeline::Timeline;

/// The outcome of one policy run over one process set.
///
/// Built once from the final process table and the timeline, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    policy: &'static str,
    processes: Vec<ProcessMetrics>,
    average_waiting: f64,
    average_turnaround: f64,
    average_response: f64,
    cpu_utilization: f64,
    context_switches: usize,
    timeline: Timeline,
}

impl Report {
    pub fn new(
        policy: &'static str,
        processes: &[Process],
        timeline: Timeline,
    ) -> Result<Report, SimError> {
        let processes = processes
            .iter()
            .map(ProcessMetrics::new)
            .collect::<Result<Vec<_>, _>>()?;

        for metrics in &processes {
            debug_assert_eq!(timeline.start_of(metrics.pid), Some(metrics.start));
            debug_assert_eq!(timeline.completion_of(metrics.pid), Some(metrics.completion));
        }

        let total_burst: Ticks = processes.iter().map(|metrics| metrics.burst).sum();
        debug_assert_eq!(total_burst, timeline.busy_time());

        Ok(Report {
            policy,
            average_waiting: mean(processes.iter().map(|metrics| metrics.waiting)),
            average_turnaround: mean(processes.iter().map(|metrics| metrics.turnaround)),
            average_response: mean(processes.iter().map(|metrics| metrics.response)),
            cpu_utilization: cpu_utilization(total_burst, timeline.now()),
            context_switches: timeline.context_switches(),
            processes,
            timeline,
        })
    }

    pub fn policy(&self) -> &'static str {
        self.policy
    }

    /// Per-process metrics, in PID order.
    pub fn processes(&self) -> &[ProcessMetrics] {
        &self.processes
    }

    pub fn average_waiting(&self) -> f64 {
        self.average_waiting
    }

    pub fn average_turnaround(&self) -> f64 {
        self.average_turnaround
    }

    pub fn average_response(&self) -> f64 {
        self.average_response
    }

    /// CPU utilization, as a percentage.
    pub fn cpu_utilization(&self) -> f64 {
        self.cpu_utilization
    }

    pub fn context_switches(&self) -> usize {
        self.context_switches
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The simulated time at which the last process finished.
    pub fn final_time(&self) -> Ticks {
        self.timeline.now()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PID\tARRIVAL\tBURST\tPRI\tSTART\tEND\tWAIT\tTAT\tRESP")?;
        for metrics in &self.processes {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                metrics.pid,
                metrics.arrival,
                metrics.burst,
                metrics.priority,
                metrics.start,
                metrics.completion,
                metrics.waiting,
                metrics.turnaround,
                metrics.response
            )?;
        }
        writeln!(f, "Average waiting time: {:.2}", self.average_waiting)?;
        writeln!(f, "Average turnaround time: {:.2}", self.average_turnaround)?;
        writeln!(f, "Average response time: {:.2}", self.average_response)?;
        writeln!(f, "CPU utilization: {:.2}%", self.cpu_utilization)?;
        writeln!(f, "Context switches: {}", self.context_switches)?;
        writeln!(f, "Gantt chart: {}", self.timeline)?;

        write!(f, "Segments:")?;
        for segment in self.timeline.coalesced() {
            write!(f, " {segment}")?;
        }
        writeln!(f)
    }
}
