use serde::{Deserialize, Serialize};

use crate::{Pid, ProcessState, Ticks};

/// The immutable description of a process, as read from the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub arrival: Ticks,
    pub burst: Ticks,
    /// Lower value means higher priority.
    #[serde(default)]
    pub priority: u32,
}

impl ProcessSpec {
    pub fn new(arrival: Ticks, burst: Ticks, priority: u32) -> Self {
        ProcessSpec {
            arrival,
            burst,
            priority,
        }
    }
}

/// Process Control Block of a simulated process.
///
/// Holds the inputs of the process together with the simulation state.
/// The state only moves forward through [`Process::execute`] and goes
/// back to its initial values through [`Process::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    pid: Pid,
    arrival: Ticks,
    burst: Ticks,
    priority: u32,
    remaining: Ticks,
    start: Option<Ticks>,
    completion: Option<Ticks>,
}

impl Process {
    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks, priority: u32) -> Self {
        Process {
            pid,
            arrival,
            burst,
            priority,
            remaining: burst,
            start: None,
            completion: None,
        }
    }

    /// Builds a process table, assigning PIDs 1..N in input order.
    pub fn table<I>(specs: I) -> Vec<Process>
    where
        I: IntoIterator<Item = ProcessSpec>,
    {
        specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                Process::new(Pid::from_index(index), spec.arrival, spec.burst, spec.priority)
            })
            .collect()
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn arrival(&self) -> Ticks {
        self.arrival
    }

    pub fn burst(&self) -> Ticks {
        self.burst
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// CPU time still owed to the process.
    pub fn remaining(&self) -> Ticks {
        self.remaining
    }

    /// Time of the first execution, if the process has run.
    pub fn start(&self) -> Option<Ticks> {
        self.start
    }

    pub fn completion(&self) -> Option<Ticks> {
        self.completion
    }

    pub fn spec(&self) -> ProcessSpec {
        ProcessSpec::new(self.arrival, self.burst, self.priority)
    }

    pub fn state(&self, now: Ticks) -> ProcessState {
        if self.remaining == 0 {
            ProcessState::Finished
        } else if now < self.arrival {
            ProcessState::Pending
        } else {
            ProcessState::Ready
        }
    }

    /// The process has arrived and still needs CPU time.
    pub fn is_ready(&self, now: Ticks) -> bool {
        self.state(now) == ProcessState::Ready
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Runs the process for `units` time units starting at `now`.
    ///
    /// `units` is capped to the remaining time. Returns the state of the
    /// process at the end of the slice.
    pub fn execute(&mut self, now: Ticks, units: Ticks) -> ProcessState {
        debug_assert!(
            self.is_ready(now),
            "Process {} executed while {}",
            self.pid,
            self.state(now)
        );

        let units = units.min(self.remaining);
        self.start.get_or_insert(now);
        self.remaining -= units;
        let end = now + units;
        if self.remaining == 0 {
            self.completion = Some(end);
        }
        self.state(end)
    }

    /// Puts the process back in its initial state.
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.start = None;
        self.completion = None;
    }
}

/// Puts every process back in its initial state.
pub fn reset_processes(processes: &mut [Process]) {
    for process in processes.iter_mut() {
        process.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> Vec<Process> {
        Process::table([
            ProcessSpec::new(0, 5, 2),
            ProcessSpec::new(1, 3, 1),
            ProcessSpec::new(2, 1, 3),
        ])
    }

    #[test]
    fn table_assigns_pids_in_input_order() {
        let processes = table();
        let pids: Vec<usize> = processes.iter().map(|p| p.pid().get()).collect();
        assert_eq!(pids, vec![1, 2, 3]);
        assert_eq!(processes[1].remaining(), 3);
        assert_eq!(processes[1].start(), None);
    }

    #[test]
    fn state_follows_arrival_and_remaining_time() {
        let mut process = Process::new(Pid::from_index(0), 2, 2, 0);
        assert_eq!(process.state(0), ProcessState::Pending);
        assert_eq!(process.state(2), ProcessState::Ready);

        assert_eq!(process.execute(2, 1), ProcessState::Ready);
        assert_eq!(process.execute(4, 1), ProcessState::Finished);
        assert_eq!(process.start(), Some(2));
        assert_eq!(process.completion(), Some(5));
    }

    #[test]
    fn execute_keeps_first_start_time() {
        let mut process = Process::new(Pid::from_index(0), 0, 4, 0);
        process.execute(0, 1);
        process.execute(3, 1);
        assert_eq!(process.start(), Some(0));
        assert_eq!(process.remaining(), 2);
    }

    #[test]
    fn execute_caps_units_to_remaining_time() {
        let mut process = Process::new(Pid::from_index(0), 0, 3, 0);
        assert_eq!(process.execute(0, 10), ProcessState::Finished);
        assert_eq!(process.remaining(), 0);
        assert_eq!(process.completion(), Some(3));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut processes = table();
        processes[0].execute(0, 5);
        processes[1].execute(5, 2);

        reset_processes(&mut processes);
        let once = processes.clone();
        reset_processes(&mut processes);

        assert_eq!(once, processes);
        assert_eq!(processes, table());
    }
}
