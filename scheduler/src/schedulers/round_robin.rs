use std::collections::VecDeque;
use std::num::NonZeroUsize;

use log::trace;

use super::idle_or_done;
use crate::SchedulingDecision::Run;
use crate::{Pid, Process, Scheduler, SchedulingDecision, StopReason, Ticks};

/// Round Robin with a fixed time quantum.
///
/// Each process enters the ready queue once, when it arrives. A process
/// preempted at the end of its quantum goes back to the tail, behind the
/// processes that arrived up to that instant.
pub struct RoundRobin {
    ready_queue: VecDeque<Pid>,
    enqueued: Vec<bool>,
    preempted: Option<Pid>,
    timeslice: NonZeroUsize,
}

impl RoundRobin {
    pub fn new(timeslice: NonZeroUsize) -> Self {
        RoundRobin {
            ready_queue: VecDeque::new(),
            enqueued: Vec::new(),
            preempted: None,
            timeslice,
        }
    }

    /// Queues the processes that arrived up to `now`, in PID order.
    fn admit(&mut self, processes: &[Process], now: Ticks) {
        if self.enqueued.len() < processes.len() {
            self.enqueued.resize(processes.len(), false);
        }

        for process in processes {
            let index = process.pid().index();
            if !self.enqueued[index] && process.is_ready(now) {
                trace!("t={now} admit {}", process.pid());
                self.ready_queue.push_back(process.pid());
                self.enqueued[index] = true;
            }
        }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn next(&mut self, processes: &[Process], now: Ticks) -> SchedulingDecision {
        self.admit(processes, now);
        if let Some(pid) = self.preempted.take() {
            self.ready_queue.push_back(pid);
        }

        while let Some(pid) = self.ready_queue.pop_front() {
            let remaining = processes[pid.index()].remaining();
            if let Some(timeslice) = NonZeroUsize::new(remaining.min(self.timeslice.get())) {
                return Run { pid, timeslice };
            }
        }

        idle_or_done(processes, now)
    }

    fn stop(&mut self, _processes: &[Process], _now: Ticks, pid: Pid, reason: StopReason) {
        if reason == StopReason::Expired {
            self.preempted = Some(pid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchedulingDecision::{Done, Idle};
    use crate::schedulers::tests::three_processes;
    use crate::ProcessSpec;

    fn quantum(units: usize) -> NonZeroUsize {
        NonZeroUsize::new(units).unwrap()
    }

    /// Plays the decisions against the table and returns (pid, units) slices.
    fn slices(scheduler: &mut RoundRobin, processes: &mut [Process]) -> Vec<(usize, usize)> {
        let mut now = 0;
        let mut slices = Vec::new();
        loop {
            match scheduler.next(processes, now) {
                Run { pid, timeslice } => {
                    let process = &mut processes[pid.index()];
                    process.execute(now, timeslice.get());
                    now += timeslice.get();
                    slices.push((pid.get(), timeslice.get()));
                    let reason = if process.is_finished() {
                        StopReason::Exited
                    } else {
                        StopReason::Expired
                    };
                    scheduler.stop(processes, now, pid, reason);
                }
                Idle(units) => {
                    now += units.get();
                    slices.push((0, units.get()));
                }
                Done => return slices,
            }
        }
    }

    #[test]
    fn arrivals_go_before_the_preempted_process() {
        let mut processes = three_processes();
        let mut scheduler = RoundRobin::new(quantum(2));

        assert_eq!(
            slices(&mut scheduler, &mut processes),
            vec![(1, 2), (2, 2), (3, 1), (1, 2), (2, 1), (1, 1)]
        );
    }

    #[test]
    fn last_slice_is_cut_to_remaining_time() {
        let mut processes = Process::table([ProcessSpec::new(0, 5, 0)]);
        let mut scheduler = RoundRobin::new(quantum(3));

        assert_eq!(slices(&mut scheduler, &mut processes), vec![(1, 3), (1, 2)]);
    }

    #[test]
    fn idles_until_first_arrival() {
        let mut processes = Process::table([ProcessSpec::new(2, 1, 0)]);
        let mut scheduler = RoundRobin::new(quantum(4));

        assert_eq!(
            slices(&mut scheduler, &mut processes),
            vec![(0, 2), (1, 1)]
        );
    }
}
