use super::{pick_ready, single_unit};
use crate::{Process, Scheduler, SchedulingDecision, Ticks};

/// Priority scheduling, preemptive. Lower value means higher priority.
pub struct PreemptivePriority;

impl Scheduler for PreemptivePriority {
    fn name(&self) -> &'static str {
        "Priority (Preemptive)"
    }

    fn next(&mut self, processes: &[Process], now: Ticks) -> SchedulingDecision {
        single_unit(pick_ready(processes, now, Process::priority), processes, now)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::schedulers::tests::three_processes;
    use crate::SchedulingDecision::{Done, Idle, Run};
    use crate::{Pid, ProcessSpec};

    #[test]
    fn higher_priority_arrival_preempts() {
        let mut processes = three_processes();
        processes[0].execute(0, 1);

        assert_eq!(
            PreemptivePriority.next(&processes, 1),
            Run {
                pid: Pid::from_index(1),
                timeslice: NonZeroUsize::MIN,
            }
        );
    }

    #[test]
    fn idles_until_first_arrival() {
        let processes = Process::table([ProcessSpec::new(3, 1, 0)]);
        assert_eq!(
            PreemptivePriority.next(&processes, 0),
            Idle(NonZeroUsize::new(3).unwrap())
        );
    }

    #[test]
    fn done_once_everything_finished() {
        let mut processes = Process::table([ProcessSpec::new(0, 1, 0)]);
        processes[0].execute(0, 1);
        assert_eq!(PreemptivePriority.next(&processes, 1), Done);
    }
}
