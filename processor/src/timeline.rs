use std::fmt::{self, Display};

use serde::Serialize;

use scheduler::{Pid, Ticks};

/// Who held the CPU during a segment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Label {
    Process(Pid),
    Idle,
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Process(pid) => write!(f, "P{pid}"),
            Label::Idle => write!(f, "Idle"),
        }
    }
}

/// A contiguous stretch of simulated time given to one label.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub label: Label,
    pub start: Ticks,
    pub duration: Ticks,
}

impl Segment {
    pub fn end(&self) -> Ticks {
        self.start + self.duration
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}] {}", self.start, self.end(), self.label)
    }
}

/// The execution timeline (Gantt sequence) of a simulation.
///
/// Segments are stored in the order they were recorded, one per
/// scheduling decision, and cover `[0, now)` without gaps. Consecutive
/// idle stretches share one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    segments: Vec<Segment>,
    now: Ticks,
}

impl Timeline {
    pub fn new() -> Self {
        Timeline::default()
    }

    /// Appends a segment of `duration` units at the end of the timeline.
    ///
    /// Empty segments are not recorded, and idle time following an idle
    /// segment extends it.
    pub fn record(&mut self, label: Label, duration: Ticks) {
        if duration == 0 {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if label == Label::Idle && last.label == Label::Idle => {
                last.duration += duration
            }
            _ => self.segments.push(Segment {
                label,
                start: self.now,
                duration,
            }),
        }
        self.now += duration;
    }

    /// The end of the last segment, which is the total simulated time.
    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Start of the first segment of `pid`.
    pub fn start_of(&self, pid: Pid) -> Option<Ticks> {
        self.segments
            .iter()
            .find(|segment| segment.label == Label::Process(pid))
            .map(|segment| segment.start)
    }

    /// End of the last segment of `pid`.
    pub fn completion_of(&self, pid: Pid) -> Option<Ticks> {
        self.segments
            .iter()
            .rev()
            .find(|segment| segment.label == Label::Process(pid))
            .map(Segment::end)
    }

    pub fn idle_time(&self) -> Ticks {
        self.segments
            .iter()
            .filter(|segment| segment.label == Label::Idle)
            .map(|segment| segment.duration)
            .sum()
    }

    pub fn busy_time(&self) -> Ticks {
        self.now - self.idle_time()
    }

    /// One label per time unit.
    pub fn units(&self) -> impl Iterator<Item = Label> + '_ {
        self.segments
            .iter()
            .flat_map(|segment| std::iter::repeat(segment.label).take(segment.duration))
    }

    /// The segments with adjacent runs of the same label merged.
    pub fn coalesced(&self) -> Vec<Segment> {
        let mut merged: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match merged.last_mut() {
                Some(last) if last.label == segment.label => last.duration += segment.duration,
                _ => merged.push(*segment),
            }
        }
        merged
    }

    /// Number of times the CPU went from one process to a different one.
    ///
    /// Idle stretches between two slices of the same process do not count.
    pub fn context_switches(&self) -> usize {
        let running: Vec<Label> = self
            .segments
            .iter()
            .map(|segment| segment.label)
            .filter(|label| *label != Label::Idle)
            .collect();
        running.windows(2).filter(|pair| pair[0] != pair[1]).count()
    }
}

impl Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (unit, label) in self.units().enumerate() {
            if unit > 0 {
                write!(f, " ")?;
            }
            write!(f, "{label}")?;
        }
        Ok(())
    }
}
