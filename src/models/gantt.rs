use std::fmt;

use serde::Serialize;

use super::{ScheduledProcess, TimeStep};

/// One bar of the Gantt chart: `[start, end)` spent on a process, or idle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GanttSegment {
    label: Option<String>, // None when the CPU is idle
    start: TimeStep,
    end: TimeStep,
}

impl GanttSegment {
    pub fn busy(label: impl Into<String>, start: TimeStep, end: TimeStep) -> Self {
        Self {
            label: Some(label.into()),
            start,
            end,
        }
    }

    pub fn idle(start: TimeStep, end: TimeStep) -> Self {
        Self {
            label: None,
            start,
            end,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn start(&self) -> TimeStep {
        self.start
    }

    pub fn end(&self) -> TimeStep {
        self.end
    }

    pub fn duration(&self) -> TimeStep {
        self.end - self.start
    }

    pub fn is_idle(&self) -> bool {
        self.label.is_none()
    }
}

impl fmt::Display for GanttSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}) {}", self.start, self.end, self.label().unwrap_or("idle"))
    }
}

/// Interval view of a schedule, covering `[0, makespan)` without gaps.
///
/// Idle stretches before a late arrival become their own segment.
pub fn gantt(processes: &[ScheduledProcess]) -> Vec<GanttSegment> {
    let mut segments = Vec::with_capacity(processes.len() * 2);
    let mut cursor: TimeStep = 0;

    for process in processes {
        if process.start() > cursor {
            segments.push(GanttSegment::idle(cursor, process.start()));
        }
        segments.push(GanttSegment::busy(process.id(), process.start(), process.finish()));
        cursor = process.finish();
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Process;

    #[test]
    fn test_back_to_back_processes() {
        let processes = vec![
            Process::new("P1", 0, 5).dispatch(0),
            Process::new("P2", 1, 3).dispatch(5),
        ];

        assert_eq!(
            gantt(&processes),
            vec![GanttSegment::busy("P1", 0, 5), GanttSegment::busy("P2", 5, 8)]
        );
    }

    #[test]
    fn test_idle_gaps_are_segments() {
        let processes = vec![
            Process::new("P1", 2, 2).dispatch(2),
            Process::new("P2", 6, 1).dispatch(6),
        ];
        let segments = gantt(&processes);

        assert_eq!(
            segments,
            vec![
                GanttSegment::idle(0, 2),
                GanttSegment::busy("P1", 2, 4),
                GanttSegment::idle(4, 6),
                GanttSegment::busy("P2", 6, 7),
            ]
        );
        assert_eq!(segments.iter().map(|s| s.duration()).sum::<usize>(), 7);
        assert_eq!(segments[1].to_string(), "[2, 4) P1");
        assert_eq!(segments[2].to_string(), "[4, 6) idle");
    }

    #[test]
    fn test_empty_schedule() {
        assert!(gantt(&[]).is_empty());
    }
}
