use serde::Serialize;

use super::{ProcessState, TimeStep};

/// A process as entered by the user, before scheduling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Process {
    id: String,       // Label, e.g. "P1"
    arrival: TimeStep, // Time unit at which the process becomes available
    burst: TimeStep,   // CPU time required, always > 0
}

impl Process {
    pub fn new(id: impl Into<String>, arrival: TimeStep, burst: TimeStep) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn arrival(&self) -> TimeStep {
        self.arrival
    }

    pub fn burst(&self) -> TimeStep {
        self.burst
    }

    /// Places the process on the CPU at `start` and fills in the derived times.
    ///
    /// `start` must not precede the arrival time.
    pub fn dispatch(self, start: TimeStep) -> ScheduledProcess {
        debug_assert!(start >= self.arrival, "{} dispatched before arrival", self.id);

        let finish = start + self.burst;
        let turnaround = finish - self.arrival;

        ScheduledProcess {
            waiting: turnaround - self.burst,
            id: self.id,
            arrival: self.arrival,
            burst: self.burst,
            start,
            finish,
            turnaround,
        }
    }
}

/// A process with its computed schedule. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledProcess {
    id: String,
    arrival: TimeStep,
    burst: TimeStep,
    start: TimeStep,      // First instant on the CPU
    finish: TimeStep,     // start + burst
    turnaround: TimeStep, // finish - arrival
    waiting: TimeStep,    // turnaround - burst
}

impl ScheduledProcess {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn arrival(&self) -> TimeStep {
        self.arrival
    }

    pub fn burst(&self) -> TimeStep {
        self.burst
    }

    pub fn start(&self) -> TimeStep {
        self.start
    }

    pub fn finish(&self) -> TimeStep {
        self.finish
    }

    pub fn turnaround(&self) -> TimeStep {
        self.turnaround
    }

    pub fn waiting(&self) -> TimeStep {
        self.waiting
    }

    /// Classifies the process at instant `t`.
    pub fn state_at(&self, t: TimeStep) -> ProcessState {
        if self.finish <= t {
            ProcessState::Completed
        } else if self.start <= t {
            ProcessState::Running
        } else if self.arrival <= t {
            ProcessState::Ready
        } else {
            ProcessState::NotArrived
        }
    }

    /// Whether `[start, finish)` intersects the other process's interval.
    pub fn overlaps(&self, other: &ScheduledProcess) -> bool {
        self.start < other.finish && other.start < self.finish
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_fills_derived_times() {
        let scheduled = Process::new("P2", 1, 3).dispatch(5);

        assert_eq!(scheduled.start(), 5);
        assert_eq!(scheduled.finish(), 8);
        assert_eq!(scheduled.turnaround(), 7);
        assert_eq!(scheduled.waiting(), 4);
        assert_eq!(scheduled.waiting(), scheduled.start() - scheduled.arrival());
    }

    #[test]
    fn test_state_at_walks_through_lifecycle() {
        let p = Process::new("P1", 2, 3).dispatch(4);

        assert_eq!(p.state_at(0), ProcessState::NotArrived);
        assert_eq!(p.state_at(2), ProcessState::Ready);
        assert_eq!(p.state_at(3), ProcessState::Ready);
        assert_eq!(p.state_at(4), ProcessState::Running);
        assert_eq!(p.state_at(6), ProcessState::Running);
        assert_eq!(p.state_at(7), ProcessState::Completed);
        assert_eq!(p.state_at(100), ProcessState::Completed);
    }

    #[test]
    fn test_overlaps_is_half_open() {
        let a = Process::new("P1", 0, 5).dispatch(0);
        let b = Process::new("P2", 1, 3).dispatch(5);
        let c = Process::new("P3", 1, 3).dispatch(4);

        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }
}
