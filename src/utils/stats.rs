use serde::Serialize;

use crate::{ScheduledProcess, TimeStep};

/// Aggregate figures over a finished schedule.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub process_count: usize,
    pub average_waiting: f64,
    pub average_turnaround: f64,
    pub total_burst: TimeStep,
    pub makespan: TimeStep,       // Latest finish time
    pub idle_time: TimeStep,      // CPU time in [0, makespan) with nothing running
    pub cpu_utilisation: f64,     // total_burst / makespan
    pub throughput: f64,          // Processes completed per time unit
}

impl Statistics {
    /// Returns `None` for an empty schedule.
    pub fn from_schedule(processes: &[ScheduledProcess]) -> Option<Self> {
        let makespan = processes.iter().map(|p| p.finish()).max()?;
        let count = processes.len();

        // Per-process times can each approach MAX_TIME, so their sums are taken in f64
        let total_waiting: f64 = processes.iter().map(|p| p.waiting() as f64).sum();
        let total_turnaround: f64 = processes.iter().map(|p| p.turnaround() as f64).sum();
        let total_burst: TimeStep = processes.iter().map(|p| p.burst()).sum();

        Some(Self {
            process_count: count,
            average_waiting: total_waiting / count as f64,
            average_turnaround: total_turnaround / count as f64,
            total_burst,
            makespan,
            idle_time: makespan - total_burst,
            cpu_utilisation: total_burst as f64 / makespan as f64,
            throughput: count as f64 / makespan as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Process;

    #[test]
    fn test_statistics_with_idle_gap() {
        let schedule = vec![
            Process::new("P1", 0, 2).dispatch(0),
            Process::new("P2", 1, 2).dispatch(2),
            Process::new("P3", 6, 2).dispatch(6),
        ];
        let stats = Statistics::from_schedule(&schedule).unwrap();

        assert_eq!(stats.process_count, 3);
        assert_eq!(stats.makespan, 8);
        assert_eq!(stats.total_burst, 6);
        assert_eq!(stats.idle_time, 2);
        assert!((stats.average_waiting - 1.0 / 3.0).abs() < 1e-9);
        assert!((stats.average_turnaround - 7.0 / 3.0).abs() < 1e-9);
        assert!((stats.cpu_utilisation - 0.75).abs() < 1e-9);
        assert!((stats.throughput - 3.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_schedule_has_no_statistics() {
        assert_eq!(Statistics::from_schedule(&[]), None);
    }
}
