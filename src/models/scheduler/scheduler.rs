use crate::{Process, ScheduledProcess};

/// A non-preemptive single-CPU scheduling discipline.
pub trait Scheduler {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Orders `processes` and assigns start and finish times.
    ///
    /// The result is sorted by start time and no two `[start, finish)`
    /// intervals overlap. An empty input yields an empty schedule.
    fn schedule(&self, processes: &[Process]) -> Vec<ScheduledProcess>;
}
