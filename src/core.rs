use serde::Serialize;
use tracing::info;

use crate::scheduler::{FirstComeFirstServed, Scheduler};
use crate::{
    gantt, Frames, GanttSegment, Process, ProcessSet, ScheduledProcess, SimError, SimResult,
    Statistics, TraceFrame,
};

/// Computes the FCFS schedule of `processes`.
///
/// Input must already be validated (positive bursts). An empty list gives
/// an empty schedule.
pub fn schedule(processes: &[Process]) -> Vec<ScheduledProcess> {
    FirstComeFirstServed.schedule(processes)
}

/// One frame per time unit from 0 to the latest finish, inclusive.
///
/// Expects the output of [`schedule`]. An empty schedule gives an empty trace.
pub fn build_trace(processes: &[ScheduledProcess]) -> Vec<TraceFrame> {
    Frames::new(processes).collect()
}

/// Everything one run produces, handed back to the caller for presentation.
///
/// Frames are not stored; [`Simulation::frames`] synthesizes them on demand.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Simulation {
    pub algorithm: &'static str,
    pub processes: Vec<ScheduledProcess>,
    pub gantt: Vec<GanttSegment>,
    pub statistics: Statistics,
}

impl Simulation {
    /// Lazy view over the frames [`build_trace`] would return.
    pub fn frames(&self) -> Frames<'_> {
        Frames::new(&self.processes)
    }
}

/// Runs the whole pipeline with the given discipline.
///
/// An empty process set is reported as [`SimError::NothingToSimulate`] so
/// the caller can tell the user instead of showing an empty animation.
pub fn simulate_with<S: Scheduler>(scheduler: &S, process_set: &ProcessSet) -> SimResult<Simulation> {
    if process_set.is_empty() {
        return Err(SimError::NothingToSimulate);
    }

    let processes = scheduler.schedule(process_set.get_processes());
    let statistics = Statistics::from_schedule(&processes).ok_or(SimError::NothingToSimulate)?;
    info!(
        algorithm = scheduler.name(),
        processes = processes.len(),
        makespan = statistics.makespan,
        frames = statistics.makespan + 1,
        average_waiting = statistics.average_waiting,
        "simulation complete"
    );

    Ok(Simulation {
        algorithm: scheduler.name(),
        gantt: gantt(&processes),
        processes,
        statistics,
    })
}

pub fn simulate(process_set: &ProcessSet) -> SimResult<Simulation> {
    simulate_with(&FirstComeFirstServed, process_set)
}
