use std::fmt;

use serde::Serialize;

use super::{ScheduledProcess, TimeStep};

/// Where a process stands at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    NotArrived,
    Ready,
    Running,
    Completed,
}

/// Snapshot of the CPU at one time unit.
///
/// `running_process` occupies the CPU during `[time, time + 1)`. The ready
/// queue keeps scheduled order, which is arrival order with ties in input
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceFrame {
    time: TimeStep,
    running_process: Option<String>,
    ready_queue: Vec<String>,
    completed_processes: Vec<String>,
}

impl TraceFrame {
    /// Builds the frame for instant `t`.
    ///
    /// # Arguments
    /// * `t` - The simulated instant.
    /// * `processes` - Scheduler output, sorted by start.
    pub fn at(t: TimeStep, processes: &[ScheduledProcess]) -> Self {
        let mut frame = TraceFrame {
            time: t,
            ..Default::default()
        };

        for process in processes {
            match process.state_at(t) {
                ProcessState::Completed => frame.completed_processes.push(process.id().to_string()),
                ProcessState::Running => {
                    debug_assert!(
                        frame.running_process.is_none(),
                        "two processes running at t={t}"
                    );
                    frame.running_process = Some(process.id().to_string());
                }
                ProcessState::Ready => frame.ready_queue.push(process.id().to_string()),
                ProcessState::NotArrived => {}
            }
        }

        frame
    }

    pub fn time(&self) -> TimeStep {
        self.time
    }

    pub fn running_process(&self) -> Option<&str> {
        self.running_process.as_deref()
    }

    pub fn ready_queue(&self) -> &[String] {
        &self.ready_queue
    }

    pub fn completed_processes(&self) -> &[String] {
        &self.completed_processes
    }

    pub fn is_idle(&self) -> bool {
        self.running_process.is_none()
    }

    /// Looks up a process by id in this frame. Unknown ids read as not arrived.
    pub fn state_of(&self, id: &str) -> ProcessState {
        if self.running_process() == Some(id) {
            ProcessState::Running
        } else if self.ready_queue.iter().any(|p| p == id) {
            ProcessState::Ready
        } else if self.completed_processes.iter().any(|p| p == id) {
            ProcessState::Completed
        } else {
            ProcessState::NotArrived
        }
    }
}

impl fmt::Display for TraceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:<3} running={:<4} ready=[{}] completed=[{}]",
            self.time,
            self.running_process().unwrap_or("idle"),
            self.ready_queue.join(", "),
            self.completed_processes.join(", "),
        )
    }
}
