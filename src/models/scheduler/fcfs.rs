use tracing::debug;

use super::scheduler::Scheduler;
use crate::{Process, ScheduledProcess, TimeStep};

/// First-Come-First-Served: processes run to completion in arrival order,
/// ties going to whichever was listed first.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstComeFirstServed;

impl Scheduler for FirstComeFirstServed {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> Vec<ScheduledProcess> {
        let mut queue = processes.to_vec();
        // sort_by_key is stable, which keeps input order among equal arrivals
        queue.sort_by_key(|p| p.arrival());

        let mut current_time: TimeStep = 0;
        queue
            .into_iter()
            .map(|process| {
                // The CPU idles until the next arrival if it is ahead of it
                let start = current_time.max(process.arrival());
                let scheduled = process.dispatch(start);
                current_time = scheduled.finish();

                debug!(
                    id = scheduled.id(),
                    arrival = scheduled.arrival(),
                    start = scheduled.start(),
                    finish = scheduled.finish(),
                    waiting = scheduled.waiting(),
                    "dispatched"
                );
                scheduled
            })
            .collect()
    }
}
