mod frame;
pub mod gantt;
mod process;
pub mod process_set;
pub mod scheduler;
pub mod trace;

pub use frame::{ProcessState, TraceFrame};
pub use gantt::{gantt, GanttSegment};
pub use process::{Process, ScheduledProcess};
pub use process_set::{ProcessSet, RejectedRow};
pub use trace::{Frames, TraceCursor};

pub type TimeStep = usize;
