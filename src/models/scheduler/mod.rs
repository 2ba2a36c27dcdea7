pub mod scheduler;
pub mod fcfs;

pub use scheduler::Scheduler;
pub use fcfs::FirstComeFirstServed;
