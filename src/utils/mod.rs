pub mod constants;
pub mod errors;
pub mod logging;
pub mod stats;

pub use constants::{ExitStatus, OutputFormat};
pub use errors::{RowError, SimError, SimResult};
pub use stats::Statistics;
