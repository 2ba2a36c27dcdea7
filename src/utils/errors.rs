use std::io;

use thiserror::Error;

use crate::TimeStep;

/// Failures of the layers around the scheduling core: reading input and
/// writing reports. Scheduling and trace building themselves cannot fail.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed process file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Nothing to simulate: no valid process in the input")]
    NothingToSimulate,

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;

/// Why an input row was left out of the process set.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("arrival `{0}` is not an integer")]
    ArrivalNotInteger(String),

    #[error("burst `{0}` is not an integer")]
    BurstNotInteger(String),

    #[error("arrival {0} is negative")]
    NegativeArrival(i64),

    #[error("burst {0} must be positive")]
    NonPositiveBurst(i64),

    #[error("row has {0} fields, expected `arrival, burst`")]
    FieldCount(usize),

    #[error("schedule would run past time {0}")]
    PastMaxTime(TimeStep),
}
