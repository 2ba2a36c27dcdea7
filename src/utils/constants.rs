use std::process::ExitCode;

use crate::TimeStep;

/// Latest instant a schedule may reach. Input that would finish later is
/// rejected at ingestion, so `finish + 1` stays in range even on 32-bit targets.
pub const MAX_TIME: TimeStep = (u32::MAX - 1) as TimeStep;

/// Prefix of the labels handed out to input rows (`P1`, `P2`, ...).
pub const LABEL_PREFIX: &str = "P";

/// Environment switch for JSON log lines.
pub const LOG_JSON_ENV: &str = "FCFS_LOG_JSON";

/// Process exit codes of the command line front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Ok = 0,
    NothingToSimulate = 1,
    InputError = 5,
    OutputError = 6,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitStatus::Ok.code(), 0);
        assert_eq!(ExitStatus::NothingToSimulate.code(), 1);
        assert_eq!(ExitStatus::InputError.code(), 5);
        assert_eq!(ExitStatus::OutputError.code(), 6);
    }

    #[test]
    fn test_max_time_leaves_room_for_the_last_frame() {
        assert!(MAX_TIME.checked_add(1).is_some());
        assert_eq!(MAX_TIME % 2, 0);
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::from_name("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("xml"), None);
    }
}
