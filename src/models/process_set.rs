use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::warn;

use super::{Process, TimeStep};
use crate::constants::{LABEL_PREFIX, MAX_TIME};
use crate::errors::{RowError, SimResult};

/// An input row that did not make it into the process set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedRow {
    pub row: usize,    // 1-based position in the input
    pub label: String, // Label the row would have had
    pub reason: RowError,
}

/// The validated processes of one simulation run, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    /// Label given to the row at 1-based position `row`.
    pub fn label_for(row: usize) -> String {
        format!("{LABEL_PREFIX}{row}")
    }

    /// Validates `(arrival, burst)` text pairs and labels them by position.
    ///
    /// Rows with a non-integer field, a negative arrival or a burst that is
    /// not positive are skipped. So is a row that would push the schedule
    /// past [`MAX_TIME`]. Skipped rows keep their position, so the surviving
    /// labels still match the input rows.
    pub fn from_rows<I, S>(rows: I) -> (Self, Vec<RejectedRow>)
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        Self::collect_rows(rows.into_iter().map(Ok))
    }

    fn collect_rows<I, S>(rows: I) -> (Self, Vec<RejectedRow>)
    where
        I: IntoIterator<Item = Result<(S, S), RowError>>,
        S: AsRef<str>,
    {
        let mut processes = Vec::new();
        let mut rejected = Vec::new();

        // FCFS never finishes later than the latest arrival plus every burst
        let mut max_arrival: TimeStep = 0;
        let mut total_burst: TimeStep = 0;

        for (index, fields) in rows.into_iter().enumerate() {
            let row = index + 1;
            let label = Self::label_for(row);

            let parsed = fields
                .and_then(|(arrival, burst)| parse_row(arrival.as_ref(), burst.as_ref()))
                .and_then(|(arrival, burst)| {
                    max_arrival
                        .max(arrival)
                        .checked_add(total_burst)
                        .and_then(|horizon| horizon.checked_add(burst))
                        .filter(|&horizon| horizon <= MAX_TIME)
                        .map(|_| (arrival, burst))
                        .ok_or(RowError::PastMaxTime(MAX_TIME))
                });

            match parsed {
                Ok((arrival, burst)) => {
                    max_arrival = max_arrival.max(arrival);
                    total_burst += burst;
                    processes.push(Process::new(label, arrival, burst));
                }
                Err(reason) => {
                    warn!(row, %label, %reason, "skipping input row");
                    rejected.push(RejectedRow { row, label, reason });
                }
            }
        }

        (Self::new(processes), rejected)
    }

    /// Reads `arrival, burst` records from CSV without a header row.
    ///
    /// Lines starting with `#` are ignored. A record without exactly two
    /// fields is rejected like any other invalid row; only an unreadable
    /// stream is an error.
    pub fn from_reader<R: io::Read>(reader: R) -> SimResult<(Self, Vec<RejectedRow>)> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(match (record.len(), record.get(0), record.get(1)) {
                (2, Some(arrival), Some(burst)) => Ok((arrival.to_string(), burst.to_string())),
                (fields, _, _) => Err(RowError::FieldCount(fields)),
            });
        }

        Ok(Self::collect_rows(rows))
    }

    pub fn from_path(path: impl AsRef<Path>) -> SimResult<(Self, Vec<RejectedRow>)> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(io::BufReader::new(file))
    }

    pub fn get_processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn push(&mut self, process: Process) {
        self.processes.push(process);
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn total_burst(&self) -> TimeStep {
        self.processes.iter().map(|p| p.burst()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }
}

fn parse_row(arrival: &str, burst: &str) -> Result<(TimeStep, TimeStep), RowError> {
    let arrival_value: i64 = arrival
        .trim()
        .parse()
        .map_err(|_| RowError::ArrivalNotInteger(arrival.to_string()))?;
    let burst_value: i64 = burst
        .trim()
        .parse()
        .map_err(|_| RowError::BurstNotInteger(burst.to_string()))?;

    if arrival_value < 0 {
        return Err(RowError::NegativeArrival(arrival_value));
    }
    if burst_value <= 0 {
        return Err(RowError::NonPositiveBurst(burst_value));
    }

    let arrival = TimeStep::try_from(arrival_value).map_err(|_| RowError::PastMaxTime(MAX_TIME))?;
    let burst = TimeStep::try_from(burst_value).map_err(|_| RowError::PastMaxTime(MAX_TIME))?;

    Ok((arrival, burst))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_labelled_by_position() {
        let (set, rejected) = ProcessSet::from_rows([("0", "5"), ("1", "3"), ("4", "2")]);

        assert!(rejected.is_empty());
        assert_eq!(set.len(), 3);
        assert_eq!(set.get_processes()[0], Process::new("P1", 0, 5));
        assert_eq!(set.get_processes()[2], Process::new("P3", 4, 2));
        assert_eq!(set.total_burst(), 10);
    }

    #[test]
    fn test_invalid_rows_are_skipped() {
        let (set, rejected) = ProcessSet::from_rows([
            ("0", "5"),
            ("x", "3"),
            ("2", ""),
            ("3", "0"),
            ("-1", "2"),
            ("4", "-7"),
            (" 6 ", " 1 "),
        ]);

        let labels: Vec<_> = set.iter().map(|p| p.id()).collect();
        assert_eq!(labels, ["P1", "P7"]);

        let reasons: Vec<_> = rejected.iter().map(|r| (r.row, r.reason.clone())).collect();
        assert_eq!(
            reasons,
            vec![
                (2, RowError::ArrivalNotInteger("x".to_string())),
                (3, RowError::BurstNotInteger("".to_string())),
                (4, RowError::NonPositiveBurst(0)),
                (5, RowError::NegativeArrival(-1)),
                (6, RowError::NonPositiveBurst(-7)),
            ]
        );
        assert_eq!(rejected[0].label, "P2");
    }

    #[test]
    fn test_from_reader() {
        let input = "# arrival, burst\n0, 5\n1,3\nabc, 2\n7\n4, 1, 9\n";
        let (set, rejected) = ProcessSet::from_reader(input.as_bytes()).expect("readable input");

        assert_eq!(set.get_processes(), [Process::new("P1", 0, 5), Process::new("P2", 1, 3)]);

        let reasons: Vec<_> = rejected.iter().map(|r| (r.label.as_str(), r.reason.clone())).collect();
        assert_eq!(
            reasons,
            vec![
                ("P3", RowError::ArrivalNotInteger("abc".to_string())),
                ("P4", RowError::FieldCount(1)),
                ("P5", RowError::FieldCount(3)),
            ]
        );
    }

    #[test]
    fn test_from_reader_only_invalid_rows() {
        let (set, rejected) = ProcessSet::from_reader("1, 0\n2, -3\n".as_bytes()).unwrap();

        assert!(set.is_empty());
        assert_eq!(rejected.len(), 2);
    }

    #[test]
    fn test_rows_past_max_time_are_skipped() {
        let huge = i64::MAX.to_string();
        let (set, rejected) = ProcessSet::from_rows([
            (huge.as_str(), huge.as_str()),
            (huge.as_str(), huge.as_str()),
            (huge.as_str(), huge.as_str()),
        ]);

        assert!(set.is_empty());
        assert_eq!(rejected.len(), 3);
        assert!(rejected.iter().all(|r| r.reason == RowError::PastMaxTime(MAX_TIME)));
    }

    #[test]
    fn test_cumulative_bursts_are_bounded() {
        let half = (MAX_TIME / 2).to_string();
        let (set, rejected) = ProcessSet::from_rows([
            ("0", half.as_str()),
            ("0", half.as_str()),
            ("0", "1"),
        ]);

        let labels: Vec<_> = set.iter().map(|p| p.id()).collect();
        assert_eq!(labels, ["P1", "P2"]);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].row, 3);
        assert_eq!(rejected[0].reason, RowError::PastMaxTime(MAX_TIME));

        let simulation = crate::simulate(&set).expect("bounded set simulates");
        assert_eq!(simulation.statistics.makespan, MAX_TIME);
        assert_eq!(simulation.frames().len(), MAX_TIME + 1);
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = ProcessSet::from_path("definitely/not/here.csv");
        assert!(matches!(result, Err(crate::errors::SimError::Io(_))));
    }
}
