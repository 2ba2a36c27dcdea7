use std::fmt;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use tracing::{error, warn};

use fcfs_sim::logging::init_logging;
use fcfs_sim::{
    simulate, ExitStatus, GanttSegment, OutputFormat, ProcessSet, RejectedRow, ScheduledProcess,
    SimError, SimResult, Simulation, Statistics, TraceFrame,
};

/// Command line settings after parsing.
#[derive(Debug, PartialEq)]
pub struct Options {
    pub process_file: String,
    pub format: OutputFormat,
    pub show_trace: bool,
    pub show_gantt: bool,
    pub quiet: bool,
}

impl Options {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let format = matches
            .get_one::<String>("format")
            .and_then(|name| OutputFormat::from_name(name))
            .unwrap_or_default();

        Self {
            process_file: matches
                .get_one::<String>("process_file")
                .cloned()
                .unwrap_or_default(),
            format,
            show_trace: matches.get_flag("trace"),
            show_gantt: matches.get_flag("gantt"),
            quiet: matches.get_flag("quiet"),
        }
    }
}

/// Reads a process file and returns the valid processes with the rows that were dropped.
pub fn read_process_file(file_path: &str) -> SimResult<(ProcessSet, Vec<RejectedRow>)> {
    ProcessSet::from_path(file_path)
}

pub fn build_cli_command() -> Command {
    Command::new("FCFS Simulator")
        .version("0.1.0")
        .about("Simulates First-Come-First-Served CPU scheduling and prints its execution trace")
        .arg(Arg::new("process_file")
            .required(true)
            .help("CSV file with one `arrival, burst` pair per line"))

        .arg(Arg::new("format")
            .short('f')
            .long("format")
            .help("Output format")
            .value_parser(["table", "json"])
            .default_value("table"))

        .arg(Arg::new("trace")
            .short('t')
            .long("trace")
            .action(ArgAction::SetTrue)
            .help("Print one line per time unit"))

        .arg(Arg::new("gantt")
            .short('g')
            .long("gantt")
            .action(ArgAction::SetTrue)
            .help("Print the Gantt chart segments"))

        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .help("Only log errors"))
}

/// JSON document written by `--format json`.
#[derive(Serialize)]
struct Report<'a> {
    algorithm: &'a str,
    processes: &'a [ScheduledProcess],
    statistics: &'a Statistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    gantt: Option<&'a [GanttSegment]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Vec<TraceFrame>>,
}

pub fn render_json(simulation: &Simulation, options: &Options) -> SimResult<String> {
    let report = Report {
        algorithm: simulation.algorithm,
        processes: &simulation.processes,
        statistics: &simulation.statistics,
        gantt: options.show_gantt.then_some(simulation.gantt.as_slice()),
        trace: options.show_trace.then(|| simulation.frames().collect()),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Plain-text report written by `--format table`.
struct TableReport<'a> {
    simulation: &'a Simulation,
    options: &'a Options,
}

impl fmt::Display for TableReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simulation = self.simulation;

        writeln!(
            f,
            "{:<6}{:>9}{:>7}{:>7}{:>8}{:>12}{:>9}",
            "ID", "Arrival", "Burst", "Start", "Finish", "Turnaround", "Waiting"
        )?;
        for p in &simulation.processes {
            writeln!(
                f,
                "{:<6}{:>9}{:>7}{:>7}{:>8}{:>12}{:>9}",
                p.id(),
                p.arrival(),
                p.burst(),
                p.start(),
                p.finish(),
                p.turnaround(),
                p.waiting()
            )?;
        }

        let stats = &simulation.statistics;
        writeln!(f)?;
        writeln!(f, "Average waiting time:    {:.2}", stats.average_waiting)?;
        writeln!(f, "Average turnaround time: {:.2}", stats.average_turnaround)?;
        writeln!(
            f,
            "Makespan: {} (idle {}), CPU utilisation {:.1}%",
            stats.makespan,
            stats.idle_time,
            stats.cpu_utilisation * 100.0
        )?;

        if self.options.show_gantt {
            writeln!(f)?;
            writeln!(f, "Gantt chart:")?;
            for segment in &simulation.gantt {
                writeln!(f, "  {segment}")?;
            }
        }

        if self.options.show_trace {
            writeln!(f)?;
            writeln!(f, "Execution trace:")?;
            for frame in simulation.frames() {
                writeln!(f, "  {frame}")?;
            }
        }

        Ok(())
    }
}

pub fn render_table(simulation: &Simulation, options: &Options) -> String {
    TableReport { simulation, options }.to_string()
}

fn run(options: &Options) -> Result<String, (ExitStatus, SimError)> {
    let (process_set, rejected) =
        read_process_file(&options.process_file).map_err(|e| (ExitStatus::InputError, e))?;

    if !rejected.is_empty() {
        warn!(count = rejected.len(), "some rows were skipped");
    }

    let simulation = simulate(&process_set).map_err(|e| (ExitStatus::NothingToSimulate, e))?;

    match options.format {
        OutputFormat::Table => Ok(render_table(&simulation, options)),
        OutputFormat::Json => render_json(&simulation, options).map_err(|e| (ExitStatus::OutputError, e)),
    }
}

fn main() -> ExitCode {
    // cargo run <process_file> [-f table|json] [-t] [-g] [-q]
    // example : cargo run processes.csv -t -g
    let matches: ArgMatches = build_cli_command().get_matches();
    let options = Options::from_matches(&matches);

    init_logging(options.quiet);

    let status = match run(&options) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitStatus::Ok
        }
        Err((status, e)) => {
            error!(file = %options.process_file, "{e}");
            eprintln!("Error: {e}");
            status
        }
    };

    status.into()
}
