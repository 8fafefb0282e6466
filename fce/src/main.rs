//! # fce
//!
//! A CLI tool for looking up Faculty Course Evaluation results.
//!
//! ## Overview
//!
//! fce is built on top of fcelib. It reads every `*.csv` export under the
//! `data` directory, picks out one course, and prints its average weekly
//! hours and rating over the most recent offerings, followed by a table of
//! the entries used.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize the six most recent offerings of 15-213
//! fce -n 15213
//!
//! # Only the last three, ignoring summer sessions
//! fce -n 15213 -t 3 -e
//!
//! # Show every matching entry in the table
//! fce -n 15213 -v
//!
//! # Read exports from elsewhere, print JSON
//! fce -n 15213 -d ~/fce-exports --output json
//! ```
//!
//! ## Exit codes
//!
//! - `0`: report printed
//! - `1`: the exports could not be read or hold malformed numbers
//! - `2`: bad arguments, `-h`, or no data for the course

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use fcelib::{load_records, run_query, FceError, LoaderConfig, QueryOptions, DEFAULT_TOP};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "FCE_LOG";

/// One-line usage, printed on argument errors
const USAGE: &str = "fce -n <coursenumber>";

/// Exit status for usage errors, help, and missing data
const EXIT_USAGE: u8 = 2;

/// Build the clap Command structure
///
/// Help is handled by hand so that `-h` can exit with the usage status.
fn build_command() -> Command {
    Command::new("fce")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Look up FCE averages for a course")
        .disable_help_flag(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Print help"),
        )
        .arg(
            Arg::new("courseno")
                .short('n')
                .long("courseno")
                .value_name("COURSENUMBER")
                .help("Course number to look up"),
        )
        .arg(
            Arg::new("top")
                .short('t')
                .long("top")
                .value_parser(value_parser!(usize))
                .help("Number of recent entries in the summary (default 6)"),
        )
        .arg(
            Arg::new("excludesummer")
                .short('e')
                .long("excludesummer")
                .action(ArgAction::SetTrue)
                .help("Exclude summer semesters"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Show every matching entry in the table"),
        )
        .arg(
            Arg::new("data-dir")
                .short('d')
                .long("data-dir")
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the CSV exports (default ./data)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
}

fn print_help() {
    println!("{USAGE}");
    println!();
    println!("Flags:");
    println!("-e exclude summer semester");
    println!("-t no. of results in summary (default={DEFAULT_TOP})");
    println!("-v verbose");
    println!("-d directory holding the CSV exports (default=./data)");
    println!("-o output format, text or json (default=text)");
    println!("-h help");
}

/// Send diagnostics to stderr so stdout carries only the report
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Build lookup options from matches
fn build_options(matches: &ArgMatches, courseno: &str) -> QueryOptions {
    QueryOptions::new(courseno)
        .exclude_summer(matches.get_flag("excludesummer"))
        .verbose(matches.get_flag("verbose"))
        .top(matches.get_one::<usize>("top").copied().unwrap_or(DEFAULT_TOP))
}

/// Build loader config from matches, defaulting to `./data`
fn build_loader(matches: &ArgMatches) -> anyhow::Result<LoaderConfig> {
    match matches.get_one::<PathBuf>("data-dir") {
        Some(dir) => Ok(LoaderConfig::new().data_dir(dir)),
        None => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            Ok(LoaderConfig::from_working_dir(cwd))
        }
    }
}

/// Run the lookup and render the report
fn run(matches: &ArgMatches, courseno: &str) -> anyhow::Result<String> {
    let loader = build_loader(matches)?;
    let options = build_options(matches, courseno);
    debug!(?loader, ?options, "starting lookup");

    let records = load_records(&loader)
        .with_context(|| format!("failed to load records from {}", loader.data_dir.display()))?;
    let report = run_query(&records, &options)?;

    let json = matches
        .get_one::<String>("output")
        .is_some_and(|mode| mode == "json");
    if json {
        Ok(serde_json::to_string_pretty(&report)? + "\n")
    } else {
        Ok(report.render_text())
    }
}

fn main() -> ExitCode {
    init_tracing();

    let matches = match build_command().try_get_matches_from(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            print!("{e}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprint!("{e}");
            println!("{USAGE}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    if matches.get_flag("help") {
        print_help();
        return ExitCode::from(EXIT_USAGE);
    }

    // A missing course number is a usage error, not a runtime failure
    let Some(courseno) = matches.get_one::<String>("courseno") else {
        println!("{USAGE}");
        return ExitCode::from(EXIT_USAGE);
    };

    match run(&matches, courseno) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => match e.downcast_ref::<FceError>() {
            Some(FceError::NoData) => {
                println!("{}", FceError::NoData);
                ExitCode::from(EXIT_USAGE)
            }
            _ => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}
