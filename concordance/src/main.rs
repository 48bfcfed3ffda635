//! # concordance
//!
//! A CLI tool that converts a plain-text list of names into a
//! concordance file for a word processor's index-building feature.
//!
//! ## Overview
//!
//! concordance is built on top of concordancelib. It reads an input
//! file with one `last_name, first_name[, middle_name...]` record per
//! line and writes one concordance line per qualifying record to
//! stdout:
//!
//! ```text
//! first_name [middle_name ]last_name~original record
//! ```
//!
//! Diagnostics go to stderr, so redirecting stdout captures a clean
//! concordance file.
//!
//! ## Usage
//!
//! ```bash
//! # Convert an index list and capture the concordance file
//! concordance names.txt > concordance.txt
//! ```

mod diagnostics;
mod errors;

use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};
use concordancelib::{input, ConcordanceError, Converter};
use tracing::{error, info};

use errors::{AppError, EXIT_INIT, EXIT_USAGE};

const AFTER_HELP: &str = "\
The input file has one record per line:

    last_name, first_name[, middle_name...]

Each qualifying record produces one line on stdout:

    first_name [middle_name ]last_name~original record

Lines with fewer than two comma-separated parts are skipped. Redirect
stdout to capture the concordance file; diagnostics only appear on
stderr.";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("concordance")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a 'last_name, first_name' index list into a concordance file")
        .after_help(AFTER_HELP)
        .arg(
            Arg::new("input")
                .value_name("INPUT_FILE")
                .required(true)
                .help("Pathname of the input file"),
        )
}

/// Echo the received parameters so the user can see what went wrong
/// with the command-line syntax.
fn report_arguments(args: &[String]) {
    info!("the number of parameters is {}", args.len().saturating_sub(1));
    for (n, arg) in args.iter().enumerate().skip(1) {
        info!("parameter {n} is {arg}");
    }
}

fn run(matches: &ArgMatches) -> Result<(), AppError> {
    let exe = std::env::current_exe().map_err(AppError::ExecutablePath)?;
    info!("executable pathname: {}", exe.display());

    let input_path = matches
        .get_one::<String>("input")
        .expect("INPUT_FILE is required");

    let reader = input::open(input_path)?;
    info!("given input: {input_path}");

    let converter = Converter::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // One line is fully converted and written before the next is read.
    for line in reader.lines() {
        let line = line.map_err(ConcordanceError::Io)?;
        if let Some(entry) = converter.convert_line(&line) {
            writeln!(out, "{entry}").map_err(AppError::OutputWrite)?;
        }
    }

    out.flush().map_err(AppError::OutputWrite)
}

fn main() -> ExitCode {
    if let Err(e) = diagnostics::init() {
        eprintln!("failed to install diagnostics: {e}");
        return ExitCode::from(EXIT_INIT);
    }

    let args: Vec<String> = std::env::args().collect();
    let matches = match build_command().try_get_matches_from(&args) {
        Ok(matches) => matches,
        Err(e) => {
            use clap::error::ErrorKind;

            // An explicit help or version request is not a usage error.
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = e.print();
                return ExitCode::SUCCESS;
            }

            report_arguments(&args);
            let _ = e.print();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
