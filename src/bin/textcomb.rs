//! Command-line interface for textcomb
//!
//! Usage:
//!   textcomb html [PATH]   - Convert `*bold*` markers to `<strong>` tags
//!   textcomb split [PATH]  - Print plain and delimited runs, one per line
//!
//! Input is read from PATH, or from stdin when PATH is absent or `-`.
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use clap::{Arg, Command};
use std::io::{self, Read, Write};
use std::process::ExitCode;
use textcomb::{TextcombError, html};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let path_arg = || {
        Arg::new("path")
            .help("Input file, or - for stdin")
            .index(1)
    };

    let matches = Command::new("textcomb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and convert *bold* marked text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("html")
                .about("Convert *bold* markers to <strong> tags")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("split")
                .about("Split text into plain and *delimited* runs")
                .arg(path_arg()),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("html", sub)) => handle_html_command(sub.get_one::<String>("path")),
        Some(("split", sub)) => handle_split_command(sub.get_one::<String>("path")),
        _ => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: Option<&String>) -> Result<String, TextcombError> {
    match path.map(String::as_str) {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => {
            tracing::info!("Reading input from {}", path);
            Ok(std::fs::read_to_string(path)?)
        }
    }
}

/// Handle the html command
fn handle_html_command(path: Option<&String>) -> Result<(), TextcombError> {
    let input = read_input(path)?;
    let output = html::HtmlWriter::new(input).output();

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Handle the split command
fn handle_split_command(path: Option<&String>) -> Result<(), TextcombError> {
    let input = read_input(path)?;
    let outcome = html::split(&input);

    let mut stdout = io::stdout().lock();
    for fragment in outcome.fragments().unwrap_or_default() {
        writeln!(stdout, "{}", fragment)?;
    }
    stdout.flush()?;

    if !outcome.remainder().is_empty() {
        tracing::warn!(
            remaining = outcome.remainder().len(),
            "input was not fully split"
        );
        eprintln!("unparsed: {}", outcome.remainder());
    }
    Ok(())
}
