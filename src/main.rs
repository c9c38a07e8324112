use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stepfit::{day_action_info, training_info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fitness tracker summaries from step packages", long_about = None)]
struct Cli {
    /// Body weight in kilograms
    #[arg(long, global = true, env = "STEPFIT_WEIGHT", default_value_t = 75.0)]
    weight: f64,

    /// Height in metres
    #[arg(long, global = true, env = "STEPFIT_HEIGHT", default_value_t = 1.75)]
    height: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarise a `<steps>,<duration>` package (reads stdin lines when omitted)
    Day {
        #[arg(allow_hyphen_values = true)]
        record: Option<String>,
    },
    /// Summarise a `<steps>,<activity>,<duration>` package (reads stdin lines when omitted)
    Training {
        #[arg(allow_hyphen_values = true)]
        record: Option<String>,
    },
}

/// Which pipeline a record is fed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pipeline {
    Day,
    Training,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stepfit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(weight = cli.weight, height = cli.height, "using physical profile");

    let (pipeline, record) = match cli.command {
        Command::Day { record } => (Pipeline::Day, record),
        Command::Training { record } => (Pipeline::Training, record),
    };

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let all_ok = match record {
        Some(record) => {
            run_record(pipeline, &record, cli.weight, cli.height, &mut out, &mut err)?
        }
        None => run_lines(
            pipeline,
            io::stdin().lock(),
            cli.weight,
            cli.height,
            &mut out,
            &mut err,
        )?,
    };
    out.flush().context("failed to flush stdout")?;

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Feed every non-blank line of `input` through `pipeline`.
///
/// Returns `false` if any record failed; processing always continues to the
/// end of the input.
fn run_lines(
    pipeline: Pipeline,
    input: impl BufRead,
    weight: f64,
    height: f64,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    let mut all_ok = true;
    for line in input.lines() {
        let line = line.context("failed to read record from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= run_record(pipeline, &line, weight, height, out, err)?;
    }
    Ok(all_ok)
}

fn run_record(
    pipeline: Pipeline,
    record: &str,
    weight: f64,
    height: f64,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    match pipeline {
        Pipeline::Day => {
            write!(out, "{}", day_action_info(record, weight, height))
                .context("failed to write report")?;
            Ok(true)
        }
        Pipeline::Training => match training_info(record, weight, height) {
            Ok(report) => {
                write!(out, "{report}").context("failed to write report")?;
                Ok(true)
            }
            Err(failure) => {
                writeln!(err, "error: {failure}").context("failed to write error")?;
                Ok(false)
            }
        },
    }
}
