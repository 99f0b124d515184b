//! Command-line parsing for the `ctmf` binary

use ctmf_filter::{FilterError, MedianMethod};
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Usage:
  ctmf filter <image.png> [--radius N] [--method naive|huang|constant]
  ctmf bench <image.png> [--radii A..=B | a,b,c] [--iters N]

filter writes <image>_r<N>.png next to the input (defaults: radius 1, constant).
bench prints a CSV of average run times per radius (defaults: radii 1..=10, 55 iterations).
Set RUST_LOG to change the log level (default: info).";

const DEFAULT_RADIUS: u32 = 1;
const DEFAULT_RADII: std::ops::RangeInclusive<u32> = 1..=10;
const DEFAULT_ITERATIONS: u32 = 55;

/// Errors from argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: &'static str, value: String },

    #[error(transparent)]
    Method(#[from] FilterError),
}

/// A parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter {
        input: PathBuf,
        radius: u32,
        method: MedianMethod,
    },
    Bench {
        input: PathBuf,
        radii: Vec<u32>,
        iterations: u32,
    },
    Help,
}

fn parse_u32(option: &'static str, value: &str) -> Result<u32, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidValue {
        option,
        value: value.to_string(),
    })
}

/// Parse `A..=B`, `A..B` or a comma-separated list of radii.
pub fn parse_radii(value: &str) -> Result<Vec<u32>, CliError> {
    let invalid = || CliError::InvalidValue {
        option: "--radii",
        value: value.to_string(),
    };
    let radii: Vec<u32> = if let Some((lo, hi)) = value.split_once("..=") {
        (parse_u32("--radii", lo)?..=parse_u32("--radii", hi)?).collect()
    } else if let Some((lo, hi)) = value.split_once("..") {
        (parse_u32("--radii", lo)?..parse_u32("--radii", hi)?).collect()
    } else {
        value
            .split(',')
            .map(|v| parse_u32("--radii", v))
            .collect::<Result<_, _>>()?
    };
    if radii.is_empty() {
        return Err(invalid());
    }
    Ok(radii)
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = match args.next() {
        None => return Ok(Command::Help),
        Some(c) => c,
    };
    if matches!(command.as_str(), "-h" | "--help" | "help") {
        return Ok(Command::Help);
    }
    if command != "filter" && command != "bench" {
        return Err(CliError::UnknownCommand(command));
    }

    let mut input = None;
    let mut radius = DEFAULT_RADIUS;
    let mut method = MedianMethod::default();
    let mut radii: Vec<u32> = DEFAULT_RADII.collect();
    let mut iterations = DEFAULT_ITERATIONS;

    while let Some(arg) = args.next() {
        let mut value = |option: &'static str| args.next().ok_or(CliError::MissingArgument(option));
        match (command.as_str(), arg.as_str()) {
            (_, "-h" | "--help") => return Ok(Command::Help),
            ("filter", "-r" | "--radius") => radius = parse_u32("--radius", &value("--radius")?)?,
            ("filter", "-m" | "--method") => method = value("--method")?.parse()?,
            ("bench", "--radii") => radii = parse_radii(&value("--radii")?)?,
            ("bench", "-n" | "--iters") => {
                iterations = parse_u32("--iters", &value("--iters")?)?;
                if iterations == 0 {
                    return Err(CliError::InvalidValue {
                        option: "--iters",
                        value: "0".into(),
                    });
                }
            }
            (_, a) if a.starts_with('-') => return Err(CliError::UnknownOption(arg.clone())),
            _ if input.is_none() => input = Some(PathBuf::from(&arg)),
            _ => return Err(CliError::UnknownOption(arg.clone())),
        }
    }

    let input = input.ok_or(CliError::MissingArgument("<image>"))?;
    Ok(if command == "filter" {
        Command::Filter {
            input,
            radius,
            method,
        }
    } else {
        Command::Bench {
            input,
            radii,
            iterations,
        }
    })
}
