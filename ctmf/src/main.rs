//! `ctmf` command-line tool
//!
//! Filters a PNG with one of the median filters, or benchmarks all three
//! and prints the CSV report. See [`cli::USAGE`].

mod cli;

use cli::{Command, USAGE};
use ctmf::{BenchmarkReport, filter_image_file};
use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use std::process::ExitCode;

fn setup_logging() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str("info")?.log_to_stderr().start()
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Help => println!("{}", USAGE),
        Command::Filter {
            input,
            radius,
            method,
        } => {
            let output = filter_image_file(&input, radius, method)?;
            println!("{}", output.display());
        }
        Command::Bench {
            input,
            radii,
            iterations,
        } => {
            let image = ctmf::io::read_image(&input)?;
            log::info!(
                "benchmarking {} ({}x{}), {} iterations per radius",
                input.display(),
                image.width(),
                image.height(),
                iterations
            );
            let report = BenchmarkReport::run(&image, iterations, &radii)?;
            report.write_csv(std::io::stdout().lock())?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let _logger = match setup_logging() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("logger initialization failed: {}", e);
            None
        }
    };

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
