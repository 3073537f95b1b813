use std::fs::{self, OpenOptions};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*};

mod args;
mod auth;
mod cfg;
mod error;
mod grid;
mod job;
mod sheets;

use args::Args;
use cfg::Settings;

const BANNER: &str = "gsheets / Google Sheets values";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&settings.log_path(), args.debug) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    info!("{}", BANNER);
    info!("Starting");
    debug!("Settings: {:?}", settings);

    match run(&args, &settings).await {
        Ok(output) => {
            println!("{}", output);
            info!("Finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            info!("Caught error on execution: {:#}", e);
            info!("Finished with errors");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args, settings: &Settings) -> Result<String> {
    let secrets_file = settings.secrets_file()?;
    let request = job::prepare(args.operation())?;

    let hub = auth::create_sheets_hub(secrets_file).await?;
    job::execute(&request, &hub).await
}

/// Logs to `sheets.log` (everything with `--debug`, errors only otherwise) and mirrors
/// errors to stderr.
fn init_logging(log_path: &Path, debug: bool) -> Result<()> {
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::ERROR
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_filter(level),
        )
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .with_filter(LevelFilter::ERROR),
        )
        .try_init()?;

    Ok(())
}
