mod cli;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use clap::Parser;
use clap::error::ErrorKind;
use mutflow::engine::progress::ProgressReporter;
use mutflow::workflows::pipeline::{self, RunSummary};
use std::path::Path;
use tracing::{debug, info};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            // Missing or malformed arguments keep their own exit status,
            // distinct from every pipeline failure.
            let _ = e.print();
            std::process::exit(CliError::Argument(e.to_string()).exit_code());
        }
    };

    if let Err(e) = run_app(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_app(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;
    info!("mutflow v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    // Pre-flight checks, in order, before any external process starts.
    if !cli.scripts_dir.is_dir() {
        return Err(CliError::ScriptsDirMissing {
            path: cli.scripts_dir.clone(),
        });
    }
    std::fs::create_dir_all(&cli.output_dir).map_err(|source| CliError::OutputDir {
        path: cli.output_dir.clone(),
        source,
    })?;

    let config = config::build_config(&cli)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let summary = pipeline::run(&config, &reporter)?;
    drop(reporter);

    report_summary(&config.output_dir, &summary)?;
    Ok(())
}

fn report_summary(output_dir: &Path, summary: &RunSummary) -> Result<()> {
    println!(
        "✓ Pipeline finished: {} processed, {} skipped, {} failed.",
        summary.processed.len(),
        summary.skipped.len(),
        summary.failed.len()
    );
    if !summary.failed.is_empty() {
        println!("  Failed stems: {}", summary.failed.join(", "));
    }

    let mut entries: Vec<String> = output_dir
        .read_dir()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();

    println!("Output directory {}:", output_dir.display());
    for name in entries {
        println!("  {}", name);
    }
    Ok(())
}
