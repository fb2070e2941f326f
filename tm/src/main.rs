//! taskman - single-page task manager for the terminal
//!
//! CLI entry point: loads config and the optional seed file, then
//! either launches the TUI or prints statistics.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use taskman::cli::{Cli, Command, OutputFormat};
use taskman::config::Config;
use taskman::{seed, tui};
use todostore::{TaskStats, TaskStore};

fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskman")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Log to a file - stdout/stderr belong to the TUI
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("taskman.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    info!(
        "taskman loaded config: page-size={}, max-task-len={}",
        config.ui.page_size, config.ui.max_task_len
    );

    // Session store, optionally filled from the seed file
    let mut store = TaskStore::new();
    if let Some(path) = cli.seed.as_ref() {
        let entries = seed::load_seed(path)?;
        seed::populate(&mut store, entries, config.ui.max_task_len);
        info!("Seeded {} tasks from {}", store.len(), path.display());
    }

    match cli.command {
        None | Some(Command::Tui) => tui::run(store, config.ui).await,
        Some(Command::Stats { format }) => cmd_stats(&store, format),
    }
}

/// Print statistics for the (seeded) store without entering the TUI
fn cmd_stats(store: &TaskStore, format: OutputFormat) -> Result<()> {
    let stats = TaskStats::from_tasks(store.tasks());

    match format {
        OutputFormat::Text => {
            println!("Total:     {}", stats.total);
            println!("Completed: {}", stats.completed);
            println!("Remaining: {}", stats.remaining);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
