//! Command-line front end for the organizer store.
//!
//! # Responsibility
//! - Resolve storage paths and start logging.
//! - Open the SQLite backing store, construct and load the organizer store
//!   once, then hand it to a single command.

mod commands;
mod records;

use clap::Parser;
use commands::Command;
use log::{error, info};
use organizer_core::{
    default_log_level, init_logging, OrganizerStore, SqliteKvStore, StorageConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Student organizer: tasks, habits, courses and study tracking.
#[derive(Parser, Debug)]
#[command(name = "organizer")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory holding the database and logs
    #[arg(long, env = "ORGANIZER_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, env = "ORGANIZER_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = StorageConfig::resolve(cli.data_dir).map_err(|err| err.to_string())?;
    let level = cli
        .log_level
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, &config.log_dir())?;

    let backend = SqliteKvStore::open(config.db_path()).map_err(|err| {
        error!("event=cli_start module=cli status=error error_code=db_open_failed error={err}");
        err.to_string()
    })?;
    let mut store = OrganizerStore::new(backend);
    let report = store.load();
    for collection in &report.failed {
        eprintln!(
            "warning: stored {} could not be read; starting empty",
            collection.storage_key()
        );
    }

    info!(
        "event=cli_command module=cli status=start command={}",
        cli.command.name()
    );
    let result = commands::execute(&mut store, cli.command);
    if let Err(err) = &result {
        error!("event=cli_command module=cli status=error error={err}");
    }
    result
}
