//! Wayback-Save main entry point
//!
//! This is the command-line interface for submitting pages to the Internet
//! Archive and checking for existing snapshots.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wayback_save::config::{load_config, Config};
use wayback_save::{ArchiveClient, AvailabilityResult, SaveResult};

/// Wayback-Save: archive pages with the Wayback Machine
///
/// Submits pages to the Internet Archive's Save Page Now service and waits
/// for the capture to finish, or checks whether a page already has a snapshot.
#[derive(Parser, Debug)]
#[command(name = "wayback-save")]
#[command(version)]
#[command(about = "Archive pages with the Wayback Machine", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults target the public archive)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Capture a page now and wait for the snapshot
    Save {
        /// URL of the page to capture
        url: String,
    },

    /// Check whether a page already has a snapshot
    Check {
        /// URL of the page to look up
        url: String,

        /// Bypass HTTP caches (use right after saving)
        #[arg(long)]
        fresh: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    let client = ArchiveClient::new(&config).context("failed to build HTTP client")?;

    match cli.command {
        Command::Save { url } => {
            let result = client
                .save_page(&url)
                .await
                .with_context(|| format!("saving {} failed", url))?;
            print_save_result(&result, cli.json)?;
        }
        Command::Check { url, fresh } => {
            let checked = if fresh {
                client.check_availability_uncached(&url).await
            } else {
                client.check_availability(&url).await
            };
            let result = checked.with_context(|| format!("checking {} failed", url))?;
            print_availability(&result, cli.json)?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wayback_save=info,warn"),
            1 => EnvFilter::new("wayback_save=debug,info"),
            2 => EnvFilter::new("wayback_save=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_save_result(result: &SaveResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
        return Ok(());
    }

    match result {
        SaveResult::Ok { snapshot, .. } => {
            println!("✓ Saved at {} UTC", snapshot.datetime_iso());
            println!("  {}", snapshot.url());
        }
        SaveResult::Postponed { .. } => {
            println!("Capture postponed; the archive will save the page later");
        }
        SaveResult::TryAgainLater { .. } => {
            println!("The archive refused the capture; try again later");
        }
    }

    if let Some(message) = result.message() {
        println!("  Archive says: {}", message.trim());
    }

    Ok(())
}

fn print_availability(result: &AvailabilityResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
        return Ok(());
    }

    match result {
        AvailabilityResult::Archived { snapshot } => {
            println!("✓ Last archived at {} UTC", snapshot.datetime_iso());
            println!("  {}", snapshot.url());
        }
        AvailabilityResult::NotArchived => println!("Not archived yet"),
    }

    Ok(())
}
