//! Palmdeck CLI: hand-gesture slide control and laser pointer.
//!
//! Usage:
//!   palmdeck run [OPTIONS]       Drive slides from a live frame stream
//!   palmdeck replay <PATH>       Classify a recorded frame stream offline
//!   palmdeck check               Check display and backend availability
//!   palmdeck config [--init]     Show or create the configuration file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use palmdeck_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "palmdeck",
    about = "Control presentations with hand gestures",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the standard location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the presentation from a live stream of tracker frames
    Run {
        /// JSONL frame stream, or `-` for standard input
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Log actions instead of sending them to the desktop
        #[arg(long)]
        dry_run: bool,

        /// Stamp frames on arrival instead of trusting tracker timestamps
        #[arg(long)]
        restamp: bool,

        /// Write per-frame outcomes to a JSONL file
        #[arg(long)]
        log_outcomes: Option<PathBuf>,
    },

    /// Classify a recorded frame stream without touching the desktop
    Replay {
        /// Path to the JSONL frame stream
        path: PathBuf,

        /// Print outcomes as JSONL instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check display server, screen size, and slide backend availability
    Check,

    /// Print the effective configuration
    Config {
        /// Write a default configuration file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { init: true } = cli.command {
        palmdeck_common::logging::init_default_logging();
        return commands::config::init(cli.config);
    }

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    palmdeck_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Run {
            input,
            dry_run,
            restamp,
            log_outcomes,
        } => commands::run::run(config, input, dry_run, restamp, log_outcomes).await,
        Commands::Replay { path, json } => commands::replay::run(&config, path, json),
        Commands::Check => commands::check::run(&config),
        Commands::Config { .. } => commands::config::show(&config, cli.config),
    }
}
