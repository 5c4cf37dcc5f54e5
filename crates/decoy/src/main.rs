//! Decoy CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "decoy")]
#[command(version)]
#[command(about = "Inspect and resolve stub-server content declarations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a stub file, reporting each declared content source
    Check {
        /// Stub configuration file (JSON)
        file: PathBuf,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load file-backed content and print every resolved resource
    Resolve {
        /// Stub configuration file (JSON)
        file: PathBuf,

        /// Directory file references are resolved against
        /// (defaults to the stub file's directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "decoy=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file, json } => commands::check::execute(&file, json),
        Commands::Resolve { file, root } => commands::resolve::execute(&file, root.as_deref()),
    }
}
