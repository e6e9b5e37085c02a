//! # Batchsort CLI
//!
//! Serves the batch sorting API, or runs a payload through it offline.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

use batchsort_core::StrategyKind;

mod commands;

#[derive(Parser)]
#[command(name = "batchsort")]
#[command(version)]
#[command(about = "Sorts batches of integer sequences over HTTP", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },

    /// Sort a payload from a file or stdin and print the response
    Sort {
        /// Strategy to use (sequential, concurrent)
        #[arg(short, long, default_value = "sequential")]
        strategy: StrategyKind,

        /// Payload file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Display version and build info
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let telemetry_config =
        batchsort_telemetry::TelemetryConfig::new("batchsort").with_log_level(&cli.log_level);

    let telemetry_config = if cli.json_logs {
        telemetry_config.with_json_logs()
    } else {
        telemetry_config
    };

    batchsort_telemetry::init_logging(&telemetry_config);

    match cli.command {
        Commands::Serve { host, port } => {
            commands::serve(&host, port).await?;
        },

        Commands::Sort { strategy, input } => {
            commands::sort(strategy, input).await?;
        },

        Commands::Version => {
            commands::version();
        },
    }

    Ok(())
}
