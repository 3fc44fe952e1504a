//! ShareDesk CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use sharedesk_core::config::{ConsoleConfig, LogFormat, LoggingConfig};

mod commands;
mod output;
mod terminal;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // A broken config must not stop `config validate` from reporting it.
    let logging = ConsoleConfig::load(&cli.config)
        .map(|config| config.logging)
        .unwrap_or_default();
    init_logging(&logging);

    if let Err(e) = cli.execute().await {
        eprintln!("Error: {}", e.message);
        std::process::exit(1);
    }
}

/// Initialize tracing; `RUST_LOG` overrides the configured level.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
