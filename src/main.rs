//! ShareDesk interactive console.
//!
//! Loads configuration, restores the saved session and runs the menu loop.

mod menu;
mod view;

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use sharedesk_client::session::FileTokenStore;
use sharedesk_client::{AdminConsole, ApiGateway, ReqwestTransport, SessionManager};
use sharedesk_core::config::{ConsoleConfig, LogFormat};
use sharedesk_core::error::AppError;

use crate::view::MenuView;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e.message);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Console error: {}", e);
        eprintln!("Error: {}", e.message);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<ConsoleConfig, AppError> {
    let config_path =
        std::env::var("SHAREDESK_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    ConsoleConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &ConsoleConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    // Logs go to stderr so they never interleave with the menu on stdout.
    match config.logging.format {
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
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Wire the console and hand it to the menu loop
async fn run(config: ConsoleConfig) -> Result<(), AppError> {
    tracing::info!("Starting ShareDesk v{}", env!("CARGO_PKG_VERSION"));

    let transport = Arc::new(ReqwestTransport::new(&config.backend)?);
    let token_path = config.session.token_path()?;
    tracing::debug!(path = %token_path.display(), "Using token file");
    let session = SessionManager::restore(Arc::new(FileTokenStore::new(token_path))).await?;

    let mut console = AdminConsole::new(
        ApiGateway::new(transport),
        session,
        MenuView::default(),
        config.backend.share_base(),
    );
    console.start().await;

    menu::run(&mut console).await
}
