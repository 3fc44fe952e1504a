//! CLI command definitions and dispatch.

pub mod auth;
pub mod config;
pub mod share;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use sharedesk_client::session::{FileTokenStore, MemoryTokenStore};
use sharedesk_client::{AdminConsole, ApiGateway, ReqwestTransport, SessionManager};
use sharedesk_core::config::ConsoleConfig;
use sharedesk_core::error::AppError;
use sharedesk_core::traits::TokenStore;

use crate::output::OutputFormat;
use crate::terminal::TerminalView;

/// ShareDesk: admin console for time-limited video share links
#[derive(Debug, Parser)]
#[command(name = "sharedesk-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Keep the session in memory only; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and store the session token
    Login(auth::LoginArgs),
    /// Forget the stored session token
    Logout,
    /// Show backend and session status
    Status,
    /// Share link management
    Share(share::ShareArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let session = SessionOptions {
            config_path: &self.config,
            ephemeral: self.ephemeral,
        };
        match &self.command {
            Commands::Login(args) => auth::login(args, &session, self.format).await,
            Commands::Logout => auth::logout(&session, self.format).await,
            Commands::Status => auth::status(&session, self.format).await,
            Commands::Share(args) => share::execute(args, &session, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Where the console gets its configuration and token from.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions<'a> {
    /// Configuration file path.
    pub config_path: &'a str,
    /// Use an in-memory token store.
    pub ephemeral: bool,
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<ConsoleConfig, AppError> {
    ConsoleConfig::load(config_path)
}

/// Helper: token store selected by the options
pub fn token_store(
    config: &ConsoleConfig,
    options: &SessionOptions<'_>,
) -> Result<Arc<dyn TokenStore>, AppError> {
    if options.ephemeral {
        return Ok(Arc::new(MemoryTokenStore::new()));
    }
    Ok(Arc::new(FileTokenStore::new(config.session.token_path()?)))
}

/// Helper: wire a console over the configured backend with a restored session
pub async fn build_console(
    options: &SessionOptions<'_>,
    view: TerminalView,
) -> Result<AdminConsole<TerminalView>, AppError> {
    let config = load_config(options.config_path)?;
    let transport = Arc::new(ReqwestTransport::new(&config.backend)?);
    let session = SessionManager::restore(token_store(&config, options)?).await?;

    let mut console = AdminConsole::new(
        ApiGateway::new(transport),
        session,
        view,
        config.backend.share_base(),
    );
    console.resume();
    Ok(console)
}
