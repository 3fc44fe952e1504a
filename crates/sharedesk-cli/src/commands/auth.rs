//! Login, logout and session status.

use clap::Args;
use serde::Serialize;

use sharedesk_core::error::AppError;

use super::SessionOptions;
use crate::output::{self, OutputFormat};
use crate::terminal::TerminalView;

/// Arguments for `login`
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username (will prompt if not provided)
    #[arg(short, long)]
    pub username: Option<String>,
    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Session status report
#[derive(Debug, Serialize)]
struct StatusReport {
    /// Backend API base URL
    backend: String,
    /// Public share link base
    share_base: String,
    /// Token file, or "memory" for ephemeral runs
    token_store: String,
    /// Whether a token is present
    logged_in: bool,
}

/// Execute `login`
pub async fn login(
    args: &LoginArgs,
    options: &SessionOptions<'_>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let username = match &args.username {
        Some(u) => u.clone(),
        None => dialoguer::Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
    };

    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
    };

    let mut console = super::build_console(options, TerminalView::new(format)).await?;
    console.login(&username, &password).await?;

    let count = console.table().rows.len();
    output::print_success(&format!(
        "Logged in as '{}' ({} share{} listed)",
        username.trim(),
        count,
        if count == 1 { "" } else { "s" }
    ));
    Ok(())
}

/// Execute `logout`
pub async fn logout(options: &SessionOptions<'_>, _format: OutputFormat) -> Result<(), AppError> {
    let mut console = super::build_console(options, TerminalView::new(OutputFormat::Table)).await?;
    if !console.session().is_authenticated() {
        output::print_warning("Not logged in");
        return Ok(());
    }
    console.logout().await;
    output::print_success("Logged out");
    Ok(())
}

/// Execute `status`
pub async fn status(options: &SessionOptions<'_>, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(options.config_path)?;
    let store = super::token_store(&config, options)?;
    let logged_in = store.load().await?.is_some();

    let report = StatusReport {
        backend: config.backend.base_url.clone(),
        share_base: config.backend.share_base().to_string(),
        token_store: if options.ephemeral {
            "memory".to_string()
        } else {
            config.session.token_path()?.display().to_string()
        },
        logged_in,
    };

    match format {
        OutputFormat::Json => output::print_item(&report, format),
        OutputFormat::Table | OutputFormat::Html => {
            output::print_kv("Backend", &report.backend);
            output::print_kv("Share links", &report.share_base);
            output::print_kv("Token store", &report.token_store);
            output::print_kv(
                "Session",
                if report.logged_in { "logged in" } else { "not logged in" },
            );
        }
    }
    Ok(())
}
