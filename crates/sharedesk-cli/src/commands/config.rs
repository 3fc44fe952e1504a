//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use sharedesk_core::config::ConsoleConfig;
use sharedesk_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Template written by `config generate`.
const DEFAULT_CONFIG: &str = include_str!("../../../../config/default.toml");

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                print_summary(&config)?;
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e.message));
                return Err(e);
            }
        },
        ConfigCommand::Generate { output: out_path } => {
            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::storage(format!("Failed to create dir: {}", e)))?;
            }

            tokio::fs::write(out_path, DEFAULT_CONFIG)
                .await
                .map_err(|e| AppError::storage(format!("Failed to write config: {}", e)))?;

            output::print_success(&format!("Default config written to '{}'", out_path));
        }
    }

    Ok(())
}

fn print_summary(config: &ConsoleConfig) -> Result<(), AppError> {
    output::print_kv("Backend", &config.backend.base_url);
    output::print_kv("Share links", config.backend.share_base());
    output::print_kv("Token file", &config.session.token_path()?.display().to_string());
    output::print_kv(
        "Logging",
        &format!("{} ({})", config.logging.level, config.logging.format),
    );
    if config.backend.accept_invalid_certs {
        output::print_warning("TLS certificate verification is disabled");
    }
    Ok(())
}
