//! Console configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod backend;
pub mod logging;
pub mod session;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::backend::BackendConfig;
pub use self::logging::{LogFormat, LoggingConfig};
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`SHAREDESK__BACKEND__BASE_URL`).
const ENV_PREFIX: &str = "SHAREDESK";

/// Root console configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConsoleConfig {
    /// Backend connection settings.
    #[validate(nested)]
    pub backend: BackendConfig,
    /// Token persistence settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConsoleConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default.toml`, the file at `path`, and environment
    /// variables prefixed with `SHAREDESK__`. Both files are optional; a
    /// missing `backend.base_url` is reported as a configuration error.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        parsed.validate().map_err(|e| {
            AppError::configuration(format!("Invalid configuration: {e}"))
        })?;

        Ok(parsed)
    }

    /// Parse configuration from a TOML string (used by `config validate`).
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let parsed: Self = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        parsed.validate().map_err(|e| {
            AppError::configuration(format!("Invalid configuration: {e}"))
        })?;

        Ok(parsed)
    }
}
