//! Session persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Directory name used under the platform data directory.
const APP_DIR: &str = "sharedesk";

/// File name holding the bearer token.
const TOKEN_FILE: &str = "token";

/// Where the bearer token survives between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Explicit token file path. Defaults to `<data_dir>/sharedesk/token`.
    #[serde(default)]
    pub token_file: Option<String>,
}

impl SessionConfig {
    /// Resolve the token file path.
    pub fn token_path(&self) -> Result<PathBuf, AppError> {
        if let Some(path) = &self.token_file {
            return Ok(PathBuf::from(path));
        }

        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR).join(TOKEN_FILE))
            .ok_or_else(|| {
                AppError::configuration(
                    "Could not determine a data directory; set session.token_file",
                )
            })
    }
}
