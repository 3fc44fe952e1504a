//! Backend connection configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where the share backend lives and how to reach it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BackendConfig {
    /// Base URL of the REST backend, e.g. `http://127.0.0.1:8000`.
    #[validate(url)]
    pub base_url: String,
    /// Public base URL used to build share links shown to the admin.
    ///
    /// Defaults to `base_url` when unset.
    #[serde(default)]
    #[validate(url)]
    pub share_base_url: Option<String>,
    /// Accept self-signed TLS certificates.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl BackendConfig {
    /// Base URL used for derived share links, without a trailing slash.
    pub fn share_base(&self) -> &str {
        self.share_base_url
            .as_deref()
            .unwrap_or(&self.base_url)
            .trim_end_matches('/')
    }
}
