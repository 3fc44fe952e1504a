//! Authentication payloads.

use serde::{Deserialize, Serialize};

/// Successful response of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token.
    pub access_token: String,
    /// Token type reported by the backend (normally `"bearer"`).
    #[serde(default)]
    pub token_type: Option<String>,
}
