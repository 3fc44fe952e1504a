//! Persistence seam for the session token.

use async_trait::async_trait;

use crate::result::AppResult;

/// Client-local storage for the bearer token.
///
/// There is exactly one slot: saving replaces the previous token.
#[async_trait]
pub trait TokenStore: Send + Sync + std::fmt::Debug + 'static {
    /// Read the stored token, if any.
    async fn load(&self) -> AppResult<Option<String>>;

    /// Persist a token, replacing any previous one.
    async fn save(&self, token: &str) -> AppResult<()>;

    /// Remove the stored token. Clearing an empty store is not an error.
    async fn clear(&self) -> AppResult<()>;
}
