//! The owned session object.
//!
//! A [`SessionManager`] is held by the console and lent to the gateway for
//! each request, so the token has exactly one owner and no locking.

use std::sync::Arc;

use tracing::{info, warn};

use sharedesk_core::error::AppError;
use sharedesk_core::result::AppResult;
use sharedesk_core::traits::TokenStore;

/// Holds the bearer token and mirrors it into a [`TokenStore`].
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Token for the current session, if logged in.
    token: Option<String>,
    /// Client-local persistence.
    store: Arc<dyn TokenStore>,
}

impl SessionManager {
    /// Create an empty session over `store` without reading it.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { token: None, store }
    }

    /// Create a session and restore any token persisted by a previous run.
    pub async fn restore(store: Arc<dyn TokenStore>) -> AppResult<Self> {
        let token = store.load().await?;
        Ok(Self { token, store })
    }

    /// The current token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Token for a protected call; fails locally when logged out.
    pub fn require_token(&self) -> AppResult<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| AppError::authentication("Not logged in. Please log in first."))
    }

    /// Store a freshly issued token.
    pub async fn establish(&mut self, token: String) -> AppResult<()> {
        self.store.save(&token).await?;
        self.token = Some(token);
        info!("Session established");
        Ok(())
    }

    /// Drop the token from memory and from the store.
    ///
    /// The in-memory token is always dropped, even if the store fails.
    pub async fn clear(&mut self) -> AppResult<()> {
        self.token = None;
        self.store.clear().await.inspect_err(|e| {
            warn!(error = %e, "Failed to clear persisted token");
        })
    }
}
