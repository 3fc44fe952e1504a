//! Typed backend endpoints.

use serde_json::Value;

use sharedesk_core::result::AppResult;
use sharedesk_core::traits::HttpMethod;
use sharedesk_core::types::{
    CreateShareRequest, CreatedShare, EditShareRequest, LoginResponse, ShareId, ShareRecord,
    VideoTitle,
};

use crate::gateway::ApiGateway;
use crate::session::SessionManager;

/// `POST /login` (form-encoded).
pub const LOGIN_PATH: &str = "/login";

/// `GET /shared_videos`.
pub const LIST_PATH: &str = "/shared_videos";

/// `POST /share`.
pub const CREATE_PATH: &str = "/share";

/// Fallback shown when the backend rejects a login without a reason.
const LOGIN_FAILED: &str = "Login failed";

/// `PUT /edit_share/{id}`.
pub fn edit_path(id: &ShareId) -> String {
    format!("/edit_share/{id}")
}

/// `DELETE /delete_share/{id}`.
pub fn delete_path(id: &ShareId) -> String {
    format!("/delete_share/{id}")
}

/// `GET /get_video_title/{id}`.
pub fn title_path(stash_video_id: i64) -> String {
    format!("/get_video_title/{stash_video_id}")
}

impl ApiGateway {
    /// Exchange credentials for a bearer token.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        let value = self
            .submit_form(
                LOGIN_PATH,
                &[("username", username), ("password", password)],
                LOGIN_FAILED,
            )
            .await?
            .unwrap_or(Value::Null);
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch every share record.
    pub async fn list_shares(&self, session: &mut SessionManager) -> AppResult<Vec<ShareRecord>> {
        self.request_json(session, LIST_PATH, HttpMethod::Get, None, true)
            .await
    }

    /// Create a share.
    pub async fn create_share(
        &self,
        session: &mut SessionManager,
        request: &CreateShareRequest,
    ) -> AppResult<CreatedShare> {
        let body = serde_json::to_value(request)?;
        self.request_json(session, CREATE_PATH, HttpMethod::Post, Some(body), true)
            .await
    }

    /// Update a share's name and validity.
    pub async fn edit_share(
        &self,
        session: &mut SessionManager,
        id: &ShareId,
        request: &EditShareRequest,
    ) -> AppResult<()> {
        let body = serde_json::to_value(request)?;
        self.request(session, &edit_path(id), HttpMethod::Put, Some(body), true)
            .await
            .map(|_| ())
    }

    /// Delete a share.
    pub async fn delete_share(&self, session: &mut SessionManager, id: &ShareId) -> AppResult<()> {
        self.request(session, &delete_path(id), HttpMethod::Delete, None, true)
            .await
            .map(|_| ())
    }

    /// Look up a video title in the catalog.
    pub async fn video_title(
        &self,
        session: &mut SessionManager,
        stash_video_id: i64,
    ) -> AppResult<VideoTitle> {
        let value = self
            .request(
                session,
                &title_path(stash_video_id),
                HttpMethod::Get,
                None,
                true,
            )
            .await?;
        match value {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(VideoTitle::default()),
        }
    }
}
