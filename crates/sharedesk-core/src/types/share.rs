//! Share record DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::id::ShareId;

/// Days a new share stays valid when the form leaves the field blank.
pub const DEFAULT_DAYS_VALID: i64 = 7;

/// A share as listed by `GET /shared_videos`.
///
/// The console never mutates these; every refresh replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRecord {
    /// Backend-issued share identifier.
    pub share_id: ShareId,
    /// Display name of the shared video.
    pub video_name: String,
    /// Identifier of the source video in Stash.
    pub stash_video_id: i64,
    /// When the link stops working.
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub expires_at: DateTime<Utc>,
    /// Number of times the link was opened.
    #[serde(default)]
    pub hits: i64,
    /// Share URL, when the backend includes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
}

impl ShareRecord {
    /// Absolute share URL, derived from `share_base` when the backend sent none.
    pub fn share_url(&self, share_base: &str) -> String {
        match &self.share_url {
            Some(url) => resolve_share_url(share_base, url),
            None => format!("{}/share/{}", share_base, self.share_id),
        }
    }
}

/// Resolve a backend share URL against the public base. Absolute URLs are
/// kept; paths such as `/share/<id>` are joined to `share_base`.
pub fn resolve_share_url(share_base: &str, share_url: &str) -> String {
    if share_url.starts_with("http://") || share_url.starts_with("https://") {
        share_url.to_string()
    } else {
        format!("{}/{}", share_base, share_url.trim_start_matches('/'))
    }
}

/// Body of `POST /share`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateShareRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Video name is required"))]
    pub video_name: String,
    /// Source video identifier.
    pub stash_video_id: i64,
    /// Validity period in days.
    #[validate(range(min = 0, message = "Days valid cannot be negative"))]
    pub days_valid: i64,
}

/// Response of `POST /share`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedShare {
    /// Share URL (usually a path such as `/share/<id>`).
    pub share_url: String,
    /// Any further fields the backend returns.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of `PUT /edit_share/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EditShareRequest {
    /// New display name.
    #[validate(length(min = 1, message = "Video name is required"))]
    pub video_name: String,
    /// New validity period, counted from now.
    #[validate(range(min = 0, message = "Days valid cannot be negative"))]
    pub days_valid: i64,
    /// Source video identifier (unchanged by the dialog).
    pub stash_video_id: i64,
}

/// Response of `GET /get_video_title/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoTitle {
    /// Title reported by the catalog, if any.
    #[serde(default)]
    pub title: Option<String>,
}
