//! The edit-share dialog.

use chrono::{DateTime, Utc};
use validator::Validate;

use sharedesk_core::result::AppResult;
use sharedesk_core::types::{EditShareRequest, ShareId};

use super::{parse_integer, required_name};
use crate::view::model::{ShareRow, days_remaining};

/// Raw edit-dialog fields for one share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditShareForm {
    /// Share being edited.
    pub share_id: ShareId,
    /// Source video identifier, carried through unchanged.
    pub stash_video_id: i64,
    /// Display name.
    pub video_name: String,
    /// New validity in days, counted from now.
    pub days_valid: String,
}

impl EditShareForm {
    /// Pre-fill the dialog from a table row.
    pub fn from_row(row: &ShareRow, now: DateTime<Utc>) -> Self {
        Self {
            share_id: row.share_id.clone(),
            stash_video_id: row.stash_video_id,
            video_name: row.video_name.clone(),
            days_valid: days_remaining(row.expires_at, now).to_string(),
        }
    }

    /// Validate the fields into a request body.
    pub fn validate(&self) -> AppResult<EditShareRequest> {
        let request = EditShareRequest {
            video_name: required_name(&self.video_name)?,
            days_valid: parse_integer("Days valid", &self.days_valid)?,
            stash_video_id: self.stash_video_id,
        };
        request.validate()?;
        Ok(request)
    }
}
