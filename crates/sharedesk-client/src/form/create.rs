//! The create-share form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use sharedesk_core::result::AppResult;
use sharedesk_core::types::CreateShareRequest;
use sharedesk_core::types::share::DEFAULT_DAYS_VALID;

use super::{parse_integer, required_name};

/// Raw create-form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateShareForm {
    /// Display name.
    pub video_name: String,
    /// Source video identifier.
    pub stash_video_id: String,
    /// Validity in days; blank means the backend default of 7.
    pub days_valid: String,
}

impl CreateShareForm {
    /// Form pre-filled with the given values.
    pub fn new(
        video_name: impl Into<String>,
        stash_video_id: impl Into<String>,
        days_valid: impl Into<String>,
    ) -> Self {
        Self {
            video_name: video_name.into(),
            stash_video_id: stash_video_id.into(),
            days_valid: days_valid.into(),
        }
    }

    /// Parsed source video identifier, for title lookup.
    pub fn video_id(&self) -> AppResult<i64> {
        parse_integer("Video ID", &self.stash_video_id)
    }

    /// Validate the fields into a request body.
    pub fn validate(&self) -> AppResult<CreateShareRequest> {
        let video_name = required_name(&self.video_name)?;
        let stash_video_id = self.video_id()?;
        let days_valid = if self.days_valid.trim().is_empty() {
            DEFAULT_DAYS_VALID
        } else {
            parse_integer("Days valid", &self.days_valid)?
        };

        let request = CreateShareRequest {
            video_name,
            stash_video_id,
            days_valid,
        };
        request.validate()?;
        Ok(request)
    }
}
