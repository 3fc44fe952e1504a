//! Create and edit forms.
//!
//! Forms hold raw text exactly as typed and only become typed requests
//! through `validate`, which never touches the network.

pub mod create;
pub mod edit;

pub use create::CreateShareForm;
pub use edit::EditShareForm;

use sharedesk_core::error::AppError;
use sharedesk_core::result::AppResult;

/// Parse a required whole-number field.
pub(crate) fn parse_integer(label: &str, raw: &str) -> AppResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::validation(format!("{label} is required")));
    }
    raw.parse::<i64>()
        .map_err(|_| AppError::validation(format!("{label} must be a whole number")))
}

/// Trimmed, non-empty video name.
pub(crate) fn required_name(raw: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::validation("Video name is required"));
    }
    Ok(name.to_string())
}
