//! HTML rendering of the share table.
//!
//! The template is auto-escaped, so stored video names can never inject
//! markup into the admin page.

use askama::Template;

use sharedesk_core::error::{AppError, ErrorKind};
use sharedesk_core::result::AppResult;

use super::model::{ShareRow, ShareTable};

/// Share table fragment.
#[derive(Template)]
#[template(path = "share_table.html")]
struct ShareTableTemplate<'a> {
    rows: &'a [ShareRow],
    error: Option<&'a str>,
}

/// Render `table` as an HTML `<table>` fragment.
pub fn render_table_html(table: &ShareTable) -> AppResult<String> {
    ShareTableTemplate {
        rows: &table.rows,
        error: table.error.as_deref(),
    }
    .render()
    .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to render share table", e))
}
