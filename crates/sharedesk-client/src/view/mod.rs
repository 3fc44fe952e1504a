//! View model and the adapter seam the console renders through.

pub mod html;
pub mod model;

use std::fmt;

use sharedesk_core::result::AppResult;

use crate::form::{CreateShareForm, EditShareForm};

pub use html::render_table_html;
pub use model::{ShareRow, ShareTable, days_remaining};

/// The part of the console a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormScope {
    /// Login form.
    Login,
    /// Share table and its row actions.
    List,
    /// Create form, including title lookup.
    Create,
    /// Edit dialog.
    Edit,
}

impl fmt::Display for FormScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::List => write!(f, "shares"),
            Self::Create => write!(f, "create"),
            Self::Edit => write!(f, "edit"),
        }
    }
}

/// Severity of an inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The action succeeded.
    Success,
    /// The action failed.
    Error,
}

/// An inline message scoped to one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Where to show the message.
    pub scope: FormScope,
    /// Severity.
    pub level: NoticeLevel,
    /// Message text.
    pub text: String,
}

impl Notice {
    /// Success message.
    pub fn success(scope: FormScope, text: impl Into<String>) -> Self {
        Self {
            scope,
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    /// Error message.
    pub fn error(scope: FormScope, text: impl Into<String>) -> Self {
        Self {
            scope,
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Displays console state.
///
/// Implementations only render; all decisions are taken by
/// [`crate::console::AdminConsole`].
pub trait ConsoleView: Send {
    /// Switch to the login screen.
    fn show_login(&mut self);

    /// Switch to the authenticated dashboard.
    fn show_dashboard(&mut self);

    /// Render the share table.
    fn render_shares(&mut self, table: &ShareTable);

    /// Show an inline message.
    fn notify(&mut self, notice: Notice);

    /// Open the edit dialog pre-filled with `form`.
    fn open_edit_dialog(&mut self, _form: &EditShareForm) {}

    /// Close the edit dialog.
    fn close_edit_dialog(&mut self) {}

    /// Reflect new create-form contents (after a title lookup or a reset).
    fn fill_create_form(&mut self, _form: &CreateShareForm) {}

    /// Ask the user to confirm a destructive action.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Place `text` on the clipboard.
    fn copy_to_clipboard(&mut self, text: &str) -> AppResult<()>;
}
