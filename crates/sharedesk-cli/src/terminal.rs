//! Terminal adapter for the admin console.

use std::io::{self, Write};

use sharedesk_client::form::{CreateShareForm, EditShareForm};
use sharedesk_client::view::{ConsoleView, Notice, NoticeLevel, ShareTable};
use sharedesk_core::error::AppError;
use sharedesk_core::result::AppResult;

use crate::output::OutputFormat;

/// Prints console output for one command.
///
/// Command payloads (share URLs, looked-up titles) go to `out`; status
/// notices go to `err` so that stdout stays pipeable.
#[derive(Debug)]
pub struct TerminalView<O = io::Stdout, E = io::Stderr> {
    /// Selected output format.
    format: OutputFormat,
    /// Skip confirmation prompts.
    assume_yes: bool,
    /// Set once the console fell back to the login screen.
    login_required: bool,
    out: O,
    err: E,
}

impl TerminalView {
    /// Create a terminal view on stdout and stderr.
    pub fn new(format: OutputFormat) -> Self {
        Self::with_writers(format, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    /// Create a view over explicit payload and status writers.
    pub fn with_writers(format: OutputFormat, out: O, err: E) -> Self {
        Self {
            format,
            assume_yes: false,
            login_required: false,
            out,
            err,
        }
    }

    /// Answer every confirmation with yes.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Whether the session ended during the command.
    pub fn login_required(&self) -> bool {
        self.login_required
    }
}

impl<O: Write + Send, E: Write + Send> ConsoleView for TerminalView<O, E> {
    fn show_login(&mut self) {
        self.login_required = true;
    }

    fn show_dashboard(&mut self) {
        self.login_required = false;
    }

    fn render_shares(&mut self, table: &ShareTable) {
        // The command formats the console's table itself.
        tracing::debug!(rows = table.rows.len(), "Share table rendered");
    }

    fn notify(&mut self, notice: Notice) {
        // Errors travel back as the command result and are printed once by main.
        match notice.level {
            NoticeLevel::Success if self.format != OutputFormat::Json => {
                let _ = writeln!(self.err, "✓ {}", notice.text);
            }
            NoticeLevel::Success => {}
            NoticeLevel::Error => {
                tracing::debug!(scope = %notice.scope, message = %notice.text, "Inline error");
            }
        }
    }

    fn open_edit_dialog(&mut self, form: &EditShareForm) {
        tracing::debug!(share_id = %form.share_id, "Editing share");
    }

    fn fill_create_form(&mut self, form: &CreateShareForm) {
        if !form.video_name.is_empty() && self.format != OutputFormat::Json {
            let _ = writeln!(self.out, "  {:<24} {}", "Video name:", form.video_name);
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn copy_to_clipboard(&mut self, text: &str) -> AppResult<()> {
        // No system clipboard from a CLI; the URL goes to stdout for piping.
        if text.is_empty() {
            return Err(AppError::validation("Nothing to copy"));
        }
        let line = match self.format {
            OutputFormat::Json => serde_json::json!({ "share_url": text }).to_string(),
            _ => text.to_string(),
        };
        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}
