//! Share link management commands.

use chrono::Utc;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use sharedesk_client::AdminConsole;
use sharedesk_client::form::CreateShareForm;
use sharedesk_client::view::{ShareRow, ShareTable, days_remaining, render_table_html};
use sharedesk_core::error::AppError;
use sharedesk_core::types::ShareId;

use super::SessionOptions;
use crate::output::{self, OutputFormat};
use crate::terminal::TerminalView;

/// Arguments for share commands
#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Share subcommand
    #[command(subcommand)]
    pub command: ShareCommand,
}

/// Share subcommands
#[derive(Debug, Subcommand)]
pub enum ShareCommand {
    /// List all share links
    List,
    /// Create a share link for a video
    Create {
        /// Display name (optional with --lookup-title)
        #[arg(short, long)]
        name: Option<String>,
        /// Stash video ID
        #[arg(short, long)]
        video_id: String,
        /// Days the link stays valid (default 7)
        #[arg(short, long)]
        days: Option<String>,
        /// Fill the name from the video catalog when it is not given
        #[arg(long)]
        lookup_title: bool,
    },
    /// Change a share's name or validity
    Edit {
        /// Share ID
        id: ShareId,
        /// New display name
        #[arg(short, long)]
        name: Option<String>,
        /// New validity in days, counted from now
        #[arg(short, long)]
        days: Option<String>,
    },
    /// Delete a share link
    Delete {
        /// Share ID
        id: ShareId,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Print a share's public URL
    CopyUrl {
        /// Share ID
        id: ShareId,
    },
    /// Look up a video title in the catalog
    Lookup {
        /// Stash video ID
        video_id: String,
    },
}

/// Share display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ShareListRow {
    /// Share ID
    id: String,
    /// Video name
    name: String,
    /// Stash video ID
    video: i64,
    /// Expiry
    expires: String,
    /// Days left
    days_left: String,
    /// Hit counter
    hits: i64,
    /// Public URL
    url: String,
}

impl From<&ShareRow> for ShareListRow {
    fn from(row: &ShareRow) -> Self {
        Self {
            id: row.share_id.to_string(),
            name: row.video_name.clone(),
            video: row.stash_video_id,
            expires: row.expires_display.clone(),
            days_left: if row.expired {
                "expired".to_string()
            } else {
                row.days_remaining.to_string()
            },
            hits: row.hits,
            url: row.share_url.clone(),
        }
    }
}

/// Result of `share create`
#[derive(Debug, Serialize)]
struct CreatedReport {
    /// Public URL of the new share
    share_url: String,
}

/// Execute share commands
pub async fn execute(
    args: &ShareArgs,
    options: &SessionOptions<'_>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let assume_yes = matches!(args.command, ShareCommand::Delete { yes: true, .. });
    let view = TerminalView::new(format).assume_yes(assume_yes);
    let mut console = super::build_console(options, view).await?;

    match &args.command {
        ShareCommand::List => {
            load_table(&mut console).await?;
            print_table(console.table(), format)?;
        }
        ShareCommand::Create {
            name,
            video_id,
            days,
            lookup_title,
        } => {
            *console.create_form_mut() = CreateShareForm::new(
                name.clone().unwrap_or_default(),
                video_id.clone(),
                days.clone().unwrap_or_default(),
            );
            if *lookup_title && name.is_none() {
                console.lookup_title().await?;
            }

            let share_url = console.create_share().await?;
            if format == OutputFormat::Json {
                output::print_item(&CreatedReport { share_url }, format);
            }
        }
        ShareCommand::Edit { id, name, days } => {
            load_table(&mut console).await?;
            console.open_edit(id)?;
            if let Some(dialog) = console.edit_dialog_mut() {
                if let Some(name) = name {
                    dialog.video_name = name.clone();
                }
                if let Some(days) = days {
                    dialog.days_valid = days.clone();
                }
            }
            console.submit_edit().await?;

            if let Some(row) = console.table().find(id) {
                let left = days_remaining(row.expires_at, Utc::now());
                output::print_kv("Expires", &format!("{} ({left} days)", row.expires_display));
            }
        }
        ShareCommand::Delete { id, .. } => {
            load_table(&mut console).await?;
            if !console.delete_share(id).await? {
                output::print_warning("Delete cancelled");
            }
        }
        ShareCommand::CopyUrl { id } => {
            load_table(&mut console).await?;
            console.copy_share_url(id)?;
        }
        ShareCommand::Lookup { video_id } => {
            console.create_form_mut().stash_video_id = video_id.clone();
            let title = console.lookup_title().await?;
            if format == OutputFormat::Json {
                output::print_item(&serde_json::json!({ "title": title }), format);
            }
        }
    }

    Ok(())
}

/// Refresh the listing, turning a failed load into a command error.
async fn load_table(console: &mut AdminConsole<TerminalView>) -> Result<(), AppError> {
    console.refresh().await;
    if console.view().login_required() {
        return Err(AppError::authentication(
            "Not logged in. Run `sharedesk-cli login` first.",
        ));
    }
    if let Some(message) = &console.table().error {
        return Err(AppError::internal(message.clone()));
    }
    Ok(())
}

fn print_table(table: &ShareTable, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Html => output::print_html(&render_table_html(table)?),
        OutputFormat::Json => output::print_item(&table.rows, format),
        OutputFormat::Table => {
            let rows: Vec<ShareListRow> = table.rows.iter().map(ShareListRow::from).collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
