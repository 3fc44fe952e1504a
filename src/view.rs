//! Terminal rendering for the interactive menu.

use tabled::{Table, Tabled};

use sharedesk_client::form::{CreateShareForm, EditShareForm};
use sharedesk_client::view::{ConsoleView, Notice, NoticeLevel, ShareRow, ShareTable};
use sharedesk_core::result::AppResult;

/// Row layout of the on-screen share table.
#[derive(Tabled)]
struct Line {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Video")]
    video: i64,
    #[tabled(rename = "Expires")]
    expires: String,
    #[tabled(rename = "Days")]
    days: String,
    #[tabled(rename = "Hits")]
    hits: i64,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<&ShareRow> for Line {
    fn from(row: &ShareRow) -> Self {
        Self {
            name: row.video_name.clone(),
            video: row.stash_video_id,
            expires: row.expires_display.clone(),
            days: if row.expired {
                "expired".to_string()
            } else {
                row.days_remaining.to_string()
            },
            hits: row.hits,
            url: row.share_url.clone(),
        }
    }
}

/// View adapter printing to the terminal.
#[derive(Debug, Default)]
pub struct MenuView;

impl ConsoleView for MenuView {
    fn show_login(&mut self) {
        println!();
        println!("== ShareDesk: log in ==");
    }

    fn show_dashboard(&mut self) {
        println!();
        println!("== ShareDesk: shared videos ==");
    }

    fn render_shares(&mut self, table: &ShareTable) {
        if let Some(message) = &table.error {
            println!("✗ {}", message);
        } else if table.rows.is_empty() {
            println!("No shared videos found.");
        } else {
            let lines: Vec<Line> = table.rows.iter().map(Line::from).collect();
            println!("{}", Table::new(lines));
        }
    }

    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("✓ {}", notice.text),
            NoticeLevel::Error => eprintln!("✗ [{}] {}", notice.scope, notice.text),
        }
    }

    fn open_edit_dialog(&mut self, form: &EditShareForm) {
        println!("Editing '{}' ({})", form.video_name, form.share_id);
    }

    fn fill_create_form(&mut self, form: &CreateShareForm) {
        if !form.video_name.is_empty() {
            println!("  Name: {}", form.video_name);
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn copy_to_clipboard(&mut self, text: &str) -> AppResult<()> {
        println!("{}", text);
        Ok(())
    }
}
