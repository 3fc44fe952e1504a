//! The interactive menu loop.

use dialoguer::{Input, Password, Select};

use sharedesk_client::{AdminConsole, ViewState};
use sharedesk_core::error::AppError;
use sharedesk_core::types::ShareId;

use crate::view::MenuView;

type Console = AdminConsole<MenuView>;

/// Dashboard actions, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Refresh,
    Create,
    Lookup,
    Edit,
    Delete,
    CopyUrl,
    Logout,
    Quit,
}

impl Action {
    const ALL: [Action; 8] = [
        Action::Refresh,
        Action::Create,
        Action::Lookup,
        Action::Edit,
        Action::Delete,
        Action::CopyUrl,
        Action::Logout,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Refresh => "Refresh list",
            Action::Create => "Create share",
            Action::Lookup => "Look up video title",
            Action::Edit => "Edit share",
            Action::Delete => "Delete share",
            Action::CopyUrl => "Copy share URL",
            Action::Logout => "Log out",
            Action::Quit => "Quit",
        }
    }

    /// Whether the action works on a listed row.
    fn needs_row(self) -> bool {
        matches!(self, Action::Edit | Action::Delete | Action::CopyUrl)
    }
}

/// Run until the user quits.
pub async fn run(console: &mut Console) -> Result<(), AppError> {
    loop {
        let keep_going = match console.state() {
            ViewState::Login => login_screen(console).await?,
            ViewState::Dashboard => dashboard(console).await?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

async fn login_screen(console: &mut Console) -> Result<bool, AppError> {
    let choice = Select::new()
        .items(&["Log in", "Quit"])
        .default(0)
        .interact()
        .map_err(input_error)?;
    if choice == 1 {
        return Ok(false);
    }

    let username: String = Input::new()
        .with_prompt("Username")
        .interact_text()
        .map_err(input_error)?;
    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(input_error)?;

    // The view already shows why a login failed.
    let _ = console.login(&username, &password).await;
    Ok(true)
}

async fn dashboard(console: &mut Console) -> Result<bool, AppError> {
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let index = Select::new()
        .with_prompt("Action")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(input_error)?;
    let action = Action::ALL[index];

    if action.needs_row() && console.table().rows.is_empty() {
        println!("No shares to choose from.");
        return Ok(true);
    }

    match action {
        Action::Refresh => console.refresh().await,
        Action::Create => create(console).await?,
        Action::Lookup => lookup(console).await?,
        Action::Edit => {
            if let Some(id) = pick_share(console)? {
                edit(console, &id).await?;
            }
        }
        Action::Delete => {
            if let Some(id) = pick_share(console)? {
                let _ = console.delete_share(&id).await;
            }
        }
        Action::CopyUrl => {
            if let Some(id) = pick_share(console)? {
                let _ = console.copy_share_url(&id);
            }
        }
        Action::Logout => console.logout().await,
        Action::Quit => return Ok(false),
    }
    Ok(true)
}

async fn create(console: &mut Console) -> Result<(), AppError> {
    let video_id: String = Input::new()
        .with_prompt("Stash video ID")
        .interact_text()
        .map_err(input_error)?;
    console.create_form_mut().stash_video_id = video_id;

    let name: String = Input::new()
        .with_prompt("Video name (blank to look it up)")
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)?;
    if name.trim().is_empty() {
        if console.lookup_title().await.is_err() {
            return Ok(());
        }
    } else {
        console.create_form_mut().video_name = name;
    }

    let days: String = Input::new()
        .with_prompt("Days valid (blank for 7)")
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)?;
    console.create_form_mut().days_valid = days;

    let _ = console.create_share().await;
    Ok(())
}

/// Fill the create form's name from a video ID without submitting.
async fn lookup(console: &mut Console) -> Result<(), AppError> {
    let video_id: String = Input::new()
        .with_prompt("Stash video ID")
        .interact_text()
        .map_err(input_error)?;
    console.create_form_mut().stash_video_id = video_id;
    // Lookup failures are shown inline on the create form.
    let _ = console.lookup_title().await;
    Ok(())
}

async fn edit(console: &mut Console, id: &ShareId) -> Result<(), AppError> {
    if console.open_edit(id).is_err() {
        return Ok(());
    }

    while let Some(current) = console.edit_dialog().cloned() {
        let name: String = Input::new()
            .with_prompt("Video name")
            .with_initial_text(current.video_name)
            .interact_text()
            .map_err(input_error)?;
        let days: String = Input::new()
            .with_prompt("Days valid")
            .with_initial_text(current.days_valid)
            .interact_text()
            .map_err(input_error)?;

        if let Some(dialog) = console.edit_dialog_mut() {
            dialog.video_name = name;
            dialog.days_valid = days;
        }

        if console.submit_edit().await.is_ok() || console.state() == ViewState::Login {
            break;
        }

        let retry = dialoguer::Confirm::new()
            .with_prompt("Try again?")
            .default(true)
            .interact()
            .map_err(input_error)?;
        if !retry {
            console.cancel_edit();
        }
    }
    Ok(())
}

fn pick_share(console: &Console) -> Result<Option<ShareId>, AppError> {
    let rows = &console.table().rows;
    let labels: Vec<String> = rows
        .iter()
        .map(|row| format!("{} ({})", row.video_name, row.share_id))
        .collect();

    let index = Select::new()
        .with_prompt("Share")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(input_error)?;
    Ok(index.map(|i| rows[i].share_id.clone()))
}

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {}", e))
}
