//! The admin console controller.
//!
//! [`AdminConsole`] turns user actions into backend calls and pushes the
//! results into a [`ConsoleView`]. Each action awaits its own request and,
//! on success, the follow-up refresh; nothing runs concurrently. Failures
//! are reported inline in the scope that raised them, except authentication
//! failures, which drop the session and return to the login screen.

use chrono::Utc;
use tracing::{debug, info, warn};

use sharedesk_core::error::AppError;
use sharedesk_core::result::AppResult;
use sharedesk_core::types::ShareId;
use sharedesk_core::types::share::resolve_share_url;

use crate::form::{CreateShareForm, EditShareForm};
use crate::gateway::ApiGateway;
use crate::session::SessionManager;
use crate::view::{ConsoleView, FormScope, Notice, ShareTable};

/// Which screen the console is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Login prompt.
    Login,
    /// Authenticated share dashboard.
    Dashboard,
}

/// Console controller over a view adapter.
pub struct AdminConsole<V: ConsoleView> {
    gateway: ApiGateway,
    session: SessionManager,
    view: V,
    state: ViewState,
    share_base: String,
    table: ShareTable,
    create_form: CreateShareForm,
    edit_dialog: Option<EditShareForm>,
}

impl<V: ConsoleView> AdminConsole<V> {
    /// Create a console. Nothing is shown until [`start`](Self::start).
    pub fn new(
        gateway: ApiGateway,
        session: SessionManager,
        view: V,
        share_base: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            session,
            view,
            state: ViewState::Login,
            share_base: share_base.into().trim_end_matches('/').to_string(),
            table: ShareTable::default(),
            create_form: CreateShareForm::default(),
            edit_dialog: None,
        }
    }

    /// Show the initial screen: the dashboard (and a fresh listing) when a
    /// token was restored, the login prompt otherwise.
    pub async fn start(&mut self) {
        if self.session.is_authenticated() {
            self.enter_dashboard();
            self.refresh().await;
        } else {
            self.enter_login();
        }
    }

    /// Adopt the restored session state without rendering anything.
    pub fn resume(&mut self) {
        self.state = if self.session.is_authenticated() {
            ViewState::Dashboard
        } else {
            ViewState::Login
        };
    }

    /// Current screen.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// The owned session.
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// The view adapter.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view adapter.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Last rendered share table.
    pub fn table(&self) -> &ShareTable {
        &self.table
    }

    /// Current create-form contents.
    pub fn create_form(&self) -> &CreateShareForm {
        &self.create_form
    }

    /// Edit the create form in place.
    pub fn create_form_mut(&mut self) -> &mut CreateShareForm {
        &mut self.create_form
    }

    /// The open edit dialog, if any.
    pub fn edit_dialog(&self) -> Option<&EditShareForm> {
        self.edit_dialog.as_ref()
    }

    /// Edit the open dialog in place.
    pub fn edit_dialog_mut(&mut self) -> Option<&mut EditShareForm> {
        self.edit_dialog.as_mut()
    }

    /// Log in with credentials.
    ///
    /// On success the token is stored, the dashboard is shown and the list
    /// refreshed. On failure the login screen stays as it is.
    pub async fn login(&mut self, username: &str, password: &str) -> AppResult<()> {
        if username.trim().is_empty() || password.is_empty() {
            let err = AppError::validation("Username and password are required");
            self.view.notify(Notice::error(FormScope::Login, &err.message));
            return Err(err);
        }

        let issued = match self.gateway.login(username.trim(), password).await {
            Ok(response) => response,
            Err(err) => {
                warn!(username = %username.trim(), error = %err, "Login rejected");
                self.view.notify(Notice::error(FormScope::Login, &err.message));
                return Err(err);
            }
        };

        if let Err(err) = self.session.establish(issued.access_token).await {
            self.view.notify(Notice::error(FormScope::Login, &err.message));
            return Err(err);
        }

        info!(username = %username.trim(), "Logged in");
        self.enter_dashboard();
        self.refresh().await;
        Ok(())
    }

    /// Log out locally. No server call is made.
    pub async fn logout(&mut self) {
        // Store failures are logged by the session; the token is gone from memory.
        let _ = self.session.clear().await;
        info!("Logged out");
        self.enter_login();
    }

    /// Fetch the listing and re-render the table.
    ///
    /// Never fails: fetch errors become a single error row.
    pub async fn refresh(&mut self) {
        match self.gateway.list_shares(&mut self.session).await {
            Ok(records) => {
                debug!(count = records.len(), "Share list refreshed");
                self.table = ShareTable::build(&records, Utc::now(), &self.share_base);
                self.view.render_shares(&self.table);
            }
            Err(err) if err.is_authentication() => {
                self.table = ShareTable::default();
                self.force_logout(&err);
            }
            Err(err) => {
                warn!(error = %err, "Failed to load shares");
                self.table = ShareTable::failed(format!("Error loading shares: {}", err.message));
                self.view.render_shares(&self.table);
            }
        }
    }

    /// Submit the create form. Returns the absolute share URL.
    pub async fn create_share(&mut self) -> AppResult<String> {
        let request = match self.create_form.validate() {
            Ok(request) => request,
            Err(err) => return Err(self.report(FormScope::Create, err)),
        };

        let created = match self.gateway.create_share(&mut self.session, &request).await {
            Ok(created) => created,
            Err(err) => return Err(self.report(FormScope::Create, err)),
        };

        let share_url = resolve_share_url(&self.share_base, &created.share_url);
        info!(video_id = request.stash_video_id, %share_url, "Share created");
        self.view.notify(Notice::success(
            FormScope::Create,
            format!("Share created: {share_url}"),
        ));
        self.create_form = CreateShareForm::default();
        self.view.fill_create_form(&self.create_form);
        self.refresh().await;
        Ok(share_url)
    }

    /// Look up the title for the create form's video ID and pre-fill the name.
    pub async fn lookup_title(&mut self) -> AppResult<String> {
        let video_id = match self.create_form.video_id() {
            Ok(id) => id,
            Err(err) => return Err(self.report(FormScope::Create, err)),
        };

        let title = match self.gateway.video_title(&mut self.session, video_id).await {
            Ok(found) => found.title.filter(|t| !t.trim().is_empty()),
            Err(err) => return Err(self.report(FormScope::Create, err)),
        };

        match title {
            Some(title) => {
                debug!(video_id, %title, "Title found");
                self.create_form.video_name = title.clone();
                self.view.fill_create_form(&self.create_form);
                Ok(title)
            }
            None => Err(self.report(
                FormScope::Create,
                AppError::not_found(format!("No title found for video {video_id}")),
            )),
        }
    }

    /// Open the edit dialog for a listed share.
    pub fn open_edit(&mut self, id: &ShareId) -> AppResult<&EditShareForm> {
        let Some(row) = self.table.find(id) else {
            let err = AppError::not_found(format!("Share {id} is not in the list"));
            self.view.notify(Notice::error(FormScope::List, &err.message));
            return Err(err);
        };

        let form = EditShareForm::from_row(row, Utc::now());
        self.view.open_edit_dialog(&form);
        Ok(&*self.edit_dialog.insert(form))
    }

    /// Close the edit dialog without saving.
    pub fn cancel_edit(&mut self) {
        if self.edit_dialog.take().is_some() {
            self.view.close_edit_dialog();
        }
    }

    /// Submit the edit dialog.
    ///
    /// On success the dialog closes and the list refreshes; on failure the
    /// dialog stays open with the error shown inside it.
    pub async fn submit_edit(&mut self) -> AppResult<()> {
        let Some(form) = self.edit_dialog.clone() else {
            let err = AppError::validation("No share is being edited");
            self.view.notify(Notice::error(FormScope::Edit, &err.message));
            return Err(err);
        };

        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => return Err(self.report(FormScope::Edit, err)),
        };

        if let Err(err) = self
            .gateway
            .edit_share(&mut self.session, &form.share_id, &request)
            .await
        {
            return Err(self.report(FormScope::Edit, err));
        }

        info!(share_id = %form.share_id, days = request.days_valid, "Share updated");
        self.edit_dialog = None;
        self.view.close_edit_dialog();
        self.view
            .notify(Notice::success(FormScope::Edit, "Share updated"));
        self.refresh().await;
        Ok(())
    }

    /// Delete a share after confirmation. Returns `false` if declined.
    pub async fn delete_share(&mut self, id: &ShareId) -> AppResult<bool> {
        let prompt = match self.table.find(id) {
            Some(row) => format!("Delete the share for '{}'?", row.video_name),
            None => format!("Delete share {id}?"),
        };
        if !self.view.confirm(&prompt) {
            debug!(share_id = %id, "Delete cancelled");
            return Ok(false);
        }

        if let Err(err) = self.gateway.delete_share(&mut self.session, id).await {
            return Err(self.report(FormScope::List, err));
        }

        info!(share_id = %id, "Share deleted");
        self.view
            .notify(Notice::success(FormScope::List, format!("Share {id} deleted")));
        self.refresh().await;
        Ok(true)
    }

    /// Copy a listed share's URL to the clipboard. No server call.
    pub fn copy_share_url(&mut self, id: &ShareId) -> AppResult<String> {
        let Some(url) = self.table.find(id).map(|row| row.share_url.clone()) else {
            let err = AppError::not_found(format!("Share {id} is not in the list"));
            self.view.notify(Notice::error(FormScope::List, &err.message));
            return Err(err);
        };

        if let Err(err) = self.view.copy_to_clipboard(&url) {
            self.view.notify(Notice::error(FormScope::List, &err.message));
            return Err(err);
        }

        self.view
            .notify(Notice::success(FormScope::List, "Share URL copied"));
        Ok(url)
    }

    /// Report a failed action in its scope, or force a logout for
    /// authentication failures. Returns the error for propagation.
    fn report(&mut self, scope: FormScope, err: AppError) -> AppError {
        if err.is_authentication() {
            self.force_logout(&err);
        } else {
            self.view.notify(Notice::error(scope, &err.message));
        }
        err
    }

    fn force_logout(&mut self, err: &AppError) {
        info!(reason = %err.message, "Forced logout");
        if self.edit_dialog.take().is_some() {
            self.view.close_edit_dialog();
        }
        self.enter_login();
        self.view.notify(Notice::error(FormScope::Login, &err.message));
    }

    fn enter_dashboard(&mut self) {
        if self.state != ViewState::Dashboard {
            self.state = ViewState::Dashboard;
            self.view.show_dashboard();
        }
    }

    fn enter_login(&mut self) {
        self.state = ViewState::Login;
        self.view.show_login();
    }
}
