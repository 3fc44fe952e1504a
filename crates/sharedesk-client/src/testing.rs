//! Scripted doubles shared by the unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use sharedesk_core::error::AppError;
use sharedesk_core::result::AppResult;
use sharedesk_core::traits::{HttpRequest, HttpResponse, HttpTransport};

use crate::form::{CreateShareForm, EditShareForm};
use crate::view::{ConsoleView, Notice, ShareTable};

/// Transport that replays queued responses and records every request.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<AppResult<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_raw(status, &body.to_string());
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: Bytes::from(body.to_string()),
        }));
    }

    pub fn push_network_error(&self) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(AppError::network("Could not reach the server")));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::internal("no scripted response left")))
    }
}

/// View that records everything the console asks it to show.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub login_shown: usize,
    pub dashboard_shown: usize,
    pub tables: Vec<ShareTable>,
    pub notices: Vec<Notice>,
    pub edit_opened: Vec<EditShareForm>,
    pub edit_closed: usize,
    pub create_forms: Vec<CreateShareForm>,
    pub clipboard: Vec<String>,
    pub confirm_answer: bool,
    pub prompts: Vec<String>,
}

impl RecordingView {
    pub fn confirming() -> Self {
        Self {
            confirm_answer: true,
            ..Self::default()
        }
    }

    pub fn last_table(&self) -> &ShareTable {
        self.tables.last().expect("a table was rendered")
    }
}

impl ConsoleView for RecordingView {
    fn show_login(&mut self) {
        self.login_shown += 1;
    }

    fn show_dashboard(&mut self) {
        self.dashboard_shown += 1;
    }

    fn render_shares(&mut self, table: &ShareTable) {
        self.tables.push(table.clone());
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn open_edit_dialog(&mut self, form: &EditShareForm) {
        self.edit_opened.push(form.clone());
    }

    fn close_edit_dialog(&mut self) {
        self.edit_closed += 1;
    }

    fn fill_create_form(&mut self, form: &CreateShareForm) {
        self.create_forms.push(form.clone());
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.confirm_answer
    }

    fn copy_to_clipboard(&mut self, text: &str) -> AppResult<()> {
        self.clipboard.push(text.to_string());
        Ok(())
    }
}
