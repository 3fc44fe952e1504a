//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::MockServer;

use sharedesk_client::form::{CreateShareForm, EditShareForm};
use sharedesk_client::session::FileTokenStore;
use sharedesk_client::view::{ConsoleView, FormScope, Notice, NoticeLevel, ShareTable};
use sharedesk_client::{AdminConsole, ApiGateway, ReqwestTransport, SessionManager};
use sharedesk_core::config::ConsoleConfig;
use sharedesk_core::result::AppResult;
use sharedesk_core::traits::TokenStore;

/// Public base the tests configure for share links
pub const SHARE_BASE: &str = "https://videos.example.org";

/// View that records what the console shows
#[derive(Debug, Default)]
pub struct RecordingView {
    pub login_shown: usize,
    pub dashboard_shown: usize,
    pub tables: Vec<ShareTable>,
    pub notices: Vec<Notice>,
    pub clipboard: Vec<String>,
    pub confirm_answer: bool,
}

impl RecordingView {
    /// Errors shown in one scope
    pub fn errors(&self, scope: FormScope) -> Vec<String> {
        self.notices
            .iter()
            .filter(|n| n.scope == scope && n.level == NoticeLevel::Error)
            .map(|n| n.text.clone())
            .collect()
    }

    /// Most recent table
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

    fn open_edit_dialog(&mut self, _form: &EditShareForm) {}

    fn fill_create_form(&mut self, _form: &CreateShareForm) {}

    fn confirm(&mut self, _prompt: &str) -> bool {
        self.confirm_answer
    }

    fn copy_to_clipboard(&mut self, text: &str) -> AppResult<()> {
        self.clipboard.push(text.to_string());
        Ok(())
    }
}

/// Test application context
pub struct TestApp {
    /// Mock backend
    pub server: MockServer,
    /// Console under test
    pub console: AdminConsole<RecordingView>,
    /// Token file used by the console
    pub token_path: PathBuf,
    /// Keeps the token directory alive
    _dir: TempDir,
}

impl TestApp {
    /// Console against a fresh mock backend with no saved session
    pub async fn new() -> Self {
        Self::build(None).await
    }

    /// Console whose token file already holds `token`
    pub async fn with_token(token: &str) -> Self {
        Self::build(Some(token)).await
    }

    async fn build(token: Option<&str>) -> Self {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let token_path = dir.path().join("sharedesk").join("token");

        if let Some(token) = token {
            FileTokenStore::new(&token_path)
                .save(token)
                .await
                .expect("Failed to seed token");
        }

        let console = open_console(&server.uri(), &token_path).await;
        Self {
            server,
            console,
            token_path,
            _dir: dir,
        }
    }

    /// Start a second console over the same backend and token file
    pub async fn reopen(&self) -> AdminConsole<RecordingView> {
        open_console(&self.server.uri(), &self.token_path).await
    }

    /// Token currently persisted on disk
    pub async fn stored_token(&self) -> Option<String> {
        FileTokenStore::new(&self.token_path)
            .load()
            .await
            .expect("Failed to read token file")
    }
}

/// Build a console the way the binaries do, from TOML configuration.
/// Nothing is requested until the test drives it.
pub async fn open_console(base_url: &str, token_path: &PathBuf) -> AdminConsole<RecordingView> {
    let config = ConsoleConfig::from_toml(&format!(
        r#"
        [backend]
        base_url = "{base_url}"
        share_base_url = "{SHARE_BASE}"

        [session]
        token_file = "{}"
        "#,
        token_path.display()
    ))
    .expect("Failed to parse test config");

    let transport = Arc::new(ReqwestTransport::new(&config.backend).expect("transport"));
    let store = Arc::new(FileTokenStore::new(
        config.session.token_path().expect("token path"),
    ));
    let session = SessionManager::restore(store).await.expect("restore session");

    let mut console = AdminConsole::new(
        ApiGateway::new(transport),
        session,
        RecordingView::default(),
        config.backend.share_base(),
    );
    console.resume();
    console
}

/// A backend share record expiring `days` from now
pub fn share_record(id: &str, name: &str, video_id: i64, days: i64) -> Value {
    let expires = (chrono::Utc::now() + chrono::Duration::days(days))
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string();
    json!({
        "share_id": id,
        "video_name": name,
        "stash_video_id": video_id,
        "expires_at": expires,
        "hits": 0
    })
}
