//! Integration tests for listing, creating, editing and deleting shares.

mod helpers;

use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use sharedesk_client::form::CreateShareForm;
use sharedesk_client::view::{FormScope, render_table_html};
use sharedesk_core::types::ShareId;

fn id(raw: &str) -> ShareId {
    raw.parse().expect("share id")
}

#[tokio::test]
async fn test_list_renders_escaped_rows() {
    let mut app = helpers::TestApp::with_token("t").await;

    Mock::given(method("GET"))
        .and(path("/shared_videos"))
        .and(header("authorization", "Bearer t"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            helpers::share_record("x1", "<script>alert(1)</script>", 9, 3),
            helpers::share_record("x2", "Expired one", 10, -2)
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    app.console.start().await;

    let table = app.console.view().last_table();
    assert_eq!(table.rows.len(), 2);
    assert!((2..=3).contains(&table.rows[0].days_remaining));
    assert_eq!(table.rows[1].days_remaining, 0);
    assert!(table.rows[1].expired);
    assert_eq!(
        table.rows[0].share_url,
        format!("{}/share/x1", helpers::SHARE_BASE)
    );

    let html = render_table_html(table).expect("render");
    assert!(!html.contains("<script>"));
    assert!(html.contains("alert(1)"));
}

#[tokio::test]
async fn test_list_failure_shows_error_row() {
    let mut app = helpers::TestApp::with_token("t").await;

    Mock::given(method("GET"))
        .and(path("/shared_videos"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "Stash is unreachable"})),
        )
        .mount(&app.server)
        .await;

    app.console.refresh().await;

    let table = app.console.view().last_table();
    assert!(table.rows.is_empty());
    assert_eq!(
        table.error.as_deref(),
        Some("Error loading shares: Stash is unreachable")
    );
    assert!(app.console.session().is_authenticated());
}

#[tokio::test]
async fn test_create_posts_json_and_refreshes() {
    let mut app = helpers::TestApp::with_token("t").await;

    Mock::given(method("POST"))
        .and(path("/share"))
        .and(header("authorization", "Bearer t"))
        .and(body_json(json!({
            "video_name": "Holiday",
            "stash_video_id": 12,
            "days_valid": 7
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"share_url": "/share/new1"})),
        )
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shared_videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            helpers::share_record("new1", "Holiday", 12, 7)
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    *app.console.create_form_mut() = CreateShareForm::new("Holiday", "12", "");
    let url = app.console.create_share().await.expect("Create should succeed");

    assert_eq!(url, format!("{}/share/new1", helpers::SHARE_BASE));
    assert_eq!(app.console.create_form(), &CreateShareForm::default());
    assert!(app.console.table().contains(&id("new1")));
}

#[tokio::test]
async fn test_create_with_non_numeric_days_sends_nothing() {
    let mut app = helpers::TestApp::with_token("t").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    *app.console.create_form_mut() = CreateShareForm::new("Holiday", "12", "a week");
    assert!(app.console.create_share().await.is_err());

    assert_eq!(
        app.console.view().errors(FormScope::Create),
        vec!["Days valid must be a whole number".to_string()]
    );
}

#[tokio::test]
async fn test_create_rejection_is_inline() {
    let mut app = helpers::TestApp::with_token("t").await;

    Mock::given(method("POST"))
        .and(path("/share"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "Video not found in Stash"
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    *app.console.create_form_mut() = CreateShareForm::new("Holiday", "99", "2");
    assert!(app.console.create_share().await.is_err());

    assert_eq!(
        app.console.view().errors(FormScope::Create),
        vec!["Video not found in Stash".to_string()]
    );
    assert!(app.console.session().is_authenticated());
    assert_eq!(app.console.create_form().stash_video_id, "99");
}

#[tokio::test]
async fn test_title_lookup_fills_name() {
    let mut app = helpers::TestApp::with_token("t").await;

    Mock::given(method("GET"))
        .and(path("/get_video_title/12"))
        .and(header("authorization", "Bearer t"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "Beach day"})))
        .expect(1)
        .mount(&app.server)
        .await;

    app.console.create_form_mut().stash_video_id = "12".to_string();
    let title = app.console.lookup_title().await.expect("Lookup should succeed");

    assert_eq!(title, "Beach day");
    assert_eq!(app.console.create_form().video_name, "Beach day");
}

#[tokio::test]
async fn test_edit_puts_full_body_and_refreshes() {
    let mut app = helpers::TestApp::with_token("t").await;

    Mock::given(method("GET"))
        .and(path("/shared_videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            helpers::share_record("e1", "Old name", 44, 5)
        ])))
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/edit_share/e1"))
        .and(body_json(json!({
            "video_name": "New name",
            "days_valid": 30,
            "stash_video_id": 44
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"share_id": "e1"})))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shared_videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            helpers::share_record("e1", "New name", 44, 30)
        ])))
        .mount(&app.server)
        .await;

    app.console.refresh().await;
    app.console.open_edit(&id("e1")).expect("open edit");
    {
        let dialog = app.console.edit_dialog_mut().expect("dialog open");
        dialog.video_name = "New name".to_string();
        dialog.days_valid = "30".to_string();
    }
    app.console.submit_edit().await.expect("Edit should succeed");

    assert!(app.console.edit_dialog().is_none());
    let row = app.console.table().find(&id("e1")).expect("row");
    assert_eq!(row.video_name, "New name");
    assert!((29..=30).contains(&row.days_remaining));
}

#[tokio::test]
async fn test_deleted_share_disappears_after_refresh() {
    let mut app = helpers::TestApp::with_token("t").await;
    app.console.view_mut().confirm_answer = true;

    Mock::given(method("GET"))
        .and(path("/shared_videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            helpers::share_record("gone", "Old clip", 1, 2),
            helpers::share_record("kept", "New clip", 2, 2)
        ])))
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/delete_share/gone"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shared_videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            helpers::share_record("kept", "New clip", 2, 2)
        ])))
        .mount(&app.server)
        .await;

    app.console.refresh().await;
    assert!(app.console.table().contains(&id("gone")));

    assert!(app.console.delete_share(&id("gone")).await.expect("delete"));

    assert!(!app.console.table().contains(&id("gone")));
    let html = render_table_html(app.console.table()).expect("render");
    assert!(!html.contains("gone"));
    assert!(html.contains("kept"));
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let mut app = helpers::TestApp::with_token("t").await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&app.server)
        .await;

    let deleted = app
        .console
        .delete_share(&id("any"))
        .await
        .expect("declined");
    assert!(!deleted);
}

#[tokio::test]
async fn test_copy_url_uses_listed_row() {
    let mut app = helpers::TestApp::with_token("t").await;

    Mock::given(method("GET"))
        .and(path("/shared_videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            helpers::share_record("c1", "Clip", 1, 2)
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    app.console.refresh().await;
    let url = app.console.copy_share_url(&id("c1")).expect("copy");

    assert_eq!(url, format!("{}/share/c1", helpers::SHARE_BASE));
    assert_eq!(app.console.view().clipboard, vec![url]);
}

#[tokio::test]
async fn test_unreachable_backend_shows_generic_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let token_path = dir.path().join("token");
    tokio::fs::write(&token_path, "t").await.expect("seed token");

    let mut console = helpers::open_console("http://127.0.0.1:9", &token_path).await;
    console.refresh().await;

    let table = console.view().last_table();
    assert!(
        table
            .error
            .as_deref()
            .is_some_and(|e| e.contains("Could not reach the server"))
    );
    assert!(console.session().is_authenticated());
}
