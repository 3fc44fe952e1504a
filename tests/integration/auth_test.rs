//! Integration tests for login, logout and session expiry.

mod helpers;

use serde_json::json;
use wiremock::matchers::{any, body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use sharedesk_client::ViewState;
use sharedesk_client::form::CreateShareForm;
use sharedesk_client::view::FormScope;

#[tokio::test]
async fn test_login_persists_token_and_lists_shares() {
    let mut app = helpers::TestApp::new().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string_contains("username=admin"))
        .and(body_string_contains("password=s3cret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "tok-1", "token_type": "bearer"})),
        )
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shared_videos"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            helpers::share_record("abc", "Clip", 5, 3)
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    app.console.start().await;
    assert_eq!(app.console.state(), ViewState::Login);

    app.console
        .login("admin", "s3cret")
        .await
        .expect("Login should succeed");

    assert_eq!(app.console.state(), ViewState::Dashboard);
    assert_eq!(app.console.view().dashboard_shown, 1);
    assert_eq!(app.console.view().last_table().rows.len(), 1);
    assert_eq!(app.stored_token().await.as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn test_saved_token_survives_restart() {
    let app = helpers::TestApp::with_token("kept").await;

    Mock::given(method("GET"))
        .and(path("/shared_videos"))
        .and(header("authorization", "Bearer kept"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;

    let mut console = app.reopen().await;
    console.start().await;

    assert_eq!(console.state(), ViewState::Dashboard);
    assert_eq!(console.view().login_shown, 0);
    assert!(console.view().last_table().rows.is_empty());
}

#[tokio::test]
async fn test_rejected_login_shows_detail() {
    let mut app = helpers::TestApp::new().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Incorrect username or password"})),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let err = app
        .console
        .login("admin", "wrong")
        .await
        .expect_err("Login should fail");

    assert_eq!(err.status(), Some(401));
    assert_eq!(app.console.state(), ViewState::Login);
    assert_eq!(
        app.console.view().errors(FormScope::Login),
        vec!["Incorrect username or password".to_string()]
    );
    assert_eq!(app.stored_token().await, None);
}

#[tokio::test]
async fn test_expired_token_forces_logout() {
    let mut app = helpers::TestApp::with_token("stale").await;

    Mock::given(method("GET"))
        .and(path("/shared_videos"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Token expired"})))
        .expect(1)
        .mount(&app.server)
        .await;

    app.console.start().await;

    assert_eq!(app.console.state(), ViewState::Login);
    assert!(!app.console.session().is_authenticated());
    assert_eq!(app.stored_token().await, None);
    assert!(!app.console.view().errors(FormScope::Login).is_empty());
}

#[tokio::test]
async fn test_unauthorized_on_every_protected_endpoint_logs_out() {
    for endpoint in ["create", "edit", "delete", "title"] {
        let mut app = helpers::TestApp::with_token("stale").await;
        app.console.view_mut().confirm_answer = true;

        Mock::given(method("GET"))
            .and(path("/shared_videos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                helpers::share_record("s1", "Clip", 3, 2)
            ])))
            .up_to_n_times(1)
            .mount(&app.server)
            .await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(401))
            .mount(&app.server)
            .await;

        app.console.refresh().await;
        let id = "s1".parse().expect("share id");
        let result = match endpoint {
            "create" => {
                *app.console.create_form_mut() = CreateShareForm::new("Clip", "3", "4");
                app.console.create_share().await.map(|_| ())
            }
            "edit" => {
                app.console.open_edit(&id).expect("open edit");
                app.console.submit_edit().await
            }
            "delete" => app.console.delete_share(&id).await.map(|_| ()),
            _ => {
                app.console.create_form_mut().stash_video_id = "3".to_string();
                app.console.lookup_title().await.map(|_| ())
            }
        };

        let err = result.expect_err("401 should fail");
        assert!(err.is_authentication(), "{endpoint}");
        assert_eq!(app.console.state(), ViewState::Login, "{endpoint}");
        assert_eq!(app.stored_token().await, None, "{endpoint}");
    }
}

#[tokio::test]
async fn test_no_token_never_reaches_backend() {
    let mut app = helpers::TestApp::new().await;
    app.console.view_mut().confirm_answer = true;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    app.console.refresh().await;
    *app.console.create_form_mut() = CreateShareForm::new("Clip", "3", "4");
    assert!(app.console.create_share().await.is_err());
    assert!(app.console.lookup_title().await.is_err());
    assert!(
        app.console
            .delete_share(&"s1".parse().expect("share id"))
            .await
            .is_err()
    );

    assert_eq!(app.console.state(), ViewState::Login);
}

#[tokio::test]
async fn test_logout_removes_token_without_network() {
    let mut app = helpers::TestApp::with_token("tok").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    app.console.logout().await;

    assert_eq!(app.console.state(), ViewState::Login);
    assert_eq!(app.stored_token().await, None);
    assert!(!app.token_path.exists());
}
