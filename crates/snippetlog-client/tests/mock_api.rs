//! Mock API tests for the snippetlog client.
//!
//! These tests use wiremock to simulate the snippet API and exercise the
//! transport, session and services without network access.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use snippetlog_client::{
    ClientConfig, Guarded, InvalidationReason, Redirect, Route, SessionEvent, SnippetClient,
};
use snippetlog_core::error::{InvalidInputError, TransportError};
use snippetlog_core::{
    ApiUrl, CredentialKey, CredentialStore, Credentials, Error, Language, MemoryCredentialStore,
    SnippetDraft, SnippetId,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to point a client config at a mock server.
fn mock_config(server: &MockServer) -> ClientConfig {
    let base = ApiUrl::new(format!("{}/api", server.uri())).unwrap();
    ClientConfig::new(base)
}

fn logged_in_store() -> Arc<MemoryCredentialStore> {
    Arc::new(MemoryCredentialStore::with_entries([
        (CredentialKey::AccessToken, "t1"),
        (CredentialKey::RefreshToken, "r1"),
        (CredentialKey::UserEmail, "a@b.com"),
    ]))
}

fn client_over(server: &MockServer, store: &Arc<MemoryCredentialStore>) -> SnippetClient {
    SnippetClient::new(mock_config(server), store.clone()).unwrap()
}

fn snippet_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": title,
        "code": "console.log(1)",
        "language": "javascript",
        "createdAt": "2024-03-13T10:15:30.000Z"
    })
}

async fn authorization_headers(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| {
            r.headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        })
        .collect()
}

// ============================================================================
// Outbound Credentials
// ============================================================================

#[tokio::test]
async fn test_bearer_attached_when_token_stored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"snippets": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_over(&server, &logged_in_store());
    let snippets = client.snippets().list().await.unwrap();

    assert!(snippets.is_empty());
}

#[tokio::test]
async fn test_no_header_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"snippets": []})))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::new());
    let client = client_over(&server, &store);
    client.snippets().list().await.unwrap();

    assert_eq!(authorization_headers(&server).await, vec![None]);
}

// ============================================================================
// Refresh and Retry
// ============================================================================

#[tokio::test]
async fn test_expired_token_is_refreshed_and_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .and(body_json(json!({"refreshToken": "r1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "t2"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .and(header("authorization", "Bearer t2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"snippets": [snippet_json("s1", "Hello")]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = logged_in_store();
    let client = client_over(&server, &store);
    let mut events = client.subscribe();

    let snippets = client.snippets().list().await.unwrap();

    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0].title, "Hello");
    assert_eq!(store.get(CredentialKey::AccessToken).as_deref(), Some("t2"));
    assert_eq!(store.get(CredentialKey::RefreshToken).as_deref(), Some("r1"));
    assert_eq!(client.drain_events(&mut events), vec![SessionEvent::Refreshed]);
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn test_refresh_call_carries_no_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "t2"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"email": "a@b.com"}})))
        .mount(&server)
        .await;

    let client = client_over(&server, &logged_in_store());
    let profile = client.auth().me().await.unwrap();

    assert_eq!(profile.email, "a@b.com");
    assert_eq!(
        authorization_headers(&server).await,
        vec![
            Some("Bearer t1".to_string()),
            None,
            Some("Bearer t2".to_string())
        ]
    );
}

#[tokio::test]
async fn test_second_401_is_returned_without_second_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid token"})),
        )
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "t2"})))
        .expect(1)
        .mount(&server)
        .await;

    let store = logged_in_store();
    let client = client_over(&server, &store);

    let err = client.snippets().list().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.user_message("Failed to load snippets"), "Invalid token");
    // The refresh itself succeeded, so the session is kept.
    assert_eq!(store.get(CredentialKey::AccessToken).as_deref(), Some("t2"));
}

#[tokio::test]
async fn test_refresh_failure_tears_session_down() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"message": "Invalid refresh token"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = logged_in_store();
    let client = client_over(&server, &store);
    let mut events = client.subscribe();

    let err = client.snippets().list().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(store.is_empty());
    assert_eq!(
        client.drain_events(&mut events),
        vec![SessionEvent::Invalidated {
            reason: InvalidationReason::RefreshRejected { status: 403 }
        }]
    );
    assert!(!client.session().is_authenticated());
    assert_eq!(
        client.guard(Route::Dashboard),
        Guarded::Redirect(Redirect {
            to: Route::Login,
            replace: true
        })
    );
}

#[tokio::test]
async fn test_guard_redirects_after_teardown_without_draining() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let store = logged_in_store();
    let client = client_over(&server, &store);
    assert!(client.guard(Route::Dashboard).is_render());

    client.snippets().list().await.unwrap_err();

    assert!(store.is_empty());
    assert_eq!(
        client.guard(Route::Dashboard),
        Guarded::Redirect(Redirect {
            to: Route::Login,
            replace: true
        })
    );
    assert_eq!(client.session().current_user(), None);
}

#[tokio::test]
async fn test_login_after_teardown_stays_logged_in() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"email": "a@b.com"},
            "tokens": {"accessToken": "t9", "refreshToken": "r9"}
        })))
        .mount(&server)
        .await;

    let store = logged_in_store();
    let client = client_over(&server, &store);

    client.snippets().list().await.unwrap_err();
    client
        .auth()
        .login(&Credentials::new("a@b.com", "secret123"))
        .await
        .unwrap();

    // The invalidation from before the login is applied here.
    assert!(client.guard(Route::Dashboard).is_render());
    assert_eq!(client.session().current_user().unwrap().email, "a@b.com");
}

#[tokio::test]
async fn test_concurrent_401s_refresh_independently() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .and(body_json(json!({"refreshToken": "r1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "t2"})))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .and(header("authorization", "Bearer t2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"snippets": [snippet_json("s1", "Hello")]})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let store = logged_in_store();
    let client = client_over(&server, &store);
    let mut events = client.subscribe();

    let (first, second) = tokio::join!(client.snippets().list(), client.snippets().list());

    assert_eq!(first.unwrap().len(), 1);
    assert_eq!(second.unwrap().len(), 1);
    assert_eq!(store.get(CredentialKey::AccessToken).as_deref(), Some("t2"));
    assert_eq!(
        client.drain_events(&mut events),
        vec![SessionEvent::Refreshed, SessionEvent::Refreshed]
    );
}

#[tokio::test]
async fn test_missing_refresh_token_tears_session_down() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "t2"})))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_entries([
        (CredentialKey::AccessToken, "t1"),
        (CredentialKey::UserEmail, "a@b.com"),
    ]));
    let client = client_over(&server, &store);
    let mut events = client.subscribe();

    let err = client.snippets().list().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(store.is_empty());
    assert_eq!(
        client.drain_events(&mut events),
        vec![SessionEvent::Invalidated {
            reason: InvalidationReason::MissingRefreshToken
        }]
    );
}

#[tokio::test]
async fn test_non_401_errors_pass_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets/s1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Snippet not found"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "t2"})))
        .expect(0)
        .mount(&server)
        .await;

    let store = logged_in_store();
    let client = client_over(&server, &store);

    let id = SnippetId::new("s1").unwrap();
    let err = client.snippets().get(&id).await.unwrap_err();

    match &err {
        Error::Protocol(e) => assert_eq!(e.status, 404),
        other => panic!("expected protocol error, got {other:?}"),
    }
    assert_eq!(err.user_message("Failed to load snippet"), "Snippet not found");
    assert_eq!(store.get(CredentialKey::AccessToken).as_deref(), Some("t1"));
}

#[tokio::test]
async fn test_server_error_without_message_uses_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/snippets/s1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_over(&server, &logged_in_store());
    let err = client
        .snippets()
        .delete(&SnippetId::new("s1").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.user_message("Failed to delete snippet"), "Failed to delete snippet");
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"snippets": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = mock_config(&server).with_timeout(Duration::from_millis(200));
    let client = SnippetClient::new(config, logged_in_store()).unwrap();

    let err = client.snippets().list().await.unwrap_err();

    assert!(matches!(
        err,
        Error::Transport(TransportError::Timeout { duration_ms: 200 })
    ));
    assert_eq!(err.user_message("Failed to load snippets"), "Failed to load snippets");
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_login_persists_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "a@b.com", "password": "secret123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"_id": "u1", "email": "a@b.com"},
            "tokens": {"accessToken": "t1", "refreshToken": "r1"}
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::new());
    let client = client_over(&server, &store);
    assert!(!client.session().is_loading());
    assert!(!client.session().is_authenticated());

    let profile = client
        .auth()
        .login(&Credentials::new("a@b.com", "secret123"))
        .await
        .unwrap();

    assert_eq!(profile.email, "a@b.com");
    assert_eq!(client.session().current_user().unwrap().email, "a@b.com");
    assert_eq!(store.get(CredentialKey::AccessToken).as_deref(), Some("t1"));
    assert_eq!(store.get(CredentialKey::RefreshToken).as_deref(), Some("r1"));
    assert_eq!(store.get(CredentialKey::UserEmail).as_deref(), Some("a@b.com"));
    assert!(client.guard(Route::Dashboard).is_render());
}

#[tokio::test]
async fn test_wrong_password_does_not_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "t2"})))
        .expect(0)
        .mount(&server)
        .await;

    let store = logged_in_store();
    let client = client_over(&server, &store);

    let err = client
        .auth()
        .login(&Credentials::new("a@b.com", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    assert_eq!(
        authorization_headers(&server).await,
        vec![Some("Bearer t1".to_string())]
    );
    // The previous session is untouched.
    assert_eq!(store.get(CredentialKey::AccessToken).as_deref(), Some("t1"));
}

#[tokio::test]
async fn test_login_sends_stored_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"email": "b@b.com"},
            "tokens": {"accessToken": "t5", "refreshToken": "r5"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = logged_in_store();
    let client = client_over(&server, &store);

    let profile = client
        .auth()
        .login(&Credentials::new("b@b.com", "secret123"))
        .await
        .unwrap();

    assert_eq!(profile.email, "b@b.com");
    assert_eq!(store.get(CredentialKey::AccessToken).as_deref(), Some("t5"));
}

#[tokio::test]
async fn test_login_without_stored_token_sends_no_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"email": "a@b.com"},
            "tokens": {"accessToken": "t1", "refreshToken": "r1"}
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::new());
    let client = client_over(&server, &store);
    client
        .auth()
        .login(&Credentials::new("a@b.com", "secret123"))
        .await
        .unwrap();

    assert_eq!(authorization_headers(&server).await, vec![None]);
}

#[tokio::test]
async fn test_register_logs_in() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({"email": "new@b.com", "password": "pw123456", "name": "New"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user": {"_id": "u2", "email": "new@b.com", "name": "New"},
            "tokens": {"accessToken": "t9", "refreshToken": "r9"}
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::new());
    let client = client_over(&server, &store);

    let profile = client
        .auth()
        .register(&Credentials::new("new@b.com", "pw123456"), Some("New"))
        .await
        .unwrap();

    assert_eq!(profile.name.as_deref(), Some("New"));
    assert_eq!(store.get(CredentialKey::AccessToken).as_deref(), Some("t9"));
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn test_logout_revokes_and_clears() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(body_json(json!({"refreshToken": "r1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let store = logged_in_store();
    let client = client_over(&server, &store);
    assert!(client.session().is_authenticated());

    client.auth().logout().await;

    assert!(store.is_empty());
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_even_when_server_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let store = logged_in_store();
    let client = client_over(&server, &store);

    client.auth().logout().await;

    assert!(store.is_empty());
    assert!(client.session().current_user().is_none());
}

#[tokio::test]
async fn test_hydration_makes_no_network_call() {
    let server = MockServer::start().await;

    let client = client_over(&server, &logged_in_store());

    assert!(!client.session().is_loading());
    assert_eq!(client.session().current_user().unwrap().email, "a@b.com");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_explicit_refresh_failure_keeps_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store = logged_in_store();
    let client = client_over(&server, &store);

    assert!(client.auth().refresh().await.is_err());
    assert_eq!(store.get(CredentialKey::RefreshToken).as_deref(), Some("r1"));
}

// ============================================================================
// Snippets
// ============================================================================

#[tokio::test]
async fn test_get_unwraps_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets/s1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"snippet": snippet_json("s1", "One")})),
        )
        .mount(&server)
        .await;

    let client = client_over(&server, &logged_in_store());
    let snippet = client.snippets().get(&SnippetId::new("s1").unwrap()).await.unwrap();

    assert_eq!(snippet.id.as_str(), "s1");
    assert_eq!(snippet.language, Language::Javascript);
}

#[tokio::test]
async fn test_bare_list_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/snippets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([snippet_json("s1", "One")])))
        .mount(&server)
        .await;

    let client = client_over(&server, &logged_in_store());
    let err = client.snippets().list().await.unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidInput(InvalidInputError::MalformedResponse { .. })
    ));
}

#[tokio::test]
async fn test_create_sends_draft() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/snippets"))
        .and(header("authorization", "Bearer t1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"title": "Hello", "code": "print(1)", "language": "python"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "s9",
            "title": "Hello",
            "code": "print(1)",
            "language": "python",
            "createdAt": "2024-03-13T10:15:30.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_over(&server, &logged_in_store());
    let draft = SnippetDraft::new("Hello", "print(1)", Language::Python);
    let snippet = client.snippets().create(&draft).await.unwrap();

    assert_eq!(snippet.id.as_str(), "s9");
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_server() {
    let server = MockServer::start().await;

    let client = client_over(&server, &logged_in_store());
    let draft = SnippetDraft::new("", "print(1)", Language::Python);

    let err = client.snippets().create(&draft).await.unwrap_err();
    assert_eq!(err.user_message("Failed to create snippet"), "title is required");

    let id = SnippetId::new("s1").unwrap();
    let draft = SnippetDraft::new("Title", "   ", Language::Python);
    assert!(client.snippets().update(&id, &draft).await.is_err());

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_puts_draft() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/snippets/s1"))
        .and(body_json(json!({"title": "Renamed", "code": "ls", "language": "bash"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "s1",
            "title": "Renamed",
            "code": "ls",
            "language": "bash",
            "createdAt": "2024-03-13T10:15:30.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_over(&server, &logged_in_store());
    let id = SnippetId::new("s1").unwrap();
    let snippet = client
        .snippets()
        .update(&id, &SnippetDraft::new("Renamed", "ls", Language::Bash))
        .await
        .unwrap();

    assert_eq!(snippet.title, "Renamed");
    assert_eq!(snippet.language, Language::Bash);
}

#[tokio::test]
async fn test_delete_accepts_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/snippets/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_over(&server, &logged_in_store());
    client
        .snippets()
        .delete(&SnippetId::new("s1").unwrap())
        .await
        .unwrap();
}
