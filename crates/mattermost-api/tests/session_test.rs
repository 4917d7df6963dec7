// Integration tests for authentication and transport lifecycle using wiremock.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use reqwest::Response;
use secrecy::ExposeSecret;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mattermost_api::{AuthStrategy, Client, ClientOptions, Error, TransportConfig, TransportHook};

// ── Helpers ─────────────────────────────────────────────────────────

#[derive(Default)]
struct Counter {
    opened: AtomicUsize,
    closed: AtomicUsize,
    responses: AtomicUsize,
}

impl Counter {
    fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    fn responses(&self) -> usize {
        self.responses.load(Ordering::SeqCst)
    }
}

impl TransportHook for Counter {
    fn on_open(&self, _base_url: &Url) {
        self.opened.fetch_add(1, Ordering::SeqCst);
    }

    fn on_response(&self, _response: &Response) {
        self.responses.fetch_add(1, Ordering::SeqCst);
    }

    fn on_close(&self, _base_url: &Url) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

fn client(server: &MockServer, auth: AuthStrategy) -> (Client, Arc<Counter>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let counter = Arc::new(Counter::default());
    let options = ClientOptions::new(server.uri())
        .with_auth(auth)
        .with_transport(TransportConfig::default().with_hook(counter.clone()));
    (Client::new(options).unwrap(), counter)
}

fn user(id: &str, username: &str) -> serde_json::Value {
    json!({ "id": id, "username": username, "email": format!("{username}@mm.example") })
}

async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/api/v4/users/login"))
        .and(body_json(json!({ "login_id": "u", "password": "p" })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Token", token)
                .set_body_json(user("me-id", "u")),
        )
        .mount(server)
        .await;
}

// ── Login ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_then_call() {
    let server = MockServer::start().await;
    mount_login(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v4/users/me"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("me-id", "u")))
        .expect(1)
        .mount(&server)
        .await;

    let (client, counter) = client(&server, AuthStrategy::login("u", "p"));
    let me = client.users().get_user("me").await.unwrap().parsed().unwrap();

    assert_eq!(me.id, "me-id");
    assert_eq!(me.username, "u");

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].url.path(), "/api/v4/users/login");
    assert_eq!(received[1].url.path(), "/api/v4/users/me");
    // The login exchange is not reported to response hooks.
    assert_eq!(counter.responses(), 1);
}

#[tokio::test]
async fn test_active_token_populated_by_first_transport() {
    let server = MockServer::start().await;
    mount_login(&server, "session-token").await;

    let (client, counter) = client(&server, AuthStrategy::login("u", "p"));
    assert!(client.active_token().is_none());
    assert_eq!(counter.opened(), 0);

    let token = client.login().await.unwrap().unwrap();
    assert_eq!(token.expose_secret(), "session-token");
    assert_eq!(client.active_token().unwrap().expose_secret(), "session-token");
    assert_eq!(counter.opened(), 1);
    assert_eq!(counter.closed(), 1);
}

#[tokio::test]
async fn test_login_without_token_header_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/users/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("me-id", "u")))
        .mount(&server)
        .await;

    let (client, counter) = client(&server, AuthStrategy::login("u", "p"));
    let err = client.users().get_user("me").await.unwrap_err();

    assert!(matches!(err, Error::Authentication { .. }), "got: {err:?}");
    assert!(err.is_auth_error());
    assert!(client.active_token().is_none());
    assert_eq!(counter.opened(), 0);
}

#[tokio::test]
async fn test_rejected_login_maps_to_taxonomy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/users/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "invalid credentials" })),
        )
        .mount(&server)
        .await;

    let (client, counter) = client(&server, AuthStrategy::login("u", "p"));
    let err = client.login().await.unwrap_err();

    assert!(matches!(err, Error::NoAccessTokenProvided { .. }), "got: {err:?}");
    assert_eq!(err.message(), Some("invalid credentials"));
    assert!(client.active_token().is_none());
    assert_eq!(counter.opened(), 0);
    assert_eq!(counter.responses(), 0);
}

#[tokio::test]
async fn test_token_auth_sends_bearer_without_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/users/u1"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("u1", "alice")))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&server, AuthStrategy::token("abc"));
    let alice = client.users().get_user("u1").await.unwrap().parsed().unwrap();

    assert_eq!(alice.username, "alice");
    assert_eq!(client.active_token().unwrap().expose_secret(), "abc");
}

#[tokio::test]
async fn test_no_auth_sends_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/system/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "OK" })))
        .mount(&server)
        .await;

    let (client, _) = client(&server, AuthStrategy::None);
    let ping = client.system().ping(None).await.unwrap().parsed().unwrap();

    assert_eq!(ping.status, "OK");
    let received = server.received_requests().await.unwrap();
    assert!(received[0].headers.get("authorization").is_none());
    assert!(client.active_token().is_none());
}

// ── Transport lifecycle ─────────────────────────────────────────────

#[tokio::test]
async fn test_session_scope_reuses_one_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("u1", "alice")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v4/teams/t1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "t1", "name": "core" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, counter) = client(&server, AuthStrategy::token("abc"));
    {
        let session = client.session().await.unwrap();
        assert_eq!(counter.opened(), 1);

        let alice = session.users().get_user("u1").await.unwrap().parsed().unwrap();
        let team = session.teams().get_team("t1").await.unwrap().parsed().unwrap();
        assert_eq!(alice.username, "alice");
        assert_eq!(team.name, "core");

        assert_eq!(counter.opened(), 1);
        assert_eq!(counter.closed(), 0);
        assert!(session.transport().is_some());
    }
    assert_eq!(counter.opened(), 1);
    assert_eq!(counter.closed(), 1);
    assert!(client.transport().is_none());
}

#[tokio::test]
async fn test_session_logs_in_once() {
    let server = MockServer::start().await;
    mount_login(&server, "tok").await;
    Mock::given(method("GET"))
        .and(path("/api/v4/users/me"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("me-id", "u")))
        .expect(3)
        .mount(&server)
        .await;

    let (client, counter) = client(&server, AuthStrategy::login("u", "p"));
    let session = client.session().await.unwrap();
    for _ in 0..3 {
        session.users().get_user("me").await.unwrap();
    }
    session.close();

    let logins = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/api/v4/users/login")
        .count();
    assert_eq!(logins, 1);
    assert_eq!(counter.opened(), 1);
    assert_eq!(counter.closed(), 1);
}

#[tokio::test]
async fn test_one_shot_transport_per_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("u1", "alice")))
        .mount(&server)
        .await;

    let (client, counter) = client(&server, AuthStrategy::token("abc"));
    for round in 1..=3 {
        client.users().get_user("u1").await.unwrap();
        assert_eq!(counter.opened(), round);
        assert_eq!(counter.closed(), round);
    }
}

#[tokio::test]
async fn test_transport_closed_when_call_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/users/u1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let (client, counter) = client(&server, AuthStrategy::token("abc"));
    let err = client.users().get_user("u1").await.unwrap_err();

    assert!(matches!(err, Error::InternalServerError { .. }));
    assert_eq!(counter.opened(), 1);
    assert_eq!(counter.closed(), 1);
}

#[tokio::test]
async fn test_session_closed_when_call_fails_inside_scope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/users/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "no user" })))
        .mount(&server)
        .await;

    let (client, counter) = client(&server, AuthStrategy::token("abc"));
    let result = async {
        let session = client.session().await?;
        session.users().get_user("missing").await?;
        Ok::<_, Error>(())
    }
    .await;

    let err = result.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(counter.opened(), 1);
    assert_eq!(counter.closed(), 1);
}

#[tokio::test]
async fn test_session_leaves_parent_client_one_shot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("u1", "alice")))
        .mount(&server)
        .await;

    let (client, counter) = client(&server, AuthStrategy::token("abc"));
    let session = client.session().await.unwrap();
    client.users().get_user("u1").await.unwrap();

    assert_eq!(counter.opened(), 2);
    assert_eq!(counter.closed(), 1);
    assert!(client.transport().is_none());
    drop(session);
    assert_eq!(counter.closed(), 2);
}
