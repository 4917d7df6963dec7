// Integration tests for request building and response handling using wiremock.

use std::error::Error as _;

use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mattermost_api::models::{ChannelPatch, PostPatch, UploadFiles};
use mattermost_api::{
    ApiResponse, AuthStrategy, Client, ClientOptions, Error, ErrorKind, Request, UserListQuery,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let options = ClientOptions::new(server.uri()).with_auth(AuthStrategy::token("abc"));
    (server, Client::new(options).unwrap())
}

async fn setup_raw() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let options = ClientOptions::new(server.uri())
        .with_auth(AuthStrategy::token("abc"))
        .with_skip_response_parsing(true);
    (server, Client::new(options).unwrap())
}

async fn only_request(server: &MockServer) -> wiremock::Request {
    let mut received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1, "expected exactly one request");
    received.remove(0)
}

// ── URLs and queries ────────────────────────────────────────────────

#[tokio::test]
async fn test_static_path_joins_under_basepath() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/system/timezones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["UTC", "Europe/Berlin"])))
        .mount(&server)
        .await;

    let zones = client.system().get_supported_timezones().await.unwrap().parsed().unwrap();

    assert_eq!(zones, vec!["UTC".to_owned(), "Europe/Berlin".to_owned()]);
    let request = only_request(&server).await;
    assert_eq!(request.url.path(), "/api/v4/system/timezones");

    let built = Request::get("/system/timezones").url(client.base_url()).unwrap();
    assert_eq!(built.as_str(), format!("{}/api/v4/system/timezones", server.uri()));
}

#[tokio::test]
async fn test_custom_basepath_with_trailing_slash() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mm/api/v4/imports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let options = ClientOptions::new(server.uri()).with_basepath("/mm/api/v4/");
    let client = Client::new(options).unwrap();
    let imports = client.imports().list_imports().await.unwrap().parsed().unwrap();

    assert!(imports.is_empty());
    let request = only_request(&server).await;
    assert!(!request.url.path().contains("//"));
}

#[tokio::test]
async fn test_path_variables_change_only_their_segment() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "channel_id": "c" })))
        .mount(&server)
        .await;

    client.channels().get_channel_member("c1", "u1").await.unwrap();
    client.channels().get_channel_member("c2", "u1").await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.path(), "/api/v4/channels/c1/members/u1");
    assert_eq!(received[1].url.path(), "/api/v4/channels/c2/members/u1");
}

#[tokio::test]
async fn test_path_variable_is_segment_encoded() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "u9" })))
        .mount(&server)
        .await;

    client.users().get_user_by_username("a/b").await.unwrap();

    let request = only_request(&server).await;
    assert_eq!(request.url.path(), "/api/v4/users/username/a%2Fb");
}

#[tokio::test]
async fn test_absent_query_params_are_dropped() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/users"))
        .and(query_param("page", "2"))
        .and(query_param("in_team", "T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "u1" }])))
        .expect(1)
        .mount(&server)
        .await;

    let query = UserListQuery {
        page: Some(2),
        per_page: None,
        in_team: Some("T1".into()),
        ..UserListQuery::default()
    };
    let users = client.users().get_users(&query).await.unwrap().parsed().unwrap();

    assert_eq!(users.len(), 1);
    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("page=2&in_team=T1"));
    assert!(!request.url.query_pairs().any(|(k, _)| k == "per_page"));
}

#[tokio::test]
async fn test_false_and_zero_are_sent() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let query = UserListQuery {
        page: Some(0),
        active: Some(false),
        ..UserListQuery::default()
    };
    client.users().get_users(&query).await.unwrap();

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("page=0&active=false"));
}

// ── Bodies ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unset_fields_omitted_and_null_preserved() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/v4/channels/C1/patch"))
        .and(body_json(json!({ "display_name": "Town", "header": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "C1" })))
        .expect(1)
        .mount(&server)
        .await;

    let patch = ChannelPatch {
        display_name: Some("Town".into()),
        header: Some(None),
        ..ChannelPatch::default()
    };
    let channel = client.channels().patch_channel("C1", &patch).await.unwrap().parsed().unwrap();

    assert_eq!(channel.id, "C1");
}

#[tokio::test]
async fn test_raw_list_body_sent_as_given() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/users/ids"))
        .and(body_json(json!(["u1", "u2"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "u1" }, { "id": "u2" }])))
        .expect(1)
        .mount(&server)
        .await;

    let ids = vec!["u1".to_owned(), "u2".to_owned()];
    let users = client.users().get_users_by_ids(&ids, None).await.unwrap().parsed().unwrap();

    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_multipart_upload() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/files"))
        .and(query_param("channel_id", "C1"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "file_infos": [{ "id": "F1", "name": "notes.txt", "size": 5 }],
            "client_ids": ["cid-1"],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let upload = UploadFiles::new()
        .with_client_id("cid-1")
        .with_file("notes.txt", Bytes::from_static(b"hello"));
    let result = client
        .files()
        .upload_file(&upload, Some("C1"))
        .await
        .unwrap()
        .parsed()
        .unwrap();

    assert_eq!(result.file_infos.len(), 1);
    assert_eq!(result.file_infos[0].id, "F1");
    assert_eq!(result.client_ids, vec!["cid-1".to_owned()]);

    let request = only_request(&server).await;
    let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"), "got: {content_type}");

    let body = String::from_utf8_lossy(&request.body);
    assert_eq!(body.to_ascii_lowercase().matches("content-disposition").count(), 2);
    assert!(body.contains(r#"name="client_ids""#));
    assert!(body.contains(r#"name="files"; filename="notes.txt""#));
    assert!(body.contains("hello"));
}

// ── Errors ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_forbidden_maps_to_not_enough_permissions() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v4/channels/C1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "message": "nope" })))
        .mount(&server)
        .await;

    let err = client.channels().delete_channel("C1", None).await.unwrap_err();

    assert!(matches!(err, Error::NotEnoughPermissions { .. }), "got: {err:?}");
    assert_eq!(err.message(), Some("nope"));
    assert_eq!(err.kind(), Some(ErrorKind::NotEnoughPermissions));
    let cause = err.source().unwrap();
    assert!(cause.to_string().contains("HTTP 403"));
    assert_eq!(err.http_error().unwrap().status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_every_taxonomy_status_maps() {
    let cases = [
        (400, ErrorKind::InvalidOrMissingParameters),
        (401, ErrorKind::NoAccessTokenProvided),
        (403, ErrorKind::NotEnoughPermissions),
        (404, ErrorKind::ResourceNotFound),
        (405, ErrorKind::MethodNotAllowed),
        (413, ErrorKind::ContentTooLarge),
        (429, ErrorKind::TooManyRequests),
        (500, ErrorKind::InternalServerError),
        (501, ErrorKind::FeatureDisabled),
    ];

    for (status, kind) in cases {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/v4/jobs/j1"))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({ "message": format!("m{status}") })),
            )
            .mount(&server)
            .await;

        let err = client.jobs().get_job("j1").await.unwrap_err();
        assert_eq!(err.kind(), Some(kind), "status {status}");
        assert_eq!(err.message(), Some(format!("m{status}").as_str()));
    }
}

#[tokio::test]
async fn test_error_message_falls_back_to_raw_text() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/config"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream timed out"))
        .mount(&server)
        .await;

    let err = client.system().get_config().await.unwrap_err();

    assert!(matches!(err, Error::InternalServerError { .. }));
    assert_eq!(err.message(), Some("upstream timed out"));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_unmapped_status_is_generic_http_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/cluster/status"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client.cluster().get_cluster_status().await.unwrap_err();

    match err {
        Error::Http(ref http) => {
            assert_eq!(http.status, StatusCode::BAD_GATEWAY);
            assert_eq!(http.body, "bad gateway");
        }
        ref other => panic!("expected Http error, got: {other:?}"),
    }
    assert!(err.kind().is_none());
}

#[tokio::test]
async fn test_error_raised_even_when_parsing_skipped() {
    let (server, client) = setup_raw().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/files/F1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "no file" })))
        .mount(&server)
        .await;

    let err = client.files().get_file("F1").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.message(), Some("no file"));
}

#[tokio::test]
async fn test_undecodable_body_is_a_deserialization_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.users().get_user("u1").await.unwrap_err();

    match err {
        Error::Deserialization { ref body, .. } => assert_eq!(body, "not json"),
        ref other => panic!("expected Deserialization error, got: {other:?}"),
    }
    assert!(err.status().is_none());
}

// ── Response policy ─────────────────────────────────────────────────

#[tokio::test]
async fn test_parse_skipping_returns_raw_bytes() {
    let (server, client) = setup_raw().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/files/F1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/octet-stream")
                .set_body_bytes(vec![0x89, 0x50, 0x4e, 0x47]),
        )
        .mount(&server)
        .await;

    let files = client.files();
    assert!(files.skips_response_parsing());
    let resp = files.get_file("F1").await.unwrap();

    assert!(resp.is_raw());
    let raw = resp.into_raw().unwrap();
    assert_eq!(raw.status(), StatusCode::OK);
    assert_eq!(raw.bytes().await.unwrap().as_ref(), &[0x89, 0x50, 0x4e, 0x47]);
}

#[tokio::test]
async fn test_parse_skipping_never_decodes() {
    let (server, client) = setup_raw().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let resp = client.users().get_user("u1").await.unwrap();

    let raw = resp.into_raw().unwrap();
    assert_eq!(raw.text().await.unwrap(), "not json");
}

#[tokio::test]
async fn test_binary_download_parses_to_bytes() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/files/F1/thumbnail"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"thumb".to_vec()))
        .mount(&server)
        .await;

    let bytes = client.files().get_file_thumbnail("F1").await.unwrap().parsed().unwrap();

    assert_eq!(bytes.as_ref(), b"thumb");
}

#[tokio::test]
async fn test_undocumented_success_status_returns_raw() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/uploads/up1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let resp = client
        .uploads()
        .upload_data("up1", "chunk.bin", Bytes::from_static(b"part"))
        .await
        .unwrap();

    assert!(resp.is_raw());
    let err = resp.parsed().unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus { status } if status == StatusCode::NO_CONTENT));
}

#[tokio::test]
async fn test_status_body_yields_ok() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v4/posts/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "OK" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v4/posts/p1/pin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "OK" })))
        .mount(&server)
        .await;

    let deleted = client.posts().delete_post("p1").await.unwrap().parsed().unwrap();
    let pinned = client.posts().pin_post("p1").await.unwrap().parsed().unwrap();

    assert!(deleted.is_ok());
    assert!(pinned.is_ok());
}

#[tokio::test]
async fn test_no_content_yields_ok() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/users/u1/typing"))
        .and(body_json(json!({ "channel_id": "c1", "parent_id": "p1" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let typing = client.users().publish_user_typing("u1", "c1", Some("p1")).await.unwrap();

    assert!(!typing.is_raw());
    assert!(typing.parsed().unwrap().is_ok());
}

#[tokio::test]
async fn test_execute_status_accepts_documented_no_content() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/users/u1/typing"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let request = Request::post("/users/{user_id}/typing")
        .var("user_id", "u1")
        .expect(StatusCode::NO_CONTENT);
    let status = client.execute_status(request).await.unwrap().parsed().unwrap();

    assert!(status.is_ok());
}

#[tokio::test]
async fn test_no_content_stays_raw_when_parsing_skipped() {
    let (server, client) = setup_raw().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/users/u1/typing"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let typing = client.users().publish_user_typing("u1", "c1", None).await.unwrap();

    assert!(typing.is_raw());
    let request = only_request(&server).await;
    let sent: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(sent, json!({ "channel_id": "c1" }));
}

#[tokio::test]
async fn test_delete_channel_permanent_flag() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v4/channels/C1"))
        .and(query_param("permanent", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "OK" })))
        .expect(1)
        .mount(&server)
        .await;

    let deleted = client.channels().delete_channel("C1", Some(true)).await.unwrap();

    assert!(deleted.parsed().unwrap().is_ok());
}

#[tokio::test]
async fn test_unreadable_error_body_is_reported() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/jobs/j1"))
        .respond_with(
            ResponseTemplate::new(500)
                .insert_header("content-encoding", "gzip")
                .set_body_raw(b"definitely not gzip".to_vec(), "application/json"),
        )
        .mount(&server)
        .await;

    let err = client.jobs().get_job("j1").await.unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::InternalServerError));
    let http = err.http_error().unwrap();
    assert_eq!(http.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(http.body.starts_with("failed to read error body"), "got: {}", http.body);
}

#[tokio::test]
async fn test_execute_reaches_endpoints_without_a_facet_method() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/v4/posts/p1/patch"))
        .and(body_json(json!({ "is_pinned": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "p1", "is_pinned": true })))
        .mount(&server)
        .await;

    let patch = PostPatch {
        is_pinned: Some(true),
        ..PostPatch::default()
    };
    let request = Request::put("/posts/{post_id}/patch")
        .var("post_id", "p1")
        .json(&patch)
        .unwrap();
    let post: serde_json::Value = client.execute(request).await.unwrap().parsed().unwrap();

    assert_eq!(post["is_pinned"], json!(true));
    assert!(matches!(
        client.execute::<serde_json::Value>(Request::get("/users/{user_id}")).await,
        Err(Error::PathVariable { .. })
    ));
}

#[tokio::test]
async fn test_map_keeps_raw_arm() {
    let (server, client) = setup_raw().await;
    Mock::given(method("GET"))
        .and(path("/api/v4/imports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["a.zip"])))
        .mount(&server)
        .await;

    let resp: ApiResponse<usize> = client.imports().list_imports().await.unwrap().map(|v| v.len());

    assert!(resp.is_raw());
    assert!(resp.into_option().is_none());
}
