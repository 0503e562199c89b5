//! Tests for `ReqwestTransport` against a local mock server.

use fbgraph_api::{GraphApi, Paging};
use fbgraph_core::{Error, post::Post, transport::Transport};
use serde_json::{Value, json};
use wiremock::{
  Mock, MockServer, ResponseTemplate,
  matchers::{body_string, header, method, path, query_param},
};

use crate::{ReqwestTransport, TransportConfig};

fn transport(token: Option<&str>) -> ReqwestTransport {
  ReqwestTransport::new(TransportConfig {
    access_token: token.map(str::to_string),
    ..TransportConfig::default()
  })
  .expect("client")
}

// ─── Transport ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_sends_bearer_token_and_decodes_json() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v2.5/me"))
    .and(header("authorization", "Bearer tok"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "9" })))
    .expect(1)
    .mount(&server)
    .await;

  let body = transport(Some("tok"))
    .get(format!("{}/v2.5/me", server.uri()))
    .await
    .unwrap();
  assert_eq!(body, json!({ "id": "9" }));
}

#[tokio::test]
async fn error_status_keeps_code_and_body() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(
      ResponseTemplate::new(400)
        .set_body_string(r#"{"error":{"type":"OAuthException","code":190}}"#),
    )
    .mount(&server)
    .await;

  let err = transport(None)
    .get(format!("{}/me", server.uri()))
    .await
    .unwrap_err();
  match err {
    Error::Api { status, body } => {
      assert_eq!(status, Some(400));
      assert!(body.contains("OAuthException"));
    }
    other => panic!("expected api error, got {other:?}"),
  }
}

#[tokio::test]
async fn empty_body_is_null() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(200))
    .mount(&server)
    .await;

  let body = transport(None)
    .post(format!("{}/1", server.uri()), Vec::new())
    .await
    .unwrap();
  assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn invalid_json_is_malformed() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
    .mount(&server)
    .await;

  let err = transport(None)
    .get(format!("{}/me", server.uri()))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::MalformedResponse(_)));
}

#[tokio::test]
async fn connection_failure_has_no_status() {
  let port = std::net::TcpListener::bind("127.0.0.1:0")
    .and_then(|l| l.local_addr())
    .unwrap()
    .port();

  let err = transport(None)
    .get(format!("http://127.0.0.1:{port}/me"))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Api { status: None, .. }));
}

// ─── Through GraphApi ────────────────────────────────────────────────────────

#[tokio::test]
async fn feed_page_over_http() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/123/feed"))
    .and(query_param("offset", "0"))
    .and(query_param("limit", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "data": [
        { "id": "1", "type": "status", "from": { "id": "9", "name": "A" } },
        { "id": "2", "from": { "id": "9", "name": "A" } },
      ]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let api = GraphApi::with_base_url(transport(Some("tok")), server.uri());
  let posts = api.get_feed("123", Paging::new(0, 2)).await.unwrap();

  assert!(matches!(posts[0], Post::Status(_)));
  assert!(matches!(posts[1], Post::Generic(_)));
}

#[tokio::test]
async fn publish_sends_form_body() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/123/feed"))
    .and(header("content-type", "application/x-www-form-urlencoded"))
    .and(body_string("message=hello+world"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "456" })))
    .expect(1)
    .mount(&server)
    .await;

  let api = GraphApi::with_base_url(transport(Some("tok")), server.uri());
  let id = api.post_message("123", "hello world").await.unwrap();
  assert_eq!(id, "456");
}

#[tokio::test]
async fn delete_is_a_form_post() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/123"))
    .and(body_string("method=delete"))
    .respond_with(ResponseTemplate::new(200).set_body_string("true"))
    .expect(1)
    .mount(&server)
    .await;

  let api = GraphApi::with_base_url(transport(Some("tok")), server.uri());
  api.delete_post("123").await.unwrap();
}

#[tokio::test]
async fn delete_tolerates_plain_text_success() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/123"))
    .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
    .expect(1)
    .mount(&server)
    .await;

  let api = GraphApi::with_base_url(transport(None), server.uri());
  api.delete_post("123").await.unwrap();
}
