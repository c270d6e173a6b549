mod common;

use af_client::{Error, QueryParams};
use common::{expect_no_requests, ok_json, setup};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_rejects_malformed_urls() {
  let (server, client) = setup().await;
  expect_no_requests(&server).await;

  for url in ["", "invalid uri", "www.example.org"] {
    let result = client.get(url, &QueryParams::new()).await;
    assert!(matches!(result, Err(Error::InvalidArgument(_))), "{url:?} should be rejected");
  }
}

#[tokio::test]
async fn test_success_populates_envelope() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/usage"))
    .respond_with(ok_json())
    .expect(1)
    .mount(&server)
    .await;

  let response = client.get(&format!("{}/v2/usage", server.uri()), &QueryParams::new()).await.unwrap();

  assert_eq!(response.status, 200);
  assert_eq!(response.limit, Some(1000));
  assert_eq!(response.usage, Some(10));
  assert_eq!(response.body, Some(json!({"content": "response"})));
  assert!(response.is_success());
  assert_eq!(response.remaining(), Some(990));
}

#[tokio::test]
async fn test_error_status_leaves_body_empty() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/usage"))
    .respond_with(
      ResponseTemplate::new(400)
        .insert_header("X-Request-Limit", "1000")
        .insert_header("X-Request-Usage", "10")
        .set_body_json(json!({"status": 400, "message": "bad request"})),
    )
    .mount(&server)
    .await;

  let response = client.usage().await.unwrap();

  assert_eq!(response.status, 400);
  assert_eq!(response.limit, Some(1000));
  assert_eq!(response.usage, Some(10));
  assert!(response.body.is_none());
  assert!(!response.is_success());
}

#[tokio::test]
async fn test_server_error_is_not_an_error() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/usage"))
    .respond_with(ResponseTemplate::new(503))
    .mount(&server)
    .await;

  let response = client.usage().await.unwrap();
  assert_eq!(response.status, 503);
  assert!(response.body.is_none());
}

#[tokio::test]
async fn test_invalid_json_body() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/usage"))
    .respond_with(
      ResponseTemplate::new(200)
        .insert_header("X-Request-Limit", "1000")
        .insert_header("X-Request-Usage", "10")
        .set_body_string("<html>not json</html>"),
    )
    .mount(&server)
    .await;

  let response = client.usage().await.unwrap();

  assert_eq!(response.status, 200);
  assert!(response.body.is_none());
  assert_eq!(response.limit, Some(1000));
  assert_eq!(response.usage, Some(10));
}

#[tokio::test]
async fn test_missing_rate_limit_headers() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/usage"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "response"})))
    .mount(&server)
    .await;

  let response = client.usage().await.unwrap();

  assert_eq!(response.status, 200);
  assert!(response.body.is_some());
  assert_eq!(response.limit, None);
  assert_eq!(response.usage, None);
  assert_eq!(response.remaining(), None);
}

#[tokio::test]
async fn test_zero_usage_is_distinct_from_missing() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/usage"))
    .respond_with(ResponseTemplate::new(200).insert_header("X-Request-Usage", "0"))
    .mount(&server)
    .await;

  let response = client.usage().await.unwrap();
  assert_eq!(response.usage, Some(0));
  assert_eq!(response.limit, None);
}

#[tokio::test]
async fn test_sends_basic_auth_and_client_key() {
  let (server, client) = setup().await;

  // base64("me:secret")
  Mock::given(method("GET"))
    .and(path("/v2/usage"))
    .and(header("authorization", "Basic bWU6c2VjcmV0"))
    .and(header("x-client-key", "key"))
    .respond_with(ok_json())
    .expect(1)
    .mount(&server)
    .await;

  let response = client.usage().await.unwrap();
  assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_params_become_query_string() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/v2/reports/sales"))
    .and(query_param("start_date", "2016-01-01"))
    .and(query_param("group_by", "products"))
    .respond_with(ok_json())
    .expect(1)
    .mount(&server)
    .await;

  let mut params = QueryParams::new();
  params.insert("start_date".to_string(), "2016-01-01".to_string());
  params.insert("group_by".to_string(), "products".to_string());

  let url = format!("{}/v2/reports/sales", server.uri());
  let response = client.get(&url, &params).await.unwrap();
  assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_unreachable_host_is_http_error() {
  let (_server, client) = setup().await;

  let result = client.get("http://127.0.0.1:1/v2/usage", &QueryParams::new()).await;
  assert!(matches!(result, Err(Error::Http(_))));
}
