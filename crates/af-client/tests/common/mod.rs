#![allow(dead_code)]

use af_client::{AppFiguresClient, Config};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PRODUCT_ID: &str = "40338";

/// Client pointed at a fresh stub server, with one registered product
pub async fn setup() -> (MockServer, AppFiguresClient) {
  let _ = tracing_subscriber::fmt().with_test_writer().try_init();

  let server = MockServer::start().await;
  let config = Config::new("me", "secret", "key", "not_telling")
    .expect("valid credentials")
    .with_base_url(format!("{}/v2", server.uri()));

  let mut client = AppFiguresClient::new(config).expect("Failed to create client");
  client.add_product_id("my_app", PRODUCT_ID).expect("register product");
  (server, client)
}

/// Fail the test if the server sees any request at all
pub async fn expect_no_requests(server: &MockServer) {
  Mock::given(any())
    .respond_with(ResponseTemplate::new(200))
    .expect(0)
    .mount(server)
    .await;
}

pub fn ok_json() -> ResponseTemplate {
  ResponseTemplate::new(200)
    .insert_header("X-Request-Limit", "1000")
    .insert_header("X-Request-Usage", "10")
    .set_body_json(serde_json::json!({"content": "response"}))
}
