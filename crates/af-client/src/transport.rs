//! HTTP transport layer for appfigures API requests

use af_core::types::QueryParams;
use af_core::{
  ApiResponse, Config, Error, Resource, Result, CLIENT_KEY_HEADER, REQUEST_LIMIT_HEADER,
  REQUEST_USAGE_HEADER,
};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// HTTP transport layer for making authenticated requests to the appfigures API
///
/// Every request carries HTTP basic credentials and the `X-Client-Key`
/// header. Responses are folded into an [`ApiResponse`]; only problems that
/// stop a request from being sent are returned as errors.
pub struct Transport {
  client: Client,
  config: Config,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: Config) -> Result<Self> {
    config.validate()?;

    let mut builder = Client::builder().user_agent(concat!("af-client/", env!("CARGO_PKG_VERSION")));
    if let Some(secs) = config.timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, config })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      config: Config::new("me", "secret", "key", "not_telling")
        .expect("static credentials are valid")
        .with_base_url("https://mock.appfigures.com/v2"),
    }
  }

  /// Perform one authenticated GET request
  ///
  /// # Arguments
  ///
  /// * `url` - Absolute URL; scheme and host are required
  /// * `params` - Appended to the URL as query parameters
  ///
  /// # Errors
  ///
  /// [`Error::InvalidArgument`] if `url` is not an absolute http(s) URL, and
  /// [`Error::Http`] if no response was received at all. Any status the
  /// server returns, and any body it sends, ends up in the `Ok` value.
  #[instrument(skip(self, params))]
  pub async fn perform_get(&self, url: &str, params: &QueryParams) -> Result<ApiResponse> {
    let mut url = parse_absolute_url(url)?;
    if !params.is_empty() {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in params {
        query_pairs.append_pair(key, value);
      }
    }

    debug!("Making request to: {}", url);

    let response = self
      .client
      .get(url)
      .basic_auth(&self.config.username, Some(&self.config.password))
      .header(CLIENT_KEY_HEADER, &self.config.app_key)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();
    let limit = rate_limit_header(response.headers(), REQUEST_LIMIT_HEADER);
    let usage = rate_limit_header(response.headers(), REQUEST_USAGE_HEADER);
    debug!(status = status.as_u16(), ?limit, ?usage, "Received response");

    let body = if status == StatusCode::OK {
      read_json_body(response).await
    } else {
      warn!("Request returned status: {}", status);
      None
    };

    Ok(ApiResponse { status: status.as_u16(), body, limit, usage })
  }

  /// Build the full URL for a resource, percent-encoding `extra` path segments
  pub fn endpoint_url<S: AsRef<str>>(&self, resource: Resource, extra: &[S]) -> Result<String> {
    let mut url = Url::parse(&self.config.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;

    {
      let mut segments = url
        .path_segments_mut()
        .map_err(|_| Error::Config(format!("Base URL cannot take a path: {}", self.config.base_url)))?;
      segments.pop_if_empty();
      segments.extend(resource.segments());
      for segment in extra {
        segments.push(segment.as_ref());
      }
    }

    Ok(url.to_string())
  }

  /// Get the configuration in use
  pub fn config(&self) -> &Config {
    &self.config
  }

  pub(crate) fn config_mut(&mut self) -> &mut Config {
    &mut self.config
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.config.base_url
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport").field("config", &self.config).finish()
  }
}

fn parse_absolute_url(raw: &str) -> Result<Url> {
  if raw.trim().is_empty() {
    return Err(Error::invalid("URL cannot be empty"));
  }

  let url = Url::parse(raw).map_err(|e| Error::invalid(format!("Invalid URL {:?}: {}", raw, e)))?;
  if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
    return Err(Error::invalid(format!("URL must be absolute http(s) with a host: {:?}", raw)));
  }
  Ok(url)
}

fn rate_limit_header(headers: &HeaderMap, name: &str) -> Option<u64> {
  let value = headers.get(name)?;
  match value.to_str().ok().and_then(|v| v.trim().parse().ok()) {
    Some(n) => Some(n),
    None => {
      warn!("Ignoring non-numeric {} header: {:?}", name, value);
      None
    }
  }
}

async fn read_json_body(response: Response) -> Option<Value> {
  let text = match response.text().await {
    Ok(text) => text,
    Err(e) => {
      warn!("Failed to read response body: {}", e);
      return None;
    }
  };

  debug!("Response body length: {} bytes", text.len());

  match serde_json::from_str(&text) {
    Ok(body) => Some(body),
    Err(e) => {
      warn!("Failed to parse JSON response: {}", e);
      warn!("Response text (first 200 chars): {}", text.chars().take(200).collect::<String>());
      None
    }
  }
}
