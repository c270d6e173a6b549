//! Configuration management for the appfigures client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Credentials and endpoint settings for an appfigures account
///
/// All four identity fields are mandatory. `app_secret` is not sent on the
/// wire today but is part of the account identity and is validated alongside
/// the others.
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// Account username (HTTP basic auth)
  pub username: String,

  /// Account password (HTTP basic auth)
  pub password: String,

  /// Application key, sent as `X-Client-Key`
  pub app_key: String,

  /// Application secret
  pub app_secret: String,

  /// Base URL for the appfigures API
  pub base_url: String,

  /// Request timeout in seconds; `None` leaves the transport default in place
  pub timeout_secs: Option<u64>,
}

impl Config {
  /// Build a configuration from the four account credentials
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidArgument`] if any credential is empty.
  pub fn new(
    username: impl Into<String>,
    password: impl Into<String>,
    app_key: impl Into<String>,
    app_secret: impl Into<String>,
  ) -> Result<Self> {
    let config = Config {
      username: username.into(),
      password: password.into(),
      app_key: app_key.into(),
      app_secret: app_secret.into(),
      base_url: crate::APPFIGURES_BASE_URL.to_string(),
      timeout_secs: None,
    };
    config.validate_credentials()?;
    Ok(config)
  }

  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let username = env::var("APPFIGURES_USERNAME")?;
    let password = env::var("APPFIGURES_PASSWORD")?;
    let app_key = env::var("APPFIGURES_APP_KEY")?;
    let app_secret = env::var("APPFIGURES_APP_SECRET")?;

    let mut config = Config::new(username, password, app_key, app_secret)?;

    if let Ok(base_url) = env::var("APPFIGURES_BASE_URL") {
      config.base_url = base_url;
    }

    if let Ok(timeout) = env::var("APPFIGURES_TIMEOUT_SECS") {
      let secs = timeout
        .parse()
        .map_err(|_| Error::Config("Invalid APPFIGURES_TIMEOUT_SECS".to_string()))?;
      config.timeout_secs = Some(secs);
    }

    config.validate()?;
    Ok(config)
  }

  /// Point the client at a different API root, e.g. a local stub server
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Let the transport abort requests after `secs` seconds
  pub fn with_timeout_secs(mut self, secs: u64) -> Self {
    self.timeout_secs = Some(secs);
    self
  }

  /// Check the credentials and the base URL
  pub fn validate(&self) -> Result<()> {
    self.validate_credentials()?;

    let url = Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {:?}: {}", self.base_url, e)))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
      return Err(Error::Config(format!("Base URL must be an absolute http(s) URL: {}", self.base_url)));
    }
    Ok(())
  }

  fn validate_credentials(&self) -> Result<()> {
    let missing: Vec<&str> = [
      ("username", &self.username),
      ("password", &self.password),
      ("app_key", &self.app_key),
      ("app_secret", &self.app_secret),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect();

    if missing.is_empty() {
      Ok(())
    } else {
      Err(Error::invalid(format!("Credentials cannot be empty: {}", missing.join(", "))))
    }
  }
}

impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .field("app_key", &self.app_key)
      .field("app_secret", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_new() {
    let config = Config::new("me", "secret", "key", "not_telling").unwrap();
    assert_eq!(config.username, "me");
    assert_eq!(config.base_url, crate::APPFIGURES_BASE_URL);
    assert!(config.timeout_secs.is_none());
  }

  #[test]
  fn test_config_rejects_any_missing_credential() {
    // Every combination with at least one empty field.
    for mask in 0u8..15 {
      let pick = |bit: u8, value: &'static str| if mask & (1 << bit) != 0 { value } else { "" };
      let result = Config::new(pick(0, "a"), pick(1, "b"), pick(2, "c"), pick(3, "d"));
      assert!(
        matches!(result, Err(Error::InvalidArgument(_))),
        "mask {mask:04b} should be rejected"
      );
    }
  }

  #[test]
  fn test_whitespace_only_credential_is_missing() {
    let err = Config::new("me", "   ", "key", "shh").unwrap_err();
    assert!(err.to_string().contains("password"));
  }

  #[test]
  fn test_validate_base_url() {
    let config = Config::new("me", "secret", "key", "shh").unwrap();
    assert!(config.clone().with_base_url("http://127.0.0.1:8080/v2").validate().is_ok());
    assert!(matches!(
      config.clone().with_base_url("www.example.org").validate(),
      Err(Error::Config(_))
    ));
    assert!(matches!(config.with_base_url("ftp://example.org").validate(), Err(Error::Config(_))));
  }

  #[test]
  fn test_debug_redacts_secrets() {
    let config = Config::new("me", "hunter2", "key", "topsecret").unwrap();
    let printed = format!("{config:?}");
    assert!(!printed.contains("hunter2"));
    assert!(!printed.contains("topsecret"));
    assert!(printed.contains("me"));
  }

  #[test]
  fn test_config_from_env() {
    env::set_var("APPFIGURES_USERNAME", "env_user");
    env::set_var("APPFIGURES_PASSWORD", "env_pass");
    env::set_var("APPFIGURES_APP_KEY", "env_key");
    env::set_var("APPFIGURES_APP_SECRET", "env_secret");
    env::set_var("APPFIGURES_TIMEOUT_SECS", "15");

    let config = Config::from_env().unwrap();
    assert_eq!(config.username, "env_user");
    assert_eq!(config.app_key, "env_key");
    assert_eq!(config.timeout_secs, Some(15));
  }
}
