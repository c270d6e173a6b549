use thiserror::Error;

/// The main error type for af-* crates
///
/// Only request-construction problems surface here. Anything the server sends
/// back, including non-200 statuses and bodies that are not JSON, is reported
/// through [`crate::ApiResponse`] instead.
#[derive(Error, Debug)]
pub enum Error {
  /// A caller-supplied argument broke an endpoint's contract
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// HTTP transport error; no response was received
  #[error("HTTP error: {0}")]
  Http(String),
}

impl Error {
  /// Shorthand used by the validation paths.
  pub fn invalid(msg: impl Into<String>) -> Self {
    Error::InvalidArgument(msg.into())
  }

  /// True when the caller, not the network, is at fault.
  pub fn is_invalid_argument(&self) -> bool {
    matches!(self, Error::InvalidArgument(_))
  }
}

/// Result type alias for af-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invalid_argument_display() {
    let err = Error::invalid("username cannot be empty");
    assert_eq!(err.to_string(), "Invalid argument: username cannot be empty");
    assert!(err.is_invalid_argument());
  }

  #[test]
  fn test_http_is_not_invalid_argument() {
    assert!(!Error::Http("connection refused".to_string()).is_invalid_argument());
  }
}
