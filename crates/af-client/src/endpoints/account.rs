//! Account level endpoints: API usage, users, events and linked accounts

use super::{impl_endpoint_base, EndpointBase, NO_SEGMENTS};
use crate::transport::Transport;
use af_core::types::QueryParams;
use af_core::{ApiResponse, Error, Resource, Result};
use tracing::instrument;

/// Account endpoints
pub struct AccountEndpoints<'a> {
  transport: &'a Transport,
}

impl AccountEndpoints<'_> {
  /// `GET /usage`
  #[instrument(skip(self))]
  pub async fn usage(&self) -> Result<ApiResponse> {
    self.fetch(Resource::Usage, NO_SEGMENTS, &QueryParams::new()).await
  }

  /// `GET /users/:email`
  ///
  /// # Errors
  ///
  /// `InvalidArgument` if `email` is empty.
  #[instrument(skip(self))]
  pub async fn users(&self, email: &str) -> Result<ApiResponse> {
    let email = email.trim();
    if email.is_empty() {
      return Err(Error::invalid("Users lookup requires an email"));
    }
    self.fetch(Resource::Users, &[email], &QueryParams::new()).await
  }

  /// `GET /events`
  #[instrument(skip(self))]
  pub async fn events(&self, params: &QueryParams) -> Result<ApiResponse> {
    self.fetch(Resource::Events, NO_SEGMENTS, params).await
  }

  /// `GET /external_accounts`
  #[instrument(skip(self))]
  pub async fn external_accounts(&self) -> Result<ApiResponse> {
    self.fetch(Resource::ExternalAccounts, NO_SEGMENTS, &QueryParams::new()).await
  }
}

impl_endpoint_base!(AccountEndpoints);
