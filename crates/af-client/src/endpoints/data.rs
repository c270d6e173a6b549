use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use af_core::types::{DataResource, QueryParams};
use af_core::{ApiResponse, Resource, Result};
use tracing::instrument;

/// Reference data (categories, countries, currencies, languages, stores)
pub struct DataEndpoints<'a> {
  transport: &'a Transport,
}

impl DataEndpoints<'_> {
  /// `GET /data/:resource`
  #[instrument(skip(self))]
  pub async fn get(&self, resource: DataResource) -> Result<ApiResponse> {
    self.fetch(Resource::Data, &[resource.to_string()], &QueryParams::new()).await
  }
}

impl_endpoint_base!(DataEndpoints);
