//! Sales, revenue and ad reports, plus the raw report archive

use super::{impl_endpoint_base, EndpointBase, NO_SEGMENTS};
use crate::transport::Transport;
use af_core::types::{ArchiveMode, QueryParams};
use af_core::{ApiResponse, ProductRegistry, Resource, Result};
use tracing::instrument;

/// Report endpoints
///
/// The report filters (`start_date`, `end_date`, `products`, `group_by`, ...)
/// are passed through untouched in `params`.
pub struct ReportsEndpoints<'a> {
  transport: &'a Transport,
  registry: &'a ProductRegistry,
}

impl ReportsEndpoints<'_> {
  /// `GET /reports/sales`
  #[instrument(skip(self))]
  pub async fn sales(&self, params: &QueryParams) -> Result<ApiResponse> {
    self.fetch(Resource::Sales, NO_SEGMENTS, params).await
  }

  /// `GET /reports/revenue`
  #[instrument(skip(self))]
  pub async fn revenue(&self, params: &QueryParams) -> Result<ApiResponse> {
    self.fetch(Resource::Revenue, NO_SEGMENTS, params).await
  }

  /// `GET /reports/ads`
  #[instrument(skip(self))]
  pub async fn ads(&self, params: &QueryParams) -> Result<ApiResponse> {
    self.fetch(Resource::Ads, NO_SEGMENTS, params).await
  }

  /// Report archive
  ///
  /// `ArchiveMode::Raw` needs `id` to be a registered product id; the other
  /// modes ignore it.
  #[instrument(skip(self))]
  pub async fn archive(
    &self,
    mode: ArchiveMode,
    id: Option<&str>,
    params: &QueryParams,
  ) -> Result<ApiResponse> {
    let segments = mode.segments(id, self.registry)?;
    self.fetch(Resource::Archive, segments.as_slice(), params).await
  }
}

impl_endpoint_base!(ReportsEndpoints, registry);
