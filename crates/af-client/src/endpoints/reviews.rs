use super::{impl_endpoint_base, EndpointBase, NO_SEGMENTS};
use crate::transport::Transport;
use af_core::types::{QueryParams, ReviewsMode};
use af_core::{ApiResponse, Resource, Result};
use tracing::instrument;

/// Review and rating endpoints
pub struct ReviewsEndpoints<'a> {
  transport: &'a Transport,
}

impl ReviewsEndpoints<'_> {
  /// `GET /reviews` or `GET /reviews/count`
  #[instrument(skip(self))]
  pub async fn reviews(&self, mode: ReviewsMode, params: &QueryParams) -> Result<ApiResponse> {
    self.fetch(Resource::Reviews, mode.segments(), params).await
  }

  /// `GET /ratings`
  #[instrument(skip(self))]
  pub async fn ratings(&self, params: &QueryParams) -> Result<ApiResponse> {
    self.fetch(Resource::Ratings, NO_SEGMENTS, params).await
  }
}

impl_endpoint_base!(ReviewsEndpoints);
