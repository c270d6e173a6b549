//! Featured endpoints
//!
//! One resource, four modes. Each mode needs a different subset of
//! [`FeaturedQuery`]; see [`FeaturedQuery::segments`] for the rules.

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use af_core::types::{FeaturedMode, FeaturedQuery, QueryParams};
use af_core::{ApiResponse, ProductRegistry, Resource, Result};
use chrono::NaiveDate;
use tracing::instrument;

/// Featured placement endpoints
pub struct FeaturedEndpoints<'a> {
  transport: &'a Transport,
  registry: &'a ProductRegistry,
}

impl FeaturedEndpoints<'_> {
  /// Validate `query` for `mode` and fetch `/featured/:mode/...`
  #[instrument(skip(self))]
  pub async fn fetch_mode(&self, mode: FeaturedMode, query: &FeaturedQuery) -> Result<ApiResponse> {
    let segments = query.segments(mode, self.registry)?;
    self.fetch(Resource::Featured, segments.as_slice(), &query.params).await
  }

  /// `GET /featured/summary/:start/:end`
  pub async fn summary(&self, start: NaiveDate, end: NaiveDate) -> Result<ApiResponse> {
    self.fetch_mode(FeaturedMode::Summary, &FeaturedQuery::new().dates(start, end)).await
  }

  /// `GET /featured/full/:product_id/:start/:end`
  pub async fn full(&self, product_id: &str, start: NaiveDate, end: NaiveDate) -> Result<ApiResponse> {
    let query = FeaturedQuery::new().product_id(product_id).dates(start, end);
    self.fetch_mode(FeaturedMode::Full, &query).await
  }

  /// `GET /featured/counts`; `params` must contain `end`
  pub async fn counts(&self, params: &QueryParams) -> Result<ApiResponse> {
    let query = FeaturedQuery { params: params.clone(), ..FeaturedQuery::default() };
    self.fetch_mode(FeaturedMode::Counts, &query).await
  }

  /// `GET /featured/history/:product_id/:featured_category_id`
  pub async fn history(&self, product_id: &str, featured_category_id: u64) -> Result<ApiResponse> {
    let query = FeaturedQuery::new()
      .product_id(product_id)
      .featured_category_id(featured_category_id);
    self.fetch_mode(FeaturedMode::History, &query).await
  }
}

impl_endpoint_base!(FeaturedEndpoints, registry);

#[cfg(test)]
mod tests {
  use super::*;
  use af_core::Error;

  #[tokio::test]
  async fn test_history_requires_category() {
    let transport = Transport::new_mock();
    let mut registry = ProductRegistry::new();
    registry.register("app", 40338).unwrap();
    let featured = FeaturedEndpoints::new(&transport, &registry);

    assert!(matches!(featured.history("40338", 0).await, Err(Error::InvalidArgument(_))));
    assert!(matches!(featured.history("555", 3).await, Err(Error::InvalidArgument(_))));
  }

  #[tokio::test]
  async fn test_counts_requires_end() {
    let transport = Transport::new_mock();
    let registry = ProductRegistry::new();
    let featured = FeaturedEndpoints::new(&transport, &registry);

    let mut params = QueryParams::new();
    params.insert("start".to_string(), "2016-01-01".to_string());
    assert!(matches!(featured.counts(&params).await, Err(Error::InvalidArgument(_))));
  }
}
