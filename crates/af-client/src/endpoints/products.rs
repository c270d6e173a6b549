//! Product endpoints
//!
//! - `/products/:id` for a product the caller registered
//! - `/products/mine` for every product on the account

use super::{impl_endpoint_base, EndpointBase, NO_SEGMENTS};
use crate::transport::Transport;
use af_core::types::QueryParams;
use af_core::{ApiResponse, ProductRegistry, Resource, Result};
use tracing::instrument;

/// Product lookup endpoints
pub struct ProductsEndpoints<'a> {
  transport: &'a Transport,
  registry: &'a ProductRegistry,
}

impl ProductsEndpoints<'_> {
  /// Get one product, or `/products` when `id` is `None` or empty
  ///
  /// # Errors
  ///
  /// `InvalidArgument` if `id` is not a registered product id. No request is
  /// made in that case.
  #[instrument(skip(self))]
  pub async fn get(&self, id: Option<&str>) -> Result<ApiResponse> {
    match id.filter(|id| !id.trim().is_empty()) {
      Some(id) => {
        let id = self.registry.require_registered(id)?;
        self.fetch(Resource::Products, &[id], &QueryParams::new()).await
      }
      None => self.fetch(Resource::Products, NO_SEGMENTS, &QueryParams::new()).await,
    }
  }

  /// List the account's own products, optionally for a single store
  ///
  /// # Arguments
  ///
  /// * `store` - Store filter such as `"apple"` or `"google_play"`
  #[instrument(skip(self))]
  pub async fn mine(&self, store: Option<&str>) -> Result<ApiResponse> {
    let mut params = QueryParams::new();
    if let Some(store) = store.filter(|s| !s.is_empty()) {
      params.insert("store".to_string(), store.to_string());
    }
    self.fetch(Resource::ProductsMine, NO_SEGMENTS, &params).await
  }
}

impl_endpoint_base!(ProductsEndpoints, registry);
