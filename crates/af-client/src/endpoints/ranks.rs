//! Rank history endpoint

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use af_core::types::RanksQuery;
use af_core::{ApiResponse, Resource, Result};
use chrono::Local;
use tracing::instrument;

/// Rank endpoints
pub struct RanksEndpoints<'a> {
  transport: &'a Transport,
}

impl RanksEndpoints<'_> {
  /// `GET /ranks/:ids/:granularity/:start/:end`
  ///
  /// A query without dates covers yesterday (local time). Giving only one of
  /// the two dates is an `InvalidArgument` error.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use af_client::AppFiguresClient;
  /// # use af_core::types::{Granularity, RanksQuery};
  /// # async fn run(client: &AppFiguresClient) -> af_core::Result<()> {
  /// let query = RanksQuery::new("40338;212108").granularity(Granularity::Hourly);
  /// let ranks = client.ranks().ranks(&query).await?;
  /// println!("status {}", ranks.status);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn ranks(&self, query: &RanksQuery) -> Result<ApiResponse> {
    let segments = query.segments(Local::now().date_naive())?;
    self.fetch(Resource::Ranks, segments.as_slice(), &query.params).await
  }
}

impl_endpoint_base!(RanksEndpoints);
