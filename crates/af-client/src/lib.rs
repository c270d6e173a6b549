//! # af-client
//!
//! A client for the appfigures analytics REST API.
//!
//! ## Features
//!
//! - **Validated calls**: endpoint arguments are checked before any request is made
//! - **Two-part auth**: HTTP basic credentials plus the `X-Client-Key` header
//! - **Uniform results**: every call returns an [`ApiResponse`] with the
//!   status, the parsed JSON body and the `X-Request-Limit` / `X-Request-Usage`
//!   counters
//! - **Async**: built on reqwest; one round trip per call, nothing spawned
//!
//! ## Usage
//!
//! ```rust,no_run
//! use af_client::AppFiguresClient;
//! use af_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let mut client = AppFiguresClient::new(config)?;
//!     client.add_product_id("my_app", 40338)?;
//!
//!     let usage = client.usage().await?;
//!     println!("Requests left: {:?}", usage.remaining());
//!
//!     let reviews = client.reviews().reviews(Default::default(), &Default::default()).await?;
//!     println!("Reviews status: {}", reviews.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Methods return `Result<ApiResponse, af_core::Error>`. An `Err` means the
//! request was never made (bad arguments) or never answered (network failure).
//! Non-200 statuses and unparsable bodies come back as `Ok` with an empty
//! `body`; inspect [`ApiResponse::status`].

#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use af_core::types::{
  ArchiveMode, DataResource, FeaturedMode, FeaturedQuery, Granularity, QueryParams, RanksQuery,
  ReviewsMode,
};
pub use af_core::{ApiResponse, Config, Error, ProductRegistry, Result};
pub use client::AppFiguresClient;
pub use transport::Transport;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  account::AccountEndpoints, data::DataEndpoints, featured::FeaturedEndpoints,
  products::ProductsEndpoints, ranks::RanksEndpoints, reports::ReportsEndpoints,
  reviews::ReviewsEndpoints,
};
