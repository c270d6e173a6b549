/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use crate::endpoints::{
  account::AccountEndpoints, data::DataEndpoints, featured::FeaturedEndpoints,
  products::ProductsEndpoints, ranks::RanksEndpoints, reports::ReportsEndpoints,
  reviews::ReviewsEndpoints,
};

use crate::transport::Transport;
use af_core::types::QueryParams;
use af_core::{ApiResponse, Config, Error, ProductRegistry, Result};
use std::fmt::Display;

/// Main appfigures API client
///
/// Owns the account credentials, the caller's product registry and the
/// transport. Endpoints are grouped the way the API groups them and borrow
/// the client for the duration of a call.
///
/// # Examples
///
/// ```rust,no_run
/// use af_client::AppFiguresClient;
///
/// # async fn run() -> af_core::Result<()> {
/// let mut client = AppFiguresClient::from_credentials("me", "secret", "key", "not_telling")?;
/// client.add_product_id("my_app", 40338)?;
///
/// let usage = client.usage().await?;
/// println!("{} of {:?} requests used", usage.usage.unwrap_or_default(), usage.limit);
///
/// let product = client.products().get(Some("40338")).await?;
/// if product.is_success() {
///   println!("{}", product.body.unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
pub struct AppFiguresClient {
  transport: Transport,
  registry: ProductRegistry,
}

impl AppFiguresClient {
  /// Create a new appfigures API client
  ///
  /// # Errors
  ///
  /// `InvalidArgument` for a missing credential, `Config` for an unusable
  /// base URL, `Http` if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Transport::new(config)?, registry: ProductRegistry::new() })
  }

  /// Create a client for the public API from the four account credentials
  pub fn from_credentials(
    username: impl Into<String>,
    password: impl Into<String>,
    app_key: impl Into<String>,
    app_secret: impl Into<String>,
  ) -> Result<Self> {
    Self::new(Config::new(username, password, app_key, app_secret)?)
  }

  /// Register `id` under `key`, replacing any earlier id for that key
  pub fn add_product_id(&mut self, key: impl Into<String>, id: impl Display) -> Result<()> {
    self.registry.register(key, id)
  }

  /// Forget every registered product
  pub fn clear_product_ids(&mut self) {
    self.registry.clear();
  }

  /// Keys of the registered products
  pub fn product_keys(&self) -> Vec<&str> {
    self.registry.keys()
  }

  /// Whether `id` is one of the registered product ids
  pub fn is_registered_product(&self, id: impl Display) -> bool {
    self.registry.contains_id(&id.to_string())
  }

  /// The product registry
  pub fn registry(&self) -> &ProductRegistry {
    &self.registry
  }

  /// Active configuration
  pub fn config(&self) -> &Config {
    self.transport.config()
  }

  pub fn username(&self) -> &str {
    &self.config().username
  }

  pub fn app_key(&self) -> &str {
    &self.config().app_key
  }

  pub fn app_secret(&self) -> &str {
    &self.config().app_secret
  }

  pub fn set_username(&mut self, username: impl Into<String>) -> Result<()> {
    self.transport.config_mut().username = non_empty("username", username.into())?;
    Ok(())
  }

  pub fn set_password(&mut self, password: impl Into<String>) -> Result<()> {
    self.transport.config_mut().password = non_empty("password", password.into())?;
    Ok(())
  }

  pub fn set_app_key(&mut self, app_key: impl Into<String>) -> Result<()> {
    self.transport.config_mut().app_key = non_empty("app_key", app_key.into())?;
    Ok(())
  }

  pub fn set_app_secret(&mut self, app_secret: impl Into<String>) -> Result<()> {
    self.transport.config_mut().app_secret = non_empty("app_secret", app_secret.into())?;
    Ok(())
  }

  /// Authenticated GET against any absolute URL
  ///
  /// This is the primitive every endpoint goes through. See
  /// [`Transport::perform_get`].
  pub async fn get(&self, url: &str, params: &QueryParams) -> Result<ApiResponse> {
    self.transport.perform_get(url, params).await
  }

  /// API usage for the account (`GET /usage`)
  pub async fn usage(&self) -> Result<ApiResponse> {
    self.account().usage().await
  }

  /// Product lookup endpoints
  pub fn products(&self) -> ProductsEndpoints<'_> {
    ProductsEndpoints::new(&self.transport, &self.registry)
  }

  /// Sales, revenue, ads and archive reports
  pub fn reports(&self) -> ReportsEndpoints<'_> {
    ReportsEndpoints::new(&self.transport, &self.registry)
  }

  /// Rank history
  pub fn ranks(&self) -> RanksEndpoints<'_> {
    RanksEndpoints::new(&self.transport)
  }

  /// Featured placements
  pub fn featured(&self) -> FeaturedEndpoints<'_> {
    FeaturedEndpoints::new(&self.transport, &self.registry)
  }

  /// Reviews and ratings
  pub fn reviews(&self) -> ReviewsEndpoints<'_> {
    ReviewsEndpoints::new(&self.transport)
  }

  /// Usage, users, events and external accounts
  pub fn account(&self) -> AccountEndpoints<'_> {
    AccountEndpoints::new(&self.transport)
  }

  /// Reference data
  pub fn data(&self) -> DataEndpoints<'_> {
    DataEndpoints::new(&self.transport)
  }
}

impl std::fmt::Debug for AppFiguresClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AppFiguresClient")
      .field("transport", &self.transport)
      .field("products", &self.registry.len())
      .finish()
  }
}

fn non_empty(field: &str, value: String) -> Result<String> {
  if value.trim().is_empty() {
    Err(Error::invalid(format!("{field} cannot be empty")))
  } else {
    Ok(value)
  }
}
