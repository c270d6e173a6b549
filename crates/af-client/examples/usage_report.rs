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

//! Usage Report Example
//!
//! Loads credentials from the environment (or a `.env` file), registers the
//! products given on the command line and prints:
//! - API usage and remaining request budget
//! - The account's products
//! - Review counts for the registered products
//!
//! ```text
//! APPFIGURES_USERNAME=... APPFIGURES_PASSWORD=... \
//! APPFIGURES_APP_KEY=... APPFIGURES_APP_SECRET=... \
//! cargo run --example usage_report -- 40338 212108
//! ```

use af_client::{AppFiguresClient, ApiResponse, QueryParams, ReviewsMode};
use af_core::Config;
use tracing_subscriber::EnvFilter;

fn report(label: &str, response: &ApiResponse) {
  println!(
    "{:<12} status={} limit={:?} usage={:?} remaining={:?}",
    label,
    response.status,
    response.limit,
    response.usage,
    response.remaining()
  );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  // Load configuration from environment
  let config = Config::from_env().map_err(|e| {
    eprintln!("Failed to load configuration: {e}");
    eprintln!("Set APPFIGURES_USERNAME, APPFIGURES_PASSWORD, APPFIGURES_APP_KEY and APPFIGURES_APP_SECRET");
    e
  })?;

  let mut client = AppFiguresClient::new(config)?;
  for (i, id) in std::env::args().skip(1).enumerate() {
    client.add_product_id(format!("product_{i}"), id)?;
  }

  let usage = client.usage().await?;
  report("usage", &usage);
  if let Some(body) = &usage.body {
    println!("{}", serde_json::to_string_pretty(body)?);
  }

  let mine = client.products().mine(None).await?;
  report("products", &mine);

  if !client.registry().is_empty() {
    let ids: Vec<&str> = client
      .product_keys()
      .into_iter()
      .filter_map(|key| client.registry().get(key))
      .collect();

    let mut params = QueryParams::new();
    params.insert("products".to_string(), ids.join(";"));

    let reviews = client.reviews().reviews(ReviewsMode::Count, &params).await?;
    report("reviews", &reviews);
    if let Some(body) = &reviews.body {
      println!("{body}");
    }
  }

  Ok(())
}
