//! Argument types and per-endpoint validation rules
//!
//! Every "mode" an endpoint accepts is a closed enum. Text coming from outside
//! (config files, command lines) goes through `FromStr`, which is the only
//! place an unknown mode can appear and is rejected with
//! [`Error::InvalidArgument`].

use crate::error::{Error, Result};
use crate::registry::ProductRegistry;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Free-form query arguments, appended to the request URL as-is
pub type QueryParams = BTreeMap<String, String>;

/// Time resolution for rank data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
  #[default]
  Daily,
  Hourly,
}

impl std::fmt::Display for Granularity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Granularity::Daily => write!(f, "daily"),
      Granularity::Hourly => write!(f, "hourly"),
    }
  }
}

impl FromStr for Granularity {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "daily" => Ok(Granularity::Daily),
      "hourly" => Ok(Granularity::Hourly),
      other => Err(Error::invalid(format!("Unknown ranks granularity: {other:?}"))),
    }
  }
}

/// Which featured report to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeaturedMode {
  /// Featured summary for a date range
  Summary,
  /// Full featured detail for one product over a date range
  Full,
  /// Featured counts, filtered through the free-form arguments
  Counts,
  /// Featured history of one product in one featured category
  History,
}

impl std::fmt::Display for FeaturedMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FeaturedMode::Summary => write!(f, "summary"),
      FeaturedMode::Full => write!(f, "full"),
      FeaturedMode::Counts => write!(f, "counts"),
      FeaturedMode::History => write!(f, "history"),
    }
  }
}

impl FromStr for FeaturedMode {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "summary" => Ok(FeaturedMode::Summary),
      "full" => Ok(FeaturedMode::Full),
      "counts" => Ok(FeaturedMode::Counts),
      "history" => Ok(FeaturedMode::History),
      other => Err(Error::invalid(format!("Unknown featured mode: {other:?}"))),
    }
  }
}

/// Reviews listing or just their count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewsMode {
  #[default]
  All,
  Count,
}

impl ReviewsMode {
  pub fn segments(&self) -> &'static [&'static str] {
    match self {
      ReviewsMode::All => &[],
      ReviewsMode::Count => &["count"],
    }
  }
}

impl FromStr for ReviewsMode {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "" => Ok(ReviewsMode::All),
      "count" => Ok(ReviewsMode::Count),
      other => Err(Error::invalid(format!("Unknown reviews mode: {other:?}"))),
    }
  }
}

/// Report archive selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchiveMode {
  /// List of archived reports
  #[default]
  All,
  /// Most recent archived reports
  Latest,
  /// Raw archive of a single product; needs a registered product id
  Raw,
}

impl ArchiveMode {
  /// Path segments below `/archive`
  pub fn segments(&self, id: Option<&str>, registry: &ProductRegistry) -> Result<Vec<String>> {
    match self {
      ArchiveMode::All => Ok(Vec::new()),
      ArchiveMode::Latest => Ok(vec!["latest".to_string()]),
      ArchiveMode::Raw => {
        let id = id.ok_or_else(|| Error::invalid("Raw archive requires a product id"))?;
        let id = registry.require_registered(id)?;
        Ok(vec!["raw".to_string(), id.to_string()])
      }
    }
  }
}

impl FromStr for ArchiveMode {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "" => Ok(ArchiveMode::All),
      "latest" => Ok(ArchiveMode::Latest),
      "raw" => Ok(ArchiveMode::Raw),
      other => Err(Error::invalid(format!("Unknown archive mode: {other:?}"))),
    }
  }
}

/// Reference lists served under `/data`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataResource {
  Categories,
  Countries,
  Currencies,
  Languages,
  Stores,
}

impl std::fmt::Display for DataResource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DataResource::Categories => write!(f, "categories"),
      DataResource::Countries => write!(f, "countries"),
      DataResource::Currencies => write!(f, "currencies"),
      DataResource::Languages => write!(f, "languages"),
      DataResource::Stores => write!(f, "stores"),
    }
  }
}

/// Arguments for `/ranks`
#[derive(Debug, Clone, Default)]
pub struct RanksQuery {
  /// Semicolon separated product ids, e.g. `"123;456"`
  pub ids: String,
  pub granularity: Granularity,
  /// Set together with `end_date`; both unset means yesterday
  pub start_date: Option<NaiveDate>,
  pub end_date: Option<NaiveDate>,
  pub params: QueryParams,
}

impl RanksQuery {
  pub fn new(ids: impl Into<String>) -> Self {
    Self { ids: ids.into(), ..Self::default() }
  }

  pub fn granularity(mut self, granularity: Granularity) -> Self {
    self.granularity = granularity;
    self
  }

  pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
    self.start_date = Some(start);
    self.end_date = Some(end);
    self
  }

  pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.params.insert(key.into(), value.into());
    self
  }

  /// `:ids/:granularity/:start/:end`; with no dates the window is the day before `today`
  pub fn segments(&self, today: NaiveDate) -> Result<Vec<String>> {
    let ids = self.ids.trim();
    if ids.is_empty() {
      return Err(Error::invalid("Ranks requires product ids"));
    }
    if ids.split(';').any(|id| id.trim().is_empty()) {
      return Err(Error::invalid(format!("Malformed ranks ids: {ids:?}")));
    }

    let (start, end) = match (self.start_date, self.end_date) {
      (Some(start), Some(end)) => (start, end),
      (None, None) => {
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        (yesterday, yesterday)
      }
      _ => return Err(Error::invalid("Ranks start and end dates must be given together")),
    };

    Ok(vec![ids.to_string(), self.granularity.to_string(), start.to_string(), end.to_string()])
  }
}

/// Arguments for `/featured`; which fields are needed depends on the mode
#[derive(Debug, Clone, Default)]
pub struct FeaturedQuery {
  pub start_date: Option<NaiveDate>,
  pub end_date: Option<NaiveDate>,
  pub product_id: Option<String>,
  pub featured_category_id: Option<u64>,
  pub params: QueryParams,
}

impl FeaturedQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
    self.start_date = Some(start);
    self.end_date = Some(end);
    self
  }

  pub fn start_date(mut self, start: NaiveDate) -> Self {
    self.start_date = Some(start);
    self
  }

  pub fn end_date(mut self, end: NaiveDate) -> Self {
    self.end_date = Some(end);
    self
  }

  pub fn product_id(mut self, id: impl std::fmt::Display) -> Self {
    self.product_id = Some(id.to_string());
    self
  }

  pub fn featured_category_id(mut self, id: u64) -> Self {
    self.featured_category_id = Some(id);
    self
  }

  pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.params.insert(key.into(), value.into());
    self
  }

  /// Path segments below `/featured` for `mode`
  ///
  /// # Errors
  ///
  /// - `Summary`: start and end dates are required
  /// - `Full`: dates plus a registered product id
  /// - `Counts`: `params` must carry an `end` entry
  /// - `History`: a registered product id and a nonzero featured category id
  pub fn segments(&self, mode: FeaturedMode, registry: &ProductRegistry) -> Result<Vec<String>> {
    let mode_segment = mode.to_string();
    match mode {
      FeaturedMode::Summary => {
        let (start, end) = self.require_dates(mode)?;
        Ok(vec![mode_segment, start.to_string(), end.to_string()])
      }
      FeaturedMode::Full => {
        let (start, end) = self.require_dates(mode)?;
        let id = self.require_product(mode, registry)?;
        Ok(vec![mode_segment, id.to_string(), start.to_string(), end.to_string()])
      }
      FeaturedMode::Counts => {
        if !self.params.contains_key("end") {
          return Err(Error::invalid("Featured counts requires an 'end' argument"));
        }
        Ok(vec![mode_segment])
      }
      FeaturedMode::History => {
        let id = self.require_product(mode, registry)?;
        let category = match self.featured_category_id {
          Some(category) if category != 0 => category,
          _ => {
            return Err(Error::invalid("Featured history requires a nonzero featured category id"))
          }
        };
        Ok(vec![mode_segment, id.to_string(), category.to_string()])
      }
    }
  }

  fn require_dates(&self, mode: FeaturedMode) -> Result<(NaiveDate, NaiveDate)> {
    match (self.start_date, self.end_date) {
      (Some(start), Some(end)) => Ok((start, end)),
      _ => Err(Error::invalid(format!("Featured {mode} requires both a start and an end date"))),
    }
  }

  fn require_product<'a>(&'a self, mode: FeaturedMode, registry: &ProductRegistry) -> Result<&'a str> {
    let id = self
      .product_id
      .as_deref()
      .ok_or_else(|| Error::invalid(format!("Featured {mode} requires a product id")))?;
    registry.require_registered(id)
  }
}
