pub mod config;
pub mod error;
pub mod registry;
pub mod response;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use registry::ProductRegistry;
pub use response::ApiResponse;

/// The appfigures API resources this client can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
  // Products
  Products,
  ProductsMine,

  // Reports
  Sales,
  Revenue,
  Ads,
  Archive,

  // Rankings and featuring
  Ranks,
  Featured,

  // Feedback
  Reviews,
  Ratings,

  // Account
  Events,
  Users,
  Usage,
  ExternalAccounts,

  // Reference data
  Data,
}

impl Resource {
  /// Path segments below the API root
  pub fn segments(&self) -> &'static [&'static str] {
    match self {
      Resource::Products => &["products"],
      Resource::ProductsMine => &["products", "mine"],
      Resource::Sales => &["reports", "sales"],
      Resource::Revenue => &["reports", "revenue"],
      Resource::Ads => &["reports", "ads"],
      Resource::Archive => &["archive"],
      Resource::Ranks => &["ranks"],
      Resource::Featured => &["featured"],
      Resource::Reviews => &["reviews"],
      Resource::Ratings => &["ratings"],
      Resource::Events => &["events"],
      Resource::Users => &["users"],
      Resource::Usage => &["usage"],
      Resource::ExternalAccounts => &["external_accounts"],
      Resource::Data => &["data"],
    }
  }
}

impl std::fmt::Display for Resource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for segment in self.segments() {
      write!(f, "/{segment}")?;
    }
    Ok(())
  }
}

/// Base URL for the appfigures API
pub const APPFIGURES_BASE_URL: &str = "https://api.appfigures.com/v2";

/// Header carrying the application key on every request
pub const CLIENT_KEY_HEADER: &str = "X-Client-Key";

/// Response header with the account's request ceiling
pub const REQUEST_LIMIT_HEADER: &str = "X-Request-Limit";

/// Response header with the requests used so far
pub const REQUEST_USAGE_HEADER: &str = "X-Request-Usage";
