pub mod account;
pub mod data;
pub mod featured;
pub mod products;
pub mod ranks;
pub mod reports;
pub mod reviews;

use crate::transport::Transport;
use af_core::types::QueryParams;
use af_core::{ApiResponse, Resource, Result};

/// Path suffix for resources addressed without extra segments
pub(crate) const NO_SEGMENTS: &[&str] = &[];

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub(crate) trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Transport;

  /// Build the URL for `resource` plus `extra` segments and GET it
  async fn fetch<S: AsRef<str>>(
    &self,
    resource: Resource,
    extra: &[S],
    params: &QueryParams,
  ) -> Result<ApiResponse> {
    let url = self.transport().endpoint_url(resource, extra)?;
    self.transport().perform_get(&url, params).await
  }
}

/// Macro to implement the EndpointBase trait for endpoint structs
///
/// The `registry` arm is for groups that validate product ids and so also
/// borrow the caller's [`af_core::ProductRegistry`].
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl<'a> $struct_name<'a> {
      /// Create a new endpoints instance
      pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
      }
    }

    impl_endpoint_base!(@base $struct_name);
  };
  ($struct_name:ident, registry) => {
    impl<'a> $struct_name<'a> {
      /// Create a new endpoints instance
      pub fn new(transport: &'a Transport, registry: &'a ProductRegistry) -> Self {
        Self { transport, registry }
      }
    }

    impl_endpoint_base!(@base $struct_name);
  };
  (@base $struct_name:ident) => {
    impl EndpointBase for $struct_name<'_> {
      fn transport(&self) -> &Transport {
        self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

#[cfg(test)]
mod tests {
  use super::*;

  struct Plain<'a> {
    transport: &'a Transport,
  }

  impl_endpoint_base!(Plain);

  #[test]
  fn test_endpoint_base_transport() {
    let transport = Transport::new_mock();
    let plain = Plain::new(&transport);

    assert_eq!(plain.transport().base_url(), "https://mock.appfigures.com/v2");
  }
}
