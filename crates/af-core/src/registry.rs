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

//! Client-side registry of the caller's products
//!
//! appfigures identifies products by numeric id. Callers register the ids they
//! care about under symbolic keys, and several endpoints refuse to build a
//! request for an id that was never registered. Nothing here talks to the
//! network; the registry is only ever filled by the caller.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt::Display;

/// Symbolic key -> product id mapping with an id index for membership checks
#[derive(Debug, Clone, Default)]
pub struct ProductRegistry {
  by_key: HashMap<String, String>,
  // id -> number of keys currently mapped to it
  ids: HashMap<String, usize>,
}

impl ProductRegistry {
  /// Create an empty registry
  pub fn new() -> Self {
    Self::default()
  }

  /// Map `key` to the string form of `id`, replacing any previous mapping
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidArgument`] if either argument is empty.
  pub fn register(&mut self, key: impl Into<String>, id: impl Display) -> Result<()> {
    let key = key.into();
    let id = id.to_string();

    if key.trim().is_empty() || id.trim().is_empty() {
      return Err(Error::invalid(format!(
        "Product key and id cannot be empty. ({key:?}, {id:?})"
      )));
    }

    if let Some(previous) = self.by_key.insert(key, id.clone()) {
      self.release(&previous);
    }
    *self.ids.entry(id).or_insert(0) += 1;
    Ok(())
  }

  /// Remove every registered product
  pub fn clear(&mut self) {
    self.by_key.clear();
    self.ids.clear();
  }

  /// Registered keys, in no particular order
  pub fn keys(&self) -> Vec<&str> {
    self.by_key.keys().map(String::as_str).collect()
  }

  /// Product id registered under `key`
  pub fn get(&self, key: &str) -> Option<&str> {
    self.by_key.get(key).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.by_key.len()
  }

  pub fn is_empty(&self) -> bool {
    self.by_key.is_empty()
  }

  /// Whether `id` is a positive numeric id registered under some key
  ///
  /// The comparison is on the string form: `"012"` does not match a
  /// registered `"12"`.
  pub fn contains_id(&self, id: &str) -> bool {
    is_positive_id(id) && self.ids.contains_key(id)
  }

  /// Return `id` if it is registered, otherwise an `InvalidArgument` error
  pub fn require_registered<'a>(&self, id: &'a str) -> Result<&'a str> {
    if self.contains_id(id) {
      Ok(id)
    } else {
      Err(Error::invalid(format!("Product id {id:?} is not a registered product")))
    }
  }

  fn release(&mut self, id: &str) {
    if let Some(count) = self.ids.get_mut(id) {
      *count -= 1;
      if *count == 0 {
        self.ids.remove(id);
      }
    }
  }
}

fn is_positive_id(id: &str) -> bool {
  matches!(id.parse::<u64>(), Ok(n) if n > 0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_register_and_lookup() {
    let mut registry = ProductRegistry::new();
    registry.register("my_app", 40338).unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("my_app"), Some("40338"));
    assert!(registry.contains_id("40338"));
    assert_eq!(registry.keys(), vec!["my_app"]);
  }

  #[test]
  fn test_register_rejects_empty_arguments() {
    let mut registry = ProductRegistry::new();
    assert!(matches!(registry.register("", 1), Err(Error::InvalidArgument(_))));
    assert!(matches!(registry.register("app", ""), Err(Error::InvalidArgument(_))));
    assert!(registry.is_empty());
  }

  #[test]
  fn test_register_overwrites_existing_key() {
    let mut registry = ProductRegistry::new();
    registry.register("app", 100).unwrap();
    registry.register("app", 200).unwrap();

    assert_eq!(registry.len(), 1);
    assert!(!registry.contains_id("100"));
    assert!(registry.contains_id("200"));
  }

  #[test]
  fn test_shared_id_survives_single_overwrite() {
    let mut registry = ProductRegistry::new();
    registry.register("free", 100).unwrap();
    registry.register("alias", 100).unwrap();
    registry.register("alias", 300).unwrap();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains_id("100"));
    assert!(registry.contains_id("300"));
  }

  #[test]
  fn test_clear() {
    let mut registry = ProductRegistry::new();
    registry.register("a", 1).unwrap();
    registry.register("b", 2).unwrap();
    registry.clear();
    assert_eq!(registry.len(), 0);
    assert!(!registry.contains_id("1"));

    registry.clear();
    assert!(registry.is_empty());
  }

  #[test]
  fn test_non_positive_and_octal_looking_ids() {
    let mut registry = ProductRegistry::new();
    registry.register("zero", 0).unwrap();
    registry.register("twelve", 12).unwrap();

    assert!(!registry.contains_id("0"));
    assert!(!registry.contains_id("-12"));
    assert!(!registry.contains_id("012"));
    assert!(!registry.contains_id("abc"));
    assert!(registry.contains_id("12"));
  }

  #[test]
  fn test_require_registered() {
    let mut registry = ProductRegistry::new();
    registry.register("app", 42).unwrap();
    assert_eq!(registry.require_registered("42").unwrap(), "42");
    assert!(matches!(registry.require_registered("43"), Err(Error::InvalidArgument(_))));
  }
}
