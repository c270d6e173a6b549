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

//! Uniform result of every appfigures request

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status, body and rate-limit counters of one request
///
/// `body` is only populated for a 200 response whose body parsed as JSON.
/// `limit` and `usage` are `None` when the server did not send the
/// corresponding header, so a missing header never reads as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
  pub status: u16,
  pub body: Option<Value>,
  pub limit: Option<u64>,
  pub usage: Option<u64>,
}

impl ApiResponse {
  /// A 200 response with a parsed body
  pub fn is_success(&self) -> bool {
    self.status == 200 && self.body.is_some()
  }

  /// Requests left before the limit, when both counters were reported
  pub fn remaining(&self) -> Option<u64> {
    match (self.limit, self.usage) {
      (Some(limit), Some(usage)) => Some(limit.saturating_sub(usage)),
      _ => None,
    }
  }

  /// Decode the body into a typed value
  ///
  /// Returns `Ok(None)` when there is no body.
  pub fn json<T: DeserializeOwned>(&self) -> Result<Option<T>> {
    match &self.body {
      Some(body) => Ok(Some(T::deserialize(body)?)),
      None => Ok(None),
    }
  }
}
