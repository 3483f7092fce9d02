// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
use serde::{Deserialize, Serialize};

use crate::error::SedonaEwkbError;

/// Default maximum number of points in a ring or rings in a polygon accepted by
/// the decoder.
pub const DEFAULT_MAX_ELEMENTS: usize = 16_777_216;

/// Upper bound on the number of elements reserved up front for a decoded
/// sequence. Larger sequences grow as their elements are actually read.
pub const PREALLOCATION_LIMIT: usize = 1024;

/// Options applied while decoding untrusted WKB
///
/// Point and ring counts are read from the input and would otherwise size
/// allocations directly. `max_elements` rejects any count above the bound;
/// `None` accepts every count the wire format can express.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub max_elements: Option<usize>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_elements: Some(DEFAULT_MAX_ELEMENTS),
        }
    }
}

impl DecodeOptions {
    /// Options that accept any element count
    pub fn unbounded() -> Self {
        Self { max_elements: None }
    }

    /// Options that reject counts above `max_elements`
    pub fn with_max_elements(max_elements: usize) -> Self {
        Self {
            max_elements: Some(max_elements),
        }
    }

    /// Validate a count read from the input and convert it to a length
    pub(crate) fn check_count(&self, count: u64) -> Result<usize, SedonaEwkbError> {
        if let Some(max) = self.max_elements {
            if count > max as u64 {
                log::debug!("Rejecting WKB element count {count} (maximum {max})");
                return Err(SedonaEwkbError::TooManyElements { count, max });
            }
        }

        usize::try_from(count).map_err(|_| SedonaEwkbError::TooManyElements {
            count,
            max: usize::MAX,
        })
    }
}

/// Allocate a vector for `len` decoded elements without trusting `len`
pub(crate) fn sequence_with_capacity<T>(len: usize) -> Vec<T> {
    Vec::with_capacity(len.min(PREALLOCATION_LIMIT))
}
