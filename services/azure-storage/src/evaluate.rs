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

//! Client side evaluation of access conditions.
//!
//! The service runs the same checks. Evaluating locally lets a caller
//! reject an operation early against a snapshot it already holds.

use azsign_core::time::{parse_http_date, DateTime};
use azsign_core::{Error, Result};
use http::header::{ETAG, LAST_MODIFIED};
use http::HeaderMap;
use log::debug;

use crate::access_condition::quote_etag;
use crate::{AccessCondition, Condition};

/// Snapshot of a resource's current ETag and last-modified time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState {
    etag: String,
    last_modified: DateTime,
}

impl ResourceState {
    /// Create a new resource state.
    ///
    /// The ETag is quoted the same way condition ETags are, so `abc` and
    /// `"abc"` describe the same version.
    pub fn new(etag: &str, last_modified: DateTime) -> Self {
        Self {
            etag: quote_etag(etag),
            last_modified,
        }
    }

    /// Read the state from the `ETag` and `Last-Modified` headers of a
    /// response.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        let etag = headers
            .get(ETAG)
            .ok_or_else(|| Error::condition_malformed("response has no ETag header"))?
            .to_str()
            .map_err(|e| Error::condition_malformed("ETag header is not visible ASCII").with_source(e))?;
        let last_modified = headers
            .get(LAST_MODIFIED)
            .ok_or_else(|| Error::condition_malformed("response has no Last-Modified header"))?
            .to_str()
            .map_err(|e| {
                Error::condition_malformed("Last-Modified header is not visible ASCII")
                    .with_source(e)
            })?;
        let last_modified = parse_http_date(last_modified).map_err(|e| {
            Error::condition_malformed(format!("'{last_modified}' is not a valid http date"))
                .with_source(e)
        })?;

        Ok(Self::new(etag, last_modified))
    }

    /// Current ETag, quoted.
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Current last-modified time.
    pub fn last_modified(&self) -> DateTime {
        self.last_modified
    }
}

/// Decide whether an operation guarded by `condition` may proceed against
/// `state`.
///
/// - `IfMatch` passes on an equal ETag or the `*` wildcard.
/// - `IfNoneMatch` fails on an equal ETag. `*` is compared literally.
/// - `IfModifiedSince` passes only if the resource changed strictly after
///   the given time.
/// - `IfUnmodifiedSince` fails only if the resource changed strictly after
///   the given time.
///
/// The lease id is not evaluated here, the service validates it.
pub fn verify(condition: &AccessCondition, state: &ResourceState) -> bool {
    match condition.condition() {
        Condition::None => true,
        Condition::IfMatch(etag) => etag == "*" || *etag == state.etag,
        Condition::IfNoneMatch(etag) => *etag != state.etag,
        Condition::IfModifiedSince(t) => state.last_modified > *t,
        Condition::IfUnmodifiedSince(t) => state.last_modified <= *t,
    }
}

/// Like [`verify`], but reports an unmet condition as
/// [`azsign_core::ErrorKind::PreconditionFailed`].
pub fn check(condition: &AccessCondition, state: &ResourceState) -> Result<()> {
    if verify(condition, state) {
        return Ok(());
    }

    debug!("precondition failed: {condition:?} against {state:?}");
    Err(Error::precondition_failed(format!(
        "condition {:?} does not hold for etag {} modified at {}",
        condition.condition(),
        state.etag,
        state.last_modified
    )))
}
