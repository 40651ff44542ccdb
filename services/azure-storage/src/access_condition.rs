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

use azsign_core::time::{format_http_date, parse_http_date, DateTime};
use azsign_core::{Error, Result};
use http::header::{HeaderName, IF_MATCH, IF_MODIFIED_SINCE, IF_NONE_MATCH, IF_UNMODIFIED_SINCE};
use http::{HeaderMap, HeaderValue};

use crate::constants::*;

/// Wildcard ETag, matches any existing resource.
pub const ETAG_WILDCARD: &str = "*";

/// The single precondition carried by an [`AccessCondition`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Condition {
    /// No precondition.
    #[default]
    None,
    /// Proceed only if the resource ETag equals this normalized ETag, or it is `*`.
    IfMatch(String),
    /// Proceed only if the resource ETag differs from this normalized ETag.
    IfNoneMatch(String),
    /// Proceed only if the resource was modified strictly after this time.
    IfModifiedSince(DateTime),
    /// Proceed only if the resource was not modified after this time.
    IfUnmodifiedSince(DateTime),
}

/// Access condition of a storage operation.
///
/// Holds at most one ETag or date precondition plus an optional lease id.
/// Values are validated at construction, so applying a condition to headers
/// never sends an empty or malformed conditional header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessCondition {
    condition: Condition,
    lease_id: Option<String>,
}

/// Header names used when applying a condition.
struct ConditionHeaders {
    if_match: HeaderName,
    if_none_match: HeaderName,
    if_modified_since: HeaderName,
    if_unmodified_since: HeaderName,
    lease_id: HeaderName,
}

const DESTINATION_HEADERS: ConditionHeaders = ConditionHeaders {
    if_match: IF_MATCH,
    if_none_match: IF_NONE_MATCH,
    if_modified_since: IF_MODIFIED_SINCE,
    if_unmodified_since: IF_UNMODIFIED_SINCE,
    lease_id: X_MS_LEASE_ID,
};

const SOURCE_HEADERS: ConditionHeaders = ConditionHeaders {
    if_match: X_MS_SOURCE_IF_MATCH,
    if_none_match: X_MS_SOURCE_IF_NONE_MATCH,
    if_modified_since: X_MS_SOURCE_IF_MODIFIED_SINCE,
    if_unmodified_since: X_MS_SOURCE_IF_UNMODIFIED_SINCE,
    lease_id: X_MS_SOURCE_LEASE_ID,
};

impl AccessCondition {
    /// Condition without any precondition or lease.
    pub fn none() -> Self {
        Self::default()
    }

    /// `If-Match` on the given ETag.
    pub fn if_match(etag: &str) -> Result<Self> {
        Ok(Self::from(Condition::IfMatch(normalize_etag(etag)?)))
    }

    /// `If-None-Match` on the given ETag.
    pub fn if_none_match(etag: &str) -> Result<Self> {
        Ok(Self::from(Condition::IfNoneMatch(normalize_etag(etag)?)))
    }

    /// Proceed only if the resource exists: `If-Match: *`.
    pub fn if_exists() -> Self {
        Self::from(Condition::IfMatch(ETAG_WILDCARD.to_string()))
    }

    /// Proceed only if the resource does not exist: `If-None-Match: *`.
    ///
    /// Only the service honors the wildcard here, see [`crate::verify`].
    pub fn if_not_exists() -> Self {
        Self::from(Condition::IfNoneMatch(ETAG_WILDCARD.to_string()))
    }

    /// `If-Modified-Since` the given time.
    pub fn if_modified_since(time: DateTime) -> Self {
        Self::from(Condition::IfModifiedSince(time))
    }

    /// `If-Unmodified-Since` the given time.
    pub fn if_unmodified_since(time: DateTime) -> Self {
        Self::from(Condition::IfUnmodifiedSince(time))
    }

    /// `If-Modified-Since` an http date like `Sun, 11 Oct 2009 21:49:13 GMT`.
    pub fn if_modified_since_str(date: &str) -> Result<Self> {
        Ok(Self::if_modified_since(parse_condition_date(date)?))
    }

    /// `If-Unmodified-Since` an http date like `Sun, 11 Oct 2009 21:49:13 GMT`.
    pub fn if_unmodified_since_str(date: &str) -> Result<Self> {
        Ok(Self::if_unmodified_since(parse_condition_date(date)?))
    }

    /// Lease requirement only.
    pub fn lease(lease_id: &str) -> Result<Self> {
        Self::none().with_lease_id(lease_id)
    }

    /// Attach a lease id to this condition.
    pub fn with_lease_id(mut self, lease_id: &str) -> Result<Self> {
        if lease_id.is_empty() || !lease_id.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(Error::condition_malformed(format!(
                "lease id '{lease_id}' is not a valid header value"
            )));
        }

        self.lease_id = Some(lease_id.to_string());
        Ok(self)
    }

    /// The precondition.
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// The lease id, if any.
    pub fn lease_id(&self) -> Option<&str> {
        self.lease_id.as_deref()
    }

    /// Check if neither a precondition nor a lease is set.
    pub fn is_empty(&self) -> bool {
        self.condition == Condition::None && self.lease_id.is_none()
    }

    /// Apply the condition to a destination request with the standard
    /// `If-*` headers and `x-ms-lease-id`.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        self.apply_with(headers, &DESTINATION_HEADERS)
    }

    /// Apply the condition to the source of a copy with the
    /// `x-ms-source-if-*` headers and `x-ms-source-lease-id`.
    pub fn apply_source(&self, headers: &mut HeaderMap) -> Result<()> {
        self.apply_with(headers, &SOURCE_HEADERS)
    }

    /// Apply only the lease id as `x-ms-lease-id`.
    pub fn apply_lease(&self, headers: &mut HeaderMap) -> Result<()> {
        if let Some(lease_id) = &self.lease_id {
            headers.insert(X_MS_LEASE_ID, HeaderValue::from_str(lease_id)?);
        }
        Ok(())
    }

    fn apply_with(&self, headers: &mut HeaderMap, names: &ConditionHeaders) -> Result<()> {
        let (name, value) = match &self.condition {
            Condition::None => (None, String::new()),
            Condition::IfMatch(etag) => (Some(&names.if_match), etag.clone()),
            Condition::IfNoneMatch(etag) => (Some(&names.if_none_match), etag.clone()),
            Condition::IfModifiedSince(t) => {
                (Some(&names.if_modified_since), format_http_date(*t))
            }
            Condition::IfUnmodifiedSince(t) => {
                (Some(&names.if_unmodified_since), format_http_date(*t))
            }
        };
        if let Some(name) = name {
            headers.insert(name.clone(), HeaderValue::from_str(&value)?);
        }

        if let Some(lease_id) = &self.lease_id {
            headers.insert(names.lease_id.clone(), HeaderValue::from_str(lease_id)?);
        }

        Ok(())
    }
}

impl From<Condition> for AccessCondition {
    fn from(condition: Condition) -> Self {
        Self {
            condition,
            lease_id: None,
        }
    }
}

/// Normalize a caller supplied ETag.
///
/// - `*` is kept as the wildcard.
/// - An already quoted ETag (strong or `W/` weak) is kept.
/// - Anything else is wrapped in double quotes.
///
/// Empty ETags, embedded quotes and characters outside visible ASCII are
/// rejected.
pub fn normalize_etag(etag: &str) -> Result<String> {
    let malformed = || Error::condition_malformed(format!("etag '{etag}' is malformed"));

    if etag.is_empty() || !etag.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(malformed());
    }
    if etag == ETAG_WILDCARD {
        return Ok(etag.to_string());
    }

    let opaque = etag.strip_prefix("W/").unwrap_or(etag);
    match opaque
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    {
        Some(inner) if !inner.contains('"') => Ok(etag.to_string()),
        Some(_) => Err(malformed()),
        None if etag.contains('"') => Err(malformed()),
        None => Ok(quote_etag(etag)),
    }
}

/// Wrap an ETag in double quotes unless it is quoted already or `*`.
///
/// A weak `W/"..."` ETag counts as quoted.
pub(crate) fn quote_etag(etag: &str) -> String {
    let opaque = etag.strip_prefix("W/").unwrap_or(etag);
    if etag == ETAG_WILDCARD || is_quoted(opaque) {
        etag.to_string()
    } else {
        format!("\"{etag}\"")
    }
}

fn is_quoted(etag: &str) -> bool {
    etag.len() >= 2 && etag.starts_with('"') && etag.ends_with('"')
}

fn parse_condition_date(date: &str) -> Result<DateTime> {
    parse_http_date(date).map_err(|e| {
        Error::condition_malformed(format!("'{date}' is not a valid http date")).with_source(e)
    })
}
