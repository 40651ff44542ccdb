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

use std::fmt::Write;

use azsign_core::hash::base64_hmac_sha256;
use azsign_core::time::{format_http_date, now, DateTime};
use azsign_core::{Result, SigningRequest};
use http::header::{AUTHORIZATION, CONTENT_TYPE, DATE};
use http::request::Parts;
use http::{HeaderMap, HeaderValue};
use log::debug;

use crate::constants::*;
use crate::resource::canonicalized_resource_from_uri;
use crate::Credential;

/// RequestSigner that implements Azure Storage Shared Key Lite authorization.
///
/// Signing is pure: it returns the headers to add and leaves the request
/// untouched, see [`SignedHeaders::apply`].
///
/// - [Authorize with Shared Key](https://learn.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key)
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

/// Headers produced by [`RequestSigner::sign`].
#[derive(Debug, Clone)]
pub struct SignedHeaders {
    /// `Date` synthesized because the request had none.
    ///
    /// This exact value took part in the signature and must be sent.
    pub date: Option<HeaderValue>,
    /// `Authorization: SharedKeyLite <account>:<signature>`, marked sensitive.
    pub authorization: HeaderValue,
}

impl SignedHeaders {
    /// Write the headers into an outgoing request.
    pub fn apply(self, headers: &mut HeaderMap) {
        if let Some(date) = self.date {
            headers.insert(DATE, date);
        }
        headers.insert(AUTHORIZATION, self.authorization);
    }
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self { time: None }
    }

    /// Specify the time used when a `Date` header has to be synthesized.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign the request and return the headers to add.
    ///
    /// A missing or empty `Date` header is synthesized from the current time.
    pub fn sign(&self, req: &SigningRequest, cred: &Credential) -> Result<SignedHeaders> {
        let (date, synthesized) = match req.headers.get(DATE) {
            Some(v) if !v.is_empty() => (v.to_str()?.to_string(), None),
            _ => {
                let date = format_http_date(self.time.unwrap_or_else(now));
                let value = HeaderValue::from_str(&date)?;
                (date, Some(value))
            }
        };

        let string_to_sign = self.string_to_sign(req, &date)?;
        let signature = {
            let key = cred.signing_key()?;
            base64_hmac_sha256(&key, string_to_sign.as_bytes())
        };

        let mut authorization = HeaderValue::from_str(&format!(
            "{SHARED_KEY_LITE} {}:{signature}",
            cred.account_name()
        ))?;
        authorization.set_sensitive(true);

        Ok(SignedHeaders {
            date: synthesized,
            authorization,
        })
    }

    /// Sign `http::request::Parts` in place.
    ///
    /// The canonicalized resource is derived from the uri with the
    /// credential's account name.
    pub fn sign_parts(&self, parts: &mut Parts, cred: &Credential) -> Result<()> {
        let resource = canonicalized_resource_from_uri(cred.account_name(), &parts.uri);
        let req = SigningRequest::from_parts(parts, Some(resource));

        self.sign(&req, cred)?.apply(&mut parts.headers);
        Ok(())
    }

    /// Construct string to sign
    ///
    /// ## Format
    ///
    /// ```text
    /// VERB + "\n" +
    /// Content-MD5 + "\n" +
    /// Content-Type + "\n" +
    /// Date + "\n" +
    /// CanonicalizedHeaders +
    /// CanonicalizedResource;
    /// ```
    ///
    /// `date` is the value sent as the `Date` header.
    ///
    /// ## Reference
    ///
    /// - [Blob, Queue, and File services (Shared Key Lite authorization)](https://learn.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#blob-queue-and-file-services-shared-key-lite-authorization)
    pub fn string_to_sign(&self, req: &SigningRequest, date: &str) -> Result<String> {
        let mut s = String::with_capacity(128);

        writeln!(&mut s, "{}", req.method.as_str())?;
        writeln!(&mut s, "{}", req.header_get_or_default(&CONTENT_MD5)?)?;
        writeln!(&mut s, "{}", req.header_get_or_default(&CONTENT_TYPE)?)?;
        writeln!(&mut s, "{date}")?;
        s.push_str(&canonicalize_header(req)?);
        s.push_str(req.canonicalized_resource_or_default());

        debug!("string to sign: {}", &s);

        Ok(s)
    }
}

/// Every `x-ms-*` header as `name:value\n`, sorted by lower-cased name.
///
/// ## Reference
///
/// - [Constructing the canonicalized headers string](https://learn.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#constructing-the-canonicalized-headers-string)
fn canonicalize_header(req: &SigningRequest) -> Result<String> {
    let headers = req.header_to_vec_with_prefix(X_MS_PREFIX)?;
    if headers.is_empty() {
        return Ok(String::new());
    }

    let mut s = SigningRequest::header_to_string(headers, ":", "\n");
    s.push('\n');
    Ok(s)
}
