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

use http::header::HeaderName;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;

/// Signing view of an outbound request.
///
/// Created fresh for every call and consumed by a signer. The
/// canonicalized resource is metadata used only while signing, it is never
/// sent as a header.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method, kept exactly as supplied.
    pub method: Method,
    /// HTTP headers.
    pub headers: HeaderMap,
    /// Canonicalized resource like `/myaccount/mycontainer?comp=list`.
    pub canonicalized_resource: Option<String>,
}

impl SigningRequest {
    /// Create a signing request without headers.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            canonicalized_resource: None,
        }
    }

    /// Build a signing request from `http::request::Parts`.
    ///
    /// Method and headers are copied, the parts are left untouched.
    pub fn from_parts(parts: &http::request::Parts, canonicalized_resource: Option<String>) -> Self {
        Self {
            method: parts.method.clone(),
            headers: parts.headers.clone(),
            canonicalized_resource,
        }
    }

    /// Append a header.
    ///
    /// Header names are case-insensitive; a repeated name keeps the earlier
    /// value first.
    pub fn with_header(mut self, name: &str, value: &str) -> crate::Result<Self> {
        let name: HeaderName = name.parse()?;
        let value = HeaderValue::from_str(value)?;
        self.headers.append(name, value);
        Ok(self)
    }

    /// Set the canonicalized resource.
    pub fn with_canonicalized_resource(mut self, resource: impl Into<String>) -> Self {
        self.canonicalized_resource = Some(resource.into());
        self
    }

    /// Get the canonicalized resource, empty if unset.
    #[inline]
    pub fn canonicalized_resource_or_default(&self) -> &str {
        self.canonicalized_resource.as_deref().unwrap_or_default()
    }

    /// Get header value by name.
    ///
    /// Returns empty string if header not found.
    #[inline]
    pub fn header_get_or_default(&self, key: &HeaderName) -> crate::Result<&str> {
        match self.headers.get(key) {
            Some(v) => Ok(v.to_str()?),
            None => Ok(""),
        }
    }

    /// Get headers whose name starts with the given prefix.
    ///
    /// Names are lower-cased and only the first value of a multi-valued
    /// header is taken.
    pub fn header_to_vec_with_prefix(&self, prefix: &str) -> crate::Result<Vec<(String, String)>> {
        let prefix = prefix.to_ascii_lowercase();

        self.headers
            .keys()
            .filter(|k| k.as_str().to_ascii_lowercase().starts_with(&prefix))
            .map(|k| -> crate::Result<(String, String)> {
                let v = match self.headers.get(k) {
                    Some(v) => v.to_str()?,
                    None => "",
                };
                Ok((k.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect()
    }

    /// Convert sorted headers to string.
    ///
    /// ```shell
    /// [(a, b), (c, d)] => "a:b\nc:d"
    /// ```
    pub fn header_to_string(mut headers: Vec<(String, String)>, sep: &str, join: &str) -> String {
        let mut s = String::with_capacity(16);

        // Sort via header name.
        headers.sort();

        for (idx, (k, v)) in headers.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(&k);
            s.push_str(sep);
            s.push_str(&v);
        }

        s
    }
}
