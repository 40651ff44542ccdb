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

//! Canonicalized resource for Shared Key Lite.
//!
//! - [Shared Key Lite and Table service format for 2009-09-19 and later](https://learn.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#constructing-the-canonicalized-resource-string)

use http::Uri;

/// Build `/<account><path>[?comp=<operation>]`.
///
/// `path` is used as encoded on the wire; a missing leading `/` is added.
pub fn canonicalized_resource(account_name: &str, path: &str, comp: Option<&str>) -> String {
    let mut s = String::with_capacity(account_name.len() + path.len() + 16);
    s.push('/');
    s.push_str(account_name);
    if !path.starts_with('/') {
        s.push('/');
    }
    s.push_str(path);

    if let Some(comp) = comp {
        s.push_str("?comp=");
        s.push_str(comp);
    }

    s
}

/// Build the canonicalized resource of a request uri.
///
/// Only the `comp` query parameter is part of a Shared Key Lite resource,
/// every other parameter is ignored.
pub fn canonicalized_resource_from_uri(account_name: &str, uri: &Uri) -> String {
    let comp = uri.query().and_then(|q| {
        form_urlencoded::parse(q.as_bytes())
            .find(|(k, _)| k.eq_ignore_ascii_case("comp"))
            .map(|(_, v)| v.into_owned())
    });

    canonicalized_resource(account_name, uri.path(), comp.as_deref())
}
