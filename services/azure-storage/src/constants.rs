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

// Headers used in azure services.
pub const X_MS_LEASE_ID: HeaderName = HeaderName::from_static("x-ms-lease-id");
pub const X_MS_SOURCE_LEASE_ID: HeaderName = HeaderName::from_static("x-ms-source-lease-id");
pub const X_MS_SOURCE_IF_MATCH: HeaderName = HeaderName::from_static("x-ms-source-if-match");
pub const X_MS_SOURCE_IF_NONE_MATCH: HeaderName =
    HeaderName::from_static("x-ms-source-if-none-match");
pub const X_MS_SOURCE_IF_MODIFIED_SINCE: HeaderName =
    HeaderName::from_static("x-ms-source-if-modified-since");
pub const X_MS_SOURCE_IF_UNMODIFIED_SINCE: HeaderName =
    HeaderName::from_static("x-ms-source-if-unmodified-since");
pub const CONTENT_MD5: HeaderName = HeaderName::from_static("content-md5");

/// Prefix of the headers that take part in the canonicalized headers.
pub const X_MS_PREFIX: &str = "x-ms-";

/// Scheme name of the Authorization header.
pub const SHARED_KEY_LITE: &str = "SharedKeyLite";

// Env values used in azure services.
pub const AZURE_STORAGE_ACCOUNT_NAME: &str = "AZURE_STORAGE_ACCOUNT_NAME";
pub const AZURE_STORAGE_ACCOUNT_KEY: &str = "AZURE_STORAGE_ACCOUNT_KEY";
pub const AZURE_STORAGE_CONNECTION_STRING: &str = "AZURE_STORAGE_CONNECTION_STRING";
pub const AZBLOB_ENDPOINT: &str = "AZBLOB_ENDPOINT";

// Azurite defaults.
pub const AZURITE_DEFAULT_STORAGE_ACCOUNT_NAME: &str = "devstoreaccount1";
pub const AZURITE_DEFAULT_STORAGE_ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";
pub const AZURITE_DEFAULT_BLOB_URI: &str = "http://127.0.0.1:10000";
