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

//! Azure Storage Shared Key Lite signer and access conditions.
//!
//! This crate provides:
//! - Shared Key Lite request signing via [`RequestSigner`]
//! - Conditional request headers via [`AccessCondition`]
//! - Client side precondition checks via [`verify`] and [`check`]
//!
//! # Example
//!
//! ```rust,no_run
//! use azsign_azure_storage::{check, AccessCondition, Config, RequestSigner, ResourceState};
//! use azsign_core::{OsEnv, Result};
//!
//! fn main() -> Result<()> {
//!     // Load account name and key from AZURE_STORAGE_* env.
//!     let cred = Config::default().from_env(&OsEnv)?.credential()?;
//!
//!     // Only overwrite the blob if nobody changed it since we read it.
//!     let cond = AccessCondition::if_match("0x8CB171BA9E94B0B")?;
//!
//!     let (mut parts, body) = http::Request::put(
//!         "https://myaccount.blob.core.windows.net/mycontainer/myblob",
//!     )
//!     .header("x-ms-version", "2009-09-19")
//!     .body(())
//!     .expect("request must be valid")
//!     .into_parts();
//!     cond.apply(&mut parts.headers)?;
//!
//!     RequestSigner::new().sign_parts(&mut parts, &cred)?;
//!     let _req = http::Request::from_parts(parts, body);
//!
//!     // Or evaluate the condition against a snapshot we already hold.
//!     let state = ResourceState::new("0x8CB171BA9E94B0B", azsign_core::time::now());
//!     check(&cond, &state)?;
//!
//!     Ok(())
//! }
//! ```

mod constants;

mod access_condition;
pub use access_condition::{normalize_etag, AccessCondition, Condition, ETAG_WILDCARD};

mod config;
pub use config::{Config, Service};

mod connection_string;

mod credential;
pub use credential::Credential;

mod evaluate;
pub use evaluate::{check, verify, ResourceState};

mod resource;
pub use resource::{canonicalized_resource, canonicalized_resource_from_uri};

mod sign_request;
pub use sign_request::{RequestSigner, SignedHeaders};
