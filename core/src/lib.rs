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

//! Core components for signing Azure Storage requests.
//!
//! This crate provides the service-agnostic building blocks shared by the
//! azsign service crates.
//!
//! ## Overview
//!
//! - [`SigningRequest`]: the signing view of an outbound HTTP request
//! - [`Error`]: the error type with a distinguishable [`ErrorKind`]
//! - [`Env`]: environment access used when loading configuration
//!
//! ## Example
//!
//! ```
//! use azsign_core::hash::base64_hmac_sha256;
//! use azsign_core::SigningRequest;
//! use http::Method;
//!
//! let req = SigningRequest::new(Method::GET)
//!     .with_header("x-ms-version", "2009-09-19")
//!     .unwrap()
//!     .with_canonicalized_resource("/myaccount/mycontainer?comp=list");
//!
//! let headers = SigningRequest::header_to_string(
//!     req.header_to_vec_with_prefix("x-ms-").unwrap(),
//!     ":",
//!     "\n",
//! );
//! assert_eq!(headers, "x-ms-version:2009-09-19");
//!
//! let signature = base64_hmac_sha256(b"key", headers.as_bytes());
//! assert!(!signature.is_empty());
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: RFC 1123 date formatting and parsing
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;
mod error;
pub use error::{Error, ErrorKind, Result};
mod request;
pub use request::SigningRequest;
