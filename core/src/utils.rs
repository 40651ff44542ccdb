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

//! Utility functions and types.

use std::fmt::Debug;

/// Redact secrets such as account keys and lease ids in debug output.
///
/// - Absent values print as `NONE`, empty ones as `EMPTY`.
/// - Values shorter than 12 characters are fully masked.
/// - Longer values keep their first and last three characters so that two
///   different keys can still be told apart in logs.
pub struct Redact<'a>(Option<&'a str>);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(Some(value))
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(Some(value.as_str()))
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(v) = self.0 else {
            return f.write_str("NONE");
        };

        match v.len() {
            0 => f.write_str("EMPTY"),
            n if n < 12 || !v.is_char_boundary(3) || !v.is_char_boundary(n - 3) => {
                f.write_str("***")
            }
            n => write!(f, "{}***{}", &v[..3], &v[n - 3..]),
        }
    }
}
