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

//! Time related utils.

use crate::Error;
use chrono::NaiveDateTime;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// RFC 1123 with an explicit `GMT` zone: "Sun, 11 Oct 2009 21:49:13 GMT"
const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into http date: `Sun, 06 Nov 1994 08:49:37 GMT`
///
/// ## Note
///
/// HTTP date is slightly different from RFC2822.
///
/// - Timezone is fixed to GMT.
/// - Day must be 2 digit.
pub fn format_http_date(t: DateTime) -> String {
    t.format(HTTP_DATE).to_string()
}

/// Parse http date like `Sun, 06 Nov 1994 08:49:37 GMT`.
///
/// RFC 2822 dates with a numeric offset are accepted as well and converted
/// to UTC.
pub fn parse_http_date(s: &str) -> crate::Result<DateTime> {
    let s = s.trim();
    if let Ok(t) = NaiveDateTime::parse_from_str(s, HTTP_DATE) {
        return Ok(t.and_utc());
    }

    chrono::DateTime::parse_from_rfc2822(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::unexpected(format!("parse '{s}' into http date failed")).with_source(e))
}
