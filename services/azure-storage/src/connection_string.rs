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

use std::collections::HashMap;

use azsign_core::{Error, Result};

use crate::constants::*;
use crate::{Config, Service};

/// Parses an [Azure connection string][1].
///
/// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
pub(crate) fn parse(conn_str: &str, service: Service) -> Result<Config> {
    let key_values = parse_into_key_values(conn_str)?;

    if service == Service::Blob {
        if let Some(config) = collect_blob_development_config(&key_values) {
            return Ok(config);
        }
    }

    Ok(Config {
        account_name: key_values.get("AccountName").cloned(),
        account_key: key_values.get("AccountKey").cloned(),
        endpoint: collect_endpoint(&key_values, service)?,
    })
}

fn parse_into_key_values(conn_str: &str) -> Result<HashMap<String, String>> {
    conn_str
        .trim()
        .replace('\n', "")
        .split(';')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| -> Result<(String, String)> {
            let (key, value) = field.split_once('=').ok_or_else(|| {
                Error::config_invalid(format!(
                    "invalid connection string, expected '=' in field: {field}"
                ))
            })?;
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Azurite only emulates blob storage, so this is consulted for
/// [`Service::Blob`] only.
fn collect_blob_development_config(key_values: &HashMap<String, String>) -> Option<Config> {
    if key_values.get("UseDevelopmentStorage").map(String::as_str) != Some("true") {
        return None;
    }

    let account_name = key_values
        .get("AccountName")
        .cloned()
        .unwrap_or_else(|| AZURITE_DEFAULT_STORAGE_ACCOUNT_NAME.to_string());
    let account_key = key_values
        .get("AccountKey")
        .cloned()
        .unwrap_or_else(|| AZURITE_DEFAULT_STORAGE_ACCOUNT_KEY.to_string());
    let proxy_uri = key_values
        .get("DevelopmentStorageProxyUri")
        .map(String::as_str)
        .unwrap_or(AZURITE_DEFAULT_BLOB_URI);

    Some(Config {
        endpoint: Some(format!("{proxy_uri}/{account_name}")),
        account_name: Some(account_name),
        account_key: Some(account_key),
    })
}

/// Parses an endpoint from the key-value pairs if possible.
///
/// An explicit `BlobEndpoint`/`FileEndpoint` wins over one built from
/// `AccountName` and `EndpointSuffix`.
fn collect_endpoint(key_values: &HashMap<String, String>, service: Service) -> Result<Option<String>> {
    if let Some(endpoint) = key_values.get(service.endpoint_key()) {
        return Ok(Some(endpoint.clone()));
    }

    let (Some(account_name), Some(endpoint_suffix)) = (
        key_values.get("AccountName"),
        key_values.get("EndpointSuffix"),
    ) else {
        return Ok(None);
    };

    let protocol = key_values
        .get("DefaultEndpointsProtocol")
        .map(String::as_str)
        .unwrap_or("https");
    if protocol != "http" && protocol != "https" {
        return Err(Error::config_invalid(format!(
            "invalid DefaultEndpointsProtocol: {protocol}"
        )));
    }

    Ok(Some(format!(
        "{protocol}://{account_name}.{}.{endpoint_suffix}",
        service.endpoint_name()
    )))
}
