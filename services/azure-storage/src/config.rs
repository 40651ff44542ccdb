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

use azsign_core::{Env, Error, Result};
use log::debug;

use crate::constants::*;
use crate::{connection_string, Credential};

/// Storage service a configuration targets.
///
/// Decides which endpoint key of a connection string is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Blob storage.
    Blob,
    /// File storage.
    File,
}

impl Service {
    /// Name of the service in its endpoint host, like `blob` in
    /// `myaccount.blob.core.windows.net`.
    pub fn endpoint_name(&self) -> &'static str {
        match self {
            Service::Blob => "blob",
            Service::File => "file",
        }
    }

    pub(crate) fn endpoint_key(&self) -> &'static str {
        match self {
            Service::Blob => "BlobEndpoint",
            Service::File => "FileEndpoint",
        }
    }
}

/// Config carries all the configuration for Azure Storage signing.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `account_name` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_STORAGE_ACCOUNT_NAME`]
    /// - connection string: `AccountName`
    pub account_name: Option<String>,
    /// `account_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_STORAGE_ACCOUNT_KEY`]
    /// - connection string: `AccountKey`
    pub account_key: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZBLOB_ENDPOINT`]
    /// - connection string: `BlobEndpoint`/`FileEndpoint` or built from
    ///   `AccountName` and `EndpointSuffix`
    pub endpoint: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("account_name", &self.account_name)
            .field(
                "account_key",
                &azsign_core::utils::Redact::from(&self.account_key),
            )
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// [`AZURE_STORAGE_CONNECTION_STRING`] is parsed first, individual
    /// variables override what it provides. Fields already set are kept.
    pub fn from_env(mut self, env: &impl Env) -> Result<Self> {
        let parsed = match env.var(AZURE_STORAGE_CONNECTION_STRING) {
            Some(conn_str) => connection_string::parse(&conn_str, Service::Blob)?,
            None => Config::default(),
        };

        self.account_name = self
            .account_name
            .or_else(|| env.var(AZURE_STORAGE_ACCOUNT_NAME))
            .or(parsed.account_name);
        self.account_key = self
            .account_key
            .or_else(|| env.var(AZURE_STORAGE_ACCOUNT_KEY))
            .or(parsed.account_key);
        self.endpoint = self
            .endpoint
            .or_else(|| env.var(AZBLOB_ENDPOINT))
            .or(parsed.endpoint);

        debug!("config loaded from env: {self:?}");
        Ok(self)
    }

    /// Parses an [Azure connection string][1] into a configuration object.
    ///
    /// The connection string doesn't have to specify all required parameters
    /// because the user is still allowed to set them later directly on the object.
    ///
    /// An example of a connection string looks like:
    ///
    /// ```txt
    /// AccountName=mystorageaccount;
    /// AccountKey=Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==;
    /// BlobEndpoint=https://mystorageaccount.blob.core.windows.net
    /// ```
    ///
    /// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
    pub fn try_from_connection_string(conn_str: &str, service: Service) -> Result<Self> {
        connection_string::parse(conn_str, service)
    }

    /// Build the signing credential.
    pub fn credential(&self) -> Result<Credential> {
        let account_name = self
            .account_name
            .as_deref()
            .ok_or_else(|| Error::config_invalid("account_name is required"))?;
        let account_key = self
            .account_key
            .as_deref()
            .ok_or_else(|| Error::config_invalid("account_key is required"))?;

        Credential::new(account_name, account_key)
    }
}
