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

use azsign_core::hash::base64_decode;
use azsign_core::utils::Redact;
use azsign_core::{Error, Result};
use std::fmt::{Debug, Formatter};
use zeroize::{Zeroize, Zeroizing};

/// Credential for Shared Key Lite authorization.
///
/// The account key is kept base64 encoded, exactly as the portal hands it
/// out. It is decoded only while a signature is computed and the decoded
/// bytes are wiped right after. The encoded key is wiped on drop.
#[derive(Clone)]
pub struct Credential {
    account_name: String,
    account_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("account_name", &Redact::from(&self.account_name))
            .field("account_key", &Redact::from(&self.account_key))
            .finish()
    }
}

impl Drop for Credential {
    fn drop(&mut self) {
        self.account_key.zeroize();
    }
}

impl Credential {
    /// Create a new credential with shared key authentication.
    ///
    /// Fails with [`azsign_core::ErrorKind::CredentialInvalid`] if the account
    /// name is empty or the key is not valid base64.
    pub fn new(account_name: &str, account_key: &str) -> Result<Self> {
        if account_name.is_empty() {
            return Err(Error::credential_invalid("account name is empty"));
        }
        if account_key.is_empty() {
            return Err(Error::credential_invalid("account key is empty"));
        }
        // Decode once so a malformed key is rejected before any request.
        drop(Zeroizing::new(base64_decode(account_key)?));

        Ok(Self {
            account_name: account_name.to_string(),
            account_key: account_key.to_string(),
        })
    }

    /// Azure storage account name.
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Decode the account key into raw HMAC key bytes.
    ///
    /// The returned buffer is zeroed when dropped.
    pub(crate) fn signing_key(&self) -> Result<Zeroizing<Vec<u8>>> {
        base64_decode(&self.account_key).map(Zeroizing::new)
    }
}
