//
//  twitter-rest
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Secure Credential Storage
//!
//! The CLI keeps OAuth credentials in the platform's native keyring:
//!
//! - **macOS**: Keychain Services
//! - **Linux**: Secret Service API (GNOME Keyring, KWallet)
//! - **Windows**: Windows Credential Manager
//!
//! ## Storage Model
//!
//! - **Service**: `twitter-rest`
//! - **Username/Key**: the account name (`default` unless told otherwise)
//! - **Password/Value**: the four credential values as one JSON object
//!
//! ## Example
//!
//! ```rust,no_run
//! use twitter_rest::auth::{Credentials, KeyringStore};
//!
//! fn remember() -> anyhow::Result<()> {
//!     let store = KeyringStore::new();
//!     store.store_credentials(&Credentials::new("ck", "cs", "at", "ats"))?;
//!
//!     if let Some(credentials) = store.load_credentials()? {
//!         assert!(credentials.is_complete());
//!     }
//!     Ok(())
//! }
//! ```

use anyhow::{Context, Result};
use keyring::Entry;

use super::Credentials;

/// The service name used to identify this application in the system keyring.
const SERVICE_NAME: &str = "twitter-rest";

/// The account credentials are filed under.
pub const DEFAULT_ACCOUNT: &str = "default";

/// Credential storage in the system keyring.
///
/// # Notes
///
/// - The keyring may require user interaction on first access.
/// - On Linux, a secret service daemon must be running.
pub struct KeyringStore {
    service: String,
    account: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    /// Creates a store for the default account. No keyring access happens
    /// until a method is called.
    pub fn new() -> Self {
        Self::for_account(DEFAULT_ACCOUNT)
    }

    pub fn for_account(account: &str) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            account: account.to_string(),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// Stores a raw secret under `key`, overwriting any previous value.
    pub fn store(&self, key: &str, secret: &str) -> Result<()> {
        let entry = Entry::new(&self.service, key)?;
        entry.set_password(secret)?;
        Ok(())
    }

    /// Returns the secret under `key`, or `None` if nothing is stored.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, key)?;
        match entry.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the secret under `key`. Missing entries are not an error.
    pub fn delete(&self, key: &str) -> Result<()> {
        let entry = Entry::new(&self.service, key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn store_credentials(&self, credentials: &Credentials) -> Result<()> {
        let json = encode_credentials(credentials)?;
        self.store(&self.account, &json)
    }

    pub fn load_credentials(&self) -> Result<Option<Credentials>> {
        match self.get(&self.account)? {
            Some(json) => decode_credentials(&json).map(Some),
            None => Ok(None),
        }
    }

    pub fn delete_credentials(&self) -> Result<()> {
        self.delete(&self.account)
    }
}

fn encode_credentials(credentials: &Credentials) -> Result<String> {
    serde_json::to_string(credentials).context("Failed to encode credentials")
}

fn decode_credentials(json: &str) -> Result<Credentials> {
    serde_json::from_str(json).context("Stored credentials are corrupt; run 'tw auth login' again")
}
