//! Persisted wallet records.
//!
//! The binder owns two fixed keys in a small string-to-string record store:
//! the wallet record (address plus key material, JSON with camelCase field
//! names shared with other platforms) and a separate authenticated-session
//! flag. The store itself is a trait so tests can fail writes on demand.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::KeyBindError;

/// Record store key for the persisted wallet.
pub const WALLET_RECORD_KEY: &str = "cachet.wallet.record";

/// Record store key for the authenticated-session flag.
pub const SESSION_FLAG_KEY: &str = "cachet.wallet.session";

/// The persisted wallet record.
///
/// Field names are shared with non-Rust consumers of the same store; the
/// camelCase renames are part of that contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    /// Canonical address, 64 lowercase hex characters.
    pub address: String,
    /// Device-bound Ed25519 seed, lowercase hex.
    pub private_key_hex: String,
}

/// Synchronous local key-value storage for wallet records.
pub trait RecordStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, KeyBindError>;
    fn put(&self, key: &str, value: &str) -> Result<(), KeyBindError>;
    /// Remove a key. No-op if absent.
    fn delete(&self, key: &str) -> Result<(), KeyBindError>;
}

/// `RecordStore` backed by a single JSON file.
///
/// Each operation reads and rewrites the whole file; the record set is two
/// keys, so this stays trivially small.
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<HashMap<String, String>, KeyBindError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let json = std::fs::read_to_string(&self.path)
            .map_err(|e| KeyBindError::Storage(format!("failed to read record file: {e}")))?;
        serde_json::from_str(&json)
            .map_err(|e| KeyBindError::Storage(format!("invalid record file JSON: {e}")))
    }

    fn save(&self, records: &HashMap<String, String>) -> Result<(), KeyBindError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| KeyBindError::Storage(format!("record serialization failed: {e}")))?;
        std::fs::write(&self.path, json)
            .map_err(|e| KeyBindError::Storage(format!("failed to write record file: {e}")))
    }
}

impl RecordStore for FileRecordStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyBindError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), KeyBindError> {
        let mut records = self.load()?;
        records.insert(key.to_string(), value.to_string());
        self.save(&records)
    }

    fn delete(&self, key: &str) -> Result<(), KeyBindError> {
        let mut records = self.load()?;
        if records.remove(key).is_some() {
            self.save(&records)?;
        }
        Ok(())
    }
}
