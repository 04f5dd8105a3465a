//! Nullable record store — in-memory storage for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use cachet_keybind::{KeyBindError, RecordStore};

/// An in-memory `RecordStore`.
///
/// Writes to a chosen key can be made to fail, for exercising
/// partial-write handling in the binder.
pub struct NullRecordStore {
    records: Mutex<HashMap<String, String>>,
    fail_put_on: Mutex<Option<String>>,
}

impl NullRecordStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            fail_put_on: Mutex::new(None),
        }
    }

    /// Make every subsequent `put` to `key` fail with a storage error.
    pub fn fail_put_on(&self, key: &str) {
        *self.fail_put_on.lock().unwrap() = Some(key.to_string());
    }
}

impl Default for NullRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for NullRecordStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyBindError> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), KeyBindError> {
        if self.fail_put_on.lock().unwrap().as_deref() == Some(key) {
            return Err(KeyBindError::Storage(format!("scripted failure on {key}")));
        }
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KeyBindError> {
        self.records.lock().unwrap().remove(key);
        Ok(())
    }
}
