//! The key-binding state machine.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use zeroize::Zeroize;

use cachet_crypto::{address_of, keypair_from_seed};
use cachet_types::{Address, KeyPair};

use crate::capability::{BiometricCapability, CeremonyError};
use crate::error::KeyBindError;
use crate::store::{RecordStore, WalletRecord, SESSION_FLAG_KEY, WALLET_RECORD_KEY};

/// Upper bound on one biometric ceremony, prompt included.
const DEFAULT_CEREMONY_TIMEOUT: Duration = Duration::from_secs(60);

/// An unlocked signing identity: the canonical address and the key pair
/// behind it.
pub struct KeyBinding {
    pub address: Address,
    pub keys: KeyPair,
}

/// Drives the per-device wallet lifecycle:
/// unregistered → registered+authenticated → (logout) → registered →
/// (authenticate) → registered+authenticated, with explicit removal as the
/// only way back to unregistered.
///
/// Every transition that unlocks key material goes through the biometric
/// ceremony; nothing here caches the released bytes beyond the returned
/// binding.
pub struct KeyBinder {
    biometric: Arc<dyn BiometricCapability>,
    store: Arc<dyn RecordStore>,
    ceremony_timeout: Duration,
}

impl KeyBinder {
    pub fn new(biometric: Arc<dyn BiometricCapability>, store: Arc<dyn RecordStore>) -> Self {
        Self {
            biometric,
            store,
            ceremony_timeout: DEFAULT_CEREMONY_TIMEOUT,
        }
    }

    pub fn with_ceremony_timeout(mut self, timeout: Duration) -> Self {
        self.ceremony_timeout = timeout;
        self
    }

    /// Create a device-bound wallet.
    ///
    /// Rejected if a wallet record already exists: silently overwriting it
    /// would orphan assets bound to the prior key. On any failure no
    /// partial state is left behind.
    pub async fn register(&self) -> Result<KeyBinding, KeyBindError> {
        if self.load_record()?.is_some() {
            return Err(KeyBindError::AlreadyRegistered);
        }

        let mut seed = self.ceremony().await?;
        let keys = keypair_from_seed(&seed);
        let address = address_of(&keys.public);
        let record = WalletRecord {
            address: address.to_hex(),
            private_key_hex: hex::encode(seed),
        };
        seed.zeroize();

        let json = serde_json::to_string(&record)
            .map_err(|e| KeyBindError::Storage(format!("record serialization failed: {e}")))?;
        self.store.put(WALLET_RECORD_KEY, &json)?;
        if let Err(e) = self.store.put(SESSION_FLAG_KEY, "true") {
            // Roll the record back rather than leave a wallet that was
            // never reported to the caller.
            warn!("session flag write failed after registration, rolling back");
            let _ = self.store.delete(WALLET_RECORD_KEY);
            return Err(e);
        }

        debug!(address = %address, "registered device wallet");
        Ok(KeyBinding { address, keys })
    }

    /// Re-unlock the existing wallet.
    pub async fn authenticate(&self) -> Result<KeyBinding, KeyBindError> {
        let record = self.load_record()?.ok_or(KeyBindError::NotRegistered)?;

        let mut seed = self.ceremony().await?;
        let released_hex = hex::encode(seed);
        if released_hex != record.private_key_hex {
            seed.zeroize();
            warn!("ceremony released key material diverging from the wallet record");
            return Err(KeyBindError::KeyMismatch);
        }

        let keys = keypair_from_seed(&seed);
        let address = address_of(&keys.public);
        seed.zeroize();
        self.store.put(SESSION_FLAG_KEY, "true")?;

        debug!(address = %address, "authenticated device wallet");
        Ok(KeyBinding { address, keys })
    }

    /// End the authenticated session, keeping the wallet registered.
    pub fn logout(&self) -> Result<(), KeyBindError> {
        self.store.put(SESSION_FLAG_KEY, "false")
    }

    /// Erase the wallet record and session flag. Irreversible; removing an
    /// unregistered wallet is a no-op.
    ///
    /// The flag goes first so an interruption cannot leave an authenticated
    /// session pointing at erased key material.
    pub fn remove(&self) -> Result<(), KeyBindError> {
        self.store.delete(SESSION_FLAG_KEY)?;
        self.store.delete(WALLET_RECORD_KEY)?;
        debug!("removed device wallet");
        Ok(())
    }

    /// Whether a wallet record exists on this device.
    pub fn is_registered(&self) -> Result<bool, KeyBindError> {
        Ok(self.load_record()?.is_some())
    }

    /// Whether the current session is authenticated.
    pub fn is_authenticated(&self) -> Result<bool, KeyBindError> {
        Ok(self.store.get(SESSION_FLAG_KEY)?.as_deref() == Some("true"))
    }

    /// Run the ceremony under the configured timeout.
    async fn ceremony(&self) -> Result<[u8; 32], KeyBindError> {
        match tokio::time::timeout(self.ceremony_timeout, self.biometric.unlock_or_create()).await
        {
            Ok(Ok(seed)) => Ok(seed),
            Ok(Err(CeremonyError::Denied)) => Err(KeyBindError::BiometricDenied),
            Ok(Err(CeremonyError::Unavailable(reason))) => {
                Err(KeyBindError::BiometricUnavailable(reason))
            }
            Err(_) => Err(KeyBindError::BiometricUnavailable(format!(
                "ceremony timed out after {:?}",
                self.ceremony_timeout
            ))),
        }
    }

    fn load_record(&self) -> Result<Option<WalletRecord>, KeyBindError> {
        match self.store.get(WALLET_RECORD_KEY)? {
            None => Ok(None),
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| KeyBindError::Storage(format!("corrupt wallet record: {e}"))),
        }
    }
}
