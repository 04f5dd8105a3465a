//! Error type for key binding.

use thiserror::Error;

/// Errors surfaced by the `KeyBinder` state machine.
#[derive(Debug, Error)]
pub enum KeyBindError {
    /// No biometric hardware, the ceremony timed out, or the platform
    /// refused to run it.
    #[error("biometric unavailable: {0}")]
    BiometricUnavailable(String),

    /// The user failed or cancelled the biometric ceremony.
    #[error("biometric denied")]
    BiometricDenied,

    /// A wallet already exists on this device; registering over it would
    /// orphan assets bound to the prior key.
    #[error("a wallet is already registered on this device")]
    AlreadyRegistered,

    /// No wallet exists on this device yet.
    #[error("no wallet is registered on this device")]
    NotRegistered,

    /// The ceremony released key material that does not match the
    /// persisted wallet record.
    #[error("ceremony key material does not match the registered wallet")]
    KeyMismatch,

    /// The local record store failed to read or write.
    #[error("record store failure: {0}")]
    Storage(String),
}
