//! Error type for cryptographic operations.

use thiserror::Error;

/// Errors arising from key handling, signing, and address derivation.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// A public key was not exactly 32 bytes.
    #[error("invalid key length: expected {expected} bytes, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    /// Key bytes could not be parsed into usable key material.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// A raw address string was not valid hex within canonical width.
    #[error("invalid address hex: {0}")]
    InvalidAddressHex(String),

    /// The underlying signing operation failed.
    #[error("signing failure: {0}")]
    SigningFailure(String),
}
