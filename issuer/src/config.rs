//! Issuer process configuration.
//!
//! The signing key arrives out of band as a hex-encoded Ed25519 private key
//! in the environment. It is read exactly once at process start; nothing
//! re-reads the environment after that.

use crate::error::IssuerError;
use crate::signer::AttestationSigner;

/// Environment variable holding the hex-encoded signing key.
pub const ISSUER_KEY_ENV: &str = "CACHET_ISSUER_KEY";

/// Configuration read once at process start.
pub struct IssuerConfig {
    /// Hex-encoded signing key. Never logged.
    signing_key_hex: String,
}

impl IssuerConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, IssuerError> {
        let signing_key_hex = std::env::var(ISSUER_KEY_ENV)
            .map_err(|_| IssuerError::MissingSecret(ISSUER_KEY_ENV.to_string()))?;
        Ok(Self { signing_key_hex })
    }

    /// Build configuration from an already-obtained key string.
    pub fn from_key_hex(signing_key_hex: impl Into<String>) -> Self {
        Self {
            signing_key_hex: signing_key_hex.into(),
        }
    }

    /// Consume the configuration and construct the process-wide signer.
    pub fn into_signer(self) -> Result<AttestationSigner, IssuerError> {
        AttestationSigner::from_private_key_hex(&self.signing_key_hex)
    }
}
