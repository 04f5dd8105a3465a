//! Error type for attestation issuance.

use thiserror::Error;

/// Errors arising from issuer configuration and issuance.
#[derive(Debug, Error)]
pub enum IssuerError {
    /// The configured signing key could not be parsed.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// The signing operation failed.
    #[error("signing failure: {0}")]
    SigningFailure(String),

    /// A zero TTL would mint an attestation that is expired at birth.
    #[error("ttl must be positive")]
    InvalidTtl,

    /// A required secret was not provided to the process.
    #[error("missing secret: environment variable {0} is not set")]
    MissingSecret(String),
}
