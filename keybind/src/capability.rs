//! The biometric ceremony as an opaque capability.

use async_trait::async_trait;
use thiserror::Error;

/// Why a ceremony produced no key material.
#[derive(Debug, Clone, Error)]
pub enum CeremonyError {
    /// No biometric hardware, or the platform refused to run the ceremony.
    #[error("biometric capability unavailable: {0}")]
    Unavailable(String),

    /// The ceremony ran and the user failed or cancelled it.
    #[error("biometric ceremony denied")]
    Denied,
}

/// A platform facility that releases 32 bytes of device-bound key material
/// only after a successful biometric ceremony.
///
/// The same call backs both registration (first ceremony creates the
/// material) and authentication (later ceremonies re-release it). The
/// binder never sees how the platform stores the material.
#[async_trait]
pub trait BiometricCapability: Send + Sync {
    async fn unlock_or_create(&self) -> Result<[u8; 32], CeremonyError>;
}
