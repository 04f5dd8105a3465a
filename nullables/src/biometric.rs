//! Nullable biometric capability — scripted ceremonies for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use cachet_keybind::{BiometricCapability, CeremonyError};

enum Script {
    /// Release the given key material immediately.
    Succeed([u8; 32]),
    /// Release the given key material after a delay (for timeout tests).
    SucceedAfter([u8; 32], Duration),
    /// The user fails or cancels the ceremony.
    Deny,
    /// No biometric hardware.
    Unavailable(String),
}

/// A biometric capability whose outcome is scripted at construction.
///
/// Counts ceremonies so tests can assert how often the gate was actually
/// exercised.
pub struct NullBiometric {
    script: Script,
    ceremonies: AtomicUsize,
}

impl NullBiometric {
    pub fn succeeding(key_material: [u8; 32]) -> Self {
        Self::with_script(Script::Succeed(key_material))
    }

    pub fn succeeding_after(key_material: [u8; 32], delay: Duration) -> Self {
        Self::with_script(Script::SucceedAfter(key_material, delay))
    }

    pub fn denying() -> Self {
        Self::with_script(Script::Deny)
    }

    pub fn unavailable(reason: &str) -> Self {
        Self::with_script(Script::Unavailable(reason.to_string()))
    }

    /// How many ceremonies have run (successful or not).
    pub fn ceremonies(&self) -> usize {
        self.ceremonies.load(Ordering::SeqCst)
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            ceremonies: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl BiometricCapability for NullBiometric {
    async fn unlock_or_create(&self) -> Result<[u8; 32], CeremonyError> {
        self.ceremonies.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Succeed(material) => Ok(*material),
            Script::SucceedAfter(material, delay) => {
                tokio::time::sleep(*delay).await;
                Ok(*material)
            }
            Script::Deny => Err(CeremonyError::Denied),
            Script::Unavailable(reason) => Err(CeremonyError::Unavailable(reason.clone())),
        }
    }
}
