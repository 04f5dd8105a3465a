//! The attestation signer: holds the issuer key and mints signed attestations.

use cachet_types::{Address, GroupId, KeyPair, MembershipAttestation, PublicKey, Timestamp};
use tracing::debug;

use cachet_crypto::{keypair_from_private, private_key_from_hex, sign_message};

use crate::canonical::canonical_message;
use crate::error::IssuerError;

/// Default attestation lifetime: one hour.
pub const DEFAULT_PROOF_TTL_MS: u64 = 3_600_000;

/// Issuer-side signer.
///
/// Constructed once at process start and held for the process lifetime.
/// Issuance takes `&self`, so concurrent callers share one instance without
/// locking. The private key never leaves this struct.
pub struct AttestationSigner {
    keys: KeyPair,
}

impl AttestationSigner {
    /// Build a signer from an existing key pair.
    pub fn new(keys: KeyPair) -> Self {
        Self { keys }
    }

    /// Build a signer from a hex-encoded Ed25519 private key.
    pub fn from_private_key_hex(hex_key: &str) -> Result<Self, IssuerError> {
        let private = private_key_from_hex(hex_key)
            .map_err(|e| IssuerError::InvalidKeyMaterial(e.to_string()))?;
        Ok(Self {
            keys: keypair_from_private(private),
        })
    }

    /// The verifying counterpart of the signing key. Distribute this to
    /// anyone who needs to check attestations.
    pub fn public_key(&self) -> &PublicKey {
        &self.keys.public
    }

    /// Issue an attestation with the default one-hour lifetime.
    pub fn issue(
        &self,
        holder: Address,
        group_id: GroupId,
        now: Timestamp,
    ) -> Result<MembershipAttestation, IssuerError> {
        self.issue_with_ttl(holder, group_id, DEFAULT_PROOF_TTL_MS, now)
    }

    /// Issue an attestation expiring `ttl_ms` after `now`.
    pub fn issue_with_ttl(
        &self,
        holder: Address,
        group_id: GroupId,
        ttl_ms: u64,
        now: Timestamp,
    ) -> Result<MembershipAttestation, IssuerError> {
        if ttl_ms == 0 {
            return Err(IssuerError::InvalidTtl);
        }
        let expires_at = now.add_millis(ttl_ms);
        let message = canonical_message(&holder, group_id, expires_at);
        let signature = sign_message(message.as_bytes(), &self.keys.private)
            .map_err(|e| IssuerError::SigningFailure(e.to_string()))?;
        if signature.is_zero() {
            return Err(IssuerError::SigningFailure("blank signature".into()));
        }
        debug!(group = group_id.0, holder = %holder, expires_at = expires_at.as_millis(),
            "issued membership attestation");
        Ok(MembershipAttestation {
            group_id,
            holder,
            expires_at,
            signature,
        })
    }
}
