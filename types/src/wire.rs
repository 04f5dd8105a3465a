//! Wire structs for the issuance endpoint.
//!
//! Field names and types are a cross-implementation contract; the `camelCase`
//! renames are load-bearing, not cosmetic.

use serde::{Deserialize, Serialize};

use crate::{Address, GroupId, MembershipAttestation, Signature, Timestamp};

/// Body of `POST /groups/{groupId}/membership-proof`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofRequest {
    pub group_id: u64,
    pub wallet_address: String,
}

impl ProofRequest {
    pub fn new(group_id: GroupId, holder: &Address) -> Self {
        Self {
            group_id: group_id.0,
            wallet_address: holder.to_hex(),
        }
    }
}

/// Successful issuance response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofResponse {
    /// Ed25519 signature, lowercase hex, no `0x` prefix.
    pub signature: String,
    /// Expiry as Unix epoch milliseconds.
    pub expires_at: u64,
    pub group_id: u64,
    pub user_address: String,
}

impl ProofResponse {
    pub fn from_attestation(att: &MembershipAttestation) -> Self {
        Self {
            signature: att.signature.to_hex(),
            expires_at: att.expires_at.as_millis(),
            group_id: att.group_id.0,
            user_address: att.holder.to_hex(),
        }
    }

    /// Parse the response back into a typed attestation.
    ///
    /// Fails on malformed hex in either field; the caller decides how a
    /// malformed body is reported.
    pub fn to_attestation(&self) -> Result<MembershipAttestation, String> {
        let holder = Address::from_hex(&self.user_address)?;
        let signature = Signature::from_hex(&self.signature)?;
        Ok(MembershipAttestation {
            group_id: GroupId(self.group_id),
            holder,
            expires_at: Timestamp::new(self.expires_at),
            signature,
        })
    }
}
