//! Membership attestations: signed, time-bound group membership claims.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Address, Signature, Timestamp};

/// Identifier of a private group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A signed assertion that `holder` belongs to `group_id` until `expires_at`.
///
/// Only the issuer's `AttestationSigner` creates these; everything else moves
/// them around or checks them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MembershipAttestation {
    pub group_id: GroupId,
    pub holder: Address,
    pub expires_at: Timestamp,
    pub signature: Signature,
}

impl MembershipAttestation {
    /// Whether this attestation is no longer valid at `now`.
    ///
    /// Expiry is inclusive: an attestation whose `expires_at` equals `now`
    /// is already expired.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.has_passed(now)
    }
}
