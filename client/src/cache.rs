//! TTL-aware attestation cache keyed by (group, holder).

use std::collections::HashMap;

use tracing::debug;

use cachet_types::{Address, GroupId, MembershipAttestation, Timestamp};

/// Composite cache key: one attestation per (group, holder) pair.
pub type ProofKey = (GroupId, Address);

/// Client-session cache of membership attestations.
///
/// Operations are synchronous; the coordinator wraps this in a mutex when
/// several tasks share it. Expired entries are evicted on lookup, so the
/// map never holds more than the keys actually requested.
#[derive(Default)]
pub struct AttestationCache {
    entries: HashMap<ProofKey, MembershipAttestation>,
}

impl AttestationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a live attestation for the key.
    ///
    /// An expired entry found here is removed, not merely skipped.
    pub fn get(
        &mut self,
        group_id: GroupId,
        holder: &Address,
        now: Timestamp,
    ) -> Option<MembershipAttestation> {
        let key = (group_id, *holder);
        match self.entries.get(&key) {
            Some(att) if att.is_expired(now) => {
                debug!(group = group_id.0, "evicting expired attestation");
                self.entries.remove(&key);
                None
            }
            Some(att) => Some(att.clone()),
            None => None,
        }
    }

    /// Store an attestation under its own (group, holder) key.
    ///
    /// Unconditional overwrite: the latest write wins regardless of the
    /// previous entry's expiry.
    pub fn set(&mut self, attestation: MembershipAttestation) {
        self.entries
            .insert((attestation.group_id, attestation.holder), attestation);
    }

    /// Remove the entry for a key. No-op if absent.
    pub fn invalidate(&mut self, group_id: GroupId, holder: &Address) {
        self.entries.remove(&(group_id, *holder));
    }

    /// Remove all entries (full logout).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cachet_types::Signature;

    fn attestation(group: u64, holder: Address, expires_at: u64) -> MembershipAttestation {
        MembershipAttestation {
            group_id: GroupId(group),
            holder,
            expires_at: Timestamp::new(expires_at),
            signature: Signature([0x5a; 64]),
        }
    }

    fn holder_a() -> Address {
        Address::new([1u8; 32])
    }

    fn holder_b() -> Address {
        Address::new([2u8; 32])
    }

    #[test]
    fn new_cache_is_empty() {
        let mut cache = AttestationCache::new();
        assert!(cache.is_empty());
        assert!(cache
            .get(GroupId(1), &holder_a(), Timestamp::new(0))
            .is_none());
    }

    #[test]
    fn get_after_set_returns_exact_attestation() {
        let mut cache = AttestationCache::new();
        let att = attestation(1, holder_a(), 10_000);
        cache.set(att.clone());
        let got = cache
            .get(GroupId(1), &holder_a(), Timestamp::new(9_999))
            .unwrap();
        assert_eq!(got, att);
    }

    #[test]
    fn expired_entry_is_not_returned_and_is_purged() {
        let clock = cachet_nullables::NullClock::new(0);
        let mut cache = AttestationCache::new();
        cache.set(attestation(1, holder_a(), 10_000));
        assert_eq!(cache.len(), 1);

        clock.advance(9_999);
        assert!(cache.get(GroupId(1), &holder_a(), clock.now()).is_some());

        clock.advance(2);
        let got = cache.get(GroupId(1), &holder_a(), clock.now());
        assert!(got.is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let clock = cachet_nullables::NullClock::new(10_000);
        let mut cache = AttestationCache::new();
        cache.set(attestation(1, holder_a(), 10_000));
        assert!(cache.get(GroupId(1), &holder_a(), clock.now()).is_none());
    }

    #[test]
    fn set_overwrites_regardless_of_previous_expiry() {
        let mut cache = AttestationCache::new();
        cache.set(attestation(1, holder_a(), 5));
        let fresh = attestation(1, holder_a(), 20_000);
        cache.set(fresh.clone());
        assert_eq!(cache.len(), 1);
        let got = cache
            .get(GroupId(1), &holder_a(), Timestamp::new(10_000))
            .unwrap();
        assert_eq!(got, fresh);
    }

    #[test]
    fn invalidate_removes_only_its_key() {
        let mut cache = AttestationCache::new();
        cache.set(attestation(1, holder_a(), 10_000));
        cache.set(attestation(1, holder_b(), 10_000));
        cache.set(attestation(2, holder_a(), 10_000));

        cache.invalidate(GroupId(1), &holder_a());

        assert!(cache
            .get(GroupId(1), &holder_a(), Timestamp::new(0))
            .is_none());
        assert!(cache
            .get(GroupId(1), &holder_b(), Timestamp::new(0))
            .is_some());
        assert!(cache
            .get(GroupId(2), &holder_a(), Timestamp::new(0))
            .is_some());
    }

    #[test]
    fn invalidate_absent_key_is_noop() {
        let mut cache = AttestationCache::new();
        cache.set(attestation(1, holder_a(), 10_000));
        cache.invalidate(GroupId(9), &holder_b());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let mut cache = AttestationCache::new();
        cache.set(attestation(1, holder_a(), 10_000));
        cache.set(attestation(2, holder_b(), 10_000));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn groups_are_distinct_keys_for_one_holder() {
        let mut cache = AttestationCache::new();
        cache.set(attestation(1, holder_a(), 10_000));
        cache.set(attestation(2, holder_a(), 20_000));
        assert_eq!(cache.len(), 2);
        let g1 = cache
            .get(GroupId(1), &holder_a(), Timestamp::new(0))
            .unwrap();
        assert_eq!(g1.expires_at, Timestamp::new(10_000));
    }
}
