//! Canonical attestation message construction and verification.
//!
//! The signed layout is `"<address>:<groupId>:<expiresAtMillis>"` with the
//! address as 64 lowercase hex characters, no prefix, and both integers in
//! base 10. Independent verifiers rebuild this byte-for-byte, so any change
//! here is a wire protocol break.

use cachet_crypto::verify_signature;
use cachet_types::{Address, GroupId, MembershipAttestation, PublicKey, Timestamp};

/// Build the exact byte sequence an attestation signs.
pub fn canonical_message(holder: &Address, group_id: GroupId, expires_at: Timestamp) -> String {
    format!(
        "{}:{}:{}",
        holder.to_hex(),
        group_id.0,
        expires_at.as_millis()
    )
}

/// Check an attestation against the issuer's public key.
///
/// The message is rebuilt from the attestation's own fields, so mutating any
/// field invalidates the signature.
pub fn verify_attestation(att: &MembershipAttestation, issuer_public: &PublicKey) -> bool {
    let message = canonical_message(&att.holder, att.group_id, att.expires_at);
    verify_signature(message.as_bytes(), &att.signature, issuer_public)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_layout_is_exact() {
        let holder = Address::new([0xab; 32]);
        let msg = canonical_message(&holder, GroupId(7), Timestamp::new(3_601_000));
        assert_eq!(msg, format!("{}:7:3601000", "ab".repeat(32)));
    }

    #[test]
    fn message_has_no_whitespace_or_prefix() {
        let holder = Address::new([0x01; 32]);
        let msg = canonical_message(&holder, GroupId(42), Timestamp::new(1));
        assert!(!msg.contains(' '));
        assert!(!msg.contains("0x"));
        assert_eq!(msg.split(':').count(), 3);
    }

    #[test]
    fn distinct_fields_distinct_messages() {
        let holder = Address::new([0x02; 32]);
        let base = canonical_message(&holder, GroupId(1), Timestamp::new(1000));
        assert_ne!(
            base,
            canonical_message(&holder, GroupId(2), Timestamp::new(1000))
        );
        assert_ne!(
            base,
            canonical_message(&holder, GroupId(1), Timestamp::new(1001))
        );
    }
}
