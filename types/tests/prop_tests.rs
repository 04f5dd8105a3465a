use proptest::prelude::*;

use cachet_types::{
    Address, GroupId, MembershipAttestation, ProofRequest, ProofResponse, Signature, Timestamp,
};

proptest! {
    /// Address hex roundtrip: to_hex -> from_hex is identity.
    #[test]
    fn address_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let addr = Address::new(bytes);
        let parsed = Address::from_hex(&addr.to_hex()).unwrap();
        prop_assert_eq!(parsed, addr);
    }

    /// Address rendering is always exactly 64 lowercase hex characters.
    #[test]
    fn address_hex_width(bytes in prop::array::uniform32(0u8..)) {
        let s = Address::new(bytes).to_hex();
        prop_assert_eq!(s.len(), 64);
        prop_assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    /// A leading 0x prefix parses to the same address.
    #[test]
    fn address_accepts_0x_prefix(bytes in prop::array::uniform32(0u8..)) {
        let addr = Address::new(bytes);
        let prefixed = format!("0x{}", addr.to_hex());
        prop_assert_eq!(Address::from_hex(&prefixed).unwrap(), addr);
    }

    /// Anything narrower than full width is rejected, never zero-extended.
    #[test]
    fn address_rejects_short_hex(s in "[0-9a-f]{0,63}") {
        prop_assert!(Address::from_hex(&s).is_err());
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// add_millis then millis_until returns the added amount.
    #[test]
    fn timestamp_add_then_until(base in 0u64..1_000_000, ttl in 0u64..1_000_000) {
        let now = Timestamp::new(base);
        let deadline = now.add_millis(ttl);
        prop_assert_eq!(deadline.millis_until(now), ttl);
    }

    /// has_passed agrees with plain comparison, inclusively at the boundary.
    #[test]
    fn timestamp_has_passed_correct(deadline in 0u64..1_000_000, now in 0u64..1_000_000) {
        prop_assert_eq!(
            Timestamp::new(deadline).has_passed(Timestamp::new(now)),
            now >= deadline
        );
    }

    /// An attestation is expired exactly when now reaches expires_at.
    #[test]
    fn attestation_expiry_matches_timestamps(expiry in 0u64..1_000_000, now in 0u64..1_000_000) {
        let att = MembershipAttestation {
            group_id: GroupId(1),
            holder: Address::new([7u8; 32]),
            expires_at: Timestamp::new(expiry),
            signature: Signature([0u8; 64]),
        };
        prop_assert_eq!(att.is_expired(Timestamp::new(now)), now >= expiry);
    }

    /// ProofResponse::from_attestation -> to_attestation is identity.
    #[test]
    fn wire_response_roundtrip(
        addr_bytes in prop::array::uniform32(0u8..),
        sig_bytes in prop::collection::vec(0u8.., 64),
        group in 0u64..,
        expiry in 0u64..,
    ) {
        let mut sig = [0u8; 64];
        sig.copy_from_slice(&sig_bytes);
        let att = MembershipAttestation {
            group_id: GroupId(group),
            holder: Address::new(addr_bytes),
            expires_at: Timestamp::new(expiry),
            signature: Signature(sig),
        };
        let parsed = ProofResponse::from_attestation(&att).to_attestation().unwrap();
        prop_assert_eq!(parsed, att);
    }
}

#[test]
fn proof_request_serializes_with_exact_field_names() {
    let holder = Address::new([0xab; 32]);
    let request = ProofRequest::new(GroupId(7), &holder);
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "groupId": 7,
            "walletAddress": holder.to_hex(),
        })
    );
}

#[test]
fn proof_response_serializes_with_exact_field_names() {
    let att = MembershipAttestation {
        group_id: GroupId(7),
        holder: Address::new([0xab; 32]),
        expires_at: Timestamp::new(3_601_000),
        signature: Signature([0x11; 64]),
    };
    let value = serde_json::to_value(ProofResponse::from_attestation(&att)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "signature": att.signature.to_hex(),
            "expiresAt": 3_601_000,
            "groupId": 7,
            "userAddress": att.holder.to_hex(),
        })
    );
}

#[test]
fn proof_response_with_bad_signature_hex_is_rejected() {
    let response = ProofResponse {
        signature: "zz".repeat(64),
        expires_at: 1,
        group_id: 1,
        user_address: Address::new([1; 32]).to_hex(),
    };
    assert!(response.to_attestation().is_err());
}
