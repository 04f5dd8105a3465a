//! Canonical address derivation from public keys.
//!
//! An address is the Blake2b-256 digest of the 32 public key bytes followed
//! by a single domain-separator byte. The digest bytes are the address; hex
//! rendering lives on `cachet_types::Address`.

use cachet_types::{Address, PublicKey};

use crate::error::CryptoError;
use crate::hash::blake2b_256_multi;

/// Domain separator appended to the public key before hashing.
const ADDRESS_DOMAIN_SEP: u8 = 0x00;

/// Canonical address width in hex nibbles.
const ADDRESS_NIBBLES: usize = 64;

/// Derive the canonical address for a raw 32-byte public key.
///
/// Deterministic and side-effect free. Inputs of any other length are
/// rejected rather than hashed anyway.
pub fn derive_address(public_key: &[u8]) -> Result<Address, CryptoError> {
    if public_key.len() != 32 {
        return Err(CryptoError::InvalidKeyLength {
            expected: 32,
            got: public_key.len(),
        });
    }
    let digest = blake2b_256_multi(&[public_key, &[ADDRESS_DOMAIN_SEP]]);
    Ok(Address::new(digest))
}

/// Derive the canonical address for a typed public key.
pub fn address_of(public_key: &PublicKey) -> Address {
    let digest = blake2b_256_multi(&[public_key.as_bytes(), &[ADDRESS_DOMAIN_SEP]]);
    Address::new(digest)
}

/// Normalize a raw hex string to address width by left-padding with zero
/// nibbles.
///
/// Degraded fallback for callers that only hold an externally sourced
/// address fragment, not a public key. The result is NOT the address
/// `derive_address` would produce for the underlying key, so the two forms
/// must never be mixed as cache keys within one deployment.
pub fn normalize_address(raw: &str) -> Result<Address, CryptoError> {
    let stripped = raw.strip_prefix("0x").unwrap_or(raw);
    if stripped.is_empty() {
        return Err(CryptoError::InvalidAddressHex("empty address".into()));
    }
    if stripped.len() > ADDRESS_NIBBLES {
        return Err(CryptoError::InvalidAddressHex(format!(
            "{} hex chars exceeds canonical width {ADDRESS_NIBBLES}",
            stripped.len()
        )));
    }
    if !stripped.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CryptoError::InvalidAddressHex(
            "non-hex characters".into(),
        ));
    }
    let padded = format!("{:0>width$}", stripped, width = ADDRESS_NIBBLES);
    Address::from_hex(&padded).map_err(CryptoError::InvalidAddressHex)
}
