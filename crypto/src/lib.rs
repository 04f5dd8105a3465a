//! Cryptographic primitives for the cachet attestation pipeline.
//!
//! - **Ed25519** for attestation signing and verification
//! - **Blake2b-256** for address derivation digests
//! - Canonical 32-byte address derivation from public keys, plus a padded
//!   fallback for callers that only hold an address fragment

pub mod address;
pub mod error;
pub mod hash;
pub mod keys;
pub mod sign;

pub use address::{address_of, derive_address, normalize_address};
pub use error::CryptoError;
pub use hash::{blake2b_256, blake2b_256_multi};
pub use keys::{
    generate_keypair, keypair_from_private, keypair_from_seed, private_key_from_hex,
    public_from_private,
};
pub use sign::{sign_message, verify_signature};
