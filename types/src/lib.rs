//! Fundamental types for the cachet membership-attestation pipeline.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: keys, signatures, addresses, timestamps, attestations, and the
//! wire structs exchanged with the issuer service.

pub mod address;
pub mod attestation;
pub mod keys;
pub mod time;
pub mod wire;

pub use address::Address;
pub use attestation::{GroupId, MembershipAttestation};
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use time::Timestamp;
pub use wire::{ProofRequest, ProofResponse};
