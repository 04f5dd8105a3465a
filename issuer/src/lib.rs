//! Attestation issuance for the cachet pipeline.
//!
//! The issuer holds the trusted Ed25519 signing key, builds canonical
//! attestation messages, and signs them. `service` exposes the issuance
//! endpoint as an axum router; `canonical::verify_attestation` is the
//! counterpart for anyone holding the issuer's public key.

pub mod canonical;
pub mod config;
pub mod error;
pub mod service;
pub mod signer;

pub use canonical::{canonical_message, verify_attestation};
pub use config::IssuerConfig;
pub use error::IssuerError;
pub use service::{router, AppState};
pub use signer::{AttestationSigner, DEFAULT_PROOF_TTL_MS};
