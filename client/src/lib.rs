//! Client side of the cachet attestation pipeline.
//!
//! `ProofCoordinator` is the sole entry point for consumers: it fronts an
//! in-memory TTL cache, deduplicates concurrent issuance requests per
//! (group, holder) key, and talks to the issuer through the `IssuerApi`
//! trait. `HttpIssuerClient` is the production transport.

pub mod cache;
pub mod coordinator;
pub mod error;
pub mod http;

pub use cache::{AttestationCache, ProofKey};
pub use coordinator::{IssuerApi, ProofCoordinator};
pub use error::ClientError;
pub use http::HttpIssuerClient;
