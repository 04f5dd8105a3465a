//! Device-bound signing keys behind a biometric gate.
//!
//! `KeyBinder` drives the per-device wallet state machine: a successful
//! biometric ceremony yields 32 bytes of key material, which becomes an
//! Ed25519 signing identity and a canonical address. The ceremony itself is
//! behind the `BiometricCapability` trait so production can plug in a secure
//! element while tests script the outcome.

pub mod binder;
pub mod capability;
pub mod error;
pub mod store;

pub use binder::{KeyBinder, KeyBinding};
pub use capability::{BiometricCapability, CeremonyError};
pub use error::KeyBindError;
pub use store::{FileRecordStore, RecordStore, WalletRecord, SESSION_FLAG_KEY, WALLET_RECORD_KEY};
