//! Nullable infrastructure for deterministic testing.
//!
//! External effects (time, the biometric ceremony, local record storage)
//! sit behind traits; this crate provides implementations that return
//! scripted values, can be controlled programmatically, and never touch
//! hardware or the filesystem.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod biometric;
pub mod clock;
pub mod store;

pub use biometric::NullBiometric;
pub use clock::NullClock;
pub use store::NullRecordStore;
