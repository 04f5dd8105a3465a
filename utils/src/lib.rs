//! Shared utilities for the cachet workspace.

pub mod logging;

pub use logging::init_tracing;
