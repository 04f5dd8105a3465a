//! Error type for proof requests.

use thiserror::Error;

/// Errors surfaced by `ProofCoordinator::request_proof`.
///
/// `Clone` because a single in-flight issuance may be shared by several
/// waiting callers, each of which receives the same failure.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Transport failure, non-success status, or malformed response body.
    #[error("proof request failed: {message}")]
    ProofRequestFailed {
        message: String,
        /// HTTP status when the issuer answered at all.
        status: Option<u16>,
    },

    /// The issuer answered with a proof for a different request.
    #[error("proof validation failed: {0}")]
    ProofValidationFailed(String),
}
