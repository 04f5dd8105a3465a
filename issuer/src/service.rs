//! HTTP issuance endpoint.
//!
//! `POST /groups/{groupId}/membership-proof` with a `ProofRequest` body.
//! The path and body must agree on the group, and the wallet address must
//! be canonical hex; violations are client errors, never signed.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{debug, error, warn};

use cachet_types::{Address, GroupId, ProofRequest, ProofResponse, Timestamp};

use crate::signer::AttestationSigner;

/// Shared state for the issuance service.
#[derive(Clone)]
pub struct AppState {
    pub signer: Arc<AttestationSigner>,
    /// Lifetime applied to every attestation this process issues.
    pub ttl_ms: u64,
}

/// Build the issuance router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/groups/:group_id/membership-proof", post(issue_proof))
        .with_state(state)
}

/// Handle one issuance request.
async fn issue_proof(
    State(state): State<AppState>,
    Path(group_id): Path<u64>,
    Json(request): Json<ProofRequest>,
) -> Result<Json<ProofResponse>, (StatusCode, String)> {
    if request.group_id != group_id {
        warn!(
            path_group = group_id,
            body_group = request.group_id,
            "rejected proof request: groupId mismatch"
        );
        return Err((
            StatusCode::BAD_REQUEST,
            format!(
                "groupId mismatch: path {} vs body {}",
                group_id, request.group_id
            ),
        ));
    }

    let holder = Address::from_hex(&request.wallet_address).map_err(|e| {
        warn!(group = group_id, "rejected proof request: {e}");
        (StatusCode::BAD_REQUEST, format!("invalid walletAddress: {e}"))
    })?;

    let attestation = state
        .signer
        .issue_with_ttl(holder, GroupId(group_id), state.ttl_ms, Timestamp::now())
        .map_err(|e| {
            error!(group = group_id, "issuance failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "issuance failed".to_string(),
            )
        })?;

    debug!(group = group_id, holder = %attestation.holder, "issued membership proof");
    Ok(Json(ProofResponse::from_attestation(&attestation)))
}
