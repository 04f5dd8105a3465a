//! Proof request coordination: cache in front, single-flight issuance behind.
//!
//! For each (group, holder) key at most one issuance is outstanding at a
//! time; callers that arrive while one is in flight await its shared result
//! instead of issuing again. Issuance runs on a spawned task, so a caller
//! abandoning its future neither cancels the network call nor prevents the
//! cache from being populated for the next caller.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use tracing::{debug, warn};

use cachet_types::{Address, GroupId, MembershipAttestation, ProofRequest, ProofResponse, Timestamp};

use crate::cache::{AttestationCache, ProofKey};
use crate::error::ClientError;

/// Transport used by the coordinator to reach the issuer.
#[async_trait]
pub trait IssuerApi: Send + Sync {
    /// Submit one issuance request and return the decoded response.
    async fn issue_proof(&self, request: ProofRequest) -> Result<ProofResponse, ClientError>;
}

type PendingProof = Shared<BoxFuture<'static, Result<MembershipAttestation, ClientError>>>;

/// Client entry point for obtaining membership attestations.
pub struct ProofCoordinator {
    issuer: Arc<dyn IssuerApi>,
    cache: Arc<Mutex<AttestationCache>>,
    pending: Arc<Mutex<HashMap<ProofKey, PendingProof>>>,
}

impl ProofCoordinator {
    pub fn new(issuer: Arc<dyn IssuerApi>) -> Self {
        Self {
            issuer,
            cache: Arc::new(Mutex::new(AttestationCache::new())),
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Return a live attestation for the key, issuing over the network only
    /// on a cache miss.
    ///
    /// Failures are never cached; a later call retries against the issuer.
    pub async fn request_proof(
        &self,
        group_id: GroupId,
        holder: Address,
    ) -> Result<MembershipAttestation, ClientError> {
        if let Some(att) = self
            .cache
            .lock()
            .unwrap()
            .get(group_id, &holder, Timestamp::now())
        {
            debug!(group = group_id.0, holder = %holder, "proof cache hit");
            return Ok(att);
        }

        self.join_or_start(group_id, holder).await
    }

    /// Drop the cached attestation for one key (e.g. after leaving a group).
    pub fn invalidate(&self, group_id: GroupId, holder: &Address) {
        self.cache.lock().unwrap().invalidate(group_id, holder);
    }

    /// Drop every cached attestation (full logout).
    pub fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
    }

    /// Attach to the in-flight issuance for the key, starting one if absent.
    ///
    /// The issuance itself runs on a spawned task; the pending map holds a
    /// shared handle to its outcome. The task removes its own map entry
    /// after the cache is populated, so late arrivals either join the
    /// flight or hit the cache.
    fn join_or_start(&self, group_id: GroupId, holder: Address) -> PendingProof {
        let key = (group_id, holder);
        let mut pending = self.pending.lock().unwrap();

        if let Some(handle) = pending.get(&key) {
            debug!(group = group_id.0, "joining in-flight proof request");
            return handle.clone();
        }

        let issuer = self.issuer.clone();
        let cache = self.cache.clone();
        let pending_map = self.pending.clone();

        let task = tokio::spawn(async move {
            let result = issue_and_validate(issuer, group_id, holder).await;
            if let Ok(att) = &result {
                cache.lock().unwrap().set(att.clone());
            }
            pending_map.lock().unwrap().remove(&key);
            result
        });

        let handle: PendingProof = async move {
            match task.await {
                Ok(result) => result,
                Err(e) => Err(ClientError::ProofRequestFailed {
                    message: format!("issuance task failed: {e}"),
                    status: None,
                }),
            }
        }
        .boxed()
        .shared();

        pending.insert(key, handle.clone());
        handle
    }
}

/// Perform one network issuance and check the response against the request.
async fn issue_and_validate(
    issuer: Arc<dyn IssuerApi>,
    group_id: GroupId,
    holder: Address,
) -> Result<MembershipAttestation, ClientError> {
    let request = ProofRequest::new(group_id, &holder);
    let response = issuer.issue_proof(request).await?;

    let att = response
        .to_attestation()
        .map_err(|e| ClientError::ProofRequestFailed {
            message: format!("malformed issuance response: {e}"),
            status: None,
        })?;

    // A proof for the wrong key must never reach the cache.
    if att.group_id != group_id {
        warn!(
            requested = group_id.0,
            received = att.group_id.0,
            "issuance response for wrong group"
        );
        return Err(ClientError::ProofValidationFailed(format!(
            "response groupId {} does not match requested {}",
            att.group_id, group_id
        )));
    }
    if att.holder != holder {
        warn!(requested = %holder, received = %att.holder, "issuance response for wrong address");
        return Err(ClientError::ProofValidationFailed(
            "response userAddress does not match requested wallet".into(),
        ));
    }

    Ok(att)
}
