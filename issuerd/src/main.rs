//! cachet issuer daemon — runs the attestation issuance service.
//!
//! The signing key arrives hex-encoded in `CACHET_ISSUER_KEY`; it is read
//! once at startup and never leaves the process.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;

use cachet_issuer::{router, AppState, IssuerConfig, DEFAULT_PROOF_TTL_MS};

#[derive(Parser)]
#[command(name = "cachet-issuerd", about = "cachet membership attestation issuer")]
struct Cli {
    /// Address to bind the issuance endpoint on.
    #[arg(long, default_value = "0.0.0.0:7410", env = "CACHET_BIND")]
    bind: SocketAddr,

    /// Lifetime of issued attestations, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_PROOF_TTL_MS, env = "CACHET_PROOF_TTL_MS")]
    proof_ttl_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cachet_utils::init_tracing();

    let cli = Cli::parse();

    let signer = IssuerConfig::from_env()?.into_signer()?;
    tracing::info!(
        public_key = %hex::encode(signer.public_key().as_bytes()),
        "issuer signing key loaded"
    );

    let state = AppState {
        signer: Arc::new(signer),
        ttl_ms: cli.proof_ttl_ms,
    };

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!(addr = %cli.bind, ttl_ms = cli.proof_ttl_ms, "issuance service listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
