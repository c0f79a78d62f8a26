//! HTTP server bootstrap for the notary anchor service.
//!
//! This module wires together:
//! - configuration
//! - the alloy-backed ledger client
//! - core services (transaction builder, registration coordinator,
//!   verification resolver, record index)
//! - the Axum router

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::Address;
use axum::extract::DefaultBodyLimit;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::api::rest;
use crate::api::types::LedgerTarget;
use crate::ledger::{EthLedgerClient, LedgerClient, RecordIndex};
use crate::metrics::MetricsRegistry;
use crate::register::RegistrationCoordinator;
use crate::tx::TransactionBuilder;
use crate::verify::VerificationResolver;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server listen address.
    pub listen_addr: SocketAddr,
    /// Ledger JSON-RPC endpoint.
    pub rpc_url: Url,
    /// Notary registry contract address.
    pub registry_address: Address,
    /// Chain ID of the target ledger.
    pub chain_id: u64,
    /// Deadline for every ledger and signer call.
    pub request_timeout: Duration,
    /// Upper bound on an uploaded request body.
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `RPC_URL` and `NOTARY_CONTRACT_ADDRESS` are required; everything else
    /// is defaulted.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let listen_addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid listen address: {e}"))?;

        let rpc_url: Url = std::env::var("RPC_URL")
            .map_err(|_| anyhow::anyhow!("RPC_URL must be set to the ledger JSON-RPC endpoint"))?
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid RPC_URL: {e}"))?;

        let registry_address: Address = std::env::var("NOTARY_CONTRACT_ADDRESS")
            .map_err(|_| {
                anyhow::anyhow!("NOTARY_CONTRACT_ADDRESS must be set to the registry contract")
            })?
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid NOTARY_CONTRACT_ADDRESS: {e}"))?;

        let chain_id: u64 = std::env::var("CHAIN_ID")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        let request_timeout = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(32 * 1024 * 1024);

        Ok(Self {
            listen_addr,
            rpc_url,
            registry_address,
            chain_id,
            request_timeout,
            max_upload_bytes,
        })
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<RegistrationCoordinator>,
    pub resolver: Arc<VerificationResolver>,
    pub index: Arc<RecordIndex>,
    pub metrics: Arc<MetricsRegistry>,
    pub ledger_target: LedgerTarget,
}

impl AppState {
    /// Assemble state from a ledger client and configuration knobs.
    pub fn new(
        ledger: Arc<dyn LedgerClient>,
        registry_address: Address,
        ledger_target: LedgerTarget,
        request_timeout: Duration,
    ) -> Self {
        let builder = TransactionBuilder::new(ledger.clone(), registry_address);
        let coordinator = Arc::new(RegistrationCoordinator::new(builder, request_timeout));
        let index = Arc::new(RecordIndex::new(ledger));
        let resolver = Arc::new(VerificationResolver::new(
            index.as_ref().clone(),
            request_timeout,
        ));

        Self {
            coordinator,
            resolver,
            index,
            metrics: Arc::new(MetricsRegistry::new()),
            ledger_target,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Start the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting notary-anchor v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!("Configuration loaded");
    info!("  Listen address: {}", config.listen_addr);
    info!("  Ledger RPC: {}", config.rpc_url);
    info!("  Registry contract: {}", config.registry_address);
    info!("  Chain ID: {}", config.chain_id);

    let ledger = Arc::new(EthLedgerClient::new(
        config.rpc_url.clone(),
        config.registry_address,
    ));

    let ledger_target = LedgerTarget {
        rpc_url: config.rpc_url.to_string(),
        registry_address: config.registry_address.to_string(),
        chain_id: config.chain_id,
    };

    let state = AppState::new(
        ledger,
        config.registry_address,
        ledger_target,
        config.request_timeout,
    );

    let app = rest::router()
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
