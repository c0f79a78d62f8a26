//! Alloy-backed ledger client

use alloy::eips::BlockNumberOrTag;
use alloy::primitives::{Address, FixedBytes, TxKind, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionInput, TransactionRequest};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::domain::{Digest, LedgerRecord};
use crate::error::{NotaryError, Result};

use super::client::LedgerClient;
use super::contract::INotaryRegistry;

/// Ledger client over an HTTP JSON-RPC endpoint.
///
/// Providers are cheap to construct, so one is built per call from the
/// stored configuration rather than holding a long-lived connection.
#[derive(Debug, Clone)]
pub struct EthLedgerClient {
    rpc_url: Url,
    registry_address: Address,
}

impl EthLedgerClient {
    pub fn new(rpc_url: Url, registry_address: Address) -> Self {
        Self {
            rpc_url,
            registry_address,
        }
    }

    /// The notarization registry this client reads from.
    pub fn registry_address(&self) -> Address {
        self.registry_address
    }
}

#[async_trait]
impl LedgerClient for EthLedgerClient {
    async fn pending_nonce(&self, address: Address) -> Result<u64> {
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());

        provider
            .get_transaction_count(address)
            .pending()
            .await
            .map_err(|e| NotaryError::Ledger(format!("nonce fetch failed: {e}")))
    }

    async fn gas_price(&self) -> Result<U256> {
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());

        let price = provider
            .get_gas_price()
            .await
            .map_err(|e| NotaryError::Ledger(format!("gas price fetch failed: {e}")))?;
        Ok(U256::from(price))
    }

    async fn estimate_gas(&self, from: Address, data: Vec<u8>) -> Result<u64> {
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());

        let request = TransactionRequest {
            from: Some(from),
            to: Some(TxKind::Call(self.registry_address)),
            input: TransactionInput::new(data.into()),
            value: Some(U256::ZERO),
            ..Default::default()
        };

        provider
            .estimate_gas(request)
            .await
            .map_err(|e| NotaryError::Estimation(e.to_string()))
    }

    async fn find_registrations(&self, digest: Digest) -> Result<Vec<LedgerRecord>> {
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());
        let registry = INotaryRegistry::new(self.registry_address, &provider);

        let events = registry
            .Registered_filter()
            .topic1(FixedBytes::<32>::from(digest))
            .from_block(BlockNumberOrTag::Earliest)
            .to_block(BlockNumberOrTag::Latest)
            .query()
            .await
            .map_err(|e| NotaryError::Ledger(format!("registration log query failed: {e}")))?;

        debug!(
            digest = %digest,
            count = events.len(),
            "queried confirmed registrations"
        );

        let records = events
            .into_iter()
            .filter_map(|(event, log)| {
                // a log without block metadata is not confirmed; skip it
                let block_number = log.block_number?;
                let log_index = log.log_index?;
                let tx_hash = log.transaction_hash?;
                Some(LedgerRecord {
                    digest: Digest::from(event.digest),
                    registrant: event.registrant,
                    timestamp: event.timestamp,
                    tx_hash,
                    block_number,
                    log_index,
                })
            })
            .collect();

        Ok(records)
    }
}
