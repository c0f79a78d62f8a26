//! Transaction builder
//!
//! Assembles the unsigned registration transaction for a digest: fixed
//! recipient, ABI-encoded payload, estimated gas, current fee rate, the
//! requester's pending nonce, zero value. Reads ledger state but never
//! mutates it; submission is the signer's job.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use tracing::debug;

use crate::domain::{Digest, UnsignedTransaction};
use crate::error::Result;
use crate::ledger::{register_calldata, LedgerClient};

/// Builds unsigned registration transactions against a fixed notarization
/// registry.
#[derive(Clone)]
pub struct TransactionBuilder {
    ledger: Arc<dyn LedgerClient>,
    /// The notarization target; configured, never user-supplied, so a caller
    /// cannot redirect registration ownership.
    registry_address: Address,
}

impl TransactionBuilder {
    pub fn new(ledger: Arc<dyn LedgerClient>, registry_address: Address) -> Self {
        Self {
            ledger,
            registry_address,
        }
    }

    pub fn registry_address(&self) -> Address {
        self.registry_address
    }

    /// Build a fresh unsigned transaction embedding `digest`, authorized by
    /// `from`.
    ///
    /// The nonce is the requester's pending count at build time; it is not
    /// reserved, so concurrent builds for one address can race and the loser
    /// fails at submission with a nonce conflict. Callers retry by building
    /// again, never by resubmitting a stale transaction.
    pub async fn build(&self, digest: &Digest, from: Address) -> Result<UnsignedTransaction> {
        let data = register_calldata(digest);

        let gas = self.ledger.estimate_gas(from, data.to_vec()).await?;
        let gas_price = self.ledger.gas_price().await?;
        let nonce = self.ledger.pending_nonce(from).await?;

        debug!(
            digest = %digest,
            from = %from,
            gas,
            nonce,
            "built unsigned registration transaction"
        );

        Ok(UnsignedTransaction {
            from,
            to: self.registry_address,
            data,
            gas,
            gas_price,
            nonce,
            value: U256::ZERO,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotaryError;
    use crate::ledger::{decode_register_calldata, MockLedgerClient};

    fn registry() -> Address {
        Address::repeat_byte(0xcd)
    }

    fn requester() -> Address {
        Address::repeat_byte(0xab)
    }

    fn happy_ledger() -> MockLedgerClient {
        let mut ledger = MockLedgerClient::new();
        ledger.expect_estimate_gas().returning(|_, _| Ok(60_000));
        ledger
            .expect_gas_price()
            .returning(|| Ok(U256::from(2_000_000_000u64)));
        ledger.expect_pending_nonce().returning(|_| Ok(41));
        ledger
    }

    #[tokio::test]
    async fn test_build_embeds_digest_and_fixed_target() {
        let digest = Digest::from_bytes([0x44; 32]);
        let builder = TransactionBuilder::new(Arc::new(happy_ledger()), registry());

        let tx = builder.build(&digest, requester()).await.unwrap();

        assert_eq!(tx.to, registry());
        assert_eq!(tx.from, requester());
        assert_eq!(tx.value, U256::ZERO);
        assert_eq!(tx.nonce, 41);
        assert_eq!(tx.gas, 60_000);
        assert_eq!(decode_register_calldata(&tx.data), Some(digest));
    }

    #[tokio::test]
    async fn test_build_is_repeatable_for_same_inputs() {
        let digest = Digest::from_bytes([0x55; 32]);
        let builder = TransactionBuilder::new(Arc::new(happy_ledger()), registry());

        let a = builder.build(&digest, requester()).await.unwrap();
        let b = builder.build(&digest, requester()).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_estimation_failure_propagates() {
        let mut ledger = MockLedgerClient::new();
        ledger
            .expect_estimate_gas()
            .returning(|_, _| Err(NotaryError::Estimation("node unreachable".into())));

        let builder = TransactionBuilder::new(Arc::new(ledger), registry());
        let err = builder
            .build(&Digest::from_bytes([1; 32]), requester())
            .await
            .unwrap_err();
        assert!(matches!(err, NotaryError::Estimation(_)));
    }
}
