//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;

use notary_anchor::domain::{Digest, LedgerRecord, TxHash, UnsignedTransaction};
use notary_anchor::error::{NotaryError, Result};
use notary_anchor::ledger::LedgerClient;
use notary_anchor::signer::WalletSigner;

/// Requester address used across tests (lowercase hex, no checksum)
pub const SENDER: &str = "0xabababababababababababababababababababab";

/// A second requester for session-switch scenarios
pub const OTHER_SENDER: &str = "0xcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcd";

pub fn sender_address() -> Address {
    SENDER.parse().unwrap()
}

pub fn other_address() -> Address {
    OTHER_SENDER.parse().unwrap()
}

pub fn registry_address() -> Address {
    Address::repeat_byte(0x99)
}

/// The 32-byte document from the registration scenario
pub fn report_pdf() -> Vec<u8> {
    vec![b'A'; 32]
}

/// In-memory stand-in for the ledger: confirmed registrations are appended
/// with increasing block numbers, and transaction-building reads are served
/// from fixed values.
pub struct InMemoryLedger {
    records: Mutex<Vec<LedgerRecord>>,
    next_block: AtomicU64,
    fail_estimation: AtomicBool,
    estimation_calls: AtomicU64,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_block: AtomicU64::new(100),
            fail_estimation: AtomicBool::new(false),
            estimation_calls: AtomicU64::new(0),
        }
    }

    /// Append a confirmed registration in its own block.
    pub fn confirm(&self, digest: Digest, registrant: Address, timestamp: u64) -> LedgerRecord {
        let block = self.next_block.fetch_add(1, Ordering::SeqCst);
        self.confirm_at(digest, registrant, timestamp, block, 0)
    }

    /// Append a confirmed registration at an explicit ledger position.
    pub fn confirm_at(
        &self,
        digest: Digest,
        registrant: Address,
        timestamp: u64,
        block_number: u64,
        log_index: u64,
    ) -> LedgerRecord {
        let record = LedgerRecord {
            digest,
            registrant,
            timestamp,
            tx_hash: B256::repeat_byte(block_number as u8),
            block_number,
            log_index,
        };
        self.records.lock().unwrap().push(record.clone());
        record
    }

    pub fn set_fail_estimation(&self, fail: bool) {
        self.fail_estimation.store(fail, Ordering::SeqCst);
    }

    pub fn estimation_calls(&self) -> u64 {
        self.estimation_calls.load(Ordering::SeqCst)
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl LedgerClient for InMemoryLedger {
    async fn pending_nonce(&self, _address: Address) -> Result<u64> {
        Ok(7)
    }

    async fn gas_price(&self) -> Result<U256> {
        Ok(U256::from(1_000_000_000u64))
    }

    async fn estimate_gas(&self, _from: Address, _data: Vec<u8>) -> Result<u64> {
        self.estimation_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_estimation.load(Ordering::SeqCst) {
            return Err(NotaryError::Estimation("ledger unreachable".into()));
        }
        Ok(60_000)
    }

    async fn find_registrations(&self, digest: Digest) -> Result<Vec<LedgerRecord>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.digest == digest)
            .cloned()
            .collect())
    }
}

/// How a [`ScriptedSigner`] responds to a submission
pub enum SignerScript {
    /// Sign and return a hash derived from the payload
    Accept,
    /// Decline, as a user pressing "reject" in the wallet
    Reject,
    /// Never respond, to exercise timeouts
    Hang,
    /// Fail with a nonce conflict, as the ledger rejecting a duplicate
    NonceConflict,
}

/// Wallet double that follows a fixed script.
pub struct ScriptedSigner {
    script: SignerScript,
    pub submissions: Mutex<Vec<UnsignedTransaction>>,
}

impl ScriptedSigner {
    pub fn new(script: SignerScript) -> Self {
        Self {
            script,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

#[async_trait]
impl WalletSigner for ScriptedSigner {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        Ok(vec![sender_address()])
    }

    async fn sign_and_send(&self, tx: &UnsignedTransaction) -> Result<TxHash> {
        match self.script {
            SignerScript::Accept => {
                self.submissions.lock().unwrap().push(tx.clone());
                let mut hash = [0u8; 32];
                let len = tx.data.len().min(32);
                hash[..len].copy_from_slice(&tx.data[..len]);
                Ok(B256::from(hash))
            }
            SignerScript::Reject => Err(NotaryError::UserRejected),
            SignerScript::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                unreachable!("hanging signer responded")
            }
            SignerScript::NonceConflict => Err(NotaryError::SubmissionConflict(
                "nonce too low".into(),
            )),
        }
    }
}
