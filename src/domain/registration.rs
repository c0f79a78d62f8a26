//! Registration request lifecycle

use std::fmt;

use serde::{Deserialize, Serialize};

use super::transaction::UnsignedTransaction;
use super::types::{Digest, TxHash};

/// Phases a registration request moves through.
///
/// `Idle → DigestComputed → TransactionBuilt → AwaitingSignature →
/// Submitted → {Confirmed | Failed}`. The coordinator's contract ends at
/// `Submitted`; confirmation tracking is delegated to the caller and the
/// ledger client, since confirmation latency is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationPhase {
    Idle,
    DigestComputed,
    TransactionBuilt,
    AwaitingSignature,
    Submitted,
    Confirmed,
    Failed,
}

impl RegistrationPhase {
    /// Whether `next` is a legal transition from this phase.
    pub fn can_transition_to(&self, next: RegistrationPhase) -> bool {
        use RegistrationPhase::*;
        match (self, next) {
            (Idle, DigestComputed) => true,
            (DigestComputed, TransactionBuilt) => true,
            (TransactionBuilt, AwaitingSignature) => true,
            (AwaitingSignature, Submitted) => true,
            (Submitted, Confirmed) => true,
            // any pre-terminal phase may fail
            (Idle | DigestComputed | TransactionBuilt | AwaitingSignature | Submitted, Failed) => {
                true
            }
            _ => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RegistrationPhase::Confirmed | RegistrationPhase::Failed)
    }
}

impl fmt::Display for RegistrationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RegistrationPhase::Idle => "idle",
            RegistrationPhase::DigestComputed => "digest_computed",
            RegistrationPhase::TransactionBuilt => "transaction_built",
            RegistrationPhase::AwaitingSignature => "awaiting_signature",
            RegistrationPhase::Submitted => "submitted",
            RegistrationPhase::Confirmed => "confirmed",
            RegistrationPhase::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// A registration driven through `TransactionBuilt`, ready for an external
/// signer that this process cannot reach directly (the browser wallet path).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreparedRegistration {
    pub digest: Digest,
    pub tx: UnsignedTransaction,
}

/// Success result of a registration driven through `Submitted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub digest: Digest,
    pub tx_hash: TxHash,
}
