//! Registration coordinator
//!
//! Owns the lifecycle of one registration request: digest computation,
//! transaction construction, and the hand-off to the external signer.
//! Digest and builder failures abort immediately — no partial submission.
//! The coordinator's contract ends at `Submitted`; it never waits for
//! ledger confirmation, and it never retries a signed submission.

use std::io::Read;
use std::time::Duration;

use alloy::primitives::Address;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::crypto::digest_reader;
use crate::domain::{PreparedRegistration, RegistrationPhase, RegistrationReceipt};
use crate::error::{NotaryError, Result};
use crate::signer::{SignerSession, WalletSigner};
use crate::tx::TransactionBuilder;

/// Parse and validate a requester address.
///
/// Lowercase and uppercase hex carry no checksum and are accepted as-is;
/// mixed-case input must be a valid EIP-55 checksummed address.
pub fn parse_address(input: &str) -> Result<Address> {
    let hex_part = input.strip_prefix("0x").unwrap_or(input);
    let mixed_case = hex_part.chars().any(|c| c.is_ascii_lowercase())
        && hex_part.chars().any(|c| c.is_ascii_uppercase());

    let parsed = if mixed_case {
        Address::parse_checksummed(input, None).ok()
    } else {
        input.parse().ok()
    };

    parsed.ok_or_else(|| NotaryError::InvalidAddress(input.to_string()))
}

/// Drives registration requests through the state machine.
///
/// Stateless across requests: each call reads fresh ledger state (nonce,
/// gas), so callers retry transient failures by issuing a new request, never
/// by resubmitting a stale transaction. Registering the same digest twice is
/// not rejected here — dedup is a ledger property surfaced at verification.
#[derive(Clone)]
pub struct RegistrationCoordinator {
    builder: TransactionBuilder,
    /// Deadline applied to every ledger and signer suspension point.
    timeout: Duration,
}

impl RegistrationCoordinator {
    pub fn new(builder: TransactionBuilder, timeout: Duration) -> Self {
        Self { builder, timeout }
    }

    fn step(&self, phase: &mut RegistrationPhase, next: RegistrationPhase) {
        debug_assert!(phase.can_transition_to(next), "{phase} -> {next}");
        debug!(from = %phase, to = %next, "registration phase transition");
        *phase = next;
    }

    /// Run the machine through `TransactionBuilt` and return the unsigned
    /// transaction, for callers whose signer lives outside this process
    /// (the browser wallet path).
    pub async fn prepare<R: Read>(&self, source: R, sender: &str) -> Result<PreparedRegistration> {
        let from = parse_address(sender)?;
        let mut phase = RegistrationPhase::Idle;

        let digest = digest_reader(source)?;
        self.step(&mut phase, RegistrationPhase::DigestComputed);

        let tx = timeout(self.timeout, self.builder.build(&digest, from))
            .await
            .map_err(|_| NotaryError::Timeout(self.timeout))??;
        self.step(&mut phase, RegistrationPhase::TransactionBuilt);

        info!(digest = %digest, from = %from, "registration prepared");
        Ok(PreparedRegistration { digest, tx })
    }

    /// Run the full machine through `Submitted`, driving the given signer.
    ///
    /// An explicit signer rejection is terminal for this request; a timeout
    /// is retryable with a new request. The session is re-checked before the
    /// hand-off so a request keyed to a prior account fails cleanly instead
    /// of continuing with a mismatched signer.
    ///
    /// Dropping the returned future at any suspension point abandons the
    /// request without partial state on this side; a transaction the signer
    /// already submitted cannot be un-submitted.
    pub async fn register<R: Read>(
        &self,
        source: R,
        sender: &str,
        signer: &dyn WalletSigner,
        session: &SignerSession,
    ) -> Result<RegistrationReceipt> {
        let from = parse_address(sender)?;
        if !session.holds(from) {
            return Err(NotaryError::StaleSession(from));
        }

        let PreparedRegistration { digest, tx } = self.prepare(source, sender).await?;
        let mut phase = RegistrationPhase::TransactionBuilt;

        // account may have switched while the transaction was being built
        if !session.holds(from) {
            warn!(from = %from, "signer session changed mid-request");
            return Err(NotaryError::StaleSession(from));
        }

        self.step(&mut phase, RegistrationPhase::AwaitingSignature);
        let tx_hash = timeout(self.timeout, signer.sign_and_send(&tx))
            .await
            .map_err(|_| NotaryError::Timeout(self.timeout))??;

        self.step(&mut phase, RegistrationPhase::Submitted);
        info!(digest = %digest, tx_hash = %tx_hash, "registration submitted");

        Ok(RegistrationReceipt { digest, tx_hash })
    }
}
