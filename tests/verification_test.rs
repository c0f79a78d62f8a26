//! Verification resolver integration tests
//!
//! Exercise lookup semantics against an in-memory ledger: round trips,
//! tamper detection, duplicate resolution, and the negative path.

mod common;

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use notary_anchor::crypto::digest_bytes;
use notary_anchor::domain::VerificationResult;
use notary_anchor::ledger::RecordIndex;
use notary_anchor::verify::VerificationResolver;

use common::*;

const TIMEOUT: Duration = Duration::from_secs(5);

fn resolver(ledger: Arc<InMemoryLedger>) -> VerificationResolver {
    VerificationResolver::new(RecordIndex::new(ledger), TIMEOUT)
}

#[tokio::test]
async fn registered_document_verifies_with_original_timestamp() {
    let ledger = Arc::new(InMemoryLedger::new());
    let content = report_pdf();
    ledger.confirm(digest_bytes(&content), sender_address(), 1_700_000_000);

    let result = resolver(ledger)
        .verify(Cursor::new(content.clone()))
        .await
        .unwrap();

    match result {
        VerificationResult::Found { digest, record } => {
            assert_eq!(digest, digest_bytes(&content));
            assert_eq!(record.timestamp, 1_700_000_000);
            assert_eq!(record.registrant, sender_address());
        }
        VerificationResult::NotFound { .. } => panic!("expected Found"),
    }
}

#[tokio::test]
async fn unregistered_document_is_not_found_without_error() {
    let ledger = Arc::new(InMemoryLedger::new());

    let result = resolver(ledger)
        .verify(Cursor::new(b"never registered".to_vec()))
        .await
        .unwrap();

    assert!(!result.is_found());
}

#[tokio::test]
async fn verification_is_idempotent() {
    let ledger = Arc::new(InMemoryLedger::new());
    let content = report_pdf();
    ledger.confirm(digest_bytes(&content), sender_address(), 1_700_000_000);
    let resolver = resolver(ledger);

    let first = resolver.verify(Cursor::new(content.clone())).await.unwrap();
    let second = resolver.verify(Cursor::new(content)).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn single_flipped_byte_is_not_found() {
    let ledger = Arc::new(InMemoryLedger::new());
    let original = report_pdf();
    ledger.confirm(digest_bytes(&original), sender_address(), 1_700_000_000);

    let mut tampered = original;
    tampered[5] ^= 0x01;

    let result = resolver(ledger)
        .verify(Cursor::new(tampered))
        .await
        .unwrap();

    assert!(!result.is_found());
}

#[tokio::test]
async fn duplicate_registrations_resolve_to_earliest_confirmed() {
    let ledger = Arc::new(InMemoryLedger::new());
    let content = report_pdf();
    let digest = digest_bytes(&content);

    // confirmed later but appended to the mirror first: ledger order, not
    // local observation order, must decide
    ledger.confirm_at(digest, other_address(), 2_000, 50, 0);
    ledger.confirm_at(digest, sender_address(), 1_000, 10, 3);
    ledger.confirm_at(digest, other_address(), 1_500, 30, 1);

    let result = resolver(ledger).verify(Cursor::new(content)).await.unwrap();

    match result {
        VerificationResult::Found { record, .. } => {
            assert_eq!(record.timestamp, 1_000);
            assert_eq!(record.registrant, sender_address());
            assert_eq!(record.block_number, 10);
        }
        VerificationResult::NotFound { .. } => panic!("expected Found"),
    }
}

#[tokio::test]
async fn same_block_duplicates_resolve_by_log_index() {
    let ledger = Arc::new(InMemoryLedger::new());
    let content = report_pdf();
    let digest = digest_bytes(&content);

    ledger.confirm_at(digest, other_address(), 1_000, 10, 7);
    ledger.confirm_at(digest, sender_address(), 1_000, 10, 2);

    let result = resolver(ledger).verify(Cursor::new(content)).await.unwrap();

    match result {
        VerificationResult::Found { record, .. } => {
            assert_eq!(record.log_index, 2);
            assert_eq!(record.registrant, sender_address());
        }
        VerificationResult::NotFound { .. } => panic!("expected Found"),
    }
}

#[tokio::test]
async fn round_trip_register_then_verify() {
    use notary_anchor::register::RegistrationCoordinator;
    use notary_anchor::signer::session;
    use notary_anchor::tx::TransactionBuilder;

    let ledger = Arc::new(InMemoryLedger::new());
    let builder = TransactionBuilder::new(ledger.clone(), registry_address());
    let coordinator = RegistrationCoordinator::new(builder, TIMEOUT);
    let signer = ScriptedSigner::new(SignerScript::Accept);
    let (_handle, session) = session(Some(sender_address()));

    let content = b"quarterly report, final version".to_vec();
    let receipt = coordinator
        .register(Cursor::new(content.clone()), SENDER, &signer, &session)
        .await
        .unwrap();

    // the ledger confirms the submitted registration
    ledger.confirm(receipt.digest, sender_address(), 1_712_000_000);

    let result = resolver(ledger).verify(Cursor::new(content)).await.unwrap();
    match result {
        VerificationResult::Found { digest, record } => {
            assert_eq!(digest, receipt.digest);
            assert_eq!(record.timestamp, 1_712_000_000);
        }
        VerificationResult::NotFound { .. } => panic!("expected Found"),
    }
}
