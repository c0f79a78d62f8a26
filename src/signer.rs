//! Wallet signer seam and account session
//!
//! The private key never enters this process: signing is performed by an
//! external wallet reached through [`WalletSigner`]. The wallet's selected
//! account is tracked per session in [`SignerSession`], not in process-wide
//! state, so concurrent callers cannot interfere and an account switch is
//! observable by every in-flight request keyed to the old address.

use alloy::primitives::Address;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tokio::sync::watch;

use crate::domain::{TxHash, UnsignedTransaction};
use crate::error::Result;

/// External signing collaborator holding the requester's private key.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Accounts the wallet is willing to sign for.
    async fn request_accounts(&self) -> Result<Vec<Address>>;

    /// Sign and submit an unsigned transaction, returning its hash.
    ///
    /// Fails with `UserRejected` when the user declines — terminal for the
    /// request — or with a transport error for network/key failures, which a
    /// caller may retry with a freshly built transaction.
    async fn sign_and_send(&self, tx: &UnsignedTransaction) -> Result<TxHash>;
}

/// Read side of a session's selected account.
///
/// `None` means the wallet is disconnected.
#[derive(Clone)]
pub struct SignerSession {
    rx: watch::Receiver<Option<Address>>,
}

impl SignerSession {
    /// Currently selected account, if any.
    pub fn account(&self) -> Option<Address> {
        *self.rx.borrow()
    }

    /// Whether the session still holds `address`.
    pub fn holds(&self, address: Address) -> bool {
        self.account() == Some(address)
    }

    /// Wait until the selected account changes.
    pub async fn changed(&mut self) -> Option<Address> {
        // sender dropped means the session is over; report disconnected
        if self.rx.changed().await.is_err() {
            return None;
        }
        *self.rx.borrow()
    }
}

/// Write side of a session; owned by whatever receives wallet
/// account-change notifications.
pub struct SessionHandle {
    tx: watch::Sender<Option<Address>>,
}

impl SessionHandle {
    /// Atomically switch the session to a new account.
    pub fn switch(&self, address: Address) {
        self.tx.send_replace(Some(address));
    }

    /// Mark the wallet disconnected.
    pub fn disconnect(&self) {
        self.tx.send_replace(None);
    }
}

/// Create a session with an initial selected account.
pub fn session(initial: Option<Address>) -> (SessionHandle, SignerSession) {
    let (tx, rx) = watch::channel(initial);
    (SessionHandle { tx }, SignerSession { rx })
}

/// Establish a session from the wallet's account list.
///
/// The wallet's first account becomes the selected one; a wallet that
/// returns no accounts yields a disconnected session. The handle should be
/// driven by the wallet's account-change notifications from then on.
pub async fn connect(signer: &dyn WalletSigner) -> Result<(SessionHandle, SignerSession)> {
    let accounts = signer.request_accounts().await?;
    Ok(session(accounts.first().copied()))
}
