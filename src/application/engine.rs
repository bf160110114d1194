use crate::domain::account::Balance;
use crate::domain::authorizer::authorize;
use crate::domain::payment::{PaymentRequest, Transaction};
use crate::domain::ports::{LedgerStoreBox, SessionStoreBox};
use crate::error::Result;
use chrono::Utc;

/// The main entry point for payment processing.
///
/// `PaymentEngine` owns the session and ledger stores and processes one
/// request to completion before the next one is accepted: every store
/// operation is awaited, so the read-validate-write cycle on the balance is
/// never interleaved with another request.
pub struct PaymentEngine {
    session: SessionStoreBox,
    ledger: LedgerStoreBox,
}

impl PaymentEngine {
    pub fn new(session: SessionStoreBox, ledger: LedgerStoreBox) -> Self {
        Self { session, ledger }
    }

    /// Submits a payment request for authorization.
    ///
    /// On success the account snapshot is saved before the transaction is
    /// recorded: a completed transaction must never reach the ledger unless
    /// its debit landed. A decline leaves both stores untouched and is
    /// returned as a [`crate::error::PaymentError::Declined`] value for the
    /// caller to render.
    pub async fn submit(&self, request: PaymentRequest) -> Result<Transaction> {
        let account = self.session.load().await?;
        let authorization = authorize(&account, &request, Utc::now())?;

        self.session.save(authorization.account).await?;
        self.ledger.record(authorization.transaction.clone()).await?;

        Ok(authorization.transaction)
    }

    /// Flips the account's offline-mode flag.
    pub async fn set_offline_mode(&self, enabled: bool) -> Result<()> {
        let mut account = self.session.load().await?;
        account.offline_mode = enabled;
        self.session.save(account).await
    }

    /// Current balance snapshot.
    pub async fn balance(&self) -> Result<Balance> {
        Ok(self.session.load().await?.balance)
    }

    /// Consumes the engine and returns the ledger, most recent first.
    pub async fn into_statement(self) -> Result<Vec<Transaction>> {
        self.ledger.statement().await
    }
}
