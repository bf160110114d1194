use crate::domain::account::Account;
use crate::domain::payment::Transaction;
use crate::domain::ports::{LedgerStore, SessionStore};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory session holding the single account of this run.
///
/// Uses `Arc<RwLock<Account>>` to allow shared concurrent access. The account
/// exists for the lifetime of the process and is discarded on exit.
#[derive(Clone)]
pub struct InMemorySessionStore {
    account: Arc<RwLock<Account>>,
}

impl InMemorySessionStore {
    /// Creates a session seeded with the given account.
    pub fn new(account: Account) -> Self {
        Self {
            account: Arc::new(RwLock::new(account)),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Account> {
        let account = self.account.read().await;
        Ok(account.clone())
    }

    async fn save(&self, account: Account) -> Result<()> {
        let mut current = self.account.write().await;
        *current = account;
        Ok(())
    }
}

/// A thread-safe in-memory transaction ledger.
///
/// New transactions are prepended so the statement reads most-recent-first.
#[derive(Default, Clone)]
pub struct InMemoryLedger {
    transactions: Arc<RwLock<Vec<Transaction>>>,
}

impl InMemoryLedger {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedger {
    async fn record(&self, tx: Transaction) -> Result<()> {
        let mut transactions = self.transactions.write().await;
        transactions.insert(0, tx);
        Ok(())
    }

    async fn statement(&self) -> Result<Vec<Transaction>> {
        let transactions = self.transactions.read().await;
        Ok(transactions.clone())
    }
}
