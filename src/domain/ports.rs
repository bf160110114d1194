use super::account::Account;
use super::payment::Transaction;
use crate::error::Result;
use async_trait::async_trait;

/// Process-scoped session holding exactly one account.
///
/// Stands in for a backend; implementations are injected into the engine,
/// never reached through a global.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<Account>;
    async fn save(&self, account: Account) -> Result<()>;
}

/// Append-only, most-recent-first transaction log for the session account.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn record(&self, tx: Transaction) -> Result<()>;
    async fn statement(&self) -> Result<Vec<Transaction>>;
}

pub type SessionStoreBox = Box<dyn SessionStore>;
pub type LedgerStoreBox = Box<dyn LedgerStore>;
