//! Traits for storage abstraction

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for the account ledger
///
/// This trait allows the banking core to work with any storage backend
/// (SQLite, in-memory, etc.) by implementing these methods. Records are
/// keyed by the card number, which the backend must keep unique.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account, failing if the card number is already present
    async fn insert_account(&mut self, account: &Account) -> BankResult<()>;

    /// Look up an account by its card number
    async fn find_account(&self, card_number: &str) -> BankResult<Option<Account>>;

    /// Overwrite the stored balance for an account
    async fn update_balance(&mut self, card_number: &str, new_balance: i64) -> BankResult<()>;

    /// Permanently delete an account
    async fn delete_account(&mut self, card_number: &str) -> BankResult<()>;
}
