//! Main bank orchestrator that coordinates accounts and balances

use crate::ledger::{AccountManager, BalanceManager};
use crate::traits::*;
use crate::types::*;

/// Main bank system that orchestrates all account operations
pub struct Bank<S: AccountStore> {
    account_manager: AccountManager<S>,
    balance_manager: BalanceManager<S>,
}

impl<S: AccountStore + Clone> Bank<S> {
    /// Create a new bank with the given storage backend
    pub fn new(storage: S) -> Self {
        Self {
            account_manager: AccountManager::new(storage.clone()),
            balance_manager: BalanceManager::new(storage),
        }
    }

    // Account operations
    /// Create a new account with a freshly issued card number and PIN
    pub async fn create_account(&mut self) -> BankResult<Account> {
        self.account_manager.create_account().await
    }

    /// Authenticate by card number and PIN
    pub async fn authenticate(
        &self,
        card_number: &str,
        pin: &str,
    ) -> BankResult<Option<Account>> {
        self.account_manager.authenticate(card_number, pin).await
    }

    /// Get an account by card number
    pub async fn get_account(&self, card_number: &str) -> BankResult<Option<Account>> {
        self.account_manager.get_account(card_number).await
    }

    /// Get an account by card number, returning an error if not found
    pub async fn get_account_required(&self, card_number: &str) -> BankResult<Account> {
        self.account_manager.get_account_required(card_number).await
    }

    /// Permanently close an account
    pub async fn close_account(&mut self, account: Account) -> BankResult<()> {
        self.account_manager.close_account(account).await
    }

    // Balance operations
    /// Add an amount to an account's balance
    pub async fn credit(&mut self, account: &mut Account, amount: i64) -> BankResult<()> {
        self.balance_manager.credit(account, amount).await
    }

    /// Take an amount from an account's balance
    pub async fn debit(&mut self, account: &mut Account, amount: i64) -> BankResult<bool> {
        self.balance_manager.debit(account, amount).await
    }

    /// Vet a card number as a transfer target
    pub async fn check_transfer_target(
        &self,
        target_number: &str,
        source: &Account,
    ) -> BankResult<TransferCheck> {
        self.balance_manager
            .check_transfer_target(target_number, source)
            .await
    }

    /// Move an amount from one account to another
    pub async fn transfer(
        &mut self,
        source: &mut Account,
        target: &mut Account,
        amount: i64,
    ) -> BankResult<bool> {
        self.balance_manager.transfer(source, target, amount).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_storage::MemoryStore;

    #[tokio::test]
    async fn test_bank_basic_operations() {
        let storage = MemoryStore::new();
        let mut bank = Bank::new(storage);

        // Open an account and fund it
        let mut account = bank.create_account().await.unwrap();
        assert_eq!(account.balance, 0);

        bank.credit(&mut account, 10_000).await.unwrap();
        assert_eq!(account.balance, 10_000);

        // The persisted record saw the same write
        let stored = bank.get_account_required(&account.card_number).await.unwrap();
        assert_eq!(stored.balance, 10_000);

        // Log in with the issued credentials
        let authenticated = bank
            .authenticate(&account.card_number, &account.pin)
            .await
            .unwrap();
        assert!(authenticated.is_some());

        // Debit round trip returns to the original balance
        assert!(bank.debit(&mut account, 4_000).await.unwrap());
        bank.credit(&mut account, 4_000).await.unwrap();
        assert_eq!(account.balance, 10_000);
    }

    #[tokio::test]
    async fn test_closed_account_no_longer_authenticates() {
        let storage = MemoryStore::new();
        let mut bank = Bank::new(storage);

        let account = bank.create_account().await.unwrap();
        let card_number = account.card_number.clone();
        let pin = account.pin.clone();

        bank.close_account(account).await.unwrap();

        let authenticated = bank.authenticate(&card_number, &pin).await.unwrap();
        assert!(authenticated.is_none());
    }

    #[tokio::test]
    async fn test_wrong_pin_is_rejected() {
        let storage = MemoryStore::new();
        let mut bank = Bank::new(storage);

        let account = bank.create_account().await.unwrap();
        let wrong_pin = if account.pin == "0000" { "0001" } else { "0000" };

        let authenticated = bank
            .authenticate(&account.card_number, wrong_pin)
            .await
            .unwrap();
        assert!(authenticated.is_none());
    }
}
