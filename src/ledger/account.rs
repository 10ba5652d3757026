//! Account lifecycle: creation, authentication, closing

use crate::card;
use crate::traits::*;
use crate::types::*;

/// Account manager for handling account lifecycle operations
pub struct AccountManager<S: AccountStore> {
    pub(crate) storage: S,
}

impl<S: AccountStore> AccountManager<S> {
    /// Create a new account manager
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Create a new account with a freshly issued card number and PIN
    ///
    /// The store is used as the uniqueness oracle during issuing, and the
    /// account is persisted with a zero balance before it is returned.
    pub async fn create_account(&mut self) -> BankResult<Account> {
        let issued = card::generate_unique(&self.storage).await?;

        let account = Account::new(issued.card_number, issued.pin);
        self.storage.insert_account(&account).await?;

        Ok(account)
    }

    /// Look up an account and check its PIN
    ///
    /// Returns `None` when the card number is unknown or the stored PIN
    /// differs from the supplied one; the caller cannot tell which.
    pub async fn authenticate(
        &self,
        card_number: &str,
        pin: &str,
    ) -> BankResult<Option<Account>> {
        match self.storage.find_account(card_number).await? {
            Some(account) if account.pin == pin => Ok(Some(account)),
            _ => Ok(None),
        }
    }

    /// Look up an account by card number
    pub async fn get_account(&self, card_number: &str) -> BankResult<Option<Account>> {
        self.storage.find_account(card_number).await
    }

    /// Look up an account by card number, returning an error if not found
    pub async fn get_account_required(&self, card_number: &str) -> BankResult<Account> {
        self.storage
            .find_account(card_number)
            .await?
            .ok_or_else(|| BankError::AccountNotFound(card_number.to_string()))
    }

    /// Permanently delete an account
    ///
    /// Takes the handle by value: a closed account cannot be passed to any
    /// further operation.
    pub async fn close_account(&mut self, account: Account) -> BankResult<()> {
        self.storage.delete_account(&account.card_number).await
    }
}
