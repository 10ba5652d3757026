//! Balance mutations: credit, debit, and transfers between accounts

use crate::card::scheme::validate_checksum;
use crate::traits::*;
use crate::types::*;

/// Balance manager for handling money movement on live accounts
pub struct BalanceManager<S: AccountStore> {
    storage: S,
}

impl<S: AccountStore> BalanceManager<S> {
    /// Create a new balance manager
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Add an amount to an account's balance
    ///
    /// The new balance is persisted before the in-memory value changes,
    /// so the two never diverge. There is no upper bound.
    pub async fn credit(&mut self, account: &mut Account, amount: i64) -> BankResult<()> {
        let new_balance = account.balance + amount;
        self.storage
            .update_balance(&account.card_number, new_balance)
            .await?;

        account.balance = new_balance;
        account.updated_at = chrono::Utc::now().naive_utc();
        Ok(())
    }

    /// Take an amount from an account's balance
    ///
    /// Returns `false` and performs no mutation when the balance does not
    /// cover the amount. This check is the only guard against a negative
    /// balance.
    pub async fn debit(&mut self, account: &mut Account, amount: i64) -> BankResult<bool> {
        if account.balance < amount {
            return Ok(false);
        }

        let new_balance = account.balance - amount;
        self.storage
            .update_balance(&account.card_number, new_balance)
            .await?;

        account.balance = new_balance;
        account.updated_at = chrono::Utc::now().naive_utc();
        Ok(true)
    }

    /// Vet a card number as the target of a transfer out of `source`
    ///
    /// The checks run in a fixed order and stop at the first failure:
    /// checksum validity, then self-transfer, then existence in the store.
    pub async fn check_transfer_target(
        &self,
        target_number: &str,
        source: &Account,
    ) -> BankResult<TransferCheck> {
        if !validate_checksum(target_number) {
            return Ok(TransferCheck::MalformedNumber);
        }

        if target_number == source.card_number {
            return Ok(TransferCheck::SelfTransfer);
        }

        if self.storage.find_account(target_number).await?.is_none() {
            return Ok(TransferCheck::UnknownCard);
        }

        Ok(TransferCheck::Approved)
    }

    /// Move an amount from one account to another
    ///
    /// Returns `false` with the target untouched when the source balance is
    /// insufficient. The debit and the credit are two separate store writes;
    /// a crash between them loses the amount in flight.
    pub async fn transfer(
        &mut self,
        source: &mut Account,
        target: &mut Account,
        amount: i64,
    ) -> BankResult<bool> {
        if !self.debit(source, amount).await? {
            return Ok(false);
        }

        self.credit(target, amount).await?;
        Ok(true)
    }
}
