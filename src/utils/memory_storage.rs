//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory storage implementation for testing and development
#[derive(Debug, Clone)]
pub struct MemoryStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl MemoryStore {
    /// Create a new memory store instance
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.accounts.write().unwrap().clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn insert_account(&mut self, account: &Account) -> BankResult<()> {
        let mut accounts = self.accounts.write().unwrap();
        if accounts.contains_key(&account.card_number) {
            return Err(BankError::DuplicateCard(account.card_number.clone()));
        }

        accounts.insert(account.card_number.clone(), account.clone());
        Ok(())
    }

    async fn find_account(&self, card_number: &str) -> BankResult<Option<Account>> {
        Ok(self.accounts.read().unwrap().get(card_number).cloned())
    }

    async fn update_balance(&mut self, card_number: &str, new_balance: i64) -> BankResult<()> {
        match self.accounts.write().unwrap().get_mut(card_number) {
            Some(account) => {
                account.balance = new_balance;
                account.updated_at = chrono::Utc::now().naive_utc();
                Ok(())
            }
            None => Err(BankError::AccountNotFound(card_number.to_string())),
        }
    }

    async fn delete_account(&mut self, card_number: &str) -> BankResult<()> {
        if self.accounts.write().unwrap().remove(card_number).is_some() {
            Ok(())
        } else {
            Err(BankError::AccountNotFound(card_number.to_string()))
        }
    }
}
