//! SQLite-backed storage for the persisted card table

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::traits::*;
use crate::types::*;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS card (
    id INTEGER PRIMARY KEY,
    number TEXT UNIQUE NOT NULL,
    pin TEXT NOT NULL,
    balance INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

/// SQLite-backed account storage
///
/// The card table is created on open when absent. Cloning the store shares
/// the underlying connection.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> BankResult<Self> {
        let conn = Connection::open(path).map_err(storage_err)?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory database, used by tests
    pub fn open_in_memory() -> BankResult<Self> {
        let conn = Connection::open_in_memory().map_err(storage_err)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> BankResult<Self> {
        conn.execute(CREATE_TABLE_SQL, []).map_err(storage_err)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Drop and recreate the card table
    ///
    /// Local test helper mirroring a fresh database; not part of the
    /// [`AccountStore`] interface.
    pub fn reset(&self) -> BankResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DROP TABLE IF EXISTS card", [])
            .map_err(storage_err)?;
        conn.execute(CREATE_TABLE_SQL, []).map_err(storage_err)?;
        Ok(())
    }
}

fn storage_err(err: rusqlite::Error) -> BankError {
    BankError::Storage(err.to_string())
}

#[async_trait]
impl AccountStore for SqliteStore {
    async fn insert_account(&mut self, account: &Account) -> BankResult<()> {
        let conn = self.conn.lock().unwrap();
        let result = conn.execute(
            "INSERT INTO card (number, pin, balance, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                account.card_number,
                account.pin,
                account.balance,
                account.created_at.format(DATETIME_FORMAT).to_string(),
                account.updated_at.format(DATETIME_FORMAT).to_string(),
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(BankError::DuplicateCard(account.card_number.clone()))
            }
            Err(e) => Err(storage_err(e)),
        }
    }

    async fn find_account(&self, card_number: &str) -> BankResult<Option<Account>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT number, pin, balance, created_at, updated_at
             FROM card WHERE number = ?1",
            params![card_number],
            |row| {
                let created_at: String = row.get(3)?;
                let updated_at: String = row.get(4)?;

                Ok(Account {
                    card_number: row.get(0)?,
                    pin: row.get(1)?,
                    balance: row.get(2)?,
                    created_at: NaiveDateTime::parse_from_str(&created_at, DATETIME_FORMAT)
                        .map_err(|_| rusqlite::Error::InvalidQuery)?,
                    updated_at: NaiveDateTime::parse_from_str(&updated_at, DATETIME_FORMAT)
                        .map_err(|_| rusqlite::Error::InvalidQuery)?,
                })
            },
        )
        .optional()
        .map_err(storage_err)
    }

    async fn update_balance(&mut self, card_number: &str, new_balance: i64) -> BankResult<()> {
        let now = chrono::Utc::now()
            .naive_utc()
            .format(DATETIME_FORMAT)
            .to_string();

        let conn = self.conn.lock().unwrap();
        let changed = conn
            .execute(
                "UPDATE card SET balance = ?1, updated_at = ?2 WHERE number = ?3",
                params![new_balance, now, card_number],
            )
            .map_err(storage_err)?;

        if changed == 0 {
            return Err(BankError::AccountNotFound(card_number.to_string()));
        }
        Ok(())
    }

    async fn delete_account(&mut self, card_number: &str) -> BankResult<()> {
        let conn = self.conn.lock().unwrap();
        let changed = conn
            .execute("DELETE FROM card WHERE number = ?1", params![card_number])
            .map_err(storage_err)?;

        if changed == 0 {
            return Err(BankError::AccountNotFound(card_number.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account(card_number: &str, balance: i64) -> Account {
        let mut account = Account::new(card_number.to_string(), "1234".to_string());
        account.balance = balance;
        account
    }

    #[tokio::test]
    async fn test_insert_and_find_round_trip() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let account = test_account("4000008449433403", 250);

        store.insert_account(&account).await.unwrap();

        let found = store.find_account("4000008449433403").await.unwrap();
        assert_eq!(found, Some(account));
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_rejected() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let account = test_account("4000008449433403", 0);

        store.insert_account(&account).await.unwrap();
        let result = store.insert_account(&account).await;

        assert!(matches!(result, Err(BankError::DuplicateCard(_))));
    }

    #[tokio::test]
    async fn test_update_balance_persists() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let account = test_account("4000008449433403", 0);
        store.insert_account(&account).await.unwrap();

        store.update_balance("4000008449433403", 7_500).await.unwrap();

        let found = store.find_account("4000008449433403").await.unwrap().unwrap();
        assert_eq!(found.balance, 7_500);
    }

    #[tokio::test]
    async fn test_update_and_delete_of_missing_card_fail() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        let updated = store.update_balance("4000008449433403", 1).await;
        assert!(matches!(updated, Err(BankError::AccountNotFound(_))));

        let deleted = store.delete_account("4000008449433403").await;
        assert!(matches!(deleted, Err(BankError::AccountNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_the_record() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let account = test_account("4000008449433403", 0);
        store.insert_account(&account).await.unwrap();

        store.delete_account("4000008449433403").await.unwrap();

        let found = store.find_account("4000008449433403").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_reset_drops_all_rows() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .insert_account(&test_account("4000008449433403", 10))
            .await
            .unwrap();

        store.reset().unwrap();

        let found = store.find_account("4000008449433403").await.unwrap();
        assert!(found.is_none());
    }
}
