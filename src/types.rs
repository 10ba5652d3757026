//! Core types and data structures for the banking system

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A customer account identified by its card number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// 16-digit card number: issuer prefix, account identifier, check digit
    pub card_number: String,
    /// 4-digit PIN, zero-padded, assigned at creation and immutable
    pub pin: String,
    /// Current balance in the smallest currency unit, never negative
    pub balance: i64,
    /// When the account was created
    pub created_at: NaiveDateTime,
    /// When the account was last updated
    pub updated_at: NaiveDateTime,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(card_number: String, pin: String) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            card_number,
            pin,
            balance: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Outcome of vetting a card number as a transfer target
///
/// The checks run in a fixed order and stop at the first failure:
/// checksum, then self-transfer, then existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferCheck {
    /// Target is valid; the message prompts for the amount
    Approved,
    /// Card number fails the checksum (or is not 16 digits)
    MalformedNumber,
    /// Target is the source account's own card number
    SelfTransfer,
    /// Checksum-valid number with no account behind it
    UnknownCard,
}

impl TransferCheck {
    /// Whether the transfer may proceed
    pub fn is_approved(&self) -> bool {
        matches!(self, TransferCheck::Approved)
    }

    /// The user-facing text for this verdict
    pub fn message(&self) -> &'static str {
        match self {
            TransferCheck::Approved => "Enter how much money you want to transfer:",
            TransferCheck::MalformedNumber => {
                "Probably you made a mistake in the card number. Please try again!"
            }
            TransferCheck::SelfTransfer => "You can't transfer money to the same account!",
            TransferCheck::UnknownCard => "Such a card does not exist.",
        }
    }
}

/// Errors that can occur in the banking system
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Card number already issued: {0}")]
    DuplicateCard(String),
    #[error("Card issuing failed: {0}")]
    Issuance(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for banking operations
pub type BankResult<T> = Result<T, BankError>;
