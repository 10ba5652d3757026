//! # Banking Core
//!
//! A small banking simulator core providing card issuing, PIN
//! authentication, and balance management over a pluggable store.
//!
//! ## Features
//!
//! - **Card issuing**: unique 16-digit card numbers with a fixed issuer
//!   prefix and a Luhn check digit, plus random 4-digit PINs
//! - **Checksum validation**: catch mistyped card numbers before any lookup
//! - **Account ledger**: create, authenticate, credit, debit, transfer, close
//! - **Session state machine**: logged-out / logged-in / exit, owned by the
//!   caller rather than kept in process-wide state
//! - **Storage abstraction**: database-agnostic design with trait-based
//!   storage; in-memory and SQLite implementations included
//!
//! ## Quick Start
//!
//! ```rust
//! use banking_core::utils::MemoryStore;
//! use banking_core::Bank;
//!
//! # async fn demo() -> banking_core::BankResult<()> {
//! let mut bank = Bank::new(MemoryStore::new());
//! let mut account = bank.create_account().await?;
//! bank.credit(&mut account, 1_000).await?;
//! # Ok(())
//! # }
//! ```

pub mod card;
pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use card::*;
pub use ledger::*;
pub use traits::*;
pub use types::*;

// Re-export the menu texts for convenience
pub use ledger::session::messages;
