//! Session state machine driven by the surrounding menu loop
//!
//! The session object is owned by the caller and passed to each operation;
//! nothing here touches storage. Unrecognized menu input simply calls no
//! method, which leaves the state unchanged.

use crate::types::Account;

/// User-facing texts the menu loop prints verbatim
pub mod messages {
    pub const CARD_CREATED: &str = "Your card has been created";
    pub const CARD_NUMBER_LABEL: &str = "Your card number:";
    pub const CARD_PIN_LABEL: &str = "Your card PIN:";
    pub const ENTER_CARD_NUMBER: &str = "Enter your card number:";
    pub const ENTER_PIN: &str = "Enter your PIN:";
    pub const ENTER_INCOME: &str = "Enter income:";
    pub const ENTER_TARGET_CARD: &str = "Enter card number:";
    pub const INCOME_ADDED: &str = "Income was added!";
    pub const TRANSFER_SUCCESS: &str = "Success!";
    pub const NOT_ENOUGH_MONEY: &str = "Not enough money!";
    pub const ACCOUNT_CLOSED: &str = "The account has been closed";
    pub const LOGIN_SUCCESS: &str = "You have successfully logged in!";
    pub const LOGIN_FAILURE: &str = "Wrong card number or PIN!";
    pub const LOGOUT_SUCCESS: &str = "You have successfully logged out!";
    pub const GOODBYE: &str = "Bye!";
}

/// Which operations the menu may offer right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No authenticated account; create, log in, or exit
    #[default]
    LoggedOut,
    /// An account is live; balance, income, transfer, close, log out, exit
    LoggedIn,
    /// Terminal state, the process loop should stop
    Exit,
}

/// One user's session: the current state plus the logged-in account, if any
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    account: Option<Account>,
}

impl Session {
    /// Start a fresh logged-out session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The logged-in account, if any
    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// Mutable access to the logged-in account, if any
    pub fn account_mut(&mut self) -> Option<&mut Account> {
        self.account.as_mut()
    }

    /// Whether the session has not reached the terminal state
    pub fn is_active(&self) -> bool {
        self.state != SessionState::Exit
    }

    /// Enter the logged-in state with an authenticated account
    pub fn log_in(&mut self, account: Account) {
        self.account = Some(account);
        self.state = SessionState::LoggedIn;
    }

    /// Drop the current account and return to the logged-out state
    pub fn log_out(&mut self) {
        self.account = None;
        self.state = SessionState::LoggedOut;
    }

    /// Take ownership of the current account, returning to logged-out
    ///
    /// Used when closing an account: the caller hands the returned value
    /// to the bank, after which no handle to it remains in the session.
    pub fn take_account(&mut self) -> Option<Account> {
        self.state = SessionState::LoggedOut;
        self.account.take()
    }

    /// Enter the terminal state
    pub fn exit(&mut self) {
        self.account = None;
        self.state = SessionState::Exit;
    }

    /// The menu text for the current state, or `None` once exited
    pub fn menu(&self) -> Option<&'static str> {
        match self.state {
            SessionState::LoggedOut => Some(
                "1. Create an account\n\
                 2. Log into account\n\
                 0. Exit",
            ),
            SessionState::LoggedIn => Some(
                "1. Balance\n\
                 2. Add income\n\
                 3. Do transfer\n\
                 4. Close account\n\
                 5. Log out\n\
                 0. Exit",
            ),
            SessionState::Exit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_account() -> Account {
        Account::new("4000008449433403".to_string(), "1234".to_string())
    }

    #[test]
    fn test_new_session_is_logged_out() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::LoggedOut);
        assert!(session.account().is_none());
        assert!(session.is_active());
    }

    #[test]
    fn test_log_in_and_out() {
        let mut session = Session::new();

        session.log_in(some_account());
        assert_eq!(session.state(), SessionState::LoggedIn);
        assert!(session.account().is_some());

        session.log_out();
        assert_eq!(session.state(), SessionState::LoggedOut);
        assert!(session.account().is_none());
    }

    #[test]
    fn test_take_account_empties_the_session() {
        let mut session = Session::new();
        session.log_in(some_account());

        let taken = session.take_account();
        assert!(taken.is_some());
        assert_eq!(session.state(), SessionState::LoggedOut);
        assert!(session.account().is_none());
    }

    #[test]
    fn test_exit_is_terminal_from_either_state() {
        let mut session = Session::new();
        session.exit();
        assert_eq!(session.state(), SessionState::Exit);
        assert!(!session.is_active());

        let mut session = Session::new();
        session.log_in(some_account());
        session.exit();
        assert_eq!(session.state(), SessionState::Exit);
        assert!(session.account().is_none());
    }

    #[test]
    fn test_menu_matches_state() {
        let mut session = Session::new();
        assert!(session.menu().unwrap().starts_with("1. Create an account"));

        session.log_in(some_account());
        assert!(session.menu().unwrap().starts_with("1. Balance"));

        session.exit();
        assert!(session.menu().is_none());
    }
}
