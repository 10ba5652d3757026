//! Validation utilities

use crate::card::scheme::{CARD_NUMBER_LENGTH, PIN_LENGTH};
use crate::types::*;

/// Validate that an amount is positive
pub fn validate_amount(amount: i64) -> BankResult<()> {
    if amount <= 0 {
        Err(BankError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that a card number is exactly 16 ASCII digits
pub fn validate_card_number_format(card_number: &str) -> BankResult<()> {
    if card_number.len() != CARD_NUMBER_LENGTH
        || !card_number.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(BankError::Validation(format!(
            "Card number must be exactly {} digits",
            CARD_NUMBER_LENGTH
        )));
    }

    Ok(())
}

/// Validate that a PIN is exactly 4 ASCII digits
pub fn validate_pin_format(pin: &str) -> BankResult<()> {
    if pin.len() != PIN_LENGTH || !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BankError::Validation(format!(
            "PIN must be exactly {} digits",
            PIN_LENGTH
        )));
    }

    Ok(())
}
