//! Card number scheme: issuer prefix and Luhn checksum

/// Issuer identification number prefixed to every card number
pub const ISSUER_PREFIX: &str = "400000";

/// Total length of a card number, check digit included
pub const CARD_NUMBER_LENGTH: usize = 16;

/// Length of the random account identifier inside the card number
pub const ACCOUNT_ID_LENGTH: usize = 9;

/// Length of an account PIN
pub const PIN_LENGTH: usize = 4;

/// Compute the Luhn check digit over the first 15 digits of a card number
///
/// Digits at odd positions (1-based) are doubled, doubled values over 9
/// have 9 subtracted, and the check digit is whatever brings the sum of
/// the results up to the next multiple of 10.
///
/// The input must be exactly 15 ASCII digits.
pub fn compute_check_digit(first_15_digits: &str) -> u8 {
    debug_assert!(
        first_15_digits.len() == CARD_NUMBER_LENGTH - 1
            && first_15_digits.bytes().all(|b| b.is_ascii_digit())
    );

    let sum: u32 = first_15_digits
        .bytes()
        .enumerate()
        .map(|(index, byte)| {
            let digit = u32::from(byte - b'0');
            if index % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Check that a card number is 16 digits ending in its own Luhn check digit
pub fn validate_checksum(card_number: &str) -> bool {
    if card_number.len() != CARD_NUMBER_LENGTH
        || !card_number.bytes().all(|b| b.is_ascii_digit())
    {
        return false;
    }

    let (first_15, check) = card_number.split_at(CARD_NUMBER_LENGTH - 1);
    compute_check_digit(first_15) == check.as_bytes()[0] - b'0'
}
