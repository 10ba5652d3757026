//! Issuing of new card numbers and PINs

use rand::Rng;

use crate::card::scheme::{compute_check_digit, ISSUER_PREFIX};
use crate::traits::AccountStore;
use crate::types::{BankError, BankResult};

/// Upper bound on collision retries when issuing a card number
///
/// With a 9-digit random identifier space a collision on even a single
/// attempt is already rare; the cap only exists so a broken store that
/// reports every number as taken cannot spin the loop forever.
pub const MAX_ISSUE_ATTEMPTS: usize = 100;

/// A freshly issued card number and PIN pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCard {
    /// Checksum-valid 16-digit card number
    pub card_number: String,
    /// Zero-padded 4-digit PIN
    pub pin: String,
}

/// Draw a random card number and PIN candidate
///
/// The account identifier is uniform over `[0, 10^9)` and the PIN over
/// `[0, 10^4)`, both zero-padded; the check digit is computed over the
/// issuer prefix plus the identifier.
pub fn generate_candidate() -> IssuedCard {
    let mut rng = rand::thread_rng();
    let account_id: u32 = rng.gen_range(0..1_000_000_000);
    let pin: u16 = rng.gen_range(0..10_000);

    let first_15_digits = format!("{}{:09}", ISSUER_PREFIX, account_id);
    let check_digit = compute_check_digit(&first_15_digits);

    IssuedCard {
        card_number: format!("{}{}", first_15_digits, check_digit),
        pin: format!("{:04}", pin),
    }
}

/// Draw candidates until one is not present in the store
///
/// The store acts as the uniqueness oracle. Gives up with an error after
/// [`MAX_ISSUE_ATTEMPTS`] candidates in a row were already taken.
pub async fn generate_unique<S: AccountStore>(store: &S) -> BankResult<IssuedCard> {
    for _ in 0..MAX_ISSUE_ATTEMPTS {
        let candidate = generate_candidate();
        if store.find_account(&candidate.card_number).await?.is_none() {
            return Ok(candidate);
        }
    }

    Err(BankError::Issuance(format!(
        "no unused card number after {} attempts",
        MAX_ISSUE_ATTEMPTS
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::scheme::{validate_checksum, CARD_NUMBER_LENGTH, PIN_LENGTH};

    #[test]
    fn test_candidate_is_checksum_valid_and_prefixed() {
        for _ in 0..50 {
            let candidate = generate_candidate();
            assert_eq!(candidate.card_number.len(), CARD_NUMBER_LENGTH);
            assert!(candidate.card_number.starts_with(ISSUER_PREFIX));
            assert!(validate_checksum(&candidate.card_number));
        }
    }

    #[test]
    fn test_candidate_pin_is_four_digits() {
        for _ in 0..50 {
            let candidate = generate_candidate();
            assert_eq!(candidate.pin.len(), PIN_LENGTH);
            assert!(candidate.pin.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
