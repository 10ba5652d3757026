//! Interactive teller session over a local SQLite database
//!
//! The thin menu loop around the banking core: create an account, log in,
//! check the balance, add income, transfer money, close the account.

use std::io::{self, BufRead};

use banking_core::utils::{
    validate_amount, validate_card_number_format, validate_pin_format, SqliteStore,
};
use banking_core::{messages, Bank, Session, SessionState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open("card.s3db")?;
    let mut bank = Bank::new(store);
    let mut session = Session::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while session.is_active() {
        let Some(menu) = session.menu() else { break };
        println!("{}", menu);

        let Some(choice) = next_line(&mut lines)? else {
            break;
        };

        match session.state() {
            SessionState::LoggedOut => match choice.as_str() {
                "1" => {
                    let account = bank.create_account().await?;
                    println!("{}", messages::CARD_CREATED);
                    println!("{}", messages::CARD_NUMBER_LABEL);
                    println!("{}", account.card_number);
                    println!("{}", messages::CARD_PIN_LABEL);
                    println!("{}", account.pin);
                }
                "2" => {
                    println!("{}", messages::ENTER_CARD_NUMBER);
                    let Some(card_number) = next_line(&mut lines)? else {
                        break;
                    };
                    println!("{}", messages::ENTER_PIN);
                    let Some(pin) = next_line(&mut lines)? else {
                        break;
                    };

                    // Skip the lookup entirely for input that cannot match
                    let plausible = validate_card_number_format(&card_number).is_ok()
                        && validate_pin_format(&pin).is_ok();
                    let authenticated = if plausible {
                        bank.authenticate(&card_number, &pin).await?
                    } else {
                        None
                    };

                    match authenticated {
                        Some(account) => {
                            println!("{}", messages::LOGIN_SUCCESS);
                            session.log_in(account);
                        }
                        None => println!("{}", messages::LOGIN_FAILURE),
                    }
                }
                "0" => {
                    println!("{}", messages::GOODBYE);
                    session.exit();
                }
                _ => {}
            },
            SessionState::LoggedIn => match choice.as_str() {
                "1" => {
                    if let Some(account) = session.account() {
                        println!("Balance: {}", account.balance);
                    }
                }
                "2" => {
                    println!("{}", messages::ENTER_INCOME);
                    let Some(line) = next_line(&mut lines)? else {
                        break;
                    };

                    match parse_amount(&line) {
                        Some(amount) => {
                            if let Some(account) = session.account_mut() {
                                bank.credit(account, amount).await?;
                                println!("{}", messages::INCOME_ADDED);
                            }
                        }
                        None => println!("Invalid amount."),
                    }
                }
                "3" => {
                    println!("{}", messages::ENTER_TARGET_CARD);
                    let Some(target_number) = next_line(&mut lines)? else {
                        break;
                    };

                    let Some(source) = session.account() else {
                        continue;
                    };
                    let check = bank.check_transfer_target(&target_number, source).await?;
                    println!("{}", check.message());

                    if check.is_approved() {
                        let Some(line) = next_line(&mut lines)? else {
                            break;
                        };

                        match parse_amount(&line) {
                            Some(amount) => {
                                let mut target = bank.get_account_required(&target_number).await?;
                                if let Some(source) = session.account_mut() {
                                    if bank.transfer(source, &mut target, amount).await? {
                                        println!("{}", messages::TRANSFER_SUCCESS);
                                    } else {
                                        println!("{}", messages::NOT_ENOUGH_MONEY);
                                    }
                                }
                            }
                            None => println!("Invalid amount."),
                        }
                    }
                }
                "4" => {
                    if let Some(account) = session.take_account() {
                        bank.close_account(account).await?;
                        println!("{}", messages::ACCOUNT_CLOSED);
                    }
                }
                "5" => {
                    session.log_out();
                    println!("{}", messages::LOGOUT_SUCCESS);
                }
                "0" => {
                    println!("{}", messages::GOODBYE);
                    session.exit();
                }
                _ => {}
            },
            SessionState::Exit => {}
        }
    }

    Ok(())
}

fn next_line<B: BufRead>(lines: &mut io::Lines<B>) -> io::Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn parse_amount(input: &str) -> Option<i64> {
    let amount = input.parse::<i64>().ok()?;
    validate_amount(amount).ok()?;
    Some(amount)
}
