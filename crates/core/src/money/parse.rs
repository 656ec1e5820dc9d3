//! Parsing money literals such as `"EUR -100,37"` or `"$100 USD"`.
//!
//! A three-letter alphabetic word names the currency; without one the
//! default currency applies. Symbols and whitespace are ignored, so
//! `"100 000"` reads as one hundred thousand. When both `.` and `,` appear
//! the last of them is the decimal separator. A single lone separator is
//! decimal too, while a separator repeated on its own groups thousands.

use std::str::FromStr;

use cambio_shared::{Currency, DEFAULT_CURRENCY, MoneyError};
use rust_decimal::Decimal;

use super::Money;

fn invalid(input: &str) -> MoneyError {
    MoneyError::InvalidArgument(format!("cannot parse money from {input:?}"))
}

/// Picks the currency word out of `input`, if any.
fn currency_code(input: &str) -> Result<Option<Currency>, MoneyError> {
    let mut found = None;
    for word in input.split(|c: char| !c.is_ascii_alphabetic()) {
        if word.len() != 3 {
            continue;
        }
        if found.is_some() {
            return Err(invalid(input));
        }
        found = Some(Currency::new(word)?);
    }
    Ok(found)
}

/// Rewrites the numeric part of `input` as a plain `-1234.56` string.
fn normalize_number(input: &str) -> Result<String, MoneyError> {
    let mut negative = false;
    let mut body = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '-' if body.is_empty() && !negative => negative = true,
            '-' => return Err(invalid(input)),
            '0'..='9' | '.' | ',' => body.push(c),
            _ => {}
        }
    }
    if !body.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid(input));
    }

    let decimal_mark = match (body.rfind('.'), body.rfind(',')) {
        (Some(dot), Some(comma)) => Some(if dot > comma { '.' } else { ',' }),
        (Some(_), None) if body.matches('.').count() == 1 => Some('.'),
        (None, Some(_)) if body.matches(',').count() == 1 => Some(','),
        _ => None,
    };

    let mut normalized = String::with_capacity(body.len() + 1);
    if negative {
        normalized.push('-');
    }
    for c in body.chars() {
        match c {
            '0'..='9' => normalized.push(c),
            _ if Some(c) == decimal_mark => normalized.push('.'),
            _ => {}
        }
    }
    Ok(normalized)
}

/// Parses a money literal with the default bank.
///
/// ```
/// use cambio_core::{Currency, Money};
///
/// let money: Money = "EUR -100,37".parse().unwrap();
/// assert_eq!(money, Money::new(-100_37, Currency::EUR));
/// ```
impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let currency = currency_code(s)?.unwrap_or(DEFAULT_CURRENCY);
        let amount = Decimal::from_str(&normalize_number(s)?).map_err(|_| invalid(s))?;
        Self::from_major(amount, currency)
    }
}
