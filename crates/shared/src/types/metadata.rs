//! Static display metadata per currency.
//!
//! The formatter needs a symbol, a thousands delimiter and a decimal separator
//! for every currency it renders. Unknown codes are an error: guessing a symbol
//! for a currency we know nothing about would print misleading amounts.

use crate::error::{MoneyError, MoneyResult};

/// Display conventions for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// Upper-case currency code.
    pub code: &'static str,
    /// Symbol printed in front of the amount.
    pub symbol: &'static str,
    /// Thousands delimiter.
    pub delimiter: char,
    /// Decimal separator.
    pub separator: char,
    /// HTML entity replacing the symbol in markup output, when one exists.
    pub html_entity: Option<&'static str>,
}

const fn info(
    code: &'static str,
    symbol: &'static str,
    delimiter: char,
    separator: char,
    html_entity: Option<&'static str>,
) -> CurrencyInfo {
    CurrencyInfo {
        code,
        symbol,
        delimiter,
        separator,
        html_entity,
    }
}

const CURRENCIES: &[CurrencyInfo] = &[
    info("USD", "$", ',', '.', None),
    info("CAD", "$", ',', '.', None),
    info("AUD", "$", ',', '.', None),
    info("SGD", "S$", ',', '.', None),
    info("EUR", "€", ',', '.', Some("&euro;")),
    info("GBP", "£", ',', '.', Some("&pound;")),
    info("JPY", "¥", '.', '.', Some("&yen;")),
    info("BRL", "R$", '.', ',', None),
    info("IDR", "Rp", '.', ',', None),
];

/// Looks up display metadata for a currency code (case-insensitive).
pub fn currency_info(code: &str) -> MoneyResult<&'static CurrencyInfo> {
    let code = code.trim();
    CURRENCIES
        .iter()
        .find(|info| info.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| MoneyError::InvalidArgument(format!("Unknown currency: {code}")))
}

/// Returns every currency the formatter knows about.
#[must_use]
pub fn known_currencies() -> &'static [CurrencyInfo] {
    CURRENCIES
}
