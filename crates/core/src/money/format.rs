//! Display formatting.
//!
//! Symbols, delimiters and separators come from the currency metadata table
//! in `cambio_shared`; currencies missing from it cannot be formatted.

use cambio_shared::{MoneyResult, currency_info};

use super::Money;

/// Options for [`Money::format`].
///
/// # Example
///
/// ```
/// use cambio_core::{FormatOptions, Money};
///
/// let price = Money::ca_dollar(570);
/// let options = FormatOptions::new().with_currency().html();
/// assert_eq!(
///     price.format(&options).unwrap(),
///     "$5.70 <span class=\"currency\">CAD</span>"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Replaces the currency symbol; an empty string prints none.
    pub symbol: Option<String>,
    /// Drops the minor-unit digits.
    pub no_cents: bool,
    /// Appends the currency code.
    pub with_currency: bool,
    /// Emits HTML: entity symbols and a `<span>` around the code.
    pub html: bool,
    /// Text printed instead of a zero amount.
    pub display_free: Option<String>,
}

impl FormatOptions {
    /// Default options: symbol, grouped digits and two decimals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Omits the cents.
    #[must_use]
    pub fn no_cents(mut self) -> Self {
        self.no_cents = true;
        self
    }

    /// Appends the currency code.
    #[must_use]
    pub fn with_currency(mut self) -> Self {
        self.with_currency = true;
        self
    }

    /// Renders HTML.
    #[must_use]
    pub fn html(mut self) -> Self {
        self.html = true;
        self
    }

    /// Prints zero amounts as `free`.
    #[must_use]
    pub fn display_free(self) -> Self {
        self.display_free_as("free")
    }

    /// Prints zero amounts as `text`.
    #[must_use]
    pub fn display_free_as(mut self, text: impl Into<String>) -> Self {
        self.display_free = Some(text.into());
        self
    }
}

/// Groups the digits of `value` in threes, right to left.
fn group_digits(value: u64, delimiter: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(delimiter);
        }
        grouped.push(digit);
    }
    grouped
}

impl Money {
    /// Renders the amount for display.
    ///
    /// The layout is symbol, sign, grouped digits, then optionally the
    /// currency code: `Money::new(-8_000_000, JPY)` with `no_cents` renders
    /// as `¥-80.000`.
    ///
    /// Fails with `InvalidArgument` when the currency has no display
    /// metadata.
    pub fn format(&self, options: &FormatOptions) -> MoneyResult<String> {
        if let Some(free) = &options.display_free
            && self.is_zero()
        {
            return Ok(free.clone());
        }

        let info = currency_info(self.currency.as_str())?;
        let symbol = match &options.symbol {
            Some(symbol) => symbol.as_str(),
            None if options.html => info.html_entity.unwrap_or(info.symbol),
            None => info.symbol,
        };

        let absolute = self.cents.unsigned_abs();
        let mut formatted = String::from(symbol);
        if self.is_negative() {
            formatted.push('-');
        }
        formatted.push_str(&group_digits(absolute / 100, info.delimiter));
        if !options.no_cents {
            formatted.push(info.separator);
            formatted.push_str(&format!("{:02}", absolute % 100));
        }

        if options.with_currency {
            formatted.push(' ');
            if options.html {
                formatted.push_str(&format!(
                    "<span class=\"currency\">{}</span>",
                    self.currency
                ));
            } else {
                formatted.push_str(self.currency.as_str());
            }
        }
        Ok(formatted)
    }

    /// Renders with the Brazilian convention, whatever the currency:
    /// `.` between thousands, `,` before the cents (`123.456.789,01`).
    #[must_use]
    pub fn to_real(&self) -> String {
        let absolute = self.cents.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{sign}{},{:02}",
            group_digits(absolute / 100, '.'),
            absolute % 100
        )
    }
}
