//! # Money Formatting
//!
//! Prices are kept as [`Decimal`] everywhere in the crate and only turned
//! into text when something is displayed.

use rust_decimal::{Decimal, RoundingStrategy};

/// Locale-fixed currency formatter.
///
/// ```
/// use food_cart::money::MoneyFormatter;
/// use rust_decimal::Decimal;
///
/// let brl = MoneyFormatter::brl();
/// assert_eq!(brl.format(Decimal::new(123450, 2)), "R$ 1.234,50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormatter {
    symbol: String,
    decimal_separator: char,
    group_separator: char,
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::brl()
    }
}

impl MoneyFormatter {
    pub fn new(symbol: impl Into<String>, decimal_separator: char, group_separator: char) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_separator,
            group_separator,
        }
    }

    /// Brazilian real, `R$ 1.234,50`.
    pub fn brl() -> Self {
        Self::new("R$ ", ',', '.')
    }

    /// US dollar, `$1,234.50`.
    pub fn usd() -> Self {
        Self::new("$", '.', ',')
    }

    /// Rounds half away from zero to cents, then renders with the
    /// formatter's symbol and separators.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let plain = format!("{:.2}", rounded.abs());
        let (units, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }

        format!(
            "{sign}{}{grouped}{}{cents}",
            self.symbol, self.decimal_separator
        )
    }
}
