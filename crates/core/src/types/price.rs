//! Type-safe price representation using decimal arithmetic.
//!
//! Currency amounts are [`rust_decimal::Decimal`] values so that repeated
//! cart arithmetic never accumulates binary floating-point drift. Display
//! formatting applies thousands grouping and exactly two fraction digits
//! (e.g. `₱1,234.50`), the same contract for the empty and populated
//! rendering paths.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g. pesos, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from the smallest currency unit (e.g. centavos).
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency_code,
        }
    }

    /// The zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// Multiply the unit amount by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency_code: self.currency_code,
        }
    }

    /// Format for display (e.g. `₱1,234.50`).
    ///
    /// Rounds to two fraction digits and groups the integer part in
    /// threes, matching `toLocaleString`-style locale output.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self.amount.round_dp(2);
        format!(
            "{}{}",
            self.currency_code.symbol(),
            group_thousands(&format!("{rounded:.2}"))
        )
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    PHP,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// The display symbol prefixed to formatted amounts.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::PHP => "\u{20b1}",
            Self::USD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::PHP => "PHP",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

/// Insert thousands separators into a plain `1234.50`-style decimal string.
fn group_thousands(plain: &str) -> String {
    let (units, fraction) = plain.split_once('.').unwrap_or((plain, "00"));
    let (sign, digits) = units
        .strip_prefix('-')
        .map_or(("", units), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_fraction_digits() {
        let price = Price::new(Decimal::new(129, 0), CurrencyCode::PHP);
        assert_eq!(price.display(), "\u{20b1}129.00");
    }

    #[test]
    fn test_display_groups_thousands() {
        let price = Price::new(Decimal::new(123_456_75, 2), CurrencyCode::PHP);
        assert_eq!(price.display(), "\u{20b1}123,456.75");
    }

    #[test]
    fn test_display_zero() {
        let price = Price::zero(CurrencyCode::PHP);
        assert_eq!(price.display(), "\u{20b1}0.00");
    }

    #[test]
    fn test_display_rounds_to_cents() {
        let price = Price::new(Decimal::new(1005, 3), CurrencyCode::USD);
        // 1.005 rounds under banker's rounding to 1.00
        assert_eq!(price.display(), "$1.00");
    }

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(4200, CurrencyCode::PHP);
        assert_eq!(price.amount, Decimal::new(42, 0));
    }

    #[test]
    fn test_times() {
        let price = Price::new(Decimal::new(98, 0), CurrencyCode::PHP);
        assert_eq!(price.times(3).amount, Decimal::new(294, 0));
    }

    #[test]
    fn test_symbol_and_code() {
        assert_eq!(CurrencyCode::PHP.symbol(), "\u{20b1}");
        assert_eq!(CurrencyCode::PHP.code(), "PHP");
    }
}
