//! Money type for representing currency amounts
//!
//! Amounts are held as integer cents so that sums and the proportional
//! rebalance never drift the way floating-point budgets do.
//!
//! Parsed input is limited to [`Money::MAX`] in magnitude, and addition and
//! subtraction saturate, so totals over many records cannot wrap around.

use serde::Serialize;
use std::fmt;
use std::ops::{Add, Sub};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from user input: one trillion units
    pub const MAX: Money = Money(100_000_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budgetcalc::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.units(), 10);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamp negative amounts up to zero
    pub fn non_negative(self) -> Self {
        self.max(Self::zero())
    }

    /// Clamp into `0..=Money::MAX`
    pub fn bounded(self) -> Self {
        self.non_negative().min(Self::MAX)
    }

    /// `self * numerator / denominator`, rounded down
    ///
    /// The intermediate product is computed in 128 bits so large budgets do
    /// not overflow. Returns `self` unchanged when `denominator` is zero.
    pub fn scaled(self, numerator: Money, denominator: Money) -> Self {
        if denominator.is_zero() {
            return self;
        }
        let product = i128::from(self.0) * i128::from(numerator.0);
        let quotient = product.div_euclid(i128::from(denominator.0));
        Self(quotient.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10.50", "-10.50", "$10.50", "10" and "10.5". Digits beyond
    /// the second decimal place are dropped. Amounts larger than
    /// [`Money::MAX`] in magnitude are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::OutOfRange(trimmed.to_string()))?
        };

        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(|| MoneyParseError::OutOfRange(trimmed.to_string()))?;
        if total > Self::MAX.0 {
            return Err(MoneyParseError::OutOfRange(trimmed.to_string()));
        }

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format as whole units with a currency symbol, truncating toward zero
    ///
    /// ```
    /// use budgetcalc::models::Money;
    /// assert_eq!(Money::from_cents(66666).format_whole("$"), "$666");
    /// ```
    pub fn format_whole(&self, symbol: &str) -> String {
        let units = self.units();
        if units < 0 {
            format!("-{}{}", symbol, units.abs())
        } else {
            format!("{}{}", symbol, units)
        }
    }

    /// Format with a currency symbol and two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),

    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_truncate_toward_zero() {
        assert_eq!(Money::from_cents(1099).units(), 10);
        assert_eq!(Money::from_cents(-1099).units(), -10);
        assert_eq!(Money::from_cents(-1099).cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
    }

    #[test]
    fn test_format_whole() {
        assert_eq!(Money::from_cents(66666).format_whole("$"), "$666");
        assert_eq!(Money::from_cents(99).format_whole("€"), "€0");
        assert_eq!(Money::from_cents(-25099).format_whole("$"), "-$250");
        assert_eq!(Money::from_cents(-50).format_whole("$"), "$0");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("1.239").unwrap().cents(), 123);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("10.-5").is_err());
        assert!(Money::parse(".").is_err());
    }

    #[test]
    fn test_scaled_rounds_down() {
        let income = Money::from_units(1000);
        let total = Money::from_units(1200);
        assert_eq!(Money::from_units(800).scaled(income, total).cents(), 66666);
        assert_eq!(Money::from_units(400).scaled(income, total).cents(), 33333);
    }

    #[test]
    fn test_scaled_zero_denominator() {
        let m = Money::from_cents(500);
        assert_eq!(m.scaled(Money::from_cents(10), Money::zero()), m);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(Money::from_cents(-5).non_negative(), Money::zero());
        assert_eq!(Money::from_cents(5).non_negative().cents(), 5);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_cents(100), Money::from_cents(200)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 300);
    }

    #[test]
    fn test_parse_rejects_amounts_above_max() {
        assert_eq!(Money::parse("1000000000000").unwrap(), Money::MAX);
        assert_eq!(Money::parse("-1000000000000").unwrap().cents(), -Money::MAX.cents());
        assert!(matches!(
            Money::parse("1000000000000.01"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("50000000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("99999999999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!((big + big).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - big).cents(), i64::MIN);
        let total: Money = [big, big, big].iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_bounded() {
        assert_eq!(Money::from_cents(-1).bounded(), Money::zero());
        assert_eq!(Money::from_cents(i64::MAX).bounded(), Money::MAX);
        assert_eq!(Money::from_cents(42).bounded().cents(), 42);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Money::from_cents(1050)).unwrap();
        assert_eq!(json, "1050");
    }
}
