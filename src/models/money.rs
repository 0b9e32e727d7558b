//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Trust-accounting rules compare and subtract balances exactly, so
//! the representation must be exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "1500.00", "-1500.00", "$1,500.00", "1500". A bare integer is
    /// read as whole currency units, not cents.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);
        let digits: String = s.chars().filter(|c| *c != ',').collect();

        let cents = match digits.split_once('.') {
            Some((whole, frac)) => {
                let whole: i64 = whole
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
                // Normalize the fractional part to exactly two digits
                let frac = match frac.len() {
                    0 => 0,
                    1 => {
                        frac.parse::<i64>()
                            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                            * 10
                    }
                    2 => frac
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
                    _ => return Err(MoneyParseError::TooManyDecimals(s.to_string())),
                };
                whole * 100 + frac
            }
            None => {
                digits
                    .parse::<i64>()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                    * 100
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let cents = self.0.abs();
        write!(f, "{}${}.{:02}", sign, cents / 100, cents % 100)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    TooManyDecimals(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooManyDecimals(s) => {
                write!(f, "Amounts carry at most two decimal places: {}", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(150000)), "$1500.00");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-25000)), "-$250.00");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("1500.00").unwrap().cents(), 150000);
        assert_eq!(Money::parse("$1,500.00").unwrap().cents(), 150000);
        assert_eq!(Money::parse("-250.50").unwrap().cents(), -25050);
        assert_eq!(Money::parse("100").unwrap().cents(), 10000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("1.234"),
            Err(MoneyParseError::TooManyDecimals(_))
        ));
    }

    #[test]
    fn test_arithmetic() {
        let balance = Money::from_cents(100000);
        let withdrawal = Money::from_cents(75000);

        assert_eq!((balance - withdrawal).cents(), 25000);
        assert_eq!((balance + withdrawal).cents(), 175000);
        assert_eq!((-balance).cents(), -100000);
        assert_eq!(Money::from_cents(-25000).abs().cents(), 25000);
    }

    #[test]
    fn test_comparison_and_sum() {
        assert!(Money::from_cents(500) < Money::from_cents(750));
        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 350);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(-25000);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "-25000");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
