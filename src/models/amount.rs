//! Amount type for representing currency values
//!
//! Held as an exact decimal so sums never drift, but persisted as a plain
//! JSON number (`{"amount": 50.5}`) so the data file stays readable by
//! other tools.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;

/// A monetary amount in the user's (single) currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Amount {
    /// Create an Amount from an integer mantissa and a decimal scale
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Amount;
    /// let amount = Amount::new(1050, 2); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    /// Convert a float into its shortest exact decimal form.
    ///
    /// Returns `None` for NaN, infinities, and values outside the decimal range.
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Amount;
    /// assert_eq!(Amount::from_f64(52.74), Some(Amount::new(5274, 2)));
    /// assert_eq!(Amount::from_f64(f64::NAN), None);
    /// ```
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // f64's Display is the shortest text that round-trips, never exponent form
        Decimal::from_str(&value.to_string()).ok().map(Self)
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Nearest float, for display math such as percentages
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Format with a currency symbol, sign in front of the symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }

    /// Plain text without trailing zeros (`30`, `50.5`)
    pub fn to_plain_string(&self) -> String {
        self.0.normalize().to_string()
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
