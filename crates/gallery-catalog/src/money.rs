//! Money type for product prices.
//!
//! Prices are held as whole cents so that formatting never depends on
//! floating-point rendering: `199.5` always displays as `$199.50`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Currency symbol prefixed to every displayed price.
pub const CURRENCY_SYMBOL: &str = "$";

const CENTS_PER_UNIT: u64 = 100;

/// A non-negative US dollar amount.
///
/// Serialized as a decimal number (`199.5`), stored as cents (`19950`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money {
    amount_cents: u64,
}

impl Money {
    /// Create a Money value from cents.
    pub const fn from_cents(amount_cents: u64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount, rounded to the nearest cent.
    ///
    /// Rounds the exact binary value of `amount`, with ties going up, so the
    /// result matches JavaScript's `toFixed(2)`: `2.675` is stored as
    /// `2.67499999...` and becomes 267 cents. Amounts above `u64::MAX` cents
    /// are rejected.
    ///
    /// ```
    /// use gallery_catalog::Money;
    /// let price = Money::from_decimal(89.99).unwrap();
    /// assert_eq!(price.amount_cents(), 8999);
    /// assert!(Money::from_decimal(-1.0).is_err());
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, CatalogError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CatalogError::InvalidPrice(amount));
        }
        exact_cents(amount)
            .map(Self::from_cents)
            .ok_or(CatalogError::InvalidPrice(amount))
    }

    /// Amount in cents.
    pub const fn amount_cents(&self) -> u64 {
        self.amount_cents
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Format as a display string (e.g., "$199.50").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format without the symbol, always with two fraction digits (e.g., "199.50").
    pub fn display_amount(&self) -> String {
        format!(
            "{}.{:02}",
            self.amount_cents / CENTS_PER_UNIT,
            self.amount_cents % CENTS_PER_UNIT
        )
    }
}

/// Round `amount * 100` to the nearest integer using exact arithmetic on the
/// float's mantissa and exponent. `amount` must be finite and non-negative.
fn exact_cents(amount: f64) -> Option<u64> {
    let bits = amount.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);

    // amount == mantissa * 2^exponent
    let (mantissa, exponent) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };
    let scaled = u128::from(mantissa) * u128::from(CENTS_PER_UNIT);

    if exponent >= 0 {
        // scaled < 2^60, so any shift past 64 overflows u64 anyway.
        if exponent > 64 {
            return None;
        }
        return u64::try_from(scaled << exponent).ok();
    }

    let shift = exponent.unsigned_abs();
    if shift > 64 {
        // scaled * 2^-shift < 2^-4, rounds to zero.
        return Some(0);
    }
    let whole = scaled >> shift;
    let remainder = scaled & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    let rounded = if remainder >= half { whole + 1 } else { whole };
    u64::try_from(rounded).ok()
}

impl TryFrom<f64> for Money {
    type Error = CatalogError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Money::from_decimal(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> f64 {
        money.to_decimal()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
