use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div},
};

use serde::{Deserialize, Serialize};

/// A cost, a share or a total.
///
/// Amounts are kept **unrounded**: a group of 10 split among 3 members gives
/// three shares of `3.333..` that add back up to exactly `10`. Rounding to two
/// decimals only happens when the amount is displayed.
///
/// # Examples
///
/// ```rust
/// use engine::Amount;
///
/// let share = Amount::new(10.0) / 3;
/// assert_eq!(share.to_string(), "3.33");
/// assert_eq!(share + share + share, Amount::new(10.0));
/// ```
///
/// Exact half-cent values round away from zero:
///
/// ```rust
/// use engine::Amount;
///
/// assert_eq!(Amount::new(0.125).to_string(), "0.13");
/// assert_eq!(Amount::new(2.5).to_string(), "2.50");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    /// Creates a new amount.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw, unrounded value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if the amount is strictly greater than 0.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    /// `true` when the value sits exactly halfway between two cents.
    ///
    /// Such a value is a finite binary fraction `n / 8` with `n` odd, so the
    /// multiplication below is exact.
    fn is_half_cent(self) -> bool {
        let eighths = self.0 * 8.0;
        eighths.fract() == 0.0 && (eighths % 2.0).abs() == 1.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            return f.write_str("0.00");
        }
        if !self.is_half_cent() {
            return write!(f, "{:.2}", self.0);
        }

        let sign = if self.0 < 0.0 { "-" } else { "" };
        let cents = (self.0.abs() * 100.0 + 0.5).floor() as u64;
        let units = cents / 100;
        let cents = cents % 100;
        write!(f, "{sign}{units}.{cents:02}")
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

/// Splits an amount evenly among `count` parts.
///
/// Callers guard against `count == 0`.
impl Div<usize> for Amount {
    type Output = Amount;

    fn div(self, count: usize) -> Self::Output {
        Amount(self.0 / count as f64)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_two_decimals() {
        assert_eq!(Amount::new(0.0).to_string(), "0.00");
        assert_eq!(Amount::new(-0.0).to_string(), "0.00");
        assert_eq!(Amount::new(10.0).to_string(), "10.00");
        assert_eq!(Amount::new(13.0).to_string(), "13.00");
        assert_eq!(Amount::new(10.0 / 3.0).to_string(), "3.33");
        assert_eq!(Amount::new(20.0 / 3.0).to_string(), "6.67");
        assert_eq!(Amount::new(-1.5).to_string(), "-1.50");
    }

    #[test]
    fn display_rounds_half_cent_away_from_zero() {
        assert_eq!(Amount::new(0.125).to_string(), "0.13");
        assert_eq!(Amount::new(0.375).to_string(), "0.38");
        assert_eq!(Amount::new(1.625).to_string(), "1.63");
        assert_eq!(Amount::new(-0.125).to_string(), "-0.13");
    }

    #[test]
    fn display_keeps_binary_inexact_values() {
        // 1.005 is stored slightly below the half cent.
        assert_eq!(Amount::new(1.005).to_string(), "1.00");
    }

    #[test]
    fn thirds_add_back_to_the_whole() {
        let share = Amount::new(10.0) / 3;
        let total: Amount = [share, share, share].iter().sum();
        assert_eq!(total, Amount::new(10.0));
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&Amount::new(2.5)).unwrap();
        assert_eq!(json, "2.5");
        let back: Amount = serde_json::from_str("3").unwrap();
        assert_eq!(back, Amount::new(3.0));
    }
}
