use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::errors::{BankError, Result};

/// Money type with 8 decimal places of internal precision, shown with 2
///
/// Addition and subtraction are checked: an out-of-range result is reported
/// as `AmountOutOfRange` instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(8))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> std::result::Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(8)))
    }

    /// create from integer amount (dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor amount, `from_minor(1234, 2)` is 12.34
    pub fn from_minor(amount: i64, scale: u32) -> std::result::Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::try_new(amount, scale)?.round_dp(8)))
    }

    /// two decimal places, half away from zero, the way balances are shown to customers
    pub fn to_display(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn try_add(self, other: Money) -> Result<Money> {
        self.0
            .checked_add(other.0)
            .map(Money::from_decimal)
            .ok_or(BankError::AmountOutOfRange { amount: other })
    }

    pub fn try_sub(self, other: Money) -> Result<Money> {
        self.0
            .checked_sub(other.0)
            .map(Money::from_decimal)
            .ok_or(BankError::AmountOutOfRange { amount: other })
    }

    /// simple interest for one full period at `rate`
    pub fn interest_at(&self, rate: Rate) -> Result<Self> {
        self.0
            .checked_mul(rate.as_decimal())
            .map(Money::from_decimal)
            .ok_or(BankError::AmountOutOfRange { amount: *self })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

/// rate type for interest rates and ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);
    pub const ONE: Rate = Rate(Decimal::ONE);

    /// create from decimal (e.g., 0.02 for 2%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 2 for 2%)
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::from(100))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::from(100)
    }

    /// strictly between zero and one
    pub fn is_proper_fraction(&self) -> bool {
        self.0 > Decimal::ZERO && self.0 < Decimal::ONE
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.12345679"); // rounded to 8 places
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(Money::from_major(510).to_display(), "510.00");
        assert_eq!(Money::from_str_exact("12.345").unwrap().to_display(), "12.35");
        assert_eq!((-Money::from_major(150)).to_display(), "-150.00");
        assert_eq!(Money::from_str_exact("-12.345").unwrap().to_display(), "-12.35");
        assert_eq!(Money::from_str_exact("0.125").unwrap().to_display(), "0.13");
    }

    #[test]
    fn test_checked_arithmetic() {
        let max = Money::from_decimal(Decimal::MAX);
        assert_eq!(
            max.try_add(Money::ONE),
            Err(BankError::AmountOutOfRange { amount: Money::ONE })
        );
        assert!((-max).try_sub(Money::ONE).is_err());
        assert!(max.interest_at(Rate::from_percentage(200)).is_err());

        let sum = Money::from_major(100).try_add(Money::from_major(50)).unwrap();
        assert_eq!(sum.try_sub(Money::from_major(200)).unwrap(), -Money::from_major(50));
    }

    #[test]
    fn test_from_minor() {
        assert_eq!(Money::from_minor(1234, 2).unwrap(), Money::from_str_exact("12.34").unwrap());
        assert!(Money::from_minor(1, 30).is_err());
    }

    #[test]
    fn test_sign_checks() {
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
        let cent = Money::from_minor(1, 2).unwrap();
        assert!(cent.is_positive());
        assert!((-cent).is_negative());
    }

    #[test]
    fn test_interest_at() {
        let principal = Money::from_major(500);
        let interest = principal.interest_at(Rate::from_decimal(dec!(0.02))).unwrap();
        assert_eq!(interest, Money::from_major(10));
    }

    #[test]
    fn test_rate_bounds() {
        assert!(Rate::from_percentage(1).is_proper_fraction());
        assert!(!Rate::ZERO.is_proper_fraction());
        assert!(!Rate::ONE.is_proper_fraction());
        assert_eq!(Rate::from_decimal(dec!(0.015)).as_percentage(), dec!(1.5));
    }
}
