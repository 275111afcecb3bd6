//! Rupee amounts stored as whole paise

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Paise per rupee
pub const PAISE_PER_RUPEE: i64 = 100;

/// Signed amount of money in paise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Amount from whole rupees
    pub const fn rupees(rupees: i64) -> Self {
        Money(rupees * PAISE_PER_RUPEE)
    }

    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    pub const fn paise(self) -> i64 {
        self.0
    }

    /// Whole rupees, rounding half away from zero
    pub fn rounded_rupees(self) -> i64 {
        let whole = self.0 / PAISE_PER_RUPEE;
        let rem = self.0 % PAISE_PER_RUPEE;
        if rem.abs() * 2 >= PAISE_PER_RUPEE {
            whole + self.0.signum()
        } else {
            whole
        }
    }

    pub fn abs(self) -> Self {
        Money(self.0.abs())
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Ratio of `self` to `total` as a percentage (0 when `total` is zero)
    pub fn percent_of(self, total: Money) -> f64 {
        if total.0 == 0 {
            return 0.0;
        }
        self.0 as f64 / total.0 as f64 * 100.0
    }

    /// Amount in rupees as a float, for chart geometry
    pub fn as_rupees_f64(self) -> f64 {
        self.0 as f64 / PAISE_PER_RUPEE as f64
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::format::format_currency(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_rupees_half_away_from_zero() {
        assert_eq!(Money::from_paise(150).rounded_rupees(), 2);
        assert_eq!(Money::from_paise(149).rounded_rupees(), 1);
        assert_eq!(Money::from_paise(-150).rounded_rupees(), -2);
        assert_eq!(Money::from_paise(-149).rounded_rupees(), -1);
        assert_eq!(Money::rupees(2500).rounded_rupees(), 2500);
    }

    #[test]
    fn test_sum_and_arithmetic() {
        let total: Money = [Money::rupees(100), Money::rupees(-40), Money::rupees(15)].iter().sum();
        assert_eq!(total, Money::rupees(75));
        assert_eq!(-total, Money::rupees(-75));
        assert_eq!((Money::rupees(10) - Money::rupees(25)).abs(), Money::rupees(15));
    }

    #[test]
    fn test_percent_of_zero_total() {
        assert_eq!(Money::rupees(45_000).percent_of(Money::ZERO), 0.0);
        assert_eq!(Money::rupees(45_000).percent_of(Money::rupees(200_000)), 22.5);
    }
}
