//! Margin / label-budget split of a payment amount.

use std::fmt;

/// Share of the payment kept as margin, in percent.
pub const MARGIN_PERCENT: i64 = 10;

/// Largest amount accepted from a payload, in cents.
pub const MAX_CENTS: i64 = i64::MAX / 100;

/// A monetary amount in minor units (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Converts a major-unit amount, rounding to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities and values beyond [`MAX_CENTS`].
    pub fn from_major(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        if cents.is_finite() && cents.abs() <= MAX_CENTS as f64 {
            Some(Self(cents as i64))
        } else {
            None
        }
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    /// Amount in major units, for JSON bodies that expect decimals.
    pub fn as_major(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// How a payment is divided between margin and label budget.
///
/// `margin + label_amount == amount` holds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSplit {
    pub amount: Money,
    pub margin: Money,
    pub label_amount: Money,
}

impl PaymentSplit {
    /// `margin = round(amount * 0.10, 2)` with halves rounded away from zero.
    pub fn from_amount(amount: Money) -> Self {
        // i128 so no i64 amount can overflow; the margin is at most a tenth
        // of the amount and always fits back into i64.
        let cents = i128::from(amount.cents());
        let margin = (cents.abs() * i128::from(MARGIN_PERCENT) + 50) / 100 * cents.signum();
        let margin = margin as i64;
        Self {
            amount,
            margin: Money(margin),
            label_amount: Money(amount.cents() - margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hundred_splits_into_ten_and_ninety() {
        let split = PaymentSplit::from_amount(Money::from_cents(10_000));
        assert_eq!(split.margin, Money::from_cents(1_000));
        assert_eq!(split.label_amount, Money::from_cents(9_000));
    }

    #[test]
    fn fifty_splits_into_five_and_forty_five() {
        let split = PaymentSplit::from_amount(Money::from_cents(5_000));
        assert_eq!(split.margin.to_string(), "5.00");
        assert_eq!(split.label_amount.to_string(), "45.00");
    }

    #[test]
    fn margin_rounds_half_away_from_zero() {
        // 0.05 * 0.10 = 0.005 -> 0.01
        let split = PaymentSplit::from_amount(Money::from_cents(5));
        assert_eq!(split.margin, Money::from_cents(1));
        assert_eq!(split.label_amount, Money::from_cents(4));

        // 12.34 * 0.10 = 1.234 -> 1.23
        let split = PaymentSplit::from_amount(Money::from_cents(1_234));
        assert_eq!(split.margin, Money::from_cents(123));
    }

    #[test]
    fn zero_amount_splits_into_zeros() {
        let split = PaymentSplit::from_amount(Money::default());
        assert_eq!(split.margin, Money::default());
        assert_eq!(split.label_amount, Money::default());
    }

    #[test]
    fn display_pads_cents() {
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(123_456).to_string(), "1234.56");
        assert_eq!(Money::from_cents(-250).to_string(), "-2.50");
    }

    #[test]
    fn from_major_rounds_to_cents() {
        assert_eq!(Money::from_major(12.345), Some(Money::from_cents(1_235)));
        assert_eq!(Money::from_major(50.0), Some(Money::from_cents(5_000)));
        assert_eq!(Money::from_major(f64::NAN), None);
        assert_eq!(Money::from_major(f64::INFINITY), None);
    }

    #[test]
    fn from_major_rejects_amounts_beyond_max() {
        assert_eq!(
            Money::from_major(1e14),
            Some(Money::from_cents(10_000_000_000_000_000))
        );
        assert_eq!(Money::from_major(1e15), None);
        assert_eq!(Money::from_major(1e16), None);
        assert_eq!(Money::from_major(-1e16), None);
    }

    #[test]
    fn extreme_amounts_split_without_overflow() {
        for cents in [MAX_CENTS, i64::MAX, i64::MIN] {
            let split = PaymentSplit::from_amount(Money::from_cents(cents));
            assert_eq!(
                i128::from(split.margin.cents()) + i128::from(split.label_amount.cents()),
                i128::from(cents)
            );
        }

        let split = PaymentSplit::from_amount(Money::from_cents(i64::MAX));
        assert_eq!(split.margin.cents(), 922_337_203_685_477_581);
    }

    proptest! {
        #[test]
        fn margin_plus_label_amount_equals_amount(cents in 1i64..1_000_000_000_000) {
            let split = PaymentSplit::from_amount(Money::from_cents(cents));
            prop_assert_eq!(split.margin.cents() + split.label_amount.cents(), cents);
        }

        #[test]
        fn margin_is_ten_percent_within_half_a_cent(cents in 1i64..1_000_000_000_000) {
            let split = PaymentSplit::from_amount(Money::from_cents(cents));
            let exact = cents as f64 * 0.10;
            prop_assert!((split.margin.cents() as f64 - exact).abs() <= 0.5);
        }
    }
}
