//! Installment splitting.
//!
//! Splits an amount into equal parts while ensuring the parts sum EXACTLY to
//! the original amount (no cents lost):
//! 1. Each part gets `floor(cents / n)`
//! 2. The `cents mod n` leftover cents are handed out one each, to the first
//!    or last parts depending on [`RemainderPlacement`]

use cambio_shared::{MoneyError, MoneyResult};

use super::Money;
use super::wallet::Wallet;

/// Which installments receive the leftover cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemainderPlacement {
    /// The first installments are one cent larger: `[334, 333, 333]`.
    #[default]
    Leading,
    /// The last installments are one cent larger: `[333, 333, 334]`.
    Trailing,
}

impl Money {
    /// Splits this amount into `count` installments that sum exactly to it.
    ///
    /// Works for negative amounts too: parts are floored, so leftover cents
    /// are always added, never subtracted.
    ///
    /// # Example
    ///
    /// ```
    /// use cambio_core::{Money, RemainderPlacement};
    ///
    /// let parts = Money::from_cents(1000)
    ///     .split_in_installments(3, RemainderPlacement::Leading)
    ///     .unwrap();
    /// let cents: Vec<i64> = parts.iter().map(Money::cents).collect();
    /// assert_eq!(cents, vec![334, 333, 333]);
    /// assert_eq!(parts.sum().unwrap(), Money::from_cents(1000));
    /// ```
    pub fn split_in_installments(
        &self,
        count: usize,
        placement: RemainderPlacement,
    ) -> MoneyResult<Wallet> {
        if count == 0 {
            return Err(MoneyError::InvalidArgument(
                "installment count must be positive".to_string(),
            ));
        }
        let divisor = i64::try_from(count).map_err(|_| {
            MoneyError::InvalidArgument(format!("too many installments: {count}"))
        })?;

        let base = self.cents.div_euclid(divisor);
        // 0 <= extra < count, so the conversion cannot fail
        let extra = usize::try_from(self.cents.rem_euclid(divisor)).unwrap_or(0);
        let bumped = |index: usize| match placement {
            RemainderPlacement::Leading => index < extra,
            RemainderPlacement::Trailing => index >= count - extra,
        };

        Ok((0..count)
            .map(|index| self.with_cents(if bumped(index) { base + 1 } else { base }))
            .collect())
    }

    /// Splits this amount into as many installments of `payment` as fit.
    ///
    /// The count is `cents / payment.cents`, truncated. Currencies are not
    /// converted; both amounts are read as plain cents.
    pub fn installments_of(
        &self,
        payment: &Self,
        placement: RemainderPlacement,
    ) -> MoneyResult<Wallet> {
        let count = self.cents.checked_div(payment.cents).ok_or_else(|| {
            MoneyError::InvalidArgument("installment amount must not be zero".to_string())
        })?;
        let count = usize::try_from(count).map_err(|_| {
            MoneyError::InvalidArgument(format!("invalid installment count: {count}"))
        })?;
        self.split_in_installments(count, placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cambio_shared::Currency;
    use rstest::rstest;

    fn cents_of(wallet: &Wallet) -> Vec<i64> {
        wallet.iter().map(Money::cents).collect()
    }

    #[rstest]
    #[case(1000, 3, RemainderPlacement::Leading, vec![334, 333, 333])]
    #[case(1000, 3, RemainderPlacement::Trailing, vec![333, 333, 334])]
    #[case(1001, 3, RemainderPlacement::Leading, vec![334, 334, 333])]
    #[case(1001, 3, RemainderPlacement::Trailing, vec![333, 334, 334])]
    #[case(900, 3, RemainderPlacement::Leading, vec![300, 300, 300])]
    #[case(2, 4, RemainderPlacement::Leading, vec![1, 1, 0, 0])]
    #[case(-1000, 3, RemainderPlacement::Leading, vec![-333, -333, -334])]
    #[case(0, 2, RemainderPlacement::Trailing, vec![0, 0])]
    fn test_split_in_installments(
        #[case] cents: i64,
        #[case] count: usize,
        #[case] placement: RemainderPlacement,
        #[case] expected: Vec<i64>,
    ) {
        let money = Money::from_cents(cents);
        let parts = money.split_in_installments(count, placement).unwrap();
        assert_eq!(cents_of(&parts), expected);
        assert_eq!(parts.sum().unwrap(), money);
    }

    #[test]
    fn test_split_keeps_currency() {
        let parts = Money::euro(10_00)
            .split_in_installments(4, RemainderPlacement::default())
            .unwrap();
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|part| part.currency() == &Currency::EUR));
    }

    #[test]
    fn test_split_zero_count_rejected() {
        let err = Money::from_cents(1000)
            .split_in_installments(0, RemainderPlacement::Leading)
            .unwrap_err();
        assert!(matches!(err, MoneyError::InvalidArgument(_)));
    }

    #[test]
    fn test_installments_of() {
        let total = Money::real(1000_00);
        let parts = total
            .installments_of(&Money::real(300_00), RemainderPlacement::Leading)
            .unwrap();
        assert_eq!(cents_of(&parts), vec![333_34, 333_33, 333_33]);
    }

    #[test]
    fn test_installments_of_ignores_currency() {
        let parts = Money::real(100_00)
            .installments_of(&Money::us_dollar(50_00), RemainderPlacement::Leading)
            .unwrap();
        assert_eq!(cents_of(&parts), vec![50_00, 50_00]);
    }

    #[rstest]
    #[case(0)]
    #[case(200_00)]
    #[case(-10_00)]
    fn test_installments_of_invalid_payment(#[case] payment: i64) {
        let err = Money::real(100_00)
            .installments_of(&Money::real(payment), RemainderPlacement::Leading)
            .unwrap_err();
        assert!(matches!(err, MoneyError::InvalidArgument(_)));
    }
}
