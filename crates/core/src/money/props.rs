//! Property-based tests for money values.
//!
//! - Installments: parts always sum back to the original amount
//! - Ordering: same-currency comparison agrees with the cents
//! - Rounding: fractional cents round half away from zero

use std::cmp::Ordering;

use cambio_shared::Currency;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{Money, RemainderPlacement};

/// Strategy to generate amounts in cents (-10M to 10M major units).
fn cents() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

fn placement() -> impl Strategy<Value = RemainderPlacement> {
    prop_oneof![
        Just(RemainderPlacement::Leading),
        Just(RemainderPlacement::Trailing),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* amount and count, the installments sum to the amount and
    /// differ from each other by at most one cent.
    #[test]
    fn prop_installments_sum_to_original(
        amount in cents(),
        count in 1usize..50,
        placement in placement(),
    ) {
        let money = Money::new(amount, Currency::EUR);
        let parts = money.split_in_installments(count, placement).unwrap();

        prop_assert_eq!(parts.len(), count);
        prop_assert_eq!(parts.sum().unwrap(), money);

        let max = parts.iter().map(Money::cents).max().unwrap();
        let min = parts.iter().map(Money::cents).min().unwrap();
        prop_assert!(max - min <= 1);
    }

    /// *For any* two amounts in one currency, compare matches the cents and
    /// equality matches `Ordering::Equal`.
    #[test]
    fn prop_compare_matches_cents(a in cents(), b in cents()) {
        let left = Money::us_dollar(a);
        let right = Money::us_dollar(b);

        prop_assert_eq!(left.compare(&right).unwrap(), a.cmp(&b));
        prop_assert_eq!(right.compare(&left).unwrap(), b.cmp(&a));
        prop_assert_eq!(left.compare(&left).unwrap(), Ordering::Equal);
        prop_assert_eq!(left == right, a == b);
    }

    /// *For any* whole amount plus half a cent, rounding moves away from zero.
    #[test]
    fn prop_half_cent_rounds_away_from_zero(amount in cents()) {
        let half = Decimal::new(5, 1);
        let value = Decimal::from(amount) + if amount < 0 { -half } else { half };
        let rounded = Money::from_decimal(value, Currency::USD).unwrap();

        let expected = if amount < 0 { amount - 1 } else { amount + 1 };
        prop_assert_eq!(rounded.cents(), expected);
    }
}
