//! Property-based tests for exchange banks.
//!
//! - Rate normalization: `get_rate` returns what `add_rate` registered,
//!   as long as rate times base rate fits in 28 significant digits
//! - Exchange identity: converting into the same currency is a no-op

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::ExchangeBank;
use super::variable::VariableExchangeBank;

/// Strategy to generate positive rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate rates with up to 13 significant digits and 12
/// decimal places, so a product of two stays within `Decimal` precision.
fn precise_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000_000i64).prop_map(|v| Decimal::new(v, 12))
}

/// Strategy to generate currency codes other than the base.
fn foreign_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["EUR", "BRL", "GBP", "JPY", "CAD", "IDR"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* base rate and foreign rate, the foreign rate reads back
    /// exactly, whatever the base was registered at.
    #[test]
    fn prop_add_rate_then_get_rate(
        base_rate in positive_rate(),
        rate in positive_rate(),
        code in foreign_code(),
    ) {
        let bank = VariableExchangeBank::new();
        bank.add_rate("USD", base_rate).unwrap();
        bank.add_rate(code, rate).unwrap();

        prop_assert_eq!(bank.get_rate(code), Some(rate));
        prop_assert_eq!(bank.get_rate("USD"), Some(base_rate));
    }

    /// *For any* pair of high-precision rates, normalization against the
    /// base still reads back exactly.
    #[test]
    fn prop_precise_rate_reads_back_exactly(
        base_rate in precise_rate(),
        rate in precise_rate(),
        code in foreign_code(),
    ) {
        let bank = VariableExchangeBank::new();
        bank.add_rate("USD", base_rate).unwrap();
        bank.add_rate(code, rate).unwrap();

        prop_assert_eq!(bank.get_rate(code), Some(rate));
        prop_assert_eq!(bank.get_rate("USD"), Some(base_rate));
    }

    /// *For any* amount, exchanging into the same currency returns it
    /// unchanged, registered or not.
    #[test]
    fn prop_exchange_identity(cents in any::<i64>(), code in foreign_code()) {
        let bank = VariableExchangeBank::new();
        prop_assert_eq!(bank.exchange(cents, code, code).unwrap(), cents);
        prop_assert_eq!(bank.exchange(cents, "USD", "usd").unwrap(), cents);
    }

    /// *For any* amount, converting through a rate of 1 preserves it.
    #[test]
    fn prop_unit_rate_preserves_amount(
        cents in -1_000_000_000_000i64..1_000_000_000_000i64,
        code in foreign_code(),
    ) {
        let bank = VariableExchangeBank::new();
        bank.add_rate(code, Decimal::ONE).unwrap();
        prop_assert_eq!(bank.exchange(cents, "USD", code).unwrap(), cents);
        prop_assert_eq!(bank.exchange(cents, code, "USD").unwrap(), cents);
    }
}
