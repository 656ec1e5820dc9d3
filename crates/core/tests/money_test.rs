//! End-to-end tests: a bank loaded from a rate feed, money values bound to
//! it, and the formatting and persistence round trip.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use cambio_core::bank::refresh::refresh_once;
use cambio_core::{
    AutoRefresh, Currency, ExchangeBank, FormatOptions, JsonRateSource, Money, MoneyError,
    RateSource, RemainderPlacement, VariableExchangeBank,
};
use cambio_shared::config::{BankConfig, RefreshConfig};
use cambio_shared::telemetry::init_tracing;
use rust_decimal_macros::dec;

const FEED: &str = r#"{
    "base": "EUR",
    "rates": {"USD": "1.25", "BRL": "5.00", "GBP": "0.85", "JPY": 160}
}"#;

fn loaded_bank() -> Arc<VariableExchangeBank> {
    let bank = Arc::new(VariableExchangeBank::new());
    bank.refresh(&JsonRateSource::Inline(FEED.to_string()))
        .unwrap();
    bank
}

#[test]
fn test_feed_rates_are_read_against_base() {
    init_tracing().ok();
    let bank = loaded_bank();

    // the base reads back as quoted, the others relative to it
    assert_eq!(bank.get_rate("USD"), Some(dec!(1.25)));
    assert_eq!(bank.get_rate("EUR"), Some(dec!(0.8)));
    assert_eq!(bank.get_rate("BRL"), Some(dec!(4)));
    assert_eq!(bank.exchange(100_00, "USD", "BRL").unwrap(), 400_00);
    assert_eq!(bank.exchange(100_00, "EUR", "BRL").unwrap(), 500_00);
}

#[test]
fn test_cross_currency_operations() {
    let bank = loaded_bank();
    let dollars = Money::with_bank(100_00, Currency::USD, bank.clone());
    let euros = Money::with_bank(80_00, Currency::EUR, bank.clone());

    assert_eq!(dollars.compare(&euros).unwrap(), Ordering::Equal);
    assert_eq!(dollars.try_add(&euros).unwrap(), Money::us_dollar(200_00));
    assert_eq!(dollars.try_sub(&euros).unwrap(), Money::us_dollar(0));
    assert_eq!(
        euros.exchange_to(&Currency::BRL).unwrap(),
        Money::real(400_00)
    );

    let unknown = Money::with_bank(1_00, Currency::new("CHF").unwrap(), bank);
    assert!(matches!(
        dollars.compare(unknown),
        Err(MoneyError::UnknownRate { .. })
    ));
}

#[test]
fn test_installments_format_and_storage() {
    let bank = loaded_bank();
    let price = Money::with_bank(1000_00, Currency::BRL, bank);

    let with_interest = price
        .try_add(&price.compound_interest(dec!(12.99), 12, 12).unwrap())
        .unwrap();
    assert_eq!(with_interest, Money::real(1137_92));

    let parts = with_interest
        .split_in_installments(12, RemainderPlacement::Leading)
        .unwrap();
    assert_eq!(parts.sum().unwrap(), with_interest);
    assert_eq!(
        parts[0].format(&FormatOptions::new()).unwrap(),
        "R$94,83"
    );
    assert_eq!(parts[11].to_real(), "94,82");

    let (cents, currency) = parts[0].to_stored_columns();
    let restored = Money::from_stored_columns(cents, Some(&currency)).unwrap();
    assert_eq!(restored, parts[0]);
}

#[test]
fn test_bank_from_config() {
    let bank = VariableExchangeBank::from_config(&BankConfig {
        base_currency: "eur".to_string(),
    })
    .unwrap();
    assert_eq!(bank.base_currency(), &Currency::EUR);
    assert_eq!(bank.get_rate("EUR"), Some(dec!(1)));
}

#[tokio::test]
async fn test_refresh_from_configured_file() {
    init_tracing().ok();
    let path = std::env::temp_dir().join(format!("cambio-rates-{}.json", std::process::id()));
    std::fs::write(&path, FEED).unwrap();

    let config = RefreshConfig {
        interval_secs: 3600,
        timeout_secs: 5,
        source_path: Some(path.clone()),
    };
    let source: Arc<dyn RateSource> = Arc::new(JsonRateSource::from_config(&config).unwrap());
    let bank = Arc::new(VariableExchangeBank::new());

    let loaded = refresh_once(&bank, &source, config.timeout()).await.unwrap();
    assert_eq!(loaded, 5);

    let refresher = AutoRefresh::from_config(Arc::clone(&bank), source, &config).unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(refresher.is_running());
    assert_eq!(bank.get_rate("GBP"), Some(dec!(0.68)));
    refresher.stop();

    std::fs::remove_file(path).ok();
}
