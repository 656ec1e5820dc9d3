//! Comparison and arithmetic between money values.
//!
//! Same-currency operations work on cents directly. When currencies differ
//! the right-hand operand is first converted into the left-hand currency:
//! comparisons convert through the right operand's own bank, addition and
//! subtraction through the left operand's bank. A bare number on the right is
//! an amount in major units of the left operand's currency, truncated to
//! whole cents.

use std::cmp::Ordering;
use std::ops::{Div, Mul, Rem};
use std::str::FromStr;
use std::sync::Arc;

use cambio_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

use super::Money;
use super::storage::StoredMoney;
use crate::bank::conversion::overflow;

/// Right-hand side of a comparison or of an addition/subtraction.
#[derive(Debug, Clone)]
pub enum Operand {
    /// Another money value.
    Money(Money),
    /// A bare amount in major units of the left operand's currency.
    Major(Decimal),
}

impl From<Money> for Operand {
    fn from(value: Money) -> Self {
        Self::Money(value)
    }
}

impl From<&Money> for Operand {
    fn from(value: &Money) -> Self {
        Self::Money(value.clone())
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Self::Major(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Major(Decimal::from(value))
    }
}

/// Interprets loosely typed input (a JSON payload, a config value) as an
/// operand: numbers are major units, strings are money literals, and
/// `{"cents": .., "currency": ..}` objects are money values.
impl TryFrom<&Value> for Operand {
    type Error = MoneyError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(number) => Decimal::from_str(&number.to_string())
                .or_else(|_| Decimal::from_scientific(&number.to_string()))
                .map(Self::Major)
                .map_err(|err| MoneyError::TypeMismatch(format!("{number} is not an amount: {err}"))),
            Value::String(literal) => Money::from_str(literal)
                .map(Self::Money)
                .map_err(|_| MoneyError::TypeMismatch(format!("{literal:?} is not a money literal"))),
            Value::Object(_) => serde_json::from_value::<StoredMoney>(value.clone())
                .map(|stored| Self::Money(stored.into()))
                .map_err(|err| MoneyError::TypeMismatch(format!("not a money object: {err}"))),
            Value::Null | Value::Bool(_) | Value::Array(_) => Err(MoneyError::TypeMismatch(
                format!("cannot use {value} as money"),
            )),
        }
    }
}

impl Money {
    /// Turns an operand into money, bare numbers taking this value's currency.
    fn coerce(&self, operand: Operand) -> MoneyResult<Self> {
        match operand {
            Operand::Money(money) => Ok(money),
            Operand::Major(amount) => {
                let cents = amount
                    .checked_mul(Decimal::ONE_HUNDRED)
                    .and_then(|cents| cents.trunc().to_i64())
                    .ok_or_else(overflow)?;
                Ok(self.with_cents(cents))
            }
        }
    }

    /// Compares with another amount, converting it into this currency first.
    ///
    /// Fails with `UnknownRate` when the conversion is impossible.
    pub fn compare(&self, other: impl Into<Operand>) -> MoneyResult<Ordering> {
        let other = self.coerce(other.into())?;
        if self.currency == other.currency {
            return Ok(self.cents.cmp(&other.cents));
        }
        let converted = other.exchange_to(&self.currency)?;
        Ok(self.cents.cmp(&converted.cents))
    }

    /// Compares with loosely typed input; see `Operand`'s `TryFrom<&Value>`.
    ///
    /// Fails with `TypeMismatch` when `other` cannot be read as money.
    pub fn compare_value(&self, other: &Value) -> MoneyResult<Ordering> {
        self.compare(Operand::try_from(other)?)
    }

    /// Converts `other` into this currency through this value's bank.
    fn convert_operand(&self, other: &Self) -> MoneyResult<i64> {
        self.bank.exchange(
            other.cents,
            other.currency.as_str(),
            self.currency.as_str(),
        )
    }

    /// Adds another amount.
    ///
    /// Same currency: the result carries the right operand's currency.
    /// Different currency: the right operand is converted with this value's
    /// bank and the result is in this value's currency.
    pub fn try_add(&self, other: impl Into<Operand>) -> MoneyResult<Self> {
        let other = self.coerce(other.into())?;
        if self.currency == other.currency {
            let cents = self.cents.checked_add(other.cents).ok_or_else(overflow)?;
            return Ok(Self::with_bank(cents, other.currency, Arc::clone(&self.bank)));
        }
        let converted = self.convert_operand(&other)?;
        Ok(self.with_cents(self.cents.checked_add(converted).ok_or_else(overflow)?))
    }

    /// Subtracts another amount.
    ///
    /// Same currency: the result carries this value's currency.
    /// Different currency: the right operand is converted with this value's
    /// bank and the result is in this value's currency.
    pub fn try_sub(&self, other: impl Into<Operand>) -> MoneyResult<Self> {
        let other = self.coerce(other.into())?;
        let subtrahend = if self.currency == other.currency {
            other.cents
        } else {
            self.convert_operand(&other)?
        };
        Ok(self.with_cents(self.cents.checked_sub(subtrahend).ok_or_else(overflow)?))
    }

    /// Divides the amount, truncating toward zero; zero divisors are an error.
    ///
    /// Truncation drops remainder cents; use
    /// [`split_in_installments`](Self::split_in_installments) to split an
    /// amount without losing any.
    pub fn checked_div(&self, divisor: i64) -> MoneyResult<Self> {
        self.cents
            .checked_div(divisor)
            .map(|cents| self.with_cents(cents))
            .ok_or_else(|| MoneyError::InvalidArgument(format!("cannot divide money by {divisor}")))
    }

    /// Multiplies the amount; a result outside the `i64` range is an error.
    pub fn checked_mul(&self, factor: i64) -> MoneyResult<Self> {
        self.cents
            .checked_mul(factor)
            .map(|cents| self.with_cents(cents))
            .ok_or_else(overflow)
    }
}

/// Integer multiplication.
///
/// # Panics
///
/// Panics if the product overflows `i64`, in release builds too. Use
/// [`Money::checked_mul`] to get an error instead.
impl Mul<i64> for &Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        match self.cents.checked_mul(factor) {
            Some(cents) => self.with_cents(cents),
            None => panic!("money multiplication overflowed: {} * {factor}", self.cents),
        }
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        &self * factor
    }
}

/// Integer division, truncating toward zero.
///
/// # Panics
///
/// Panics if `divisor` is zero or the quotient overflows (`i64::MIN / -1`),
/// like integer division. Use [`Money::checked_div`] to get an error instead.
impl Div<i64> for &Money {
    type Output = Money;

    fn div(self, divisor: i64) -> Money {
        self.with_cents(self.cents / divisor)
    }
}

impl Div<i64> for Money {
    type Output = Money;

    fn div(self, divisor: i64) -> Money {
        &self / divisor
    }
}

/// Integer remainder, with the sign of the amount.
///
/// # Panics
///
/// Panics if `divisor` is zero or on `i64::MIN % -1`, like integer
/// remainder.
impl Rem<i64> for &Money {
    type Output = Money;

    fn rem(self, divisor: i64) -> Money {
        self.with_cents(self.cents % divisor)
    }
}

impl Rem<i64> for Money {
    type Output = Money;

    fn rem(self, divisor: i64) -> Money {
        &self % divisor
    }
}
