// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Comparison and arithmetic operations on money values.
//!
//! Every operation taking another money value first checks that both variants have the
//! same class subunits, then that both carry the same currency. Results are rebuilt
//! through the validating constructor, so sign policies and custom validation of the
//! variant also apply to them.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use tally_core::{
    decimal::{parse_decimal, to_fraction},
    math,
    rounding::{RoundingMode, div_round},
};

use crate::{
    error::MoneyError,
    types::{BaseMoney, Currency, Money},
    variants::MoneyVariant,
    xrate::CurrencyConverter,
};

impl<V: MoneyVariant> Money<V> {
    fn assert_same_subunits<M: BaseMoney + ?Sized>(
        &self,
        other: &M,
        method: &'static str,
    ) -> Result<(), MoneyError> {
        if other.class_subunits() == V::CLASS_SUBUNITS {
            return Ok(());
        }
        Err(MoneyError::DifferentSubunitPrecision {
            method,
            name: V::NAME,
            other_name: other.name(),
            subunits: V::CLASS_SUBUNITS,
            other_subunits: other.class_subunits(),
        })
    }

    fn assert_same_currency<M: BaseMoney + ?Sized>(&self, other: &M) -> Result<(), MoneyError> {
        // Equal codes with different natural precisions are not interchangeable
        let other_currency = other.currency();
        if self.get_currency() == other_currency
            && self.get_currency().subunits() == other_currency.subunits()
        {
            return Ok(());
        }
        Err(MoneyError::CurrenciesNotIdentical {
            currency: self.get_currency().code(),
            other_currency: other_currency.code(),
        })
    }

    fn assert_compatible<M: BaseMoney + ?Sized>(
        &self,
        other: &M,
        method: &'static str,
    ) -> Result<(), MoneyError> {
        self.assert_same_subunits(other, method)?;
        self.assert_same_currency(other)
    }

    /// Returns whether `other` has the same currency and amount.
    ///
    /// A different currency is not an error and yields `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the class subunits differ.
    pub fn equals<M: BaseMoney + ?Sized>(&self, other: &M) -> Result<bool, MoneyError> {
        self.assert_same_subunits(other, "equals")?;
        Ok(self.is_same_currency(other) && self.raw() == other.raw())
    }

    /// Compares the amount with `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the class subunits or currencies differ.
    pub fn compare<M: BaseMoney + ?Sized>(&self, other: &M) -> Result<Ordering, MoneyError> {
        self.compare_for(other, "compare")
    }

    fn compare_for<M: BaseMoney + ?Sized>(
        &self,
        other: &M,
        method: &'static str,
    ) -> Result<Ordering, MoneyError> {
        self.assert_compatible(other, method)?;
        Ok(self.raw().cmp(other.raw()))
    }

    /// Returns whether the amount is greater than that of `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the class subunits or currencies differ.
    pub fn greater_than<M: BaseMoney + ?Sized>(&self, other: &M) -> Result<bool, MoneyError> {
        Ok(self.compare_for(other, "greater_than")? == Ordering::Greater)
    }

    /// Returns whether the amount is greater than or equal to that of `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the class subunits or currencies differ.
    pub fn greater_than_or_equal<M: BaseMoney + ?Sized>(
        &self,
        other: &M,
    ) -> Result<bool, MoneyError> {
        Ok(self.compare_for(other, "greater_than_or_equal")? != Ordering::Less)
    }

    /// Returns whether the amount is less than that of `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the class subunits or currencies differ.
    pub fn less_than<M: BaseMoney + ?Sized>(&self, other: &M) -> Result<bool, MoneyError> {
        Ok(self.compare_for(other, "less_than")? == Ordering::Less)
    }

    /// Returns whether the amount is less than or equal to that of `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the class subunits or currencies differ.
    pub fn less_than_or_equal<M: BaseMoney + ?Sized>(
        &self,
        other: &M,
    ) -> Result<bool, MoneyError> {
        Ok(self.compare_for(other, "less_than_or_equal")? != Ordering::Greater)
    }

    /// Returns the sum of this value and `addend`.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands are incompatible or the result is invalid for
    /// the variant.
    pub fn add<M: BaseMoney + ?Sized>(&self, addend: &M) -> Result<Self, MoneyError> {
        self.assert_compatible(addend, "add")?;
        self.rebuild_raw(&(self.raw() + addend.raw()))
    }

    /// Returns the sum of this value and all `addends`.
    ///
    /// # Errors
    ///
    /// Returns an error if any operand is incompatible or the result is invalid for
    /// the variant.
    pub fn add_all(&self, addends: &[&dyn BaseMoney]) -> Result<Self, MoneyError> {
        let mut total = self.raw().clone();
        for addend in addends {
            self.assert_compatible(*addend, "add")?;
            total += addend.raw();
        }
        self.rebuild_raw(&total)
    }

    /// Returns this value minus `subtrahend`.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands are incompatible or the result is invalid for
    /// the variant.
    pub fn subtract<M: BaseMoney + ?Sized>(&self, subtrahend: &M) -> Result<Self, MoneyError> {
        self.assert_compatible(subtrahend, "subtract")?;
        self.rebuild_raw(&(self.raw() - subtrahend.raw()))
    }

    /// Returns this value minus all `subtrahends`.
    ///
    /// # Errors
    ///
    /// Returns an error if any operand is incompatible or the result is invalid for
    /// the variant.
    pub fn subtract_all(&self, subtrahends: &[&dyn BaseMoney]) -> Result<Self, MoneyError> {
        let mut total = self.raw().clone();
        for subtrahend in subtrahends {
            self.assert_compatible(*subtrahend, "subtract")?;
            total -= subtrahend.raw();
        }
        self.rebuild_raw(&total)
    }

    /// Returns this value multiplied by the decimal `multiplier`, rounded to the
    /// currency's natural precision using `rounding`.
    ///
    /// # Errors
    ///
    /// Returns an error if `multiplier` is not a plain decimal number or the result is
    /// invalid for the variant.
    pub fn multiply(&self, multiplier: &str, rounding: RoundingMode) -> Result<Self, MoneyError> {
        let value = parse_decimal(multiplier).map_err(|source| MoneyError::InvalidOperand {
            method: "multiply",
            source,
        })?;
        let (numerator, denominator) = to_fraction(&value);
        let units = div_round(&(self.natural_units() * numerator), &denominator, rounding);
        self.rebuild_units(&units)
    }

    /// Returns this value divided by the decimal `divisor`, rounded to the currency's
    /// natural precision using `rounding`.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisor` is not a plain decimal number, is zero, or the
    /// result is invalid for the variant.
    pub fn divide(&self, divisor: &str, rounding: RoundingMode) -> Result<Self, MoneyError> {
        let value = parse_decimal(divisor).map_err(|source| MoneyError::InvalidOperand {
            method: "divide",
            source,
        })?;
        let (numerator, denominator) = to_fraction(&value);
        if numerator.is_zero() {
            return Err(MoneyError::DivisionByZero { method: "divide" });
        }
        let units = div_round(&(self.natural_units() * denominator), &numerator, rounding);
        self.rebuild_units(&units)
    }

    /// Returns the remainder of dividing this value by `divisor`.
    ///
    /// The remainder takes the sign of this value.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands are incompatible, `divisor` is zero, or the
    /// result is invalid for the variant.
    pub fn modulo<M: BaseMoney + ?Sized>(&self, divisor: &M) -> Result<Self, MoneyError> {
        self.assert_compatible(divisor, "modulo")?;
        if divisor.raw().is_zero() {
            return Err(MoneyError::DivisionByZero { method: "modulo" });
        }
        self.rebuild_raw(&(self.raw() % divisor.raw()))
    }

    /// Allocates this value proportionally to `ratios`.
    ///
    /// Remainder units at the currency's natural precision go one at a time to the
    /// earliest shares, so the shares always sum to this value.
    ///
    /// # Errors
    ///
    /// Returns an error if `ratios` is empty or sums to zero, or a share is invalid for
    /// the variant.
    pub fn allocate(&self, ratios: &[u64]) -> Result<Vec<Self>, MoneyError> {
        let shares = math::allocate(&self.natural_units(), ratios)
            .map_err(|e| MoneyError::InvalidAllocation(e.to_string()))?;
        shares.iter().map(|units| self.rebuild_units(units)).collect()
    }

    /// Allocates this value into `n` equal shares; see [`Money::allocate`].
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero or a share is invalid for the variant.
    pub fn allocate_to(&self, n: usize) -> Result<Vec<Self>, MoneyError> {
        let shares = math::allocate_to(&self.natural_units(), n)
            .map_err(|e| MoneyError::InvalidAllocation(e.to_string()))?;
        shares.iter().map(|units| self.rebuild_units(units)).collect()
    }

    /// Returns the ratio of this value to `other` with 14 fractional digits, truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands are incompatible or `other` is zero.
    pub fn ratio_of<M: BaseMoney + ?Sized>(&self, other: &M) -> Result<String, MoneyError> {
        self.assert_compatible(other, "ratio_of")?;
        if other.raw().is_zero() {
            return Err(MoneyError::DivisionByZero { method: "ratio_of" });
        }
        math::ratio(self.raw(), other.raw())
            .map_err(|_| MoneyError::DivisionByZero { method: "ratio_of" })
    }

    /// Returns the absolute value.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is invalid for the variant.
    pub fn absolute(&self) -> Result<Self, MoneyError> {
        self.rebuild_raw(&self.raw().abs())
    }

    /// Returns the value with its sign flipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is invalid for the variant.
    pub fn negative(&self) -> Result<Self, MoneyError> {
        self.rebuild_raw(&-self.raw())
    }

    /// Converts this value into `to_currency` using `converter`.
    ///
    /// # Errors
    ///
    /// Returns an error if `to_currency` is the current currency, the converter fails,
    /// or the converted amount is invalid for the variant.
    pub fn convert(
        &self,
        converter: &dyn CurrencyConverter,
        to_currency: &Currency,
    ) -> Result<Self, MoneyError> {
        let currency = self.get_currency();
        let amount = self.get_amount();

        if currency == *to_currency {
            return Err(MoneyError::SameCurrencyConversion {
                amount,
                currency: currency.code(),
                to_currency: to_currency.code(),
            });
        }

        let converted = converter
            .convert(&amount, &currency, to_currency)
            .map_err(|e| MoneyError::ConversionFailed {
                amount: amount.clone(),
                currency: currency.code(),
                to_currency: to_currency.code(),
                reason: e.to_string(),
            })?;

        log::debug!("Converted {amount} {currency} to {converted} {to_currency}");
        Self::create(&converted, *to_currency)
    }

    /// Returns the smallest of `first` and `rest`; the first occurrence wins on ties.
    ///
    /// The result is always of the variant of `first`, so an operand of another variant
    /// that wins must also be valid for it.
    ///
    /// # Errors
    ///
    /// Returns an error if any operand is incompatible with `first` or the winning
    /// operand is invalid for the variant.
    pub fn min(first: &Self, rest: &[&dyn BaseMoney]) -> Result<Self, MoneyError> {
        first.select(rest, "min", Ordering::Less)
    }

    /// Returns the largest of `first` and `rest`; the first occurrence wins on ties.
    ///
    /// The result is always of the variant of `first`, so an operand of another variant
    /// that wins must also be valid for it.
    ///
    /// # Errors
    ///
    /// Returns an error if any operand is incompatible with `first` or the winning
    /// operand is invalid for the variant.
    pub fn max(first: &Self, rest: &[&dyn BaseMoney]) -> Result<Self, MoneyError> {
        first.select(rest, "max", Ordering::Greater)
    }

    fn select(
        &self,
        rest: &[&dyn BaseMoney],
        method: &'static str,
        wanted: Ordering,
    ) -> Result<Self, MoneyError> {
        let mut best = self.raw();
        for money in rest {
            self.assert_compatible(*money, method)?;
            if money.raw().cmp(best) == wanted {
                best = money.raw();
            }
        }

        if best == self.raw() {
            return Ok(self.clone());
        }
        self.rebuild_raw(best)
    }

    /// Returns the sum of `first` and `rest`.
    ///
    /// # Errors
    ///
    /// Returns an error if any operand is incompatible with `first` or the result is
    /// invalid for the variant.
    pub fn sum(first: &Self, rest: &[&dyn BaseMoney]) -> Result<Self, MoneyError> {
        let mut total = first.raw().clone();
        for money in rest {
            first.assert_compatible(*money, "sum")?;
            total += money.raw();
        }
        first.rebuild_raw(&total)
    }

    /// Returns the average of `first` and `rest`, rounded half up to the currency's
    /// natural precision.
    ///
    /// # Errors
    ///
    /// Returns an error if any operand is incompatible with `first` or the result is
    /// invalid for the variant.
    pub fn avg(first: &Self, rest: &[&dyn BaseMoney]) -> Result<Self, MoneyError> {
        let mut total = first.raw().clone();
        for money in rest {
            first.assert_compatible(*money, "avg")?;
            total += money.raw();
        }

        // Only the average is validated against the variant
        let count = BigInt::from(rest.len() + 1);
        let units = div_round(&first.to_natural_units(&total), &count, RoundingMode::HalfUp);
        first.rebuild_units(&units)
    }
}
