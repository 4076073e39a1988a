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

//! Represents an amount of money in a specified currency at a variant's fixed precision.
//!
//! Amounts are held as arbitrary-precision integers scaled by `10^CLASS_SUBUNITS` of the
//! variant, while the textual amount always has exactly the currency's natural number of
//! fractional digits. A value can only be obtained through the validating constructors.

use std::{
    any::Any,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use tally_core::{
    AmountFormat,
    decimal::{from_subunits, is_multiple_of_power_of_ten, subunit_multiplier, to_subunits},
    serialization::Serializable,
};

use crate::{
    currencies::Currencies,
    error::{AmountPolicy, MoneyError},
    types::Currency,
    variants::MoneyVariant,
};

/// The object-safe contract shared by every money variant.
///
/// Operations taking another money value accept any `BaseMoney`, so mixing variants is
/// detected at runtime through [`BaseMoney::class_subunits`].
pub trait BaseMoney: Debug + Display + Send + Sync {
    /// Returns the human-readable name of the variant.
    fn name(&self) -> &'static str;

    /// Returns the subunit ceiling of the variant.
    fn class_subunits(&self) -> u8;

    /// Returns the amount in integer subunits at the variant's class precision.
    fn raw(&self) -> &BigInt;

    /// Returns the currency, carrying its resolved natural precision.
    fn currency(&self) -> Currency;

    /// Returns the decimal amount at the currency's natural precision.
    fn amount(&self) -> String;

    /// Returns the value as [`Any`] for downcasting to a concrete variant.
    fn as_any(&self) -> &dyn Any;

    /// Returns whether the amount is zero.
    fn is_zero(&self) -> bool {
        self.raw().is_zero()
    }

    /// Returns whether the amount is strictly positive.
    fn is_positive(&self) -> bool {
        self.raw().is_positive()
    }

    /// Returns whether the amount is strictly negative.
    fn is_negative(&self) -> bool {
        self.raw().is_negative()
    }
}

/// Represents an amount of money in a specified currency for the variant `V`.
pub struct Money<V: MoneyVariant> {
    raw: BigInt,
    currency: Currency,
    _variant: PhantomData<fn() -> V>,
}

impl<V: MoneyVariant> Money<V> {
    /// Creates a new money value from the decimal `amount` and `currency`.
    ///
    /// Validation runs in a fixed order, failing at the first violated rule:
    /// 1. The currency must be allowed by the variant.
    /// 2. The currency's natural precision must not exceed the class subunits.
    /// 3. The amount must have exactly the natural number of fractional digits.
    /// 4. The variant's [`MoneyVariant::validate`] hook must pass.
    /// 5. The sign policies of the variant must hold.
    ///
    /// The natural precision is the one carried by `currency` if present, otherwise the
    /// one registered for its code.
    ///
    /// # Errors
    ///
    /// Returns the [`MoneyError`] of the first rule violated.
    pub fn create(amount: &str, currency: Currency) -> Result<Self, MoneyError> {
        Self::create_within(amount, currency, &V::allowed_currencies())
    }

    /// Creates a new money value validating the currency against `allowed` in place of
    /// the variant's own registry. See [`Money::create`].
    ///
    /// # Errors
    ///
    /// Returns the [`MoneyError`] of the first rule violated.
    pub fn create_within(
        amount: &str,
        currency: Currency,
        allowed: &dyn Currencies,
    ) -> Result<Self, MoneyError> {
        let Some(registered) = allowed.subunit_for(currency.code().as_str()) else {
            return Err(MoneyError::CurrencyNotAllowed {
                name: V::NAME,
                amount: amount.to_string(),
                currency: currency.code(),
            });
        };

        let subunits = currency.subunits().unwrap_or(registered);
        if subunits > V::CLASS_SUBUNITS {
            return Err(MoneyError::CurrencyExceedsSubunitLimit {
                name: V::NAME,
                amount: amount.to_string(),
                currency: currency.code(),
                subunits,
                max_subunits: V::CLASS_SUBUNITS,
            });
        }
        Self::construct(amount, currency.with_subunits(subunits))
    }

    /// Creates a new money value of this variant from a value of any variant with the
    /// same class subunits, re-running all validation of this variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the class subunits differ or the value is invalid for this
    /// variant.
    pub fn create_from_money<M: BaseMoney + ?Sized>(money: &M) -> Result<Self, MoneyError> {
        if money.class_subunits() != V::CLASS_SUBUNITS {
            return Err(MoneyError::DifferentSubunitPrecision {
                method: "create_from_money",
                name: V::NAME,
                other_name: money.name(),
                subunits: V::CLASS_SUBUNITS,
                other_subunits: money.class_subunits(),
            });
        }
        Self::create(&money.amount(), money.currency())
    }

    // Expects `currency` to carry its natural precision.
    fn construct(amount: &str, currency: Currency) -> Result<Self, MoneyError> {
        let subunits = currency.subunits().unwrap_or(V::CLASS_SUBUNITS);

        if subunits > V::CLASS_SUBUNITS {
            return Err(MoneyError::CurrencyExceedsSubunitLimit {
                name: V::NAME,
                amount: amount.to_string(),
                currency: currency.code(),
                subunits,
                max_subunits: V::CLASS_SUBUNITS,
            });
        }

        let format = AmountFormat::new(subunits);
        let invalid_format = || MoneyError::AmountFormatInvalid {
            name: V::NAME,
            amount: amount.to_string(),
            currency: currency.code(),
            format,
        };

        if !format.is_match(amount) {
            return Err(invalid_format());
        }

        let raw = to_subunits(amount, V::CLASS_SUBUNITS).map_err(|_| invalid_format())?;
        let money = Self {
            raw,
            currency,
            _variant: PhantomData,
        };

        V::validate(&money)?;
        money.check_policies(amount)?;

        log::trace!("Created {money:?}");
        Ok(money)
    }

    fn check_policies(&self, amount: &str) -> Result<(), MoneyError> {
        let violated = if V::AMOUNT_MUST_BE_GREATER_THAN_ZERO && !self.raw.is_positive() {
            Some(AmountPolicy::GreaterThanZero)
        } else if V::AMOUNT_MUST_BE_ZERO_OR_GREATER && self.raw.is_negative() {
            Some(AmountPolicy::ZeroOrGreater)
        } else if V::AMOUNT_MUST_BE_ZERO_OR_LESS && self.raw.is_positive() {
            Some(AmountPolicy::ZeroOrLess)
        } else if V::AMOUNT_MUST_BE_LESS_THAN_ZERO && !self.raw.is_negative() {
            Some(AmountPolicy::LessThanZero)
        } else {
            None
        };

        match violated {
            Some(policy) => Err(MoneyError::AmountPolicyViolation {
                name: V::NAME,
                amount: amount.to_string(),
                currency: self.currency.code(),
                policy,
            }),
            None => Ok(()),
        }
    }

    /// Rebuilds a value of this variant in the same currency from `raw` class subunits.
    pub(crate) fn rebuild_raw(&self, raw: &BigInt) -> Result<Self, MoneyError> {
        let excess = self.excess_subunits();
        let amount = if is_multiple_of_power_of_ten(raw, excess) {
            from_subunits(&(raw / subunit_multiplier(excess)), self.natural_subunits())
        } else {
            from_subunits(raw, V::CLASS_SUBUNITS)
        };
        Self::construct(&amount, self.currency)
    }

    /// Rebuilds a value of this variant in the same currency from `units` at natural precision.
    pub(crate) fn rebuild_units(&self, units: &BigInt) -> Result<Self, MoneyError> {
        let amount = from_subunits(units, self.natural_subunits());
        Self::construct(&amount, self.currency)
    }

    /// Returns the human-readable name of the variant.
    #[must_use]
    pub fn variant_name() -> &'static str {
        V::NAME
    }

    /// Returns the number of fractional digits of the currency.
    #[must_use]
    pub fn natural_subunits(&self) -> u8 {
        self.currency.subunits().unwrap_or(V::CLASS_SUBUNITS)
    }

    fn excess_subunits(&self) -> u8 {
        V::CLASS_SUBUNITS - self.natural_subunits()
    }

    /// Returns the amount in integer units at the currency's natural precision.
    #[must_use]
    pub fn natural_units(&self) -> BigInt {
        self.to_natural_units(&self.raw)
    }

    /// Converts `raw` class subunits to units at the currency's natural precision.
    pub(crate) fn to_natural_units(&self, raw: &BigInt) -> BigInt {
        raw / subunit_multiplier(self.excess_subunits())
    }

    /// Returns the decimal amount at the currency's natural precision.
    #[must_use]
    pub fn get_amount(&self) -> String {
        from_subunits(&self.natural_units(), self.natural_subunits())
    }

    /// Returns the currency, carrying its resolved natural precision.
    #[must_use]
    pub fn get_currency(&self) -> Currency {
        self.currency
    }

    /// Returns whether `other` has the same currency.
    #[must_use]
    pub fn is_same_currency<M: BaseMoney + ?Sized>(&self, other: &M) -> bool {
        self.currency == other.currency()
    }
}

impl<V: MoneyVariant> BaseMoney for Money<V> {
    fn name(&self) -> &'static str {
        V::NAME
    }

    fn class_subunits(&self) -> u8 {
        V::CLASS_SUBUNITS
    }

    fn raw(&self) -> &BigInt {
        &self.raw
    }

    fn currency(&self) -> Currency {
        self.currency
    }

    fn amount(&self) -> String {
        self.get_amount()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<V: MoneyVariant> Clone for Money<V> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            currency: self.currency,
            _variant: PhantomData,
        }
    }
}

impl<V: MoneyVariant> PartialEq for Money<V> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.currency == other.currency
    }
}

impl<V: MoneyVariant> Eq for Money<V> {}

impl<V: MoneyVariant> Hash for Money<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
        self.currency.hash(state);
    }
}

impl<V: MoneyVariant> Debug for Money<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", V::NAME, self.get_amount(), self.currency)
    }
}

impl<V: MoneyVariant> Display for Money<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.get_amount(), self.currency)
    }
}

impl<V: MoneyVariant> FromStr for Money<V> {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        let parts: Vec<&str> = value.split_whitespace().collect();

        if parts.len() != 2 {
            anyhow::bail!("Error invalid input format '{value}'. Expected '<amount> <currency>'");
        }

        let currency = Currency::from_str(parts[1])?;
        Ok(Self::create(parts[0], currency)?)
    }
}

impl<V: MoneyVariant> Serialize for Money<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("amount", &self.get_amount())?;
        map.serialize_entry("currency", &self.currency)?;
        map.end()
    }
}

#[derive(Deserialize)]
struct MoneyRepr {
    amount: String,
    currency: Currency,
}

impl<'de, V: MoneyVariant> Deserialize<'de> for Money<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = MoneyRepr::deserialize(deserializer)?;
        Self::create(&repr.amount, repr.currency).map_err(serde::de::Error::custom)
    }
}

impl<V: MoneyVariant> Serializable for Money<V> {}
