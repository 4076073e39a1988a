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

//! Currency conversion for money values.
//!
//! Conversion is an external collaborator: money values only know the
//! [`CurrencyConverter`] contract. A [`FixedRateConverter`] is provided for static rate
//! tables.

use std::{fmt::Debug, sync::Arc};

use indexmap::IndexMap;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use tally_core::{
    RoundingMode,
    decimal::{from_subunits, parse_decimal, subunit_multiplier, to_fraction},
    rounding::div_round,
};
use ustr::Ustr;

use crate::{currencies::Currencies, types::Currency};

/// Converts decimal amounts between currencies.
pub trait CurrencyConverter: Debug + Send + Sync {
    /// Converts `amount` in `from` into a decimal amount of `to`.
    ///
    /// The returned amount must have exactly the natural number of fractional digits
    /// of `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if no rate is known or `amount` cannot be converted.
    fn convert(&self, amount: &str, from: &Currency, to: &Currency) -> anyhow::Result<String>;
}

/// A converter using a fixed table of exchange rates.
///
/// When only the opposite rate of a pair is known its exact inverse is used.
#[derive(Debug)]
pub struct FixedRateConverter {
    rates: IndexMap<(Ustr, Ustr), (BigInt, BigInt)>,
    currencies: Arc<dyn Currencies>,
    rounding: RoundingMode,
}

impl FixedRateConverter {
    /// Creates a new [`FixedRateConverter`] resolving target precision from `currencies`.
    #[must_use]
    pub fn new(currencies: Arc<dyn Currencies>, rounding: RoundingMode) -> Self {
        Self {
            rates: IndexMap::new(),
            currencies,
            rounding,
        }
    }

    /// Sets the rate converting one unit of `from` into `rate` units of `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is not a positive decimal number.
    pub fn add_rate(&mut self, from: &Currency, to: &Currency, rate: &str) -> anyhow::Result<()> {
        let (numerator, denominator) = to_fraction(&parse_decimal(rate)?);
        if !numerator.is_positive() {
            anyhow::bail!("Exchange rate for {from}/{to} must be positive, was {rate}");
        }

        log::debug!("Set exchange rate {from}/{to} = {rate}");
        self.rates
            .insert((from.code(), to.code()), (numerator, denominator));
        Ok(())
    }

    /// Returns the number of rates set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns whether no rates are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    fn rate(&self, from: Ustr, to: Ustr) -> Option<(BigInt, BigInt)> {
        if let Some(rate) = self.rates.get(&(from, to)) {
            return Some(rate.clone());
        }
        self.rates
            .get(&(to, from))
            .map(|(numerator, denominator)| (denominator.clone(), numerator.clone()))
    }
}

impl CurrencyConverter for FixedRateConverter {
    fn convert(&self, amount: &str, from: &Currency, to: &Currency) -> anyhow::Result<String> {
        let Some((rate_numerator, rate_denominator)) = self.rate(from.code(), to.code()) else {
            anyhow::bail!("No exchange rate for {from}/{to}");
        };

        let Some(subunits) = to
            .subunits()
            .or_else(|| self.currencies.subunit_for(to.code().as_str()))
        else {
            anyhow::bail!("Unknown precision for currency {to}");
        };

        let (amount_numerator, amount_denominator) = to_fraction(&parse_decimal(amount)?);
        let numerator = amount_numerator * rate_numerator * subunit_multiplier(subunits);
        let denominator = amount_denominator * rate_denominator;
        if denominator.is_zero() {
            anyhow::bail!("Invalid exchange rate for {from}/{to}");
        }

        let units = div_round(&numerator, &denominator, self.rounding);
        Ok(from_subunits(&units, subunits))
    }
}
