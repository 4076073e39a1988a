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

//! Money variants fixing the class subunit ceiling and allowed currencies.
//!
//! A variant is a zero-sized marker type implementing [`MoneyVariant`]. The money value
//! [`Money<V>`](crate::types::Money) is generic over it, so every variant shares one
//! construction and arithmetic implementation while carrying its own policy hooks.

use std::fmt::Debug;

use crate::{
    currencies::{BitcoinCurrencies, Currencies, IsoCurrencies},
    error::MoneyError,
    types::Money,
};

/// The policy hooks of a money variant.
///
/// Every sign policy defaults to `false` and [`MoneyVariant::validate`] accepts every
/// value, so a variant only overrides the rules it enforces.
pub trait MoneyVariant: Debug + Send + Sync + Sized + 'static {
    /// The human-readable name used in error messages.
    const NAME: &'static str;

    /// The maximum number of subunits this variant accepts.
    const CLASS_SUBUNITS: u8;

    /// Amounts must be strictly positive.
    const AMOUNT_MUST_BE_GREATER_THAN_ZERO: bool = false;

    /// Amounts must not be negative.
    const AMOUNT_MUST_BE_ZERO_OR_GREATER: bool = false;

    /// Amounts must not be positive.
    const AMOUNT_MUST_BE_ZERO_OR_LESS: bool = false;

    /// Amounts must be strictly negative.
    const AMOUNT_MUST_BE_LESS_THAN_ZERO: bool = false;

    /// The registry type of the allowed currencies.
    type Registry: Currencies;

    /// Returns the currencies this variant accepts, with their natural precision.
    fn allowed_currencies() -> Self::Registry;

    /// Applies variant-specific validation to a newly constructed value.
    ///
    /// # Errors
    ///
    /// Returns an error if `money` breaks a domain rule of this variant.
    fn validate(money: &Money<Self>) -> Result<(), MoneyError> {
        let _ = money;
        Ok(())
    }
}

/// General purpose money with 2 subunits over the ISO currencies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Standard;

impl MoneyVariant for Standard {
    const NAME: &'static str = "Money";
    const CLASS_SUBUNITS: u8 = 2;
    type Registry = IsoCurrencies;

    fn allowed_currencies() -> Self::Registry {
        IsoCurrencies
    }
}

/// Accounting money with 4 subunits over the ISO currencies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Gaap;

impl MoneyVariant for Gaap {
    const NAME: &'static str = "GaapMoney";
    const CLASS_SUBUNITS: u8 = 4;
    type Registry = IsoCurrencies;

    fn allowed_currencies() -> Self::Registry {
        IsoCurrencies
    }
}

/// Bitcoin money with 8 subunits, accepting `XBT` only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitcoin;

impl MoneyVariant for Bitcoin {
    const NAME: &'static str = "Bitcoin";
    const CLASS_SUBUNITS: u8 = 8;
    type Registry = BitcoinCurrencies;

    fn allowed_currencies() -> Self::Registry {
        BitcoinCurrencies
    }
}

/// General purpose money with 2 subunits.
pub type StandardMoney = Money<Standard>;

/// Accounting money with 4 subunits.
pub type GaapMoney = Money<Gaap>;

/// Bitcoin money with 8 subunits.
pub type BitcoinMoney = Money<Bitcoin>;
