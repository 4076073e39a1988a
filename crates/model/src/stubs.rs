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

//! Money variant mocks and fixtures to facilitate testing.

use std::sync::Arc;

use rstest::fixture;

use crate::{
    currencies::{CurrencyList, IsoCurrencies},
    error::MoneyError,
    factories::{CurrencyFactory, MoneyFactory},
    types::{Currency, Money},
    variants::{MoneyVariant, StandardMoney},
};

macro_rules! policy_variant {
    ($(#[$doc:meta])* $name:ident, $policy:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl MoneyVariant for $name {
            const NAME: &'static str = "Money";
            const CLASS_SUBUNITS: u8 = 2;
            const $policy: bool = true;
            type Registry = IsoCurrencies;

            fn allowed_currencies() -> Self::Registry {
                IsoCurrencies
            }
        }
    };
}

policy_variant!(
    /// Money whose amounts must be strictly positive.
    GreaterThanZeroOnly,
    AMOUNT_MUST_BE_GREATER_THAN_ZERO
);
policy_variant!(
    /// Money whose amounts must not be negative.
    ZeroOrGreaterOnly,
    AMOUNT_MUST_BE_ZERO_OR_GREATER
);
policy_variant!(
    /// Money whose amounts must not be positive.
    ZeroOrLessOnly,
    AMOUNT_MUST_BE_ZERO_OR_LESS
);
policy_variant!(
    /// Money whose amounts must be strictly negative.
    LessThanZeroOnly,
    AMOUNT_MUST_BE_LESS_THAN_ZERO
);

/// Money limited to at most 100.00 EUR.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CheckAmount;

impl MoneyVariant for CheckAmount {
    const NAME: &'static str = "Money";
    const CLASS_SUBUNITS: u8 = 2;
    type Registry = IsoCurrencies;

    fn allowed_currencies() -> Self::Registry {
        IsoCurrencies
    }

    fn validate(money: &Money<Self>) -> Result<(), MoneyError> {
        let limit = StandardMoney::create("100.00", Currency::EUR())?;
        if money.less_than_or_equal(&limit)? {
            return Ok(());
        }
        Err(MoneyError::Validation(
            "Money amount is greater than 100.00 EUR".to_string(),
        ))
    }
}

/// Money with no subunits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ZeroSubunit;

impl MoneyVariant for ZeroSubunit {
    const NAME: &'static str = "Money";
    const CLASS_SUBUNITS: u8 = 0;
    type Registry = IsoCurrencies;

    fn allowed_currencies() -> Self::Registry {
        IsoCurrencies
    }
}

/// Money with 2 subunits whose only allowed currency has 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InvalidSubunitCurrency;

impl MoneyVariant for InvalidSubunitCurrency {
    const NAME: &'static str = "Money";
    const CLASS_SUBUNITS: u8 = 2;
    type Registry = CurrencyList;

    fn allowed_currencies() -> Self::Registry {
        CurrencyList::new([("OMR", 3)])
    }
}

/// Money with 2 subunits under its own name, interchangeable with [`StandardMoney`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extended;

impl MoneyVariant for Extended {
    const NAME: &'static str = "ExtendedMoney";
    const CLASS_SUBUNITS: u8 = 2;
    type Registry = IsoCurrencies;

    fn allowed_currencies() -> Self::Registry {
        IsoCurrencies
    }
}

#[fixture]
pub fn eur() -> Currency {
    Currency::EUR()
}

#[fixture]
pub fn usd() -> Currency {
    Currency::USD()
}

#[fixture]
pub fn xbt() -> Currency {
    Currency::XBT()
}

#[fixture]
pub fn ten_eur(eur: Currency) -> StandardMoney {
    StandardMoney::create("10.00", eur).unwrap()
}

#[fixture]
pub fn ten_usd(usd: Currency) -> StandardMoney {
    StandardMoney::create("10.00", usd).unwrap()
}

#[fixture]
pub fn currency_factory() -> CurrencyFactory {
    let mut factory = CurrencyFactory::default();
    factory.register_context(
        "eurozone",
        Arc::new(CurrencyList::new([("EUR", 2), ("USD", 2)])),
    );
    factory.register_context("empty", Arc::new(CurrencyList::default()));
    factory
}

#[fixture]
pub fn money_factory(currency_factory: CurrencyFactory) -> MoneyFactory {
    MoneyFactory::new(currency_factory)
}
