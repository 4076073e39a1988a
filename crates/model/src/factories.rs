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

//! Factories resolving currency codes within named contexts and constructing money values.

use std::sync::Arc;

use indexmap::IndexMap;
use ustr::Ustr;

use crate::{
    currencies::{Currencies, IsoCurrencies},
    error::MoneyError,
    types::{BaseMoney, Currency, Money},
    variants::{Bitcoin, Gaap, MoneyVariant, Standard},
};

/// The context used when none is given.
pub const DEFAULT_CONTEXT: &str = "global";

/// Resolves currency codes against registries keyed by a context name.
#[derive(Clone, Debug)]
pub struct CurrencyFactory {
    contexts: IndexMap<String, Arc<dyn Currencies>>,
}

impl Default for CurrencyFactory {
    /// Creates a new default [`CurrencyFactory`] with the ISO currencies as the
    /// [`DEFAULT_CONTEXT`].
    fn default() -> Self {
        let mut factory = Self::new();
        factory.register_context(DEFAULT_CONTEXT, Arc::new(IsoCurrencies));
        factory
    }
}

impl CurrencyFactory {
    /// Creates a new [`CurrencyFactory`] instance without any context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contexts: IndexMap::new(),
        }
    }

    /// Registers `currencies` under the context `name`, replacing any previous registry.
    pub fn register_context(&mut self, name: &str, currencies: Arc<dyn Currencies>) {
        log::debug!(
            "Registered currency context '{name}' with {} currencies",
            currencies.len()
        );
        self.contexts.insert(name.to_string(), currencies);
    }

    /// Returns the registry of the context `name`, if registered.
    #[must_use]
    pub fn context(&self, name: &str) -> Option<&Arc<dyn Currencies>> {
        self.contexts.get(name)
    }

    /// Returns the names of the registered contexts in registration order.
    pub fn context_names(&self) -> impl Iterator<Item = &str> {
        self.contexts.keys().map(String::as_str)
    }

    /// Creates the [`Currency`] for `code` within `context` ([`DEFAULT_CONTEXT`] if `None`),
    /// carrying the natural precision registered for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the context is unknown or does not hold `code`.
    pub fn create(&self, code: &str, context: Option<&str>) -> Result<Currency, MoneyError> {
        let context = context.unwrap_or(DEFAULT_CONTEXT);
        let subunits = self
            .contexts
            .get(context)
            .and_then(|currencies| currencies.subunit_for(code));

        match subunits {
            Some(subunits) => {
                log::trace!("Resolved currency {code} in context '{context}'");
                Currency::new_checked(code, Some(subunits))
                    .map_err(|e| MoneyError::Validation(e.to_string()))
            }
            None => Err(MoneyError::UnregisteredCurrencyCode {
                code: code.to_string(),
                allowed: self.allowed_currencies(Some(context)),
            }),
        }
    }

    /// Returns the codes allowed within `context` ([`DEFAULT_CONTEXT`] if `None`), in the
    /// registry's order. An unknown context allows none.
    #[must_use]
    pub fn allowed_currencies(&self, context: Option<&str>) -> Vec<Ustr> {
        self.contexts
            .get(context.unwrap_or(DEFAULT_CONTEXT))
            .map(|currencies| currencies.codes())
            .unwrap_or_default()
    }
}

type MoneyConstructor = fn(&str, Currency) -> Result<Box<dyn BaseMoney>, MoneyError>;

fn construct<V: MoneyVariant>(
    amount: &str,
    currency: Currency,
) -> Result<Box<dyn BaseMoney>, MoneyError> {
    Ok(Box::new(Money::<V>::create(amount, currency)?))
}

/// Constructs money values from an amount and a currency code resolved through a
/// [`CurrencyFactory`].
///
/// Variants can be addressed by type or by their registered name.
#[derive(Clone, Debug)]
pub struct MoneyFactory {
    currency_factory: CurrencyFactory,
    constructors: IndexMap<String, MoneyConstructor>,
}

impl MoneyFactory {
    /// Creates a new [`MoneyFactory`] with the built-in variants registered under their
    /// names.
    #[must_use]
    pub fn new(currency_factory: CurrencyFactory) -> Self {
        let mut factory = Self {
            currency_factory,
            constructors: IndexMap::new(),
        };
        factory.register_variant::<Standard>();
        factory.register_variant::<Gaap>();
        factory.register_variant::<Bitcoin>();
        factory
    }

    /// Registers the variant `V` under its name, replacing any variant of the same name.
    pub fn register_variant<V: MoneyVariant>(&mut self) {
        log::debug!("Registered money variant '{}'", V::NAME);
        self.constructors
            .insert(V::NAME.to_string(), construct::<V> as MoneyConstructor);
    }

    /// Returns the names of the registered variants in registration order.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Returns the underlying currency factory.
    #[must_use]
    pub fn currency_factory(&self) -> &CurrencyFactory {
        &self.currency_factory
    }

    /// Creates a money value of variant `V` from `amount` and the currency `code` resolved
    /// within `context`.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency cannot be resolved or the value is invalid for `V`.
    pub fn create<V: MoneyVariant>(
        &self,
        amount: &str,
        code: &str,
        context: Option<&str>,
    ) -> Result<Money<V>, MoneyError> {
        let currency = self.currency_factory.create(code, context)?;
        Money::<V>::create(amount, currency)
    }

    /// Creates a money value of the variant registered as `variant`.
    ///
    /// # Errors
    ///
    /// Returns an error if `variant` is not registered, the currency cannot be resolved,
    /// or the value is invalid for the variant.
    pub fn create_by_name(
        &self,
        amount: &str,
        code: &str,
        variant: &str,
        context: Option<&str>,
    ) -> Result<Box<dyn BaseMoney>, MoneyError> {
        let Some(constructor) = self.constructors.get(variant) else {
            return Err(MoneyError::InvalidVariantType(variant.to_string()));
        };
        let currency = self.currency_factory.create(code, context)?;
        constructor(amount, currency)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{
        stubs::*,
        variants::{GaapMoney, StandardMoney},
    };

    #[rstest]
    fn test_create_in_default_context() {
        let currency = CurrencyFactory::default().create("JPY", None).unwrap();
        assert_eq!(currency.code().as_str(), "JPY");
        assert_eq!(currency.subunits(), Some(0));
    }

    #[rstest]
    fn test_create_in_named_context(currency_factory: CurrencyFactory) {
        let currency = currency_factory.create("USD", Some("eurozone")).unwrap();
        assert_eq!(currency, Currency::USD());
        assert_eq!(currency.subunits(), Some(2));
    }

    #[rstest]
    fn test_create_unregistered_code(currency_factory: CurrencyFactory) {
        let error = currency_factory.create("GBP", Some("eurozone")).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot create Currency with code: GBP. Allowed codes are: EUR, USD"
        );
    }

    #[rstest]
    #[case(Some("empty"))]
    #[case(Some("missing"))]
    fn test_create_in_context_without_codes(
        currency_factory: CurrencyFactory,
        #[case] context: Option<&str>,
    ) {
        let error = currency_factory.create("EUR", context).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot create Currency with code: EUR. Allowed codes are: none"
        );
    }

    #[rstest]
    fn test_allowed_currencies_keeps_order(currency_factory: CurrencyFactory) {
        assert_eq!(
            currency_factory.allowed_currencies(Some("eurozone")),
            vec![Ustr::from("EUR"), Ustr::from("USD")]
        );
        assert!(currency_factory.allowed_currencies(Some("empty")).is_empty());
        assert_eq!(
            currency_factory.context_names().collect::<Vec<_>>(),
            vec!["global", "eurozone", "empty"]
        );
    }

    #[rstest]
    fn test_money_factory_typed_create(money_factory: MoneyFactory) {
        let money: GaapMoney = money_factory.create("1.25", "EUR", None).unwrap();
        assert_eq!(money.get_amount(), "1.25");
        assert_eq!(money.raw(), &num_bigint::BigInt::from(12_500));
    }

    #[rstest]
    fn test_money_factory_typed_create_unregistered(money_factory: MoneyFactory) {
        let result = money_factory.create::<Standard>("1.00", "GBP", Some("eurozone"));
        assert!(matches!(
            result,
            Err(MoneyError::UnregisteredCurrencyCode { .. })
        ));
    }

    #[rstest]
    #[case("Money", "10.00", "EUR", 2)]
    #[case("GaapMoney", "10.00", "EUR", 4)]
    #[case("Bitcoin", "0.00010000", "XBT", 8)]
    fn test_money_factory_create_by_name(
        #[case] variant: &str,
        #[case] amount: &str,
        #[case] code: &str,
        #[case] class_subunits: u8,
    ) {
        let mut currency_factory = CurrencyFactory::default();
        currency_factory.register_context(
            "global",
            Arc::new(crate::currencies::AggregateCurrencies::new(vec![
                Arc::new(IsoCurrencies),
                Arc::new(crate::currencies::BitcoinCurrencies),
            ])),
        );
        let factory = MoneyFactory::new(currency_factory);

        let money = factory.create_by_name(amount, code, variant, None).unwrap();

        assert_eq!(money.name(), variant);
        assert_eq!(money.class_subunits(), class_subunits);
        assert_eq!(money.amount(), amount);
        assert_eq!(money.currency().code().as_str(), code);
    }

    #[rstest]
    fn test_money_factory_downcast(money_factory: MoneyFactory) {
        let money = money_factory
            .create_by_name("5.00", "USD", "Money", Some("eurozone"))
            .unwrap();
        let standard = money.as_any().downcast_ref::<StandardMoney>().unwrap();
        assert_eq!(standard.get_amount(), "5.00");
    }

    #[rstest]
    fn test_money_factory_unknown_variant(money_factory: MoneyFactory) {
        let error = money_factory
            .create_by_name("1.00", "EUR", "Quantity", None)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot create object of Money class: Quantity, the class must extend: BaseMoney"
        );
    }

    #[rstest]
    fn test_money_factory_register_custom_variant(mut money_factory: MoneyFactory) {
        money_factory.register_variant::<Extended>();
        let money = money_factory
            .create_by_name("3.00", "EUR", "ExtendedMoney", None)
            .unwrap();
        assert_eq!(money.to_string(), "3.00 EUR");
        assert_eq!(
            money_factory.variant_names().collect::<Vec<_>>(),
            vec!["Money", "GaapMoney", "Bitcoin", "ExtendedMoney"]
        );
    }

    #[rstest]
    fn test_money_factory_variant_rejects_currency(money_factory: MoneyFactory) {
        let result = money_factory.create::<Bitcoin>("1.00", "EUR", None);
        assert!(matches!(result, Err(MoneyError::CurrencyNotAllowed { .. })));
    }
}
