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

//! Column types mapping money amounts and currency codes to database columns.
//!
//! Money amounts are stored as exact decimals at the class precision of their variant,
//! while the domain side exchanges them as integer subunit strings.

use std::{fmt::Debug, sync::Arc};

use indexmap::IndexMap;
use tally_core::decimal::{from_subunits_str, to_subunits_str};
use tally_model::{
    MoneyVariant,
    variants::{Bitcoin, Gaap, Standard},
};

use crate::{
    error::PersistenceError,
    platform::{ColumnOptions, SqlPlatform},
};

/// A database column type with its conversions.
///
/// `None` stands for `NULL` and passes through both conversions unchanged.
pub trait ColumnType: Debug + Send + Sync {
    /// Returns the name the type is registered under.
    fn name(&self) -> &'static str;

    /// Returns the SQL declaration of a column with `options` on `platform`.
    fn sql_declaration(&self, options: &ColumnOptions, platform: &dyn SqlPlatform) -> String;

    /// Converts a stored value into its domain representation.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not valid for this type.
    fn convert_to_domain(&self, value: Option<&str>) -> Result<Option<String>, PersistenceError>;

    /// Converts a domain value into its stored representation.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not valid for this type.
    fn convert_to_database(&self, value: Option<&str>)
    -> Result<Option<String>, PersistenceError>;
}

/// A money amount stored as an exact decimal and exchanged as integer subunits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalMoneyType {
    name: &'static str,
    precision: u8,
    scale: u8,
}

impl DecimalMoneyType {
    /// The `money` type for [`Standard`] money.
    pub const MONEY: Self = Self::for_variant::<Standard>("money", 10);

    /// The `gaap_money` type for [`Gaap`] money.
    pub const GAAP_MONEY: Self = Self::for_variant::<Gaap>("gaap_money", 15);

    /// The `btc_money` type for [`Bitcoin`] money.
    pub const BTC_MONEY: Self = Self::for_variant::<Bitcoin>("btc_money", 16);

    /// Creates a new [`DecimalMoneyType`] storing amounts of the variant `V` with
    /// `precision` total digits, scaled to its class subunits.
    #[must_use]
    pub const fn for_variant<V: MoneyVariant>(name: &'static str, precision: u8) -> Self {
        Self {
            name,
            precision,
            scale: V::CLASS_SUBUNITS,
        }
    }

    /// Returns the total number of stored digits.
    #[must_use]
    pub const fn precision(&self) -> u8 {
        self.precision
    }

    /// Returns the number of stored fractional digits.
    #[must_use]
    pub const fn scale(&self) -> u8 {
        self.scale
    }

    fn invalid(&self, value: &str) -> impl FnOnce(tally_core::DecimalError) -> PersistenceError {
        let column_type = self.name;
        let value = value.to_string();
        move |source| PersistenceError::InvalidValue {
            column_type,
            value,
            source,
        }
    }
}

impl ColumnType for DecimalMoneyType {
    fn name(&self) -> &'static str {
        self.name
    }

    fn sql_declaration(&self, options: &ColumnOptions, platform: &dyn SqlPlatform) -> String {
        let options = options.clone().with_decimal(self.precision, self.scale);
        platform.decimal_declaration(&options)
    }

    // Fractional digits beyond the scale are truncated
    fn convert_to_domain(&self, value: Option<&str>) -> Result<Option<String>, PersistenceError> {
        value
            .map(|value| to_subunits_str(value, self.scale).map_err(self.invalid(value)))
            .transpose()
    }

    fn convert_to_database(
        &self,
        value: Option<&str>,
    ) -> Result<Option<String>, PersistenceError> {
        value
            .map(|value| from_subunits_str(value, self.scale).map_err(self.invalid(value)))
            .transpose()
    }
}

/// A currency code stored as a three character string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurrencyType;

impl CurrencyType {
    pub const NAME: &'static str = "currency";
    pub const LENGTH: u32 = 3;
}

impl ColumnType for CurrencyType {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn sql_declaration(&self, options: &ColumnOptions, platform: &dyn SqlPlatform) -> String {
        platform.varchar_declaration(&options.clone().with_length(Self::LENGTH))
    }

    fn convert_to_domain(&self, value: Option<&str>) -> Result<Option<String>, PersistenceError> {
        Ok(value.map(str::to_string))
    }

    fn convert_to_database(
        &self,
        value: Option<&str>,
    ) -> Result<Option<String>, PersistenceError> {
        Ok(value.map(str::to_string))
    }
}

/// The column types available to a schema, by name.
#[derive(Clone, Debug)]
pub struct ColumnTypeRegistry {
    types: IndexMap<&'static str, Arc<dyn ColumnType>>,
}

impl Default for ColumnTypeRegistry {
    /// Creates a new default [`ColumnTypeRegistry`] holding the money and currency types.
    fn default() -> Self {
        let mut types: IndexMap<&'static str, Arc<dyn ColumnType>> = IndexMap::new();
        for column_type in [
            Arc::new(DecimalMoneyType::MONEY) as Arc<dyn ColumnType>,
            Arc::new(DecimalMoneyType::GAAP_MONEY),
            Arc::new(DecimalMoneyType::BTC_MONEY),
            Arc::new(CurrencyType),
        ] {
            types.insert(column_type.name(), column_type);
        }
        Self { types }
    }
}

impl ColumnTypeRegistry {
    /// Creates a new empty [`ColumnTypeRegistry`] instance.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    /// Registers `column_type` under its name.
    ///
    /// # Errors
    ///
    /// Returns an error if a type with the same name is already registered.
    pub fn register(&mut self, column_type: Arc<dyn ColumnType>) -> Result<(), PersistenceError> {
        let name = column_type.name();
        if self.types.contains_key(name) {
            return Err(PersistenceError::ColumnTypeExists(name.to_string()));
        }
        log::debug!("Registered column type '{name}'");
        self.types.insert(name, column_type);
        Ok(())
    }

    /// Returns the column type registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if no type is registered under `name`.
    pub fn get(&self, name: &str) -> Result<&Arc<dyn ColumnType>, PersistenceError> {
        self.types
            .get(name)
            .ok_or_else(|| PersistenceError::UnknownColumnType(name.to_string()))
    }

    /// Returns whether a type is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns the registered type names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::platform::GenericSqlPlatform;

    #[rstest]
    #[case(DecimalMoneyType::MONEY, "money", 10, 2)]
    #[case(DecimalMoneyType::GAAP_MONEY, "gaap_money", 15, 4)]
    #[case(DecimalMoneyType::BTC_MONEY, "btc_money", 16, 8)]
    fn test_money_types(
        #[case] column_type: DecimalMoneyType,
        #[case] name: &str,
        #[case] precision: u8,
        #[case] scale: u8,
    ) {
        assert_eq!(column_type.name(), name);
        assert_eq!(column_type.precision(), precision);
        assert_eq!(column_type.scale(), scale);
    }

    #[rstest]
    fn test_sql_declaration_fixed_options_win() {
        let options = ColumnOptions {
            scale: Some(1),
            not_null: true,
            ..Default::default()
        };
        assert_eq!(
            DecimalMoneyType::MONEY.sql_declaration(&options, &GenericSqlPlatform),
            "NUMERIC(10, 2) NOT NULL"
        );
        assert_eq!(
            CurrencyType.sql_declaration(&options.with_length(10), &GenericSqlPlatform),
            "VARCHAR(3) NOT NULL"
        );
    }

    #[rstest]
    #[case(DecimalMoneyType::MONEY, "100.12", "10012")]
    #[case(DecimalMoneyType::MONEY, "100.129", "10012")]
    #[case(DecimalMoneyType::MONEY, "-0.5", "-50")]
    #[case(DecimalMoneyType::GAAP_MONEY, "100.1234", "1001234")]
    #[case(DecimalMoneyType::BTC_MONEY, "1", "100000000")]
    fn test_convert_to_domain(
        #[case] column_type: DecimalMoneyType,
        #[case] stored: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(
            column_type.convert_to_domain(Some(stored)).unwrap(),
            Some(expected.to_string())
        );
    }

    #[rstest]
    #[case(DecimalMoneyType::MONEY, "10012", "100.12")]
    #[case(DecimalMoneyType::MONEY, "-5", "-0.05")]
    #[case(DecimalMoneyType::GAAP_MONEY, "1001234", "100.1234")]
    #[case(DecimalMoneyType::BTC_MONEY, "1", "0.00000001")]
    fn test_convert_to_database(
        #[case] column_type: DecimalMoneyType,
        #[case] domain: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(
            column_type.convert_to_database(Some(domain)).unwrap(),
            Some(expected.to_string())
        );
    }

    #[rstest]
    fn test_null_passes_through() {
        let money = DecimalMoneyType::MONEY;
        assert_eq!(money.convert_to_domain(None).unwrap(), None);
        assert_eq!(money.convert_to_database(None).unwrap(), None);
        assert_eq!(CurrencyType.convert_to_domain(None).unwrap(), None);
        assert_eq!(CurrencyType.convert_to_database(None).unwrap(), None);
    }

    #[rstest]
    fn test_invalid_values() {
        let money = DecimalMoneyType::MONEY;
        assert!(matches!(
            money.convert_to_domain(Some("ten")),
            Err(PersistenceError::InvalidValue {
                column_type: "money",
                ..
            })
        ));
        assert!(money.convert_to_database(Some("100.12")).is_err());
    }

    #[rstest]
    fn test_currency_passthrough() {
        assert_eq!(
            CurrencyType.convert_to_database(Some("EUR")).unwrap(),
            Some("EUR".to_string())
        );
        assert_eq!(
            CurrencyType.convert_to_domain(Some("XBT")).unwrap(),
            Some("XBT".to_string())
        );
    }

    #[rstest]
    fn test_registry_defaults() {
        let registry = ColumnTypeRegistry::default();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["money", "gaap_money", "btc_money", "currency"]
        );
        assert_eq!(registry.get("gaap_money").unwrap().name(), "gaap_money");
    }

    #[rstest]
    fn test_registry_unknown_type() {
        let error = ColumnTypeRegistry::default().get("price").unwrap_err();
        assert_eq!(error.to_string(), "Unknown column type: 'price'");
    }

    #[rstest]
    fn test_registry_register() {
        let mut registry = ColumnTypeRegistry::empty();
        registry.register(Arc::new(CurrencyType)).unwrap();
        assert!(registry.contains("currency"));
        assert_eq!(
            registry.register(Arc::new(CurrencyType)).unwrap_err(),
            PersistenceError::ColumnTypeExists("currency".to_string())
        );
    }
}
