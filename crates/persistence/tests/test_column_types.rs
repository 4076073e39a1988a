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

use rstest::rstest;
use tally_model::{BaseMoney, Currency, GaapMoney, StandardMoney};
use tally_persistence::{ColumnOptions, ColumnType, ColumnTypeRegistry, GenericSqlPlatform};

#[rstest]
fn test_schema_declarations() {
    let registry = ColumnTypeRegistry::default();
    let declarations: Vec<String> = registry
        .names()
        .map(|name| {
            registry
                .get(name)
                .unwrap()
                .sql_declaration(&ColumnOptions::default(), &GenericSqlPlatform)
        })
        .collect();

    assert_eq!(
        declarations,
        vec!["NUMERIC(10, 2)", "NUMERIC(15, 4)", "NUMERIC(16, 8)", "VARCHAR(3)"]
    );
}

#[rstest]
fn test_store_and_load_standard_money() {
    let registry = ColumnTypeRegistry::default();
    let amount_column = registry.get("money").unwrap();
    let currency_column = registry.get("currency").unwrap();
    let money = StandardMoney::create("-1234.56", Currency::EUR()).unwrap();

    let stored_amount = amount_column
        .convert_to_database(Some(&money.raw().to_string()))
        .unwrap()
        .unwrap();
    let stored_currency = currency_column
        .convert_to_database(Some(money.get_currency().code().as_str()))
        .unwrap()
        .unwrap();
    assert_eq!(stored_amount, "-1234.56");
    assert_eq!(stored_currency, "EUR");

    let loaded_raw = amount_column
        .convert_to_domain(Some(&stored_amount))
        .unwrap()
        .unwrap();
    assert_eq!(loaded_raw, money.raw().to_string());
}

#[rstest]
fn test_store_gaap_money_at_class_precision() {
    let money = GaapMoney::create("1.25", Currency::EUR()).unwrap();
    let registry = ColumnTypeRegistry::default();
    let stored = registry
        .get("gaap_money")
        .unwrap()
        .convert_to_database(Some(&money.raw().to_string()))
        .unwrap();

    assert_eq!(stored.as_deref(), Some("1.2500"));
}
