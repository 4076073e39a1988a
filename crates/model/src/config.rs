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

//! Configuration for building a [`CurrencyFactory`] from TOML or JSON.
//!
//! ```toml
//! [contexts.global]
//! type = "iso"
//!
//! [contexts.eurozone]
//! type = "list"
//! currencies = { EUR = 2, USD = 2 }
//! ```

use std::{path::Path, sync::Arc};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    currencies::{BitcoinCurrencies, Currencies, CurrencyList, IsoCurrencies},
    factories::{CurrencyFactory, DEFAULT_CONTEXT},
};

/// The currencies making up one context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurrencySetConfig {
    /// The ISO 4217 currencies.
    Iso,
    /// The Bitcoin currency only.
    Bitcoin,
    /// An explicit list of currency codes with their subunits.
    List { currencies: IndexMap<String, u8> },
}

impl CurrencySetConfig {
    /// Builds the registry described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a listed code or subunit count is invalid.
    pub fn build(&self) -> anyhow::Result<Arc<dyn Currencies>> {
        Ok(match self {
            Self::Iso => Arc::new(IsoCurrencies),
            Self::Bitcoin => Arc::new(BitcoinCurrencies),
            Self::List { currencies } => Arc::new(CurrencyList::new_checked(
                currencies
                    .iter()
                    .map(|(code, subunits)| (code.as_str(), *subunits)),
            )?),
        })
    }
}

/// Configuration for `CurrencyFactory` instances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFactoryConfig {
    /// The currency contexts by name, in registration order.
    pub contexts: IndexMap<String, CurrencySetConfig>,
}

impl Default for CurrencyFactoryConfig {
    /// Creates a new default [`CurrencyFactoryConfig`] instance.
    fn default() -> Self {
        let mut contexts = IndexMap::new();
        contexts.insert(DEFAULT_CONTEXT.to_string(), CurrencySetConfig::Iso);
        Self { contexts }
    }
}

impl CurrencyFactoryConfig {
    /// Parses a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is not a valid configuration.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is not a valid configuration.
    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads a configuration file, parsed as JSON for a `.json` extension and as TOML
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        log::info!(
            "Loaded currency config from {} with {} contexts",
            path.display(),
            config.contexts.len()
        );
        Ok(config)
    }
}

impl CurrencyFactory {
    /// Creates a new [`CurrencyFactory`] with the contexts of `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a context's currency set is invalid.
    pub fn from_config(config: &CurrencyFactoryConfig) -> anyhow::Result<Self> {
        let mut factory = Self::new();
        for (name, set) in &config.contexts {
            factory.register_context(name, set.build()?);
        }
        Ok(factory)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;
    use ustr::Ustr;

    use super::*;

    const TOML_CONFIG: &str = r#"
[contexts.global]
type = "iso"

[contexts.crypto]
type = "bitcoin"

[contexts.eurozone]
type = "list"
currencies = { EUR = 2, USD = 2 }
"#;

    #[rstest]
    fn test_default_config() {
        let config = CurrencyFactoryConfig::default();
        assert_eq!(config.contexts.len(), 1);
        assert_eq!(config.contexts["global"], CurrencySetConfig::Iso);
    }

    #[rstest]
    fn test_empty_toml_uses_default() {
        let config = CurrencyFactoryConfig::from_toml_str("").unwrap();
        assert_eq!(config, CurrencyFactoryConfig::default());
    }

    #[rstest]
    fn test_from_toml_str() {
        let config = CurrencyFactoryConfig::from_toml_str(TOML_CONFIG).unwrap();
        let names: Vec<&str> = config.contexts.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["global", "crypto", "eurozone"]);
        assert_eq!(config.contexts["crypto"], CurrencySetConfig::Bitcoin);
    }

    #[rstest]
    fn test_from_json_str() {
        let json = r#"{"contexts": {"shop": {"type": "list", "currencies": {"JPY": 0}}}}"#;
        let config = CurrencyFactoryConfig::from_json_str(json).unwrap();
        let factory = CurrencyFactory::from_config(&config).unwrap();
        let currency = factory.create("JPY", Some("shop")).unwrap();
        assert_eq!(currency.subunits(), Some(0));
    }

    #[rstest]
    #[case(r#"{"contexts": {"shop": {"type": "fiat"}}}"#)]
    #[case(r#"{"contexts": {"shop": {"type": "list"}}}"#)]
    #[case("not json")]
    fn test_from_json_str_invalid(#[case] json: &str) {
        assert!(CurrencyFactoryConfig::from_json_str(json).is_err());
    }

    #[rstest]
    fn test_from_config_builds_contexts() {
        let config = CurrencyFactoryConfig::from_toml_str(TOML_CONFIG).unwrap();
        let factory = CurrencyFactory::from_config(&config).unwrap();

        assert_eq!(factory.create("XBT", Some("crypto")).unwrap().subunits(), Some(8));
        assert_eq!(
            factory.allowed_currencies(Some("eurozone")),
            vec![Ustr::from("EUR"), Ustr::from("USD")]
        );
        assert!(factory.create("EUR", Some("crypto")).is_err());
    }

    #[rstest]
    fn test_from_config_invalid_subunits() {
        let json = r#"{"contexts": {"shop": {"type": "list", "currencies": {"EUR": 19}}}}"#;
        let config = CurrencyFactoryConfig::from_json_str(json).unwrap();
        assert!(CurrencyFactory::from_config(&config).is_err());
    }

    #[rstest]
    #[case("toml", TOML_CONFIG)]
    #[case("json", r#"{"contexts": {"crypto": {"type": "bitcoin"}}}"#)]
    fn test_from_file(#[case] extension: &str, #[case] content: &str) {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{extension}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let config = CurrencyFactoryConfig::from_file(file.path()).unwrap();

        assert_eq!(config.contexts["crypto"], CurrencySetConfig::Bitcoin);
    }

    #[rstest]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CurrencyFactoryConfig::from_file(dir.path().join("missing.toml")).is_err());
    }
}
