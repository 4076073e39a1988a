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

//! Currency registries answering which codes are allowed and at what natural precision.
//!
//! Registries are plain values passed to the money variants and factories which need
//! them. There is no process-wide registry; a [`CachedCurrencies`] can be owned by the
//! application when a snapshot of an expensive source is wanted.

use std::{
    fmt::Debug,
    sync::{Arc, OnceLock},
};

use indexmap::IndexMap;
use tally_core::{
    correctness::{FAILED, check_in_range_inclusive_u8, check_no_whitespace, check_valid_string},
    decimal::MAX_SUBUNITS,
};
use ustr::Ustr;

use crate::types::Currency;

/// The natural precision of the single currency in [`BitcoinCurrencies`].
pub const BITCOIN_SUBUNITS: u8 = 8;

/// The code of the single currency in [`BitcoinCurrencies`].
pub const BITCOIN_CODE: &str = "XBT";

/// ISO 4217 currency codes with their minor units, sorted by code.
const ISO_CURRENCIES: &[(&str, u8)] = &[
    ("AED", 2), ("AFN", 2), ("ALL", 2), ("AMD", 2), ("ANG", 2), ("AOA", 2), ("ARS", 2), ("AUD", 2),
    ("AWG", 2), ("AZN", 2), ("BAM", 2), ("BBD", 2), ("BDT", 2), ("BGN", 2), ("BHD", 3), ("BIF", 0),
    ("BMD", 2), ("BND", 2), ("BOB", 2), ("BOV", 2), ("BRL", 2), ("BSD", 2), ("BTN", 2), ("BWP", 2),
    ("BYN", 2), ("BZD", 2), ("CAD", 2), ("CDF", 2), ("CHE", 2), ("CHF", 2), ("CHW", 2), ("CLF", 4),
    ("CLP", 0), ("CNY", 2), ("COP", 2), ("COU", 2), ("CRC", 2), ("CUC", 2), ("CUP", 2), ("CVE", 2),
    ("CZK", 2), ("DJF", 0), ("DKK", 2), ("DOP", 2), ("DZD", 2), ("EGP", 2), ("ERN", 2), ("ETB", 2),
    ("EUR", 2), ("FJD", 2), ("FKP", 2), ("GBP", 2), ("GEL", 2), ("GHS", 2), ("GIP", 2), ("GMD", 2),
    ("GNF", 0), ("GTQ", 2), ("GYD", 2), ("HKD", 2), ("HNL", 2), ("HTG", 2), ("HUF", 2), ("IDR", 2),
    ("ILS", 2), ("INR", 2), ("IQD", 3), ("IRR", 2), ("ISK", 0), ("JMD", 2), ("JOD", 3), ("JPY", 0),
    ("KES", 2), ("KGS", 2), ("KHR", 2), ("KMF", 0), ("KPW", 2), ("KRW", 0), ("KWD", 3), ("KYD", 2),
    ("KZT", 2), ("LAK", 2), ("LBP", 2), ("LKR", 2), ("LRD", 2), ("LSL", 2), ("LYD", 3), ("MAD", 2),
    ("MDL", 2), ("MGA", 2), ("MKD", 2), ("MMK", 2), ("MNT", 2), ("MOP", 2), ("MRU", 2), ("MUR", 2),
    ("MVR", 2), ("MWK", 2), ("MXN", 2), ("MXV", 2), ("MYR", 2), ("MZN", 2), ("NAD", 2), ("NGN", 2),
    ("NIO", 2), ("NOK", 2), ("NPR", 2), ("NZD", 2), ("OMR", 3), ("PAB", 2), ("PEN", 2), ("PGK", 2),
    ("PHP", 2), ("PKR", 2), ("PLN", 2), ("PYG", 0), ("QAR", 2), ("RON", 2), ("RSD", 2), ("RUB", 2),
    ("RWF", 0), ("SAR", 2), ("SBD", 2), ("SCR", 2), ("SDG", 2), ("SEK", 2), ("SGD", 2), ("SHP", 2),
    ("SLE", 2), ("SOS", 2), ("SRD", 2), ("SSP", 2), ("STN", 2), ("SVC", 2), ("SYP", 2), ("SZL", 2),
    ("THB", 2), ("TJS", 2), ("TMT", 2), ("TND", 3), ("TOP", 2), ("TRY", 2), ("TTD", 2), ("TWD", 2),
    ("TZS", 2), ("UAH", 2), ("UGX", 0), ("USD", 2), ("USN", 2), ("UYI", 0), ("UYU", 2), ("UYW", 4),
    ("UZS", 2), ("VED", 2), ("VES", 2), ("VND", 0), ("VUV", 0), ("WST", 2), ("XAF", 0), ("XCD", 2),
    ("XOF", 0), ("XPF", 0), ("YER", 2), ("ZAR", 2), ("ZMW", 2), ("ZWL", 2),
];

// Codes never interned cannot be keys of any registry map.
fn lookup(entries: &IndexMap<Ustr, u8>, code: &str) -> Option<u8> {
    Ustr::from_existing(code).and_then(|code| entries.get(&code).copied())
}

/// Provides the set of allowed currency codes and their natural precision.
pub trait Currencies: Debug + Send + Sync {
    /// Returns whether the registry contains the currency `code`.
    fn contains(&self, code: &str) -> bool {
        self.subunit_for(code).is_some()
    }

    /// Returns the natural precision for the currency `code`, if registered.
    fn subunit_for(&self, code: &str) -> Option<u8>;

    /// Returns an iterator over all `(code, subunits)` entries in registry order.
    fn iter(&self) -> Box<dyn Iterator<Item = (Ustr, u8)> + '_>;

    /// Returns all registered codes in registry order.
    fn codes(&self) -> Vec<Ustr> {
        self.iter().map(|(code, _)| code).collect()
    }

    /// Returns the number of registered currencies.
    fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns whether the registry is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Currencies + ?Sized> Currencies for Arc<T> {
    fn contains(&self, code: &str) -> bool {
        (**self).contains(code)
    }

    fn subunit_for(&self, code: &str) -> Option<u8> {
        (**self).subunit_for(code)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (Ustr, u8)> + '_> {
        (**self).iter()
    }
}

/// The ISO 4217 currencies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsoCurrencies;

impl Currencies for IsoCurrencies {
    fn subunit_for(&self, code: &str) -> Option<u8> {
        ISO_CURRENCIES
            .binary_search_by(|(c, _)| c.cmp(&code))
            .ok()
            .map(|index| ISO_CURRENCIES[index].1)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (Ustr, u8)> + '_> {
        Box::new(
            ISO_CURRENCIES
                .iter()
                .map(|(code, subunits)| (Ustr::from(code), *subunits)),
        )
    }

    fn len(&self) -> usize {
        ISO_CURRENCIES.len()
    }
}

/// The Bitcoin currency `XBT` with 8 subunits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitcoinCurrencies;

impl Currencies for BitcoinCurrencies {
    fn subunit_for(&self, code: &str) -> Option<u8> {
        (code == BITCOIN_CODE).then_some(BITCOIN_SUBUNITS)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (Ustr, u8)> + '_> {
        Box::new(std::iter::once((Ustr::from(BITCOIN_CODE), BITCOIN_SUBUNITS)))
    }
}

/// A caller-supplied list of currencies, kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrencyList {
    entries: IndexMap<Ustr, u8>,
}

impl CurrencyList {
    /// Creates a new [`CurrencyList`] from `(code, subunits)` entries with correctness checking.
    ///
    /// A repeated code keeps its first position and takes the last subunits given.
    ///
    /// # Errors
    ///
    /// Returns an error if a code is invalid or subunits exceed `MAX_SUBUNITS`.
    pub fn new_checked<I, T>(entries: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (T, u8)>,
        T: AsRef<str>,
    {
        let mut map = IndexMap::new();
        for (code, subunits) in entries {
            let code = code.as_ref();
            check_valid_string(code, "code")?;
            check_no_whitespace(code, "code")?;
            check_in_range_inclusive_u8(subunits, 0, MAX_SUBUNITS, "subunits")?;
            map.insert(Ustr::from(code), subunits);
        }
        Ok(Self { entries: map })
    }

    /// Creates a new [`CurrencyList`] from `(code, subunits)` entries.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`CurrencyList::new_checked`] for more details.
    pub fn new<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, u8)>,
        T: AsRef<str>,
    {
        Self::new_checked(entries).expect(FAILED)
    }

    /// Creates a new [`CurrencyList`] holding the given `codes` taken from `source`.
    ///
    /// Codes missing from `source` are skipped.
    #[must_use]
    pub fn filtered<T: AsRef<str>>(source: &dyn Currencies, codes: &[T]) -> Self {
        let entries = codes
            .iter()
            .filter_map(|code| {
                let code = code.as_ref();
                source
                    .subunit_for(code)
                    .map(|subunits| (Ustr::from(code), subunits))
            })
            .collect();
        Self { entries }
    }

    /// Returns the [`Currency`] for `code` carrying its natural precision, if registered.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Currency> {
        let code = Ustr::from_existing(code)?;
        self.entries
            .get(&code)
            .map(|subunits| Currency::new(code, Some(*subunits)))
    }
}

impl Currencies for CurrencyList {
    fn subunit_for(&self, code: &str) -> Option<u8> {
        lookup(&self.entries, code)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (Ustr, u8)> + '_> {
        Box::new(self.entries.iter().map(|(code, subunits)| (*code, *subunits)))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The union of several registries; the first registry holding a code wins.
#[derive(Clone, Debug, Default)]
pub struct AggregateCurrencies {
    sources: Vec<Arc<dyn Currencies>>,
}

impl AggregateCurrencies {
    /// Creates a new [`AggregateCurrencies`] instance.
    #[must_use]
    pub fn new(sources: Vec<Arc<dyn Currencies>>) -> Self {
        Self { sources }
    }
}

impl Currencies for AggregateCurrencies {
    fn subunit_for(&self, code: &str) -> Option<u8> {
        self.sources
            .iter()
            .find_map(|source| source.subunit_for(code))
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (Ustr, u8)> + '_> {
        let mut merged: IndexMap<Ustr, u8> = IndexMap::new();
        for (code, subunits) in self.sources.iter().flat_map(|source| source.iter()) {
            merged.entry(code).or_insert(subunits);
        }
        Box::new(merged.into_iter())
    }
}

/// An externally owned, lazily computed snapshot of another registry.
///
/// The snapshot is taken on first access and never refreshed.
#[derive(Debug)]
pub struct CachedCurrencies {
    source: Arc<dyn Currencies>,
    snapshot: OnceLock<IndexMap<Ustr, u8>>,
}

impl CachedCurrencies {
    /// Creates a new [`CachedCurrencies`] wrapping `source`.
    #[must_use]
    pub fn new(source: Arc<dyn Currencies>) -> Self {
        Self {
            source,
            snapshot: OnceLock::new(),
        }
    }

    /// Returns whether the snapshot has been taken.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.snapshot.get().is_some()
    }

    fn snapshot(&self) -> &IndexMap<Ustr, u8> {
        self.snapshot.get_or_init(|| {
            let snapshot: IndexMap<Ustr, u8> = self.source.iter().collect();
            log::debug!("Cached {} currencies", snapshot.len());
            snapshot
        })
    }
}

impl Currencies for CachedCurrencies {
    fn subunit_for(&self, code: &str) -> Option<u8> {
        lookup(self.snapshot(), code)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (Ustr, u8)> + '_> {
        Box::new(self.snapshot().iter().map(|(code, subunits)| (*code, *subunits)))
    }

    fn len(&self) -> usize {
        self.snapshot().len()
    }
}

static EUR_LOCK: OnceLock<Currency> = OnceLock::new();
static GBP_LOCK: OnceLock<Currency> = OnceLock::new();
static JPY_LOCK: OnceLock<Currency> = OnceLock::new();
static USD_LOCK: OnceLock<Currency> = OnceLock::new();
static XBT_LOCK: OnceLock<Currency> = OnceLock::new();

#[allow(non_snake_case)]
impl Currency {
    #[must_use]
    pub fn EUR() -> Self {
        *EUR_LOCK.get_or_init(|| Self::new("EUR", Some(2)))
    }

    #[must_use]
    pub fn GBP() -> Self {
        *GBP_LOCK.get_or_init(|| Self::new("GBP", Some(2)))
    }

    #[must_use]
    pub fn JPY() -> Self {
        *JPY_LOCK.get_or_init(|| Self::new("JPY", Some(0)))
    }

    #[must_use]
    pub fn USD() -> Self {
        *USD_LOCK.get_or_init(|| Self::new("USD", Some(2)))
    }

    #[must_use]
    pub fn XBT() -> Self {
        *XBT_LOCK.get_or_init(|| Self::new(BITCOIN_CODE, Some(BITCOIN_SUBUNITS)))
    }
}
