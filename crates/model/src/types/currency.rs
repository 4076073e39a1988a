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

//! Represents a medium of exchange identified by its currency code.
//!
//! A currency may optionally carry its natural precision (the number of subunits it is
//! denominated in). Equality and hashing consider the code only.

use std::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize, Serializer};
use tally_core::{
    correctness::{FAILED, check_in_range_inclusive_u8, check_no_whitespace, check_valid_string},
    decimal::MAX_SUBUNITS,
    serialization::Serializable,
};
use ustr::Ustr;

use crate::currencies::Currencies;

/// Represents a medium of exchange identified by its currency code.
#[derive(Clone, Copy, Eq)]
pub struct Currency {
    code: Ustr,
    subunits: Option<u8>,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` is not a valid string or contains whitespace.
    /// - `subunits` is outside the representable range [0, `MAX_SUBUNITS`].
    pub fn new_checked<T: AsRef<str>>(code: T, subunits: Option<u8>) -> anyhow::Result<Self> {
        let code = code.as_ref();
        check_valid_string(code, "code")?;
        check_no_whitespace(code, "code")?;
        if let Some(subunits) = subunits {
            check_in_range_inclusive_u8(subunits, 0, MAX_SUBUNITS, "subunits")?;
        }
        Ok(Self {
            code: Ustr::from(code),
            subunits,
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Currency::new_checked`] for more details.
    pub fn new<T: AsRef<str>>(code: T, subunits: Option<u8>) -> Self {
        Self::new_checked(code, subunits).expect(FAILED)
    }

    /// Returns a copy of this currency carrying the given natural precision.
    ///
    /// # Panics
    ///
    /// Panics if `subunits` exceeds `MAX_SUBUNITS`.
    #[must_use]
    pub fn with_subunits(self, subunits: u8) -> Self {
        check_in_range_inclusive_u8(subunits, 0, MAX_SUBUNITS, "subunits").expect(FAILED);
        Self {
            code: self.code,
            subunits: Some(subunits),
        }
    }

    /// Returns the currency code.
    #[must_use]
    pub fn code(&self) -> Ustr {
        self.code
    }

    /// Returns the natural precision carried by this currency, if any.
    #[must_use]
    pub fn subunits(&self) -> Option<u8> {
        self.subunits
    }

    /// Returns whether this currency has the same code as `other`.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns whether this currency is contained in the given `currencies`.
    #[must_use]
    pub fn is_available_within(&self, currencies: &dyn Currencies) -> bool {
        currencies.contains(self.code.as_str())
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.subunits {
            Some(subunits) => write!(
                f,
                "{}(code='{}', subunits={subunits})",
                stringify!(Currency),
                self.code
            ),
            None => write!(f, "{}(code='{}')", stringify!(Currency), self.code),
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::new_checked(s, None)
    }
}

impl From<&str> for Currency {
    fn from(value: &str) -> Self {
        Self::new(value, None)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.code.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&code).map_err(serde::de::Error::custom)
    }
}

impl Serializable for Currency {}
