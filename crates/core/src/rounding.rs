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

//! Rounding modes for exact integer division.

use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr};

/// The rounding mode applied when an exact quotient is not representable in whole subunits.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    /// Round away from zero.
    #[default]
    Up = 1,
    /// Round toward zero.
    Down = 2,
    /// Round toward positive infinity.
    Ceiling = 3,
    /// Round toward negative infinity.
    Floor = 4,
    /// Round to nearest, ties away from zero.
    HalfUp = 5,
    /// Round to nearest, ties toward zero.
    HalfDown = 6,
    /// Round to nearest, ties to the even neighbor.
    HalfEven = 7,
    /// Round to nearest, ties to the odd neighbor.
    HalfOdd = 8,
    /// Round to nearest, ties toward positive infinity.
    HalfPositiveInfinity = 9,
    /// Round to nearest, ties toward negative infinity.
    HalfNegativeInfinity = 10,
}

impl Serialize for RoundingMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for RoundingMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Divides `numerator` by `denominator` exactly and rounds the quotient to an integer
/// using `mode`.
///
/// # Panics
///
/// Panics if `denominator` is zero.
#[must_use]
pub fn div_round(numerator: &BigInt, denominator: &BigInt, mode: RoundingMode) -> BigInt {
    assert!(!denominator.is_zero(), "division by zero");

    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_zero() {
        return quotient;
    }

    let positive = numerator.is_positive() == denominator.is_positive();
    let away = if positive {
        &quotient + BigInt::one()
    } else {
        &quotient - BigInt::one()
    };

    let twice_remainder = remainder.abs() * 2;
    let divisor = denominator.abs();

    if matches!(
        mode,
        RoundingMode::HalfUp
            | RoundingMode::HalfDown
            | RoundingMode::HalfEven
            | RoundingMode::HalfOdd
            | RoundingMode::HalfPositiveInfinity
            | RoundingMode::HalfNegativeInfinity
    ) {
        if twice_remainder > divisor {
            return away;
        }
        if twice_remainder < divisor {
            return quotient;
        }
    }

    let round_away = match mode {
        RoundingMode::Up | RoundingMode::HalfUp => true,
        RoundingMode::Down | RoundingMode::HalfDown => false,
        RoundingMode::Ceiling | RoundingMode::HalfPositiveInfinity => positive,
        RoundingMode::Floor | RoundingMode::HalfNegativeInfinity => !positive,
        RoundingMode::HalfEven => quotient.is_odd(),
        RoundingMode::HalfOdd => quotient.is_even(),
    };

    if round_away { away } else { quotient }
}
