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

//! Exact base-10 conversion between decimal strings and integer subunits.
//!
//! A *subunit* amount is the decimal amount scaled by `10^subunits` and held as an
//! arbitrary-precision integer, so `"10.00"` at 2 subunits is `1000`. No binary
//! floating point is involved at any step.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
    sync::OnceLock,
};

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};
use regex::Regex;

/// The maximum number of subunits supported by the converter.
pub const MAX_SUBUNITS: u8 = 18;

/// Represents an error when converting between decimal and subunit representations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    /// The value is not a plain base-10 decimal number.
    #[error("Invalid decimal value: '{0}'")]
    InvalidDecimal(String),
    /// The value is not a base-10 integer.
    #[error("Invalid integer value: '{0}'")]
    InvalidInteger(String),
}

fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?[0-9]+(?:\.[0-9]+)?$").expect("valid numeric pattern")
    })
}

fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^-?[0-9]+(?:\.([0-9]+))?$").expect("valid amount pattern")
    })
}

/// Returns the subunit multiplier `10^subunits`.
#[must_use]
pub fn subunit_multiplier(subunits: u8) -> BigInt {
    BigInt::from(10u8).pow(u32::from(subunits))
}

/// Parses a plain decimal string (no exponent, no grouping) into a [`BigDecimal`].
///
/// # Errors
///
/// Returns an error if `value` is not a plain decimal number.
pub fn parse_decimal(value: &str) -> Result<BigDecimal, DecimalError> {
    if !numeric_pattern().is_match(value) {
        return Err(DecimalError::InvalidDecimal(value.to_string()));
    }
    let unsigned = value.strip_prefix('+').unwrap_or(value);
    BigDecimal::from_str(unsigned).map_err(|_| DecimalError::InvalidDecimal(value.to_string()))
}

/// Returns `value` rescaled to `scale` fractional digits as an unscaled integer,
/// truncating any further digits toward zero.
#[must_use]
pub fn rescale_truncated(value: &BigDecimal, scale: u8) -> BigInt {
    let (digits, exponent) = value.as_bigint_and_exponent();
    let target = i64::from(scale);

    if exponent <= target {
        let shift = u32::try_from(target - exponent).unwrap_or(u32::MAX);
        digits * BigInt::from(10u8).pow(shift)
    } else {
        let shift = u32::try_from(exponent - target).unwrap_or(u32::MAX);
        // `BigInt` division truncates toward zero
        digits / BigInt::from(10u8).pow(shift)
    }
}

/// Returns `value` as an exact fraction `(numerator, denominator)` where the
/// denominator is a positive power of ten.
#[must_use]
pub fn to_fraction(value: &BigDecimal) -> (BigInt, BigInt) {
    let (digits, exponent) = value.as_bigint_and_exponent();
    if exponent >= 0 {
        let shift = u32::try_from(exponent).unwrap_or(u32::MAX);
        (digits, BigInt::from(10u8).pow(shift))
    } else {
        let shift = u32::try_from(-exponent).unwrap_or(u32::MAX);
        (digits * BigInt::from(10u8).pow(shift), BigInt::one())
    }
}

/// Converts the decimal `amount` into integer subunits at the given precision.
///
/// Digits beyond `subunits` are truncated toward zero.
///
/// # Errors
///
/// Returns an error if `amount` is not a plain decimal number.
pub fn to_subunits(amount: &str, subunits: u8) -> Result<BigInt, DecimalError> {
    let value = parse_decimal(amount)?;
    Ok(rescale_truncated(&value, subunits))
}

/// Converts the integer subunit amount `raw` into a decimal string with exactly
/// `subunits` fractional digits (no decimal point when `subunits` is zero).
#[must_use]
pub fn from_subunits(raw: &BigInt, subunits: u8) -> String {
    let digits = raw.magnitude().to_string();
    let sign = if raw.sign() == Sign::Minus { "-" } else { "" };

    if subunits == 0 {
        return format!("{sign}{digits}");
    }

    let width = usize::from(subunits) + 1;
    let padded = format!("{digits:0>width$}");
    let (int_part, frac_part) = padded.split_at(padded.len() - usize::from(subunits));
    format!("{sign}{int_part}.{frac_part}")
}

/// String form of [`to_subunits`], returning the integer subunit amount as a string.
///
/// # Errors
///
/// Returns an error if `amount` is not a plain decimal number.
pub fn to_subunits_str(amount: &str, subunits: u8) -> Result<String, DecimalError> {
    to_subunits(amount, subunits).map(|raw| raw.to_string())
}

/// String form of [`from_subunits`], accepting the integer subunit amount as a string.
///
/// # Errors
///
/// Returns an error if `raw` is not a base-10 integer.
pub fn from_subunits_str(raw: &str, subunits: u8) -> Result<String, DecimalError> {
    let value = parse_integer(raw)?;
    Ok(from_subunits(&value, subunits))
}

/// Parses a base-10 integer string into a [`BigInt`].
///
/// # Errors
///
/// Returns an error if `value` is not an optionally signed sequence of digits.
pub fn parse_integer(value: &str) -> Result<BigInt, DecimalError> {
    let unsigned = value.strip_prefix(['-', '+']).unwrap_or(value);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecimalError::InvalidInteger(value.to_string()));
    }
    BigInt::from_str(value).map_err(|_| DecimalError::InvalidInteger(value.to_string()))
}

/// Returns the number of fractional digits of a well-formed amount string, or `None`
/// if `amount` is not of the form `-?\d+(\.\d+)?`.
#[must_use]
pub fn fraction_digits(amount: &str) -> Option<usize> {
    amount_pattern()
        .captures(amount)
        .map(|caps| caps.get(1).map_or(0, |m| m.as_str().len()))
}

/// The textual amount format accepted for a given number of subunits.
///
/// An amount matches when it has an optional leading minus sign, at least one integer
/// digit and, when `subunits` is positive, exactly `subunits` fractional digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AmountFormat {
    subunits: u8,
}

impl AmountFormat {
    /// Creates a new [`AmountFormat`] for the given number of subunits.
    #[must_use]
    pub const fn new(subunits: u8) -> Self {
        Self { subunits }
    }

    /// Returns the number of fractional digits required.
    #[must_use]
    pub const fn subunits(&self) -> u8 {
        self.subunits
    }

    /// Returns whether `amount` matches this format.
    #[must_use]
    pub fn is_match(&self, amount: &str) -> bool {
        match fraction_digits(amount) {
            Some(0) => self.subunits == 0 && !amount.contains('.'),
            Some(n) => n == usize::from(self.subunits),
            None => false,
        }
    }
}

impl Display for AmountFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.subunits == 0 {
            write!(f, r"/^-?\d+$/")
        } else {
            write!(f, r"/^-?\d+\.\d{{{}}}$/", self.subunits)
        }
    }
}

/// Returns whether the subunit amount `raw` is exactly divisible by `10^digits`.
#[must_use]
pub fn is_multiple_of_power_of_ten(raw: &BigInt, digits: u8) -> bool {
    (raw.abs() % subunit_multiplier(digits)).is_zero()
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "1")]
    #[case(2, "100")]
    #[case(8, "100000000")]
    fn test_subunit_multiplier(#[case] subunits: u8, #[case] expected: &str) {
        assert_eq!(subunit_multiplier(subunits).to_string(), expected);
    }

    #[rstest]
    #[case("10.00", 2, "1000")]
    #[case("-10.00", 2, "-1000")]
    #[case("0.01", 2, "1")]
    #[case("-0.01", 2, "-1")]
    #[case("100", 0, "100")]
    #[case("10.12", 4, "101200")]
    #[case("10.129", 2, "1012")] // <-- truncated
    #[case("-10.129", 2, "-1012")] // <-- truncated toward zero
    #[case("100.00000000", 8, "10000000000")]
    #[case("123456789012345678901234567890.12", 2, "12345678901234567890123456789012")]
    fn test_to_subunits(#[case] amount: &str, #[case] subunits: u8, #[case] expected: &str) {
        assert_eq!(to_subunits(amount, subunits).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("1e3")]
    #[case("1,000.00")]
    #[case("10.0.0")]
    #[case(".5")]
    #[case("5.")]
    fn test_to_subunits_with_invalid_amount(#[case] amount: &str) {
        assert_eq!(
            to_subunits(amount, 2),
            Err(DecimalError::InvalidDecimal(amount.to_string()))
        );
    }

    #[rstest]
    #[case("1000", 2, "10.00")]
    #[case("-1000", 2, "-10.00")]
    #[case("1", 2, "0.01")]
    #[case("-1", 2, "-0.01")]
    #[case("0", 2, "0.00")]
    #[case("0", 0, "0")]
    #[case("100", 0, "100")]
    #[case("-5", 8, "-0.00000005")]
    #[case("12345678901234567890123456789012", 2, "123456789012345678901234567890.12")]
    fn test_from_subunits(#[case] raw: &str, #[case] subunits: u8, #[case] expected: &str) {
        assert_eq!(from_subunits_str(raw, subunits).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("1.5")]
    #[case("1 000")]
    fn test_from_subunits_str_with_invalid_integer(#[case] raw: &str) {
        assert_eq!(
            from_subunits_str(raw, 2),
            Err(DecimalError::InvalidInteger(raw.to_string()))
        );
    }

    #[rstest]
    fn test_to_subunits_str() {
        assert_eq!(to_subunits_str("1010.12", 2).unwrap(), "101012");
    }

    #[rstest]
    #[case("2.22", "222", "100")]
    #[case("-0.5", "-5", "10")]
    #[case("3", "3", "1")]
    fn test_to_fraction(#[case] value: &str, #[case] numer: &str, #[case] denom: &str) {
        let (n, d) = to_fraction(&parse_decimal(value).unwrap());
        assert_eq!((n.to_string(), d.to_string()), (numer.to_string(), denom.to_string()));
    }

    #[rstest]
    #[case("10.00", Some(2))]
    #[case("-10", Some(0))]
    #[case("10.", None)]
    #[case(".5", None)]
    #[case("+1.00", None)]
    #[case("ten", None)]
    fn test_fraction_digits(#[case] amount: &str, #[case] expected: Option<usize>) {
        assert_eq!(fraction_digits(amount), expected);
    }

    #[rstest]
    #[case(2, "10.00", true)]
    #[case(2, "-10.00", true)]
    #[case(2, "10.000", false)]
    #[case(2, "10.0", false)]
    #[case(2, "10", false)]
    #[case(2, "", false)]
    #[case(2, "10.00 ", false)]
    #[case(0, "100", true)]
    #[case(0, "100.00", false)]
    #[case(4, "100.1234", true)]
    fn test_amount_format_is_match(
        #[case] subunits: u8,
        #[case] amount: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(AmountFormat::new(subunits).is_match(amount), expected);
    }

    #[rstest]
    #[case(0, r"/^-?\d+$/")]
    #[case(2, r"/^-?\d+\.\d{2}$/")]
    #[case(8, r"/^-?\d+\.\d{8}$/")]
    fn test_amount_format_display(#[case] subunits: u8, #[case] expected: &str) {
        assert_eq!(AmountFormat::new(subunits).to_string(), expected);
    }

    #[rstest]
    #[case("101200", 2, true)]
    #[case("-101200", 2, true)]
    #[case("101210", 2, false)]
    #[case("7", 0, true)]
    fn test_is_multiple_of_power_of_ten(
        #[case] raw: &str,
        #[case] digits: u8,
        #[case] expected: bool,
    ) {
        let raw = BigInt::from_str(raw).unwrap();
        assert_eq!(is_multiple_of_power_of_ten(&raw, digits), expected);
    }
}
