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

//! Errors raised when constructing or operating on money and currency values.

use std::fmt::{Display, Formatter};

use tally_core::{AmountFormat, DecimalError};
use ustr::Ustr;

/// The construction-time sign policy a money variant may enforce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum AmountPolicy {
    /// The amount must be strictly positive.
    GreaterThanZero,
    /// The amount must not be negative.
    ZeroOrGreater,
    /// The amount must not be positive.
    ZeroOrLess,
    /// The amount must be strictly negative.
    LessThanZero,
}

impl Display for AmountPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::GreaterThanZero => "greater than zero",
            Self::ZeroOrGreater => "zero or greater",
            Self::ZeroOrLess => "zero or less",
            Self::LessThanZero => "less than zero",
        };
        f.write_str(s)
    }
}

/// Represents a failure to construct or operate on a money value.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum MoneyError {
    /// The currency is not in the variant's allowed set.
    #[error("Invalid {name} with amount: {amount} and currency: {currency}. Currency not allowed.")]
    CurrencyNotAllowed {
        name: &'static str,
        amount: String,
        currency: Ustr,
    },
    /// The currency's natural precision exceeds the variant's subunit ceiling.
    #[error(
        "Cannot create {name} with currency: {currency}. The currency has more subunits: {subunits} then the maximum allowed: {max_subunits}."
    )]
    CurrencyExceedsSubunitLimit {
        name: &'static str,
        amount: String,
        currency: Ustr,
        subunits: u8,
        max_subunits: u8,
    },
    /// The amount string does not match the format for the resolved precision.
    #[error(
        "Cannot create {name} from amount: {amount} - invalid amount format. The correct format is: {format}."
    )]
    AmountFormatInvalid {
        name: &'static str,
        amount: String,
        currency: Ustr,
        format: AmountFormat,
    },
    /// A construction-time sign policy was violated.
    #[error("Cannot create {name} from amount: {amount} - amount must be {policy}.")]
    AmountPolicyViolation {
        name: &'static str,
        amount: String,
        currency: Ustr,
        policy: AmountPolicy,
    },
    /// The operands belong to variants with different class subunits.
    #[error(
        "Cannot execute method: {method} on Money object: {name} with other Money object as argument: {other_name}. The classes have different subunits: {subunits} and {other_subunits}."
    )]
    DifferentSubunitPrecision {
        method: &'static str,
        name: &'static str,
        other_name: &'static str,
        subunits: u8,
        other_subunits: u8,
    },
    /// The operands carry different currencies.
    #[error("Currencies must be identical: {currency} and {other_currency}")]
    CurrenciesNotIdentical {
        currency: Ustr,
        other_currency: Ustr,
    },
    /// A conversion was requested to the source currency.
    #[error("Cannot convert {amount} {currency} to the same currency: {to_currency}")]
    SameCurrencyConversion {
        amount: String,
        currency: Ustr,
        to_currency: Ustr,
    },
    /// The code is not registered in the requested context.
    #[error("Cannot create Currency with code: {code}. Allowed codes are: {}", format_allowed(.allowed))]
    UnregisteredCurrencyCode { code: String, allowed: Vec<Ustr> },
    /// The identifier does not name a registered money variant.
    #[error("Cannot create object of Money class: {0}, the class must extend: BaseMoney")]
    InvalidVariantType(String),
    /// A variant-specific validation rule failed.
    #[error("{0}")]
    Validation(String),
    /// A multiplier or divisor is not a plain decimal number.
    #[error("Invalid operand for {method}: {source}")]
    InvalidOperand {
        method: &'static str,
        source: DecimalError,
    },
    /// The divisor of a division, modulo or ratio is zero.
    #[error("Cannot execute method: {method} with a zero divisor")]
    DivisionByZero { method: &'static str },
    /// The allocation ratios or part count are invalid.
    #[error("Cannot allocate money: {0}")]
    InvalidAllocation(String),
    /// The external currency converter failed.
    #[error("Cannot convert {amount} {currency} to {to_currency}: {reason}")]
    ConversionFailed {
        amount: String,
        currency: Ustr,
        to_currency: Ustr,
        reason: String,
    },
}

fn format_allowed(allowed: &[Ustr]) -> String {
    if allowed.is_empty() {
        return "none".to_string();
    }
    allowed
        .iter()
        .map(Ustr::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_currency_not_allowed_message() {
        let error = MoneyError::CurrencyNotAllowed {
            name: "GaapMoney",
            amount: "10.00000000".to_string(),
            currency: Ustr::from("XBT"),
        };
        assert_eq!(
            error.to_string(),
            "Invalid GaapMoney with amount: 10.00000000 and currency: XBT. Currency not allowed."
        );
    }

    #[rstest]
    fn test_exceeds_subunit_limit_message() {
        let error = MoneyError::CurrencyExceedsSubunitLimit {
            name: "Money",
            amount: "10.000".to_string(),
            currency: Ustr::from("BHD"),
            subunits: 3,
            max_subunits: 2,
        };
        assert_eq!(
            error.to_string(),
            "Cannot create Money with currency: BHD. The currency has more subunits: 3 then the maximum allowed: 2."
        );
    }

    #[rstest]
    fn test_amount_format_invalid_message() {
        let error = MoneyError::AmountFormatInvalid {
            name: "Money",
            amount: "10.000".to_string(),
            currency: Ustr::from("EUR"),
            format: AmountFormat::new(2),
        };
        assert_eq!(
            error.to_string(),
            r"Cannot create Money from amount: 10.000 - invalid amount format. The correct format is: /^-?\d+\.\d{2}$/."
        );
    }

    #[rstest]
    #[case(AmountPolicy::GreaterThanZero, "greater than zero")]
    #[case(AmountPolicy::ZeroOrGreater, "zero or greater")]
    #[case(AmountPolicy::ZeroOrLess, "zero or less")]
    #[case(AmountPolicy::LessThanZero, "less than zero")]
    fn test_amount_policy_violation_message(#[case] policy: AmountPolicy, #[case] text: &str) {
        let error = MoneyError::AmountPolicyViolation {
            name: "Money",
            amount: "0.00".to_string(),
            currency: Ustr::from("EUR"),
            policy,
        };
        assert_eq!(
            error.to_string(),
            format!("Cannot create Money from amount: 0.00 - amount must be {text}.")
        );
    }

    #[rstest]
    fn test_different_subunit_message() {
        let error = MoneyError::DifferentSubunitPrecision {
            method: "add",
            name: "Money",
            other_name: "GaapMoney",
            subunits: 2,
            other_subunits: 4,
        };
        assert_eq!(
            error.to_string(),
            "Cannot execute method: add on Money object: Money with other Money object as argument: GaapMoney. The classes have different subunits: 2 and 4."
        );
    }

    #[rstest]
    fn test_same_currency_conversion_message() {
        let error = MoneyError::SameCurrencyConversion {
            amount: "100.00".to_string(),
            currency: Ustr::from("EUR"),
            to_currency: Ustr::from("EUR"),
        };
        assert_eq!(
            error.to_string(),
            "Cannot convert 100.00 EUR to the same currency: EUR"
        );
    }

    #[rstest]
    #[case(vec![], "none")]
    #[case(vec!["EUR", "USD"], "EUR, USD")]
    fn test_unregistered_currency_code_message(#[case] allowed: Vec<&str>, #[case] list: &str) {
        let error = MoneyError::UnregisteredCurrencyCode {
            code: "RUB".to_string(),
            allowed: allowed.into_iter().map(Ustr::from).collect(),
        };
        assert_eq!(
            error.to_string(),
            format!("Cannot create Currency with code: RUB. Allowed codes are: {list}")
        );
    }

    #[rstest]
    fn test_invalid_variant_type_message() {
        let error = MoneyError::InvalidVariantType("Currency".to_string());
        assert_eq!(
            error.to_string(),
            "Cannot create object of Money class: Currency, the class must extend: BaseMoney"
        );
    }
}
