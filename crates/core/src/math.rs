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

//! Integer arithmetic helpers for proportional allocation and ratios.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::{
    correctness::{check_positive_usize, check_predicate_true, check_slice_not_empty},
    decimal::{from_subunits, subunit_multiplier},
};

/// The number of fractional digits produced by [`ratio`].
pub const RATIO_PRECISION: u8 = 14;

/// Splits `total` into shares proportional to `ratios`.
///
/// Each share is first floored on the magnitude of `total`; the leftover units are then
/// handed out one at a time to the earliest shares. The shares always sum to `total`
/// exactly and carry its sign.
///
/// # Errors
///
/// Returns an error if `ratios` is empty or sums to zero.
pub fn allocate(total: &BigInt, ratios: &[u64]) -> anyhow::Result<Vec<BigInt>> {
    check_slice_not_empty(ratios, "ratios")?;

    let ratio_sum: BigInt = ratios.iter().map(|r| BigInt::from(*r)).sum();
    check_predicate_true(
        !ratio_sum.is_zero(),
        "the sum of 'ratios' must be greater than zero",
    )?;

    let magnitude = total.abs();
    let mut shares: Vec<BigInt> = ratios
        .iter()
        .map(|r| &magnitude * BigInt::from(*r) / &ratio_sum)
        .collect();

    let allocated: BigInt = shares.iter().sum();
    let mut remainder = &magnitude - allocated;

    for share in &mut shares {
        if remainder.is_zero() {
            break;
        }
        *share += 1;
        remainder -= 1;
    }

    if total.is_negative() {
        for share in &mut shares {
            *share = -&*share;
        }
    }

    Ok(shares)
}

/// Splits `total` into `n` equal shares; see [`allocate`].
///
/// # Errors
///
/// Returns an error if `n` is zero.
pub fn allocate_to(total: &BigInt, n: usize) -> anyhow::Result<Vec<BigInt>> {
    check_positive_usize(n, "n")?;
    allocate(total, &vec![1; n])
}

/// Returns `numerator / denominator` as a decimal string with [`RATIO_PRECISION`]
/// fractional digits, truncated toward zero.
///
/// # Errors
///
/// Returns an error if `denominator` is zero.
pub fn ratio(numerator: &BigInt, denominator: &BigInt) -> anyhow::Result<String> {
    check_predicate_true(!denominator.is_zero(), "cannot calculate a ratio of zero")?;
    let scaled = numerator * subunit_multiplier(RATIO_PRECISION) / denominator;
    Ok(from_subunits(&scaled, RATIO_PRECISION))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn as_i64(values: Vec<BigInt>) -> Vec<i64> {
        values
            .into_iter()
            .map(|v| i64::try_from(v).unwrap())
            .collect()
    }

    #[rstest]
    #[case(5, vec![70, 30], vec![4, 1])]
    #[case(-5, vec![70, 30], vec![-4, -1])]
    #[case(100, vec![1, 1, 1], vec![34, 33, 33])]
    #[case(100, vec![1, 0], vec![100, 0])]
    #[case(0, vec![1, 1], vec![0, 0])]
    #[case(2, vec![1, 1, 1], vec![1, 1, 0])]
    fn test_allocate(#[case] total: i64, #[case] ratios: Vec<u64>, #[case] expected: Vec<i64>) {
        let shares = allocate(&BigInt::from(total), &ratios).unwrap();
        assert_eq!(as_i64(shares), expected);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![0, 0])]
    fn test_allocate_with_invalid_ratios(#[case] ratios: Vec<u64>) {
        assert!(allocate(&BigInt::from(100), &ratios).is_err());
    }

    #[rstest]
    fn test_allocate_to() {
        let shares = allocate_to(&BigInt::from(800), 3).unwrap();
        assert_eq!(as_i64(shares), vec![267, 267, 266]);
    }

    #[rstest]
    fn test_allocate_to_zero_parts() {
        assert!(allocate_to(&BigInt::from(800), 0).is_err());
    }

    #[rstest]
    #[case(300, 600, "0.50000000000000")]
    #[case(100, 300, "0.33333333333333")]
    #[case(-200, 300, "-0.66666666666666")]
    #[case(600, 300, "2.00000000000000")]
    fn test_ratio(#[case] numerator: i64, #[case] denominator: i64, #[case] expected: &str) {
        let result = ratio(&BigInt::from(numerator), &BigInt::from(denominator)).unwrap();
        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_ratio_of_zero() {
        assert!(ratio(&BigInt::from(1), &BigInt::zero()).is_err());
    }
}
