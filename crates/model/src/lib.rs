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

//! Currency and money value objects for the Tally money library.
//!
//! The `tally-model` crate provides exact-precision money built on arbitrary-precision
//! integer subunits:
//!
//! - [`Currency`] values and the [`Currencies`] registries which admit them.
//! - The generic [`Money`] value with its [`MoneyVariant`] policy hooks, and the
//!   built-in `StandardMoney`, `GaapMoney` and `BitcoinMoney` variants.
//! - Comparison, arithmetic, allocation and conversion of money values.
//! - Factories resolving currency codes within named contexts, configurable from TOML or
//!   JSON.
//!
//! # Feature flags
//!
//! - `stubs`: Enables mock variants and fixtures for testing.

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod currencies;
pub mod error;
pub mod factories;
pub mod types;
pub mod variants;
pub mod xrate;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use crate::{
    currencies::Currencies,
    error::MoneyError,
    types::{BaseMoney, Currency, Money},
    variants::{BitcoinMoney, GaapMoney, MoneyVariant, StandardMoney},
};
pub use tally_core::RoundingMode;
