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

//! Core exact-decimal primitives for the Tally money library.
//!
//! The `tally-core` crate has no knowledge of currencies or money. It supplies the
//! arbitrary-precision building blocks the model crate is built on:
//!
//! - Correctness validation functions.
//! - Exact conversion between decimal strings and integer subunits.
//! - Rounding modes for integer division.
//! - Proportional allocation and ratio helpers.
//! - Serialization traits.

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod correctness;
pub mod decimal;
pub mod math;
pub mod rounding;
pub mod serialization;

// Re-exports
pub use crate::{
    decimal::{AmountFormat, DecimalError, from_subunits, to_subunits},
    rounding::RoundingMode,
};
