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

//! Database column types for the Tally money library.
//!
//! The `tally-persistence` crate maps money amounts and currency codes onto SQL columns.
//! Amounts are stored as exact decimals at the class precision of their money variant and
//! exchanged with the domain as integer subunit strings:
//!
//! | Type         | Declaration       |
//! |--------------|-------------------|
//! | `money`      | `NUMERIC(10, 2)`  |
//! | `gaap_money` | `NUMERIC(15, 4)`  |
//! | `btc_money`  | `NUMERIC(16, 8)`  |
//! | `currency`   | `VARCHAR(3)`      |

#![deny(nonstandard_style)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod platform;
pub mod types;

// Re-exports
pub use crate::{
    error::PersistenceError,
    platform::{ColumnOptions, GenericSqlPlatform, SqlPlatform},
    types::{ColumnType, ColumnTypeRegistry, CurrencyType, DecimalMoneyType},
};
