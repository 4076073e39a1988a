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

//! Errors raised by the database column types.

use tally_core::DecimalError;

/// Represents a failure to declare or convert a database column.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// No column type is registered under the name.
    #[error("Unknown column type: '{0}'")]
    UnknownColumnType(String),
    /// A column type is already registered under the name.
    #[error("Column type already registered: '{0}'")]
    ColumnTypeExists(String),
    /// A stored or domain value could not be converted.
    #[error("Cannot convert value '{value}' for column type '{column_type}': {source}")]
    InvalidValue {
        column_type: &'static str,
        value: String,
        source: DecimalError,
    },
}
