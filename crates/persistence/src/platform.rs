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

//! SQL platforms rendering column type declarations.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// The options of a column declaration.
///
/// Column types merge their own fixed options over these, so only the options a type
/// leaves open take effect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOptions {
    /// The total number of decimal digits.
    pub precision: Option<u8>,
    /// The number of fractional decimal digits.
    pub scale: Option<u8>,
    /// The length of a string column.
    pub length: Option<u32>,
    /// If a string column has a fixed length.
    pub fixed: bool,
    /// If the column rejects `NULL`.
    pub not_null: bool,
}

impl ColumnOptions {
    /// Returns these options with `precision` and `scale` set.
    #[must_use]
    pub const fn with_decimal(mut self, precision: u8, scale: u8) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    /// Returns these options with `length` set.
    #[must_use]
    pub const fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }
}

/// Renders the SQL type declarations of a database platform.
pub trait SqlPlatform: Debug + Send + Sync {
    /// Returns the platform name.
    fn name(&self) -> &'static str;

    /// Returns the declaration of an exact decimal column.
    fn decimal_declaration(&self, options: &ColumnOptions) -> String;

    /// Returns the declaration of a string column.
    fn varchar_declaration(&self, options: &ColumnOptions) -> String;
}

/// A platform rendering standard ANSI SQL types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenericSqlPlatform;

impl GenericSqlPlatform {
    pub const DEFAULT_PRECISION: u8 = 10;
    pub const DEFAULT_SCALE: u8 = 0;
    pub const DEFAULT_LENGTH: u32 = 255;
}

fn with_nullability(declaration: String, options: &ColumnOptions) -> String {
    if options.not_null {
        format!("{declaration} NOT NULL")
    } else {
        declaration
    }
}

impl SqlPlatform for GenericSqlPlatform {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn decimal_declaration(&self, options: &ColumnOptions) -> String {
        let precision = options.precision.unwrap_or(Self::DEFAULT_PRECISION);
        let scale = options.scale.unwrap_or(Self::DEFAULT_SCALE);
        with_nullability(format!("NUMERIC({precision}, {scale})"), options)
    }

    fn varchar_declaration(&self, options: &ColumnOptions) -> String {
        let length = options.length.unwrap_or(Self::DEFAULT_LENGTH);
        let declaration = if options.fixed {
            format!("CHAR({length})")
        } else {
            format!("VARCHAR({length})")
        };
        with_nullability(declaration, options)
    }
}
