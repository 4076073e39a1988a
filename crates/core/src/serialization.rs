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

//! Serialization of value objects to JSON and `MsgPack` encoded bytes.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Represents value objects which round-trip through JSON and `MsgPack` encodings.
///
/// Deserialization goes through the implementor's [`Deserialize`] impl, so any
/// construction-time validation it performs also applies to decoded values.
pub trait Serializable: Serialize + for<'de> Deserialize<'de> {
    /// Deserializes an object from JSON encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not valid JSON for this type.
    fn from_json_bytes(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }

    /// Deserializes an object from `MsgPack` encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not valid `MsgPack` for this type.
    fn from_msgpack_bytes(data: &[u8]) -> Result<Self, rmp_serde::decode::Error> {
        rmp_serde::from_slice(data)
    }

    /// Serializes an object to JSON encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json_bytes(&self) -> Result<Bytes, serde_json::Error> {
        serde_json::to_vec(self).map(Bytes::from)
    }

    /// Serializes an object to `MsgPack` encoded bytes, with named fields.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_msgpack_bytes(&self) -> Result<Bytes, rmp_serde::encode::Error> {
        rmp_serde::to_vec_named(self).map(Bytes::from)
    }
}
