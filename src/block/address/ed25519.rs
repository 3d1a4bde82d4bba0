// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    util::{bytify, hex_to_array},
};

/// An Ed25519 address: the BLAKE2b-256 hash of an Ed25519 public key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct Ed25519Address(#[serde(with = "bytify")] pub [u8; Self::LENGTH]);

impl Ed25519Address {
    /// The kind tag of an [`Ed25519Address`].
    pub const KIND: u8 = 0;
    /// The number of bytes of a serialized address hash.
    pub const LENGTH: usize = 32;

    /// Converts the [`Ed25519Address`] to its `0x`-prefixed hex representation.
    pub fn to_hex(&self) -> String {
        prefix_hex::encode(self.0.as_ref())
    }
}

impl FromStr for Ed25519Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(hex_to_array(s)?))
    }
}

impl WireSerialize for Ed25519Address {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("ed25519_address.kind", Self::KIND)?;
        writer.write_bytes("ed25519_address.pub_key_hash", &self.0)
    }
}

impl WireDeserialize for Ed25519Address {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("ed25519_address", 1 + Self::LENGTH)?;
        reader.read_kind_u8("ed25519_address.kind", Self::KIND)?;
        Ok(Self(reader.read_array("ed25519_address.pub_key_hash")?))
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::rand_bytes_array;

    impl Ed25519Address {
        /// Generates a random [`Ed25519Address`].
        pub fn rand() -> Self {
            Self(rand_bytes_array())
        }
    }
}
