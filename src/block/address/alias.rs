// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    block::output::AliasId,
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// An address backed by an alias output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct AliasAddress(pub AliasId);

impl AliasAddress {
    /// The kind tag of an [`AliasAddress`].
    pub const KIND: u8 = 8;

    /// Converts the [`AliasAddress`] to its `0x`-prefixed hex representation.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl FromStr for AliasAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl WireSerialize for AliasAddress {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("alias_address.kind", Self::KIND)?;
        writer.write_bytes("alias_address.alias_id", &self.0 .0)
    }
}

impl WireDeserialize for AliasAddress {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("alias_address", 1 + AliasId::LENGTH)?;
        reader.read_kind_u8("alias_address.kind", Self::KIND)?;
        Ok(Self(AliasId(reader.read_array("alias_address.alias_id")?)))
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;

    impl AliasAddress {
        /// Generates a random [`AliasAddress`].
        pub fn rand() -> Self {
            Self(AliasId::rand())
        }
    }
}
