// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    block::output::NftId,
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// An address backed by an NFT output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct NftAddress(pub NftId);

impl NftAddress {
    /// The kind tag of an [`NftAddress`].
    pub const KIND: u8 = 16;

    /// Converts the [`NftAddress`] to its `0x`-prefixed hex representation.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl FromStr for NftAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl WireSerialize for NftAddress {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("nft_address.kind", Self::KIND)?;
        writer.write_bytes("nft_address.nft_id", &self.0 .0)
    }
}

impl WireDeserialize for NftAddress {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("nft_address", 1 + NftId::LENGTH)?;
        reader.read_kind_u8("nft_address.kind", Self::KIND)?;
        Ok(Self(NftId(reader.read_array("nft_address.nft_id")?)))
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;

    impl NftAddress {
        /// Generates a random [`NftAddress`].
        pub fn rand() -> Self {
            Self(NftId::rand())
        }
    }
}
