// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Feature, NativeToken, OutputAmount, UnlockCondition};
use crate::{
    codec::{self, ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    util::{bytify, hex_to_array},
};

/// The id of an NFT output, unique over its lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct NftId(#[serde(with = "bytify")] pub [u8; Self::LENGTH]);

impl NftId {
    /// The number of bytes of a serialized [`NftId`].
    pub const LENGTH: usize = 20;

    /// Converts the [`NftId`] to its `0x`-prefixed hex representation.
    pub fn to_hex(&self) -> String {
        prefix_hex::encode(self.0.as_ref())
    }
}

impl FromStr for NftId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(hex_to_array(s)?))
    }
}

/// The NFT output: a non-fungible token with immutable metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftOutput {
    /// The output amount.
    pub amount: OutputAmount,
    /// The native tokens attached to the output.
    pub native_tokens: Box<[NativeToken]>,
    /// The id of the NFT.
    pub nft_id: NftId,
    /// The metadata fixed at mint time.
    #[serde(with = "serde_bytes")]
    pub immutable_metadata: Box<[u8]>,
    /// The unlock conditions of the output.
    pub unlock_conditions: Box<[UnlockCondition]>,
    /// The feature blocks of the output.
    pub features: Box<[Feature]>,
}

impl NftOutput {
    /// The kind tag of an [`NftOutput`].
    pub const KIND: u8 = 6;

    pub(crate) const MIN_LENGTH: usize = 1 + 8 + 1 + NftId::LENGTH + 4 + 2;
}

impl WireSerialize for NftOutput {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("nft_output.kind", Self::KIND)?;
        writer.write_u64("nft_output.amount", self.amount.0)?;
        codec::write_list_u8(writer, "nft_output.native_tokens", &self.native_tokens, None)?;
        writer.write_bytes("nft_output.nft_id", &self.nft_id.0)?;
        writer.write_u32("nft_output.immutable_metadata_length", self.immutable_metadata.len() as u32)?;
        writer.write_bytes("nft_output.immutable_metadata", &self.immutable_metadata)?;
        codec::write_list_u8(writer, "nft_output.unlock_conditions", &self.unlock_conditions, None)?;
        codec::write_list_u8(writer, "nft_output.features", &self.features, None)
    }
}

impl WireDeserialize for NftOutput {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("nft_output", Self::MIN_LENGTH)?;
        reader.read_kind_u8("nft_output.kind", Self::KIND)?;
        let amount = OutputAmount(reader.read_u64("nft_output.amount")?);
        let native_tokens = codec::read_list_u8(reader, "nft_output.native_tokens", None)?;
        let nft_id = NftId(reader.read_array("nft_output.nft_id")?);
        let immutable_metadata_length = reader.read_u32("nft_output.immutable_metadata_length")? as usize;
        Ok(Self {
            amount,
            native_tokens,
            nft_id,
            immutable_metadata: reader
                .read_bytes("nft_output.immutable_metadata", immutable_metadata_length)?
                .into(),
            unlock_conditions: codec::read_list_u8(reader, "nft_output.unlock_conditions", None)?,
            features: codec::read_list_u8(reader, "nft_output.features", None)?,
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::{
        block::output::unlock_condition::AddressUnlockCondition,
        rand::{rand_bytes, rand_bytes_array, rand_number_range},
    };

    impl NftId {
        /// Generates a random [`NftId`].
        pub fn rand() -> Self {
            Self(rand_bytes_array())
        }
    }

    impl NftOutput {
        /// Generates a random [`NftOutput`].
        pub fn rand() -> Self {
            Self {
                amount: OutputAmount::rand(),
                native_tokens: std::iter::repeat_with(NativeToken::rand)
                    .take(rand_number_range(0..3))
                    .collect(),
                nft_id: NftId::rand(),
                immutable_metadata: rand_bytes(rand_number_range(0..64)).into_boxed_slice(),
                unlock_conditions: Box::new([AddressUnlockCondition::rand().into()]),
                features: Box::new([Feature::rand_issuer()]),
            }
        }
    }
}

#[cfg(all(test, feature = "rand"))]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::codec::to_bytes;

    #[test]
    fn test_nft_output_round_trip() {
        let output = NftOutput::rand();
        let bytes = to_bytes(&output).unwrap();
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(output, NftOutput::wire_deserialize(&mut reader).unwrap());
        assert_eq!(reader.remaining_len(), 0);
    }
}
