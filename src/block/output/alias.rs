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

/// The id of an alias output, unique over its lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct AliasId(#[serde(with = "bytify")] pub [u8; Self::LENGTH]);

impl AliasId {
    /// The number of bytes of a serialized [`AliasId`].
    pub const LENGTH: usize = 20;

    /// Converts the [`AliasId`] to its `0x`-prefixed hex representation.
    pub fn to_hex(&self) -> String {
        prefix_hex::encode(self.0.as_ref())
    }
}

impl FromStr for AliasId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(hex_to_array(s)?))
    }
}

/// The alias output: a stateful output controlled by a state controller and
/// a governor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasOutput {
    /// The output amount.
    pub amount: OutputAmount,
    /// The native tokens attached to the output.
    pub native_tokens: Box<[NativeToken]>,
    /// The id of the alias.
    pub alias_id: AliasId,
    /// The index incremented by every state transition.
    pub state_index: u32,
    /// Arbitrary state held by the alias.
    #[serde(with = "serde_bytes")]
    pub state_metadata: Box<[u8]>,
    /// The number of foundries the alias has created.
    pub foundry_counter: u32,
    /// The unlock conditions of the output.
    pub unlock_conditions: Box<[UnlockCondition]>,
    /// The feature blocks of the output.
    pub features: Box<[Feature]>,
}

impl AliasOutput {
    /// The kind tag of an [`AliasOutput`].
    pub const KIND: u8 = 4;

    pub(crate) const MIN_LENGTH: usize = 1 + 8 + 1 + AliasId::LENGTH + 4 + 4 + 4 + 2;
}

impl WireSerialize for AliasOutput {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("alias_output.kind", Self::KIND)?;
        writer.write_u64("alias_output.amount", self.amount.0)?;
        codec::write_list_u8(writer, "alias_output.native_tokens", &self.native_tokens, None)?;
        writer.write_bytes("alias_output.alias_id", &self.alias_id.0)?;
        writer.write_u32("alias_output.state_index", self.state_index)?;
        writer.write_u32("alias_output.state_metadata_length", self.state_metadata.len() as u32)?;
        writer.write_bytes("alias_output.state_metadata", &self.state_metadata)?;
        writer.write_u32("alias_output.foundry_counter", self.foundry_counter)?;
        codec::write_list_u8(writer, "alias_output.unlock_conditions", &self.unlock_conditions, None)?;
        codec::write_list_u8(writer, "alias_output.features", &self.features, None)
    }
}

impl WireDeserialize for AliasOutput {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("alias_output", Self::MIN_LENGTH)?;
        reader.read_kind_u8("alias_output.kind", Self::KIND)?;
        let amount = OutputAmount(reader.read_u64("alias_output.amount")?);
        let native_tokens = codec::read_list_u8(reader, "alias_output.native_tokens", None)?;
        let alias_id = AliasId(reader.read_array("alias_output.alias_id")?);
        let state_index = reader.read_u32("alias_output.state_index")?;
        let state_metadata_length = reader.read_u32("alias_output.state_metadata_length")? as usize;
        let state_metadata = reader.read_bytes("alias_output.state_metadata", state_metadata_length)?.into();
        Ok(Self {
            amount,
            native_tokens,
            alias_id,
            state_index,
            state_metadata,
            foundry_counter: reader.read_u32("alias_output.foundry_counter")?,
            unlock_conditions: codec::read_list_u8(reader, "alias_output.unlock_conditions", None)?,
            features: codec::read_list_u8(reader, "alias_output.features", None)?,
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::{
        block::output::unlock_condition::{GovernorAddressUnlockCondition, StateControllerAddressUnlockCondition},
        rand::{rand_bytes, rand_bytes_array, rand_number, rand_number_range},
    };

    impl AliasId {
        /// Generates a random [`AliasId`].
        pub fn rand() -> Self {
            Self(rand_bytes_array())
        }
    }

    impl AliasOutput {
        /// Generates a random [`AliasOutput`].
        pub fn rand() -> Self {
            Self {
                amount: OutputAmount::rand(),
                native_tokens: std::iter::repeat_with(NativeToken::rand)
                    .take(rand_number_range(0..3))
                    .collect(),
                alias_id: AliasId::rand(),
                state_index: rand_number(),
                state_metadata: rand_bytes(rand_number_range(0..64)).into_boxed_slice(),
                foundry_counter: rand_number(),
                unlock_conditions: Box::new([
                    StateControllerAddressUnlockCondition::rand().into(),
                    GovernorAddressUnlockCondition::rand().into(),
                ]),
                features: Box::new([Feature::rand_sender()]),
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
    fn test_alias_output_round_trip() {
        let output = AliasOutput::rand();
        let bytes = to_bytes(&output).unwrap();
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(output, AliasOutput::wire_deserialize(&mut reader).unwrap());
        assert_eq!(reader.remaining_len(), 0);
    }
}
