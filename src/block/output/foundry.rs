// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use super::{Feature, NativeToken, OutputAmount, TokenScheme, UnlockCondition};
use crate::{
    codec::{self, ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    util::bytify,
};

/// The foundry output: the minting authority of a native token family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundryOutput {
    /// The output amount.
    pub amount: OutputAmount,
    /// The native tokens attached to the output.
    pub native_tokens: Box<[NativeToken]>,
    /// The serial number of the foundry within its alias.
    pub serial_number: u32,
    /// The tag the foundry appends to its token ids.
    #[serde(with = "bytify")]
    pub token_tag: [u8; Self::TOKEN_TAG_LENGTH],
    /// The number of tokens currently in circulation.
    #[serde(with = "crate::util::u256_stringify")]
    pub circulating_supply: U256,
    /// The maximum number of tokens that can ever circulate.
    #[serde(with = "crate::util::u256_stringify")]
    pub maximum_supply: U256,
    /// The token scheme of the foundry.
    pub token_scheme: TokenScheme,
    /// The unlock conditions of the output.
    pub unlock_conditions: Box<[UnlockCondition]>,
    /// The feature blocks of the output.
    pub features: Box<[Feature]>,
}

impl FoundryOutput {
    /// The kind tag of a [`FoundryOutput`].
    pub const KIND: u8 = 5;
    /// The number of bytes of a token tag.
    pub const TOKEN_TAG_LENGTH: usize = 12;

    pub(crate) const MIN_LENGTH: usize = 1 + 8 + 1 + 4 + Self::TOKEN_TAG_LENGTH + 32 + 32 + 1 + 2;
}

impl WireSerialize for FoundryOutput {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("foundry_output.kind", Self::KIND)?;
        writer.write_u64("foundry_output.amount", self.amount.0)?;
        codec::write_list_u8(writer, "foundry_output.native_tokens", &self.native_tokens, None)?;
        writer.write_u32("foundry_output.serial_number", self.serial_number)?;
        writer.write_bytes("foundry_output.token_tag", &self.token_tag)?;
        writer.write_u256("foundry_output.circulating_supply", &self.circulating_supply)?;
        writer.write_u256("foundry_output.maximum_supply", &self.maximum_supply)?;
        self.token_scheme.wire_serialize(writer)?;
        codec::write_list_u8(writer, "foundry_output.unlock_conditions", &self.unlock_conditions, None)?;
        codec::write_list_u8(writer, "foundry_output.features", &self.features, None)
    }
}

impl WireDeserialize for FoundryOutput {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("foundry_output", Self::MIN_LENGTH)?;
        reader.read_kind_u8("foundry_output.kind", Self::KIND)?;
        Ok(Self {
            amount: OutputAmount(reader.read_u64("foundry_output.amount")?),
            native_tokens: codec::read_list_u8(reader, "foundry_output.native_tokens", None)?,
            serial_number: reader.read_u32("foundry_output.serial_number")?,
            token_tag: reader.read_array("foundry_output.token_tag")?,
            circulating_supply: reader.read_u256("foundry_output.circulating_supply")?,
            maximum_supply: reader.read_u256("foundry_output.maximum_supply")?,
            token_scheme: TokenScheme::wire_deserialize(reader)?,
            unlock_conditions: codec::read_list_u8(reader, "foundry_output.unlock_conditions", None)?,
            features: codec::read_list_u8(reader, "foundry_output.features", None)?,
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::{
        block::output::unlock_condition::ImmutableAliasAddressUnlockCondition,
        rand::{rand_bytes_array, rand_number, rand_number_range},
    };

    impl FoundryOutput {
        /// Generates a random [`FoundryOutput`].
        pub fn rand() -> Self {
            let maximum_supply = U256::from(rand_number::<u128>());
            Self {
                amount: OutputAmount::rand(),
                native_tokens: std::iter::repeat_with(NativeToken::rand)
                    .take(rand_number_range(0..3))
                    .collect(),
                serial_number: rand_number(),
                token_tag: rand_bytes_array(),
                circulating_supply: maximum_supply / 2,
                maximum_supply,
                token_scheme: TokenScheme::Simple,
                unlock_conditions: Box::new([ImmutableAliasAddressUnlockCondition::rand().into()]),
                features: Box::new([Feature::rand_metadata()]),
            }
        }
    }
}
