// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the [`Output`] types.

mod feature;
mod native_token;
mod unlock_condition;

// The different output types
pub mod alias;
pub mod basic;
pub mod foundry;
pub mod nft;
pub mod treasury;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use self::{
    alias::{AliasId, AliasOutput},
    basic::BasicOutput,
    feature::Feature,
    foundry::FoundryOutput,
    native_token::{NativeToken, TokenId, TokenScheme},
    nft::{NftId, NftOutput},
    treasury::TreasuryOutput,
    unlock_condition::{
        AddressUnlockCondition, ExpirationUnlockCondition, GovernorAddressUnlockCondition,
        ImmutableAliasAddressUnlockCondition, StateControllerAddressUnlockCondition,
        StorageDepositReturnUnlockCondition, TimelockUnlockCondition, UnlockCondition,
    },
};
use crate::{
    block::payload::transaction::TransactionId,
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    util::hex_to_array,
};

/// The base coin amount of an output.
///
/// Held as a full `u64` and transported as a decimal string so values near
/// the upper bound never pass through a lossy floating-point type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct OutputAmount(#[serde(with = "crate::util::stringify")] pub u64);

/// The index of an output within a transaction.
pub type OutputIndex = u16;

/// The id of an output: its transaction id plus its index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputId {
    /// The id of the transaction that created the output.
    pub transaction_id: TransactionId,
    /// The index of the output within the transaction.
    pub index: OutputIndex,
}

impl OutputId {
    /// Converts the [`OutputId`] to its `0x`-prefixed hex representation.
    pub fn to_hex(&self) -> String {
        let mut bytes = Vec::with_capacity(TransactionId::LENGTH + 2);
        bytes.extend_from_slice(&self.transaction_id.0);
        bytes.extend_from_slice(&self.index.to_le_bytes());
        prefix_hex::encode(bytes)
    }
}

impl FromStr for OutputId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; TransactionId::LENGTH + 2] = hex_to_array(s)?;
        // Unwrap: the lengths are statically correct
        Ok(Self {
            transaction_id: TransactionId(bytes[..TransactionId::LENGTH].try_into().unwrap()),
            index: u16::from_le_bytes(bytes[TransactionId::LENGTH..].try_into().unwrap()),
        })
    }
}

/// The different types of outputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Output {
    /// The treasury output.
    Treasury(TreasuryOutput),
    /// The basic output.
    Basic(BasicOutput),
    /// The alias output.
    Alias(AliasOutput),
    /// The foundry output.
    Foundry(FoundryOutput),
    /// The NFT output.
    Nft(NftOutput),
}

impl Output {
    pub(crate) const MIN_LENGTH: usize = TreasuryOutput::LENGTH;

    /// Returns the kind tag of the output.
    pub fn kind(&self) -> u8 {
        match self {
            Self::Treasury(_) => TreasuryOutput::KIND,
            Self::Basic(_) => BasicOutput::KIND,
            Self::Alias(_) => AliasOutput::KIND,
            Self::Foundry(_) => FoundryOutput::KIND,
            Self::Nft(_) => NftOutput::KIND,
        }
    }

    /// Returns the amount of the output.
    pub fn amount(&self) -> OutputAmount {
        match self {
            Self::Treasury(TreasuryOutput { amount, .. }) => *amount,
            Self::Basic(BasicOutput { amount, .. }) => *amount,
            Self::Alias(AliasOutput { amount, .. }) => *amount,
            Self::Foundry(FoundryOutput { amount, .. }) => *amount,
            Self::Nft(NftOutput { amount, .. }) => *amount,
        }
    }
}

impl WireSerialize for Output {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        match self {
            Self::Treasury(o) => o.wire_serialize(writer),
            Self::Basic(o) => o.wire_serialize(writer),
            Self::Alias(o) => o.wire_serialize(writer),
            Self::Foundry(o) => o.wire_serialize(writer),
            Self::Nft(o) => o.wire_serialize(writer),
        }
    }
}

impl WireDeserialize for Output {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("output", Self::MIN_LENGTH)?;
        Ok(match reader.peek_u8("output.kind")? {
            TreasuryOutput::KIND => Self::Treasury(TreasuryOutput::wire_deserialize(reader)?),
            BasicOutput::KIND => Self::Basic(BasicOutput::wire_deserialize(reader)?),
            AliasOutput::KIND => Self::Alias(AliasOutput::wire_deserialize(reader)?),
            FoundryOutput::KIND => Self::Foundry(FoundryOutput::wire_deserialize(reader)?),
            NftOutput::KIND => Self::Nft(NftOutput::wire_deserialize(reader)?),
            kind => {
                return Err(Error::UnrecognizedKind {
                    field: "output.kind",
                    kind: kind as u32,
                });
            }
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::{rand_bytes_array, rand_number_range};

    impl OutputAmount {
        /// Generates a random [`OutputAmount`].
        pub fn rand() -> Self {
            Self(rand_number_range(0..=u64::MAX))
        }
    }

    impl OutputId {
        /// Generates a random [`OutputId`].
        pub fn rand() -> Self {
            Self {
                transaction_id: TransactionId(rand_bytes_array()),
                index: rand_number_range(0..=127),
            }
        }
    }

    impl Output {
        /// Generates a random [`Output`].
        pub fn rand() -> Self {
            match rand_number_range(0..5) {
                0 => Self::rand_treasury(),
                1 => Self::rand_basic(),
                2 => Self::rand_alias(),
                3 => Self::rand_foundry(),
                4 => Self::rand_nft(),
                _ => unreachable!(),
            }
        }

        /// Generates a random treasury [`Output`].
        pub fn rand_treasury() -> Self {
            Self::Treasury(TreasuryOutput::rand())
        }

        /// Generates a random basic [`Output`].
        pub fn rand_basic() -> Self {
            Self::Basic(BasicOutput::rand())
        }

        /// Generates a random alias [`Output`].
        pub fn rand_alias() -> Self {
            Self::Alias(AliasOutput::rand())
        }

        /// Generates a random foundry [`Output`].
        pub fn rand_foundry() -> Self {
            Self::Foundry(FoundryOutput::rand())
        }

        /// Generates a random nft [`Output`].
        pub fn rand_nft() -> Self {
            Self::Nft(NftOutput::rand())
        }
    }
}

#[cfg(all(test, feature = "rand"))]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::codec::to_bytes;

    #[test]
    fn test_output_round_trip() {
        for output in [
            Output::rand_treasury(),
            Output::rand_basic(),
            Output::rand_alias(),
            Output::rand_foundry(),
            Output::rand_nft(),
        ] {
            let bytes = to_bytes(&output).unwrap();
            assert_eq!(bytes[0], output.kind());
            let mut reader = ReadCursor::new(&bytes);
            assert_eq!(output, Output::wire_deserialize(&mut reader).unwrap());
            assert_eq!(reader.remaining_len(), 0);
        }
    }

    #[test]
    fn test_output_reencode_is_identical() {
        let output = Output::rand_basic();
        let bytes = to_bytes(&output).unwrap();
        let mut reader = ReadCursor::new(&bytes);
        let decoded = Output::wire_deserialize(&mut reader).unwrap();
        assert_eq!(bytes, to_bytes(&decoded).unwrap());
    }

    #[test]
    fn test_output_id_hex() {
        let output_id = OutputId::rand();
        assert_eq!(output_id, output_id.to_hex().parse().unwrap());
    }

    #[test]
    fn test_output_serde_round_trip() {
        let output = Output::rand_alias();
        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(output, serde_json::from_str(&json).unwrap());
    }
}
