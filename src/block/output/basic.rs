// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use super::{Feature, NativeToken, OutputAmount, UnlockCondition};
use crate::{
    codec::{self, ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// The basic output: an amount with optional native tokens, unlock
/// conditions and feature blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicOutput {
    /// The output amount.
    pub amount: OutputAmount,
    /// The native tokens attached to the output.
    pub native_tokens: Box<[NativeToken]>,
    /// The unlock conditions of the output.
    pub unlock_conditions: Box<[UnlockCondition]>,
    /// The feature blocks of the output.
    pub features: Box<[Feature]>,
}

impl BasicOutput {
    /// The kind tag of a [`BasicOutput`].
    pub const KIND: u8 = 3;

    pub(crate) const MIN_LENGTH: usize = 1 + 8 + 3;
}

impl WireSerialize for BasicOutput {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("basic_output.kind", Self::KIND)?;
        writer.write_u64("basic_output.amount", self.amount.0)?;
        codec::write_list_u8(writer, "basic_output.native_tokens", &self.native_tokens, None)?;
        codec::write_list_u8(writer, "basic_output.unlock_conditions", &self.unlock_conditions, None)?;
        codec::write_list_u8(writer, "basic_output.features", &self.features, None)
    }
}

impl WireDeserialize for BasicOutput {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("basic_output", Self::MIN_LENGTH)?;
        reader.read_kind_u8("basic_output.kind", Self::KIND)?;
        Ok(Self {
            amount: OutputAmount(reader.read_u64("basic_output.amount")?),
            native_tokens: codec::read_list_u8(reader, "basic_output.native_tokens", None)?,
            unlock_conditions: codec::read_list_u8(reader, "basic_output.unlock_conditions", None)?,
            features: codec::read_list_u8(reader, "basic_output.features", None)?,
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::{block::output::unlock_condition::AddressUnlockCondition, rand::rand_number_range};

    impl BasicOutput {
        /// Generates a random [`BasicOutput`].
        pub fn rand() -> Self {
            Self {
                amount: OutputAmount::rand(),
                native_tokens: std::iter::repeat_with(NativeToken::rand)
                    .take(rand_number_range(0..3))
                    .collect(),
                unlock_conditions: Box::new([AddressUnlockCondition::rand().into()]),
                features: Box::new([Feature::rand_tag()]),
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
    fn test_basic_output_round_trip() {
        let output = BasicOutput::rand();
        let bytes = to_bytes(&output).unwrap();
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(output, BasicOutput::wire_deserialize(&mut reader).unwrap());
        assert_eq!(reader.remaining_len(), 0);
    }
}
