// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    block::Address,
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    tangle::{MilestoneIndex, MilestoneTimestamp},
};

/// An unlock condition returning an output to `return_address` once a
/// milestone index and a Unix timestamp have both passed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationUnlockCondition {
    /// The address the output falls back to after expiration.
    pub return_address: Address,
    /// The milestone index at which the output expires.
    pub milestone_index: MilestoneIndex,
    /// The Unix timestamp at which the output expires.
    pub timestamp: MilestoneTimestamp,
}

impl ExpirationUnlockCondition {
    /// The kind tag of an [`ExpirationUnlockCondition`].
    pub const KIND: u8 = 3;
}

impl WireSerialize for ExpirationUnlockCondition {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("expiration_unlock_condition.kind", Self::KIND)?;
        self.return_address.wire_serialize(writer)?;
        writer.write_u32("expiration_unlock_condition.milestone_index", self.milestone_index.0)?;
        writer.write_u32("expiration_unlock_condition.timestamp", self.timestamp.0)
    }
}

impl WireDeserialize for ExpirationUnlockCondition {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("expiration_unlock_condition", 1 + Address::MIN_LENGTH + 8)?;
        reader.read_kind_u8("expiration_unlock_condition.kind", Self::KIND)?;
        Ok(Self {
            return_address: Address::wire_deserialize(reader)?,
            milestone_index: reader.read_u32("expiration_unlock_condition.milestone_index")?.into(),
            timestamp: reader.read_u32("expiration_unlock_condition.timestamp")?.into(),
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::rand_number;

    impl ExpirationUnlockCondition {
        /// Generates a random [`ExpirationUnlockCondition`].
        pub fn rand() -> Self {
            Self {
                return_address: Address::rand(),
                milestone_index: rand_number::<u32>().into(),
                timestamp: rand_number::<u32>().into(),
            }
        }
    }
}
