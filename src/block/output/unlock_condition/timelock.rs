// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    tangle::{MilestoneIndex, MilestoneTimestamp},
};

/// An unlock condition preventing an output from being spent before a
/// milestone index and a Unix timestamp are both reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelockUnlockCondition {
    /// The milestone index before which the output cannot be spent.
    pub milestone_index: MilestoneIndex,
    /// The Unix timestamp before which the output cannot be spent.
    pub timestamp: MilestoneTimestamp,
}

impl TimelockUnlockCondition {
    /// The kind tag of a [`TimelockUnlockCondition`].
    pub const KIND: u8 = 2;

    pub(crate) const LENGTH: usize = 1 + 4 + 4;
}

impl WireSerialize for TimelockUnlockCondition {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("timelock_unlock_condition.kind", Self::KIND)?;
        writer.write_u32("timelock_unlock_condition.milestone_index", self.milestone_index.0)?;
        writer.write_u32("timelock_unlock_condition.timestamp", self.timestamp.0)
    }
}

impl WireDeserialize for TimelockUnlockCondition {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("timelock_unlock_condition", Self::LENGTH)?;
        reader.read_kind_u8("timelock_unlock_condition.kind", Self::KIND)?;
        Ok(Self {
            milestone_index: reader.read_u32("timelock_unlock_condition.milestone_index")?.into(),
            timestamp: reader.read_u32("timelock_unlock_condition.timestamp")?.into(),
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::rand_number;

    impl TimelockUnlockCondition {
        /// Generates a random [`TimelockUnlockCondition`].
        pub fn rand() -> Self {
            Self {
                milestone_index: rand_number::<u32>().into(),
                timestamp: rand_number::<u32>().into(),
            }
        }
    }
}
