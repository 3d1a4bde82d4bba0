// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    block::Address,
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// An unlock condition naming the governor of an alias output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernorAddressUnlockCondition {
    /// The address of the governor.
    pub address: Address,
}

impl GovernorAddressUnlockCondition {
    /// The kind tag of a [`GovernorAddressUnlockCondition`].
    pub const KIND: u8 = 5;
}

impl WireSerialize for GovernorAddressUnlockCondition {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("governor_address_unlock_condition.kind", Self::KIND)?;
        self.address.wire_serialize(writer)
    }
}

impl WireDeserialize for GovernorAddressUnlockCondition {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("governor_address_unlock_condition", 1 + Address::MIN_LENGTH)?;
        reader.read_kind_u8("governor_address_unlock_condition.kind", Self::KIND)?;
        Ok(Self {
            address: Address::wire_deserialize(reader)?,
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;

    impl GovernorAddressUnlockCondition {
        /// Generates a random [`GovernorAddressUnlockCondition`].
        pub fn rand() -> Self {
            Self {
                address: Address::rand(),
            }
        }
    }
}
