// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    block::Address,
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// An unlock condition naming the state controller of an alias output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateControllerAddressUnlockCondition {
    /// The address of the state controller.
    pub address: Address,
}

impl StateControllerAddressUnlockCondition {
    /// The kind tag of a [`StateControllerAddressUnlockCondition`].
    pub const KIND: u8 = 4;
}

impl WireSerialize for StateControllerAddressUnlockCondition {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("state_controller_address_unlock_condition.kind", Self::KIND)?;
        self.address.wire_serialize(writer)
    }
}

impl WireDeserialize for StateControllerAddressUnlockCondition {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("state_controller_address_unlock_condition", 1 + Address::MIN_LENGTH)?;
        reader.read_kind_u8("state_controller_address_unlock_condition.kind", Self::KIND)?;
        Ok(Self {
            address: Address::wire_deserialize(reader)?,
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;

    impl StateControllerAddressUnlockCondition {
        /// Generates a random [`StateControllerAddressUnlockCondition`].
        pub fn rand() -> Self {
            Self {
                address: Address::rand(),
            }
        }
    }
}
