// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    block::Address,
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// An unlock condition gating an output on a plain address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressUnlockCondition {
    /// The address that must provide an unlock to spend the output.
    pub address: Address,
}

impl AddressUnlockCondition {
    /// The kind tag of an [`AddressUnlockCondition`].
    pub const KIND: u8 = 0;
}

impl WireSerialize for AddressUnlockCondition {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("address_unlock_condition.kind", Self::KIND)?;
        self.address.wire_serialize(writer)
    }
}

impl WireDeserialize for AddressUnlockCondition {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("address_unlock_condition", 1 + Address::MIN_LENGTH)?;
        reader.read_kind_u8("address_unlock_condition.kind", Self::KIND)?;
        Ok(Self {
            address: Address::wire_deserialize(reader)?,
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;

    impl AddressUnlockCondition {
        /// Generates a random [`AddressUnlockCondition`].
        pub fn rand() -> Self {
            Self {
                address: Address::rand(),
            }
        }
    }
}
