// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    block::address::AliasAddress,
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// An unlock condition permanently binding an output to an alias. Only an
/// alias address is valid here, so the embedded address is typed as such.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmutableAliasAddressUnlockCondition {
    /// The alias address that owns the output.
    pub address: AliasAddress,
}

impl ImmutableAliasAddressUnlockCondition {
    /// The kind tag of an [`ImmutableAliasAddressUnlockCondition`].
    pub const KIND: u8 = 6;
}

impl WireSerialize for ImmutableAliasAddressUnlockCondition {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("immutable_alias_address_unlock_condition.kind", Self::KIND)?;
        self.address.wire_serialize(writer)
    }
}

impl WireDeserialize for ImmutableAliasAddressUnlockCondition {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("immutable_alias_address_unlock_condition", 2)?;
        reader.read_kind_u8("immutable_alias_address_unlock_condition.kind", Self::KIND)?;
        Ok(Self {
            address: AliasAddress::wire_deserialize(reader)?,
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;

    impl ImmutableAliasAddressUnlockCondition {
        /// Generates a random [`ImmutableAliasAddressUnlockCondition`].
        pub fn rand() -> Self {
            Self {
                address: AliasAddress::rand(),
            }
        }
    }
}
