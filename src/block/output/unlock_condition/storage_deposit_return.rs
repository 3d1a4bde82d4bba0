// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    block::{output::OutputAmount, Address},
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// An unlock condition requiring the spender to return the storage deposit
/// to the given address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageDepositReturnUnlockCondition {
    /// The address the amount must be returned to.
    pub return_address: Address,
    /// The amount that must be returned.
    pub amount: OutputAmount,
}

impl StorageDepositReturnUnlockCondition {
    /// The kind tag of a [`StorageDepositReturnUnlockCondition`].
    pub const KIND: u8 = 1;
}

impl WireSerialize for StorageDepositReturnUnlockCondition {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("storage_deposit_return_unlock_condition.kind", Self::KIND)?;
        self.return_address.wire_serialize(writer)?;
        writer.write_u64("storage_deposit_return_unlock_condition.amount", self.amount.0)
    }
}

impl WireDeserialize for StorageDepositReturnUnlockCondition {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("storage_deposit_return_unlock_condition", 1 + Address::MIN_LENGTH + 8)?;
        reader.read_kind_u8("storage_deposit_return_unlock_condition.kind", Self::KIND)?;
        Ok(Self {
            return_address: Address::wire_deserialize(reader)?,
            amount: OutputAmount(reader.read_u64("storage_deposit_return_unlock_condition.amount")?),
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;

    impl StorageDepositReturnUnlockCondition {
        /// Generates a random [`StorageDepositReturnUnlockCondition`].
        pub fn rand() -> Self {
            Self {
                return_address: Address::rand(),
                amount: OutputAmount::rand(),
            }
        }
    }
}
