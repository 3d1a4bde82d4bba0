// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the [`UnlockCondition`] types.

mod address;
mod expiration;
mod governor_address;
mod immutable_alias_address;
mod state_controller_address;
mod storage_deposit_return;
mod timelock;

use serde::{Deserialize, Serialize};

pub use self::{
    address::AddressUnlockCondition, expiration::ExpirationUnlockCondition,
    governor_address::GovernorAddressUnlockCondition, immutable_alias_address::ImmutableAliasAddressUnlockCondition,
    state_controller_address::StateControllerAddressUnlockCondition,
    storage_deposit_return::StorageDepositReturnUnlockCondition, timelock::TimelockUnlockCondition,
};
use crate::{
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// The different unlock conditions that can be attached to an output,
/// governing who may spend it and under what circumstances.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum UnlockCondition {
    /// An address unlock condition.
    Address(AddressUnlockCondition),
    /// A storage deposit return unlock condition.
    StorageDepositReturn(StorageDepositReturnUnlockCondition),
    /// A timelock unlock condition.
    Timelock(TimelockUnlockCondition),
    /// An expiration unlock condition.
    Expiration(ExpirationUnlockCondition),
    /// A state controller address unlock condition.
    StateControllerAddress(StateControllerAddressUnlockCondition),
    /// A governor address unlock condition.
    GovernorAddress(GovernorAddressUnlockCondition),
    /// An immutable alias address unlock condition.
    ImmutableAliasAddress(ImmutableAliasAddressUnlockCondition),
}

impl UnlockCondition {
    /// The smallest serialized unlock condition: a timelock.
    pub(crate) const MIN_LENGTH: usize = TimelockUnlockCondition::LENGTH;

    /// Returns the kind tag of the unlock condition.
    pub fn kind(&self) -> u8 {
        match self {
            Self::Address(_) => AddressUnlockCondition::KIND,
            Self::StorageDepositReturn(_) => StorageDepositReturnUnlockCondition::KIND,
            Self::Timelock(_) => TimelockUnlockCondition::KIND,
            Self::Expiration(_) => ExpirationUnlockCondition::KIND,
            Self::StateControllerAddress(_) => StateControllerAddressUnlockCondition::KIND,
            Self::GovernorAddress(_) => GovernorAddressUnlockCondition::KIND,
            Self::ImmutableAliasAddress(_) => ImmutableAliasAddressUnlockCondition::KIND,
        }
    }
}

impl WireSerialize for UnlockCondition {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        match self {
            Self::Address(u) => u.wire_serialize(writer),
            Self::StorageDepositReturn(u) => u.wire_serialize(writer),
            Self::Timelock(u) => u.wire_serialize(writer),
            Self::Expiration(u) => u.wire_serialize(writer),
            Self::StateControllerAddress(u) => u.wire_serialize(writer),
            Self::GovernorAddress(u) => u.wire_serialize(writer),
            Self::ImmutableAliasAddress(u) => u.wire_serialize(writer),
        }
    }
}

impl WireDeserialize for UnlockCondition {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("unlock_condition", Self::MIN_LENGTH)?;
        Ok(match reader.peek_u8("unlock_condition.kind")? {
            AddressUnlockCondition::KIND => AddressUnlockCondition::wire_deserialize(reader)?.into(),
            StorageDepositReturnUnlockCondition::KIND => {
                StorageDepositReturnUnlockCondition::wire_deserialize(reader)?.into()
            }
            TimelockUnlockCondition::KIND => TimelockUnlockCondition::wire_deserialize(reader)?.into(),
            ExpirationUnlockCondition::KIND => ExpirationUnlockCondition::wire_deserialize(reader)?.into(),
            StateControllerAddressUnlockCondition::KIND => {
                StateControllerAddressUnlockCondition::wire_deserialize(reader)?.into()
            }
            GovernorAddressUnlockCondition::KIND => GovernorAddressUnlockCondition::wire_deserialize(reader)?.into(),
            ImmutableAliasAddressUnlockCondition::KIND => {
                ImmutableAliasAddressUnlockCondition::wire_deserialize(reader)?.into()
            }
            kind => {
                return Err(Error::UnrecognizedKind {
                    field: "unlock_condition.kind",
                    kind: kind as u32,
                });
            }
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::rand_number_range;

    impl UnlockCondition {
        /// Generates a random [`UnlockCondition`].
        pub fn rand() -> Self {
            match rand_number_range(0..7) {
                0 => AddressUnlockCondition::rand().into(),
                1 => StorageDepositReturnUnlockCondition::rand().into(),
                2 => TimelockUnlockCondition::rand().into(),
                3 => ExpirationUnlockCondition::rand().into(),
                4 => StateControllerAddressUnlockCondition::rand().into(),
                5 => GovernorAddressUnlockCondition::rand().into(),
                6 => ImmutableAliasAddressUnlockCondition::rand().into(),
                _ => unreachable!(),
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
    fn test_unlock_condition_round_trip() {
        for unlock_condition in [
            UnlockCondition::from(AddressUnlockCondition::rand()),
            StorageDepositReturnUnlockCondition::rand().into(),
            TimelockUnlockCondition::rand().into(),
            ExpirationUnlockCondition::rand().into(),
            StateControllerAddressUnlockCondition::rand().into(),
            GovernorAddressUnlockCondition::rand().into(),
            ImmutableAliasAddressUnlockCondition::rand().into(),
        ] {
            let bytes = to_bytes(&unlock_condition).unwrap();
            assert_eq!(bytes[0], unlock_condition.kind());
            let mut reader = ReadCursor::new(&bytes);
            assert_eq!(unlock_condition, UnlockCondition::wire_deserialize(&mut reader).unwrap());
            assert_eq!(reader.remaining_len(), 0);
        }
    }

    #[test]
    fn test_unlock_condition_unrecognized_kind() {
        let mut bytes = to_bytes(&UnlockCondition::from(TimelockUnlockCondition::rand())).unwrap();
        bytes[0] = 9;
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(
            UnlockCondition::wire_deserialize(&mut reader),
            Err(Error::UnrecognizedKind {
                field: "unlock_condition.kind",
                kind: 9,
            })
        );
    }
}
