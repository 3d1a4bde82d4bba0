// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    util::{bytify, hex_to_array},
};

/// The id of a milestone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct MilestoneId(#[serde(with = "bytify")] pub [u8; Self::LENGTH]);

impl MilestoneId {
    /// The number of bytes of a serialized [`MilestoneId`].
    pub const LENGTH: usize = 32;

    /// Converts the [`MilestoneId`] to its `0x`-prefixed hex representation.
    pub fn to_hex(&self) -> String {
        prefix_hex::encode(self.0.as_ref())
    }
}

impl FromStr for MilestoneId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(hex_to_array(s)?))
    }
}

impl WireSerialize for MilestoneId {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_bytes("milestone_id", &self.0)
    }
}

impl WireDeserialize for MilestoneId {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        Ok(Self(reader.read_array("milestone_id")?))
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::rand_bytes_array;

    impl MilestoneId {
        /// Generates a random [`MilestoneId`].
        pub fn rand() -> Self {
            Self(rand_bytes_array())
        }
    }
}
