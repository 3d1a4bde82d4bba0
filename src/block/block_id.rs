// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    util::{bytify, hex_to_array},
};

/// The id of a block: the BLAKE2b-256 hash of its serialized bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct BlockId(#[serde(with = "bytify")] pub [u8; Self::LENGTH]);

impl BlockId {
    /// The number of bytes of a serialized [`BlockId`].
    pub const LENGTH: usize = 32;

    /// Converts the [`BlockId`] to its `0x`-prefixed hex representation.
    pub fn to_hex(&self) -> String {
        prefix_hex::encode(self.0.as_ref())
    }
}

impl FromStr for BlockId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(hex_to_array(s)?))
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl WireSerialize for BlockId {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_bytes("block_id", &self.0)
    }
}

impl WireDeserialize for BlockId {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        Ok(Self(reader.read_array("block_id")?))
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::{rand_bytes_array, rand_number_range};

    impl BlockId {
        /// Generates a random [`BlockId`].
        pub fn rand() -> Self {
            Self(rand_bytes_array())
        }

        /// Generates a random parent list: 1 to 8 unique ids in ascending
        /// lexicographic order.
        pub fn rand_parents() -> Box<[Self]> {
            let mut parents = std::iter::repeat_with(Self::rand)
                .take(rand_number_range(1..=8))
                .collect::<Vec<_>>();
            parents.sort();
            parents.dedup();
            parents.into_boxed_slice()
        }
    }
}

#[cfg(all(test, feature = "rand"))]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_block_id_hex() {
        let block_id = BlockId::rand();
        assert_eq!(block_id, block_id.to_hex().parse().unwrap());
    }

    #[test]
    fn test_block_id_unprefixed_hex() {
        let block_id = BlockId::rand();
        assert_eq!(block_id, block_id.to_hex().trim_start_matches("0x").parse().unwrap());
    }
}
