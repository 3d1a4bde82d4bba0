// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the [`Block`] type and every entity it embeds.

/// Module containing the address types.
pub mod address;
/// Module containing the block id type.
pub mod block_id;
/// Module containing the input types.
pub mod input;
/// Module containing the output types.
pub mod output;
/// Module containing the payload types.
pub mod payload;
/// Module containing the signature types.
pub mod signature;
/// Module containing the unlock types.
pub mod unlock;

pub(crate) mod validation;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::trace;

pub use self::{
    address::Address, block_id::BlockId, input::Input, output::Output, payload::Payload, signature::Signature,
    unlock::Unlock,
};
use crate::{
    codec::{self, ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// A block: the envelope the Stardust network gossips. It attaches an
/// optional payload to the Tangle by referencing one to eight parent blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// The id of the network the block was issued to.
    #[serde(with = "crate::util::stringify")]
    pub network_id: u64,
    /// The ids of the blocks the block references, in ascending lexicographic
    /// order and free of duplicates.
    pub parents: Box<[BlockId]>,
    /// The optional payload of the block.
    pub payload: Option<Payload>,
    /// The proof-of-work nonce.
    #[serde(with = "crate::util::stringify")]
    pub nonce: u64,
}

impl Block {
    /// The allowed number of parents.
    pub const PARENT_COUNT_RANGE: RangeInclusive<usize> = 1..=8;

    /// Serializes the [`Block`] to its wire bytes, validating the parent
    /// list on the way out.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let bytes = codec::to_bytes(self)?;
        trace!(len = bytes.len(), "serialized block");
        Ok(bytes)
    }

    /// Deserializes a [`Block`] from its wire bytes, consuming the whole
    /// buffer. Trailing bytes after the nonce are an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = ReadCursor::new(bytes);
        let block = Self::wire_deserialize(&mut reader)?;
        if reader.has_remaining(1) {
            return Err(Error::TrailingBytes {
                field: "block",
                remaining: reader.remaining_len(),
            });
        }
        trace!(len = bytes.len(), "deserialized block");
        Ok(block)
    }
}

impl WireSerialize for Block {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u64("block.network_id", self.network_id)?;
        let parent_keys = self.parents.iter().map(|parent| parent.0).collect::<Vec<_>>();
        validation::verify_sorted_unique("block.parents", &parent_keys)?;
        codec::write_list_u8(writer, "block.parents", &self.parents, Some(&Self::PARENT_COUNT_RANGE))?;
        payload::write_optional_payload(writer, "block.payload", self.payload.as_ref())?;
        writer.write_u64("block.nonce", self.nonce)
    }
}

impl WireDeserialize for Block {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        Ok(Self {
            network_id: reader.read_u64("block.network_id")?,
            parents: codec::read_list_u8(reader, "block.parents", Some(&Self::PARENT_COUNT_RANGE))?,
            payload: payload::read_optional_payload(reader, "block.payload")?,
            nonce: reader.read_u64("block.nonce")?,
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::rand_number;

    impl Block {
        /// Generates a random [`Block`] with no payload.
        pub fn rand_no_payload() -> Self {
            Self {
                network_id: rand_number(),
                parents: BlockId::rand_parents(),
                payload: None,
                nonce: rand_number(),
            }
        }

        /// Generates a random [`Block`] carrying a transaction payload.
        pub fn rand_transaction() -> Self {
            Self {
                payload: Some(Payload::rand_transaction()),
                ..Self::rand_no_payload()
            }
        }

        /// Generates a random [`Block`] carrying a milestone payload.
        pub fn rand_milestone() -> Self {
            Self {
                payload: Some(Payload::rand_milestone()),
                ..Self::rand_no_payload()
            }
        }

        /// Generates a random [`Block`] carrying a tagged data payload.
        pub fn rand_tagged_data() -> Self {
            Self {
                payload: Some(Payload::rand_tagged_data()),
                ..Self::rand_no_payload()
            }
        }
    }
}

#[cfg(all(test, feature = "rand"))]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_block_round_trip() {
        for block in [
            Block::rand_no_payload(),
            Block::rand_transaction(),
            Block::rand_milestone(),
            Block::rand_tagged_data(),
        ] {
            let bytes = block.to_bytes().unwrap();
            assert_eq!(block, Block::from_bytes(&bytes).unwrap());
        }
    }

    #[test]
    fn test_trailing_bytes_are_rejected() {
        let mut bytes = Block::rand_no_payload().to_bytes().unwrap();
        bytes.push(0x00);
        assert_eq!(
            Block::from_bytes(&bytes),
            Err(Error::TrailingBytes {
                field: "block",
                remaining: 1,
            })
        );
    }

    #[test]
    fn test_unsorted_parents_are_rejected_at_encode() {
        let block = Block {
            parents: Box::new([BlockId([1; 32]), BlockId([0; 32])]),
            ..Block::rand_no_payload()
        };
        assert_eq!(
            block.to_bytes(),
            Err(Error::UnsortedEntries { field: "block.parents" })
        );
    }

    #[test]
    fn test_duplicate_parents_are_rejected_at_encode() {
        let block = Block {
            parents: Box::new([BlockId([0; 32]), BlockId([0; 32])]),
            ..Block::rand_no_payload()
        };
        assert_eq!(
            block.to_bytes(),
            Err(Error::DuplicateEntries { field: "block.parents" })
        );
    }

    #[test]
    fn test_parent_count_bounds() {
        let block = Block {
            parents: Box::new([]),
            ..Block::rand_no_payload()
        };
        assert_eq!(
            block.to_bytes(),
            Err(Error::CountOutOfBounds {
                field: "block.parents",
                count: 0,
                min: 1,
                max: 8,
            })
        );
    }

    #[test]
    fn test_block_serde_round_trip() {
        let block = Block::rand_transaction();
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(block, serde_json::from_str(&json).unwrap());
    }
}
