// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the [`MilestonePayload`] and its essence.

mod milestone_id;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub use self::milestone_id::MilestoneId;
use super::{Payload, ReceiptPayload};
use crate::{
    block::{block_id::BlockId, signature::Signature, validation::verify_sorted_unique},
    codec::{self, ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    tangle::{MilestoneIndex, MilestoneTimestamp},
    util::bytify,
};

/// The essence of a milestone: the signed portion of the payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneEssence {
    /// The index of the milestone.
    pub index: MilestoneIndex,
    /// The Unix timestamp of the milestone.
    pub timestamp: MilestoneTimestamp,
    /// The id of the previous milestone.
    pub previous_milestone_id: MilestoneId,
    /// The blocks the milestone references.
    pub parents: Box<[BlockId]>,
    /// The merkle root of the blocks newly included by the milestone.
    #[serde(with = "bytify")]
    pub inclusion_merkle_root: [u8; Self::MERKLE_ROOT_LENGTH],
    /// The merkle root of the state mutations applied by the milestone.
    #[serde(with = "bytify")]
    pub applied_merkle_root: [u8; Self::MERKLE_ROOT_LENGTH],
    /// Arbitrary metadata attached by the coordinator.
    #[serde(with = "serde_bytes")]
    pub metadata: Box<[u8]>,
    /// The optional embedded receipt.
    pub receipt: Option<ReceiptPayload>,
}

impl MilestoneEssence {
    /// The number of bytes of a merkle root.
    pub const MERKLE_ROOT_LENGTH: usize = 32;
    /// The allowed number of parents.
    pub const PARENT_COUNT_RANGE: RangeInclusive<usize> = 1..=8;
}

impl WireSerialize for MilestoneEssence {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u32("milestone_essence.index", self.index.0)?;
        writer.write_u32("milestone_essence.timestamp", self.timestamp.0)?;
        writer.write_bytes("milestone_essence.previous_milestone_id", &self.previous_milestone_id.0)?;
        let parent_keys = self.parents.iter().map(|parent| parent.0).collect::<Vec<_>>();
        verify_sorted_unique("milestone_essence.parents", &parent_keys)?;
        codec::write_list_u8(writer, "milestone_essence.parents", &self.parents, Some(&Self::PARENT_COUNT_RANGE))?;
        writer.write_bytes("milestone_essence.inclusion_merkle_root", &self.inclusion_merkle_root)?;
        writer.write_bytes("milestone_essence.applied_merkle_root", &self.applied_merkle_root)?;
        writer.write_u32("milestone_essence.metadata_length", self.metadata.len() as u32)?;
        writer.write_bytes("milestone_essence.metadata", &self.metadata)?;
        match &self.receipt {
            Some(receipt) => super::write_prefixed(writer, "milestone_essence.receipt", receipt),
            None => writer.write_u32("milestone_essence.receipt", 0),
        }
    }
}

impl WireDeserialize for MilestoneEssence {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        let index = MilestoneIndex(reader.read_u32("milestone_essence.index")?);
        let timestamp = MilestoneTimestamp(reader.read_u32("milestone_essence.timestamp")?);
        let previous_milestone_id = MilestoneId(reader.read_array("milestone_essence.previous_milestone_id")?);
        let parents = codec::read_list_u8(reader, "milestone_essence.parents", Some(&Self::PARENT_COUNT_RANGE))?;
        let inclusion_merkle_root = reader.read_array("milestone_essence.inclusion_merkle_root")?;
        let applied_merkle_root = reader.read_array("milestone_essence.applied_merkle_root")?;
        let metadata_length = reader.read_u32("milestone_essence.metadata_length")? as usize;
        let metadata = reader.read_bytes("milestone_essence.metadata", metadata_length)?.into();
        let receipt = match super::read_optional_payload(reader, "milestone_essence.receipt")? {
            None => None,
            Some(Payload::Receipt(receipt)) => Some(*receipt),
            Some(payload) => {
                return Err(Error::UnexpectedPayloadKind {
                    field: "milestone_essence.receipt",
                    kind: payload.kind(),
                });
            }
        };
        Ok(Self {
            index,
            timestamp,
            previous_milestone_id,
            parents,
            inclusion_merkle_root,
            applied_merkle_root,
            metadata,
            receipt,
        })
    }
}

/// A payload carrying a coordinator milestone and its signatures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestonePayload {
    /// The essence of the milestone.
    pub essence: MilestoneEssence,
    /// The signatures over the essence.
    pub signatures: Box<[Signature]>,
}

impl MilestonePayload {
    /// The kind tag of a [`MilestonePayload`].
    pub const KIND: u32 = 7;
    /// The allowed number of signatures.
    pub const SIGNATURE_COUNT_RANGE: RangeInclusive<usize> = 1..=255;
}

impl WireSerialize for MilestonePayload {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u32("milestone.kind", Self::KIND)?;
        self.essence.wire_serialize(writer)?;
        codec::write_list_u8(writer, "milestone.signatures", &self.signatures, Some(&Self::SIGNATURE_COUNT_RANGE))
    }
}

impl WireDeserialize for MilestonePayload {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.read_kind_u32("milestone.kind", Self::KIND)?;
        Ok(Self {
            essence: MilestoneEssence::wire_deserialize(reader)?,
            signatures: codec::read_list_u8(reader, "milestone.signatures", Some(&Self::SIGNATURE_COUNT_RANGE))?,
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::{rand_bytes, rand_bytes_array, rand_number, rand_number_range};

    impl MilestoneEssence {
        /// Generates a random [`MilestoneEssence`].
        pub fn rand() -> Self {
            Self {
                index: MilestoneIndex(rand_number()),
                timestamp: MilestoneTimestamp(rand_number()),
                previous_milestone_id: MilestoneId::rand(),
                parents: BlockId::rand_parents(),
                inclusion_merkle_root: rand_bytes_array(),
                applied_merkle_root: rand_bytes_array(),
                metadata: rand_bytes(rand_number_range(0..64)).into_boxed_slice(),
                receipt: None,
            }
        }

        /// Generates a random [`MilestoneEssence`] carrying a receipt.
        pub fn rand_with_receipt() -> Self {
            Self {
                receipt: Some(ReceiptPayload::rand()),
                ..Self::rand()
            }
        }
    }

    impl MilestonePayload {
        /// Generates a random [`MilestonePayload`].
        pub fn rand() -> Self {
            Self {
                essence: MilestoneEssence::rand(),
                signatures: std::iter::repeat_with(Signature::rand)
                    .take(rand_number_range(1..4))
                    .collect(),
            }
        }

        /// Generates a random [`MilestonePayload`] carrying a receipt.
        pub fn rand_with_receipt() -> Self {
            Self {
                essence: MilestoneEssence::rand_with_receipt(),
                ..Self::rand()
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
    fn test_milestone_round_trip() {
        for payload in [MilestonePayload::rand(), MilestonePayload::rand_with_receipt()] {
            let bytes = to_bytes(&payload).unwrap();
            let mut reader = ReadCursor::new(&bytes);
            assert_eq!(payload, MilestonePayload::wire_deserialize(&mut reader).unwrap());
            assert_eq!(reader.remaining_len(), 0);
        }
    }

    #[test]
    fn test_milestone_requires_a_signature() {
        let payload = MilestonePayload {
            essence: MilestoneEssence::rand(),
            signatures: Box::new([]),
        };
        assert_eq!(
            to_bytes(&payload),
            Err(Error::CountOutOfBounds {
                field: "milestone.signatures",
                count: 0,
                min: 1,
                max: 255,
            })
        );
    }

    #[test]
    fn test_milestone_rejects_non_receipt_embedded_payload() {
        let essence = MilestoneEssence::rand();
        let mut writer = crate::codec::WriteCursor::new();
        writer.write_u32("index", essence.index.0).unwrap();
        writer.write_u32("timestamp", essence.timestamp.0).unwrap();
        writer.write_bytes("previous", &essence.previous_milestone_id.0).unwrap();
        writer.write_u8("parents", essence.parents.len() as u8).unwrap();
        for parent in essence.parents.iter() {
            writer.write_bytes("parent", &parent.0).unwrap();
        }
        writer.write_bytes("inclusion", &essence.inclusion_merkle_root).unwrap();
        writer.write_bytes("applied", &essence.applied_merkle_root).unwrap();
        writer.write_u32("metadata_length", 0).unwrap();
        // Plant a tagged data payload where only a receipt may appear.
        let tagged = to_bytes(&crate::block::payload::TaggedDataPayload {
            tag: Box::new([0xaa]),
            data: Box::new([]),
        })
        .unwrap();
        writer.write_u32("receipt", tagged.len() as u32).unwrap();
        writer.write_bytes("receipt", &tagged).unwrap();
        let bytes = writer.into_bytes();
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(
            MilestoneEssence::wire_deserialize(&mut reader),
            Err(Error::UnexpectedPayloadKind {
                field: "milestone_essence.receipt",
                kind: crate::block::payload::TaggedDataPayload::KIND,
            })
        );
    }

    #[test]
    fn test_unsorted_parents_are_rejected_at_encode() {
        let mut essence = MilestoneEssence::rand();
        essence.parents = Box::new([BlockId([1; 32]), BlockId([0; 32])]);
        assert_eq!(
            to_bytes(&essence),
            Err(Error::UnsortedEntries {
                field: "milestone_essence.parents"
            })
        );
    }
}
