// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the [`TaggedDataPayload`].

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{
    codec::{self, ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// An arbitrary blob of data with a short routing tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedDataPayload {
    /// The tag of the payload.
    #[serde(with = "serde_bytes")]
    pub tag: Box<[u8]>,
    /// The data of the payload.
    #[serde(with = "serde_bytes")]
    pub data: Box<[u8]>,
}

impl TaggedDataPayload {
    /// The kind tag of a [`TaggedDataPayload`].
    pub const KIND: u32 = 5;
    /// The allowed length of a tag.
    pub const TAG_LENGTH_RANGE: RangeInclusive<usize> = 1..=64;
}

impl WireSerialize for TaggedDataPayload {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u32("tagged_data.kind", Self::KIND)?;
        codec::verify_count("tagged_data.tag", self.tag.len(), Some(&Self::TAG_LENGTH_RANGE))?;
        writer.write_u8("tagged_data.tag_length", self.tag.len() as u8)?;
        writer.write_bytes("tagged_data.tag", &self.tag)?;
        writer.write_u32("tagged_data.data_length", self.data.len() as u32)?;
        writer.write_bytes("tagged_data.data", &self.data)
    }
}

impl WireDeserialize for TaggedDataPayload {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.read_kind_u32("tagged_data.kind", Self::KIND)?;
        let tag_length = reader.read_u8("tagged_data.tag_length")? as usize;
        codec::verify_count("tagged_data.tag", tag_length, Some(&Self::TAG_LENGTH_RANGE))?;
        let tag = reader.read_bytes("tagged_data.tag", tag_length)?.into();
        let data_length = reader.read_u32("tagged_data.data_length")? as usize;
        Ok(Self {
            tag,
            data: reader.read_bytes("tagged_data.data", data_length)?.into(),
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::{rand_bytes, rand_number_range};

    impl TaggedDataPayload {
        /// Generates a random [`TaggedDataPayload`].
        pub fn rand() -> Self {
            Self {
                tag: rand_bytes(rand_number_range(Self::TAG_LENGTH_RANGE)).into_boxed_slice(),
                data: rand_bytes(rand_number_range(0..256)).into_boxed_slice(),
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
    fn test_tagged_data_round_trip() {
        let payload = TaggedDataPayload::rand();
        let bytes = to_bytes(&payload).unwrap();
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(payload, TaggedDataPayload::wire_deserialize(&mut reader).unwrap());
        assert_eq!(reader.remaining_len(), 0);
    }

    #[test]
    fn test_tag_length_bounds() {
        let payload = TaggedDataPayload {
            tag: Box::new([]),
            data: Box::new([1, 2, 3]),
        };
        assert_eq!(
            to_bytes(&payload),
            Err(Error::CountOutOfBounds {
                field: "tagged_data.tag",
                count: 0,
                min: 1,
                max: 64,
            })
        );

        let payload = TaggedDataPayload {
            tag: vec![0; 65].into_boxed_slice(),
            data: Box::new([]),
        };
        assert!(matches!(to_bytes(&payload), Err(Error::CountOutOfBounds { count: 65, .. })));
    }

    #[test]
    fn test_tagged_data_layout() {
        let payload = TaggedDataPayload {
            tag: Box::new([0xaa, 0xbb]),
            data: Box::new([0x01]),
        };
        let bytes = to_bytes(&payload).unwrap();
        assert_eq!(
            bytes,
            vec![0x05, 0x00, 0x00, 0x00, 0x02, 0xaa, 0xbb, 0x01, 0x00, 0x00, 0x00, 0x01]
        );
    }
}
