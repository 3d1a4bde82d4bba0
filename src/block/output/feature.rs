// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    block::Address,
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// The different feature block variants that can be attached to an output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Feature {
    /// The sender feature.
    Sender {
        /// The address associated with the feature.
        address: Address,
    },
    /// The issuer feature.
    Issuer {
        /// The address associated with the feature.
        address: Address,
    },
    /// The metadata feature.
    Metadata {
        /// The data of the feature.
        #[serde(with = "serde_bytes")]
        data: Box<[u8]>,
    },
    /// The tag feature.
    Tag {
        /// The data of the feature.
        #[serde(with = "serde_bytes")]
        tag: Box<[u8]>,
    },
}

impl Feature {
    /// The kind tag of a sender [`Feature`].
    pub const SENDER_KIND: u8 = 0;
    /// The kind tag of an issuer [`Feature`].
    pub const ISSUER_KIND: u8 = 1;
    /// The kind tag of a metadata [`Feature`].
    pub const METADATA_KIND: u8 = 2;
    /// The kind tag of a tag [`Feature`].
    pub const TAG_KIND: u8 = 3;

    /// The allowed byte length of a tag: 1 to 64 bytes.
    pub const TAG_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 1..=64;

    /// A floor for any serialized feature: a kind tag plus a length byte.
    pub(crate) const MIN_LENGTH: usize = 2;
}

impl WireSerialize for Feature {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        match self {
            Self::Sender { address } => {
                writer.write_u8("sender_feature.kind", Self::SENDER_KIND)?;
                address.wire_serialize(writer)
            }
            Self::Issuer { address } => {
                writer.write_u8("issuer_feature.kind", Self::ISSUER_KIND)?;
                address.wire_serialize(writer)
            }
            Self::Metadata { data } => {
                writer.write_u8("metadata_feature.kind", Self::METADATA_KIND)?;
                writer.write_u32("metadata_feature.data_length", data.len() as u32)?;
                writer.write_bytes("metadata_feature.data", data)
            }
            Self::Tag { tag } => {
                crate::codec::verify_count("tag_feature.tag", tag.len(), Some(&Self::TAG_LENGTH_RANGE))?;
                writer.write_u8("tag_feature.kind", Self::TAG_KIND)?;
                writer.write_u8("tag_feature.tag_length", tag.len() as u8)?;
                writer.write_bytes("tag_feature.tag", tag)
            }
        }
    }
}

impl WireDeserialize for Feature {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("feature", Self::MIN_LENGTH)?;
        Ok(match reader.peek_u8("feature.kind")? {
            Self::SENDER_KIND => {
                reader.read_kind_u8("sender_feature.kind", Self::SENDER_KIND)?;
                Self::Sender {
                    address: Address::wire_deserialize(reader)?,
                }
            }
            Self::ISSUER_KIND => {
                reader.read_kind_u8("issuer_feature.kind", Self::ISSUER_KIND)?;
                Self::Issuer {
                    address: Address::wire_deserialize(reader)?,
                }
            }
            Self::METADATA_KIND => {
                reader.read_kind_u8("metadata_feature.kind", Self::METADATA_KIND)?;
                let length = reader.read_u32("metadata_feature.data_length")? as usize;
                Self::Metadata {
                    data: reader.read_bytes("metadata_feature.data", length)?.into(),
                }
            }
            Self::TAG_KIND => {
                reader.read_kind_u8("tag_feature.kind", Self::TAG_KIND)?;
                let length = reader.read_u8("tag_feature.tag_length")? as usize;
                crate::codec::verify_count("tag_feature.tag", length, Some(&Self::TAG_LENGTH_RANGE))?;
                Self::Tag {
                    tag: reader.read_bytes("tag_feature.tag", length)?.into(),
                }
            }
            kind => {
                return Err(Error::UnrecognizedKind {
                    field: "feature.kind",
                    kind: kind as u32,
                });
            }
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::{rand_bytes, rand_number_range};

    impl Feature {
        /// Generates a random sender [`Feature`].
        pub fn rand_sender() -> Self {
            Self::Sender {
                address: Address::rand(),
            }
        }

        /// Generates a random issuer [`Feature`].
        pub fn rand_issuer() -> Self {
            Self::Issuer {
                address: Address::rand(),
            }
        }

        /// Generates a random metadata [`Feature`].
        pub fn rand_metadata() -> Self {
            Self::Metadata {
                data: rand_bytes(rand_number_range(1..=64)).into_boxed_slice(),
            }
        }

        /// Generates a random tag [`Feature`].
        pub fn rand_tag() -> Self {
            Self::Tag {
                tag: rand_bytes(rand_number_range(Self::TAG_LENGTH_RANGE)).into_boxed_slice(),
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
    fn test_feature_round_trip() {
        for feature in [
            Feature::rand_sender(),
            Feature::rand_issuer(),
            Feature::rand_metadata(),
            Feature::rand_tag(),
        ] {
            let bytes = to_bytes(&feature).unwrap();
            let mut reader = ReadCursor::new(&bytes);
            assert_eq!(feature, Feature::wire_deserialize(&mut reader).unwrap());
            assert_eq!(reader.remaining_len(), 0);
        }
    }

    #[test]
    fn test_tag_length_bounds() {
        for tag in [vec![], vec![0u8; 65]] {
            let feature = Feature::Tag {
                tag: tag.into_boxed_slice(),
            };
            assert!(matches!(to_bytes(&feature), Err(Error::CountOutOfBounds { .. })));
        }
    }
}
