// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the [`Unlock`] types.

use serde::{Deserialize, Serialize};

use super::Signature;
use crate::{
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// The different types of [`Unlock`]s.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Unlock {
    /// A signature unlock.
    Signature {
        /// The [`Signature`] of the unlock.
        signature: Signature,
    },
    /// A reference unlock.
    Reference {
        /// The index of the unlock.
        index: u16,
    },
    /// An alias unlock.
    Alias {
        /// The index of the unlock.
        index: u16,
    },
    /// An NFT unlock.
    Nft {
        /// The index of the unlock.
        index: u16,
    },
}

impl Unlock {
    /// The kind tag of a signature [`Unlock`].
    pub const SIGNATURE_KIND: u8 = 0;
    /// The kind tag of a reference [`Unlock`].
    pub const REFERENCE_KIND: u8 = 1;
    /// The kind tag of an alias [`Unlock`].
    pub const ALIAS_KIND: u8 = 2;
    /// The kind tag of an NFT [`Unlock`].
    pub const NFT_KIND: u8 = 3;

    /// The smallest serialized unlock: a kind tag plus a `u16` index.
    pub(crate) const MIN_LENGTH: usize = 3;
}

impl WireSerialize for Unlock {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        match self {
            Self::Signature { signature } => {
                writer.write_u8("signature_unlock.kind", Self::SIGNATURE_KIND)?;
                signature.wire_serialize(writer)
            }
            Self::Reference { index } => {
                writer.write_u8("reference_unlock.kind", Self::REFERENCE_KIND)?;
                writer.write_u16("reference_unlock.reference", *index)
            }
            Self::Alias { index } => {
                writer.write_u8("alias_unlock.kind", Self::ALIAS_KIND)?;
                writer.write_u16("alias_unlock.reference", *index)
            }
            Self::Nft { index } => {
                writer.write_u8("nft_unlock.kind", Self::NFT_KIND)?;
                writer.write_u16("nft_unlock.reference", *index)
            }
        }
    }
}

impl WireDeserialize for Unlock {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("unlock", Self::MIN_LENGTH)?;
        Ok(match reader.peek_u8("unlock.kind")? {
            Self::SIGNATURE_KIND => {
                reader.read_kind_u8("signature_unlock.kind", Self::SIGNATURE_KIND)?;
                Self::Signature {
                    signature: Signature::wire_deserialize(reader)?,
                }
            }
            Self::REFERENCE_KIND => {
                reader.read_kind_u8("reference_unlock.kind", Self::REFERENCE_KIND)?;
                Self::Reference {
                    index: reader.read_u16("reference_unlock.reference")?,
                }
            }
            Self::ALIAS_KIND => {
                reader.read_kind_u8("alias_unlock.kind", Self::ALIAS_KIND)?;
                Self::Alias {
                    index: reader.read_u16("alias_unlock.reference")?,
                }
            }
            Self::NFT_KIND => {
                reader.read_kind_u8("nft_unlock.kind", Self::NFT_KIND)?;
                Self::Nft {
                    index: reader.read_u16("nft_unlock.reference")?,
                }
            }
            kind => {
                return Err(Error::UnrecognizedKind {
                    field: "unlock.kind",
                    kind: kind as u32,
                });
            }
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::rand_number;

    impl Unlock {
        /// Generates a random signature [`Unlock`].
        pub fn rand_signature() -> Self {
            Self::Signature {
                signature: Signature::rand(),
            }
        }

        /// Generates a random reference [`Unlock`].
        pub fn rand_reference() -> Self {
            Self::Reference { index: rand_number() }
        }

        /// Generates a random alias [`Unlock`].
        pub fn rand_alias() -> Self {
            Self::Alias { index: rand_number() }
        }

        /// Generates a random nft [`Unlock`].
        pub fn rand_nft() -> Self {
            Self::Nft { index: rand_number() }
        }
    }
}
