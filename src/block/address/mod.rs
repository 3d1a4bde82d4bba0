// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the [`Address`] types.

mod alias;
mod ed25519;
mod nft;

use serde::{Deserialize, Serialize};

pub use self::{alias::AliasAddress, ed25519::Ed25519Address, nft::NftAddress};
use crate::{
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// The different types of addresses.
///
/// Externally tagged over serde: the variants are bare byte newtypes, so an
/// internal tag field has no map to live in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(rename_all = "snake_case")]
pub enum Address {
    /// An Ed25519 address.
    Ed25519(Ed25519Address),
    /// An alias address.
    Alias(AliasAddress),
    /// An NFT address.
    Nft(NftAddress),
}

impl Address {
    /// The smallest serialized address: a kind tag plus a 20-byte id.
    pub(crate) const MIN_LENGTH: usize = 21;

    /// Returns the kind tag of the address.
    pub fn kind(&self) -> u8 {
        match self {
            Self::Ed25519(_) => Ed25519Address::KIND,
            Self::Alias(_) => AliasAddress::KIND,
            Self::Nft(_) => NftAddress::KIND,
        }
    }
}

impl WireSerialize for Address {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        match self {
            Self::Ed25519(a) => a.wire_serialize(writer),
            Self::Alias(a) => a.wire_serialize(writer),
            Self::Nft(a) => a.wire_serialize(writer),
        }
    }
}

impl WireDeserialize for Address {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("address", Self::MIN_LENGTH)?;
        Ok(match reader.peek_u8("address.kind")? {
            Ed25519Address::KIND => Self::Ed25519(Ed25519Address::wire_deserialize(reader)?),
            AliasAddress::KIND => Self::Alias(AliasAddress::wire_deserialize(reader)?),
            NftAddress::KIND => Self::Nft(NftAddress::wire_deserialize(reader)?),
            kind => {
                return Err(Error::UnrecognizedKind {
                    field: "address.kind",
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

    impl Address {
        /// Generates a random [`Address`].
        pub fn rand() -> Self {
            match rand_number_range(0..3) {
                0 => Self::rand_ed25519(),
                1 => Self::rand_alias(),
                2 => Self::rand_nft(),
                _ => unreachable!(),
            }
        }

        /// Generates a random ed25519 [`Address`].
        pub fn rand_ed25519() -> Self {
            Self::Ed25519(Ed25519Address::rand())
        }

        /// Generates a random alias [`Address`].
        pub fn rand_alias() -> Self {
            Self::Alias(AliasAddress::rand())
        }

        /// Generates a random nft [`Address`].
        pub fn rand_nft() -> Self {
            Self::Nft(NftAddress::rand())
        }
    }
}

#[cfg(all(test, feature = "rand"))]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::codec::to_bytes;

    #[test]
    fn test_address_round_trip() {
        for address in [Address::rand_ed25519(), Address::rand_alias(), Address::rand_nft()] {
            let bytes = to_bytes(&address).unwrap();
            let mut reader = ReadCursor::new(&bytes);
            assert_eq!(address, Address::wire_deserialize(&mut reader).unwrap());
            assert_eq!(reader.remaining_len(), 0);
        }
    }

    #[test]
    fn test_address_unrecognized_kind() {
        let mut bytes = to_bytes(&Address::rand_ed25519()).unwrap();
        bytes[0] = 7;
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(
            Address::wire_deserialize(&mut reader),
            Err(Error::UnrecognizedKind {
                field: "address.kind",
                kind: 7,
            })
        );
    }

    #[test]
    fn test_address_truncation() {
        let bytes = to_bytes(&Address::rand_ed25519()).unwrap();
        let mut reader = ReadCursor::new(&bytes[..bytes.len() - 1]);
        assert!(matches!(
            Address::wire_deserialize(&mut reader),
            Err(Error::Truncated { .. })
        ));
    }
}
