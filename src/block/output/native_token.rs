// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::{
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    util::{bytify, hex_to_array},
};

/// The id of a native token: the 26-byte id of the foundry that minted it
/// plus a 12-byte token tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct TokenId(#[serde(with = "bytify")] pub [u8; Self::LENGTH]);

impl TokenId {
    /// The number of bytes of a serialized [`TokenId`].
    pub const LENGTH: usize = 38;

    /// Converts the [`TokenId`] to its `0x`-prefixed hex representation.
    pub fn to_hex(&self) -> String {
        prefix_hex::encode(self.0.as_ref())
    }
}

impl FromStr for TokenId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(hex_to_array(s)?))
    }
}

/// A secondary asset amount attached to an output.
///
/// The amount occupies a full 256-bit slot on the wire and is held as a
/// [`U256`] in memory so values near the upper bound never pass through a
/// lossy machine-word or floating-point type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeToken {
    /// The id of the token.
    pub token_id: TokenId,
    /// The amount of the token.
    #[serde(with = "crate::util::u256_stringify")]
    pub amount: U256,
}

impl NativeToken {
    pub(crate) const LENGTH: usize = TokenId::LENGTH + 32;
}

impl WireSerialize for NativeToken {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_bytes("native_token.token_id", &self.token_id.0)?;
        writer.write_u256("native_token.amount", &self.amount)
    }
}

impl WireDeserialize for NativeToken {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("native_token", Self::LENGTH)?;
        Ok(Self {
            token_id: TokenId(reader.read_array("native_token.token_id")?),
            amount: reader.read_u256("native_token.amount")?,
        })
    }
}

/// The different token scheme kinds. `Simple` is the only scheme of the
/// current protocol and carries no fields; the tag exists so future schemes
/// can be added without changing the surrounding layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TokenScheme {
    /// The simple token scheme.
    Simple,
}

impl TokenScheme {
    /// The kind tag of the simple [`TokenScheme`].
    pub const SIMPLE_KIND: u8 = 0;
}

impl WireSerialize for TokenScheme {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        match self {
            Self::Simple => writer.write_u8("token_scheme.kind", Self::SIMPLE_KIND),
        }
    }
}

impl WireDeserialize for TokenScheme {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        match reader.peek_u8("token_scheme.kind")? {
            Self::SIMPLE_KIND => {
                reader.read_kind_u8("token_scheme.kind", Self::SIMPLE_KIND)?;
                Ok(Self::Simple)
            }
            kind => Err(Error::UnrecognizedKind {
                field: "token_scheme.kind",
                kind: kind as u32,
            }),
        }
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::{rand_bytes_array, rand_number};

    impl TokenId {
        /// Generates a random [`TokenId`].
        pub fn rand() -> Self {
            Self(rand_bytes_array())
        }
    }

    impl NativeToken {
        /// Generates a random [`NativeToken`].
        pub fn rand() -> Self {
            Self {
                token_id: TokenId::rand(),
                amount: U256::from(rand_number::<u128>()),
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
    fn test_native_token_round_trip() {
        let token = NativeToken::rand();
        let bytes = to_bytes(&token).unwrap();
        assert_eq!(bytes.len(), NativeToken::LENGTH);
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(token, NativeToken::wire_deserialize(&mut reader).unwrap());
    }

    #[test]
    fn test_max_amount_round_trip() {
        let token = NativeToken {
            token_id: TokenId::rand(),
            amount: U256::MAX,
        };
        let bytes = to_bytes(&token).unwrap();
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(token, NativeToken::wire_deserialize(&mut reader).unwrap());
    }

    #[test]
    fn test_native_token_serde_round_trip() {
        let token = NativeToken {
            token_id: TokenId::rand(),
            amount: U256::MAX,
        };
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(token, serde_json::from_str(&json).unwrap());
    }

    #[test]
    fn test_token_scheme_unrecognized_kind() {
        let mut reader = ReadCursor::new(&[1]);
        assert_eq!(
            TokenScheme::wire_deserialize(&mut reader),
            Err(Error::UnrecognizedKind {
                field: "token_scheme.kind",
                kind: 1,
            })
        );
    }
}
