// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    util::bytify,
};

/// The different types of signatures. The byte strings are produced by an
/// external cryptographic module; the codec treats them as opaque slots of
/// fixed width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Signature {
    /// An Ed25519 signature.
    Ed25519 {
        /// The public key of the signature.
        #[serde(with = "bytify")]
        public_key: [u8; Self::PUBLIC_KEY_LENGTH],
        /// The signature bytes.
        #[serde(with = "bytify")]
        signature: [u8; Self::SIGNATURE_LENGTH],
    },
}

impl Signature {
    /// The kind tag of an Ed25519 [`Signature`].
    pub const ED25519_KIND: u8 = 0;
    /// The number of bytes of an Ed25519 public key.
    pub const PUBLIC_KEY_LENGTH: usize = 32;
    /// The number of bytes of an Ed25519 signature.
    pub const SIGNATURE_LENGTH: usize = 64;

    pub(crate) const MIN_LENGTH: usize = 1 + Self::PUBLIC_KEY_LENGTH + Self::SIGNATURE_LENGTH;
}

impl WireSerialize for Signature {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        match self {
            Self::Ed25519 { public_key, signature } => {
                writer.write_u8("signature.kind", Self::ED25519_KIND)?;
                writer.write_bytes("signature.public_key", public_key)?;
                writer.write_bytes("signature.signature", signature)
            }
        }
    }
}

impl WireDeserialize for Signature {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("signature", Self::MIN_LENGTH)?;
        match reader.peek_u8("signature.kind")? {
            Self::ED25519_KIND => {
                reader.read_kind_u8("signature.kind", Self::ED25519_KIND)?;
                Ok(Self::Ed25519 {
                    public_key: reader.read_array("signature.public_key")?,
                    signature: reader.read_array("signature.signature")?,
                })
            }
            kind => Err(Error::UnrecognizedKind {
                field: "signature.kind",
                kind: kind as u32,
            }),
        }
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::rand_bytes_array;

    impl Signature {
        /// Generates a random Ed25519 [`Signature`].
        pub fn rand() -> Self {
            Self::Ed25519 {
                public_key: rand_bytes_array(),
                signature: rand_bytes_array(),
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
    fn test_signature_round_trip() {
        let signature = Signature::rand();
        let bytes = to_bytes(&signature).unwrap();
        assert_eq!(bytes.len(), Signature::MIN_LENGTH);
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(signature, Signature::wire_deserialize(&mut reader).unwrap());
    }

    #[test]
    fn test_signature_layout() {
        let signature = Signature::Ed25519 {
            public_key: [0xab; 32],
            signature: [0xcd; 64],
        };
        let bytes = to_bytes(&signature).unwrap();
        assert_eq!(bytes[0], Signature::ED25519_KIND);
        assert_eq!(&bytes[1..33], &[0xab; 32]);
        assert_eq!(&bytes[33..97], &[0xcd; 64]);
    }
}
