// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the [`Payload`] types.

pub mod milestone;
pub mod receipt;
pub mod tagged_data;
pub mod transaction;
pub mod treasury_transaction;

use serde::{Deserialize, Serialize};

pub use self::{
    milestone::{MilestoneEssence, MilestonePayload},
    receipt::{MigratedFundsEntry, ReceiptPayload},
    tagged_data::TaggedDataPayload,
    transaction::{TransactionEssence, TransactionPayload},
    treasury_transaction::TreasuryTransactionPayload,
};
use crate::{
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// The different types of payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Payload {
    /// A transaction payload.
    Transaction(Box<TransactionPayload>),
    /// A milestone payload.
    Milestone(Box<MilestonePayload>),
    /// A treasury transaction payload.
    TreasuryTransaction(Box<TreasuryTransactionPayload>),
    /// A tagged data payload.
    TaggedData(Box<TaggedDataPayload>),
    /// A receipt payload.
    Receipt(Box<ReceiptPayload>),
}

impl Payload {
    /// Returns the kind tag of the payload.
    pub fn kind(&self) -> u32 {
        match self {
            Self::Transaction(_) => TransactionPayload::KIND,
            Self::Milestone(_) => MilestonePayload::KIND,
            Self::TreasuryTransaction(_) => TreasuryTransactionPayload::KIND,
            Self::TaggedData(_) => TaggedDataPayload::KIND,
            Self::Receipt(_) => ReceiptPayload::KIND,
        }
    }
}

impl WireSerialize for Payload {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        match self {
            Self::Transaction(p) => p.wire_serialize(writer),
            Self::Milestone(p) => p.wire_serialize(writer),
            Self::TreasuryTransaction(p) => p.wire_serialize(writer),
            Self::TaggedData(p) => p.wire_serialize(writer),
            Self::Receipt(p) => p.wire_serialize(writer),
        }
    }
}

impl WireDeserialize for Payload {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        Ok(match reader.peek_u32("payload.kind")? {
            TransactionPayload::KIND => Self::Transaction(Box::new(TransactionPayload::wire_deserialize(reader)?)),
            MilestonePayload::KIND => Self::Milestone(Box::new(MilestonePayload::wire_deserialize(reader)?)),
            TreasuryTransactionPayload::KIND => {
                Self::TreasuryTransaction(Box::new(TreasuryTransactionPayload::wire_deserialize(reader)?))
            }
            TaggedDataPayload::KIND => Self::TaggedData(Box::new(TaggedDataPayload::wire_deserialize(reader)?)),
            ReceiptPayload::KIND => Self::Receipt(Box::new(ReceiptPayload::wire_deserialize(reader)?)),
            kind => {
                return Err(Error::UnrecognizedKind {
                    field: "payload.kind",
                    kind,
                });
            }
        })
    }
}

/// Writes a value behind a `u32` length prefix in a single pass: a
/// placeholder length is written first, then the body, then the cursor seeks
/// back and patches the actual body length. The prefix does not count its
/// own four bytes.
pub(crate) fn write_prefixed<T: WireSerialize>(
    writer: &mut WriteCursor,
    field: &'static str,
    value: &T,
) -> Result<(), Error> {
    let prefix = writer.offset();
    writer.write_u32(field, 0)?;
    let start = writer.offset();
    value.wire_serialize(writer)?;
    let end = writer.offset();
    writer.seek(field, prefix)?;
    writer.write_u32(field, (end - start) as u32)?;
    writer.seek(field, end)
}

/// Writes an optional payload slot; `None` is encoded as a zero length.
pub(crate) fn write_optional_payload(
    writer: &mut WriteCursor,
    field: &'static str,
    payload: Option<&Payload>,
) -> Result<(), Error> {
    match payload {
        Some(payload) => write_prefixed(writer, field, payload),
        None => writer.write_u32(field, 0),
    }
}

/// Reads an optional payload slot. A zero length decodes to `None`;
/// otherwise the declared length must be covered by the remaining bytes and
/// must equal the bytes the payload decoder actually consumes.
pub(crate) fn read_optional_payload(reader: &mut ReadCursor<'_>, field: &'static str) -> Result<Option<Payload>, Error> {
    let declared = reader.read_u32(field)? as usize;
    if declared == 0 {
        return Ok(None);
    }
    reader.require(field, declared)?;
    let start = reader.offset();
    let payload = Payload::wire_deserialize(reader)?;
    let consumed = reader.offset() - start;
    if consumed != declared {
        return Err(Error::LengthMismatch {
            field,
            declared,
            consumed,
        });
    }
    Ok(Some(payload))
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::rand_number_range;

    impl Payload {
        /// Generates a random [`Payload`].
        pub fn rand() -> Self {
            match rand_number_range(0..5) {
                0 => Self::rand_transaction(),
                1 => Self::rand_milestone(),
                2 => Self::rand_treasury_transaction(),
                3 => Self::rand_tagged_data(),
                4 => Self::rand_receipt(),
                _ => unreachable!(),
            }
        }

        /// Generates a random transaction [`Payload`].
        pub fn rand_transaction() -> Self {
            Self::Transaction(Box::new(TransactionPayload::rand()))
        }

        /// Generates a random milestone [`Payload`].
        pub fn rand_milestone() -> Self {
            Self::Milestone(Box::new(MilestonePayload::rand()))
        }

        /// Generates a random treasury transaction [`Payload`].
        pub fn rand_treasury_transaction() -> Self {
            Self::TreasuryTransaction(Box::new(TreasuryTransactionPayload::rand()))
        }

        /// Generates a random tagged data [`Payload`].
        pub fn rand_tagged_data() -> Self {
            Self::TaggedData(Box::new(TaggedDataPayload::rand()))
        }

        /// Generates a random receipt [`Payload`].
        pub fn rand_receipt() -> Self {
            Self::Receipt(Box::new(ReceiptPayload::rand()))
        }
    }
}

#[cfg(all(test, feature = "rand"))]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::codec::to_bytes;

    #[test]
    fn test_payload_round_trip() {
        for payload in [
            Payload::rand_transaction(),
            Payload::rand_milestone(),
            Payload::rand_treasury_transaction(),
            Payload::rand_tagged_data(),
            Payload::rand_receipt(),
        ] {
            let bytes = to_bytes(&payload).unwrap();
            assert_eq!(u32::from_le_bytes(bytes[..4].try_into().unwrap()), payload.kind());
            let mut reader = ReadCursor::new(&bytes);
            assert_eq!(payload, Payload::wire_deserialize(&mut reader).unwrap());
            assert_eq!(reader.remaining_len(), 0);
        }
    }

    #[test]
    fn test_optional_payload_wrapper() {
        let payload = Payload::rand_tagged_data();
        let mut writer = WriteCursor::new();
        write_optional_payload(&mut writer, "slot", Some(&payload)).unwrap();
        let bytes = writer.into_bytes();
        let body_len = u32::from_le_bytes(bytes[..4].try_into().unwrap()) as usize;
        assert_eq!(body_len, bytes.len() - 4);
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(read_optional_payload(&mut reader, "slot").unwrap(), Some(payload));
        assert_eq!(reader.remaining_len(), 0);
    }

    #[test]
    fn test_empty_payload_slot() {
        let mut writer = WriteCursor::new();
        write_optional_payload(&mut writer, "slot", None).unwrap();
        let bytes = writer.into_bytes();
        assert_eq!(bytes, vec![0, 0, 0, 0]);
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(read_optional_payload(&mut reader, "slot").unwrap(), None);
    }

    #[test]
    fn test_declared_length_must_match_consumption() {
        let payload = Payload::rand_tagged_data();
        let mut writer = WriteCursor::new();
        write_optional_payload(&mut writer, "slot", Some(&payload)).unwrap();
        let mut bytes = writer.into_bytes();
        // Declare one byte more than the body and pad so the buffer covers it.
        let declared = (bytes.len() - 4 + 1) as u32;
        bytes[..4].copy_from_slice(&declared.to_le_bytes());
        bytes.push(0xff);
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(
            read_optional_payload(&mut reader, "slot"),
            Err(Error::LengthMismatch {
                field: "slot",
                declared: declared as usize,
                consumed: declared as usize - 1,
            })
        );
    }

    #[test]
    fn test_declared_length_beyond_buffer_is_truncated() {
        let mut bytes = 100u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0; 10]);
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(
            read_optional_payload(&mut reader, "slot"),
            Err(Error::Truncated {
                field: "slot",
                needed: 100,
                remaining: 10,
            })
        );
    }
}
