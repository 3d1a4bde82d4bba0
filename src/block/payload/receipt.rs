// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the [`ReceiptPayload`].

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::{Payload, TreasuryTransactionPayload};
use crate::{
    block::address::Address,
    codec::{self, ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    tangle::MilestoneIndex,
    util::bytify,
};

/// An entry of funds migrated from the legacy network.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigratedFundsEntry {
    /// The tail transaction hash of the migration bundle.
    #[serde(with = "bytify")]
    pub tail_transaction_hash: [u8; Self::TAIL_TRANSACTION_HASH_LENGTH],
    /// The address the funds were migrated to.
    pub address: Address,
    /// The migrated amount.
    #[serde(with = "crate::util::stringify")]
    pub amount: u64,
}

impl MigratedFundsEntry {
    /// The number of bytes of a tail transaction hash.
    pub const TAIL_TRANSACTION_HASH_LENGTH: usize = 49;
}

impl WireSerialize for MigratedFundsEntry {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_bytes("migrated_funds.tail_transaction_hash", &self.tail_transaction_hash)?;
        self.address.wire_serialize(writer)?;
        writer.write_u64("migrated_funds.amount", self.amount)
    }
}

impl WireDeserialize for MigratedFundsEntry {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        Ok(Self {
            tail_transaction_hash: reader.read_array("migrated_funds.tail_transaction_hash")?,
            address: Address::wire_deserialize(reader)?,
            amount: reader.read_u64("migrated_funds.amount")?,
        })
    }
}

/// A payload recording a batch of funds migrated from the legacy network,
/// together with the treasury transaction that funds it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptPayload {
    /// The milestone index at which the funds were migrated.
    pub migrated_at: MilestoneIndex,
    /// Whether this receipt is the last for `migrated_at`.
    pub last: bool,
    /// The migrated funds.
    pub funds: Box<[MigratedFundsEntry]>,
    /// The treasury transaction backing the receipt.
    pub transaction: TreasuryTransactionPayload,
}

impl ReceiptPayload {
    /// The kind tag of a [`ReceiptPayload`].
    pub const KIND: u32 = 3;
    /// The allowed number of funds entries.
    pub const FUNDS_COUNT_RANGE: RangeInclusive<usize> = 0..=127;
}

impl WireSerialize for ReceiptPayload {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u32("receipt.kind", Self::KIND)?;
        writer.write_u32("receipt.migrated_at", self.migrated_at.0)?;
        writer.write_bool("receipt.last", self.last)?;
        codec::write_list_u16(writer, "receipt.funds", &self.funds, Some(&Self::FUNDS_COUNT_RANGE))?;
        super::write_prefixed(writer, "receipt.transaction", &self.transaction)
    }
}

impl WireDeserialize for ReceiptPayload {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.read_kind_u32("receipt.kind", Self::KIND)?;
        let migrated_at = MilestoneIndex(reader.read_u32("receipt.migrated_at")?);
        let last = reader.read_bool("receipt.last")?;
        let funds = codec::read_list_u16(reader, "receipt.funds", Some(&Self::FUNDS_COUNT_RANGE))?;
        let transaction = match super::read_optional_payload(reader, "receipt.transaction")? {
            Some(Payload::TreasuryTransaction(transaction)) => *transaction,
            Some(payload) => {
                return Err(Error::UnexpectedPayloadKind {
                    field: "receipt.transaction",
                    kind: payload.kind(),
                });
            }
            None => return Err(Error::MissingPayload { field: "receipt.transaction" }),
        };
        Ok(Self {
            migrated_at,
            last,
            funds,
            transaction,
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::{rand_bytes_array, rand_number, rand_number_range};

    impl MigratedFundsEntry {
        /// Generates a random [`MigratedFundsEntry`].
        pub fn rand() -> Self {
            Self {
                tail_transaction_hash: rand_bytes_array(),
                address: Address::rand_ed25519(),
                amount: rand_number(),
            }
        }
    }

    impl ReceiptPayload {
        /// Generates a random [`ReceiptPayload`].
        pub fn rand() -> Self {
            Self {
                migrated_at: MilestoneIndex(rand_number()),
                last: rand_number_range(0..=1) == 1,
                funds: std::iter::repeat_with(MigratedFundsEntry::rand)
                    .take(rand_number_range(0..4))
                    .collect(),
                transaction: TreasuryTransactionPayload::rand(),
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
    fn test_receipt_round_trip() {
        let payload = ReceiptPayload::rand();
        let bytes = to_bytes(&payload).unwrap();
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(payload, ReceiptPayload::wire_deserialize(&mut reader).unwrap());
        assert_eq!(reader.remaining_len(), 0);
    }

    #[test]
    fn test_receipt_funds_count_bound() {
        let payload = ReceiptPayload {
            funds: std::iter::repeat_with(MigratedFundsEntry::rand).take(128).collect(),
            ..ReceiptPayload::rand()
        };
        assert_eq!(
            to_bytes(&payload),
            Err(Error::CountOutOfBounds {
                field: "receipt.funds",
                count: 128,
                min: 0,
                max: 127,
            })
        );
    }

    #[test]
    fn test_receipt_missing_transaction() {
        let payload = ReceiptPayload {
            funds: Box::new([]),
            ..ReceiptPayload::rand()
        };
        let bytes = to_bytes(&payload).unwrap();
        // Zero out the embedded transaction slot: keep the length prefix but
        // declare it empty and drop the body.
        // The embedded treasury transaction body is 46 bytes: a u32 kind, a
        // 33-byte treasury input and a 9-byte treasury output.
        let slot = bytes.len() - 4 - 46;
        let mut truncated = bytes[..slot].to_vec();
        truncated.extend_from_slice(&0u32.to_le_bytes());
        let mut reader = ReadCursor::new(&truncated);
        assert_eq!(
            ReceiptPayload::wire_deserialize(&mut reader),
            Err(Error::MissingPayload {
                field: "receipt.transaction"
            })
        );
    }
}
