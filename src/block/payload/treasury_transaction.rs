// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the [`TreasuryTransactionPayload`].

use serde::{Deserialize, Serialize};

use crate::{
    block::{
        input::Input,
        output::{OutputAmount, TreasuryOutput},
        payload::milestone::MilestoneId,
    },
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// A payload moving funds between the treasury and the migration receipts.
///
/// On the wire it carries a full treasury [`Input`] and a full
/// [`TreasuryOutput`]; since those are the only legal occupants of the two
/// slots, only their variable parts are held here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryTransactionPayload {
    /// The id of the milestone that created the consumed treasury input.
    pub input_milestone_id: MilestoneId,
    /// The amount of the produced treasury output.
    pub output_amount: OutputAmount,
}

impl TreasuryTransactionPayload {
    /// The kind tag of a [`TreasuryTransactionPayload`].
    pub const KIND: u32 = 4;
}

impl WireSerialize for TreasuryTransactionPayload {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u32("treasury_transaction.kind", Self::KIND)?;
        Input::Treasury {
            milestone_id: self.input_milestone_id,
        }
        .wire_serialize(writer)?;
        TreasuryOutput {
            amount: self.output_amount,
        }
        .wire_serialize(writer)
    }
}

impl WireDeserialize for TreasuryTransactionPayload {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.read_kind_u32("treasury_transaction.kind", Self::KIND)?;
        let input_milestone_id = match Input::wire_deserialize(reader)? {
            Input::Treasury { milestone_id } => milestone_id,
            Input::Utxo(_) => {
                return Err(Error::KindMismatch {
                    field: "treasury_transaction.input.kind",
                    expected: Input::TREASURY_KIND as u32,
                    found: Input::UTXO_KIND as u32,
                });
            }
        };
        let TreasuryOutput { amount } = TreasuryOutput::wire_deserialize(reader)?;
        Ok(Self {
            input_milestone_id,
            output_amount: amount,
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;

    impl TreasuryTransactionPayload {
        /// Generates a random [`TreasuryTransactionPayload`].
        pub fn rand() -> Self {
            Self {
                input_milestone_id: MilestoneId::rand(),
                output_amount: OutputAmount::rand(),
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
    fn test_treasury_transaction_round_trip() {
        let payload = TreasuryTransactionPayload::rand();
        let bytes = to_bytes(&payload).unwrap();
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(payload, TreasuryTransactionPayload::wire_deserialize(&mut reader).unwrap());
        assert_eq!(reader.remaining_len(), 0);
    }

    #[test]
    fn test_treasury_transaction_input_kind_is_checked() {
        let payload = TreasuryTransactionPayload::rand();
        let mut bytes = to_bytes(&payload).unwrap();
        // Flip the input slot to a UTXO input tag.
        bytes[4] = Input::UTXO_KIND;
        let mut reader = ReadCursor::new(&bytes);
        assert!(matches!(
            TreasuryTransactionPayload::wire_deserialize(&mut reader),
            Err(Error::KindMismatch {
                field: "treasury_transaction.input.kind",
                ..
            }) | Err(Error::Truncated { .. })
        ));
    }
}
