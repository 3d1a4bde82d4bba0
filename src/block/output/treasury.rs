// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use super::OutputAmount;
use crate::{
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// The output holding the treasury, modified only by treasury transactions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryOutput {
    /// The amount held by the treasury.
    pub amount: OutputAmount,
}

impl TreasuryOutput {
    /// The kind tag of a [`TreasuryOutput`].
    pub const KIND: u8 = 2;

    pub(crate) const LENGTH: usize = 1 + 8;
}

impl WireSerialize for TreasuryOutput {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        writer.write_u8("treasury_output.kind", Self::KIND)?;
        writer.write_u64("treasury_output.amount", self.amount.0)
    }
}

impl WireDeserialize for TreasuryOutput {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("treasury_output", Self::LENGTH)?;
        reader.read_kind_u8("treasury_output.kind", Self::KIND)?;
        Ok(Self {
            amount: OutputAmount(reader.read_u64("treasury_output.amount")?),
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;

    impl TreasuryOutput {
        /// Generates a random [`TreasuryOutput`].
        pub fn rand() -> Self {
            Self {
                amount: OutputAmount::rand(),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::codec::to_bytes;

    #[test]
    fn test_boundary_amounts_round_trip() {
        for amount in [0, u64::MAX] {
            let output = TreasuryOutput {
                amount: OutputAmount(amount),
            };
            let bytes = to_bytes(&output).unwrap();
            let mut reader = ReadCursor::new(&bytes);
            assert_eq!(output, TreasuryOutput::wire_deserialize(&mut reader).unwrap());

            let json = serde_json::to_value(&output).unwrap();
            assert_eq!(json["amount"], serde_json::json!(amount.to_string()));
            assert_eq!(output, serde_json::from_value(json).unwrap());
        }
    }
}
