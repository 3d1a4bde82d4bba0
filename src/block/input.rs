// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    block::{output::OutputId, payload::milestone::MilestoneId, payload::transaction::TransactionId},
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};

/// The different types of inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Input {
    /// An input spending a UTXO, identified by the id of the output it consumes.
    #[serde(rename = "utxo")]
    Utxo(OutputId),
    /// An input spending the treasury, identified by the milestone that last
    /// modified it.
    #[serde(rename = "treasury")]
    Treasury {
        /// The id of the milestone.
        milestone_id: MilestoneId,
    },
}

impl Input {
    /// The kind tag of a UTXO [`Input`].
    pub const UTXO_KIND: u8 = 0;
    /// The kind tag of a treasury [`Input`].
    pub const TREASURY_KIND: u8 = 1;

    pub(crate) const MIN_LENGTH: usize = 1 + MilestoneId::LENGTH;
}

impl WireSerialize for Input {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        match self {
            Self::Utxo(output_id) => {
                writer.write_u8("utxo_input.kind", Self::UTXO_KIND)?;
                writer.write_bytes("utxo_input.transaction_id", &output_id.transaction_id.0)?;
                writer.write_u16("utxo_input.transaction_output_index", output_id.index)
            }
            Self::Treasury { milestone_id } => {
                writer.write_u8("treasury_input.kind", Self::TREASURY_KIND)?;
                writer.write_bytes("treasury_input.milestone_id", &milestone_id.0)
            }
        }
    }
}

impl WireDeserialize for Input {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.require("input", Self::MIN_LENGTH)?;
        Ok(match reader.peek_u8("input.kind")? {
            Self::UTXO_KIND => {
                reader.read_kind_u8("utxo_input.kind", Self::UTXO_KIND)?;
                Self::Utxo(OutputId {
                    transaction_id: TransactionId(reader.read_array("utxo_input.transaction_id")?),
                    index: reader.read_u16("utxo_input.transaction_output_index")?,
                })
            }
            Self::TREASURY_KIND => {
                reader.read_kind_u8("treasury_input.kind", Self::TREASURY_KIND)?;
                Self::Treasury {
                    milestone_id: MilestoneId(reader.read_array("treasury_input.milestone_id")?),
                }
            }
            kind => {
                return Err(Error::UnrecognizedKind {
                    field: "input.kind",
                    kind: kind as u32,
                });
            }
        })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;

    impl Input {
        /// Generates a random UTXO [`Input`].
        pub fn rand_utxo() -> Self {
            Self::Utxo(OutputId::rand())
        }

        /// Generates a random treasury [`Input`].
        pub fn rand_treasury() -> Self {
            Self::Treasury {
                milestone_id: MilestoneId::rand(),
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
    fn test_input_round_trip() {
        for input in [Input::rand_utxo(), Input::rand_treasury()] {
            let bytes = to_bytes(&input).unwrap();
            let mut reader = ReadCursor::new(&bytes);
            assert_eq!(input, Input::wire_deserialize(&mut reader).unwrap());
            assert_eq!(reader.remaining_len(), 0);
        }
    }

    #[test]
    fn test_input_unrecognized_kind() {
        let mut bytes = to_bytes(&Input::rand_utxo()).unwrap();
        bytes[0] = 2;
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(
            Input::wire_deserialize(&mut reader),
            Err(Error::UnrecognizedKind {
                field: "input.kind",
                kind: 2,
            })
        );
    }
}
