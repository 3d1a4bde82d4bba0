// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the [`TransactionPayload`] and its essence.

use std::{ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

use super::Payload;
use crate::{
    block::{
        input::Input,
        output::Output,
        unlock::Unlock,
        validation::{verify_sorted_unique, verify_unlocks},
    },
    codec::{self, to_bytes, ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
    util::{bytify, hex_to_array},
};

/// The id of a transaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct TransactionId(#[serde(with = "bytify")] pub [u8; Self::LENGTH]);

impl TransactionId {
    /// The number of bytes of a serialized [`TransactionId`].
    pub const LENGTH: usize = 32;

    /// Converts the [`TransactionId`] to its `0x`-prefixed hex representation.
    pub fn to_hex(&self) -> String {
        prefix_hex::encode(self.0.as_ref())
    }
}

impl FromStr for TransactionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(hex_to_array(s)?))
    }
}

/// The essence of a transaction: the signed portion of the payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TransactionEssence {
    /// The regular transaction essence.
    Regular {
        /// The id of the network the transaction was issued to.
        #[serde(with = "crate::util::stringify")]
        network_id: u64,
        /// The inputs consumed by the transaction.
        inputs: Box<[Input]>,
        /// The outputs created by the transaction.
        outputs: Box<[Output]>,
        /// The optional embedded payload.
        payload: Option<Payload>,
    },
}

impl TransactionEssence {
    /// The kind tag of a regular [`TransactionEssence`].
    pub const REGULAR_KIND: u8 = 1;
    /// The allowed number of inputs.
    pub const INPUT_COUNT_RANGE: RangeInclusive<usize> = 1..=127;
    /// The allowed number of outputs.
    pub const OUTPUT_COUNT_RANGE: RangeInclusive<usize> = 1..=127;
}

fn verify_essence_payload(payload: Option<&Payload>) -> Result<(), Error> {
    match payload {
        None | Some(Payload::TaggedData(_)) => Ok(()),
        Some(payload) => Err(Error::UnexpectedPayloadKind {
            field: "transaction_essence.payload",
            kind: payload.kind(),
        }),
    }
}

impl WireSerialize for TransactionEssence {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        let Self::Regular {
            network_id,
            inputs,
            outputs,
            payload,
        } = self;
        writer.write_u8("transaction_essence.kind", Self::REGULAR_KIND)?;
        writer.write_u64("transaction_essence.network_id", *network_id)?;
        let input_keys = inputs.iter().map(to_bytes).collect::<Result<Vec<_>, _>>()?;
        verify_sorted_unique("transaction_essence.inputs", &input_keys)?;
        codec::write_list_u16(writer, "transaction_essence.inputs", inputs, Some(&Self::INPUT_COUNT_RANGE))?;
        let output_keys = outputs.iter().map(to_bytes).collect::<Result<Vec<_>, _>>()?;
        verify_sorted_unique("transaction_essence.outputs", &output_keys)?;
        codec::write_list_u16(writer, "transaction_essence.outputs", outputs, Some(&Self::OUTPUT_COUNT_RANGE))?;
        verify_essence_payload(payload.as_ref())?;
        super::write_optional_payload(writer, "transaction_essence.payload", payload.as_ref())
    }
}

impl WireDeserialize for TransactionEssence {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.read_kind_u8("transaction_essence.kind", Self::REGULAR_KIND)?;
        let network_id = reader.read_u64("transaction_essence.network_id")?;
        let inputs = codec::read_list_u16(reader, "transaction_essence.inputs", Some(&Self::INPUT_COUNT_RANGE))?;
        let outputs = codec::read_list_u16(reader, "transaction_essence.outputs", Some(&Self::OUTPUT_COUNT_RANGE))?;
        let payload = super::read_optional_payload(reader, "transaction_essence.payload")?;
        verify_essence_payload(payload.as_ref())?;
        Ok(Self::Regular {
            network_id,
            inputs,
            outputs,
            payload,
        })
    }
}

/// A payload consuming inputs and creating outputs, authorized by unlocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPayload {
    /// The essence of the transaction.
    pub essence: TransactionEssence,
    /// The unlocks authorizing the consumption of the inputs.
    pub unlocks: Box<[Unlock]>,
}

impl TransactionPayload {
    /// The kind tag of a [`TransactionPayload`].
    pub const KIND: u32 = 6;
}

impl WireSerialize for TransactionPayload {
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
        verify_unlocks(&self.unlocks)?;
        writer.write_u32("transaction.kind", Self::KIND)?;
        self.essence.wire_serialize(writer)?;
        codec::write_list_u16(writer, "transaction.unlocks", &self.unlocks, None)
    }
}

impl WireDeserialize for TransactionPayload {
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
        reader.read_kind_u32("transaction.kind", Self::KIND)?;
        let essence = TransactionEssence::wire_deserialize(reader)?;
        let unlocks = codec::read_list_u16(reader, "transaction.unlocks", None)?;
        verify_unlocks(&unlocks)?;
        Ok(Self { essence, unlocks })
    }
}

#[cfg(feature = "rand")]
mod rand {
    use super::*;
    use crate::rand::{rand_bytes_array, rand_number};

    impl TransactionId {
        /// Generates a random [`TransactionId`].
        pub fn rand() -> Self {
            Self(rand_bytes_array())
        }
    }

    impl TransactionEssence {
        /// Generates a random regular [`TransactionEssence`].
        pub fn rand() -> Self {
            let mut inputs = vec![Input::rand_utxo(), Input::rand_utxo()];
            inputs.sort_by_cached_key(|input| to_bytes(input).unwrap());
            inputs.dedup();
            let mut outputs = vec![Output::rand_basic(), Output::rand_alias()];
            outputs.sort_by_cached_key(|output| to_bytes(output).unwrap());
            Self::Regular {
                network_id: rand_number(),
                inputs: inputs.into_boxed_slice(),
                outputs: outputs.into_boxed_slice(),
                payload: Some(Payload::TaggedData(Box::new(super::super::TaggedDataPayload::rand()))),
            }
        }
    }

    impl TransactionPayload {
        /// Generates a random [`TransactionPayload`].
        pub fn rand() -> Self {
            Self {
                essence: TransactionEssence::rand(),
                unlocks: Box::new([Unlock::rand_signature(), Unlock::Reference { index: 0 }]),
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
    fn test_transaction_round_trip() {
        let payload = TransactionPayload::rand();
        let bytes = to_bytes(&payload).unwrap();
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(payload, TransactionPayload::wire_deserialize(&mut reader).unwrap());
        assert_eq!(reader.remaining_len(), 0);
    }

    #[test]
    fn test_unsorted_inputs_are_rejected_at_encode() {
        let TransactionEssence::Regular {
            network_id,
            inputs,
            outputs,
            payload,
        } = TransactionEssence::rand();
        let mut inputs = inputs.into_vec();
        inputs.reverse();
        let essence = TransactionEssence::Regular {
            network_id,
            inputs: inputs.into_boxed_slice(),
            outputs,
            payload,
        };
        assert_eq!(
            to_bytes(&essence),
            Err(Error::UnsortedEntries {
                field: "transaction_essence.inputs"
            })
        );
    }

    #[test]
    fn test_duplicate_inputs_are_rejected_at_encode() {
        let input = Input::rand_utxo();
        let TransactionEssence::Regular {
            network_id, outputs, payload, ..
        } = TransactionEssence::rand();
        let essence = TransactionEssence::Regular {
            network_id,
            inputs: Box::new([input, input]),
            outputs,
            payload,
        };
        assert_eq!(
            to_bytes(&essence),
            Err(Error::DuplicateEntries {
                field: "transaction_essence.inputs"
            })
        );
    }

    #[test]
    fn test_essence_rejects_non_tagged_data_payload() {
        let TransactionEssence::Regular {
            network_id, inputs, outputs, ..
        } = TransactionEssence::rand();
        let essence = TransactionEssence::Regular {
            network_id,
            inputs,
            outputs,
            payload: Some(Payload::TreasuryTransaction(Box::new(
                super::super::TreasuryTransactionPayload::rand(),
            ))),
        };
        assert_eq!(
            to_bytes(&essence),
            Err(Error::UnexpectedPayloadKind {
                field: "transaction_essence.payload",
                kind: super::super::TreasuryTransactionPayload::KIND,
            })
        );
    }

    #[test]
    fn test_forward_unlock_reference_is_rejected() {
        let payload = TransactionPayload {
            unlocks: Box::new([Unlock::Reference { index: 1 }, Unlock::rand_signature()]),
            ..TransactionPayload::rand()
        };
        assert_eq!(
            to_bytes(&payload),
            Err(Error::InvalidUnlockReference {
                position: 0,
                reference: 1,
            })
        );
    }

    #[test]
    fn test_input_count_bounds() {
        let TransactionEssence::Regular {
            network_id, outputs, payload, ..
        } = TransactionEssence::rand();
        let essence = TransactionEssence::Regular {
            network_id,
            inputs: Box::new([]),
            outputs,
            payload,
        };
        assert_eq!(
            to_bytes(&essence),
            Err(Error::CountOutOfBounds {
                field: "transaction_essence.inputs",
                count: 0,
                min: 1,
                max: 127,
            })
        );
    }
}
