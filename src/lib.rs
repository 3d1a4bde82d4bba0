// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Byte-exact binary codec for the IOTA Stardust block wire format.
//!
//! This crate turns in-memory [`Block`](block::Block)s (and every entity they
//! embed) into the exact byte layout a Stardust node transmits and persists,
//! and back again. Encoding and decoding are pure, synchronous
//! transformations over a single buffer; every failure is terminal and
//! reported through [`Error`](error::Error) with the dotted path of the field
//! that caused it.

/// Module containing the [`Block`](block::Block) types and their codecs.
pub mod block;
/// Module containing the cursor primitives and codec traits.
pub mod codec;
/// Module containing the codec error type.
pub mod error;
/// Module containing random generation helpers used by the test suite.
#[cfg(feature = "rand")]
pub mod rand;
/// Module containing the milestone index and timestamp newtypes.
pub mod tangle;
/// Module containing serde utility functions.
pub mod util;

pub use self::{
    codec::{ReadCursor, WireDeserialize, WireSerialize, WriteCursor},
    error::Error,
};
