// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the codec [`Error`] type.

use thiserror::Error;

/// The errors the codec can produce.
///
/// Every variant is terminal: it is raised at the point of detection and
/// propagated unchanged to the caller. The codec never recovers, retries or
/// substitutes defaults. Each variant carries the dotted path of the field
/// that was being read or written when the failure occurred.
#[derive(Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Error {
    /// Fewer bytes remain than a decoder needs.
    #[error("{field}: {needed} byte(s) needed but only {remaining} remaining")]
    Truncated {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },
    /// A decoder re-read its kind tag and found a different value.
    #[error("{field}: expected kind {expected} but found {found}")]
    KindMismatch {
        field: &'static str,
        expected: u32,
        found: u32,
    },
    /// A kind tag has no decoder in the closed variant set.
    #[error("{field}: unrecognized kind {kind}")]
    UnrecognizedKind { field: &'static str, kind: u32 },
    /// A collection count or blob length violates a protocol bound.
    #[error("{field}: count {count} outside allowed range {min}..={max}")]
    CountOutOfBounds {
        field: &'static str,
        count: usize,
        min: usize,
        max: usize,
    },
    /// A list that must be in ascending lexicographic order is not.
    #[error("{field}: entries are not sorted lexicographically")]
    UnsortedEntries { field: &'static str },
    /// A list that must be duplicate-free is not.
    #[error("{field}: duplicate entries")]
    DuplicateEntries { field: &'static str },
    /// Bytes remain after a decode that must consume the whole buffer.
    #[error("{field}: {remaining} trailing byte(s)")]
    TrailingBytes { field: &'static str, remaining: usize },
    /// A length-prefixed payload consumed a different number of bytes than
    /// its prefix declared.
    #[error("{field}: declared length {declared} but {consumed} byte(s) consumed")]
    LengthMismatch {
        field: &'static str,
        declared: usize,
        consumed: usize,
    },
    /// A payload slot holds a payload kind the enclosing entity forbids.
    #[error("{field}: payload kind {kind} is not allowed here")]
    UnexpectedPayloadKind { field: &'static str, kind: u32 },
    /// A payload slot that must be occupied holds a zero-length payload.
    #[error("{field}: missing payload")]
    MissingPayload { field: &'static str },
    /// A reference/alias/nft unlock does not point at an earlier signature
    /// unlock.
    #[error("unlock at position {position} references index {reference}, which is not an earlier signature unlock")]
    InvalidUnlockReference { position: usize, reference: u16 },
    /// The same signature unlock occurs twice in an unlock list.
    #[error("duplicate signature unlock at position {position}")]
    DuplicateSignatureUnlock { position: usize },
    /// A write cursor was asked to seek past the written length.
    #[error("{field}: cannot seek to offset {offset}, only {len} byte(s) written")]
    SeekOutOfBounds {
        field: &'static str,
        offset: usize,
        len: usize,
    },
    /// A hex string could not be parsed.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<prefix_hex::Error> for Error {
    fn from(value: prefix_hex::Error) -> Self {
        Self::InvalidHex(value.to_string())
    }
}
