// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use primitive_types::U256;

use crate::error::Error;

/// A read cursor over an immutable byte sequence.
///
/// Every typed read advances the position and fails with
/// [`Error::Truncated`] if insufficient bytes remain. Reads tag themselves
/// with the dotted path of the field being decoded; the path is used purely
/// for diagnostics and never affects the byte layout.
#[derive(Clone, Debug)]
pub struct ReadCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    /// Creates a new cursor positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Returns the current read offset.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Returns the number of unread bytes.
    pub fn remaining_len(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Returns whether at least `n` unread bytes remain.
    pub fn has_remaining(&self, n: usize) -> bool {
        self.remaining_len() >= n
    }

    /// Fails with [`Error::Truncated`] unless at least `n` unread bytes
    /// remain. Decoders call this up front with their minimum encoded
    /// length so that truncated input fails fast.
    pub fn require(&self, field: &'static str, n: usize) -> Result<(), Error> {
        if self.has_remaining(n) {
            Ok(())
        } else {
            Err(Error::Truncated {
                field,
                needed: n,
                remaining: self.remaining_len(),
            })
        }
    }

    /// Reads `len` bytes.
    pub fn read_bytes(&mut self, field: &'static str, len: usize) -> Result<&'a [u8], Error> {
        self.require(field, len)?;
        let bytes = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Reads a fixed-length byte array.
    pub fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], Error> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_bytes(field, N)?);
        Ok(array)
    }

    /// Reads a `u8`.
    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, Error> {
        Ok(self.read_array::<1>(field)?[0])
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16(&mut self, field: &'static str) -> Result<u16, Error> {
        Ok(u16::from_le_bytes(self.read_array(field)?))
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self, field: &'static str) -> Result<u32, Error> {
        Ok(u32::from_le_bytes(self.read_array(field)?))
    }

    /// Reads a little-endian `u64`.
    pub fn read_u64(&mut self, field: &'static str) -> Result<u64, Error> {
        Ok(u64::from_le_bytes(self.read_array(field)?))
    }

    /// Reads a little-endian 256-bit unsigned integer.
    pub fn read_u256(&mut self, field: &'static str) -> Result<U256, Error> {
        Ok(U256::from_little_endian(self.read_bytes(field, 32)?))
    }

    /// Reads a boolean; any non-zero byte decodes to `true`.
    pub fn read_bool(&mut self, field: &'static str) -> Result<bool, Error> {
        Ok(self.read_u8(field)? != 0)
    }

    /// Returns the next byte without advancing. Used to dispatch on a kind
    /// tag without consuming it, so the selected variant decoder can re-read
    /// and verify it.
    pub fn peek_u8(&self, field: &'static str) -> Result<u8, Error> {
        self.require(field, 1)?;
        Ok(self.bytes[self.pos])
    }

    /// Returns the next little-endian `u32` without advancing.
    pub fn peek_u32(&self, field: &'static str) -> Result<u32, Error> {
        self.require(field, 4)?;
        // Unwrap: the length was just checked
        Ok(u32::from_le_bytes(self.bytes[self.pos..self.pos + 4].try_into().unwrap()))
    }

    /// Reads a `u8` kind tag and fails with [`Error::KindMismatch`] if it
    /// does not equal `expected`. Catches dispatch bugs and malformed input
    /// in one check.
    pub fn read_kind_u8(&mut self, field: &'static str, expected: u8) -> Result<(), Error> {
        let found = self.read_u8(field)?;
        if found != expected {
            return Err(Error::KindMismatch {
                field,
                expected: expected as u32,
                found: found as u32,
            });
        }
        Ok(())
    }

    /// Reads a `u32` kind tag and fails with [`Error::KindMismatch`] if it
    /// does not equal `expected`.
    pub fn read_kind_u32(&mut self, field: &'static str, expected: u32) -> Result<(), Error> {
        let found = self.read_u32(field)?;
        if found != expected {
            return Err(Error::KindMismatch { field, expected, found });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn typed_reads_advance() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(reader.read_u8("a").unwrap(), 0x01);
        assert_eq!(reader.read_u16("b").unwrap(), 0x0302);
        assert_eq!(reader.read_u32("c").unwrap(), 0x07060504);
        assert_eq!(reader.remaining_len(), 0);
    }

    #[test]
    fn peek_does_not_advance() {
        let bytes = [0xaa, 0xbb];
        let reader = ReadCursor::new(&bytes);
        assert_eq!(reader.peek_u8("a").unwrap(), 0xaa);
        assert_eq!(reader.offset(), 0);
    }

    #[test]
    fn truncated_read_names_the_field() {
        let mut reader = ReadCursor::new(&[0x00]);
        assert_eq!(
            reader.read_u32("some.field"),
            Err(Error::Truncated {
                field: "some.field",
                needed: 4,
                remaining: 1,
            })
        );
    }

    #[test]
    fn u256_round_trips_little_endian() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xff;
        let mut reader = ReadCursor::new(&bytes);
        assert_eq!(reader.read_u256("amount").unwrap(), U256::from(0xff));
    }
}
