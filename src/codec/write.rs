// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use primitive_types::U256;

use crate::error::Error;

/// A write cursor over a growable byte buffer.
///
/// Writes append at the current position, which normally sits at the end of
/// the buffer. [`WriteCursor::seek`] moves the position back over already
/// written bytes so a placeholder can be overwritten once its value is
/// known; this is how length-prefixed payloads of initially unknown size are
/// encoded in a single pass.
#[derive(Clone, Debug, Default)]
pub struct WriteCursor {
    bytes: Vec<u8>,
    pos: usize,
}

impl WriteCursor {
    /// Creates an empty cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current write offset.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes written so far.
    pub fn written_len(&self) -> usize {
        self.bytes.len()
    }

    /// Moves the write position. Seeking past the written length is a
    /// programmer error and fails with [`Error::SeekOutOfBounds`].
    pub fn seek(&mut self, field: &'static str, offset: usize) -> Result<(), Error> {
        if offset > self.bytes.len() {
            return Err(Error::SeekOutOfBounds {
                field,
                offset,
                len: self.bytes.len(),
            });
        }
        self.pos = offset;
        Ok(())
    }

    /// Finalizes the cursor and returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Writes raw bytes, overwriting where the position sits before the end
    /// of the buffer and appending past it.
    pub fn write_bytes(&mut self, _field: &'static str, bytes: &[u8]) -> Result<(), Error> {
        let overlap = (self.bytes.len() - self.pos).min(bytes.len());
        self.bytes[self.pos..self.pos + overlap].copy_from_slice(&bytes[..overlap]);
        self.bytes.extend_from_slice(&bytes[overlap..]);
        self.pos += bytes.len();
        Ok(())
    }

    /// Writes a `u8`.
    pub fn write_u8(&mut self, field: &'static str, value: u8) -> Result<(), Error> {
        self.write_bytes(field, &[value])
    }

    /// Writes a little-endian `u16`.
    pub fn write_u16(&mut self, field: &'static str, value: u16) -> Result<(), Error> {
        self.write_bytes(field, &value.to_le_bytes())
    }

    /// Writes a little-endian `u32`.
    pub fn write_u32(&mut self, field: &'static str, value: u32) -> Result<(), Error> {
        self.write_bytes(field, &value.to_le_bytes())
    }

    /// Writes a little-endian `u64`.
    pub fn write_u64(&mut self, field: &'static str, value: u64) -> Result<(), Error> {
        self.write_bytes(field, &value.to_le_bytes())
    }

    /// Writes a little-endian 256-bit unsigned integer.
    pub fn write_u256(&mut self, field: &'static str, value: &U256) -> Result<(), Error> {
        let mut buf = [0u8; 32];
        value.to_little_endian(&mut buf);
        self.write_bytes(field, &buf)
    }

    /// Writes a boolean as a single `0`/`1` byte.
    pub fn write_bool(&mut self, field: &'static str, value: bool) -> Result<(), Error> {
        self.write_u8(field, value as u8)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn writes_append_little_endian() {
        let mut writer = WriteCursor::new();
        writer.write_u8("a", 0x01).unwrap();
        writer.write_u16("b", 0x0302).unwrap();
        writer.write_u32("c", 0x07060504).unwrap();
        assert_eq!(writer.into_bytes(), vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
    }

    #[test]
    fn seek_and_overwrite_backpatches() {
        let mut writer = WriteCursor::new();
        let placeholder = writer.offset();
        writer.write_u32("len", 0).unwrap();
        writer.write_bytes("body", b"abc").unwrap();
        let end = writer.offset();
        writer.seek("len", placeholder).unwrap();
        writer.write_u32("len", 3).unwrap();
        writer.seek("len", end).unwrap();
        writer.write_u8("tail", 0xff).unwrap();
        assert_eq!(writer.into_bytes(), vec![0x03, 0x00, 0x00, 0x00, b'a', b'b', b'c', 0xff]);
    }

    #[test]
    fn seek_past_end_fails() {
        let mut writer = WriteCursor::new();
        writer.write_u8("a", 0).unwrap();
        assert_eq!(
            writer.seek("a", 2),
            Err(Error::SeekOutOfBounds {
                field: "a",
                offset: 2,
                len: 1,
            })
        );
    }
}
