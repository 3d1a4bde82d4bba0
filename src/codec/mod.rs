// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the cursor primitives, the codec traits and the
//! count-prefixed list helpers shared by every entity codec.

mod read;
mod write;

use std::ops::RangeInclusive;

pub use self::{read::ReadCursor, write::WriteCursor};
use crate::error::Error;

/// Wire serialization of a Stardust entity.
///
/// This trait writes the consensus byte layout, not a generic
/// serialization; `serde` is used for the textual representation instead.
pub trait WireSerialize {
    /// Writes `self` to the given cursor using the canonical wire format.
    fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error>;
}

/// Wire deserialization of a Stardust entity.
pub trait WireDeserialize: Sized {
    /// Reads `self` from the given cursor, consuming exactly the bytes of
    /// one encoded value.
    fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error>;
}

/// Serializes a value to a fresh byte vector.
pub fn to_bytes<T: WireSerialize>(value: &T) -> Result<Vec<u8>, Error> {
    let mut writer = WriteCursor::new();
    value.wire_serialize(&mut writer)?;
    Ok(writer.into_bytes())
}

/// Validates a count against an optional protocol bound.
pub(crate) fn verify_count(
    field: &'static str,
    count: usize,
    bounds: Option<&RangeInclusive<usize>>,
) -> Result<(), Error> {
    if let Some(bounds) = bounds {
        if !bounds.contains(&count) {
            return Err(Error::CountOutOfBounds {
                field,
                count,
                min: *bounds.start(),
                max: *bounds.end(),
            });
        }
    }
    Ok(())
}

/// Writes a list with a `u8` count prefix in the caller-supplied order.
///
/// The count bound is validated here; ordering and uniqueness rules are the
/// caller's concern and are checked one layer up, where the whole collection
/// is visible.
pub(crate) fn write_list_u8<T: WireSerialize>(
    writer: &mut WriteCursor,
    field: &'static str,
    items: &[T],
    bounds: Option<&RangeInclusive<usize>>,
) -> Result<(), Error> {
    verify_count(field, items.len(), bounds)?;
    writer.write_u8(field, items.len() as u8)?;
    for item in items {
        item.wire_serialize(writer)?;
    }
    Ok(())
}

/// Writes a list with a `u16` count prefix in the caller-supplied order.
pub(crate) fn write_list_u16<T: WireSerialize>(
    writer: &mut WriteCursor,
    field: &'static str,
    items: &[T],
    bounds: Option<&RangeInclusive<usize>>,
) -> Result<(), Error> {
    verify_count(field, items.len(), bounds)?;
    writer.write_u16(field, items.len() as u16)?;
    for item in items {
        item.wire_serialize(writer)?;
    }
    Ok(())
}

/// Reads a list with a `u8` count prefix.
pub(crate) fn read_list_u8<T: WireDeserialize>(
    reader: &mut ReadCursor<'_>,
    field: &'static str,
    bounds: Option<&RangeInclusive<usize>>,
) -> Result<Box<[T]>, Error> {
    let count = reader.read_u8(field)? as usize;
    verify_count(field, count, bounds)?;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(T::wire_deserialize(reader)?);
    }
    Ok(items.into_boxed_slice())
}

/// Reads a list with a `u16` count prefix.
pub(crate) fn read_list_u16<T: WireDeserialize>(
    reader: &mut ReadCursor<'_>,
    field: &'static str,
    bounds: Option<&RangeInclusive<usize>>,
) -> Result<Box<[T]>, Error> {
    let count = reader.read_u16(field)? as usize;
    verify_count(field, count, bounds)?;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(T::wire_deserialize(reader)?);
    }
    Ok(items.into_boxed_slice())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    impl WireSerialize for u16 {
        fn wire_serialize(&self, writer: &mut WriteCursor) -> Result<(), Error> {
            writer.write_u16("item", *self)
        }
    }

    impl WireDeserialize for u16 {
        fn wire_deserialize(reader: &mut ReadCursor<'_>) -> Result<Self, Error> {
            reader.read_u16("item")
        }
    }

    #[test]
    fn list_round_trip() {
        let items = [1u16, 2, 3];
        let mut writer = WriteCursor::new();
        write_list_u8(&mut writer, "items", &items, Some(&(1..=8))).unwrap();
        let bytes = writer.into_bytes();
        assert_eq!(bytes[0], 3);
        let mut reader = ReadCursor::new(&bytes);
        let decoded: Box<[u16]> = read_list_u8(&mut reader, "items", Some(&(1..=8))).unwrap();
        assert_eq!(decoded.as_ref(), &items);
    }

    #[test]
    fn count_bounds_are_enforced_both_ways() {
        let items = [1u16; 9];
        let mut writer = WriteCursor::new();
        assert_eq!(
            write_list_u8(&mut writer, "items", &items, Some(&(1..=8))),
            Err(Error::CountOutOfBounds {
                field: "items",
                count: 9,
                min: 1,
                max: 8,
            })
        );

        let bytes = [0u8];
        let mut reader = ReadCursor::new(&bytes);
        assert!(matches!(
            read_list_u8::<u16>(&mut reader, "items", Some(&(1..=8))),
            Err(Error::CountOutOfBounds { count: 0, .. })
        ));
    }
}
