// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing utility functions.

/// A Serde helper module for converting values to [`String`].
pub mod stringify {
    use std::{fmt::Display, marker::PhantomData, str::FromStr};

    use serde::{de::Visitor, Deserializer, Serializer};

    /// Deserialize T using [`FromStr`]
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        struct Helper<S>(PhantomData<S>);

        impl<'de, S> Visitor<'de> for Helper<S>
        where
            S: FromStr,
            <S as FromStr>::Err: Display,
        {
            type Value = S;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "a string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse::<Self::Value>().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(Helper(PhantomData))
    }

    /// Serialize T using [`Display`]
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(&value)
    }
}

/// A Serde helper module for 256-bit amounts as decimal strings.
///
/// [`primitive_types::U256`] parses hex via [`FromStr`](std::str::FromStr)
/// but displays decimal, so the generic [`stringify`] helper would not round
/// trip; this module pins both directions to decimal.
pub mod u256_stringify {
    use primitive_types::U256;
    use serde::{de::Visitor, Deserializer, Serializer};

    /// Deserialize a [`U256`] from a decimal string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Helper;

        impl<'de> Visitor<'de> for Helper {
            type Value = U256;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "a decimal string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                U256::from_dec_str(value).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(Helper)
    }

    /// Serialize a [`U256`] as a decimal string.
    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value)
    }
}

/// `serde_bytes` cannot be used with sized arrays, so this works around that limitation.
pub mod bytify {
    use std::marker::PhantomData;

    use serde::{de::Visitor, Deserializer, Serializer};

    /// Deserialize T from bytes
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: for<'a> TryFrom<&'a [u8]>,
    {
        struct Helper<S>(PhantomData<S>);

        impl<'de, S> Visitor<'de> for Helper<S>
        where
            S: for<'a> TryFrom<&'a [u8]>,
        {
            type Value = S;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "bytes")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.try_into().map_err(|_| serde::de::Error::custom("invalid bytes"))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or_default());
                while let Some(byte) = seq.next_element::<u8>()? {
                    bytes.push(byte);
                }
                bytes
                    .as_slice()
                    .try_into()
                    .map_err(|_| serde::de::Error::custom("invalid bytes"))
            }
        }

        deserializer.deserialize_bytes(Helper(PhantomData))
    }

    /// Serialize T as bytes
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serde_bytes::Serialize::serialize(value.as_ref(), serializer)
    }
}

/// Decodes a lowercase hex string into a fixed-length byte array, accepting
/// an optional `0x` prefix.
pub(crate) fn hex_to_array<const N: usize>(s: &str) -> Result<[u8; N], crate::error::Error> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes: Vec<u8> = prefix_hex::decode(&format!("0x{s}"))?;
    bytes.as_slice().try_into().map_err(|_| {
        crate::error::Error::InvalidHex(format!("expected {} bytes, found {}", N, bytes.len()))
    })
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_hex_to_array() {
        assert_eq!(hex_to_array::<4>("0xdeadbeef").unwrap(), [0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_to_array::<4>("deadbeef").unwrap(), [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_hex_to_array_wrong_length() {
        assert!(matches!(hex_to_array::<4>("0xdead"), Err(Error::InvalidHex(_))));
    }

    #[test]
    fn test_hex_to_array_invalid_digit() {
        assert!(matches!(hex_to_array::<2>("0xzzzz"), Err(Error::InvalidHex(_))));
    }
}
