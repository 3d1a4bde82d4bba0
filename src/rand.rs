// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing random generation helpers used by the test suite.

use rand::{
    distributions::{
        uniform::{SampleRange, SampleUniform},
        Distribution, Standard,
    },
    Rng, RngCore,
};

/// Generates a random byte array of length `N`.
pub fn rand_bytes_array<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}

/// Generates a random byte vector of the given length.
pub fn rand_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}

/// Generates a random number.
pub fn rand_number<T>() -> T
where
    Standard: Distribution<T>,
{
    rand::random()
}

/// Generates a random number within the given range.
pub fn rand_number_range<T, R>(range: R) -> T
where
    T: SampleUniform,
    R: SampleRange<T>,
{
    rand::thread_rng().gen_range(range)
}
