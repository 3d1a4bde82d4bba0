// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the milestone index and timestamp newtypes.

use std::fmt;

use derive_more::{Add, AddAssign, Deref, DerefMut};
use serde::{Deserialize, Serialize};

/// The index of a milestone in the milestone chain.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Add, AddAssign, Deref,
    DerefMut,
)]
#[serde(transparent)]
pub struct MilestoneIndex(pub u32);

impl fmt::Display for MilestoneIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for MilestoneIndex {
    fn from(value: u32) -> Self {
        MilestoneIndex(value)
    }
}

impl From<MilestoneIndex> for u32 {
    fn from(value: MilestoneIndex) -> Self {
        value.0
    }
}

/// The Unix timestamp of a milestone.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Add, AddAssign, Deref,
    DerefMut,
)]
#[serde(transparent)]
pub struct MilestoneTimestamp(pub u32);

impl fmt::Display for MilestoneTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for MilestoneTimestamp {
    fn from(value: u32) -> Self {
        MilestoneTimestamp(value)
    }
}

impl From<MilestoneTimestamp> for u32 {
    fn from(value: MilestoneTimestamp) -> Self {
        value.0
    }
}
