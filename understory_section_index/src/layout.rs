// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! How many positions a section occupies.
//!
//! The two list shapes differ in exactly one respect: whether a section's header
//! takes up a position of its own.

/// Size-of-unit policy used when building a [`SectionIndex`](crate::SectionIndex).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionLayout {
    /// One flat row strip: each section contributes a header row followed by its items.
    #[default]
    Flattened,
    /// Group/child model: headers are groups, only items occupy positions.
    Grouped,
}

impl SectionLayout {
    /// Number of positions a section header occupies (`1` or `0`).
    #[must_use]
    pub const fn header_units(self) -> usize {
        match self {
            Self::Flattened => 1,
            Self::Grouped => 0,
        }
    }

    /// Number of positions occupied by a section holding `item_count` items.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub const fn units(self, item_count: usize) -> Option<usize> {
        item_count.checked_add(self.header_units())
    }
}
