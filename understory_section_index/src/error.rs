// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use core::fmt;

/// Reasons a [`SectionIndex`](crate::SectionIndex) (or a list built on one) could not
/// be constructed.
///
/// Out-of-range *queries* are not errors; they answer `None` (or the `-1` sentinel
/// through [`SectionIndexer`](crate::SectionIndexer)).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexError {
    /// The host supplied no section collection at all.
    MissingSections,
    /// The running total of positions would not fit in an `isize`.
    PositionOverflow {
        /// Index of the section whose size overflowed the total.
        section: usize,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSections => {
                f.write_str("cannot build a section index without a section collection")
            }
            Self::PositionOverflow { section } => write!(
                f,
                "section {section} pushes the total position count past isize::MAX"
            ),
        }
    }
}

impl core::error::Error for IndexError {}
