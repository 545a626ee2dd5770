// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sentinel-valued lookups for fast-scroll overlays.
//!
//! Fast-scroll widgets typically speak in signed integers and expect `-1` for "no
//! answer", so a drag past either end of the track can be clamped without special
//! error handling. [`SectionIndexer`] is that contract; [`SectionIndex`] and the list
//! adapters built on it implement it by delegating to the `Option`-returning lookups.

use crate::SectionIndex;

/// Returned by [`SectionIndexer::position_for_section`] when the section does not exist.
pub const NO_POSITION: isize = -1;

/// Returned by [`SectionIndexer::section_for_position`] when no section holds the position.
pub const NO_SECTION: isize = -1;

/// Section lookups with `-1` sentinels instead of `Option`.
pub trait SectionIndexer {
    /// Label type shown by the overlay.
    type Label;

    /// Labels, one per section.
    fn sections(&self) -> &[Self::Label];

    /// First position of `section`, or [`NO_POSITION`].
    fn position_for_section(&self, section: isize) -> isize;

    /// Section containing `position`, or [`NO_SECTION`].
    fn section_for_position(&self, position: isize) -> isize;
}

impl<L> SectionIndexer for SectionIndex<L> {
    type Label = L;

    fn sections(&self) -> &[L] {
        self.labels()
    }

    fn position_for_section(&self, section: isize) -> isize {
        usize::try_from(section)
            .ok()
            .and_then(|section| Self::position_for_section(self, section))
            .and_then(|position| isize::try_from(position).ok())
            .unwrap_or(NO_POSITION)
    }

    fn section_for_position(&self, position: isize) -> isize {
        usize::try_from(position)
            .ok()
            .and_then(|position| Self::section_for_position(self, position))
            .and_then(|section| isize::try_from(section).ok())
            .unwrap_or(NO_SECTION)
    }
}
