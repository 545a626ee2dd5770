// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The section index: parallel label/size/start tables and the two lookups.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::Range;

use crate::{IndexError, Section, SectionLayout};

/// Immutable position table for an ordered collection of sections.
///
/// Built once in a single pass. For every section `i`:
///
/// - `section_sizes()[i]` is the number of positions it occupies,
/// - `section_starts()[i]` is the sum of all earlier sizes, i.e. its first position.
///
/// The starts are non-decreasing and begin at `0`. The index is a snapshot and keeps
/// no link to the data it was built from; rebuild it when the sections change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionIndex<L = String> {
    labels: Vec<L>,
    sizes: Vec<usize>,
    starts: Vec<usize>,
    total: usize,
}

impl<L> Default for SectionIndex<L> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            sizes: Vec::new(),
            starts: Vec::new(),
            total: 0,
        }
    }
}

impl<L> SectionIndex<L> {
    /// Builds an index from `(label, size)` pairs, in order.
    ///
    /// Fails with [`IndexError::PositionOverflow`] if the total would exceed
    /// `isize::MAX`.
    pub fn from_sizes<I>(sections: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = (L, usize)>,
    {
        let sections = sections.into_iter();
        let (lower, _) = sections.size_hint();
        let mut labels = Vec::with_capacity(lower);
        let mut sizes = Vec::with_capacity(lower);
        let mut starts = Vec::with_capacity(lower);

        let mut position = 0_usize;
        for (section, (label, size)) in sections.enumerate() {
            starts.push(position);
            position = position
                .checked_add(size)
                .filter(|&total| isize::try_from(total).is_ok())
                .ok_or(IndexError::PositionOverflow { section })?;
            sizes.push(size);
            labels.push(label);
        }

        log::debug!(
            "built section index: {} sections, {} positions",
            labels.len(),
            position
        );

        Ok(Self {
            labels,
            sizes,
            starts,
            total: position,
        })
    }

    /// Builds an index from any slice of sections, given how to label and size each one.
    ///
    /// This is the generic entry point; [`SectionIndex::build`] fixes the size function
    /// to a [`SectionLayout`].
    pub fn build_with<S>(
        sections: &[S],
        mut label_of: impl FnMut(&S) -> L,
        mut size_of: impl FnMut(&S) -> usize,
    ) -> Result<Self, IndexError> {
        Self::from_sizes(sections.iter().map(|s| (label_of(s), size_of(s))))
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if there are no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Section labels, one per section.
    #[must_use]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Label of `section`, if it exists.
    #[must_use]
    pub fn label(&self, section: usize) -> Option<&L> {
        self.labels.get(section)
    }

    /// Positions occupied by each section, parallel to [`SectionIndex::labels`].
    #[must_use]
    pub fn section_sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// First position of each section, parallel to [`SectionIndex::labels`].
    #[must_use]
    pub fn section_starts(&self) -> &[usize] {
        &self.starts
    }

    /// Total number of positions across all sections.
    #[must_use]
    pub fn total_positions(&self) -> usize {
        self.total
    }

    /// The last valid position, or `None` if no section occupies any position.
    #[must_use]
    pub fn last_position(&self) -> Option<usize> {
        self.total.checked_sub(1)
    }

    /// Positions covered by `section`, as a half-open range.
    #[must_use]
    pub fn section_range(&self, section: usize) -> Option<Range<usize>> {
        let start = *self.starts.get(section)?;
        Some(start..start + self.sizes[section])
    }

    /// First position of `section`, or `None` if the section does not exist.
    #[must_use]
    pub fn position_for_section(&self, section: usize) -> Option<usize> {
        let position = self.starts.get(section).copied();
        if position.is_none() {
            log::debug!(
                "no start position for section {section}, sections range is [0,{})",
                self.len()
            );
        }
        position
    }

    /// Section containing `position`, or `None` if the position is past the end.
    ///
    /// Floor search over the start table: the answer is the last section whose start
    /// is `<= position`. Sections of size zero share their start with the next
    /// section and never contain a position, so taking the *last* such start picks
    /// the section that actually holds it.
    #[must_use]
    pub fn section_for_position(&self, position: usize) -> Option<usize> {
        if position >= self.total {
            log::debug!(
                "no section for position {position}, positions range is [0,{})",
                self.total
            );
            return None;
        }
        // `starts[0] == 0 <= position`, so at least one start precedes it.
        Some(self.starts.partition_point(|&start| start <= position) - 1)
    }
}

impl SectionIndex<String> {
    /// Builds an index over `sections` using `layout` to size each one.
    ///
    /// Labels are copied from the sections.
    pub fn build<K, E>(
        sections: &[Section<K, E>],
        layout: SectionLayout,
    ) -> Result<Self, IndexError> {
        Self::from_sizes(sections.iter().map(|s| {
            // Saturating is enough: a size of usize::MAX always overflows the total.
            let size = layout.units(s.len()).unwrap_or(usize::MAX);
            (s.label().to_string(), size)
        }))
    }

    /// Like [`SectionIndex::build`], for hosts whose section source may be absent.
    ///
    /// Fails with [`IndexError::MissingSections`] when `sections` is `None`.
    pub fn try_build<K, E>(
        sections: Option<&[Section<K, E>]>,
        layout: SectionLayout,
    ) -> Result<Self, IndexError> {
        let sections = sections.ok_or(IndexError::MissingSections)?;
        Self::build(sections, layout)
    }
}
