// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattened-row model: one strip of rows, a header row before each section's items.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Display;

use understory_section_index::{
    IndexError, Section, SectionIndex, SectionIndexer, SectionLayout, sections_from_sorted_map,
};

/// What a row position refers to, by index into the owned sections.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RowSlot {
    Header { section: usize },
    Item { section: usize, item: usize },
}

/// A row of a [`FlatSectionedList`].
#[derive(Debug)]
pub enum Row<'a, K, E> {
    /// The header row of a section.
    Header(&'a Section<K, E>),
    /// A single item.
    Item(&'a E),
}

impl<K, E> Clone for Row<'_, K, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, E> Copy for Row<'_, K, E> {}

impl<K, E> Row<'_, K, E> {
    /// Returns the kind of this row.
    #[must_use]
    pub fn kind(&self) -> RowKind {
        match self {
            Self::Header(_) => RowKind::Header,
            Self::Item(_) => RowKind::Item,
        }
    }
}

/// Row kinds, for hosts that pick a view type per row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// A section header.
    Header,
    /// A section item.
    Item,
}

/// Sections presented as one flat strip of rows.
///
/// Row `p` is either a section header or an item. Headers are not enabled (not
/// selectable); items are. The row table and the section index are both built on
/// construction and never updated: to change the data, take it back with
/// [`FlatSectionedList::into_sections`], edit, and construct a new list.
#[derive(Clone, Debug)]
pub struct FlatSectionedList<K, E> {
    sections: Vec<Section<K, E>>,
    rows: Vec<RowSlot>,
    index: SectionIndex,
}

impl<K, E> FlatSectionedList<K, E> {
    /// Builds the list over `sections`, in the given order.
    pub fn new(sections: Vec<Section<K, E>>) -> Result<Self, IndexError> {
        let index = SectionIndex::build(&sections, SectionLayout::Flattened)?;
        let rows = linearize(&sections, index.total_positions());
        log::debug!(
            "flattened {} sections into {} rows",
            sections.len(),
            rows.len()
        );
        Ok(Self {
            sections,
            rows,
            index,
        })
    }

    /// Like [`FlatSectionedList::new`], for hosts whose section source may be absent.
    pub fn try_new(sections: Option<Vec<Section<K, E>>>) -> Result<Self, IndexError> {
        Self::new(sections.ok_or(IndexError::MissingSections)?)
    }

    /// Builds the list from an ordered map, one section per key, labelled by the key.
    pub fn from_sorted_map<I>(map: BTreeMap<K, I>) -> Result<Self, IndexError>
    where
        K: Ord + Display,
        I: IntoIterator<Item = E>,
    {
        Self::new(sections_from_sorted_map(map))
    }

    /// Total number of rows, headers included.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows (and hence no sections).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row at `position`.
    #[must_use]
    pub fn row(&self, position: usize) -> Option<Row<'_, K, E>> {
        self.rows.get(position).map(|&slot| self.resolve(slot))
    }

    /// Returns the kind of the row at `position`.
    #[must_use]
    pub fn row_kind(&self, position: usize) -> Option<RowKind> {
        self.row(position).map(|row| row.kind())
    }

    /// Returns the item at `position`, or `None` for headers and out-of-range positions.
    #[must_use]
    pub fn item(&self, position: usize) -> Option<&E> {
        match self.row(position)? {
            Row::Item(item) => Some(item),
            Row::Header(_) => None,
        }
    }

    /// Stable-per-snapshot identifier for the row at `position` (the position itself).
    #[must_use]
    pub fn row_id(&self, position: usize) -> Option<usize> {
        (position < self.rows.len()).then_some(position)
    }

    /// Returns `true` if the row at `position` is an item.
    #[must_use]
    pub fn is_enabled(&self, position: usize) -> bool {
        matches!(self.rows.get(position), Some(RowSlot::Item { .. }))
    }

    /// Always `false`: header rows are never enabled.
    #[must_use]
    pub fn are_all_rows_enabled(&self) -> bool {
        false
    }

    /// Iterates over all rows in position order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_, K, E>> + '_ {
        self.rows.iter().map(|&slot| self.resolve(slot))
    }

    /// The sections, in order.
    #[must_use]
    pub fn sections(&self) -> &[Section<K, E>] {
        &self.sections
    }

    /// The section index backing the fast-scroll lookups.
    #[must_use]
    pub fn index(&self) -> &SectionIndex {
        &self.index
    }

    /// Consumes the list, returning the sections for editing and rebuilding.
    #[must_use]
    pub fn into_sections(self) -> Vec<Section<K, E>> {
        self.sections
    }

    fn resolve(&self, slot: RowSlot) -> Row<'_, K, E> {
        match slot {
            RowSlot::Header { section } => Row::Header(&self.sections[section]),
            RowSlot::Item { section, item } => Row::Item(&self.sections[section].items()[item]),
        }
    }
}

impl<K, E> SectionIndexer for FlatSectionedList<K, E> {
    type Label = String;

    fn sections(&self) -> &[String] {
        self.index.labels()
    }

    fn position_for_section(&self, section: isize) -> isize {
        SectionIndexer::position_for_section(&self.index, section)
    }

    fn section_for_position(&self, position: isize) -> isize {
        SectionIndexer::section_for_position(&self.index, position)
    }
}

/// Header then items, section by section.
fn linearize<K, E>(sections: &[Section<K, E>], row_count: usize) -> Vec<RowSlot> {
    let mut rows = Vec::with_capacity(row_count);
    for (section, entries) in sections.iter().enumerate() {
        rows.push(RowSlot::Header { section });
        rows.extend((0..entries.len()).map(|item| RowSlot::Item { section, item }));
    }
    rows
}
