// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped model: sections are groups, items are their children.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Display;

use understory_section_index::{
    IndexError, Section, SectionIndex, SectionIndexer, SectionLayout, sections_from_sorted_map,
};

/// Sections presented as expandable groups of children.
///
/// Positions used by the fast-scroll lookups count children only; group headers do
/// not occupy a position. Like [`FlatSectionedList`](crate::FlatSectionedList), the
/// index is a snapshot taken at construction.
#[derive(Clone, Debug)]
pub struct GroupedSectionedList<K, E> {
    sections: Vec<Section<K, E>>,
    index: SectionIndex,
}

impl<K, E> GroupedSectionedList<K, E> {
    /// Builds the list over `sections`, in the given order.
    pub fn new(sections: Vec<Section<K, E>>) -> Result<Self, IndexError> {
        let index = SectionIndex::build(&sections, SectionLayout::Grouped)?;
        Ok(Self { sections, index })
    }

    /// Like [`GroupedSectionedList::new`], for hosts whose section source may be absent.
    pub fn try_new(sections: Option<Vec<Section<K, E>>>) -> Result<Self, IndexError> {
        Self::new(sections.ok_or(IndexError::MissingSections)?)
    }

    /// Builds the list from an ordered map, one group per key, labelled by the key.
    pub fn from_sorted_map<I>(map: BTreeMap<K, I>) -> Result<Self, IndexError>
    where
        K: Ord + Display,
        I: IntoIterator<Item = E>,
    {
        Self::new(sections_from_sorted_map(map))
    }

    /// Number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The group at `group`.
    #[must_use]
    pub fn group(&self, group: usize) -> Option<&Section<K, E>> {
        self.sections.get(group)
    }

    /// Number of children in `group`.
    #[must_use]
    pub fn children_count(&self, group: usize) -> Option<usize> {
        self.group(group).map(Section::len)
    }

    /// The child at `child` within `group`.
    #[must_use]
    pub fn child(&self, group: usize, child: usize) -> Option<&E> {
        self.group(group)?.get(child)
    }

    /// Identifier of `group` (its index).
    #[must_use]
    pub fn group_id(&self, group: usize) -> Option<usize> {
        (group < self.sections.len()).then_some(group)
    }

    /// Identifier of `child` within `group` (its index within the group).
    #[must_use]
    pub fn child_id(&self, group: usize, child: usize) -> Option<usize> {
        self.child(group, child).map(|_| child)
    }

    /// Always `false`: identifiers are indices and change when the data changes.
    #[must_use]
    pub fn has_stable_ids(&self) -> bool {
        false
    }

    /// Returns `true` for every existing child.
    #[must_use]
    pub fn is_child_selectable(&self, group: usize, child: usize) -> bool {
        self.child(group, child).is_some()
    }

    /// Flat position of `child` within `group`.
    #[must_use]
    pub fn flat_position(&self, group: usize, child: usize) -> Option<usize> {
        let range = self.index.section_range(group)?;
        let position = range.start.checked_add(child)?;
        range.contains(&position).then_some(position)
    }

    /// The `(group, child)` pair at flat `position`.
    #[must_use]
    pub fn locate(&self, position: usize) -> Option<(usize, usize)> {
        let group = self.index.section_for_position(position)?;
        let start = self.index.position_for_section(group)?;
        Some((group, position - start))
    }

    /// The groups, in order.
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
}

impl<K, E> SectionIndexer for GroupedSectionedList<K, E> {
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
