// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sections: keyed, labelled runs of items.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Display;

/// Something that can be indexed by an orderable key and shown with a label.
///
/// The label is a display value only. It need not correspond to the key and must not
/// be used for ordering or lookups.
pub trait Indexable {
    /// Key type used for ordering.
    type Key: Ord;

    /// Returns the index key.
    fn key(&self) -> &Self::Key;

    /// Returns the human-readable label.
    fn label(&self) -> &str;

    /// Orders `self` against `other` by key alone.
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.key().cmp(other.key())
    }
}

/// An ordered run of items with a key and a display label.
///
/// A `Section` is plain mutable data. Indexes built from a collection of sections are
/// snapshots: editing a section afterwards does not update them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section<K, E> {
    key: K,
    label: String,
    items: Vec<E>,
}

impl<K, E> Section<K, E> {
    /// Creates an empty section.
    #[must_use]
    pub fn new(key: K, label: impl Into<String>) -> Self {
        Self::with_items(key, label, Vec::new())
    }

    /// Creates an empty section with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(key: K, label: impl Into<String>, capacity: usize) -> Self {
        Self::with_items(key, label, Vec::with_capacity(capacity))
    }

    /// Creates a section holding `items`, in order.
    #[must_use]
    pub fn with_items(key: K, label: impl Into<String>, items: Vec<E>) -> Self {
        Self {
            key,
            label: label.into(),
            items,
        }
    }

    /// Returns the section key.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of items (headers are never counted here).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the section holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in order.
    #[must_use]
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// Mutable access to the items.
    pub fn items_mut(&mut self) -> &mut [E] {
        &mut self.items
    }

    /// Returns the item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.items.get(index)
    }

    /// Appends an item.
    pub fn push(&mut self, item: E) {
        self.items.push(item);
    }

    /// Inserts an item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: E) {
        self.items.insert(index, item);
    }

    /// Removes and returns the item at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<E> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Removes all items, keeping key and label.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Consumes the section, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<E> {
        self.items
    }
}

impl<K: Ord, E> Indexable for Section<K, E> {
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl<K, E> Extend<E> for Section<K, E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, K, E> IntoIterator for &'a Section<K, E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K, E> IntoIterator for Section<K, E> {
    type Item = E;
    type IntoIter = alloc::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Converts an ordered key-to-items map into sections, one per key, in key order.
///
/// Each section is labelled with its key's `Display` output. Only `BTreeMap` is
/// accepted: its iteration order is the key order, so positions are deterministic.
#[must_use]
pub fn sections_from_sorted_map<K, E, I>(map: BTreeMap<K, I>) -> Vec<Section<K, E>>
where
    K: Ord + Display,
    I: IntoIterator<Item = E>,
{
    map.into_iter()
        .map(|(key, items)| {
            let label = key.to_string();
            Section::with_items(key, label, items.into_iter().collect())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Indexable, Section, sections_from_sorted_map};
    use alloc::collections::BTreeMap;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cmp::Ordering;

    #[test]
    fn mutation_helpers_edit_items_only() {
        let mut section = Section::with_capacity('b', "Bees", 4);
        section.push(2);
        section.insert(0, 1);
        section.extend([3, 4]);
        assert_eq!(section.items(), &[1, 2, 3, 4]);
        assert_eq!(section.remove(1), Some(2));
        assert_eq!(section.remove(10), None);
        assert_eq!(section.get(2), Some(&4));
        section.items_mut()[0] = 9;
        assert_eq!(section.iter().copied().collect::<Vec<_>>(), vec![9, 3, 4]);
        section.clear();
        assert!(section.is_empty());
        assert_eq!(*section.key(), 'b');
        assert_eq!(section.label(), "Bees");
    }

    #[test]
    fn ordering_ignores_label() {
        let a = Section::<u8, ()>::new(1, "zzz");
        let b = Section::<u8, ()>::new(2, "aaa");
        assert_eq!(a.cmp_key(&b), Ordering::Less);
        assert_eq!(Indexable::label(&b), "aaa");
    }

    #[test]
    fn sorted_map_yields_key_order_and_display_labels() {
        let mut map = BTreeMap::new();
        map.insert(30_u32, vec!["c"]);
        map.insert(10, vec!["a", "aa"]);
        map.insert(20, vec![]);

        let sections = sections_from_sorted_map(map);
        let keys: Vec<_> = sections.iter().map(|s| *s.key()).collect();
        assert_eq!(keys, vec![10, 20, 30]);
        assert_eq!(sections[0].label(), "10");
        assert_eq!(sections[0].items(), &["a", "aa"]);
        assert!(sections[1].is_empty());
    }
}
