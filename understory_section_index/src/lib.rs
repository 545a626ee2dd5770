// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_section_index --heading-base-level=0

//! Understory Section Index: position/section lookups for sectioned lists.
//!
//! A sectioned list presents an ordered collection of [`Section`]s, each a keyed and
//! labelled run of items. Fast-scroll overlays need two answers from such a list:
//! which section a scroll position falls into, and where a section begins. This crate
//! provides those answers without knowing anything about views or rendering.
//!
//! The core concepts are:
//!
//! - [`Section`] and [`Indexable`]: the key used for ordering, the label used for display,
//!   and the items.
//! - [`SectionLayout`]: how many positions a section occupies. A flattened row strip
//!   gives every section a header row; a grouped (group/child) list does not.
//! - [`SectionIndex`]: a snapshot of per-section labels, sizes, and start positions,
//!   built in one pass, with O(log n) position-to-section and O(1) section-to-position
//!   lookups.
//! - [`SectionIndexer`]: the same lookups with `-1` sentinels, for overlays that treat
//!   "no answer" as an ordinary result.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_section_index::{Section, SectionIndex, SectionLayout};
//!
//! let sections = vec![
//!     Section::with_items('A', "A", vec!["apple"]),
//!     Section::with_items('B', "B", vec!["banana", "blueberry", "brioche"]),
//!     Section::with_items('C', "C", vec!["cherry"]),
//! ];
//!
//! let index = SectionIndex::build(&sections, SectionLayout::Grouped).unwrap();
//! assert_eq!(index.section_starts(), &[0, 1, 4]);
//! assert_eq!(index.section_for_position(3), Some(1));
//! assert_eq!(index.section_for_position(5), None);
//! assert_eq!(index.position_for_section(2), Some(4));
//! ```
//!
//! The index does not observe the sections it was built from. When the data changes,
//! build a new one.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod index;
mod indexer;
mod layout;
mod section;

pub use error::IndexError;
pub use index::SectionIndex;
pub use indexer::{NO_POSITION, NO_SECTION, SectionIndexer};
pub use layout::SectionLayout;
pub use section::{Indexable, Section, sections_from_sorted_map};
