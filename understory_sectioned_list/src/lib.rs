// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sectioned_list --heading-base-level=0

//! Understory Sectioned List: list models over keyed sections.
//!
//! This crate owns an ordered collection of
//! [`Section`](understory_section_index::Section)s and exposes it the two ways list
//! surfaces usually want it:
//!
//! - [`FlatSectionedList`]: one strip of rows where every section contributes a header
//!   row followed by its items. Row lookups are O(1) through a row table built on
//!   construction.
//! - [`GroupedSectionedList`]: an expandable group/child model where only children
//!   occupy positions.
//!
//! Both answer fast-scroll queries through
//! [`SectionIndexer`](understory_section_index::SectionIndexer), backed by a
//! [`SectionIndex`](understory_section_index::SectionIndex). They differ only in the
//! [`SectionLayout`](understory_section_index::SectionLayout) used to build it.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_sectioned_list::{FlatSectionedList, Row};
//! use understory_section_index::{Section, SectionIndexer};
//!
//! let list = FlatSectionedList::new(vec![
//!     Section::with_items('A', "A", vec!["apple"]),
//!     Section::with_items('B', "B", vec!["banana", "blueberry"]),
//! ])
//! .unwrap();
//!
//! assert_eq!(list.row_count(), 5);
//! assert!(matches!(list.row(0), Some(Row::Header(s)) if s.label() == "A"));
//! assert!(matches!(list.row(1), Some(Row::Item(&"apple"))));
//! assert!(!list.is_enabled(2));
//!
//! // Fast-scroll overlay: which section is row 3 in, and where does "B" start?
//! assert_eq!(list.section_for_position(3), 1);
//! assert_eq!(list.position_for_section(1), 2);
//! assert_eq!(list.section_for_position(5), -1);
//! ```
//!
//! Neither model observes later edits to its data. Take the sections back with
//! `into_sections`, edit them, and build a new model.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod flat;
mod grouped;

pub use flat::{FlatSectionedList, Row, RowKind};
pub use grouped::GroupedSectionedList;
