// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_section_index` crate.
//!
//! These check the position table against brute-force expectations for a spread of
//! section shapes, plus the sentinel contract seen by fast-scroll overlays.

use understory_section_index::{
    IndexError, NO_POSITION, NO_SECTION, Section, SectionIndex, SectionIndexer, SectionLayout,
};

const SHAPES: &[&[usize]] = &[
    &[1],
    &[5],
    &[1, 3, 1],
    &[3, 2, 2],
    &[2, 0, 4],
    &[0, 0, 1],
    &[4, 0, 0],
    &[1, 1, 1, 1, 1, 1, 1],
    &[10, 1, 7, 2, 0, 3],
];

fn index_for(sizes: &[usize]) -> SectionIndex<usize> {
    SectionIndex::from_sizes(sizes.iter().copied().enumerate()).unwrap()
}

#[test]
fn starts_equal_prefix_sums() {
    for sizes in SHAPES {
        let index = index_for(sizes);
        let mut sum = 0;
        for (i, &size) in sizes.iter().enumerate() {
            assert_eq!(index.section_starts()[i], sum, "shape {sizes:?}, section {i}");
            assert_eq!(index.position_for_section(i), Some(sum));
            sum += size;
        }
        assert_eq!(index.total_positions(), sum);
    }
}

#[test]
fn every_valid_position_maps_to_its_unique_section() {
    for sizes in SHAPES {
        let index = index_for(sizes);
        let starts = index.section_starts();
        for position in 0..index.total_positions() {
            let expected = (0..sizes.len())
                .find(|&i| starts[i] <= position && position < starts[i] + sizes[i])
                .unwrap();
            assert_eq!(
                index.section_for_position(position),
                Some(expected),
                "shape {sizes:?}, position {position}"
            );
        }
        assert_eq!(index.section_for_position(index.total_positions()), None);
    }
}

#[test]
fn non_empty_section_starts_round_trip() {
    for sizes in SHAPES {
        let index = index_for(sizes);
        for (i, &size) in sizes.iter().enumerate() {
            if size == 0 {
                continue;
            }
            let start = index.position_for_section(i).unwrap();
            assert_eq!(index.section_for_position(start), Some(i), "shape {sizes:?}");
        }
    }
}

#[test]
fn out_of_range_queries_return_sentinels() {
    for sizes in SHAPES {
        let index = index_for(sizes);
        let count = isize::try_from(sizes.len()).unwrap();
        let total = isize::try_from(index.total_positions()).unwrap();

        assert_eq!(SectionIndexer::position_for_section(&index, -1), NO_POSITION);
        assert_eq!(SectionIndexer::position_for_section(&index, count), NO_POSITION);
        assert_eq!(SectionIndexer::position_for_section(&index, isize::MIN), NO_POSITION);
        assert_eq!(SectionIndexer::section_for_position(&index, -1), NO_SECTION);
        assert_eq!(SectionIndexer::section_for_position(&index, total), NO_SECTION);
        assert_eq!(SectionIndexer::section_for_position(&index, isize::MAX), NO_SECTION);
    }
}

#[test]
fn grouped_scenario() {
    let sections = vec![
        Section::with_items("A", "A", vec![1]),
        Section::with_items("B", "B", vec![2, 3, 4]),
        Section::with_items("C", "C", vec![5]),
    ];
    let index = SectionIndex::build(&sections, SectionLayout::Grouped).unwrap();

    assert_eq!(index.section_starts(), &[0, 1, 4]);
    assert_eq!(SectionIndexer::section_for_position(&index, 0), 0);
    assert_eq!(SectionIndexer::section_for_position(&index, 3), 1);
    assert_eq!(SectionIndexer::section_for_position(&index, 4), 2);
    assert_eq!(SectionIndexer::section_for_position(&index, 5), -1);
    assert_eq!(SectionIndexer::section_for_position(&index, -1), -1);
}

#[test]
fn flattened_scenario_counts_headers() {
    let sections = vec![
        Section::with_items("A", "A", vec![1]),
        Section::with_items("B", "B", vec![2, 3]),
    ];
    let index = SectionIndex::build(&sections, SectionLayout::Flattened).unwrap();

    assert_eq!(index.section_sizes(), &[2, 3]);
    assert_eq!(index.section_starts(), &[0, 2]);
    assert_eq!(index.section_for_position(1), Some(0));
    assert_eq!(index.section_for_position(2), Some(1));
    assert_eq!(index.last_position(), Some(4));
}

#[test]
fn empty_collection_answers_minus_one_everywhere() {
    let sections: Vec<Section<char, u8>> = Vec::new();
    for layout in [SectionLayout::Flattened, SectionLayout::Grouped] {
        let index = SectionIndex::build(&sections, layout).unwrap();
        assert!(index.sections().is_empty());
        for query in [-2, -1, 0, 1, 100] {
            assert_eq!(SectionIndexer::position_for_section(&index, query), -1);
            assert_eq!(SectionIndexer::section_for_position(&index, query), -1);
        }
    }
}

#[test]
fn index_is_a_snapshot() {
    let mut sections = vec![
        Section::with_items('A', "A", vec![1, 2]),
        Section::with_items('B', "B", vec![3]),
    ];
    let index = SectionIndex::build(&sections, SectionLayout::Grouped).unwrap();

    sections[0].push(99);
    assert_eq!(index.section_starts(), &[0, 2]);

    let rebuilt = SectionIndex::build(&sections, SectionLayout::Grouped).unwrap();
    assert_eq!(rebuilt.section_starts(), &[0, 3]);
}

#[test]
fn missing_sections_is_a_construction_error() {
    assert_eq!(
        SectionIndex::try_build::<char, u8>(None, SectionLayout::Flattened),
        Err(IndexError::MissingSections)
    );
}

#[cfg(feature = "serde")]
#[test]
fn section_survives_json_round_trip() {
    let section = Section::with_items('A', "Apples", vec![1_u8, 2]);
    let json = serde_json::to_string(&section).unwrap();
    assert_eq!(json, r#"{"key":"A","label":"Apples","items":[1,2]}"#);

    let back: Section<char, u8> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.key(), &'A');
    assert_eq!(back.label(), "Apples");
    assert_eq!(back.items(), &[1, 2]);
    assert_eq!(back, section);
}
