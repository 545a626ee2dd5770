// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_section_index::{Section, SectionIndex, SectionLayout};
use understory_sectioned_list::FlatSectionedList;

/// Uneven sections: sizes cycle through 0..17 so some sections are empty.
fn make_sections(count: usize) -> Vec<Section<u32, u32>> {
    (0..count)
        .map(|i| {
            let key = i as u32;
            let items = (0..(i % 17) as u32).collect();
            Section::with_items(key, format!("{key}"), items)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_index/build");

    for count in [32usize, 1_024, 32_768] {
        let sections = make_sections(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::new("index_grouped", count),
            &sections,
            |b, sections| {
                b.iter(|| {
                    black_box(SectionIndex::build(sections, SectionLayout::Grouped).unwrap())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("flat_list", count),
            &sections,
            |b, sections| {
                b.iter_batched(
                    || sections.clone(),
                    |sections| black_box(FlatSectionedList::new(sections).unwrap()),
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_index/lookup");

    for count in [32usize, 1_024, 32_768] {
        let sections = make_sections(count);
        let index = SectionIndex::build(&sections, SectionLayout::Flattened).unwrap();
        let total = index.total_positions();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(
            BenchmarkId::new("section_for_position", count),
            &index,
            |b, index| {
                b.iter(|| {
                    for position in 0..total {
                        black_box(index.section_for_position(black_box(position)));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("position_for_section", count),
            &index,
            |b, index| {
                b.iter(|| {
                    for section in 0..count {
                        black_box(index.position_for_section(black_box(section)));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_lookup);
criterion_main!(benches);
