//! Performance benchmarks for sift

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sift::output::{format_size, write_results};
use sift::test_utils::TestTree;
use sift::{SearchConfig, search};
use termcolor::NoColor;

fn create_test_tree_with_files(count: usize) -> TestTree {
    let tree = TestTree::new();
    tree.populate(count);
    tree
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let config = SearchConfig::default();

    let small = create_test_tree_with_files(10);
    group.bench_function("small_tree_10_files", |b| {
        b.iter(|| search(black_box("file"), small.path(), &config))
    });

    let medium = create_test_tree_with_files(100);
    group.bench_function("medium_tree_100_files", |b| {
        b.iter(|| search(black_box("file"), medium.path(), &config))
    });

    let large = create_test_tree_with_files(1000);
    group.bench_function("large_tree_1000_files", |b| {
        b.iter(|| search(black_box("file"), large.path(), &config))
    });

    group.finish();
}

fn bench_search_modes(c: &mut Criterion) {
    let tree = create_test_tree_with_files(500);
    let mut group = c.benchmark_group("search_modes");

    let modes = [
        ("substring_case_sensitive", SearchConfig::default()),
        (
            "substring_ignore_case",
            SearchConfig {
                case_sensitive: false,
                ..SearchConfig::default()
            },
        ),
        (
            "exact",
            SearchConfig {
                exact_match: true,
                ..SearchConfig::default()
            },
        ),
        (
            "non_recursive",
            SearchConfig {
                recursive: false,
                ..SearchConfig::default()
            },
        ),
    ];

    for (name, config) in modes {
        group.bench_function(name, |b| {
            b.iter(|| search(black_box("FILE_4"), tree.path(), &config))
        });
    }

    group.finish();
}

fn bench_presenter(c: &mut Criterion) {
    let tree = create_test_tree_with_files(500);
    let results = search(".", tree.path(), &SearchConfig::default()).unwrap();

    let mut group = c.benchmark_group("presenter");

    group.bench_function("write_500_results", |b| {
        b.iter(|| {
            let mut out = NoColor::new(Vec::new());
            write_results(&mut out, black_box(results.clone())).unwrap();
            out.into_inner()
        })
    });

    group.bench_function("format_size", |b| {
        b.iter(|| format_size(black_box(1_536_000_000)))
    });

    group.finish();
}

criterion_group!(benches, bench_search, bench_search_modes, bench_presenter);
criterion_main!(benches);
