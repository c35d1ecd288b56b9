//! Performance benchmarks for contact search and list updates.
//!
//! These benchmarks measure:
//! - Fuzzy name search over lists of different sizes
//! - Exact phone search
//! - Appending to and removing from the store (each builds a new snapshot)

use contact_list::matching::{ContactMatcher, ContactQuery};
use contact_list::{ContactDraft, ContactStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const NAMES: [&str; 8] = [
    "Ana Silva",
    "Bo Lee",
    "Cy Costa",
    "Sophia Balico",
    "John Doe",
    "Jane Smith",
    "Maria Souza",
    "Pedro Alves",
];

const CATEGORIES: [&str; 3] = ["Work", "Family", "Personal"];

fn create_store(size: usize) -> ContactStore {
    let mut store = ContactStore::new();
    for i in 0..size {
        let draft = ContactDraft::new(
            format!("{} {}", NAMES[i % NAMES.len()], i),
            format!("+55 11 9{:04}-{:04}", i / 10_000, i % 10_000),
            CATEGORIES[i % CATEGORIES.len()],
        );
        store.upsert(&draft, None).expect("benchmark drafts are valid");
    }
    store
}

/// Benchmark fuzzy name search across list sizes.
fn bench_name_search(c: &mut Criterion) {
    let matcher = ContactMatcher::new();
    let query = ContactQuery {
        name: Some("sophia".to_string()),
        ..Default::default()
    };

    let mut group = c.benchmark_group("name_search");
    for size in [10, 100, 1000] {
        let contacts = create_store(size).snapshot();
        group.bench_with_input(BenchmarkId::from_parameter(size), &contacts, |b, contacts| {
            b.iter(|| matcher.find_matches(black_box(&query), contacts.as_slice(), 5, 30));
        });
    }
    group.finish();
}

/// Benchmark exact phone search.
fn bench_phone_search(c: &mut Criterion) {
    let matcher = ContactMatcher::new();
    let contacts = create_store(1000).snapshot();
    let query = ContactQuery {
        phone: Some("+55 11 90000-0500".to_string()),
        ..Default::default()
    };

    c.bench_function("phone_search_1000", |b| {
        b.iter(|| matcher.find_matches(black_box(&query), contacts.as_slice(), 5, 30));
    });
}

/// Benchmark store mutations on a mid-sized list.
fn bench_store_updates(c: &mut Criterion) {
    let draft = ContactDraft::new("New Contact", "123", "Work");

    c.bench_function("append_and_remove_100", |b| {
        b.iter_batched(
            || create_store(100),
            |mut store| {
                store.upsert(black_box(&draft), None).ok();
                store.remove_at(0).ok();
                store
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_name_search,
    bench_phone_search,
    bench_store_updates
);
criterion_main!(benches);
