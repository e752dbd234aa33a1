//! Performance benchmarks for listing and search.
//!
//! These benchmarks measure:
//! - Substring search over books of different sizes
//! - Paginated rendering with different page sizes

use contact_book::{AddressBook, Birthday, Name, Phone, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

/// Build a book of `size` contacts with distinct names and phones.
fn create_test_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let name = Name::new(format!("Contact{:05}", i)).unwrap();
        let birthday = Birthday::new(&format!("{:02}.{:02}.1990", i % 28 + 1, i % 12 + 1)).unwrap();
        let phone = Phone::new(&format!("3805{:08}", i)).unwrap();
        book.add_record(Record::new(name, Some(birthday), Some(phone)));
    }
    book
}

/// Benchmark search across book sizes.
fn bench_search_book_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_book_sizes");

    for size in [100, 1_000, 10_000].iter() {
        let book = create_test_book(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.search(black_box("Contact0042")));
        });
    }

    group.finish();
}

/// Benchmark rendering every page with different page sizes.
fn bench_pages(c: &mut Criterion) {
    let book = create_test_book(1_000);
    let mut group = c.benchmark_group("pages");

    for page_size in [1, 10, 100].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(page_size),
            page_size,
            |b, &page_size| {
                b.iter(|| book.pages(black_box(page_size)).count());
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(50);
    targets = bench_search_book_sizes, bench_pages
}

criterion_main!(benches);
