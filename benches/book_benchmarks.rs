//! Performance benchmarks for address book operations.
//!
//! These benchmarks measure the cost of the core operations under growing
//! book sizes:
//! - Bulk insertion
//! - Name lookup (worst-case scan to the last entry, and a full-scan miss)
//! - Full traversal of all entries

use contact_book::{AddressBook, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book with `size` records, each holding one phone.
fn populated_book(size: u64) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(format!("Contact {}", i));
        record.add_phone(&format!("{:010}", i)).unwrap();
        book.add_record(record);
    }
    book
}

/// Benchmark bulk insertion of records.
fn bench_add_record(c: &mut Criterion) {
    c.bench_function("add_record_1000", |b| {
        b.iter(|| {
            let mut book = AddressBook::new();
            for i in 0..1000u64 {
                book.add_record(Record::new(format!("Contact {}", i)));
            }
            book
        });
    });
}

/// Benchmark name lookup across book sizes.
fn bench_find_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_name");

    for size in [100u64, 1_000, 10_000] {
        let book = populated_book(size);
        let last_name = format!("Contact {}", size - 1);

        group.bench_with_input(BenchmarkId::new("last_entry", size), &size, |b, _| {
            b.iter(|| book.find_by_name(&last_name));
        });

        group.bench_with_input(BenchmarkId::new("miss", size), &size, |b, _| {
            b.iter(|| book.find_by_name("No Such Contact"));
        });
    }

    group.finish();
}

/// Benchmark full traversal of a populated book.
fn bench_entries_traversal(c: &mut Criterion) {
    let book = populated_book(10_000);

    c.bench_function("entries_traversal_10000", |b| {
        b.iter(|| book.entries().count());
    });
}

criterion_group!(
    benches,
    bench_add_record,
    bench_find_by_name,
    bench_entries_traversal
);
criterion_main!(benches);
