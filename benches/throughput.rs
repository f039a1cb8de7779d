use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use expense_ledger::ExpenseStore;
use rust_decimal::Decimal;
use std::time::Duration;

const NUM_EXPENSES: usize = 100_000;
const CATEGORIES: [&str; 8] = [
    "coffee", "food", "transport", "utilities", "rent", "books", "travel", "gifts",
];

/// Builds a store of `NUM_EXPENSES` records spread over a year of dates, with every tenth record deleted.
fn populated_store() -> ExpenseStore {
    let mut store = ExpenseStore::new();
    for i in 0..NUM_EXPENSES {
        let amount = Decimal::new((i * 7919 % 100_000) as i64, 2);
        let category = CATEGORIES[i % CATEGORIES.len()];
        let date = format!("2024-{:02}-{:02}", 1 + (i / 28) % 12, 1 + i % 28);
        store.add(amount, category, date);
    }
    for id in (0..NUM_EXPENSES).step_by(10) {
        store.delete(id).unwrap();
    }
    store
}

fn inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("inserts");

    group.throughput(Throughput::Elements(NUM_EXPENSES as u64));
    group.measurement_time(Duration::from_secs(20));
    group.sample_size(20);

    group.bench_function("add_100K_expenses_delete_10K", |b| {
        b.iter(|| black_box(populated_store()));
    });

    group.finish();
}

fn queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let store = populated_store();

    group.bench_function("top_100", |b| b.iter(|| black_box(store.top_n(100).len())));
    group.bench_function("list_by_date", |b| {
        b.iter(|| black_box(store.list_by_date("2024-06-15").len()))
    });
    group.bench_function("list_by_category", |b| {
        b.iter(|| black_box(store.list_by_category("rent").len()))
    });
    group.bench_function("list_between_one_month", |b| {
        b.iter(|| black_box(store.list_between("2024-03-01", "2024-03-28").len()))
    });

    group.finish();
}

criterion_group!(benches, inserts, queries);
criterion_main!(benches);
