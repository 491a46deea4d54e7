//! Benchmarks for the stockcore index structures and order pipeline.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run a specific benchmark
//! cargo bench -- ordered_insert
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use rust_decimal::Decimal;
use stockcore::{AvlTree, Product, ProductMap, SalesHeap, Warehouse};

// ============================================================================
// HELPER FUNCTIONS - Deterministic data generation
// ============================================================================

fn make_product(id: i64, sales: u32) -> Product {
    Product::with_sales(id, format!("Product {id}"), "Bench", 1_000, Decimal::ONE, sales)
}

/// Ids shuffled deterministically so tree inserts exercise rotations
/// instead of degenerating into one-sided growth.
fn scrambled_ids(count: usize) -> Vec<i64> {
    let count = count as i64;
    // 7919 is coprime with the power-of-two range sizes used below.
    (0..count).map(|i| (i * 7919) % count).collect()
}

// ============================================================================
// BENCHMARK: Ordered index insert (rotations included)
// ============================================================================

fn bench_ordered_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_insert");

    for &size in &[1_024usize, 16_384] {
        let ids = scrambled_ids(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ids, |b, ids| {
            b.iter_batched(
                AvlTree::new,
                |mut tree| {
                    for &id in ids {
                        tree.insert(make_product(id, 0));
                    }
                    black_box(tree.len())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Identity index lookup
// ============================================================================

fn bench_identity_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity_lookup");

    const SIZE: usize = 16_384;
    let mut map = ProductMap::with_capacity(16);
    for id in scrambled_ids(SIZE) {
        map.insert(make_product(id, 0));
    }

    group.throughput(Throughput::Elements(SIZE as u64));
    group.bench_function("hit_all", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for id in 0..SIZE as i64 {
                if map.get(black_box(id)).is_some() {
                    found += 1;
                }
            }
            black_box(found)
        });
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Heap key update (linear locate + directional sift)
// ============================================================================

fn bench_heap_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_update_sales");

    const SIZE: usize = 4_096;
    group.throughput(Throughput::Elements(SIZE as u64));
    group.bench_function("sweep", |b| {
        b.iter_batched(
            || {
                let mut heap = SalesHeap::max(SIZE);
                for id in 0..SIZE as i64 {
                    heap.insert(make_product(id, (id % 97) as u32)).unwrap();
                }
                heap
            },
            |mut heap| {
                for id in 0..SIZE as i64 {
                    heap.update_sales(id, ((id * 31) % 193) as u32).unwrap();
                }
                black_box(heap.peek().map(|p| p.id))
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Full place + process cycle through the orchestrator
// ============================================================================

fn bench_order_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_cycle");

    const PRODUCTS: i64 = 512;
    const ORDERS: usize = 256;

    group.throughput(Throughput::Elements(ORDERS as u64));
    group.bench_function("place_then_process", |b| {
        b.iter_batched(
            || {
                let mut w = Warehouse::new(64, 1_024, ORDERS);
                for id in 0..PRODUCTS {
                    w.add_product(make_product(id, (id % 89) as u32)).unwrap();
                }
                w
            },
            |mut w| {
                for i in 0..ORDERS {
                    let product_id = (i as i64 * 13) % PRODUCTS;
                    w.place_order(product_id, 1, i % 7 == 0).unwrap();
                }
                let mut fulfilled = 0usize;
                while w.process_next_order().is_ok() {
                    fulfilled += 1;
                }
                black_box(fulfilled)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ordered_insert,
    bench_identity_lookup,
    bench_heap_update,
    bench_order_cycle
);
criterion_main!(benches);
