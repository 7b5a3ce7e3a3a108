//! Benchmarks for registry mutation, lookup, and notification fan-out.
//!
//! Run with: cargo bench -p scrim-runtime --bench registry_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use scrim_runtime::{ModalRegistry, Subscription};
use std::cell::Cell;
use std::hint::black_box;
use std::rc::Rc;

/// Registry pre-populated with `count` closed entries named `modal-N`.
fn make_registry(count: usize) -> ModalRegistry {
    let registry = ModalRegistry::new();
    for i in 0..count {
        let name = format!("modal-{i}");
        registry.open(&name);
        registry.close(&name);
    }
    registry
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/toggle");

    // Steady state: the entry already exists, no subscribers listen.
    let registry = make_registry(1);
    group.bench_function("open_close_no_subscribers", |b| {
        b.iter(|| {
            registry.open("modal-0");
            registry.close("modal-0");
            black_box(registry.is_open("modal-0"));
        })
    });

    // Redundant writes take the equality fast path and never notify.
    let registry = make_registry(1);
    registry.open("modal-0");
    group.bench_function("redundant_open", |b| {
        b.iter(|| {
            registry.open("modal-0");
            black_box(registry.is_open("modal-0"));
        })
    });

    group.finish();
}

fn bench_notify(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/notify");

    for subs in [1usize, 8, 64] {
        let registry = make_registry(1);
        let delivered = Rc::new(Cell::new(0u64));

        // Held for the duration of this size's runs.
        let _subscriptions: Vec<Subscription> = (0..subs)
            .map(|_| {
                let d = Rc::clone(&delivered);
                registry.subscribe("modal-0", move |_| d.set(d.get() + 1))
            })
            .collect();

        // Two notifications per iteration, each fanning out to every
        // subscriber.
        group.throughput(Throughput::Elements(2 * subs as u64));
        group.bench_with_input(
            BenchmarkId::new("open_close", subs),
            &(),
            |b, _| {
                b.iter(|| {
                    registry.open("modal-0");
                    registry.close("modal-0");
                    black_box(delivered.get());
                })
            },
        );
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/get");
    let registry = make_registry(64);

    group.bench_function("hit_64_entries", |b| {
        b.iter(|| black_box(registry.get("modal-31")))
    });

    group.bench_function("miss_64_entries", |b| {
        b.iter(|| black_box(registry.get("absent")))
    });

    group.bench_function("is_open_64_entries", |b| {
        b.iter(|| black_box(registry.is_open("modal-31")))
    });

    group.finish();
}

fn bench_subscribe_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/subscribe");
    let registry = make_registry(1);

    group.bench_function("register_then_drop", |b| {
        b.iter(|| {
            let sub = registry.subscribe("modal-0", |_| {});
            black_box(&sub);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_toggle,
    bench_notify,
    bench_get,
    bench_subscribe_churn,
);

criterion_main!(benches);
