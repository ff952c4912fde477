//! Benchmarks for the member store
//!
//! Run with: cargo bench --package membership

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use membership::{Member, MemberStore};
use std::sync::Arc;
use std::thread;

fn populated_store(size: usize) -> Arc<MemberStore> {
    let store = MemberStore::with_seed_members();
    for i in 0..size {
        store
            .register(Member::new(format!("member-{}", i), Some((i % 90) as i32)))
            .expect("Failed to register bench member");
    }
    Arc::new(store)
}

fn bench_get_hit(c: &mut Criterion) {
    let store = populated_store(10_000);

    c.bench_function("store_get_hit", |b| {
        b.iter(|| black_box(store.get(black_box("member-4242"))))
    });
}

fn bench_get_miss(c: &mut Criterion) {
    let store = populated_store(10_000);

    c.bench_function("store_get_miss", |b| {
        b.iter(|| black_box(store.get(black_box("ghost"))))
    });
}

fn bench_register_overwrite(c: &mut Criterion) {
    let store = populated_store(10_000);
    let member = Member::new("making", Some(11));

    c.bench_function("store_register_overwrite", |b| {
        b.iter(|| black_box(store.register(black_box(member.clone()))))
    });
}

fn bench_contended_reads(c: &mut Criterion) {
    let store = populated_store(10_000);

    c.bench_function("store_get_4_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let store = Arc::clone(&store);
                    thread::spawn(move || {
                        for i in 0..250 {
                            black_box(store.get(&format!("member-{}", t * 250 + i)));
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().expect("Reader thread panicked");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_get_miss,
    bench_register_overwrite,
    bench_contended_reads
);
criterion_main!(benches);
