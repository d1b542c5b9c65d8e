use criterion::{criterion_group, criterion_main, Criterion};

use tome_core::models::{Item, Profile};
use tome_recommend::RecommendationEngine;

/// 500 items by 50 authors, 1K profiles with 8 purchases each drawn from
/// overlapping windows so neighborhoods are non-trivial.
fn build_engine() -> RecommendationEngine {
    let items: Vec<Item> = (1..=500u64)
        .map(|id| Item::new(id, format!("Title {id}"), format!("Author {}", id % 50), "Genre"))
        .collect();
    let profiles: Vec<Profile> = (1..=1_000u64)
        .map(|pid| {
            let start = (pid * 7) % 480;
            Profile::new(pid, format!("reader{pid}"))
                .with_purchases((0..8).map(|k| start + 1 + (k * 3) % 20))
        })
        .collect();
    RecommendationEngine::new(items, profiles).unwrap()
}

fn bench_recommend(c: &mut Criterion) {
    let engine = build_engine();
    c.bench_function("recommend_1k_profiles", |b| {
        b.iter(|| engine.recommend(42));
    });
}

fn bench_cold_start(c: &mut Criterion) {
    let mut engine = build_engine();
    let newcomer = engine.register_profile("newcomer").unwrap();
    c.bench_function("recommend_cold_start", |b| {
        b.iter(|| engine.recommend(newcomer));
    });
}

fn bench_purchase(c: &mut Criterion) {
    c.bench_function("purchase_with_remine", |b| {
        b.iter_batched(
            build_engine,
            |mut engine| engine.purchase(42, 499),
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_rebuild(c: &mut Criterion) {
    let mut engine = build_engine();
    c.bench_function("rebuild_1k_profiles", |b| {
        b.iter(|| engine.rebuild());
    });
}

criterion_group!(
    benches,
    bench_recommend,
    bench_cold_start,
    bench_purchase,
    bench_rebuild
);
criterion_main!(benches);
