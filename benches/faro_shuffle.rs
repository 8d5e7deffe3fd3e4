use criterion::{black_box, criterion_group, criterion_main, Criterion};
use faro_shuffle::card::{create_deck, in_shuffle, out_shuffle, ShuffleKind};
use faro_shuffle::simulation::{decompose, restoration_count};

fn benchmark_single_shuffle(c: &mut Criterion) {
    let deck = create_deck(52).expect("Failed to build deck");

    c.bench_function("out_shuffle_52", |b| b.iter(|| out_shuffle(black_box(&deck))));
    c.bench_function("in_shuffle_52", |b| b.iter(|| in_shuffle(black_box(&deck))));
}

fn benchmark_restoration(c: &mut Criterion) {
    c.bench_function("restoration_in_52", |b| {
        b.iter(|| restoration_count(black_box(52), black_box(ShuffleKind::In)))
    });
}

fn benchmark_decomposition(c: &mut Criterion) {
    c.bench_function("decompose_4_to_52", |b| {
        b.iter(|| {
            for size in (4..=52).step_by(2) {
                let _ = decompose(black_box(size));
            }
        })
    });
}

criterion_group!(benches, benchmark_single_shuffle, benchmark_restoration, benchmark_decomposition);
criterion_main!(benches);
