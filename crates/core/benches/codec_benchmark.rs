//! Bancs d'essai pour le pipeline d'encodage/décodage.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use adn_core::{decode_sequences, encoder::encode, CodecParams};

fn benchmark_encode(c: &mut Criterion) {
    let test_data = vec![
        ("small", vec![0u8; 1024]),
        ("medium", vec![0u8; 1024 * 100]),
        ("large", vec![0u8; 1024 * 1024]),
    ];

    let mut group = c.benchmark_group("encode_file");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for (name, data) in test_data {
        let params = CodecParams::default();
        group.bench_function(name, |b| {
            b.iter(|| {
                let _ = encode(black_box(&data), &params);
            });
        });
    }

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let data = vec![0u8; 1024 * 100];
    let params = CodecParams::default();
    let oligos = encode(&data, &params).unwrap();

    let mut group = c.benchmark_group("decode_sequences");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    group.bench_function("medium", |b| {
        b.iter(|| {
            let _ = decode_sequences(black_box(&oligos));
        });
    });

    group.finish();
}

fn benchmark_redundancy_tradeoff(c: &mut Criterion) {
    let data = vec![0u8; 1024 * 50];

    let mut group = c.benchmark_group("redundancy_tradeoff");
    group.measurement_time(Duration::from_secs(10));

    for redundancy in [1, 3, 5] {
        let params = CodecParams {
            redundancy,
            ..CodecParams::default()
        };
        group.bench_function(format!("redundancy_{redundancy}"), |b| {
            b.iter(|| {
                let _ = encode(black_box(&data), &params);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(3));
    targets = benchmark_encode, benchmark_decode, benchmark_redundancy_tradeoff
}

criterion_main!(benches);
