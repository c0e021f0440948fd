use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use riac_core::{generate_keypair_with, KeyConfig};

fn keygen_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("keygen");
    group.sample_size(10);
    for bits in [512u64, 1024, 2048] {
        let cfg = KeyConfig::default().with_key_size_bits(bits);
        group.bench_with_input(BenchmarkId::from_parameter(bits), &cfg, |b, cfg| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| generate_keypair_with(cfg, &mut rng).unwrap());
        });
    }
    group.finish();
}

fn encrypt_decrypt_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let mut group = c.benchmark_group("encrypt_decrypt");

    for rounds in [1usize, 3, 5] {
        let cfg = KeyConfig::default().with_round_count(rounds);
        let key = generate_keypair_with(&cfg, &mut rng).unwrap();
        let ct = key.encrypt_with(5.33, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::new("encrypt", rounds), &key, |b, key| {
            let mut rng = StdRng::seed_from_u64(3);
            b.iter(|| key.encrypt_with(5.33, &mut rng).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decrypt", rounds), &ct, |b, ct| {
            b.iter(|| key.decrypt(ct).unwrap());
        });
    }
    group.finish();
}

fn algebra_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let key = generate_keypair_with(&KeyConfig::default(), &mut rng).unwrap();
    let a = key.encrypt_with(5.33, &mut rng).unwrap();
    let b = key.encrypt_with(-3.1, &mut rng).unwrap();
    let scaled = b.scalar_multiply(0.5).unwrap();

    let mut group = c.benchmark_group("algebra");
    group.bench_function("add", |bench| bench.iter(|| a.add(&b).unwrap()));
    group.bench_function("add_rescaled", |bench| bench.iter(|| a.add(&scaled).unwrap()));
    group.bench_function("mul_int", |bench| bench.iter(|| a.scalar_multiply(7).unwrap()));
    group.bench_function("mul_real", |bench| bench.iter(|| a.scalar_multiply(-3.1).unwrap()));
    group.finish();
}

criterion_group!(benches, keygen_benchmark, encrypt_decrypt_benchmark, algebra_benchmark);
criterion_main!(benches);
