use criterion::{criterion_group, criterion_main, Criterion};
use ecc_ref_core::{sum_points, AffinePoint, Scalar, Secp256k1};

use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_scalar<R: Rng>(rng: &mut R) -> Scalar {
    let bytes: [u8; 32] = rng.gen();
    Scalar::new(BigUint::from_bytes_be(&bytes))
}

fn bench_point_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_mul");

    let mut rng = StdRng::seed_from_u64(0);
    let n = 50_usize;
    let random_scalars: Vec<Scalar> = (0..n).map(|_| random_scalar(&mut rng)).collect();
    let points: Vec<AffinePoint<Secp256k1>> = random_scalars
        .iter()
        .map(AffinePoint::mul_generator)
        .collect();

    group.bench_function("single_mul", |b| {
        let i = rng.gen_range(0..n);
        b.iter(|| AffinePoint::<Secp256k1>::mul_generator(&random_scalars[i]))
    });

    group.bench_function("add", |b| {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        b.iter(|| points[i] + points[j])
    });

    group.bench_function("sum_50", |b| b.iter(|| sum_points(&points)));

    group.finish();
}

criterion_group!(benches, bench_point_mul);
criterion_main!(benches);
