use criterion::Criterion;
use rand::prelude::*;
use std::hint::black_box;
use symbolic_features::ndarray::Array2;
use symbolic_features::{Operator, SymbolicFeatures};
use symbolic_features_test_util::TABLES_F64;

fn generator() -> SymbolicFeatures<f64> {
    let operators = ["sin", "exp", "log", "sqrt"]
        .iter()
        .map(|name| name.parse::<Operator<f64>>().unwrap());
    SymbolicFeatures::new([1, 2, -1], operators).unwrap()
}

pub fn bench_fit(c: &mut Criterion) {
    for (name, x) in TABLES_F64.iter() {
        c.bench_function(&format!("fit {name}"), |b| {
            let mut features = generator();
            b.iter(|| {
                features.fit(black_box(x)).unwrap();
            });
        });
    }
}

pub fn bench_transform(c: &mut Criterion) {
    const N: usize = 1000;
    const NCOLS: usize = 4;

    let mut rng = StdRng::seed_from_u64(0);
    let x = Array2::from_shape_simple_fn((N, NCOLS), || rng.random_range(0.1..10.0));
    let y = Array2::from_shape_simple_fn((N, NCOLS), || rng.random_range(0.1..10.0));

    let mut features = generator();
    features.fit(&x).unwrap();

    c.bench_function("transform fit table", |b| {
        b.iter(|| features.transform(black_box(&x)).unwrap());
    });
    c.bench_function("transform new table", |b| {
        b.iter(|| features.transform(black_box(&y)).unwrap());
    });
}
