use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use orbits::kepler::calculate_eccentric_anomaly;
use orbits::{Orbit, Scalar, Vector3};

pub fn bench_kepler<T: Scalar>(c: &mut Criterion, mean_anomaly: T) {
    let mut group = c.benchmark_group(format!("{}/kepler", std::any::type_name::<T>()));
    group.throughput(Throughput::Elements(1));

    for eccentricity in [0.1, 0.5, 0.9] {
        for iterations in [5, 10, 20] {
            group.bench_with_input(
                BenchmarkId::new(format!("e={eccentricity}"), iterations),
                &iterations,
                |b, &iterations| {
                    b.iter(|| {
                        calculate_eccentric_anomaly(
                            black_box(T::from_f64(eccentricity)),
                            black_box(mean_anomaly),
                            iterations,
                        )
                    })
                },
            );
        }
    }

    group.finish();
}

pub fn bench_state_vectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("f64/state_vectors");
    group.throughput(Throughput::Elements(1));

    let position = Vector3::new(1000.0, 0.0, 0.0);
    let velocity = Vector3::new(0.0, 1.0, 0.5);
    group.bench_function("from_state_vectors", |b| {
        b.iter(|| Orbit::from_state_vectors(black_box(2e13), black_box(position), black_box(velocity)))
    });

    let orbit = Orbit::from_state_vectors(2e13, position, velocity);
    group.bench_function("to_local_state_vectors", |b| {
        b.iter(|| black_box(orbit).to_local_state_vectors())
    });

    let mut evaluated = orbit;
    group.bench_function("evaluate_true_anomaly", |b| {
        b.iter(|| evaluated.evaluate_true_anomaly(black_box(1234.5), 10))
    });

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_kepler::<f32>(c, 0.2);
    bench_kepler::<f64>(c, 0.2);
    bench_state_vectors(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
