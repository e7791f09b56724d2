#![allow(missing_docs)]

use std::iter::successors;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use orbitech::orbit::{AxisConstraint, Orbit, OrbitConstraint};
use orbitech::util::easing::Easing;

fn axis_constrain_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis_constrain");

    for (name, axis) in [
        ("full", AxisConstraint::full()),
        ("half", AxisConstraint::half()),
        ("offset_origin", AxisConstraint::with_origin(120.0, 350.0)),
    ] {
        let _ = group.bench_function(name, |b| {
            b.iter(|| {
                let sum: f32 = successors(Some(-720.0_f32), |v| Some(v + 7.0))
                    .take_while(|v| *v < 720.0)
                    .map(|value| axis.constrain(black_box(value)))
                    .sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn orbit_lerp_benchmark(c: &mut Criterion) {
    let a = Orbit::new(350.0, 10.0, 0.0, OrbitConstraint::standard());
    let b = Orbit::new(20.0, 80.0, 5.0, OrbitConstraint::full());

    let _ = c.bench_function("orbit_lerp", |bench| {
        bench.iter(|| black_box(Orbit::lerp(&a, &b, black_box(0.5))));
    });
}

fn orbit_from_direction_benchmark(c: &mut Criterion) {
    let direction = Vec3::new(0.3, 0.8, -0.5).normalize();

    let _ = c.bench_function("orbit_from_direction", |b| {
        b.iter(|| {
            black_box(Orbit::from_direction(
                black_box(direction),
                OrbitConstraint::minimal(),
            ))
        });
    });
}

fn easing_benchmark(c: &mut Criterion) {
    let f = Easing::Cubic { c1: 0.33, c2: 1.0 };
    let _ = c.bench_function("cubic_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

criterion_group!(
    benches,
    axis_constrain_benchmark,
    orbit_lerp_benchmark,
    orbit_from_direction_benchmark,
    easing_benchmark
);
criterion_main!(benches);
