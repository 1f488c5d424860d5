use criterion::{black_box, criterion_group, criterion_main, Criterion};

use panelkit_layout::{
    solve_trapezoid, solve_triangle, TrapezoidParameters, TriangleParameters,
};

fn bench_solvers(c: &mut Criterion) {
    c.bench_function("triangle_solve_10_pairs", |b| {
        b.iter(|| solve_triangle(black_box(TriangleParameters::default())))
    });

    c.bench_function("triangle_solve_500_pairs", |b| {
        let params = TriangleParameters {
            pairs: 500,
            slat_width: 8.0,
            ..TriangleParameters::default()
        };
        b.iter(|| solve_triangle(black_box(params.clone())))
    });

    c.bench_function("trapezoid_solve_10_gaps", |b| {
        b.iter(|| solve_trapezoid(black_box(TrapezoidParameters::default())))
    });
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
