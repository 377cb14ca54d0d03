use criterion::{black_box, criterion_group, criterion_main, Criterion};

use geolocaltransform::{
    geodesic_direct, geodesic_inverse, utm_forward, utm_reverse, LocalCartesian,
};

fn make_points(n: usize) -> Vec<[f64; 3]> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            [36.5 + t, -122.5 + t, 100.0 * t]
        })
        .collect()
}

fn bench_local_cartesian(c: &mut Criterion) {
    let lc = LocalCartesian::with_origin(37.0, -122.0, 0.0).unwrap();

    c.bench_function("local_forward", |b| {
        b.iter(|| black_box(lc.forward(black_box(37.1), black_box(-122.1), 100.0).unwrap()))
    });

    let p = lc.forward(37.1, -122.1, 100.0).unwrap();
    c.bench_function("local_reverse", |b| {
        b.iter(|| black_box(lc.reverse(black_box(p.x), black_box(p.y), p.z).unwrap()))
    });

    for &n in &[1_000, 100_000] {
        let points = make_points(n);
        c.bench_function(&format!("local_forward_batch_{n}"), |b| {
            b.iter(|| {
                let mut coords = points.clone();
                lc.forward_batch(&mut coords).unwrap();
                black_box(coords)
            })
        });
    }
}

fn bench_utm(c: &mut Criterion) {
    c.bench_function("utm_forward", |b| {
        b.iter(|| black_box(utm_forward(black_box(37.0), black_box(-122.0)).unwrap()))
    });

    let p = utm_forward(37.0, -122.0).unwrap();
    c.bench_function("utm_reverse", |b| {
        b.iter(|| black_box(utm_reverse(black_box(p.x), black_box(p.y), 37.0, -122.0).unwrap()))
    });
}

fn bench_geodesic(c: &mut Criterion) {
    c.bench_function("geodesic_inverse", |b| {
        b.iter(|| {
            black_box(
                geodesic_inverse(black_box(37.7749), -122.4194, black_box(34.0522), -118.2437)
                    .unwrap(),
            )
        })
    });

    c.bench_function("geodesic_direct", |b| {
        b.iter(|| {
            black_box(geodesic_direct(black_box(37.7749), -122.4194, 45.0, black_box(10_000.0)).unwrap())
        })
    });
}

criterion_group!(benches, bench_local_cartesian, bench_utm, bench_geodesic);
criterion_main!(benches);
