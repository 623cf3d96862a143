//! Conversion and Geometry Benchmarks
//!
//! Benchmarks for the hot paths a picker hits on every pointer move:
//! HSV/CMYK/hex formula conversions and the wheel's barycentric mapping.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use trihue_core::geometry::{Point, SatVal, WheelGeometry};
use trihue_core::{CmykPercent, Hsv, Rgb, parse_cmyk_flexible, parse_hex};

fn generate_rgb_data(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| {
            Rgb::new(
                ((i * 37) % 256) as u8,
                ((i * 101) % 256) as u8,
                ((i * 193) % 256) as u8,
            )
        })
        .collect()
}

fn bench_hsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("hsv");

    let rgb = Rgb::new(180, 92, 47);
    let hsv = Hsv::from_rgb(rgb);

    group.bench_function("from_rgb", |b| b.iter(|| Hsv::from_rgb(black_box(rgb))));
    group.bench_function("to_rgb", |b| b.iter(|| black_box(hsv).to_rgb()));

    for size in [1000, 100000].iter() {
        let input = generate_rgb_data(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("roundtrip_batch", size), size, |b, _| {
            b.iter(|| {
                for rgb in &input {
                    black_box(Hsv::from_rgb(*rgb).to_rgb());
                }
            })
        });
    }

    group.finish();
}

fn bench_cmyk_fast(c: &mut Criterion) {
    let mut group = c.benchmark_group("cmyk_fast");

    let rgb = Rgb::new(180, 92, 47);
    let cmyk = CmykPercent::from_rgb_fast(rgb);

    group.bench_function("from_rgb", |b| {
        b.iter(|| CmykPercent::from_rgb_fast(black_box(rgb)))
    });
    group.bench_function("to_rgb", |b| b.iter(|| black_box(cmyk).to_rgb_fast()));

    group.finish();
}

fn bench_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex");

    let rgb = Rgb::new(180, 92, 47);

    group.bench_function("format", |b| b.iter(|| black_box(rgb).to_hex()));
    group.bench_function("parse_long", |b| b.iter(|| parse_hex(black_box("#B45C2F"))));
    group.bench_function("parse_short", |b| b.iter(|| parse_hex(black_box("#F80"))));

    group.finish();
}

fn bench_parse_cmyk(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_cmyk");

    group.bench_function("percent_form", |b| {
        b.iter(|| parse_cmyk_flexible(black_box("cmyk(10%, 65%, 85%, 5%)")))
    });
    group.bench_function("bare_bytes", |b| {
        b.iter(|| parse_cmyk_flexible(black_box("26, 166, 217, 13")))
    });

    group.finish();
}

fn bench_wheel(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel");

    let wheel = WheelGeometry::default();
    let verts = wheel.triangle_vertices(137.0);
    let sv = SatVal::new(0.6, 0.8);
    let point = wheel.sv_to_point(&verts, sv);
    let current = SatVal::default();

    group.bench_function("triangle_vertices", |b| {
        b.iter(|| wheel.triangle_vertices(black_box(137.0)))
    });
    group.bench_function("point_to_sv", |b| {
        b.iter(|| wheel.point_to_sv(black_box(&verts), black_box(point), black_box(current)))
    });
    group.bench_function("sv_to_point", |b| {
        b.iter(|| wheel.sv_to_point(black_box(&verts), black_box(sv)))
    });
    group.bench_function("hit_test", |b| b.iter(|| wheel.hit_test(black_box(point))));

    // the full per-pointer-move pipeline a picker runs while dragging
    group.bench_function("drag_step", |b| {
        b.iter(|| {
            let sv = wheel.point_to_sv(black_box(&verts), black_box(point), black_box(current));
            Hsv::new(137.0, sv.s, sv.v).to_rgb()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hsv,
    bench_cmyk_fast,
    bench_hex,
    bench_parse_cmyk,
    bench_wheel,
);

criterion_main!(benches);
