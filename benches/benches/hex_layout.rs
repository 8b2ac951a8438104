// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Point, Size};
use understory_hex_layout::{BorderFade, LayoutParams, RingShape, compute_layout, nearest_index};

const LENS: [usize; 4] = [37, 331, 1_261, 5_167];

fn params(shape: RingShape) -> LayoutParams {
    LayoutParams::new(65.0, 10.0)
        .expect("valid geometry")
        .with_shape(shape)
}

fn bench_compute_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_layout/compute");
    for len in LENS {
        group.throughput(Throughput::Elements(len as u64));
        for shape in [RingShape::Circular, RingShape::Lattice] {
            let params = params(shape);
            group.bench_with_input(
                BenchmarkId::new(format!("{shape:?}"), len),
                &len,
                |b, &len| b.iter(|| black_box(compute_layout(black_box(len), &params))),
            );
        }
    }
    group.finish();
}

fn bench_border_fade(c: &mut Criterion) {
    // One full scroll frame: every item checked against the viewport edges.
    let mut group = c.benchmark_group("hex_layout/border_fade");
    let fade = BorderFade::new(65.0, 10.0);
    let viewport = Size::new(390.0, 844.0);
    for len in LENS {
        let layout = compute_layout(len, &params(RingShape::Circular));
        let shift = Point::new(195.0, 422.0).to_vec2();
        let centers: Vec<Point> = layout.centers().map(|p| p + shift).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &centers, |b, centers| {
            b.iter(|| {
                let mut total = 0.0;
                for &center in centers {
                    total += fade.scale_for(center, viewport, Insets::ZERO, 1.0);
                }
                black_box(total)
            });
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_layout/nearest");
    for len in LENS {
        let layout = compute_layout(len, &params(RingShape::Circular));
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &layout, |b, layout| {
            b.iter(|| {
                black_box(nearest_index(
                    black_box(Point::new(123.0, -456.0)),
                    layout.centers(),
                    0,
                ))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_layout, bench_border_fade, bench_nearest);
criterion_main!(benches);
