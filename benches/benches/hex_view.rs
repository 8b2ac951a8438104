// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use understory_hex_view::{Appearance, DataSource, HexagonalView, ItemContent};

#[derive(Clone, Copy, Default)]
struct Noop {
    scale: f64,
}

impl ItemContent for Noop {
    fn set_transform(&mut self, _center: Point, scale: f64) {
        self.scale = scale;
    }

    fn set_visible(&mut self, _visible: bool) {}
}

struct Count(usize);

impl DataSource for Count {
    type Content = Noop;

    fn item_count(&self) -> usize {
        self.0
    }

    fn content_for_index(&mut self, _index: usize) -> Option<Noop> {
        Some(Noop::default())
    }
}

const BOUNDS: Size = Size::new(390.0, 844.0);

fn view(len: usize) -> HexagonalView<Noop> {
    let mut view = HexagonalView::new(Appearance::default(), BOUNDS).expect("default appearance");
    view.reload(&mut Count(len)).expect("source provides all items");
    view
}

fn bench_reload(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_view/reload");
    for len in [37usize, 331, 1_261] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || view(0),
                |mut view| {
                    view.reload(&mut Count(len)).expect("source provides all items");
                    black_box(view)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_scroll_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_view/scroll_changed");
    for len in [37usize, 331, 1_261] {
        let mut view = view(len);
        view.zoom_changed(2.0);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            let mut x = 0.0;
            b.iter(|| {
                x = (x + 7.0) % 400.0;
                view.scroll_changed(black_box(Point::new(x, x)));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reload, bench_scroll_frame);
criterion_main!(benches);
