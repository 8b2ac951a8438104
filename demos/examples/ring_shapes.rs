// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring shapes.
//!
//! Print the first two rings for both ring shapes, plus how the border fade
//! scales an item as it slides toward the left edge.
//!
//! Run:
//! - `cargo run -p understory_hex_demos --example ring_shapes`

use kurbo::{Insets, Point, Size};
use understory_hex_layout::{BorderFade, LayoutParams, RingShape, compute_layout};

fn main() {
    for shape in [RingShape::Circular, RingShape::Lattice] {
        let params = match LayoutParams::new(65.0, 10.0) {
            Ok(params) => params.with_shape(shape),
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        };
        let layout = compute_layout(19, &params);
        println!(
            "{shape:?}: {} rings, bounding {:?}",
            layout.ring_count(),
            layout.bounding_size()
        );
        for placement in layout.placements() {
            println!(
                "  #{:<2} ring {} slot {:<2} ({:>7.2}, {:>7.2})",
                placement.index,
                placement.ring,
                placement.slot,
                placement.center.x,
                placement.center.y
            );
        }
    }

    let fade = BorderFade::new(65.0, 10.0);
    let viewport = Size::new(390.0, 844.0);
    println!("border fade, zoom 1:");
    for x in [200.0, 140.0, 70.0, 35.0, 0.0, -50.0, -100.0] {
        let scale = fade.scale_for(Point::new(x, 400.0), viewport, Insets::ZERO, 1.0);
        println!("  x = {x:>6.1}: scale {scale:.3}");
    }
}
