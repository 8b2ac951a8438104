// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless settle walkthrough.
//!
//! Drive a `HexagonalView` with synthetic pointer samples: reload, zoom in,
//! fling, and let the view settle on the nearest item.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_hex_demos --example headless_settle [COUNT]`

use kurbo::{Point, Size, Vec2};
use understory_hex_demos::Palette;
use understory_hex_view::{AnimationType, Appearance, HexagonalView, ReleaseOutcome};

fn main() {
    env_logger::init();

    let appearance = Appearance::default().with_animation(AnimationType::Spiral, 0.05);
    let mut view = match HexagonalView::new(appearance, Size::new(390.0, 844.0)) {
        Ok(view) => view,
        Err(err) => {
            log::error!("invalid appearance: {err}");
            return;
        }
    };
    view.set_on_select(|i| println!("selected #{i}"));
    view.set_on_will_center(|i| println!("centering on #{i}"));

    let count = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(37);
    if let Err(err) = view.reload(&mut Palette { count }) {
        log::error!("reload failed: {err}");
        return;
    }
    println!(
        "{} items, content layer {:?}",
        view.len(),
        view.content_size()
    );

    let zoom = view.zoom_changed(1.6);
    println!("zoom {zoom}, scaled content {:?}", view.viewport().content_size());

    // Fling up and to the left over 80ms.
    let mut pos = Point::new(300.0, 600.0);
    view.drag_began(pos, 0.0);
    for step in 1_u32..=5 {
        pos -= Vec2::new(12.0, 18.0);
        view.drag_moved(pos, f64::from(step) * 16.0);
    }
    let hidden = view.items().iter().filter(|item| !item.is_visible()).count();
    println!(
        "after drag: offset {:?}, {hidden} items hidden",
        view.viewport().content_offset()
    );

    let request = match view.drag_released(80.0) {
        ReleaseOutcome::Decelerate {
            velocity,
            target_offset,
        } => {
            println!("gliding at {velocity:?} toward {target_offset:?}");
            view.scroll_changed(target_offset);
            view.did_end_decelerating()
        }
        ReleaseOutcome::Settle(request) => Some(request),
        ReleaseOutcome::Ignored => None,
    };

    if let Some(request) = request {
        view.scroll_changed(request.target_offset);
        println!(
            "settled on #{} at offset {:?}",
            request.index, request.target_offset
        );
        if let Some(item) = view.item(request.index) {
            let event = item.tap_event();
            let swatch = item.content();
            println!("{} {:?} scale {:.2}", swatch.label, swatch.color, swatch.scale);
            if let Err(err) = view.handle_item_event(event) {
                log::warn!("tap rejected: {err}");
            }
        }
    }
}
