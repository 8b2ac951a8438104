// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the hex view demos: a colored swatch that remembers
//! what the widget did to it, and a data source producing a palette of them.

use kurbo::Point;
use peniko::Color;
use understory_hex_view::{DataSource, EntranceAnimation, ItemContent};

const PALETTE: [Color; 6] = [
    Color::from_rgb8(0xe6, 0x39, 0x46),
    Color::from_rgb8(0xf4, 0xa2, 0x61),
    Color::from_rgb8(0xe9, 0xc4, 0x6a),
    Color::from_rgb8(0x2a, 0x9d, 0x8f),
    Color::from_rgb8(0x26, 0x46, 0x53),
    Color::from_rgb8(0x8e, 0x44, 0xad),
];

/// A flat colored item.
#[derive(Clone, Debug)]
pub struct Swatch {
    /// Label shown on the item.
    pub label: String,
    /// Fill color.
    pub color: Color,
    /// Last center the widget assigned.
    pub center: Point,
    /// Last scale the widget assigned.
    pub scale: f64,
    /// Whether the widget currently shows this item.
    pub visible: bool,
    /// Entrance the widget scheduled on the last reload.
    pub entrance: Option<EntranceAnimation>,
}

impl ItemContent for Swatch {
    fn set_transform(&mut self, center: Point, scale: f64) {
        self.center = center;
        self.scale = scale;
    }

    fn set_visible(&mut self, visible: bool) {
        log::trace!("{} visible: {visible}", self.label);
        self.visible = visible;
    }

    fn animate_entrance(&mut self, center: Point, animation: EntranceAnimation) {
        self.entrance = Some(animation);
        self.set_transform(center, 1.0);
    }
}

/// Produces `count` swatches cycling through a fixed palette.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Number of swatches.
    pub count: usize,
}

impl DataSource for Palette {
    type Content = Swatch;

    fn item_count(&self) -> usize {
        self.count
    }

    fn content_for_index(&mut self, index: usize) -> Option<Swatch> {
        (index < self.count).then(|| Swatch {
            label: format!("#{index}"),
            color: PALETTE[index % PALETTE.len()],
            center: Point::ORIGIN,
            scale: 0.0,
            visible: true,
            entrance: None,
        })
    }
}
