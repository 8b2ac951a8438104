// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Point, Size};

/// Border-proximity scale curve.
///
/// Items shrink smoothly as their center approaches any edge of the visible
/// region, then vanish once they are far past it. Only edges that are
/// already closer than the offset distance take part, so an item that is far
/// from every edge is never shrunk.
///
/// All inputs are in view space: the item center is relative to the origin
/// of the visible bounds, after scroll offset and zoom have been applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderFade {
    item_size: f64,
    item_spacing: f64,
}

impl BorderFade {
    /// Creates a curve for items of side `item_size` separated by `item_spacing`.
    #[must_use]
    pub fn new(item_size: f64, item_spacing: f64) -> Self {
        Self {
            item_size,
            item_spacing,
        }
    }

    /// Distance from an edge at which shrinking starts, at zoom `zoom`.
    #[must_use]
    pub fn offset_distance(&self, zoom: f64) -> f64 {
        (self.item_size + self.item_spacing / 2.0) * zoom
    }

    /// Distance past the edge beyond which items are hidden (scale 0).
    ///
    /// This is negative: `-(item_size + item_spacing) * 2.5`.
    #[must_use]
    pub fn hide_threshold(&self) -> f64 {
        -(self.item_size + self.item_spacing) * 2.5
    }

    /// Returns twice the distance to the closest participating edge, or
    /// `None` when no edge is within [`BorderFade::offset_distance`].
    #[must_use]
    pub fn distance_to_border(
        &self,
        center: Point,
        viewport: Size,
        insets: Insets,
        zoom: f64,
    ) -> Option<f64> {
        let offset = self.offset_distance(zoom);
        let edges = [
            center.x - insets.x0,
            center.y - insets.y0,
            viewport.width - center.x - insets.x1,
            viewport.height - center.y - insets.y1,
        ];
        edges
            .into_iter()
            .filter(|d| *d < offset)
            .reduce(f64::min)
            .map(|d| d * 2.0)
    }

    /// Scale factor in `[0, 1]` for an item centered at `center`.
    #[must_use]
    pub fn scale_for(&self, center: Point, viewport: Size, insets: Insets, zoom: f64) -> f64 {
        let Some(distance) = self.distance_to_border(center, viewport, insets, zoom) else {
            return 1.0;
        };
        let full = self.offset_distance(zoom) * 2.0;
        if distance >= full {
            return 1.0;
        }
        if distance < self.hide_threshold() {
            return 0.0;
        }
        let normalized = (distance / full).max(0.0);
        let remaining = 1.0 - normalized;
        1.0 - remaining * remaining
    }
}
