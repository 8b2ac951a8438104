// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Insets, Point, Rect, Size, Vec2};

use crate::appearance::ZoomLimits;

/// Scroll/zoom model of the widget's viewport.
///
/// `ScrollViewport` tracks a visible rectangle of size `bounds_size` sliding
/// over a content layer that is uniformly scaled by `zoom`. When the scaled
/// content is smaller than the bounds on an axis it is centered on that axis.
///
/// Three coordinate spaces are involved:
/// - Content-layer space: unscaled item positions.
/// - Scroll space: scaled content plus its centering origin; the content
///   offset lives here.
/// - View space: relative to the top-left corner of the visible bounds.
#[derive(Clone, Debug)]
pub struct ScrollViewport {
    bounds_size: Size,
    layer_size: Size,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    content_offset: Point,
    content_inset: Insets,
    content_origin: Vec2,
    layer_to_view: Affine,
}

impl ScrollViewport {
    /// Creates a viewport with visible size `bounds_size` and an empty content layer.
    ///
    /// - Initial zoom is `1.0`, even before any zoom gesture.
    /// - Initial content offset is zero.
    /// - Zoom is clamped to `[0.2, 2.0]` by default.
    #[must_use]
    pub fn new(bounds_size: Size) -> Self {
        let limits = ZoomLimits::default();
        let mut vp = Self {
            bounds_size,
            layer_size: Size::ZERO,
            zoom: 1.0,
            min_zoom: limits.min,
            max_zoom: limits.max,
            content_offset: Point::ORIGIN,
            content_inset: Insets::ZERO,
            content_origin: Vec2::ZERO,
            layer_to_view: Affine::IDENTITY,
        };
        vp.rebuild_transform();
        vp
    }

    /// Visible size.
    #[must_use]
    pub fn bounds_size(&self) -> Size {
        self.bounds_size
    }

    /// Sets the visible size and re-centers the content.
    pub fn set_bounds_size(&mut self, size: Size) {
        if self.bounds_size == size {
            return;
        }
        self.bounds_size = size;
        self.center_content();
    }

    /// Unscaled content-layer size.
    #[must_use]
    pub fn layer_size(&self) -> Size {
        self.layer_size
    }

    /// Sets the unscaled content-layer size and re-centers the content.
    pub fn set_layer_size(&mut self, size: Size) {
        self.layer_size = size;
        self.center_content();
    }

    /// Scaled content size, `layer_size * zoom`.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.layer_size * self.zoom
    }

    /// Current zoom scale.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the minimum and maximum zoom.
    ///
    /// The range is normalized so that `min_zoom <= max_zoom` and the current
    /// zoom is clamped into it.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom);
    }

    /// Current zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits {
            min: self.min_zoom,
            max: self.max_zoom,
        }
    }

    /// Sets the zoom, clamped into the zoom limits, and re-centers the content.
    ///
    /// Returns the zoom actually applied.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        if (self.zoom - clamped).abs() >= f64::EPSILON {
            self.zoom = clamped;
            self.center_content();
        }
        self.zoom
    }

    /// Current content offset in scroll space.
    #[must_use]
    pub fn content_offset(&self) -> Point {
        self.content_offset
    }

    /// Records the content offset reported by the host.
    ///
    /// The offset is not clamped: hosts may bounce past the scrollable range.
    pub fn set_content_offset(&mut self, offset: Point) {
        if self.content_offset == offset {
            return;
        }
        self.content_offset = offset;
        self.rebuild_transform();
    }

    /// Content inset.
    #[must_use]
    pub fn content_inset(&self) -> Insets {
        self.content_inset
    }

    /// Sets the content inset.
    pub fn set_content_inset(&mut self, insets: Insets) {
        self.content_inset = insets;
    }

    /// Origin of the scaled content within scroll space.
    ///
    /// Non-zero only on axes where the scaled content is smaller than the bounds.
    #[must_use]
    pub fn content_origin(&self) -> Vec2 {
        self.content_origin
    }

    /// Re-centers the content on each axis independently.
    ///
    /// On an axis where the scaled content is smaller than the bounds, the
    /// content is centered; otherwise it is aligned to the scroll origin.
    pub fn center_content(&mut self) {
        let content = self.content_size();
        let center_axis = |bounds: f64, content: f64| {
            if content < bounds {
                (bounds - content) / 2.0
            } else {
                0.0
            }
        };
        self.content_origin = Vec2::new(
            center_axis(self.bounds_size.width, content.width),
            center_axis(self.bounds_size.height, content.height),
        );
        self.rebuild_transform();
    }

    /// Converts a content-layer point into view space.
    #[must_use]
    pub fn layer_to_view_point(&self, pt: Point) -> Point {
        self.layer_to_view * pt
    }

    /// Converts a view-space point into the content layer.
    #[must_use]
    pub fn view_to_layer_point(&self, pt: Point) -> Point {
        self.layer_to_view.inverse() * pt
    }

    /// Content-layer rectangle currently visible through the bounds.
    #[must_use]
    pub fn visible_layer_rect(&self) -> Rect {
        let inverse = self.layer_to_view.inverse();
        let p0 = inverse * Point::ORIGIN;
        let p1 = inverse * Point::new(self.bounds_size.width, self.bounds_size.height);
        Rect::from_points(p0, p1)
    }

    /// Content-layer point that would sit at the center of the bounds if the
    /// viewport came to rest at `offset`.
    #[must_use]
    pub fn resting_center(&self, offset: Point) -> Point {
        let center = offset.to_vec2() + self.bounds_size.to_vec2() / 2.0 - self.content_origin;
        (center / self.zoom).to_point()
    }

    /// Bounds-sized rectangle in scroll space centered on the content-layer
    /// point `pt` at the current zoom.
    #[must_use]
    pub fn centering_rect(&self, pt: Point) -> Rect {
        let center = (pt.to_vec2() * self.zoom + self.content_origin).to_point();
        Rect::from_center_size(center, self.bounds_size)
    }

    /// Range of content offsets reachable without bouncing.
    #[must_use]
    pub fn offset_range(&self) -> Rect {
        let content = self.content_size();
        let inset = self.content_inset;
        let min = Point::new(-inset.x0, -inset.y0);
        let max = Point::new(
            (content.width + inset.x1 - self.bounds_size.width).max(min.x),
            (content.height + inset.y1 - self.bounds_size.height).max(min.y),
        );
        Rect::from_points(min, max)
    }

    /// Clamps `offset` into [`ScrollViewport::offset_range`].
    #[must_use]
    pub fn clamp_offset(&self, offset: Point) -> Point {
        let range = self.offset_range();
        Point::new(
            offset.x.clamp(range.x0, range.x1),
            offset.y.clamp(range.y0, range.y1),
        )
    }

    /// Offset that scrolls the minimum distance needed to show `rect`.
    ///
    /// A rectangle at least as large as the bounds is aligned to its minimum
    /// corner. The result is clamped into the reachable range.
    #[must_use]
    pub fn offset_to_reveal(&self, rect: Rect) -> Point {
        let axis = |offset: f64, extent: f64, min: f64, max: f64| {
            if max - min >= extent || min < offset {
                min
            } else if max > offset + extent {
                max - extent
            } else {
                offset
            }
        };
        let offset = self.content_offset;
        let target = Point::new(
            axis(offset.x, self.bounds_size.width, rect.x0, rect.x1),
            axis(offset.y, self.bounds_size.height, rect.y0, rect.y1),
        );
        self.clamp_offset(target)
    }

    fn rebuild_transform(&mut self) {
        // Content layer → view: scale, shift into scroll space, then remove the scroll offset.
        let shift = self.content_origin - self.content_offset.to_vec2();
        self.layer_to_view = Affine::translate(shift) * Affine::scale(self.zoom);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Point, Rect, Size};

    use super::ScrollViewport;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn zoom_starts_at_one_and_clamps() {
        let mut vp = ScrollViewport::new(Size::new(400.0, 800.0));
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.set_zoom(5.0), 2.0);
        assert_eq!(vp.set_zoom(0.01), 0.2);
        vp.set_zoom_limits(3.0, 0.5);
        assert_eq!(vp.zoom(), 0.5);
        assert_eq!(vp.zoom_limits().max, 3.0);
    }

    #[test]
    fn small_content_is_centered_per_axis() {
        let mut vp = ScrollViewport::new(Size::new(400.0, 800.0));
        vp.set_layer_size(Size::new(200.0, 1000.0));
        let origin = vp.content_origin();
        assert_eq!(origin.x, 100.0);
        assert_eq!(origin.y, 0.0);

        vp.set_zoom(0.5);
        let origin = vp.content_origin();
        assert_eq!(origin.x, 150.0);
        assert_eq!(origin.y, 150.0);
    }

    #[test]
    fn layer_to_view_accounts_for_zoom_offset_and_origin() {
        let mut vp = ScrollViewport::new(Size::new(400.0, 800.0));
        vp.set_layer_size(Size::new(1000.0, 1500.0));
        vp.set_zoom(2.0);
        vp.set_content_offset(Point::new(100.0, 50.0));

        let view = vp.layer_to_view_point(Point::new(60.0, 40.0));
        assert!(close(view, Point::new(20.0, 30.0)));
        assert!(close(vp.view_to_layer_point(view), Point::new(60.0, 40.0)));

        let visible = vp.visible_layer_rect();
        assert!((visible.x0 - 50.0).abs() < 1e-9);
        assert!((visible.width() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn resting_center_divides_by_zoom() {
        let mut vp = ScrollViewport::new(Size::new(400.0, 800.0));
        vp.set_layer_size(Size::new(1000.0, 1500.0));
        vp.set_zoom(2.0);
        let c = vp.resting_center(Point::new(800.0, 1000.0));
        assert!(close(c, Point::new(500.0, 700.0)));
    }

    #[test]
    fn centering_rect_round_trips_through_resting_center() {
        let mut vp = ScrollViewport::new(Size::new(400.0, 800.0));
        vp.set_layer_size(Size::new(1000.0, 1500.0));
        vp.set_zoom(1.5);
        let pt = Point::new(420.0, 610.0);
        let rect = vp.centering_rect(pt);
        assert_eq!(rect.size(), Size::new(400.0, 800.0));
        assert!(close(vp.resting_center(rect.origin()), pt));
    }

    #[test]
    fn offset_to_reveal_aligns_bounds_sized_rects() {
        let mut vp = ScrollViewport::new(Size::new(400.0, 800.0));
        vp.set_layer_size(Size::new(1000.0, 1500.0));
        let target = vp.offset_to_reveal(Rect::new(300.0, 200.0, 700.0, 1000.0));
        assert!(close(target, Point::new(300.0, 200.0)));
    }

    #[test]
    fn offset_to_reveal_clamps_to_range() {
        let mut vp = ScrollViewport::new(Size::new(400.0, 800.0));
        vp.set_layer_size(Size::new(1000.0, 1500.0));
        let target = vp.offset_to_reveal(Rect::new(-200.0, 1000.0, 200.0, 1800.0));
        assert!(close(target, Point::new(0.0, 700.0)));
    }

    #[test]
    fn offset_to_reveal_scrolls_minimally_for_small_rects() {
        let mut vp = ScrollViewport::new(Size::new(400.0, 800.0));
        vp.set_layer_size(Size::new(1000.0, 1500.0));
        // Already visible: no movement.
        let target = vp.offset_to_reveal(Rect::new(10.0, 10.0, 50.0, 50.0));
        assert!(close(target, Point::ORIGIN));
        // Off to the right: scroll just enough.
        let target = vp.offset_to_reveal(Rect::new(500.0, 10.0, 550.0, 50.0));
        assert!(close(target, Point::new(150.0, 0.0)));
    }

    #[test]
    fn insets_extend_the_offset_range() {
        let mut vp = ScrollViewport::new(Size::new(400.0, 800.0));
        vp.set_layer_size(Size::new(1000.0, 1500.0));
        vp.set_content_inset(Insets::new(10.0, 20.0, 30.0, 40.0));
        let range = vp.offset_range();
        assert_eq!(range, Rect::new(-10.0, -20.0, 630.0, 740.0));
    }
}
