// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_3, TAU};

use kurbo::{Point, Size, Vec2};

use crate::error::LayoutError;
use crate::ring::{RingSlot, ring_capacity, ring_count};

/// Shape of each ring around the center item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RingShape {
    /// Every item of ring `k` sits at radius `k * pitch`, at equal angular
    /// steps starting on the +x axis.
    #[default]
    Circular,
    /// Items of ring `k` sit on the hexagon of circumradius `k * pitch`, so
    /// that neighbours on the same edge are exactly one pitch apart.
    ///
    /// Ring 1 is identical to [`RingShape::Circular`].
    Lattice,
}

/// Validated geometry inputs for [`compute_layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    item_size: f64,
    item_spacing: f64,
    shape: RingShape,
}

impl LayoutParams {
    /// Creates layout parameters for square items of side `item_size`
    /// separated by `item_spacing`.
    ///
    /// Returns an error if `item_size` is not finite and positive, or if
    /// `item_spacing` is not finite and non-negative.
    pub fn new(item_size: f64, item_spacing: f64) -> Result<Self, LayoutError> {
        if !item_size.is_finite() || item_size <= 0.0 {
            return Err(LayoutError::InvalidItemSize(item_size));
        }
        if !item_spacing.is_finite() || item_spacing < 0.0 {
            return Err(LayoutError::InvalidItemSpacing(item_spacing));
        }
        Ok(Self {
            item_size,
            item_spacing,
            shape: RingShape::default(),
        })
    }

    /// Returns a copy using the given ring shape.
    #[must_use]
    pub fn with_shape(mut self, shape: RingShape) -> Self {
        self.shape = shape;
        self
    }

    /// Item side length.
    #[must_use]
    pub fn item_size(&self) -> f64 {
        self.item_size
    }

    /// Gap between neighbouring items.
    #[must_use]
    pub fn item_spacing(&self) -> f64 {
        self.item_spacing
    }

    /// Ring shape.
    #[must_use]
    pub fn shape(&self) -> RingShape {
        self.shape
    }

    /// Distance between consecutive rings, `item_size + item_spacing`.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.item_size + self.item_spacing
    }

    /// Size of the square that contains `len` items plus half an item of
    /// margin on every side.
    ///
    /// This depends only on the number of rings `len` items occupy, so callers
    /// can size their content frame before any item is placed.
    #[must_use]
    pub fn bounding_size(&self, len: usize) -> Size {
        let rings = ring_count(len);
        if rings == 0 {
            return Size::ZERO;
        }
        let outer_radius = (rings - 1) as f64 * self.pitch();
        let side = 2.0 * (outer_radius + self.item_size);
        Size::new(side, side)
    }

    /// Center of the item in `slot`, relative to the center item.
    #[must_use]
    pub fn center_for(&self, slot: RingSlot) -> Point {
        if slot.ring == 0 {
            return Point::ORIGIN;
        }
        let radius = slot.ring as f64 * self.pitch();
        match self.shape {
            RingShape::Circular => {
                let step = TAU / ring_capacity(slot.ring) as f64;
                (Vec2::from_angle(step * slot.slot as f64) * radius).to_point()
            }
            RingShape::Lattice => {
                let side = slot.slot / slot.ring;
                let along = (slot.slot % slot.ring) as f64 / slot.ring as f64;
                let from = Vec2::from_angle(FRAC_PI_3 * side as f64) * radius;
                let to = Vec2::from_angle(FRAC_PI_3 * (side + 1) as f64) * radius;
                from.lerp(to, along).to_point()
            }
        }
    }
}

/// Final position of one item, as reported to placement callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Item index.
    pub index: usize,
    /// Ring the item belongs to.
    pub ring: usize,
    /// Slot within the ring.
    pub slot: usize,
    /// Center relative to the center item.
    pub center: Point,
}

/// Result of laying out `len` items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HexLayout {
    placements: Vec<Placement>,
    bounding_size: Size,
    ring_count: usize,
}

impl HexLayout {
    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if no items were placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of rings used, including ring 0.
    #[must_use]
    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    /// Size of the square containing every item plus half an item of margin.
    ///
    /// This is [`Size::ZERO`] for an empty layout.
    #[must_use]
    pub fn bounding_size(&self) -> Size {
        self.bounding_size
    }

    /// All placements, in index order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Centers in index order.
    pub fn centers(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.placements.iter().map(|p| p.center)
    }

    /// Center of the item at `index`, if it exists.
    #[must_use]
    pub fn center(&self, index: usize) -> Option<Point> {
        self.placements.get(index).map(|p| p.center)
    }
}

/// Lays out `len` items into rings around the origin.
#[must_use]
pub fn compute_layout(len: usize, params: &LayoutParams) -> HexLayout {
    compute_layout_with(len, params, |_| {})
}

/// Lays out `len` items and reports each placement to `on_place` as soon as
/// its center is known, in index order.
///
/// Callers typically use the callback to position a view and schedule an
/// entrance animation staggered by ring or by index.
pub fn compute_layout_with<F>(len: usize, params: &LayoutParams, mut on_place: F) -> HexLayout
where
    F: FnMut(Placement),
{
    if len == 0 {
        return HexLayout::default();
    }

    let mut placements = Vec::with_capacity(len);
    let mut slot = RingSlot::default();
    for index in 0..len {
        let placement = Placement {
            index,
            ring: slot.ring,
            slot: slot.slot,
            center: params.center_for(slot),
        };
        on_place(placement);
        placements.push(placement);
        slot = slot.next();
    }

    HexLayout {
        placements,
        bounding_size: params.bounding_size(len),
        ring_count: ring_count(len),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::f64::consts::FRAC_PI_3;

    use kurbo::{Point, Size, Vec2};

    use super::{LayoutParams, RingShape, compute_layout, compute_layout_with};
    use crate::error::LayoutError;
    use crate::ring::ring_capacity;

    fn params() -> LayoutParams {
        LayoutParams::new(65.0, 10.0).unwrap()
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn rejects_degenerate_params() {
        assert_eq!(
            LayoutParams::new(0.0, 10.0),
            Err(LayoutError::InvalidItemSize(0.0))
        );
        assert_eq!(
            LayoutParams::new(-5.0, 10.0),
            Err(LayoutError::InvalidItemSize(-5.0))
        );
        assert_eq!(
            LayoutParams::new(65.0, -1.0),
            Err(LayoutError::InvalidItemSpacing(-1.0))
        );
        assert!(LayoutParams::new(f64::NAN, 1.0).is_err());
        assert!(LayoutParams::new(65.0, 0.0).is_ok());
    }

    #[test]
    fn empty_layout_is_degenerate() {
        let layout = compute_layout(0, &params());
        assert!(layout.is_empty());
        assert_eq!(layout.ring_count(), 0);
        assert_eq!(layout.bounding_size(), Size::ZERO);
        assert_eq!(params().bounding_size(0), Size::ZERO);

        let mut calls = 0;
        compute_layout_with(0, &params(), |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn single_item_sits_at_origin() {
        let layout = compute_layout(1, &params());
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.center(0), Some(Point::ORIGIN));
        assert_eq!(layout.placements()[0].ring, 0);
        assert_eq!(layout.bounding_size(), Size::new(130.0, 130.0));
    }

    #[test]
    fn first_ring_is_six_items_at_one_pitch() {
        let layout = compute_layout(7, &params());
        assert_eq!(layout.center(0), Some(Point::ORIGIN));
        for (slot, p) in layout.placements()[1..].iter().enumerate() {
            assert_eq!(p.ring, 1);
            assert_eq!(p.slot, slot);
            let expected = (Vec2::from_angle(FRAC_PI_3 * slot as f64) * 75.0).to_point();
            assert!(close(p.center, expected), "slot {slot}: {:?}", p.center);
            assert!((p.center.distance(Point::ORIGIN) - 75.0).abs() < 1e-9);
        }
        assert_eq!(layout.bounding_size(), Size::new(280.0, 280.0));
    }

    #[test]
    fn rings_fill_in_order_and_last_ring_is_partial() {
        let len = 1 + 6 + 12 + 5;
        let layout = compute_layout(len, &params());
        assert_eq!(layout.ring_count(), 4);

        let mut per_ring = [0_usize; 4];
        for p in layout.placements() {
            per_ring[p.ring] += 1;
        }
        assert_eq!(per_ring, [1, 6, 12, 5]);
        for ring in 1..3 {
            assert_eq!(per_ring[ring], ring_capacity(ring));
        }
    }

    #[test]
    fn centers_are_distinct() {
        for shape in [RingShape::Circular, RingShape::Lattice] {
            let params = params().with_shape(shape);
            let layout = compute_layout(127, &params);
            let centers: Vec<Point> = layout.centers().collect();
            assert_eq!(centers.len(), 127);
            for (i, a) in centers.iter().enumerate() {
                for b in &centers[i + 1..] {
                    assert!(a.distance(*b) > 1.0, "{shape:?}: {a:?} and {b:?} overlap");
                }
            }
        }
    }

    #[test]
    fn circular_rings_keep_constant_radius() {
        let layout = compute_layout(37, &params());
        for p in layout.placements() {
            let expected = p.ring as f64 * 75.0;
            assert!((p.center.distance(Point::ORIGIN) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn lattice_neighbours_are_one_pitch_apart() {
        let params = params().with_shape(RingShape::Lattice);
        let layout = compute_layout(37, &params);
        // Ring 3 occupies indices 19..37; consecutive slots are lattice neighbours.
        let ring3 = &layout.placements()[19..37];
        for pair in ring3.windows(2) {
            let d = pair[0].center.distance(pair[1].center);
            assert!((d - 75.0).abs() < 1e-9, "distance {d}");
        }
        // Corners keep the full circumradius.
        assert!((ring3[0].center.distance(Point::ORIGIN) - 225.0).abs() < 1e-9);
        assert!((ring3[3].center.distance(Point::ORIGIN) - 225.0).abs() < 1e-9);
    }

    #[test]
    fn lattice_matches_circular_on_first_ring() {
        let circular = compute_layout(7, &params());
        let lattice = compute_layout(7, &params().with_shape(RingShape::Lattice));
        for (a, b) in circular.centers().zip(lattice.centers()) {
            assert!(close(a, b));
        }
    }

    #[test]
    fn callback_sees_every_placement_in_order() {
        let mut seen = Vec::new();
        let layout = compute_layout_with(20, &params(), |p| seen.push(p));
        assert_eq!(seen.as_slice(), layout.placements());
        assert!(seen.iter().enumerate().all(|(i, p)| p.index == i));
    }

    #[test]
    fn layout_is_deterministic() {
        assert_eq!(compute_layout(50, &params()), compute_layout(50, &params()));
    }

    #[test]
    fn bounding_size_contains_every_item_with_margin() {
        let params = params();
        let layout = compute_layout(40, &params);
        let half = layout.bounding_size().width / 2.0;
        for c in layout.centers() {
            assert!(c.x.abs() + params.item_size() <= half + 1e-9);
            assert!(c.y.abs() + params.item_size() <= half + 1e-9);
        }
    }
}
