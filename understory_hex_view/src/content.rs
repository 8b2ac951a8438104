// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side item content and placed items.

use kurbo::Point;

/// Host-owned visual content for one item.
///
/// The widget never looks inside the content. It only positions and scales
/// a wrapper around it, in content-layer coordinates.
pub trait ItemContent {
    /// Places the content centered at `center` with uniform `scale`.
    fn set_transform(&mut self, center: Point, scale: f64);

    /// Shows or hides the content.
    fn set_visible(&mut self, visible: bool);

    /// Schedules an entrance pop from scale 0 to scale 1 at `center`.
    ///
    /// This is fire-and-forget: the widget does not wait for it. The default
    /// implementation jumps straight to the final state.
    fn animate_entrance(&mut self, center: Point, animation: EntranceAnimation) {
        let _ = animation;
        self.set_transform(center, 1.0);
    }
}

/// Timing for an item's entrance pop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceAnimation {
    /// Delay before the pop starts, in seconds.
    pub delay: f64,
    /// Length of the pop, in seconds.
    pub duration: f64,
    /// Spring damping ratio.
    pub damping: f64,
}

/// Event emitted upward by a placed item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemEvent {
    /// The item at this index was tapped or clicked.
    Tapped(usize),
}

/// One placed item: its stable index, ring assignment, position, and the
/// host content it wraps.
#[derive(Debug)]
pub struct HexItem<C> {
    index: usize,
    ring: usize,
    slot: usize,
    center: Point,
    scale: f64,
    visible: bool,
    content: C,
}

impl<C: ItemContent> HexItem<C> {
    pub(crate) fn new(index: usize, content: C) -> Self {
        Self {
            index,
            ring: 0,
            slot: 0,
            center: Point::ORIGIN,
            scale: 1.0,
            visible: true,
            content,
        }
    }

    /// Stable index of this item within the current reload generation.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Ring number.
    #[must_use]
    pub fn ring(&self) -> usize {
        self.ring
    }

    /// Slot within the ring.
    #[must_use]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Center in content-layer coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Most recently applied border scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Whether the content is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The wrapped host content.
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutable access to the wrapped host content.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// The event this item sends upward when tapped.
    #[must_use]
    pub fn tap_event(&self) -> ItemEvent {
        ItemEvent::Tapped(self.index)
    }

    /// Moves the item to its final position, either popping it in with
    /// `entrance` or showing it at full scale right away.
    pub(crate) fn place(
        &mut self,
        ring: usize,
        slot: usize,
        center: Point,
        entrance: Option<EntranceAnimation>,
    ) {
        self.ring = ring;
        self.slot = slot;
        self.center = center;
        self.scale = 1.0;
        match entrance {
            Some(animation) => {
                self.content.set_transform(center, 0.0);
                self.content.animate_entrance(center, animation);
            }
            None => self.content.set_transform(center, 1.0),
        }
    }

    /// Applies a border scale, hiding the content once it reaches zero.
    pub(crate) fn apply_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.content.set_transform(self.center, scale);
        let visible = scale > 0.0;
        if visible != self.visible {
            self.visible = visible;
            self.content.set_visible(visible);
        }
    }
}
