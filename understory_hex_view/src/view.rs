// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size, Vec2};
use understory_hex_layout::{BorderFade, HexLayout, LayoutParams, compute_layout_with};

use crate::appearance::Appearance;
use crate::container::ItemContainer;
use crate::content::{HexItem, ItemContent, ItemEvent};
use crate::controller::{SettleController, SettleState};
use crate::drag::DragTracker;
use crate::error::HexViewError;
use crate::host::{Callbacks, DataSource};
use crate::viewport::ScrollViewport;

/// The content frame is this many times taller than it is wide, leaving
/// vertical scroll headroom around the rings.
pub const CONTENT_HEIGHT_RATIO: f64 = 1.5;

/// Animated scroll the host should perform to settle on an item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Item being centered.
    pub index: usize,
    /// Bounds-sized rectangle in scroll space centered on the item.
    pub rect: Rect,
    /// Content offset that reveals `rect`, clamped to the scrollable range.
    pub target_offset: Point,
    /// Whether the scroll should be animated.
    pub animated: bool,
}

/// What the host should do after [`HexagonalView::drag_released`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseOutcome {
    /// No drag was in progress.
    Ignored,
    /// Glide toward `target_offset`, then call
    /// [`HexagonalView::did_end_decelerating`].
    Decelerate {
        /// Scroll velocity at release, in points per millisecond.
        velocity: Vec2,
        /// Offset the glide comes to rest at.
        target_offset: Point,
    },
    /// Motion already stopped; perform this settle scroll.
    Settle(ScrollRequest),
}

/// Headless hexagonal ring widget.
///
/// Owns the placed items, the scroll viewport and the settle state. The host
/// forwards reloads, scroll/zoom changes and gesture phases; the widget
/// positions and scales the host content and tells the host where to scroll.
#[derive(Debug)]
pub struct HexagonalView<C> {
    appearance: Appearance,
    params: LayoutParams,
    fade: BorderFade,
    layout: HexLayout,
    items: ItemContainer<C>,
    viewport: ScrollViewport,
    settle: SettleController,
    drag: DragTracker,
    callbacks: Callbacks,
}

impl<C: ItemContent> HexagonalView<C> {
    /// Creates an empty widget with visible size `bounds_size`.
    ///
    /// Returns an error if `appearance` fails [`Appearance::validate`].
    pub fn new(appearance: Appearance, bounds_size: Size) -> Result<Self, HexViewError> {
        appearance.validate()?;
        let params = appearance.layout_params()?;
        let mut viewport = ScrollViewport::new(bounds_size);
        viewport.set_zoom_limits(appearance.zoom_limits.min, appearance.zoom_limits.max);
        Ok(Self {
            appearance,
            params,
            fade: appearance.border_fade(),
            layout: HexLayout::default(),
            items: ItemContainer::default(),
            viewport,
            settle: SettleController::default(),
            drag: DragTracker::default(),
            callbacks: Callbacks::default(),
        })
    }

    /// Appearance this widget was built with.
    #[must_use]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Host callbacks.
    pub fn callbacks_mut(&mut self) -> &mut Callbacks {
        &mut self.callbacks
    }

    /// Sets the callback fired when an item is tapped.
    pub fn set_on_select(&mut self, f: impl FnMut(usize) + 'static) {
        self.callbacks.set_on_select(f);
    }

    /// Sets the callback fired just before the viewport settles on an item.
    pub fn set_on_will_center(&mut self, f: impl FnMut(usize) + 'static) {
        self.callbacks.set_on_will_center(f);
    }

    /// Discards all items and rebuilds them from `source`.
    ///
    /// If `source` fails to provide content for an index below its count,
    /// the reload is aborted, the widget is left empty and
    /// [`HexViewError::MissingContent`] is returned.
    pub fn reload<S>(&mut self, source: &mut S) -> Result<(), HexViewError>
    where
        S: DataSource<Content = C>,
    {
        self.items.clear();
        self.layout = HexLayout::default();
        self.viewport.set_layer_size(Size::ZERO);

        let len = source.item_count();
        self.settle.reset_for_len(len);
        if len == 0 {
            log::debug!("reload: no items");
            return Ok(());
        }

        let mut items = Vec::with_capacity(len);
        for index in 0..len {
            let Some(content) = source.content_for_index(index) else {
                log::warn!("reload aborted: no content for index {index} of {len}");
                self.settle.reset_for_len(0);
                return Err(HexViewError::MissingContent { index });
            };
            items.push(HexItem::new(index, content));
        }

        let bounding = self.params.bounding_size(len);
        let layer = Size::new(bounding.width, bounding.width * CONTENT_HEIGHT_RATIO);
        let origin = Vec2::new(layer.width / 2.0, layer.height / 2.0);
        let appearance = &self.appearance;
        self.layout = compute_layout_with(len, &self.params, |placement| {
            if let Some(item) = items.get_mut(placement.index) {
                let entrance = appearance.entrance_for(placement.index, placement.ring);
                item.place(
                    placement.ring,
                    placement.slot,
                    placement.center + origin,
                    entrance,
                );
            }
        });
        self.items.replace(items);
        self.viewport.set_layer_size(layer);

        log::debug!(
            "reload: {len} items in {} rings, content layer {}x{}",
            self.layout.ring_count(),
            layer.width,
            layer.height
        );
        Ok(())
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no placed items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, or `None` if it does not exist.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&HexItem<C>> {
        self.items.get(index)
    }

    /// Mutable item at `index`, or `None` if it does not exist.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut HexItem<C>> {
        self.items.get_mut(index)
    }

    /// All placed items.
    #[must_use]
    pub fn items(&self) -> &ItemContainer<C> {
        &self.items
    }

    /// Layout from the most recent reload, relative to the center item.
    #[must_use]
    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    /// Bounding size of the rings; zero when empty.
    #[must_use]
    pub fn bounding_size(&self) -> Size {
        self.layout.bounding_size()
    }

    /// Unscaled content-layer size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.viewport.layer_size()
    }

    /// Viewport model.
    #[must_use]
    pub fn viewport(&self) -> &ScrollViewport {
        &self.viewport
    }

    /// Current zoom scale, `1.0` until the first zoom gesture.
    #[must_use]
    pub fn zoom_scale(&self) -> f64 {
        self.viewport.zoom()
    }

    /// Index the viewport is, or last was, centered on.
    #[must_use]
    pub fn last_focused_index(&self) -> usize {
        self.settle.last_focused_index()
    }

    /// Current settle state.
    #[must_use]
    pub fn settle_state(&self) -> SettleState {
        self.settle.state()
    }

    /// Returns `true` if a settle will happen when motion stops.
    #[must_use]
    pub fn is_settle_pending(&self) -> bool {
        self.settle.is_pending()
    }

    /// Sets the visible size.
    pub fn set_bounds_size(&mut self, size: Size) {
        self.viewport.set_bounds_size(size);
    }

    /// Sets the content inset, which also moves the fade edges.
    pub fn set_content_inset(&mut self, insets: Insets) {
        self.viewport.set_content_inset(insets);
    }

    /// Routes an event emitted by an item.
    ///
    /// A tap on a placed item fires the select callback. Events for indices
    /// that no longer exist report [`HexViewError::IndexOutOfRange`].
    pub fn handle_item_event(&mut self, event: ItemEvent) -> Result<(), HexViewError> {
        match event {
            ItemEvent::Tapped(index) => {
                if index >= self.items.len() {
                    return Err(HexViewError::IndexOutOfRange {
                        index,
                        len: self.items.len(),
                    });
                }
                log::trace!("item {index} tapped");
                self.callbacks.select(index);
                Ok(())
            }
        }
    }

    /// The zoom scale changed. Clamps, caches, and re-centers the content.
    ///
    /// Returns the zoom actually applied.
    pub fn zoom_changed(&mut self, zoom: f64) -> f64 {
        let applied = self.viewport.set_zoom(zoom);
        self.viewport.center_content();
        log::trace!("zoom changed to {applied}");
        applied
    }

    /// The content offset changed. Recomputes every item's border scale.
    pub fn scroll_changed(&mut self, offset: Point) {
        self.viewport.set_content_offset(offset);
        self.apply_border_scales();
    }

    /// A drag is about to end and will come to rest at `target_offset`.
    ///
    /// Picks the item nearest to the resting center and marks a settle as
    /// pending. Returns the chosen index.
    pub fn will_end_dragging(&mut self, velocity: Vec2, target_offset: Point) -> usize {
        let resting = self.viewport.resting_center(target_offset);
        let index = self.settle.target(resting, self.items.centers());
        log::debug!(
            "drag ending with velocity ({:.3}, {:.3}): settling on {index}",
            velocity.x,
            velocity.y
        );
        index
    }

    /// The drag ended. Without deceleration, the pending settle runs now.
    pub fn did_end_dragging(&mut self, decelerate: bool) -> Option<ScrollRequest> {
        if decelerate {
            return None;
        }
        self.settle_pending()
    }

    /// Deceleration ended; the pending settle, if still there, runs now.
    pub fn did_end_decelerating(&mut self) -> Option<ScrollRequest> {
        self.settle_pending()
    }

    /// A pointer drag started at `pos` (view space) at `time_ms`.
    pub fn drag_began(&mut self, pos: Point, time_ms: f64) {
        self.drag.start(pos, time_ms);
    }

    /// The pointer moved during a drag; pans the content with it.
    pub fn drag_moved(&mut self, pos: Point, time_ms: f64) {
        if let Some(delta) = self.drag.update(pos, time_ms) {
            let offset = self.viewport.content_offset() - delta;
            self.scroll_changed(offset);
        }
    }

    /// The pointer was released.
    ///
    /// Projects where the content would glide to with the configured
    /// deceleration, targets the nearest item, and tells the host whether to
    /// glide first or settle right away.
    pub fn drag_released(&mut self, time_ms: f64) -> ReleaseOutcome {
        if !self.drag.is_dragging() {
            return ReleaseOutcome::Ignored;
        }
        // Content moves against the pointer.
        let velocity = -self.drag.release(time_ms);
        let glide = velocity * self.appearance.deceleration_rate.glide_factor();
        let current = self.viewport.content_offset();
        let target_offset = self.viewport.clamp_offset(current + glide);

        self.will_end_dragging(velocity, target_offset);
        let decelerate = velocity != Vec2::ZERO && target_offset != current;
        if decelerate {
            self.did_end_dragging(true);
            ReleaseOutcome::Decelerate {
                velocity,
                target_offset,
            }
        } else {
            self.did_end_dragging(false)
                .map_or(ReleaseOutcome::Ignored, ReleaseOutcome::Settle)
        }
    }

    fn settle_pending(&mut self) -> Option<ScrollRequest> {
        let index = self.settle.consume()?;
        let Some(item) = self.items.get(index) else {
            log::debug!("settle on {index} dropped: {} items", self.items.len());
            return None;
        };
        let center = item.center();
        self.callbacks.will_center(index);

        let rect = self.viewport.centering_rect(center);
        let target_offset = self.viewport.offset_to_reveal(rect);
        log::debug!(
            "settling on {index}: offset ({:.1}, {:.1})",
            target_offset.x,
            target_offset.y
        );
        Some(ScrollRequest {
            index,
            rect,
            target_offset,
            animated: true,
        })
    }

    fn apply_border_scales(&mut self) {
        let bounds = self.viewport.bounds_size();
        let insets = self.viewport.content_inset();
        let zoom = self.viewport.zoom();
        for item in self.items.iter_mut() {
            let center = self.viewport.layer_to_view_point(item.center());
            let scale = self.fade.scale_for(center, bounds, insets, zoom);
            item.apply_scale(scale);
        }
    }
}
