// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_hex_view --heading-base-level=0

//! Understory Hex View: a headless, zoomable hexagonal ring widget.
//!
//! This crate arranges host-provided items into concentric rings inside a
//! scrollable, zoomable content layer and drives three behaviors:
//! - Border fade: items shrink as they approach the visible edges and hide
//!   once they are well past them ([`HexagonalView::scroll_changed`]).
//! - Settle: when a drag ends, the viewport comes to rest centered on the
//!   item nearest to where the motion would stop
//!   ([`HexagonalView::will_end_dragging`], [`ScrollRequest`]).
//! - Entrance animation: on reload, items pop in one by one or ring by ring
//!   ([`AnimationType`]).
//!
//! It does **not** render or animate anything itself. Callers are expected to:
//! - Implement [`ItemContent`] for whatever draws an item and [`DataSource`]
//!   to hand the widget one content value per index.
//! - Forward scroll offset, zoom and gesture phases from their scroll
//!   container, or feed raw pointer samples through
//!   [`HexagonalView::drag_began`] and friends.
//! - Perform the animated scrolls the widget returns.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_hex_view::{Appearance, DataSource, HexagonalView, ItemContent};
//!
//! #[derive(Debug, Default)]
//! struct Tile {
//!     center: Point,
//!     scale: f64,
//! }
//!
//! impl ItemContent for Tile {
//!     fn set_transform(&mut self, center: Point, scale: f64) {
//!         self.center = center;
//!         self.scale = scale;
//!     }
//!     fn set_visible(&mut self, _visible: bool) {}
//! }
//!
//! struct Tiles(usize);
//!
//! impl DataSource for Tiles {
//!     type Content = Tile;
//!     fn item_count(&self) -> usize {
//!         self.0
//!     }
//!     fn content_for_index(&mut self, _index: usize) -> Option<Tile> {
//!         Some(Tile::default())
//!     }
//! }
//!
//! let mut view = HexagonalView::new(Appearance::default(), Size::new(320.0, 480.0)).unwrap();
//! view.reload(&mut Tiles(7)).unwrap();
//!
//! // One ring around the center item.
//! assert_eq!(view.bounding_size(), Size::new(280.0, 280.0));
//! assert_eq!(view.content_size(), Size::new(280.0, 420.0));
//!
//! // A drag coming to rest right where it started settles on the center item.
//! let index = view.will_end_dragging(Vec2::ZERO, Point::ORIGIN);
//! assert_eq!(index, 0);
//! let request = view.did_end_dragging(false).unwrap();
//! assert_eq!(request.index, 0);
//! ```
//!
//! ## Gesture flow
//!
//! A host backed by a native scroll container forwards its callbacks:
//! [`HexagonalView::scroll_changed`] on every offset change,
//! [`HexagonalView::zoom_changed`] on every zoom change, then
//! [`HexagonalView::will_end_dragging`], [`HexagonalView::did_end_dragging`]
//! and [`HexagonalView::did_end_decelerating`] around the end of a drag.
//! A settle runs at most once per drag.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod appearance;
mod container;
mod content;
mod controller;
mod drag;
mod error;
mod host;
mod view;
mod viewport;

pub use appearance::{AnimationType, Appearance, DecelerationRate, ZoomLimits};
pub use container::ItemContainer;
pub use content::{EntranceAnimation, HexItem, ItemContent, ItemEvent};
pub use controller::{SettleController, SettleState};
pub use drag::DragTracker;
pub use error::HexViewError;
pub use host::{Callbacks, DataSource};
pub use view::{CONTENT_HEIGHT_RATIO, HexagonalView, ReleaseOutcome, ScrollRequest};
pub use viewport::ScrollViewport;

pub use understory_hex_layout::RingShape;
