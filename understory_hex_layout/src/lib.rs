// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_hex_layout --heading-base-level=0

//! Understory Hex Layout: geometry for hexagonal ring grids.
//!
//! This crate places a dense strip of items indexed `0..len` into concentric
//! rings around a center item and answers the per-frame geometric questions a
//! zoomable ring widget needs. It focuses on:
//! - Ring assignment: which ring and slot an index lands in ([`RingSlot`]).
//! - Layout: the content-layer center of every item plus the bounding size of
//!   the whole grid ([`compute_layout`], [`compute_layout_with`]).
//! - Border proximity: how much an item should shrink as it approaches the
//!   edge of the visible region ([`BorderFade`]).
//! - Nearest lookup: which item is closest to a reference point
//!   ([`nearest_index`]).
//!
//! It does **not** own items, views, or any rendering backend. Callers keep
//! their own item storage keyed by index and feed positions back in.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_hex_layout::{LayoutParams, RingSlot, compute_layout, nearest_index};
//!
//! // 65pt items with 10pt gaps: rings sit 75pt apart.
//! let params = LayoutParams::new(65.0, 10.0).unwrap();
//! let layout = compute_layout(7, &params);
//!
//! assert_eq!(layout.len(), 7);
//! assert_eq!(layout.center(0), Some(Point::ORIGIN));
//! assert_eq!(RingSlot::for_index(6), RingSlot { ring: 1, slot: 5 });
//!
//! // Which item is closest to a point just right of the center item?
//! let idx = nearest_index(Point::new(70.0, 0.0), layout.centers(), 0);
//! assert_eq!(idx, 1);
//! ```
//!
//! ## Ring conventions
//!
//! Ring 0 holds the single center item. Ring `k >= 1` holds `6k` items, all
//! at distance `k * (item_size + item_spacing)` from the center for
//! [`RingShape::Circular`], or on the hexagon with that circumradius for
//! [`RingShape::Lattice`]. Slot 0 of every ring lies on the +x axis and slots
//! advance toward +y (clockwise on a y-down screen).
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod border;
mod error;
mod layout;
mod nearest;
mod ring;

pub use border::BorderFade;
pub use error::LayoutError;
pub use layout::{
    HexLayout, LayoutParams, Placement, RingShape, compute_layout, compute_layout_with,
};
pub use nearest::{nearest, nearest_index};
pub use ring::{RingSlot, ring_capacity, ring_count, ring_start};
