// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring assignment: mapping between item indices and `(ring, slot)` pairs.

/// Number of slots ring `ring` can hold.
///
/// Ring 0 is the single center item; ring `k >= 1` holds `6k` items.
#[must_use]
pub const fn ring_capacity(ring: usize) -> usize {
    if ring == 0 { 1 } else { 6 * ring }
}

/// Index of the first item placed in `ring`.
///
/// This is `0` for ring 0 and `1 + 3k(k - 1)` for ring `k >= 1`.
#[must_use]
pub const fn ring_start(ring: usize) -> usize {
    if ring == 0 {
        0
    } else {
        1 + 3 * ring * (ring - 1)
    }
}

/// Number of rings (including ring 0) occupied by `len` items.
#[must_use]
pub fn ring_count(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        RingSlot::for_index(len - 1).ring + 1
    }
}

/// Position of an item within the ring grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RingSlot {
    /// Ring number, `0` for the center item.
    pub ring: usize,
    /// Slot within the ring, in placement order.
    pub slot: usize,
}

impl RingSlot {
    /// Returns the ring assignment for the item at `index`.
    ///
    /// Rings are filled completely in index order before the next ring starts.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        let mut ring = 0;
        while index >= ring_start(ring + 1) {
            ring += 1;
        }
        Self {
            ring,
            slot: index - ring_start(ring),
        }
    }

    /// Returns the item index this slot corresponds to.
    #[must_use]
    pub fn index(self) -> usize {
        ring_start(self.ring) + self.slot
    }

    /// Returns the slot that follows this one in placement order.
    #[must_use]
    pub fn next(self) -> Self {
        if self.slot + 1 < ring_capacity(self.ring) {
            Self {
                ring: self.ring,
                slot: self.slot + 1,
            }
        } else {
            Self {
                ring: self.ring + 1,
                slot: 0,
            }
        }
    }
}
