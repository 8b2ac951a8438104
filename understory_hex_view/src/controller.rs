// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settle state machine: remember which item a gesture should come to rest
//! on, and release it exactly once when motion stops.
//!
//! ## Transitions
//!
//! - [`SettleController::target`]: a drag is about to end; pick the item
//!   nearest to the projected resting center and move to
//!   [`SettleState::PendingSettle`]. A later projection overwrites an earlier one.
//! - [`SettleController::consume`]: motion stopped (drag ended without
//!   deceleration, or deceleration ended). Yields the pending index once and
//!   returns to [`SettleState::Idle`]; further calls yield nothing.

use kurbo::Point;
use understory_hex_layout::nearest_index;

/// Whether a settle is waiting for motion to stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SettleState {
    /// Nothing to do when motion stops.
    #[default]
    Idle,
    /// The viewport should center on the last focused item once motion stops.
    PendingSettle,
}

/// Tracks the focused item and the pending settle.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettleController {
    last_focused: usize,
    state: SettleState,
}

impl SettleController {
    /// Index the viewport is, or last was, centered on.
    #[must_use]
    pub fn last_focused_index(&self) -> usize {
        self.last_focused
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SettleState {
        self.state
    }

    /// Returns `true` while a settle is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == SettleState::PendingSettle
    }

    /// Picks the candidate nearest to `resting_center`, stores it as the last
    /// focused index and marks a settle as pending.
    ///
    /// With no candidates the last focused index is kept.
    pub fn target<I>(&mut self, resting_center: Point, centers: I) -> usize
    where
        I: IntoIterator<Item = Point>,
    {
        self.last_focused = nearest_index(resting_center, centers, self.last_focused);
        self.state = SettleState::PendingSettle;
        log::trace!("settle pending on index {}", self.last_focused);
        self.last_focused
    }

    /// Takes the pending settle, if any.
    pub fn consume(&mut self) -> Option<usize> {
        match self.state {
            SettleState::Idle => None,
            SettleState::PendingSettle => {
                self.state = SettleState::Idle;
                Some(self.last_focused)
            }
        }
    }

    /// Adjusts state after a reload to `len` items.
    ///
    /// A pending settle referred to the previous items and is dropped. The
    /// last focused index is reset to 0 when it no longer exists.
    pub fn reset_for_len(&mut self, len: usize) {
        self.state = SettleState::Idle;
        if self.last_focused >= len {
            self.last_focused = 0;
        }
    }
}
