// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: movement deltas plus a release velocity estimate.
//!
//! ## Usage
//!
//! 1) Start tracking with [`DragTracker::start`] at the initial pointer position.
//! 2) On each move, call [`DragTracker::update`] to get the delta since the last move.
//! 3) On release, call [`DragTracker::release`] to get the pointer velocity in
//!    points per millisecond and reset the tracker.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_hex_view::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! drag.start(Point::new(10.0, 20.0), 0.0);
//!
//! let delta = drag.update(Point::new(20.0, 20.0), 10.0).unwrap();
//! assert_eq!(delta.x, 10.0);
//!
//! // Released right away: one point per millisecond to the right.
//! let velocity = drag.release(10.0);
//! assert!((velocity.x - 1.0).abs() < 1e-9);
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Weight of the newest sample in the smoothed velocity.
const VELOCITY_SMOOTHING: f64 = 0.8;

/// A release this long after the last movement counts as a standstill.
const STALE_RELEASE_MS: f64 = 100.0;

/// Tracks an in-progress drag.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
    last_time_ms: f64,
    velocity: Vec2,
    sampled: bool,
}

impl DragTracker {
    /// Starts tracking a new drag at `pos`, discarding any previous one.
    pub fn start(&mut self, pos: Point, time_ms: f64) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.last_time_ms = time_ms;
        self.velocity = Vec2::ZERO;
        self.sampled = false;
    }

    /// Records a move to `pos`, returning the delta since the previous position.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn update(&mut self, pos: Point, time_ms: f64) -> Option<Vec2> {
        self.start_pos?;
        let last_pos = self.last_pos.replace(pos)?;
        let delta = pos - last_pos;
        let dt = time_ms - self.last_time_ms;
        if dt > 0.0 {
            let instant = delta / dt;
            self.velocity = if self.sampled {
                instant * VELOCITY_SMOOTHING + self.velocity * (1.0 - VELOCITY_SMOOTHING)
            } else {
                instant
            };
            self.sampled = true;
            self.last_time_ms = time_ms;
        }
        Some(delta)
    }

    /// Total offset from the drag start to `current_pos`.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Current smoothed pointer velocity in points per millisecond.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Ends the drag, returning the pointer velocity at release.
    ///
    /// The velocity is zero when no drag was in progress or when the pointer
    /// stood still for a while before release.
    pub fn release(&mut self, time_ms: f64) -> Vec2 {
        let velocity = if self.start_pos.is_some() && time_ms - self.last_time_ms < STALE_RELEASE_MS
        {
            self.velocity
        } else {
            Vec2::ZERO
        };
        *self = Self::default();
        velocity
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::DragTracker;

    #[test]
    fn update_without_start_is_ignored() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.update(Point::new(5.0, 5.0), 1.0), None);
        assert!(!drag.is_dragging());
        assert_eq!(drag.release(2.0), Vec2::ZERO);
    }

    #[test]
    fn deltas_are_incremental() {
        let mut drag = DragTracker::default();
        drag.start(Point::ORIGIN, 0.0);
        assert_eq!(
            drag.update(Point::new(5.0, 3.0), 16.0),
            Some(Vec2::new(5.0, 3.0))
        );
        assert_eq!(
            drag.update(Point::new(8.0, 7.0), 32.0),
            Some(Vec2::new(3.0, 4.0))
        );
        assert_eq!(
            drag.total_offset(Point::new(8.0, 7.0)),
            Some(Vec2::new(8.0, 7.0))
        );
    }

    #[test]
    fn steady_motion_converges_to_true_velocity() {
        let mut drag = DragTracker::default();
        drag.start(Point::ORIGIN, 0.0);
        for step in 1..=10 {
            let t = step as f64 * 10.0;
            drag.update(Point::new(-2.0 * t, 0.0), t);
        }
        let v = drag.release(100.0);
        assert!((v.x + 2.0).abs() < 1e-6, "velocity {v:?}");
        assert!(v.y.abs() < 1e-12);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn stale_release_has_no_velocity() {
        let mut drag = DragTracker::default();
        drag.start(Point::ORIGIN, 0.0);
        drag.update(Point::new(50.0, 0.0), 10.0);
        assert!(drag.velocity().x > 0.0);
        assert_eq!(drag.release(500.0), Vec2::ZERO);
    }

    #[test]
    fn zero_time_step_keeps_previous_velocity() {
        let mut drag = DragTracker::default();
        drag.start(Point::ORIGIN, 0.0);
        drag.update(Point::new(10.0, 0.0), 10.0);
        let before = drag.velocity();
        assert_eq!(
            drag.update(Point::new(12.0, 0.0), 10.0),
            Some(Vec2::new(2.0, 0.0))
        );
        assert_eq!(drag.velocity(), before);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragTracker::default();
        drag.start(Point::ORIGIN, 0.0);
        drag.update(Point::new(10.0, 10.0), 5.0);
        drag.start(Point::new(50.0, 60.0), 100.0);
        assert_eq!(drag.velocity(), Vec2::ZERO);
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }
}
