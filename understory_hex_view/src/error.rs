// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;
use understory_hex_layout::LayoutError;

/// Errors reported by [`crate::HexagonalView`].
///
/// None of these are fatal to the host: they are scoped to the widget
/// instance, which stays usable (possibly empty) afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum HexViewError {
    /// Item size or spacing cannot produce a layout.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// Entrance stagger or pop duration is negative or not finite.
    #[error("animation duration must be finite and non-negative, got {0}")]
    InvalidAnimationDuration(f64),
    /// Zoom limits are not finite, not positive, or `min > max`.
    #[error("invalid zoom limits: min {min}, max {max}")]
    InvalidZoomLimits {
        /// Requested minimum zoom.
        min: f64,
        /// Requested maximum zoom.
        max: f64,
    },
    /// Deceleration rate is outside `(0, 1)`.
    #[error("deceleration rate must be in (0, 1), got {0}")]
    InvalidDecelerationRate(f64),
    /// The data source returned no content for an index below its count.
    #[error("data source returned no content for index {index}")]
    MissingContent {
        /// Index the data source could not provide.
        index: usize,
    },
    /// An index does not refer to a placed item.
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current number of items.
        len: usize,
    },
}
