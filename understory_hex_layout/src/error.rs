// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Rejected layout parameters.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum LayoutError {
    /// Item size must be finite and strictly positive.
    #[error("item size must be finite and positive, got {0}")]
    InvalidItemSize(f64),
    /// Item spacing must be finite and non-negative.
    #[error("item spacing must be finite and non-negative, got {0}")]
    InvalidItemSpacing(f64),
}
