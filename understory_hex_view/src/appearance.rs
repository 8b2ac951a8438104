// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time appearance and behavior settings.

use peniko::Color;
use understory_hex_layout::{BorderFade, LayoutParams, RingShape};

use crate::content::EntranceAnimation;
use crate::error::HexViewError;

/// How items pop in after a reload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationType {
    /// Items appear one after another in index order.
    Spiral,
    /// All items of a ring appear together, ring after ring.
    #[default]
    Ring,
    /// No entrance animation; items are shown at full scale immediately.
    None,
}

/// How quickly a released drag slows down.
///
/// The rate is the fraction of velocity kept per millisecond.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DecelerationRate {
    /// Long, gentle glide.
    Normal,
    /// Short glide, better suited to snapping onto items.
    #[default]
    Fast,
    /// Custom per-millisecond rate in `(0, 1)`.
    Custom(f64),
}

impl DecelerationRate {
    /// Fraction of velocity kept per millisecond.
    #[must_use]
    pub fn per_millisecond(self) -> f64 {
        match self {
            Self::Normal => 0.998,
            Self::Fast => 0.99,
            Self::Custom(rate) => rate,
        }
    }

    /// Multiplier turning a release velocity (points per millisecond) into the
    /// total distance of the glide.
    #[must_use]
    pub fn glide_factor(self) -> f64 {
        let rate = self.per_millisecond();
        rate / (1.0 - rate)
    }
}

/// Minimum and maximum zoom scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Smallest allowed zoom.
    pub min: f64,
    /// Largest allowed zoom.
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 0.2, max: 2.0 }
    }
}

/// Appearance of the grid and its items.
///
/// Geometry only depends on [`Appearance::item_size`],
/// [`Appearance::item_spacing`] and [`Appearance::ring_shape`]. Border width
/// and color are passed through untouched for the host's item decoration.
#[derive(Clone, Copy, Debug)]
pub struct Appearance {
    /// Side of each (square) item.
    pub item_size: f64,
    /// Gap between neighbouring items.
    pub item_spacing: f64,
    /// Width of the item border.
    pub border_width: f64,
    /// Color of the item border.
    pub border_color: Color,
    /// Entrance animation style.
    pub animation_type: AnimationType,
    /// Stagger between consecutive entrance steps, in seconds.
    pub animation_duration: f64,
    /// Length of a single entrance pop, in seconds.
    pub pop_duration: f64,
    /// Spring damping ratio for the entrance pop.
    pub pop_damping: f64,
    /// Zoom range.
    pub zoom_limits: ZoomLimits,
    /// Ring shape.
    pub ring_shape: RingShape,
    /// Deceleration used when projecting where a released drag comes to rest.
    pub deceleration_rate: DecelerationRate,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            item_size: 65.0,
            item_spacing: 10.0,
            border_width: 5.0,
            border_color: Color::from_rgb8(128, 128, 128),
            animation_type: AnimationType::default(),
            animation_duration: 0.2,
            pop_duration: 0.3,
            pop_damping: 0.5,
            zoom_limits: ZoomLimits::default(),
            ring_shape: RingShape::default(),
            deceleration_rate: DecelerationRate::default(),
        }
    }
}

impl Appearance {
    /// Sets the item size.
    #[must_use]
    pub fn with_item_size(mut self, item_size: f64) -> Self {
        self.item_size = item_size;
        self
    }

    /// Sets the spacing between items.
    #[must_use]
    pub fn with_item_spacing(mut self, item_spacing: f64) -> Self {
        self.item_spacing = item_spacing;
        self
    }

    /// Sets the border width and color.
    #[must_use]
    pub fn with_border(mut self, width: f64, color: Color) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    /// Sets the entrance animation style and stagger step.
    #[must_use]
    pub fn with_animation(mut self, animation_type: AnimationType, duration: f64) -> Self {
        self.animation_type = animation_type;
        self.animation_duration = duration;
        self
    }

    /// Sets the zoom range.
    #[must_use]
    pub fn with_zoom_limits(mut self, min: f64, max: f64) -> Self {
        self.zoom_limits = ZoomLimits { min, max };
        self
    }

    /// Sets the ring shape.
    #[must_use]
    pub fn with_ring_shape(mut self, shape: RingShape) -> Self {
        self.ring_shape = shape;
        self
    }

    /// Sets the deceleration rate.
    #[must_use]
    pub fn with_deceleration_rate(mut self, rate: DecelerationRate) -> Self {
        self.deceleration_rate = rate;
        self
    }

    /// Checks that these settings can drive a widget.
    pub fn validate(&self) -> Result<(), HexViewError> {
        self.layout_params()?;
        for duration in [self.animation_duration, self.pop_duration] {
            if !duration.is_finite() || duration < 0.0 {
                return Err(HexViewError::InvalidAnimationDuration(duration));
            }
        }
        let ZoomLimits { min, max } = self.zoom_limits;
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(HexViewError::InvalidZoomLimits { min, max });
        }
        let rate = self.deceleration_rate.per_millisecond();
        if !(rate > 0.0 && rate < 1.0) {
            return Err(HexViewError::InvalidDecelerationRate(rate));
        }
        Ok(())
    }

    /// Layout parameters derived from these settings.
    pub fn layout_params(&self) -> Result<LayoutParams, HexViewError> {
        Ok(LayoutParams::new(self.item_size, self.item_spacing)?.with_shape(self.ring_shape))
    }

    /// Border fade curve derived from these settings.
    #[must_use]
    pub fn border_fade(&self) -> BorderFade {
        BorderFade::new(self.item_size, self.item_spacing)
    }

    /// Entrance animation for the item at `index` in `ring`, or `None` when
    /// items should simply appear.
    #[must_use]
    pub fn entrance_for(&self, index: usize, ring: usize) -> Option<EntranceAnimation> {
        let step = match self.animation_type {
            AnimationType::Spiral => index,
            AnimationType::Ring => ring,
            AnimationType::None => return None,
        };
        Some(EntranceAnimation {
            delay: step as f64 * self.animation_duration,
            duration: self.pop_duration,
            damping: self.pop_damping,
        })
    }
}
