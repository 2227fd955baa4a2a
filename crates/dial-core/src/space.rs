//! Logical-pixel coordinate mapping.
//!
//! The canvas backing store is scaled by the device pixel ratio, but every
//! position here stays in logical (CSS) pixels or in the normalized unit
//! square. The frontend applies the DPR transform to the drawing context once
//! per resize, so the mapping never compounds the scale.

use glam::DVec2;
use thiserror::Error;

/// Logical (CSS pixel) canvas dimensions of one dial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    size: DVec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("viewport dimensions must be positive and finite, got {width}x{height}")]
pub struct ViewportError {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, ViewportError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self {
                size: DVec2::new(width, height),
            })
        } else {
            Err(ViewportError { width, height })
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// Canvas-relative CSS pixels -> [0,1]x[0,1]. Not clamped; callers that
    /// need the unit square clamp afterwards.
    #[inline]
    pub fn normalize(&self, p: DVec2) -> DVec2 {
        p / self.size
    }

    /// Normalized -> canvas-relative CSS pixels.
    #[inline]
    pub fn denormalize(&self, p: DVec2) -> DVec2 {
        p * self.size
    }

    /// Half the smaller dimension: the largest drag distance that stays fully
    /// on-screen for non-square canvases.
    #[inline]
    pub fn half_min(&self) -> f64 {
        self.size.min_element() / 2.0
    }
}

impl Default for Viewport {
    /// 1x1 logical pixel placeholder used before the first layout pass, where
    /// normalized and pixel coordinates coincide.
    fn default() -> Self {
        Self { size: DVec2::ONE }
    }
}
