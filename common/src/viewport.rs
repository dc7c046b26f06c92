//! Viewport dimensions reported by the presentation surface.

use crate::orientation::OrientationMode;

/// Available display area at a given moment, in layout pixels.
///
/// Both sides are finite and strictly positive. Construction rejects
/// anything else, so downstream derivations never see degenerate input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Validate and wrap a width/height pair.
    ///
    /// Returns `None` for zero, negative, NaN or infinite components.
    pub fn new(
        width: f32,
        height: f32,
    ) -> Option<Self> {
        let valid = |side: f32| side.is_finite() && side > 0.0;
        if valid(width) && valid(height) {
            Some(Self { width, height })
        } else {
            None
        }
    }

    #[inline]
    pub const fn width(&self) -> f32 { self.width }

    #[inline]
    pub const fn height(&self) -> f32 { self.height }

    #[inline]
    pub fn short_side(&self) -> f32 { self.width.min(self.height) }

    #[inline]
    pub fn long_side(&self) -> f32 { self.width.max(self.height) }

    /// Orientation implied by these dimensions (square counts as portrait).
    #[inline]
    pub fn orientation(&self) -> OrientationMode { OrientationMode::from_dimensions(self.width, self.height) }

    /// The same panel turned a quarter turn.
    #[inline]
    pub const fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Dimensions rounded to whole pixels, for labels and integer layout.
    #[inline]
    pub fn rounded(&self) -> (u32, u32) { (round_px(self.width), round_px(self.height)) }
}

/// Round a non-negative layout value to the nearest whole pixel.
#[inline]
pub(crate) fn round_px(value: f32) -> u32 {
    if value <= 0.0 { 0 } else { (value + 0.5) as u32 }
}
