#![forbid(unsafe_code)]

//! Geometric primitives.

use serde::{Deserialize, Serialize};

/// A width/height pair in CSS pixels.
///
/// Used for both observed container dimensions and computed canvas
/// dimensions. Axes are `f64` because content-box readings carry
/// sub-pixel fractions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent in pixels.
    pub width: f64,
    /// Vertical extent in pixels.
    pub height: f64,
}

impl Size {
    /// The zero size.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check whether either axis is zero or negative.
    ///
    /// An observer reading with an empty axis means the container has not
    /// been laid out yet, not that it shrank to nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check whether both axes are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Clamp both axes to at least the given floor.
    ///
    /// NaN axes collapse to the floor rather than propagating.
    #[inline]
    #[must_use]
    pub fn max(&self, floor: Size) -> Size {
        Size {
            width: floor.width.max(self.width),
            height: floor.height.max(self.height),
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A length in CSS `rem` units.
///
/// Conversion to pixels requires the ambient base font size, which the
/// embedder reads from its presentation environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CssRem(pub f64);

impl CssRem {
    /// Create a rem length.
    #[inline]
    #[must_use]
    pub const fn new(rem: f64) -> Self {
        Self(rem)
    }

    /// Convert to pixels at the given base font size.
    #[inline]
    #[must_use]
    pub fn to_px(self, base_font_px: f64) -> f64 {
        self.0 * base_font_px
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
