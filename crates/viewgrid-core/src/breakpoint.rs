#![forbid(unsafe_code)]

//! Responsive width classification.
//!
//! Thresholds match the common tailwind-ish convention: mobile up to
//! 640px, tablet up to 1024px, desktop above.

use serde::{Deserialize, Serialize};

/// Width class of a container.
///
/// Ordered narrowest to widest, so width classes compare the way the
/// underlying widths do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Width <= 640px.
    Mobile,
    /// 640px < width <= 1024px.
    Tablet,
    /// Width > 1024px.
    Desktop,
}

impl Breakpoint {
    /// Upper bound of the mobile class, inclusive.
    pub const MOBILE_MAX: f64 = 640.0;
    /// Upper bound of the tablet class, inclusive.
    pub const TABLET_MAX: f64 = 1024.0;

    /// Classify a container width in pixels.
    ///
    /// Total over all `f64` values. NaN fails both comparisons and lands
    /// in `Desktop`; callers that care should validate widths upstream.
    #[must_use]
    pub fn from_width(width: f64) -> Self {
        if width <= Self::MOBILE_MAX {
            Self::Mobile
        } else if width <= Self::TABLET_MAX {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Stable string label for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
