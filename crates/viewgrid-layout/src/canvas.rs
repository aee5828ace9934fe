#![forbid(unsafe_code)]

//! Canvas size calculation.
//!
//! Pure arithmetic from (container size, layout, view position) to the
//! pixel dimensions one view's canvas should render at. The container is
//! divided into grid tracks separated by a gap; a view spanning multiple
//! tracks absorbs the interior gaps it covers. Results are clamped to a
//! floor so a collapsing container can never starve a renderer.
//!
//! # Usage
//!
//! ```ignore
//! use viewgrid_core::Size;
//! use viewgrid_layout::canvas::{canvas_size, CanvasConfig};
//! use viewgrid_layout::catalog::LayoutKind;
//!
//! let cfg = CanvasConfig::default().with_gap_px(8.0);
//! let s = canvas_size(Size::new(800.0, 600.0), LayoutKind::DoubleHorizontal, 0, &cfg);
//! assert_eq!((s.width, s.height), (396.0, 600.0));
//! ```
//!
//! # Invariants
//!
//! 1. Pure: no clock, no observation, no hidden state.
//! 2. The result is >= the configured floor on both axes, for any input
//!    including zero, negative, and non-finite container axes.
//! 3. A span of `n` tracks measures exactly `n` cells plus `n - 1` gaps.

use viewgrid_core::constants::{DEFAULT_FONT_SIZE_PX, GRID_GAP, MIN_CANVAS_SIZE};
use viewgrid_core::{CssRem, Size};

use crate::catalog::{LayoutKind, template};

/// Inputs the calculator needs beyond the container and layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    /// Gap between grid tracks.
    pub gap: CssRem,
    /// Base font size used to resolve the gap to pixels, read from the
    /// ambient presentation environment by the embedder.
    pub base_font_px: f64,
    /// Per-axis floor for computed dimensions.
    pub min: Size,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            gap: GRID_GAP,
            base_font_px: DEFAULT_FONT_SIZE_PX,
            min: MIN_CANVAS_SIZE,
        }
    }
}

impl CanvasConfig {
    /// Set the gap in rem.
    #[must_use]
    pub fn with_gap(mut self, gap: CssRem) -> Self {
        self.gap = gap;
        self
    }

    /// Set the gap as a pixel value, resolved against the current base
    /// font size. Changing the base font afterwards rescales the gap.
    #[must_use]
    pub fn with_gap_px(mut self, gap_px: f64) -> Self {
        self.gap = CssRem::new(gap_px / self.base_font_px);
        self
    }

    /// Set the base font size in pixels.
    #[must_use]
    pub fn with_base_font_px(mut self, px: f64) -> Self {
        self.base_font_px = px;
        self
    }

    /// Set the dimension floor.
    #[must_use]
    pub fn with_min(mut self, min: Size) -> Self {
        self.min = min;
        self
    }

    /// The gap resolved to pixels.
    #[inline]
    #[must_use]
    pub fn gap_px(&self) -> f64 {
        self.gap.to_px(self.base_font_px)
    }
}

/// One axis: divide the extent into `tracks` cells separated by `gap_px`,
/// then measure a run of `span` cells including interior gaps.
fn axis_size(extent: f64, tracks: u8, span: u8, gap_px: f64) -> f64 {
    let tracks_f = f64::from(tracks.max(1));
    let available = extent - (tracks_f - 1.0) * gap_px;
    let cell = if available > 0.0 {
        available / tracks_f
    } else {
        0.0
    };
    let span_f = f64::from(span.max(1));
    span_f * cell + (span_f - 1.0) * gap_px
}

/// One axis of the uniform fallback used when the view position has no
/// span in the template: an even share of the extent minus its share of
/// the gaps.
fn axis_fallback(extent: f64, tracks: u8, gap_px: f64) -> f64 {
    let tracks_f = f64::from(tracks.max(1));
    extent / tracks_f - (tracks_f - 1.0) * gap_px / tracks_f
}

/// Compute the canvas dimensions for one view.
///
/// `view_index` is the view's position in the roster; positions past the
/// template's capacity (the degraded-capacity state) get the uniform
/// fallback share. Total over all inputs; see the module invariants.
#[must_use]
pub fn canvas_size(
    container: Size,
    kind: LayoutKind,
    view_index: usize,
    cfg: &CanvasConfig,
) -> Size {
    if container.is_empty() {
        return fallback_size(container, cfg);
    }

    let t = template(kind);
    let gap_px = cfg.gap_px();

    let raw = match t.span(view_index) {
        Some(span) => Size::new(
            axis_size(container.width, t.grid.cols, span.col, gap_px),
            axis_size(container.height, t.grid.rows, span.row, gap_px),
        ),
        None => Size::new(
            axis_fallback(container.width, t.grid.cols, gap_px),
            axis_fallback(container.height, t.grid.rows, gap_px),
        ),
    };

    raw.max(cfg.min)
}

/// Dimensions to use before a layout or a real container size is known.
///
/// Axes the container already reports stay as they are; unmeasured (zero
/// or negative) axes take the floor.
#[must_use]
pub fn fallback_size(container: Size, cfg: &CanvasConfig) -> Size {
    Size::new(
        if container.width > 0.0 {
            container.width
        } else {
            cfg.min.width
        },
        if container.height > 0.0 {
            container.height
        } else {
            cfg.min.height
        },
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
