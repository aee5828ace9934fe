#![forbid(unsafe_code)]

//! Shared timing and sizing constants.
//!
//! Single source of truth for the magic numbers that tie the observer,
//! the resize coordinator, and the canvas calculator together. Embedder
//! animation code keys off the transition durations; the engine itself
//! only schedules with the two debounce windows.

use std::time::Duration;

use crate::geometry::{CssRem, Size};

/// Quiet period after a layout-affecting action before dependent canvases
/// are told to recompute.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Trailing-edge debounce for container size readings.
pub const ELEMENT_SIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Default gap between grid cells (tailwind `gap-0.5`).
pub const GRID_GAP: CssRem = CssRem::new(0.125);

/// Base font size assumed when the embedder does not report one.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// Floor for computed canvas dimensions; anything smaller cannot render
/// legibly.
pub const MIN_CANVAS_SIZE: Size = Size::new(100.0, 100.0);

/// Viewport entry/exit animation duration.
pub const VIEWPORT_TRANSITION: Duration = Duration::from_millis(300);

/// Layout change animation duration.
pub const LAYOUT_CHANGE_TRANSITION: Duration = Duration::from_millis(200);

/// Delay before the attention blink starts on a freshly placed view.
pub const BLINK_DELAY: Duration = Duration::from_millis(100);
