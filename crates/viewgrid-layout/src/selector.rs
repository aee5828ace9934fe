#![forbid(unsafe_code)]

//! Active-layout selection: repair policy and count-driven auto-selection.
//!
//! The selector is a state machine over `{view_count, active}`. Both
//! operations are total: every request yields a usable layout, invalid
//! requests degrade to the nearest valid one, and over-provisioned
//! selections are honored with truncated placement rather than refused.
//!
//! # Usage
//!
//! ```ignore
//! use viewgrid_layout::selector::LayoutSelector;
//! use viewgrid_layout::catalog::LayoutKind;
//!
//! let mut sel = LayoutSelector::new();
//! sel.update_view_count(2);
//! assert_eq!(sel.active(), LayoutKind::DoubleHorizontal);
//! let s = sel.select(LayoutKind::DoubleVertical);
//! assert!(!s.degraded);
//! ```
//!
//! # Invariants
//!
//! 1. After any operation, either the active template's range contains the
//!    view count, or the selection is explicitly degraded (count exceeds
//!    the template's capacity); never silently invalid.
//! 2. `placed == min(view_count, capacity)` at all times.
//! 3. No operation panics for any count or kind.

use crate::catalog::{Family, LayoutKind, template};
use crate::suggest::suggest_layouts;

/// Outcome of a selection or count change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The layout now active.
    pub kind: LayoutKind,
    /// True when the view count exceeds the layout's capacity; the
    /// renderer places only the first `placed` views.
    pub degraded: bool,
    /// Number of views that receive a cell.
    pub placed: usize,
}

/// State machine holding the active layout for a view roster.
#[derive(Debug, Clone)]
pub struct LayoutSelector {
    view_count: usize,
    active: LayoutKind,
    /// View count at the moment `active` was adopted.
    selected_at: usize,
}

impl Default for LayoutSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutSelector {
    /// Selector for a single view with the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_view_count(1)
    }

    /// Selector starting at the given count, auto-selecting its layout.
    #[must_use]
    pub fn with_view_count(initial: usize) -> Self {
        let mut sel = Self {
            view_count: 1,
            active: LayoutKind::Single,
            selected_at: 1,
        };
        if initial != 1 {
            sel.update_view_count(initial);
        }
        sel
    }

    /// The active layout.
    #[inline]
    #[must_use]
    pub fn active(&self) -> LayoutKind {
        self.active
    }

    /// The current view count.
    #[inline]
    #[must_use]
    pub fn view_count(&self) -> usize {
        self.view_count
    }

    /// The view count at which the active layout was adopted.
    #[inline]
    #[must_use]
    pub fn selected_at(&self) -> usize {
        self.selected_at
    }

    /// Describe the current state as a [`Selection`].
    #[must_use]
    pub fn selection(&self) -> Selection {
        let capacity = template(self.active).capacity();
        Selection {
            kind: self.active,
            degraded: self.view_count > capacity,
            placed: self.view_count.min(capacity),
        }
    }

    /// Request a layout. Total; repairs rather than fails.
    ///
    /// Within range: adopted as-is. Too few views for it: the first
    /// suggestion fitting the current count is adopted instead, falling
    /// back to `Single`. Too many views: adopted anyway in the
    /// degraded-capacity state, extra views go unplaced.
    pub fn select(&mut self, requested: LayoutKind) -> Selection {
        let t = template(requested);
        let adopted = if t.accepts(self.view_count) {
            requested
        } else if self.view_count < t.min_views as usize {
            suggest_layouts(self.view_count)
                .iter()
                .copied()
                .find(|k| template(*k).accepts(self.view_count))
                .unwrap_or(LayoutKind::Single)
        } else {
            // view_count > max_views: over-provisioned on purpose, the
            // renderer truncates to the first max_views cells.
            requested
        };
        self.adopt(adopted)
    }

    /// Set the view count and auto-select a suitable layout.
    ///
    /// Keeps the active layout when it already belongs to the new count's
    /// natural family (so a hand-picked triple variant survives roster
    /// churn that lands back on three views); otherwise switches to the
    /// family default. If the candidate cannot host the count, falls back
    /// through the suggestion list, then to `Single`.
    pub fn update_view_count(&mut self, new_count: usize) -> Selection {
        self.view_count = new_count;

        let mut candidate = self.active;
        if let Some(family) = Family::of_count(new_count)
            && self.active.family() != family
        {
            candidate = family.default_kind();
        }

        if !template(candidate).accepts(new_count) {
            let suggestions = suggest_layouts(new_count);
            candidate = suggestions
                .iter()
                .copied()
                .find(|k| template(*k).accepts(new_count))
                .or_else(|| {
                    suggestions
                        .iter()
                        .copied()
                        .find(|k| new_count >= template(*k).min_views as usize)
                })
                .unwrap_or(LayoutKind::Single);
        }

        self.adopt(candidate)
    }

    fn adopt(&mut self, kind: LayoutKind) -> Selection {
        self.active = kind;
        self.selected_at = self.view_count;
        self.selection()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
