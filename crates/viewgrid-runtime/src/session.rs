#![forbid(unsafe_code)]

//! The layout session: roster, selector, observation, and settling in one
//! place.
//!
//! [`LayoutSession`] is the embedder-facing composition root. It owns the
//! ordered view roster, keeps the active layout valid through the
//! selector, folds container readings into its state, and runs the resize
//! coordinator so canvas rebuilds happen once per quiet period instead of
//! once per action.
//!
//! # Usage
//!
//! ```ignore
//! let mut session = LayoutSession::new();
//! let left = session.add_view();
//! let right = session.add_view();          // auto-selects DoubleHorizontal
//! session.observe(Size::new(800.0, 600.0));
//! let canvas = session.canvas_size(left);  // 399x600 at the default gap
//! if let Some(fire) = session.poll() {
//!     rebuild(fire.trigger_count);
//! }
//! ```
//!
//! # Invariants
//!
//! 1. Roster order is insertion order; removal shifts later views left.
//!    A view's cell is its roster position.
//! 2. `view_count()` always equals `views().len()`, and the active layout
//!    is valid for it or explicitly degraded.
//! 3. No operation panics for any id, count, or size input.

use viewgrid_core::constants::RESIZE_DEBOUNCE;
use viewgrid_core::{Breakpoint, Size, ViewId, ViewIdGen};
use viewgrid_layout::{
    CanvasConfig, LayoutKind, LayoutSelector, Selection, canvas_size, fallback_size,
    suggest_layouts,
};
use web_time::{Duration, Instant};

use crate::resize::{ResizeCoordinator, ResizeFire};

/// Session construction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Canvas calculator inputs (gap, base font, floor).
    pub canvas: CanvasConfig,
    /// Quiet period for the resize coordinator.
    pub quiet: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            quiet: RESIZE_DEBOUNCE,
        }
    }
}

impl SessionConfig {
    /// Set the canvas calculator inputs.
    #[must_use]
    pub fn with_canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }

    /// Set the resize quiet period.
    #[must_use]
    pub fn with_quiet(mut self, quiet: Duration) -> Self {
        self.quiet = quiet;
        self
    }
}

/// Errors from session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The given id is not in the roster.
    UnknownView(ViewId),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::UnknownView(id) => write!(f, "unknown view id: {id}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Composition root over a view roster.
///
/// All mutating entry points have deterministic `_at` forms taking an
/// explicit [`Instant`]; the bare forms delegate with `Instant::now()`.
#[derive(Debug)]
pub struct LayoutSession {
    roster: Vec<ViewId>,
    ids: ViewIdGen,
    selector: LayoutSelector,
    resize: ResizeCoordinator,
    container: Size,
    canvas: CanvasConfig,
}

impl LayoutSession {
    /// Create a session with default configuration.
    ///
    /// The roster starts empty with `Single` active, so the first
    /// `add_view` leaves the layout unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session with explicit configuration.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            roster: Vec::new(),
            ids: ViewIdGen::new(),
            selector: LayoutSelector::with_view_count(0),
            resize: ResizeCoordinator::new().with_quiet(config.quiet),
            container: Size::ZERO,
            canvas: config.canvas,
        }
    }

    // --- roster -----------------------------------------------------------

    /// Add a view to the end of the roster and auto-select a layout.
    pub fn add_view_at(&mut self, now: Instant) -> ViewId {
        let id = self.ids.next_id();
        self.roster.push(id);
        tracing::debug!(
            target: "viewgrid.session",
            view = %id,
            count = self.roster.len(),
            "view added"
        );
        self.apply_count_at(now);
        id
    }

    /// Wall-clock [`add_view_at`](Self::add_view_at).
    pub fn add_view(&mut self) -> ViewId {
        self.add_view_at(Instant::now())
    }

    /// Remove a view; later views shift into its cells.
    pub fn remove_view_at(&mut self, id: ViewId, now: Instant) -> Result<(), SessionError> {
        let position = self
            .roster
            .iter()
            .position(|v| *v == id)
            .ok_or(SessionError::UnknownView(id))?;
        self.roster.remove(position);
        tracing::debug!(
            target: "viewgrid.session",
            view = %id,
            count = self.roster.len(),
            "view removed"
        );
        self.apply_count_at(now);
        Ok(())
    }

    /// Wall-clock [`remove_view_at`](Self::remove_view_at).
    pub fn remove_view(&mut self, id: ViewId) -> Result<(), SessionError> {
        self.remove_view_at(id, Instant::now())
    }

    /// Number of views in the roster.
    #[must_use]
    pub fn view_count(&self) -> usize {
        self.roster.len()
    }

    /// The roster in cell order.
    #[must_use]
    pub fn views(&self) -> &[ViewId] {
        &self.roster
    }

    // --- layout -----------------------------------------------------------

    /// Request a layout; the selector repairs requests the roster cannot
    /// honor. Every select is a layout-affecting action and re-arms the
    /// coordinator, including a re-select of the current kind: the settled
    /// fire is what forces a re-measure, so a redundant selection still
    /// buys the consumer a fresh recompute.
    pub fn select_layout_at(&mut self, kind: LayoutKind, now: Instant) -> Selection {
        let before = self.selector.active();
        let selection = self.selector.select(kind);
        if selection.kind != before {
            tracing::info!(
                target: "viewgrid.session",
                from = %before,
                to = %selection.kind,
                requested = %kind,
                "layout changed"
            );
        }
        self.resize.notify_at(now);
        selection
    }

    /// Wall-clock [`select_layout_at`](Self::select_layout_at).
    pub fn select_layout(&mut self, kind: LayoutKind) -> Selection {
        self.select_layout_at(kind, Instant::now())
    }

    /// The active layout.
    #[must_use]
    pub fn active(&self) -> LayoutKind {
        self.selector.active()
    }

    /// The current selection state (kind, degradation, placed count).
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selector.selection()
    }

    /// Candidate layouts for the current roster size, in preference order.
    #[must_use]
    pub fn suggestions(&self) -> &'static [LayoutKind] {
        suggest_layouts(self.roster.len())
    }

    // --- observation ------------------------------------------------------

    /// Fold a container reading into the session.
    ///
    /// Equal readings are dropped. Non-empty changes count as
    /// layout-affecting actions and re-arm the resize coordinator; empty
    /// readings update the container silently (the container collapsed or
    /// is not laid out yet). Returns whether the container changed.
    pub fn observe_at(&mut self, size: Size, now: Instant) -> bool {
        if self.container == size {
            return false;
        }
        self.container = size;
        let triggering = !size.is_empty();
        tracing::debug!(
            target: "viewgrid.session",
            width = size.width,
            height = size.height,
            triggering,
            "container reading"
        );
        if triggering {
            self.resize.notify_at(now);
        }
        true
    }

    /// Wall-clock [`observe_at`](Self::observe_at).
    pub fn observe(&mut self, size: Size) -> bool {
        self.observe_at(size, Instant::now())
    }

    /// The last observed container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Width class of the current container.
    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.container.width)
    }

    // --- canvas -----------------------------------------------------------

    /// Canvas dimensions for one view.
    ///
    /// The view's cell is its roster position. Ids not in the roster get
    /// the fallback dimensions, as does everything while the container is
    /// unmeasured.
    #[must_use]
    pub fn canvas_size(&self, id: ViewId) -> Size {
        match self.roster.iter().position(|v| *v == id) {
            Some(index) => canvas_size(self.container, self.selector.active(), index, &self.canvas),
            None => fallback_size(self.container, &self.canvas),
        }
    }

    /// Canvas dimensions for every view, in roster order.
    #[must_use]
    pub fn canvas_sizes(&self) -> Vec<(ViewId, Size)> {
        self.roster
            .iter()
            .map(|id| (*id, self.canvas_size(*id)))
            .collect()
    }

    /// The canvas calculator inputs in use.
    #[must_use]
    pub fn canvas_config(&self) -> &CanvasConfig {
        &self.canvas
    }

    // --- settling ---------------------------------------------------------

    /// Pump the resize coordinator.
    pub fn poll_at(&mut self, now: Instant) -> Option<ResizeFire> {
        self.resize.poll_at(now)
    }

    /// Wall-clock [`poll_at`](Self::poll_at).
    pub fn poll(&mut self) -> Option<ResizeFire> {
        self.resize.poll()
    }

    /// Number of settled resizes so far.
    #[must_use]
    pub fn resize_trigger_count(&self) -> u64 {
        self.resize.trigger_count()
    }

    /// When the last layout-affecting action happened.
    #[must_use]
    pub fn last_action(&self) -> Option<Instant> {
        self.resize.last_action()
    }

    /// Whether a resize fire is armed.
    #[must_use]
    pub fn is_resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Discard pending settling work.
    pub fn shutdown(&mut self) {
        self.resize.cancel();
        tracing::info!(target: "viewgrid.session", "session shut down");
    }

    fn apply_count_at(&mut self, now: Instant) -> Selection {
        let before = self.selector.active();
        let selection = self.selector.update_view_count(self.roster.len());
        if selection.kind != before {
            tracing::info!(
                target: "viewgrid.session",
                from = %before,
                to = %selection.kind,
                count = self.roster.len(),
                "layout changed"
            );
        }
        self.resize.notify_at(now);
        selection
    }
}

impl Default for LayoutSession {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
