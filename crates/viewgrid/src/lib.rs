#![forbid(unsafe_code)]

//! viewgrid public facade crate.
//!
//! This crate provides the stable surface area for embedders. It re-exports
//! common types from the workspace crates and offers a lightweight prelude
//! for day-to-day usage.
//!
//! # Quick Start
//!
//! ```ignore
//! use viewgrid::prelude::*;
//!
//! let mut session = LayoutSession::new();
//! let left = session.add_view();
//! let right = session.add_view();
//! session.observe(Size::new(800.0, 600.0));
//! assert_eq!(session.active(), LayoutKind::DoubleHorizontal);
//! assert_eq!(session.canvas_size(left), Size::new(399.0, 600.0));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use viewgrid_core::constants;
pub use viewgrid_core::{Breakpoint, CssRem, Size, ViewId, ViewIdGen};

// --- Layout re-exports -----------------------------------------------------

pub use viewgrid_layout::canvas::{CanvasConfig, canvas_size, fallback_size};
pub use viewgrid_layout::catalog::{
    CatalogError, CellSpan, Family, GridTemplate, LayoutKind, LayoutTemplate, UnknownLayout,
    template, validate_catalog,
};
pub use viewgrid_layout::classes::ClassParseError;
pub use viewgrid_layout::selector::{LayoutSelector, Selection};
pub use viewgrid_layout::suggest::suggest_layouts;

// --- Runtime re-exports ----------------------------------------------------

pub use viewgrid_runtime::observer::{Reading, SizeObserver, SizeProbe, SizeSubscription};
pub use viewgrid_runtime::resize::{ResizeCoordinator, ResizeFire, ResizeSubscription};
pub use viewgrid_runtime::session::{LayoutSession, SessionConfig, SessionError};
pub use viewgrid_runtime::subscription::{StopSignal, SubId, Subscription, SubscriptionManager};

// --- Errors ----------------------------------------------------------------

pub mod error;

pub use error::{Error, Result};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Breakpoint, CanvasConfig, Error, LayoutKind, LayoutSession, Reading, ResizeCoordinator,
        ResizeFire, Result, Selection, SessionConfig, Size, SizeObserver, SizeProbe, ViewId,
        canvas_size, suggest_layouts,
    };

    pub use crate::{core, layout, runtime};
}

pub use viewgrid_core as core;
pub use viewgrid_layout as layout;
pub use viewgrid_runtime as runtime;
