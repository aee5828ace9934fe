//! Unified error handling for viewgrid.
//!
//! Each sub-crate reports failures with a small error type defined next to
//! the code that produces it. This module folds those into a single
//! [`Error`] so embedders can hold one error type and use `?` across crate
//! boundaries.
//!
//! # Usage
//!
//! ```ignore
//! use viewgrid::{LayoutKind, Result};
//!
//! fn restore_layout(saved: &str) -> Result<LayoutKind> {
//!     Ok(saved.parse()?)
//! }
//! ```

use std::fmt;

use viewgrid_layout::{CatalogError, ClassParseError, UnknownLayout};
use viewgrid_runtime::SessionError;

// ── Unified Error ───────────────────────────────────────────────────────

/// Top-level error type for viewgrid embedders.
///
/// Each variant wraps one sub-crate's error; [`source`](std::error::Error::source)
/// returns the wrapped value.
#[derive(Debug)]
pub enum Error {
    /// A catalog invariant does not hold.
    Catalog(CatalogError),
    /// A layout id string names no known layout.
    UnknownLayout(UnknownLayout),
    /// A grid utility class string could not be parsed.
    ClassParse(ClassParseError),
    /// A session operation referenced a view that is not in the roster.
    Session(SessionError),
}

/// Standard result type for viewgrid APIs.
pub type Result<T> = std::result::Result<T, Error>;

// ── Display ─────────────────────────────────────────────────────────────

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "{err}"),
            Self::UnknownLayout(err) => write!(f, "{err}"),
            Self::ClassParse(err) => write!(f, "{err}"),
            Self::Session(err) => write!(f, "{err}"),
        }
    }
}

// ── std::error::Error ───────────────────────────────────────────────────

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            Self::UnknownLayout(err) => Some(err),
            Self::ClassParse(err) => Some(err),
            Self::Session(err) => Some(err),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<UnknownLayout> for Error {
    fn from(err: UnknownLayout) -> Self {
        Self::UnknownLayout(err)
    }
}

impl From<ClassParseError> for Error {
    fn from(err: ClassParseError) -> Self {
        Self::ClassParse(err)
    }
}

impl From<SessionError> for Error {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────
