#![forbid(unsafe_code)]

//! Layout solving: template catalog, suggestion, selection, and canvas sizing.
//!
//! # Role in viewgrid
//! `viewgrid-layout` is the decision layer. Given a view count it proposes
//! grid templates, repairs invalid template requests, and turns an observed
//! container size into per-view canvas dimensions. Everything here is a pure
//! function of its arguments plus the static catalog; observation and timing
//! live in `viewgrid-runtime`.
//!
//! # Primary responsibilities
//! - **Catalog**: the ten grid templates and their validity rules.
//! - **Suggestion**: `suggest_layouts`, view count to ordered candidates.
//! - **Selection**: [`LayoutSelector`], the active-layout state machine with
//!   its repair and auto-selection policies.
//! - **Canvas sizing**: [`canvas_size`], grid template + container size to
//!   clamped per-view pixel dimensions.
//! - **Class strings**: rendering and parsing of the CSS utility-class form
//!   of templates and spans for embedders that style with them.

pub mod canvas;
pub mod catalog;
pub mod classes;
pub mod selector;
pub mod suggest;

pub use canvas::{CanvasConfig, canvas_size, fallback_size};
pub use catalog::{
    CatalogError, CellSpan, Family, GridTemplate, LayoutKind, LayoutTemplate, UnknownLayout,
    template, validate_catalog,
};
pub use classes::ClassParseError;
pub use selector::{LayoutSelector, Selection};
pub use suggest::suggest_layouts;
