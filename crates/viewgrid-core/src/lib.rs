#![forbid(unsafe_code)]

//! Core: geometry primitives, view identity, and responsive breakpoints.
//!
//! # Role in viewgrid
//! `viewgrid-core` is the vocabulary layer. It owns the size and unit types
//! that the layout solver consumes and the opaque identifiers that name views
//! across the rest of the system.
//!
//! # Primary responsibilities
//! - **Size**: container and canvas dimensions in CSS pixels.
//! - **CssRem**: font-relative length with explicit pixel conversion.
//! - **ViewId / ViewIdGen**: stable identity for views in a roster.
//! - **Breakpoint**: width-class classification (mobile/tablet/desktop).
//!
//! # How it fits in the system
//! The layout crate (`viewgrid-layout`) computes canvas sizes in terms of
//! these types; the runtime (`viewgrid-runtime`) feeds observed `Size`
//! readings through them. Nothing here touches a clock or an observer, so
//! every type is plain data.

pub mod breakpoint;
pub mod constants;
pub mod geometry;
pub mod view;

pub use breakpoint::Breakpoint;
pub use geometry::{CssRem, Size};
pub use view::{ViewId, ViewIdGen};
