#![forbid(unsafe_code)]

//! Viewgrid Runtime
//!
//! This crate provides the stateful components that tie the pure layout
//! crates into a running system: container observation, resize settling,
//! background event sources, and the [`LayoutSession`] composition root.
//!
//! # Key Components
//!
//! - [`SizeObserver`] - Deduplicated, debounced container size readings
//! - [`SizeProbe`] - Pluggable measurement source for the observer
//! - [`ResizeCoordinator`] - Quiet-period timer that settles resize bursts
//! - [`Subscription`] - Trait for continuous background event sources
//! - [`LayoutSession`] - Composition root over a view roster
//!
//! # Role in viewgrid
//! `viewgrid-runtime` is the orchestrator. It consumes size readings from a
//! probe, drives the selector in `viewgrid-layout`, and answers per-view
//! canvas size queries for the embedder.
//!
//! # How it fits in the system
//! The pure crates (`viewgrid-core`, `viewgrid-layout`) never touch clocks
//! or threads. Everything time- or thread-shaped lives here, behind
//! deterministic `_at` entry points so hosts and tests can drive the state
//! machines with an explicit clock. The thread-backed subscriptions are an
//! optional layer on top for embedders that prefer a channel to a pump
//! loop.

pub mod observer;
pub mod resize;
pub mod session;
pub mod subscription;

pub use observer::{Reading, SizeObserver, SizeProbe, SizeSubscription};
pub use resize::{ResizeCoordinator, ResizeFire, ResizeSubscription};
pub use session::{LayoutSession, SessionConfig, SessionError};
pub use subscription::{StopSignal, SubId, Subscription, SubscriptionManager};
