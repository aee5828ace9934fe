#![forbid(unsafe_code)]

//! Resize settling: one trigger per quiet period.
//!
//! Canvas surfaces are expensive to rebuild, so nothing downstream reacts
//! to every layout-affecting action. Instead each action notifies a
//! [`ResizeCoordinator`], which re-arms a deadline one quiet period ahead;
//! when a deadline finally passes untouched, exactly one [`ResizeFire`]
//! is produced and the trigger count advances. Consumers key their
//! recompute work off the count, not off individual actions.
//!
//! # Usage
//!
//! ```ignore
//! let mut resize = ResizeCoordinator::new();
//! resize.notify();                    // container moved, layout switched...
//! resize.notify();                    // ...bursts collapse
//! if let Some(fire) = resize.poll() {
//!     rebuild_canvases(fire.trigger_count);
//! }
//! ```
//!
//! # Invariants
//!
//! 1. Exactly one fire per settled quiet period, however many notifies
//!    preceded it.
//! 2. The fire's settle time is the last notify plus the quiet period,
//!    independent of when `poll` happens to run.
//! 3. `cancel` and drop never fire.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use viewgrid_core::constants::RESIZE_DEBOUNCE;
use web_time::{Duration, Instant};

use crate::subscription::{StopSignal, SubId, Subscription};

/// How often [`ResizeSubscription`] wakes to poll its coordinator.
const DEFAULT_PUMP_INTERVAL: Duration = Duration::from_millis(50);

/// A settled resize: the quiet period elapsed with no further action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeFire {
    /// When the quiet period ended (last action + quiet period).
    pub settled_at: Instant,
    /// Monotonic count of settled resizes, starting at 1.
    pub trigger_count: u64,
}

/// Trailing-edge timer coalescing bursts of layout-affecting actions.
///
/// Purely poll-driven: the owner calls [`poll_at`] (or lets a
/// [`ResizeSubscription`] pump it) and no background timer exists.
///
/// [`poll_at`]: Self::poll_at
#[derive(Debug)]
pub struct ResizeCoordinator {
    quiet: Duration,
    last_action: Option<Instant>,
    deadline: Option<Instant>,
    trigger_count: u64,
}

impl ResizeCoordinator {
    /// Create a coordinator with the default quiet period (1000 ms).
    #[must_use]
    pub fn new() -> Self {
        Self {
            quiet: RESIZE_DEBOUNCE,
            last_action: None,
            deadline: None,
            trigger_count: 0,
        }
    }

    /// Set the quiet period.
    #[must_use]
    pub fn with_quiet(mut self, quiet: Duration) -> Self {
        self.quiet = quiet;
        self
    }

    /// The quiet period.
    #[must_use]
    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Record a layout-affecting action at `now`.
    ///
    /// Cancels any pending fire and re-arms the deadline at `now + quiet`,
    /// so the fire always trails the last action of a burst.
    pub fn notify_at(&mut self, now: Instant) {
        self.last_action = Some(now);
        self.deadline = Some(now + self.quiet);
        tracing::debug!(
            target: "viewgrid.resize",
            quiet_ms = self.quiet.as_millis() as u64,
            "resize action recorded"
        );
    }

    /// Wall-clock [`notify_at`](Self::notify_at).
    pub fn notify(&mut self) {
        self.notify_at(Instant::now());
    }

    /// Fire if the armed deadline has passed.
    ///
    /// Polling late does not distort the result: the fire carries the
    /// logical settle time, and a second poll returns `None` until the
    /// next notify.
    pub fn poll_at(&mut self, now: Instant) -> Option<ResizeFire> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        self.trigger_count += 1;
        tracing::debug!(
            target: "viewgrid.resize",
            trigger_count = self.trigger_count,
            "resize settled"
        );
        Some(ResizeFire {
            settled_at: deadline,
            trigger_count: self.trigger_count,
        })
    }

    /// Wall-clock [`poll_at`](Self::poll_at).
    pub fn poll(&mut self) -> Option<ResizeFire> {
        self.poll_at(Instant::now())
    }

    /// When the most recent action was recorded.
    #[must_use]
    pub fn last_action(&self) -> Option<Instant> {
        self.last_action
    }

    /// Number of settled resizes so far.
    #[must_use]
    pub fn trigger_count(&self) -> u64 {
        self.trigger_count
    }

    /// Whether a fire is armed and waiting for its quiet period.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarm without firing. The trigger count is untouched.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for ResizeCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-backed pump for a shared coordinator.
///
/// The embedder notifies the coordinator through the shared handle from
/// its own threads; the subscription polls it and emits each
/// [`ResizeFire`] over the channel.
pub struct ResizeSubscription {
    id: SubId,
    pump_interval: Duration,
    coordinator: Arc<Mutex<ResizeCoordinator>>,
}

impl ResizeSubscription {
    /// Create a pump around a shared coordinator.
    #[must_use]
    pub fn new(id: SubId, coordinator: Arc<Mutex<ResizeCoordinator>>) -> Self {
        Self {
            id,
            pump_interval: DEFAULT_PUMP_INTERVAL,
            coordinator,
        }
    }

    /// Set how often the coordinator is polled.
    #[must_use]
    pub fn with_pump_interval(mut self, interval: Duration) -> Self {
        self.pump_interval = interval;
        self
    }
}

impl Subscription<ResizeFire> for ResizeSubscription {
    fn id(&self) -> SubId {
        self.id
    }

    fn run(&self, sender: mpsc::Sender<ResizeFire>, stop: StopSignal) {
        loop {
            if stop.wait_timeout(self.pump_interval) {
                break;
            }
            let fire = self.coordinator.lock().unwrap().poll();
            if let Some(fire) = fire
                && sender.send(fire).is_err()
            {
                break;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
