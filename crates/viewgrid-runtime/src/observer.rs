#![forbid(unsafe_code)]

//! Container size observation: measure, deduplicate, debounce, deliver.
//!
//! A [`SizeProbe`] is the seam to the platform: anything that can report
//! the container's current content size. [`SizeObserver`] wraps a probe in
//! a deterministic filter so consumers see a calm stream of readings
//! instead of raw layout noise: an immediate reading on (re)start, a
//! trailing-edge debounce while the size is moving, and strict
//! deduplication between deliveries. [`SizeSubscription`] runs the same
//! filter on a background thread for embedders that prefer a channel.
//!
//! # Usage
//!
//! ```ignore
//! let mut observer = SizeObserver::new(|| platform.content_size());
//! let first = observer.start();          // always delivered, even 0x0
//! loop {
//!     if let Some(reading) = observer.sample() {
//!         session.observe(reading.size);
//!     }
//! }
//! ```
//!
//! # Invariants
//!
//! 1. The first reading after `start` is always delivered.
//! 2. No two consecutive deliveries carry equal sizes.
//! 3. Empty sizes are delivered (consumers must know the container
//!    collapsed) but never marked `triggering`.
//! 4. After `stop`, nothing is delivered until the next `start`.
//!
//! Every time-dependent entry point has an `_at` form taking an explicit
//! [`Instant`]; the bare forms delegate with `Instant::now()`.

use std::sync::Mutex;
use std::sync::mpsc;

use viewgrid_core::Size;
use viewgrid_core::constants::ELEMENT_SIZE_DEBOUNCE;
use web_time::{Duration, Instant};

use crate::subscription::{StopSignal, SubId, Subscription};

/// How often [`SizeSubscription`] wakes to sample its probe.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A source of container size measurements.
///
/// The production implementation wraps whatever the platform offers
/// (a resize-observed element, a window handle). A probe that currently
/// has nothing to measure reports [`Size::ZERO`].
pub trait SizeProbe: Send {
    /// Measure the container right now.
    fn measure(&mut self) -> Size;
}

impl<F> SizeProbe for F
where
    F: FnMut() -> Size + Send,
{
    fn measure(&mut self) -> Size {
        self()
    }
}

/// One delivered size reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// The measured container size.
    pub size: Size,
    /// False for empty sizes: the reading is informational and must not
    /// start resize work downstream.
    pub triggering: bool,
}

impl Reading {
    fn of(size: Size) -> Self {
        Self {
            size,
            triggering: !size.is_empty(),
        }
    }
}

/// Deterministic filter between a [`SizeProbe`] and a consumer.
///
/// Holds the last delivered size, the last sampled size, and at most one
/// pending debounce deadline. A change in the sampled value arms the
/// deadline; once the deadline passes with no further change, the probe is
/// measured fresh and the result delivered unless it equals the last
/// delivery.
#[derive(Debug)]
pub struct SizeObserver<P: SizeProbe> {
    probe: P,
    debounce: Duration,
    running: bool,
    delivered: Option<Size>,
    last_sampled: Option<Size>,
    deadline: Option<Instant>,
}

impl<P: SizeProbe> SizeObserver<P> {
    /// Create an observer around a probe. It is idle until [`start`].
    ///
    /// [`start`]: Self::start
    #[must_use]
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            debounce: ELEMENT_SIZE_DEBOUNCE,
            running: false,
            delivered: None,
            last_sampled: None,
            deadline: None,
        }
    }

    /// Set the debounce window for subsequent readings.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// The debounce window.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Whether the observer is started.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a debounced delivery is owed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The last delivered size, if any.
    #[must_use]
    pub fn delivered(&self) -> Option<Size> {
        self.delivered
    }

    /// Replace the probe, keeping filter state.
    ///
    /// Call [`start_at`] afterwards to re-emit an initial reading from the
    /// new probe.
    ///
    /// [`start_at`]: Self::start_at
    pub fn set_probe(&mut self, probe: P) {
        self.probe = probe;
    }

    /// (Re)start observation and deliver an initial reading immediately.
    ///
    /// The initial reading bypasses deduplication so a restart always
    /// tells the consumer where the container stands, even at the same
    /// size as before the stop.
    pub fn start_at(&mut self, _now: Instant) -> Reading {
        let size = self.probe.measure();
        self.running = true;
        self.delivered = Some(size);
        self.last_sampled = Some(size);
        self.deadline = None;
        tracing::info!(
            target: "viewgrid.observer",
            width = size.width,
            height = size.height,
            "observer started"
        );
        Reading::of(size)
    }

    /// Wall-clock [`start_at`](Self::start_at).
    pub fn start(&mut self) -> Reading {
        self.start_at(Instant::now())
    }

    /// Sample the probe and advance the filter.
    ///
    /// A due deadline is flushed first, so a settled value is not held up
    /// by the new sample; then a change in the sampled value (re)arms the
    /// deadline. Returns the delivery produced by the flush, if any.
    pub fn sample_at(&mut self, now: Instant) -> Option<Reading> {
        if !self.running {
            return None;
        }
        let measured = self.probe.measure();
        let fired = self.flush_with(measured, now);
        if self.last_sampled != Some(measured) {
            self.last_sampled = Some(measured);
            self.deadline = Some(now + self.debounce);
        }
        fired
    }

    /// Wall-clock [`sample_at`](Self::sample_at).
    pub fn sample(&mut self) -> Option<Reading> {
        self.sample_at(Instant::now())
    }

    /// Advance time without taking a new sample.
    ///
    /// Flushes a due deadline by measuring the probe fresh, so the value
    /// delivered is the one current at flush time.
    pub fn tick_at(&mut self, now: Instant) -> Option<Reading> {
        if !self.running || !self.deadline.is_some_and(|deadline| now >= deadline) {
            return None;
        }
        let measured = self.probe.measure();
        self.last_sampled = Some(measured);
        self.flush_with(measured, now)
    }

    /// Wall-clock [`tick_at`](Self::tick_at).
    pub fn tick(&mut self) -> Option<Reading> {
        self.tick_at(Instant::now())
    }

    /// Measure immediately, skipping any pending debounce.
    ///
    /// Cancels the armed deadline and delivers the fresh measurement
    /// unless it equals the last delivery.
    pub fn trigger_now(&mut self) -> Option<Reading> {
        if !self.running {
            return None;
        }
        self.deadline = None;
        let measured = self.probe.measure();
        self.last_sampled = Some(measured);
        self.deliver_if_changed(measured)
    }

    /// Stop observation. Pending debounced work is discarded.
    pub fn stop(&mut self) {
        if self.running {
            tracing::info!(target: "viewgrid.observer", "observer stopped");
        }
        self.running = false;
        self.deadline = None;
    }

    /// Deliver the due pending value, measured as `measured`, if the
    /// deadline has passed.
    fn flush_with(&mut self, measured: Size, now: Instant) -> Option<Reading> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        self.deliver_if_changed(measured)
    }

    fn deliver_if_changed(&mut self, measured: Size) -> Option<Reading> {
        if self.delivered == Some(measured) {
            return None;
        }
        self.delivered = Some(measured);
        let reading = Reading::of(measured);
        tracing::debug!(
            target: "viewgrid.observer",
            width = measured.width,
            height = measured.height,
            triggering = reading.triggering,
            "size reading"
        );
        Some(reading)
    }
}

/// Thread-backed observer: polls a probe through the filter and sends
/// deliveries over a channel.
///
/// The debounce deadline is only checked at poll instants, so deliveries
/// can land up to one poll interval after the window closes.
pub struct SizeSubscription<P: SizeProbe> {
    id: SubId,
    poll_interval: Duration,
    state: Mutex<SizeObserver<P>>,
}

impl<P: SizeProbe> SizeSubscription<P> {
    /// Create a subscription around a probe.
    #[must_use]
    pub fn new(id: SubId, probe: P) -> Self {
        Self {
            id,
            poll_interval: DEFAULT_POLL_INTERVAL,
            state: Mutex::new(SizeObserver::new(probe)),
        }
    }

    /// Set how often the probe is sampled.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the debounce window of the underlying observer.
    #[must_use]
    pub fn with_debounce(self, debounce: Duration) -> Self {
        {
            let mut observer = self.state.lock().unwrap();
            observer.debounce = debounce;
        }
        self
    }
}

impl<P: SizeProbe> Subscription<Reading> for SizeSubscription<P> {
    fn id(&self) -> SubId {
        self.id
    }

    fn run(&self, sender: mpsc::Sender<Reading>, stop: StopSignal) {
        let mut observer = self.state.lock().unwrap();
        let initial = observer.start();
        if sender.send(initial).is_err() {
            return;
        }
        loop {
            if stop.wait_timeout(self.poll_interval) {
                break;
            }
            if let Some(reading) = observer.sample()
                && sender.send(reading).is_err()
            {
                break;
            }
        }
        observer.stop();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
