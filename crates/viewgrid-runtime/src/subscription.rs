#![forbid(unsafe_code)]

//! Host-pumped background event sources.
//!
//! The state machines in this crate never spawn threads on their own. An
//! embedder that would rather read a channel than hand-pump them declares
//! [`Subscription`]s and hands the set to a [`SubscriptionManager`]; each
//! source runs on its own thread and sends events until stopped.
//!
//! # How it works
//!
//! 1. The host builds event sources (a size poller, a resize pump) and
//!    passes the set it wants alive to [`SubscriptionManager::reconcile`]
//! 2. Sources with new ids are started, sources whose id vanished from the
//!    set are stopped, unchanged ids keep their thread
//! 3. [`SubscriptionManager::drain_events`] hands back everything delivered
//!    since the previous drain, typically once per host frame
//! 4. Dropping the manager stops every source
//!
//! # Invariants
//!
//! 1. One thread per distinct id; duplicate ids in a reconcile set start
//!    once.
//! 2. After `stop_all` (or drop) no new events are produced; events already
//!    queued remain drainable.

use std::collections::HashSet;
use std::sync::mpsc;
use std::thread;

use web_time::Duration;

/// A unique identifier for an event source.
///
/// Reconciliation is by id: sources carrying the same id are considered
/// the same source and are not restarted.
pub type SubId = u64;

/// A continuous event source running on a background thread.
pub trait Subscription<E: Send + 'static>: Send {
    /// Identifier used for reconciliation.
    fn id(&self) -> SubId;

    /// Run the source, sending events through the channel.
    ///
    /// Called on a dedicated thread. Implementations should block on
    /// [`StopSignal::wait_timeout`] between polls rather than sleeping so
    /// that shutdown is prompt, and exit when the signal fires or the
    /// receiver is dropped.
    fn run(&self, sender: mpsc::Sender<E>, stop: StopSignal);
}

/// Signal telling an event source to stop.
///
/// Sources check it between polls and exit their run loop once set.
#[derive(Clone)]
pub struct StopSignal {
    inner: std::sync::Arc<(std::sync::Mutex<bool>, std::sync::Condvar)>,
}

impl StopSignal {
    /// Create a new stop signal pair (signal, trigger).
    pub(crate) fn new() -> (Self, StopTrigger) {
        let inner = std::sync::Arc::new((std::sync::Mutex::new(false), std::sync::Condvar::new()));
        let signal = Self {
            inner: inner.clone(),
        };
        let trigger = StopTrigger { inner };
        (signal, trigger)
    }

    /// Check whether the stop signal has been triggered.
    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap()
    }

    /// Wait for either the stop signal or a timeout.
    ///
    /// Returns `true` if stopped, `false` if the timeout elapsed. Blocks
    /// on a condition variable, so a stop wakes the source immediately.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap();
        if *stopped {
            return true;
        }
        let result = cvar.wait_timeout(stopped, duration).unwrap();
        stopped = result.0;
        *stopped
    }
}

/// Trigger half of a stop signal, held by the manager.
pub(crate) struct StopTrigger {
    inner: std::sync::Arc<(std::sync::Mutex<bool>, std::sync::Condvar)>,
}

impl StopTrigger {
    /// Signal the source to stop.
    pub(crate) fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap();
        *stopped = true;
        cvar.notify_all();
    }
}

/// A started event source.
pub(crate) struct RunningSource {
    pub(crate) id: SubId,
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
}

impl RunningSource {
    /// Stop the source and join its thread.
    pub(crate) fn stop(mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RunningSource {
    fn drop(&mut self) {
        self.trigger.stop();
        // No join in drop; the thread exits on its own once signalled.
    }
}

/// Owns the lifecycle of a set of event sources.
///
/// All sources of one manager share an event type and a channel; drain
/// order is delivery order across sources.
pub struct SubscriptionManager<E: Send + 'static> {
    active: Vec<RunningSource>,
    sender: mpsc::Sender<E>,
    receiver: mpsc::Receiver<E>,
}

impl<E: Send + 'static> SubscriptionManager<E> {
    /// Create a manager with no running sources.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            active: Vec::new(),
            sender,
            receiver,
        }
    }

    /// Update the set of active sources.
    ///
    /// Compares the new set against currently running sources:
    /// - starts sources whose id is not yet running
    /// - stops running sources whose id is no longer declared
    /// - leaves unchanged ids alone
    pub fn reconcile(&mut self, subscriptions: Vec<Box<dyn Subscription<E>>>) {
        let new_ids: HashSet<SubId> = subscriptions.iter().map(|s| s.id()).collect();

        let mut remaining = Vec::new();
        for running in self.active.drain(..) {
            if new_ids.contains(&running.id) {
                remaining.push(running);
            } else {
                tracing::debug!(target: "viewgrid.subscription", sub_id = running.id, "stopping event source");
                running.stop();
            }
        }
        self.active = remaining;

        let mut active_ids: HashSet<SubId> = self.active.iter().map(|r| r.id).collect();
        for sub in subscriptions {
            let id = sub.id();
            if !active_ids.insert(id) {
                continue;
            }

            tracing::debug!(target: "viewgrid.subscription", sub_id = id, "starting event source");
            let (signal, trigger) = StopSignal::new();
            let sender = self.sender.clone();

            let thread = thread::spawn(move || {
                sub.run(sender, signal);
            });

            self.active.push(RunningSource {
                id,
                trigger,
                thread: Some(thread),
            });
        }
    }

    /// Drain events delivered since the previous drain.
    pub fn drain_events(&self) -> Vec<E> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Stop every running source.
    pub fn stop_all(&mut self) {
        for running in self.active.drain(..) {
            running.stop();
        }
    }
}

impl<E: Send + 'static> Default for SubscriptionManager<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Send + 'static> Drop for SubscriptionManager<E> {
    fn drop(&mut self) {
        self.stop_all();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
