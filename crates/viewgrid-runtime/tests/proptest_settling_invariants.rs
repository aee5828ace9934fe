#![forbid(unsafe_code)]

//! Property-based invariant tests for the settling state machines.
//!
//! Drives [`ResizeCoordinator`] and [`SizeObserver`] with randomized
//! action schedules on an explicit clock.
//!
//! ## Invariants
//!
//! 1. A burst of notifies fires exactly once, at the last notify plus the
//!    quiet period
//! 2. Each settled burst advances the trigger count by exactly one
//! 3. Cancel suppresses the pending fire without touching the count
//! 4. No two consecutive observer deliveries carry equal sizes, and only
//!    non-empty sizes are marked triggering
//! 5. A steady probe never produces anything beyond the initial reading
//! 6. A stopped observer stays silent under any schedule

use proptest::prelude::*;
use viewgrid_core::Size;
use viewgrid_core::constants::ELEMENT_SIZE_DEBOUNCE;
use viewgrid_runtime::{Reading, ResizeCoordinator, ResizeFire, SizeObserver, SizeProbe};
use web_time::{Duration, Instant};

// ── Strategies ────────────────────────────────────────────────────────────

/// Container sizes drawn from a small palette so consecutive duplicates
/// are common enough to exercise deduplication.
fn arb_size() -> impl Strategy<Value = Size> {
    prop_oneof![
        Just(Size::ZERO),
        Just(Size::new(640.0, 480.0)),
        Just(Size::new(800.0, 600.0)),
        Just(Size::new(1024.0, 768.0)),
        Just(Size::new(1920.0, 1080.0)),
    ]
}

fn arb_gaps(max_n: usize) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..900, 1..max_n)
}

/// Probe that walks a script and then holds the last frame.
struct Script {
    frames: Vec<Size>,
    cursor: usize,
}

impl Script {
    fn new(frames: &[Size]) -> Self {
        Self {
            frames: frames.to_vec(),
            cursor: 0,
        }
    }
}

impl SizeProbe for Script {
    fn measure(&mut self) -> Size {
        let frame = self.frames[self.cursor.min(self.frames.len() - 1)];
        if self.cursor < self.frames.len() {
            self.cursor += 1;
        }
        frame
    }
}

fn at(t0: Instant, ms: u64) -> Instant {
    t0 + Duration::from_millis(ms)
}

// ── 1. One fire per settled burst ─────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn burst_settles_exactly_once_at_the_quiet_edge(
        gaps in arb_gaps(20),
        quiet_ms in 10u64..2000,
    ) {
        let quiet = Duration::from_millis(quiet_ms);
        let mut resize = ResizeCoordinator::new().with_quiet(quiet);
        let t0 = Instant::now();

        let mut now = t0;
        for gap in &gaps {
            now += Duration::from_millis(*gap);
            resize.notify_at(now);
            // A poll at the notify instant is always inside the window.
            prop_assert_eq!(resize.poll_at(now), None);
        }
        let last = now;

        prop_assert_eq!(resize.poll_at(last + quiet - Duration::from_millis(1)), None);
        let fire = resize.poll_at(last + quiet);
        prop_assert_eq!(
            fire,
            Some(ResizeFire {
                settled_at: last + quiet,
                trigger_count: 1
            })
        );

        // Dense polling afterwards stays silent.
        for extra in [0u64, 1, 7, 100, 10_000] {
            prop_assert_eq!(resize.poll_at(last + quiet + Duration::from_millis(extra)), None);
        }
        prop_assert_eq!(resize.trigger_count(), 1);
    }
}

// ── 2. Trigger count advances once per settled burst ──────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn every_settled_burst_advances_the_count_by_one(
        bursts in prop::collection::vec(prop::collection::vec(0u64..400, 1..6), 1..8),
        quiet_ms in 50u64..500,
    ) {
        let quiet = Duration::from_millis(quiet_ms);
        let mut resize = ResizeCoordinator::new().with_quiet(quiet);
        let mut now = Instant::now();

        for (settled, burst) in bursts.iter().enumerate() {
            for gap in burst {
                now += Duration::from_millis(*gap);
                resize.notify_at(now);
            }
            prop_assert_eq!(resize.poll_at(now + quiet - Duration::from_millis(1)), None);
            let fire = resize.poll_at(now + quiet);
            prop_assert_eq!(fire.map(|f| f.trigger_count), Some(settled as u64 + 1));
            now += quiet;
        }
        prop_assert_eq!(resize.trigger_count(), bursts.len() as u64);
    }
}

// ── 3. Cancel suppresses the pending fire ─────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn cancel_suppresses_the_pending_fire(
        gaps in arb_gaps(10),
        probe_ms in 0u64..5000,
    ) {
        let mut resize = ResizeCoordinator::new();
        let mut now = Instant::now();
        for gap in &gaps {
            now += Duration::from_millis(*gap);
            resize.notify_at(now);
        }
        resize.cancel();

        prop_assert!(!resize.is_pending());
        prop_assert_eq!(resize.poll_at(now + Duration::from_millis(probe_ms)), None);
        prop_assert_eq!(resize.trigger_count(), 0);
        prop_assert_eq!(resize.last_action(), Some(now));
    }
}

// ── 4. Deliveries deduplicate and mark empty sizes ────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn deliveries_never_repeat_and_flag_empty_sizes(
        frames in prop::collection::vec(arb_size(), 1..40),
        steps in prop::collection::vec(1u64..300, 1..40),
    ) {
        let mut observer = SizeObserver::new(Script::new(&frames));
        let t0 = Instant::now();
        let mut deliveries = vec![observer.start_at(t0)];

        let mut now = t0;
        for step in steps {
            now += Duration::from_millis(step);
            if let Some(reading) = observer.sample_at(now) {
                deliveries.push(reading);
            }
        }
        // Flush whatever is still pending.
        if let Some(reading) = observer.tick_at(now + ELEMENT_SIZE_DEBOUNCE) {
            deliveries.push(reading);
        }

        for pair in deliveries.windows(2) {
            prop_assert_ne!(pair[0].size, pair[1].size, "consecutive duplicate delivery");
        }
        for reading in &deliveries {
            prop_assert_eq!(reading.triggering, !reading.size.is_empty());
            prop_assert!(
                frames.contains(&reading.size),
                "delivered a size the probe never produced: {:?}",
                reading
            );
        }
    }
}

// ── 5. Steady probe only delivers the initial reading ─────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn steady_probe_delivers_only_the_initial_reading(
        size in arb_size(),
        steps in prop::collection::vec(1u64..400, 0..30),
    ) {
        let mut observer = SizeObserver::new(move || size);
        let t0 = Instant::now();
        let initial = observer.start_at(t0);
        prop_assert_eq!(initial, Reading { size, triggering: !size.is_empty() });

        let mut now = t0;
        for step in steps {
            now += Duration::from_millis(step);
            prop_assert_eq!(observer.sample_at(now), None);
            prop_assert_eq!(observer.tick_at(now), None);
        }
        prop_assert_eq!(observer.delivered(), Some(size));
    }
}

// ── 6. Stopped observer stays silent ──────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn stopped_observer_stays_silent_for_any_schedule(
        frames in prop::collection::vec(arb_size(), 1..20),
        steps in prop::collection::vec(1u64..300, 1..20),
    ) {
        let mut observer = SizeObserver::new(Script::new(&frames));
        let t0 = Instant::now();
        observer.start_at(t0);
        observer.sample_at(at(t0, 1));
        observer.stop();

        let mut now = at(t0, 1);
        for step in &steps {
            now += Duration::from_millis(*step);
            prop_assert_eq!(observer.sample_at(now), None);
            prop_assert_eq!(observer.tick_at(now), None);
            prop_assert_eq!(observer.trigger_now(), None);
        }
        prop_assert!(!observer.is_running());
    }
}
