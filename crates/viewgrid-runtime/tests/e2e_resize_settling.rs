#![forbid(unsafe_code)]

//! Settling behavior under bursts, deterministic and thread-backed.

use std::sync::{Arc, Mutex};
use std::thread;

use viewgrid_core::Size;
use viewgrid_runtime::{
    LayoutSession, Reading, ResizeCoordinator, ResizeFire, ResizeSubscription, SizeSubscription,
    SubscriptionManager,
};
use web_time::{Duration, Instant};

fn at(t0: Instant, ms: u64) -> Instant {
    t0 + Duration::from_millis(ms)
}

#[test]
fn two_rapid_actions_settle_exactly_once_at_the_quiet_edge() {
    let mut resize = ResizeCoordinator::new();
    let t0 = Instant::now();

    resize.notify_at(t0);
    resize.notify_at(at(t0, 500));

    for ms in [600, 1000, 1400, 1499] {
        assert_eq!(resize.poll_at(at(t0, ms)), None, "must stay quiet at +{ms}ms");
    }

    let fire = resize.poll_at(at(t0, 1500)).unwrap();
    assert_eq!(fire.trigger_count, 1);
    assert_eq!(fire.settled_at, at(t0, 1500));

    assert_eq!(resize.poll_at(at(t0, 10_000)), None);
    assert_eq!(resize.trigger_count(), 1);
}

#[test]
fn session_bursts_follow_the_same_settling_rule() {
    let mut session = LayoutSession::new();
    let t0 = Instant::now();

    session.add_view_at(t0);
    session.observe_at(Size::new(800.0, 600.0), at(t0, 500));

    assert_eq!(session.poll_at(at(t0, 1499)), None);
    let fire = session.poll_at(at(t0, 1500)).unwrap();
    assert_eq!(fire.trigger_count, 1);
    assert_eq!(session.resize_trigger_count(), 1);
}

#[test]
fn size_subscription_feeds_a_session_over_a_channel() {
    let small = Size::new(800.0, 600.0);
    let grown = Size::new(1024.0, 768.0);

    let mut polls = 0u32;
    let probe = move || {
        polls += 1;
        if polls > 5 { grown } else { small }
    };

    let mut manager = SubscriptionManager::<Reading>::new();
    manager.reconcile(vec![Box::new(
        SizeSubscription::new(1, probe)
            .with_poll_interval(Duration::from_millis(5))
            .with_debounce(Duration::from_millis(10)),
    )]);

    let mut session = LayoutSession::new();
    session.add_view();

    let mut seen = Vec::new();
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        for reading in manager.drain_events() {
            seen.push(reading);
            session.observe(reading.size);
        }
        if session.container() == grown {
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }

    assert_eq!(
        seen.first(),
        Some(&Reading {
            size: small,
            triggering: true
        }),
        "initial reading must arrive first"
    );
    assert_eq!(session.container(), grown);
    assert_eq!(seen.len(), 2, "dedup and debounce must collapse the rest: {seen:?}");
}

#[test]
fn resize_subscription_pumps_a_shared_coordinator() {
    let coordinator = Arc::new(Mutex::new(
        ResizeCoordinator::new().with_quiet(Duration::from_millis(30)),
    ));

    let mut manager = SubscriptionManager::<ResizeFire>::new();
    manager.reconcile(vec![Box::new(
        ResizeSubscription::new(1, coordinator.clone())
            .with_pump_interval(Duration::from_millis(5)),
    )]);

    coordinator.lock().unwrap().notify();
    thread::sleep(Duration::from_millis(10));
    coordinator.lock().unwrap().notify();

    thread::sleep(Duration::from_millis(120));
    let fires = manager.drain_events();
    assert_eq!(fires.len(), 1, "one fire per settled burst: {fires:?}");
    assert_eq!(fires[0].trigger_count, 1);

    coordinator.lock().unwrap().notify();
    thread::sleep(Duration::from_millis(120));
    let fires = manager.drain_events();
    assert_eq!(fires.len(), 1);
    assert_eq!(fires[0].trigger_count, 2);
}

#[test]
fn dropping_the_manager_stops_the_pump() {
    let coordinator = Arc::new(Mutex::new(
        ResizeCoordinator::new().with_quiet(Duration::from_millis(10)),
    ));

    {
        let mut manager = SubscriptionManager::<ResizeFire>::new();
        manager.reconcile(vec![Box::new(ResizeSubscription::new(
            7,
            coordinator.clone(),
        ))]);
        thread::sleep(Duration::from_millis(20));
    }

    // The pump thread is gone; a notify now is only observable by hand.
    coordinator.lock().unwrap().notify();
    thread::sleep(Duration::from_millis(60));
    assert!(coordinator.lock().unwrap().poll().is_some());
}
