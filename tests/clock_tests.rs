// Host-side tests for frame timing and visibility gating.

use folio_core::clock::{FrameClock, Throttle};
use folio_core::gate::{pointer_below, should_run, VisibilityGate};

#[test]
fn stopped_clock_yields_nothing() {
    let mut clock = FrameClock::new(30.0);
    assert!(!clock.is_running());
    assert_eq!(clock.advance(16.0), None);
}

#[test]
fn first_tick_has_zero_delta() {
    let mut clock = FrameClock::new(30.0);
    clock.start();
    let t = clock.advance(1000.0).unwrap();
    assert_eq!(t.delta_ms, 0.0);
    assert_eq!(t.elapsed_ms, 0.0);

    let t = clock.advance(1016.0).unwrap();
    assert_eq!(t.delta_ms, 16.0);
    assert_eq!(t.elapsed_ms, 16.0);
    assert!((t.delta_sec() - 0.016).abs() < 1e-6);
}

#[test]
fn delta_is_clamped() {
    let mut clock = FrameClock::new(30.0);
    clock.start();
    clock.advance(0.0);
    assert_eq!(clock.advance(500.0).unwrap().delta_ms, 30.0);
    // backwards step
    assert_eq!(clock.advance(400.0).unwrap().delta_ms, 0.0);
}

#[test]
fn stop_is_idempotent_and_restart_resets_delta() {
    let mut clock = FrameClock::new(30.0);
    clock.start();
    clock.advance(0.0);
    clock.advance(16.0);
    clock.stop();
    clock.stop();
    assert!(!clock.is_running());
    assert_eq!(clock.advance(32.0), None);

    clock.start();
    let t = clock.advance(5000.0).unwrap();
    assert_eq!(t.delta_ms, 0.0);
    // wall-clock phase keeps counting from the first start
    assert_eq!(t.elapsed_ms, 5000.0);
}

#[test]
fn non_finite_timestamp_is_skipped() {
    let mut clock = FrameClock::default();
    clock.start();
    assert_eq!(clock.advance(f64::NAN), None);
    assert_eq!(clock.advance(0.0).unwrap().delta_ms, 0.0);
}

#[test]
fn throttle_limits_rate() {
    let mut th = Throttle::new(33.0);
    assert!(th.ready(0.0));
    assert!(!th.ready(16.0));
    assert!(!th.ready(33.0));
    assert!(th.ready(34.0));
    // clock went backwards
    assert!(th.ready(10.0));
    th.reset();
    assert!(th.ready(11.0));
}

#[test]
fn gate_requires_visible_and_unsuppressed() {
    assert!(should_run(true, false));
    assert!(!should_run(false, false));
    assert!(!should_run(true, true));

    let mut gate = VisibilityGate::default();
    assert!(!gate.is_open());
    assert!(gate.set_visible(true));
    assert!(!gate.set_visible(true));
    assert!(gate.set_suppressed(true));
    assert!(!gate.is_open());
    assert!(!gate.set_visible(false));
    assert!(!gate.is_visible());
    assert!(!gate.set_suppressed(false));
    assert!(gate.set_visible(true));
    assert!(gate.is_open());
}

#[test]
fn pointer_below_edge() {
    assert!(pointer_below(500.0, Some(400.0)));
    assert!(!pointer_below(400.0, Some(400.0)));
    assert!(!pointer_below(100.0, Some(400.0)));
    assert!(!pointer_below(900.0, None));
}
