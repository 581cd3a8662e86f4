// Host-side tests for the scroll-reactive marquee.

use folio_core::signals::ScrollDirection;
use folio_core::{MarqueeConfig, MarqueeDriver, MarqueeState};

fn ready_driver(period: f64) -> MarqueeDriver {
    let mut m = MarqueeDriver::try_new(MarqueeConfig::default()).unwrap();
    assert!(m.measure(period));
    m
}

#[test]
fn waits_for_measurement() {
    let mut m = MarqueeDriver::try_new(MarqueeConfig::default()).unwrap();
    assert_eq!(m.tick(), None);
    assert!(!m.measure(0.0));
    assert!(!m.measure(f64::NAN));
    assert_eq!(m.tick(), None);
    assert_eq!(m.state().offset, 0.0);
}

#[test]
fn measures_only_once() {
    let mut m = ready_driver(1000.0);
    assert!(!m.measure(500.0));
    assert_eq!(m.state().content_period, 1000.0);
}

#[test]
fn scrolls_left_by_default_and_wraps() {
    let mut m = ready_driver(1000.0);
    let mut offset = 0.0;
    for _ in 0..1300 {
        offset = m.tick().unwrap();
        assert!(offset <= 0.0 && offset > -1000.0, "offset {}", offset);
    }
    assert!((offset - -40.0).abs() < 1e-6, "offset {}", offset);
}

#[test]
fn offset_matches_travel_modulo_period() {
    let mut m = ready_driver(373.0);
    let mut travelled = 0.0;
    for _ in 0..5000 {
        m.tick().unwrap();
        travelled += m.state().current_speed;
    }
    let expected = -(-travelled).rem_euclid(373.0);
    let got = m.state().offset;
    let diff = (got - expected).abs();
    assert!(diff < 1e-6 || (diff - 373.0).abs() < 1e-6, "{} vs {}", got, expected);
}

#[test]
fn small_scrolls_do_not_flip() {
    let mut m = ready_driver(1000.0);
    m.observe_scroll(100.0);
    m.observe_scroll(99.0);
    m.observe_scroll(98.0);
    assert_eq!(m.direction(), ScrollDirection::Down);
    assert!(m.state().target_speed < 0.0);
}

#[test]
fn scrolling_up_flips_smoothly() {
    let cfg = MarqueeConfig::default();
    let mut m = ready_driver(1000.0);
    m.observe_scroll(500.0);
    m.observe_scroll(400.0);
    assert_eq!(m.direction(), ScrollDirection::Up);
    assert_eq!(m.state().target_speed, cfg.speed);

    let mut prev = m.state().current_speed;
    let mut crossed = false;
    for _ in 0..200 {
        m.tick().unwrap();
        let speed = m.state().current_speed;
        assert!(speed > prev, "speed must rise monotonically");
        // lerp never jumps straight to the target
        assert!(speed < cfg.speed);
        crossed |= prev < 0.0 && speed >= 0.0;
        prev = speed;
    }
    assert!(crossed);
    assert!((prev - cfg.speed).abs() < 1e-3);
}

#[test]
fn rightward_motion_wraps_at_zero() {
    let cfg = MarqueeConfig::default();
    let state = MarqueeState {
        offset: -0.5,
        current_speed: cfg.speed,
        target_speed: cfg.speed,
        content_period: 1000.0,
    };
    let mut m = MarqueeDriver::with_state(cfg, state).unwrap();
    assert_eq!(m.direction(), ScrollDirection::Up);
    let offset = m.tick().unwrap();
    assert!((offset - (-1000.0 + 0.3)).abs() < 1e-9, "offset {}", offset);
}

#[test]
fn out_of_range_offset_is_renormalised() {
    let cfg = MarqueeConfig::default();
    let state = MarqueeState {
        offset: -2500.0,
        current_speed: -cfg.speed,
        target_speed: -cfg.speed,
        content_period: 1000.0,
    };
    let mut m = MarqueeDriver::with_state(cfg, state).unwrap();
    let offset = m.tick().unwrap();
    assert!(offset <= 0.0 && offset > -1000.0, "offset {}", offset);
}

#[test]
fn zero_lerp_is_rejected() {
    let cfg = MarqueeConfig {
        lerp: 0.0,
        ..MarqueeConfig::default()
    };
    assert!(MarqueeDriver::try_new(cfg).is_err());
}
