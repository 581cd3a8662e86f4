// Host-side tests for the custom cursor follower and page chrome.

use folio_core::chrome::{parse_depth, section_progress, NavChrome, ParallaxLayer, PointerParallax};
use folio_core::constants::{CURSOR_OFFSCREEN, POINTER_DOT_COUNT};
use folio_core::signals::PointerSignal;
use folio_core::{CursorConfig, CursorFollower};
use glam::Vec2;

fn at(x: f32, y: f32) -> PointerSignal {
    PointerSignal { x, y, active: true }
}

#[test]
fn starts_parked_offscreen() {
    let mut c = CursorFollower::try_new(CursorConfig::default()).unwrap();
    assert_eq!(c.ring(), Vec2::splat(CURSOR_OFFSCREEN));
    let frame = c.tick(PointerSignal::INACTIVE);
    assert!(!frame.visible);
    assert_eq!(frame.dot, Vec2::splat(CURSOR_OFFSCREEN));
}

#[test]
fn dot_snaps_ring_decays_geometrically() {
    let cfg = CursorConfig::default();
    let mut c = CursorFollower::try_new(cfg).unwrap();
    let target = Vec2::new(400.0, 300.0);
    let initial = (target - c.ring()).length();
    let mut prev = initial;
    for n in 1..=20 {
        let frame = c.tick(at(target.x, target.y));
        assert_eq!(frame.dot, target);
        assert!(frame.visible);
        let gap = (target - frame.ring).length();
        assert!((gap - prev * (1.0 - cfg.follow)).abs() < 1e-3, "tick {}", n);
        prev = gap;
    }
    assert!(prev < initial * 0.05);
}

#[test]
fn inactive_pointer_keeps_last_dot() {
    let mut c = CursorFollower::try_new(CursorConfig::default()).unwrap();
    c.tick(at(10.0, 20.0));
    let frame = c.tick(PointerSignal::INACTIVE);
    assert_eq!(frame.dot, Vec2::new(10.0, 20.0));
    assert!(!frame.visible);
}

#[test]
fn enabled_only_on_wide_viewports() {
    let c = CursorFollower::try_new(CursorConfig::default()).unwrap();
    assert!(!c.enabled_for(767.0));
    assert!(c.enabled_for(768.0));
    assert!(c.enabled_for(1920.0));
}

#[test]
fn hover_state_is_reported() {
    let mut c = CursorFollower::try_new(CursorConfig::default()).unwrap();
    c.set_hovering(true);
    assert!(c.tick(at(0.0, 0.0)).hovering);
    c.set_hovering(false);
    assert!(!c.tick(at(0.0, 0.0)).hovering);
}

#[test]
fn nav_pill_toggles_once_per_crossing() {
    let mut nav = NavChrome::new();
    assert_eq!(nav.update(80.0), None);
    assert_eq!(nav.update(-1.0), Some(true));
    assert_eq!(nav.update(-200.0), None);
    assert!(nav.pill_visible());
    assert_eq!(nav.update(10.0), Some(false));
}

#[test]
fn section_progress_is_clamped() {
    assert_eq!(section_progress(1000.0, 500.0, 800.0), 0.0);
    assert_eq!(section_progress(800.0, 500.0, 800.0), 0.0);
    assert_eq!(section_progress(-500.0, 500.0, 800.0), 1.0);
    assert_eq!(section_progress(-2000.0, 500.0, 800.0), 1.0);
    assert!((section_progress(150.0, 500.0, 800.0) - 0.5).abs() < 1e-6);
    assert_eq!(section_progress(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn parallax_layers_interpolate() {
    assert_eq!(ParallaxLayer::BACKGROUND.offset_percent(0.0), 0.0);
    assert_eq!(ParallaxLayer::BACKGROUND.offset_percent(1.0), -30.0);
    assert_eq!(ParallaxLayer::FOREGROUND.offset_percent(0.5), 0.0);
    assert_eq!(ParallaxLayer::FOREGROUND.offset_percent(2.0), -10.0);
}

fn backdrop() -> PointerParallax {
    PointerParallax::new(PointerParallax::stock_depths(POINTER_DOT_COUNT))
}

const ORIGIN: Vec2 = Vec2::new(100.0, 50.0);
const SIZE: Vec2 = Vec2::new(800.0, 600.0);

#[test]
fn backdrop_layers_drift_by_depth() {
    let mut bg = backdrop();
    assert_eq!(bg.len(), 2 + POINTER_DOT_COUNT + 1);
    assert!(bg.update(at(300.0, 250.0), ORIGIN, SIZE));
    assert!(bg.hovering());

    // container-local pointer is (200, 200)
    let close = |a: Vec2, b: Vec2| (a - b).length() < 1e-4;
    assert!(close(bg.offset(0), Vec2::new(4.0, 4.0)));
    assert!(close(bg.offset(1), Vec2::new(-4.0, -4.0)));
    assert!(close(bg.offset(2), Vec2::new(6.0, 4.0)));
    assert!(close(bg.offset(5), Vec2::new(12.0, 10.0)));
    assert!(close(bg.offset(6), Vec2::new(2.0, 2.0)));
    assert_eq!(bg.offset(99), Vec2::ZERO);
    assert!(close(bg.ripple_origin().unwrap(), Vec2::new(140.0, 140.0)));
}

#[test]
fn backdrop_rests_without_pointer() {
    let mut bg = backdrop();
    assert!(!bg.update(PointerSignal::INACTIVE, ORIGIN, SIZE));
    assert_eq!(bg.offset(0), Vec2::ZERO);

    bg.update(at(300.0, 250.0), ORIGIN, SIZE);
    assert!(bg.update(PointerSignal::INACTIVE, ORIGIN, SIZE));
    assert!(!bg.hovering());
    assert_eq!(bg.ripple_origin(), None);
    for layer in 0..bg.len() {
        assert_eq!(bg.offset(layer), Vec2::ZERO);
    }
}

#[test]
fn backdrop_ignores_pointer_outside_container() {
    let mut bg = backdrop();
    bg.update(at(300.0, 250.0), ORIGIN, SIZE);
    assert!(bg.update(at(950.0, 250.0), ORIGIN, SIZE));
    assert!(!bg.hovering());
    assert_eq!(bg.offset(2), Vec2::ZERO);
    // same snapshot twice reports no change
    assert!(!bg.update(at(20.0, 20.0), ORIGIN, SIZE));
}

#[test]
fn depth_attribute_parsing() {
    assert_eq!(parse_depth("0.02"), Some(Vec2::splat(0.02)));
    assert_eq!(parse_depth(" 0.03, 0.02 "), Some(Vec2::new(0.03, 0.02)));
    assert_eq!(parse_depth("-0.02,-0.02"), Some(Vec2::splat(-0.02)));
    assert_eq!(parse_depth(""), None);
    assert_eq!(parse_depth("deep"), None);
    assert_eq!(parse_depth("1,2,3"), None);
    assert_eq!(parse_depth("NaN"), None);
}
