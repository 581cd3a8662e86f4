// Host-side tests for front-end constants and CSS builders.
#![allow(dead_code)]

include!("../src/constants.rs");
include!("../src/css.rs");

#[test]
fn selectors_are_well_formed() {
    for sel in [
        LETTER_SELECTOR,
        CURSOR_HOVER_SELECTOR,
        PARALLAX_SELECTOR,
        PARALLAX_BG_SELECTOR,
        PARALLAX_FG_SELECTOR,
        POINTER_PARALLAX_SELECTOR,
        POINTER_LAYER_SELECTOR,
        POINTER_RIPPLE_SELECTOR,
    ] {
        assert!(sel.starts_with('[') && sel.ends_with(']'), "{}", sel);
    }
    assert!(MARQUEE_CONTAINER_SELECTOR.starts_with('.'));
    assert!(MARQUEE_CONTENT_SELECTOR.starts_with('.'));
    for id in [MARQUEE_ROOT_ID, FIELD_SECTION_ID, CURSOR_DOT_ID, CURSOR_RING_ID, VIEW_COUNT_ID] {
        assert!(!id.is_empty() && !id.contains(' ') && !id.starts_with('#'));
    }
    for attr in [ATTR_LINES, ATTR_RADIUS, ATTR_SPEED, ATTR_FOLLOW, ATTR_DEPTH] {
        assert!(attr.starts_with("data-"));
    }
}

#[test]
fn marquee_layout_and_threshold() {
    assert_eq!(MARQUEE_COPIES, 2.0);
    assert!(MARQUEE_VISIBILITY_THRESHOLD > 0.0 && MARQUEE_VISIBILITY_THRESHOLD < 1.0);
    assert!(VIEWS_ENDPOINT.starts_with('/'));
}

#[test]
fn css_builders_format() {
    assert_eq!(
        translate_rotate(1.0, -2.5, 3.0),
        "translate3d(1.000px, -2.500px, 0) rotate(3.000deg)"
    );
    assert_eq!(translate_x(-40.0), "translateX(-40.000px)");
    assert_eq!(translate(4.0, -4.0), "translate(4.000px, -4.000px)");
    assert_eq!(translate_y_percent(-30.0), "translateY(-30.000%)");
    assert_eq!(px(12.5), "12.50px");
}
