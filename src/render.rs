//! DOM render sinks and the animated page components that feed them.
//!
//! Components read the shared signals, run the numeric core and push the
//! result through one of the sinks below. Sinks are the only place that
//! touches element styles.

use crate::constants::{LETTER_LIVE_TRANSITION, LETTER_RELEASE_TRANSITION};
use crate::css;
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use crate::visibility::VisibilityWatch;
use folio_core::render::ElementHandle;
use folio_core::{PathSink, PositionSink, SignalBus, Transform, TransformSink, VisibilityGate};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub mod chrome;
pub mod cursor;
pub mod letters;
pub mod marquee;
pub mod pointer_parallax;
pub mod waves;

/// Everything a component needs to mount.
#[derive(Clone)]
pub struct MountContext {
    pub document: web::Document,
    pub bus: Rc<RefCell<SignalBus>>,
}

/// Writes `transform` (and the ease transition on release frames) to
/// inline styles.
pub struct StyleTransformSink {
    elements: Vec<web::HtmlElement>,
    eased: Vec<bool>,
}

impl StyleTransformSink {
    pub fn new(elements: Vec<web::HtmlElement>) -> Self {
        let eased = vec![false; elements.len()];
        for el in &elements {
            dom::set_style(el, "will-change", "transform");
            dom::set_style(el, "display", "inline-block");
        }
        Self { elements, eased }
    }

    pub fn elements(&self) -> &[web::HtmlElement] {
        &self.elements
    }
}

impl TransformSink for StyleTransformSink {
    fn apply_transform(&mut self, handle: ElementHandle, t: Transform) {
        let Some(el) = self.elements.get(handle) else {
            return;
        };
        if self.eased[handle] != t.eased {
            self.eased[handle] = t.eased;
            let transition = if t.eased {
                LETTER_RELEASE_TRANSITION
            } else {
                LETTER_LIVE_TRANSITION
            };
            dom::set_style(el, "transition", transition);
        }
        dom::set_style(el, "transform", &css::translate_rotate(t.x, t.y, t.rotation));
    }
}

/// Sets the `d` attribute of SVG path elements.
pub struct SvgPathSink {
    paths: Vec<web::Element>,
}

impl SvgPathSink {
    pub fn new(paths: Vec<web::Element>) -> Self {
        Self { paths }
    }
}

impl PathSink for SvgPathSink {
    fn apply_path(&mut self, index: usize, d: &str) {
        if let Some(path) = self.paths.get(index) {
            _ = path.set_attribute("d", d);
        }
    }
}

/// Positions fixed elements by `left`/`top`.
pub struct FixedPositionSink {
    elements: Vec<web::HtmlElement>,
}

impl FixedPositionSink {
    pub fn new(elements: Vec<web::HtmlElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[web::HtmlElement] {
        &self.elements
    }
}

impl PositionSink for FixedPositionSink {
    fn apply_position(&mut self, handle: ElementHandle, position: Vec2) {
        if let Some(el) = self.elements.get(handle) {
            dom::set_style(el, "left", &css::px(position.x));
            dom::set_style(el, "top", &css::px(position.y));
        }
    }
}

/// Starts `frame` while `target` is on screen and stops it otherwise.
pub fn run_while_visible(
    target: &web::Element,
    threshold: f64,
    gate: Rc<Cell<VisibilityGate>>,
    frame: Rc<FrameLoop>,
    mut on_change: impl FnMut(bool) + 'static,
) -> anyhow::Result<VisibilityWatch> {
    VisibilityWatch::observe(target, threshold, move |visible| {
        let mut g = gate.get();
        let changed = g.is_visible() != visible;
        g.set_visible(visible);
        gate.set(g);
        if !changed {
            return;
        }
        if visible {
            frame.start();
        } else {
            frame.stop();
        }
        on_change(visible);
    })
}

/// Listeners toggling a shared hover flag on a set of elements.
pub fn hover_listeners(
    elements: &[web::Element],
    hovering: impl Fn(bool) + Clone + 'static,
) -> Vec<Listener> {
    let mut out = Vec::with_capacity(elements.len() * 2);
    for el in elements {
        let enter = hovering.clone();
        let leave = hovering.clone();
        match (
            Listener::new(el, "pointerenter", move |_ev: web::Event| enter(true)),
            Listener::new(el, "pointerleave", move |_ev: web::Event| leave(false)),
        ) {
            (Ok(a), Ok(b)) => {
                out.push(a);
                out.push(b);
            }
            (a, b) => {
                for e in [a.err(), b.err()].into_iter().flatten() {
                    log::warn!("[cursor] hover listener: {:?}", e);
                }
            }
        }
    }
    out
}
