use super::{hover_listeners, FixedPositionSink, MountContext};
use crate::constants::{
    ATTR_FOLLOW, CURSOR_DOT_ID, CURSOR_HIDDEN_CLASS, CURSOR_HOVER_CLASS, CURSOR_HOVER_SELECTOR,
    CURSOR_RING_ID,
};
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use folio_core::{CursorConfig, CursorFollower, PositionSink};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const DOT: usize = 0;
const RING: usize = 1;

/// Dot-and-ring custom cursor.
pub struct CustomCursor {
    _frame: Rc<FrameLoop>,
    _hover: Vec<Listener>,
}

pub fn mount(ctx: &MountContext) -> anyhow::Result<Option<CustomCursor>> {
    let lookup = |id: &str| {
        ctx.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    };
    let (Some(dot), Some(ring)) = (lookup(CURSOR_DOT_ID), lookup(CURSOR_RING_ID)) else {
        return Ok(None);
    };

    let defaults = CursorConfig::default();
    let cfg = CursorConfig {
        follow: dom::attr_or(&ring, ATTR_FOLLOW, defaults.follow),
        ..defaults
    };
    let follower = CursorFollower::try_new(cfg)?;
    let (viewport_width, _) = dom::viewport_size();
    if !follower.enabled_for(viewport_width) {
        log::info!("[cursor] viewport {}px too narrow, native cursor kept", viewport_width);
        return Ok(None);
    }
    let follower = Rc::new(RefCell::new(follower));

    let hover_targets = dom::query_all(&ctx.document, CURSOR_HOVER_SELECTOR);
    let hover_follower = follower.clone();
    let hover = hover_listeners(&hover_targets, move |on| {
        hover_follower.borrow_mut().set_hovering(on);
    });

    let mut sink = FixedPositionSink::new(vec![dot, ring]);
    let bus = ctx.bus.clone();
    let mut last_hovering = None;
    let mut last_visible = None;
    let frame = Rc::new(FrameLoop::new("cursor", move |_tick| {
        let pointer = bus.borrow().pointer();
        let frame = follower.borrow_mut().tick(pointer);
        sink.apply_position(DOT, frame.dot);
        sink.apply_position(RING, frame.ring);
        // size and fill changes are CSS transitions keyed off these classes
        if last_hovering != Some(frame.hovering) {
            last_hovering = Some(frame.hovering);
            for el in sink.elements() {
                dom::toggle_class(el, CURSOR_HOVER_CLASS, frame.hovering);
            }
        }
        if last_visible != Some(frame.visible) {
            last_visible = Some(frame.visible);
            for el in sink.elements() {
                dom::toggle_class(el, CURSOR_HIDDEN_CLASS, !frame.visible);
            }
        }
    }));
    frame.start();
    log::info!("[cursor] custom cursor on, {} hover targets", hover_targets.len());

    Ok(Some(CustomCursor {
        _frame: frame,
        _hover: hover,
    }))
}
