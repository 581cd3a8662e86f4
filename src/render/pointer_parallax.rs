use super::{run_while_visible, MountContext};
use crate::constants::{
    ATTR_DEPTH, POINTER_LAYER_SELECTOR, POINTER_LAYER_TRANSITION, POINTER_PARALLAX_SELECTOR,
    POINTER_RIPPLE_SELECTOR, RIPPLE_VISIBLE_CLASS,
};
use crate::css;
use crate::dom;
use crate::frame::FrameLoop;
use crate::visibility::VisibilityWatch;
use folio_core::constants::POINTER_DOT_COUNT;
use folio_core::{parse_depth, PointerParallax, VisibilityGate};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hero backdrop (words, dots, grid) drifting with the pointer.
pub struct PointerBackdrop {
    _frame: Rc<FrameLoop>,
    _watch: VisibilityWatch,
}

/// Layer depth from `data-depth`, else the stock depth for its position.
fn layer_depth(el: &web::Element, index: usize, stock: &[Vec2]) -> Vec2 {
    let fallback = stock.get(index).or(stock.last()).copied().unwrap_or(Vec2::ZERO);
    match el.get_attribute(ATTR_DEPTH) {
        Some(raw) => parse_depth(&raw).unwrap_or_else(|| {
            log::warn!("[backdrop] ignoring unparsable {}=\"{}\"", ATTR_DEPTH, raw);
            fallback
        }),
        None => fallback,
    }
}

pub fn mount(ctx: &MountContext) -> anyhow::Result<Option<PointerBackdrop>> {
    let Some(container) = ctx
        .document
        .query_selector(POINTER_PARALLAX_SELECTOR)
        .ok()
        .flatten()
    else {
        return Ok(None);
    };
    let layers = dom::html_elements(dom::query_all_in(&container, POINTER_LAYER_SELECTOR));
    let ripple = container
        .query_selector(POINTER_RIPPLE_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if layers.is_empty() && ripple.is_none() {
        log::debug!("[backdrop] container has no layers");
        return Ok(None);
    }

    let stock = PointerParallax::stock_depths(POINTER_DOT_COUNT);
    let mut model = PointerParallax::new(
        layers
            .iter()
            .enumerate()
            .map(|(i, el)| layer_depth(el, i, &stock)),
    );
    for el in &layers {
        dom::set_style(el, "transition", POINTER_LAYER_TRANSITION);
    }
    log::info!("[backdrop] {} layers", model.len());

    let bus = ctx.bus.clone();
    let tick_container = container.clone();
    // one pointer snapshot per frame, however many moves arrived
    let frame = Rc::new(FrameLoop::new("backdrop", move |_tick| {
        if !tick_container.is_connected() {
            return;
        }
        let rect = tick_container.get_bounding_client_rect();
        let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
        let size = Vec2::new(rect.width() as f32, rect.height() as f32);
        let pointer = bus.borrow().pointer();
        if !model.update(pointer, origin, size) {
            return;
        }
        for (i, el) in layers.iter().enumerate() {
            let offset = model.offset(i);
            dom::set_style(el, "transform", &css::translate(offset.x, offset.y));
        }
        if let Some(ripple) = &ripple {
            dom::toggle_class(ripple, RIPPLE_VISIBLE_CLASS, model.hovering());
            if let Some(at) = model.ripple_origin() {
                dom::set_style(ripple, "left", &css::px(at.x));
                dom::set_style(ripple, "top", &css::px(at.y));
            }
        }
    }));

    let gate = Rc::new(Cell::new(VisibilityGate::new(false)));
    let watch = run_while_visible(&container, 0.0, gate, frame.clone(), |visible| {
        log::debug!("[backdrop] visible={}", visible);
    })?;
    Ok(Some(PointerBackdrop {
        _frame: frame,
        _watch: watch,
    }))
}
