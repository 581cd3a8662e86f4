use super::{run_while_visible, MountContext, StyleTransformSink};
use crate::constants::{ATTR_RADIUS, LETTER_SELECTOR, MARQUEE_CONTAINER_SELECTOR};
use crate::dom;
use crate::frame::FrameLoop;
use crate::visibility::VisibilityWatch;
use folio_core::gate::pointer_below;
use folio_core::{LetterConfig, LetterGroup, VisibilityGate};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Hero heading letters pushed around by the pointer.
pub struct HeroLetters {
    _frame: Rc<FrameLoop>,
    _watch: VisibilityWatch,
}

pub fn mount(ctx: &MountContext) -> anyhow::Result<Option<HeroLetters>> {
    let elements = dom::html_elements(dom::query_all(&ctx.document, LETTER_SELECTOR));
    let Some(first) = elements.first() else {
        log::debug!("[letters] no letters on page");
        return Ok(None);
    };
    let host = first.parent_element().unwrap_or_else(|| first.clone().into());

    let defaults = LetterConfig::default();
    let cfg = LetterConfig {
        radius: dom::attr_or(&host, ATTR_RADIUS, defaults.radius),
        ..defaults
    };
    let mut group = LetterGroup::try_new(elements.len(), cfg, &mut rand::thread_rng())?;
    log::info!("[letters] animating {} letters", group.len());

    let marquee = ctx.document.query_selector(MARQUEE_CONTAINER_SELECTOR).ok().flatten();
    let gate = Rc::new(Cell::new(VisibilityGate::new(false)));
    let mut sink = StyleTransformSink::new(elements);
    let bus = ctx.bus.clone();
    let tick_gate = gate.clone();

    let frame = Rc::new(FrameLoop::new("letters", move |tick| {
        let pointer = bus.borrow().pointer();
        let marquee_top = marquee
            .as_ref()
            .filter(|m| m.is_connected())
            .map(|m| m.get_bounding_client_rect().top() as f32);
        let mut g = tick_gate.get();
        g.set_suppressed(pointer.active && pointer_below(pointer.y, marquee_top));
        tick_gate.set(g);
        if !g.is_open() {
            group.release(&mut sink);
            return;
        }
        // bounding rects include the current offset; strip it to get the rest centre
        let centers: Vec<Option<Vec2>> = sink
            .elements()
            .iter()
            .zip(group.letters())
            .map(|(el, letter)| dom::element_center(el).map(|c| c - letter.state().position))
            .collect();
        group.tick(
            |i| centers.get(i).copied().flatten(),
            pointer,
            tick.delta_sec(),
            &mut sink,
        );
    }));

    let watch = run_while_visible(&host, 0.0, gate, frame.clone(), |visible| {
        log::debug!("[letters] visible={}", visible);
    })?;
    Ok(Some(HeroLetters {
        _frame: frame,
        _watch: watch,
    }))
}
