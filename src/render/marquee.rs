use super::{run_while_visible, MountContext};
use crate::constants::{
    ATTR_SPEED, MARQUEE_CONTENT_SELECTOR, MARQUEE_COPIES, MARQUEE_ROOT_ID,
    MARQUEE_VISIBILITY_THRESHOLD,
};
use crate::css;
use crate::dom;
use crate::frame::FrameLoop;
use crate::visibility::VisibilityWatch;
use folio_core::signals::ListenerId;
use folio_core::{MarqueeConfig, MarqueeDriver, SignalBus, VisibilityGate};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Looping text band whose direction follows the scroll direction.
pub struct Marquee {
    bus: Rc<RefCell<SignalBus>>,
    subscription: Rc<Cell<Option<ListenerId>>>,
    _frame: Rc<FrameLoop>,
    _watch: VisibilityWatch,
}

impl Drop for Marquee {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            // the bus may be mid-dispatch during teardown
            if let Ok(mut bus) = self.bus.try_borrow_mut() {
                bus.off_scroll(id);
            }
        }
    }
}

pub fn mount(ctx: &MountContext) -> anyhow::Result<Option<Marquee>> {
    let Some(root) = ctx.document.get_element_by_id(MARQUEE_ROOT_ID) else {
        return Ok(None);
    };
    let Some(content) = root
        .query_selector(MARQUEE_CONTENT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::warn!("[marquee] #{} has no content element", MARQUEE_ROOT_ID);
        return Ok(None);
    };

    let defaults = MarqueeConfig::default();
    let cfg = MarqueeConfig {
        speed: dom::attr_or(&root, ATTR_SPEED, defaults.speed),
        ..defaults
    };
    let driver = Rc::new(RefCell::new(MarqueeDriver::try_new(cfg)?));

    let tick_driver = driver.clone();
    let frame = Rc::new(FrameLoop::new("marquee", move |_tick| {
        let mut driver = tick_driver.borrow_mut();
        if !driver.state().is_ready() {
            // layout may not be done yet; try again next frame
            driver.measure(content.scroll_width() as f64 / MARQUEE_COPIES);
        }
        if let Some(offset) = driver.tick() {
            dom::set_style(&content, "transform", &css::translate_x(offset));
        }
    }));

    // scroll direction is only tracked while the band is on screen
    let subscription: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
    let bus = ctx.bus.clone();
    let sub = subscription.clone();
    let gate = Rc::new(Cell::new(VisibilityGate::new(false)));
    let watch = run_while_visible(
        &root,
        MARQUEE_VISIBILITY_THRESHOLD,
        gate,
        frame.clone(),
        move |visible| {
            let Ok(mut bus) = bus.try_borrow_mut() else {
                return;
            };
            match (visible, sub.get()) {
                (true, None) => {
                    let driver = driver.clone();
                    let id = bus.on_scroll(move |signal, _delta| {
                        driver.borrow_mut().observe_scroll(signal.offset);
                    });
                    sub.set(Some(id));
                }
                (false, Some(id)) => {
                    bus.off_scroll(id);
                    sub.set(None);
                }
                _ => {}
            }
        },
    )?;

    Ok(Some(Marquee {
        bus: ctx.bus.clone(),
        subscription,
        _frame: frame,
        _watch: watch,
    }))
}
