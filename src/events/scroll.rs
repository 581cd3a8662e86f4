//! Scroll source selection.
//!
//! The smooth-scroll library, when the page ships one, announces itself by
//! publishing a global and dispatching a ready event. Whichever of "library
//! ready" or "page loaded without a library" happens first resolves the
//! shared [`Readiness`] latch exactly once, and the matching scroll feed is
//! attached.

use crate::constants::{SMOOTH_SCROLL_GLOBAL, SMOOTH_SCROLL_READY_EVENT};
use crate::dom::{self, Listener};
use folio_core::{Readiness, ScrollInput, ScrollSource, SignalBus, SmoothScrollPayload};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// A handler registered with the smooth-scroll library via `on`/`off`.
struct SmoothHook {
    instance: JsValue,
    closure: Closure<dyn FnMut(JsValue)>,
}

impl Drop for SmoothHook {
    fn drop(&mut self) {
        let off = js_sys::Reflect::get(&self.instance, &JsValue::from_str("off"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        if let Some(off) = off {
            _ = off.call2(
                &self.instance,
                &JsValue::from_str("scroll"),
                self.closure.as_ref(),
            );
        }
    }
}

enum Feed {
    Smooth(SmoothHook),
    Native(Listener),
}

pub struct ScrollBinding {
    feed: Rc<RefCell<Option<Feed>>>,
    _waiters: Vec<Listener>,
}

fn smooth_instance() -> Option<JsValue> {
    let window = web::window()?;
    let instance = js_sys::Reflect::get(&window, &JsValue::from_str(SMOOTH_SCROLL_GLOBAL)).ok()?;
    if instance.is_undefined() || instance.is_null() {
        return None;
    }
    Some(instance)
}

fn payload_from(data: &JsValue) -> SmoothScrollPayload {
    let scroll_y = js_sys::Reflect::get(data, &JsValue::from_str("scroll"))
        .ok()
        .filter(|s| s.is_object())
        .and_then(|s| js_sys::Reflect::get(&s, &JsValue::from_str("y")).ok())
        .and_then(|y| y.as_f64());
    SmoothScrollPayload { scroll_y }
}

fn attach_smooth(bus: Rc<RefCell<SignalBus>>) -> Option<SmoothHook> {
    let instance = smooth_instance()?;
    let on = js_sys::Reflect::get(&instance, &JsValue::from_str("on"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    let closure = Closure::wrap(Box::new(move |data: JsValue| {
        bus.borrow_mut().scrolled(ScrollInput::Smooth {
            payload: payload_from(&data),
            fallback_y: dom::native_scroll_y(),
        });
    }) as Box<dyn FnMut(JsValue)>);
    if let Err(e) = on.call2(&instance, &JsValue::from_str("scroll"), closure.as_ref()) {
        log::warn!("[scroll] smooth-scroll rejected handler: {:?}", e);
        return None;
    }
    Some(SmoothHook { instance, closure })
}

fn attach_native(bus: Rc<RefCell<SignalBus>>) -> Option<Listener> {
    let window = web::window()?;
    let listener = Listener::new(&window, "scroll", move |_ev: web::Event| {
        bus.borrow_mut()
            .scrolled(ScrollInput::Native(dom::native_scroll_y()));
    });
    match listener {
        Ok(l) => Some(l),
        Err(e) => {
            log::error!("[scroll] {:?}", e);
            None
        }
    }
}

impl ScrollBinding {
    pub fn attach(
        bus: Rc<RefCell<SignalBus>>,
        readiness: Rc<RefCell<Readiness>>,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let feed: Rc<RefCell<Option<Feed>>> = Rc::new(RefCell::new(None));

        {
            let feed = feed.clone();
            let bus = bus.clone();
            readiness.borrow_mut().on_ready(move |source| {
                let attached = match source {
                    ScrollSource::SmoothScroll => attach_smooth(bus.clone()).map(Feed::Smooth),
                    ScrollSource::Native => None,
                };
                let attached = attached.or_else(|| {
                    if source == ScrollSource::SmoothScroll {
                        log::warn!("[scroll] smooth-scroll unusable, using native scroll");
                    }
                    attach_native(bus.clone()).map(Feed::Native)
                });
                // seed the signal so readers start from the real offset
                bus.borrow_mut()
                    .scrolled(ScrollInput::Native(dom::native_scroll_y()));
                *feed.borrow_mut() = attached;
            });
        }

        let mut waiters = Vec::new();
        if smooth_instance().is_some() {
            readiness.borrow_mut().resolve(ScrollSource::SmoothScroll);
        } else {
            let ready = readiness.clone();
            waiters.push(Listener::new(
                &window,
                SMOOTH_SCROLL_READY_EVENT,
                move |_ev: web::Event| {
                    ready.borrow_mut().resolve(ScrollSource::SmoothScroll);
                },
            )?);
            let loaded = window
                .document()
                .map(|d| d.ready_state() == "complete")
                .unwrap_or(false);
            if loaded {
                readiness.borrow_mut().resolve(ScrollSource::Native);
            } else {
                let ready = readiness.clone();
                waiters.push(Listener::new(&window, "load", move |_ev: web::Event| {
                    // the library had its chance while the page loaded
                    if smooth_instance().is_some() {
                        ready.borrow_mut().resolve(ScrollSource::SmoothScroll);
                    } else {
                        ready.borrow_mut().resolve(ScrollSource::Native);
                    }
                })?);
            }
        }

        Ok(Self {
            feed,
            _waiters: waiters,
        })
    }

    pub fn detach(&self) {
        self.feed.borrow_mut().take();
    }
}
