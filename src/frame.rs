use folio_core::{FrameClock, Tick};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopInner {
    label: &'static str,
    clock: RefCell<FrameClock>,
    raf_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopInner {
    fn request(&self) {
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        // no window (detached worker, torn-down page): the frame is just not delivered
        let Some(w) = web::window() else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(e) => log::warn!("[frame] {} could not schedule: {:?}", self.label, e),
        }
    }
}

/// requestAnimationFrame loop for one animation.
///
/// Each animation owns its own loop so it can be paused by its visibility
/// gate independently. Dropping the loop cancels any pending frame.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn new(
        label: &'static str,
        mut on_tick: impl FnMut(Tick) + 'static,
    ) -> Self {
        let inner = Rc::new(LoopInner {
            label,
            clock: RefCell::new(FrameClock::default()),
            raf_id: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |_ts: f64| {
            // a frame that fires after teardown finds nothing to drive
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.raf_id.set(None);
            let tick = inner.clock.borrow_mut().advance(instant::now());
            if let Some(tick) = tick {
                on_tick(tick);
            }
            if inner.clock.borrow().is_running() && inner.raf_id.get().is_none() {
                inner.request();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(closure);
        Self { inner }
    }

    pub fn start(&self) {
        let was_running = self.inner.clock.borrow().is_running();
        self.inner.clock.borrow_mut().start();
        if !was_running {
            log::debug!("[frame] {} started", self.inner.label);
        }
        if self.inner.raf_id.get().is_none() {
            self.inner.request();
        }
    }

    /// Idempotent.
    pub fn stop(&self) {
        self.inner.clock.borrow_mut().stop();
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::debug!("[frame] {} stopped", self.inner.label);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.clock.borrow().is_running()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
