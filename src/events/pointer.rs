use crate::dom::Listener;
use folio_core::SignalBus;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feeds raw pointer events into the shared [`SignalBus`].
///
/// Leaving the document marks the pointer inactive rather than parking it at
/// a far-away coordinate.
pub struct PointerBinding {
    _listeners: Vec<Listener>,
}

impl PointerBinding {
    pub fn attach(bus: Rc<RefCell<SignalBus>>) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("no document element"))?;

        let bus_move = bus.clone();
        let on_move = Listener::new(&window, "pointermove", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            // touch pointers are not tracked
            if ev.pointer_type() == "touch" {
                return;
            }
            bus_move
                .borrow_mut()
                .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
        })?;

        let bus_leave = bus.clone();
        let on_leave = Listener::new(&root, "pointerleave", move |_ev: web::Event| {
            bus_leave.borrow_mut().pointer_left();
        })?;

        // window blur also strands the pointer
        let bus_blur = bus;
        let on_blur = Listener::new(&window, "blur", move |_ev: web::Event| {
            bus_blur.borrow_mut().pointer_left();
        })?;

        Ok(Self {
            _listeners: vec![on_move, on_leave, on_blur],
        })
    }
}
