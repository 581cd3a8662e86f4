#![cfg(target_arch = "wasm32")]
use folio_core::{PageHide, Readiness, SignalBus};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod css;
mod dom;
mod events;
mod frame;
mod render;
mod views;
mod visibility;

use render::MountContext;

/// Everything mounted on the page. Dropping it detaches every listener,
/// observer and frame loop.
struct App {
    bus: Rc<RefCell<SignalBus>>,
    scroll: events::ScrollBinding,
    _pointer: events::PointerBinding,
    _letters: Option<render::letters::HeroLetters>,
    _waves: Option<render::waves::WaveField>,
    _marquee: Option<render::marquee::Marquee>,
    _cursor: Option<render::cursor::CustomCursor>,
    _chrome: Option<render::chrome::ScrollChrome>,
    _backdrop: Option<render::pointer_parallax::PointerBackdrop>,
}

impl App {
    fn dispose(self) {
        self.scroll.detach();
        self.bus.borrow_mut().dispose();
        log::info!("folio-web disposed");
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Mounts one component, logging instead of failing the whole page.
fn mount_or_log<T>(
    name: &str,
    ctx: &MountContext,
    mount: fn(&MountContext) -> anyhow::Result<Option<T>>,
) -> Option<T> {
    match mount(ctx) {
        Ok(mounted) => mounted,
        Err(e) => {
            log::error!("[{}] not mounted: {:?}", name, e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let bus = Rc::new(RefCell::new(SignalBus::new()));
    bus.borrow_mut().init();
    let readiness = Rc::new(RefCell::new(Readiness::new()));

    let pointer = events::PointerBinding::attach(bus.clone())?;
    let scroll = events::ScrollBinding::attach(bus.clone(), readiness)?;

    let ctx = MountContext {
        document: document.clone(),
        bus: bus.clone(),
    };
    let app = App {
        bus,
        scroll,
        _pointer: pointer,
        _letters: mount_or_log("letters", &ctx, render::letters::mount),
        _waves: mount_or_log("waves", &ctx, render::waves::mount),
        _marquee: mount_or_log("marquee", &ctx, render::marquee::mount),
        _cursor: mount_or_log("cursor", &ctx, render::cursor::mount),
        _chrome: mount_or_log("chrome", &ctx, render::chrome::mount),
        _backdrop: mount_or_log("backdrop", &ctx, render::pointer_parallax::mount),
    };
    APP.with(|slot| *slot.borrow_mut() = Some(app));

    // rAF loops and observers simply sleep while the page sits in the
    // back/forward cache; only a real unload tears down
    let teardown = Closure::wrap(Box::new(move |ev: web::Event| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        let hide = PageHide::from_persisted(persisted);
        log::debug!("pagehide: {:?}", hide);
        if !hide.disposes() {
            return;
        }
        if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
            app.dispose();
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = window.add_event_listener_with_callback("pagehide", teardown.as_ref().unchecked_ref());
    teardown.forget();

    spawn_local(views::record_and_show(document));
    Ok(())
}
