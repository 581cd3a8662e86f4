use super::MountContext;
use crate::constants::{
    MAIN_NAV_HIDDEN_CLASS, MAIN_NAV_ID, PARALLAX_BG_SELECTOR, PARALLAX_FG_SELECTOR,
    PARALLAX_SELECTOR, PILL_NAV_ID, PILL_VISIBLE_CLASS,
};
use crate::css;
use crate::dom;
use folio_core::signals::ListenerId;
use folio_core::{section_progress, NavChrome, ParallaxLayer, SignalBus};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ParallaxSection {
    section: web::Element,
    background: Vec<web::HtmlElement>,
    foreground: Vec<web::HtmlElement>,
}

struct ChromeState {
    nav: NavChrome,
    main_nav: Option<web::Element>,
    pill_nav: Option<web::Element>,
    sections: Vec<ParallaxSection>,
}

impl ChromeState {
    fn refresh(&mut self) {
        if let Some(main) = &self.main_nav {
            let bottom = main.get_bounding_client_rect().bottom();
            if let Some(show_pill) = self.nav.update(bottom) {
                dom::toggle_class(main, MAIN_NAV_HIDDEN_CLASS, show_pill);
                if let Some(pill) = &self.pill_nav {
                    dom::toggle_class(pill, PILL_VISIBLE_CLASS, show_pill);
                }
            }
        }

        let (_, viewport_h) = dom::viewport_size();
        for s in &self.sections {
            let rect = s.section.get_bounding_client_rect();
            let progress = section_progress(rect.top(), rect.height(), viewport_h);
            let bg = css::translate_y_percent(ParallaxLayer::BACKGROUND.offset_percent(progress));
            let fg = css::translate_y_percent(ParallaxLayer::FOREGROUND.offset_percent(progress));
            for el in &s.background {
                dom::set_style(el, "transform", &bg);
            }
            for el in &s.foreground {
                dom::set_style(el, "transform", &fg);
            }
        }
    }
}

/// Scroll-driven navigation pill and parallax layers. No frame loop: work
/// happens only when a scroll event arrives.
pub struct ScrollChrome {
    bus: Rc<RefCell<SignalBus>>,
    subscription: ListenerId,
}

impl Drop for ScrollChrome {
    fn drop(&mut self) {
        if let Ok(mut bus) = self.bus.try_borrow_mut() {
            bus.off_scroll(self.subscription);
        }
    }
}

pub fn mount(ctx: &MountContext) -> anyhow::Result<Option<ScrollChrome>> {
    let main_nav = ctx.document.get_element_by_id(MAIN_NAV_ID);
    let pill_nav = ctx.document.get_element_by_id(PILL_NAV_ID);
    let sections: Vec<ParallaxSection> = dom::query_all(&ctx.document, PARALLAX_SELECTOR)
        .into_iter()
        .map(|section| ParallaxSection {
            background: dom::html_elements(dom::query_all_in(&section, PARALLAX_BG_SELECTOR)),
            foreground: dom::html_elements(dom::query_all_in(&section, PARALLAX_FG_SELECTOR)),
            section,
        })
        .collect();
    if main_nav.is_none() && sections.is_empty() {
        return Ok(None);
    }
    log::info!(
        "[chrome] nav={} parallax sections={}",
        main_nav.is_some(),
        sections.len()
    );

    let mut state = ChromeState {
        nav: NavChrome::new(),
        main_nav,
        pill_nav,
        sections,
    };
    state.refresh();
    let subscription = ctx
        .bus
        .borrow_mut()
        .on_scroll(move |_signal, _delta| state.refresh());

    Ok(Some(ScrollChrome {
        bus: ctx.bus.clone(),
        subscription,
    }))
}
