use super::{run_while_visible, MountContext, SvgPathSink};
use crate::constants::{ATTR_LINES, FIELD_PATH_SELECTOR, FIELD_SECTION_ID};
use crate::dom;
use crate::frame::FrameLoop;
use crate::visibility::VisibilityWatch;
use folio_core::constants::FIELD_THROTTLE_MS;
use folio_core::render::plan_nodes;
use folio_core::{compute_field, FieldConfig, PathSink, Throttle, VisibilityGate};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Wavy lines behind the about section.
pub struct WaveField {
    _frame: Rc<FrameLoop>,
    _watch: VisibilityWatch,
}

fn ensure_paths(
    document: &web::Document,
    section: &web::Element,
    svg: &web::Element,
    count: usize,
) -> Vec<web::Element> {
    let mut paths = dom::query_all_in(section, FIELD_PATH_SELECTOR);
    let plan = plan_nodes(paths.len(), count);
    // stale paths from the markup would otherwise keep their old shape
    for extra in paths.drain(plan.remove) {
        extra.remove();
    }
    for _ in 0..plan.create {
        match document.create_element_ns(Some(SVG_NS), "path") {
            Ok(path) => {
                if svg.append_child(&path).is_err() {
                    break;
                }
                paths.push(path);
            }
            Err(e) => {
                log::warn!("[waves] could not create path: {:?}", e);
                break;
            }
        }
    }
    paths
}

pub fn mount(ctx: &MountContext) -> anyhow::Result<Option<WaveField>> {
    let Some(section) = ctx.document.get_element_by_id(FIELD_SECTION_ID) else {
        return Ok(None);
    };
    let Some(svg) = section.query_selector("svg[data-wiggle]").ok().flatten() else {
        log::debug!("[waves] #{} has no wiggle svg", FIELD_SECTION_ID);
        return Ok(None);
    };

    let defaults = FieldConfig::default();
    let mut cfg = FieldConfig {
        num_lines: dom::attr_or(&svg, ATTR_LINES, defaults.num_lines),
        ..defaults
    };
    cfg.validate()?;
    let mut sink = SvgPathSink::new(ensure_paths(&ctx.document, &section, &svg, cfg.num_lines));

    let gate = Rc::new(Cell::new(VisibilityGate::new(false)));
    let mut throttle = Throttle::new(FIELD_THROTTLE_MS);
    let bus = ctx.bus.clone();
    let tick_section = section.clone();

    let frame = Rc::new(FrameLoop::new("waves", move |tick| {
        if !tick_section.is_connected() || !throttle.ready(tick.elapsed_ms) {
            return;
        }
        let rect = tick_section.get_bounding_client_rect();
        let (w, h) = (rect.width() as f32, rect.height() as f32);
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        if (cfg.width - w).abs() > 0.5 {
            cfg.width = w;
            _ = svg.set_attribute("viewBox", &format!("0 0 {} {}", w, cfg.height));
        }
        // the svg stretches the fixed-height viewBox over the section
        let pointer = bus.borrow().pointer().position().and_then(|p| {
            let local = p - Vec2::new(rect.left() as f32, rect.top() as f32);
            let inside = local.x >= 0.0 && local.y >= 0.0 && local.x <= w && local.y <= h;
            inside.then(|| Vec2::new(local.x, local.y * cfg.height / h))
        });
        let field = compute_field(tick.elapsed_sec(), pointer, &cfg);
        for (i, d) in field.to_svg_paths().iter().enumerate() {
            sink.apply_path(i, d);
        }
    }));

    let watch = run_while_visible(&section, 0.0, gate, frame.clone(), |_| {})?;
    log::info!("[waves] {} lines", cfg.num_lines);
    Ok(Some(WaveField {
        _frame: frame,
        _watch: watch,
    }))
}
