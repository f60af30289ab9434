use crate::core::SceneState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use web_sys as web;

#[derive(Clone)]
pub struct ResizeWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneState>>,
}

/// Recompute everything that depends on viewport geometry: canvas backing
/// size, camera, mascot scale and scroll ranges. Safe to run any number of
/// times.
pub fn sync_layout(w: &ResizeWiring) {
    dom::sync_canvas_backing_size(&w.canvas);
    if let Some(viewport) = dom::viewport() {
        let mut scene = w.scene.borrow_mut();
        let ids = scene.driver.section_ids();
        let sections = dom::measure_sections(&w.document, &ids);
        let missing = scene.resize(viewport, &sections, dom::scroll_y());
        static WARNED: AtomicBool = AtomicBool::new(false);
        if !missing.is_empty() && !WARNED.swap(true, Ordering::Relaxed) {
            log::warn!("[scroll] sections not found: {:?}", missing);
        }
    }
}

pub fn wire_resize(w: ResizeWiring) {
    dom::add_window_listener("resize", move || sync_layout(&w));
}

pub fn wire_scroll(scene: Rc<RefCell<SceneState>>) {
    dom::add_window_listener("scroll", move || {
        let started = scene.borrow_mut().on_scroll(dom::scroll_y());
        if started > 0 {
            log::debug!("[scroll] {} texture swap(s) requested", started);
        }
    });
}
