use crate::constants::MAX_PIXEL_RATIO;
use crate::core::scroll::SectionBounds;
use crate::core::Viewport;
use fnv::FnvHashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach a page-lifetime listener to `window`. Scroll listeners are passive.
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(event == "scroll");
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Canvas backing store = CSS size × device pixel ratio (capped).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport {
        width: width as f32,
        height: height as f32,
    })
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Measure sections by id in document coordinates. Absent ids are skipped.
pub fn measure_sections(
    document: &web::Document,
    ids: &[&'static str],
) -> FnvHashMap<&'static str, SectionBounds> {
    let scroll = scroll_y();
    let mut out = FnvHashMap::default();
    for id in ids {
        if let Some(el) = document.get_element_by_id(id) {
            let rect = el.get_bounding_client_rect();
            out.insert(
                *id,
                SectionBounds {
                    top: rect.top() as f32 + scroll,
                    height: rect.height() as f32,
                },
            );
        }
    }
    out
}
