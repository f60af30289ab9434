use crate::core::{Carousel, CarouselFrame, IntervalScheduler, CAROUSEL_AUTOPLAY_MS};
use crate::dom;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Where the carousel lives in the page.
#[derive(Clone, Debug)]
pub struct CarouselSelectors {
    pub track: &'static str,
    pub slide: &'static str,
    pub prev_id: &'static str,
    pub next_id: &'static str,
}

impl Default for CarouselSelectors {
    fn default() -> Self {
        Self {
            track: ".carousel-track",
            slide: ".carousel-slide",
            prev_id: "carousel-prev",
            next_id: "carousel-next",
        }
    }
}

/// `setInterval`-backed scheduler. The callback closure is created once and
/// reused by every restart.
struct WindowInterval {
    window: web::Window,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl IntervalScheduler for WindowInterval {
    fn start(&mut self, period_ms: u32) -> Option<i32> {
        let tick = self.tick.borrow();
        let cb = tick.as_ref()?;
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
    }
}

pub struct CarouselView {
    state: Carousel,
    track: web::HtmlElement,
    slides: Vec<web::HtmlElement>,
    scheduler: WindowInterval,
}

impl CarouselView {
    /// Re-measure the slide width and re-place every slide on the ring.
    pub fn layout(&mut self) {
        let width = self
            .slides
            .first()
            .map(|s| s.offset_width() as f64)
            .unwrap_or(0.0);
        self.state.relayout(width);
        let geometry = *self.state.geometry();
        for (i, slide) in self.slides.iter().enumerate() {
            _ = slide
                .style()
                .set_property("transform", &geometry.slide_transform(i));
        }
        log::debug!(
            "[carousel] layout n={} w={} radius={:?}",
            geometry.count,
            geometry.slide_width,
            geometry.radius
        );
    }

    pub fn update(&self) {
        self.apply(&self.state.frame());
    }

    pub fn next(&mut self) {
        let frame = self.state.next(&mut self.scheduler);
        self.apply(&frame);
    }

    pub fn prev(&mut self) {
        let frame = self.state.prev(&mut self.scheduler);
        self.apply(&frame);
    }

    fn autoplay_tick(&mut self) {
        let frame = self.state.autoplay_tick();
        self.apply(&frame);
    }

    fn apply(&self, frame: &CarouselFrame) {
        _ = self
            .track
            .style()
            .set_property("transform", &frame.container_transform);
        for (i, slide) in self.slides.iter().enumerate() {
            _ = slide.class_list().toggle_with_force("active", i == frame.active);
        }
    }
}

fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Find the carousel, lay it out, wire its buttons and start autoplay.
///
/// Returns `None` without touching the page when any required element is
/// missing.
pub fn init(
    document: &web::Document,
    selectors: &CarouselSelectors,
) -> Option<Rc<RefCell<CarouselView>>> {
    let window = web::window()?;
    let Some(track) = query_html(document, selectors.track) else {
        log::info!("[carousel] no {} on this page", selectors.track);
        return None;
    };
    let slides = query_all_html(document, selectors.slide);
    if slides.is_empty() {
        log::info!("[carousel] no slides; not starting");
        return None;
    }
    if document.get_element_by_id(selectors.prev_id).is_none()
        || document.get_element_by_id(selectors.next_id).is_none()
    {
        log::info!("[carousel] navigation buttons missing; not starting");
        return None;
    }

    let count = slides.len();
    let view = Rc::new(RefCell::new(CarouselView {
        state: Carousel::new(count, 0.0, CAROUSEL_AUTOPLAY_MS),
        track,
        slides,
        scheduler: WindowInterval {
            window,
            tick: Rc::new(RefCell::new(None)),
        },
    }));

    let weak: Weak<RefCell<CarouselView>> = Rc::downgrade(&view);
    let tick = Closure::wrap(Box::new(move || {
        if let Some(v) = weak.upgrade() {
            v.borrow_mut().autoplay_tick();
        }
    }) as Box<dyn FnMut()>);
    *view.borrow().scheduler.tick.borrow_mut() = Some(tick);

    let v_prev = view.clone();
    dom::add_click_listener(document, selectors.prev_id, move || v_prev.borrow_mut().prev());
    let v_next = view.clone();
    dom::add_click_listener(document, selectors.next_id, move || v_next.borrow_mut().next());
    let v_resize = view.clone();
    dom::add_window_listener("resize", move || relayout(&v_resize));

    {
        let mut v = view.borrow_mut();
        v.layout();
        v.update();
        let CarouselView {
            state, scheduler, ..
        } = &mut *v;
        state.restart_autoplay(scheduler);
    }
    log::info!("[carousel] started with {} slides", count);
    Some(view)
}

/// Resize handler: geometry may have changed, so lay out again and re-render
/// the current index.
pub fn relayout(view: &Rc<RefCell<CarouselView>>) {
    let mut v = view.borrow_mut();
    v.layout();
    v.update();
}
