#![cfg(target_arch = "wasm32")]
use crate::carousel::CarouselSelectors;
use crate::constants::SCRUB_LAG_SEC;
use crate::core::SceneState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod render;
mod textures;

/// Where the page hosts each piece. `asset_base` is prefixed to the mascot
/// image paths.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub container_id: &'static str,
    pub asset_base: String,
    pub carousel: CarouselSelectors,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            container_id: "webgl-container",
            asset_base: String::new(),
            carousel: CarouselSelectors::default(),
        }
    }
}

impl SceneConfig {
    /// Defaults, with `data-asset-base` on the container taking precedence.
    fn from_document(document: &web::Document) -> Self {
        let mut config = Self::default();
        if let Some(base) = document
            .get_element_by_id(config.container_id)
            .and_then(|el| el.get_attribute("data-asset-base"))
        {
            config.asset_base = base;
        }
        config
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tunnel-landing starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = SceneConfig::from_document(&document);

    // The carousel does not depend on the scene; start it first so a page
    // without a WebGL container still gets one.
    _ = carousel::init(&document, &config.carousel);

    let container = document
        .get_element_by_id(config.container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", config.container_id))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let style = canvas.style();
    _ = style.set_property("display", "block");
    _ = style.set_property("width", "100%");
    _ = style.set_property("height", "100%");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::viewport().ok_or_else(|| anyhow::anyhow!("no viewport size"))?;
    let scene = Rc::new(RefCell::new(SceneState::new(viewport, SCRUB_LAG_SEC)));

    // First layout pass also replays the current scroll offset; settle so a
    // reload mid-page does not animate in from the top.
    let wiring = events::ResizeWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        scene: scene.clone(),
    };
    events::sync_layout(&wiring);
    scene.borrow_mut().driver.settle();
    events::wire_resize(wiring);
    events::wire_scroll(scene.clone());

    let images: textures::ImageQueue = Rc::new(RefCell::new(Vec::new()));
    textures::spawn_loads(&config.asset_base, images.clone());

    let depths = scene.borrow().tunnel.depths();
    let gpu = frame::init_gpu(&canvas, depths).await;

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        images,
        started: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);
    log::info!("[scene] running");
    Ok(())
}
