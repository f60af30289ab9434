use crate::core::TextureSlot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Decoded RGBA8 pixels for one mascot slot, waiting for GPU upload.
pub struct LoadedImage {
    pub slot: TextureSlot,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Finished loads, drained by the render loop.
pub type ImageQueue = Rc<RefCell<Vec<LoadedImage>>>;

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Join the optional asset base with a relative asset path.
pub fn asset_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Start loading every slot. Failures are logged and leave the slot on its
/// placeholder.
pub fn spawn_loads(asset_base: &str, queue: ImageQueue) {
    for slot in TextureSlot::ALL {
        let url = asset_url(asset_base, slot.asset_path());
        let queue = queue.clone();
        spawn_local(async move {
            match load_rgba(&url).await {
                Ok((width, height, rgba)) => {
                    log::info!("[texture] loaded {} ({}x{})", url, width, height);
                    queue.borrow_mut().push(LoadedImage {
                        slot,
                        width,
                        height,
                        rgba,
                    });
                }
                Err(e) => log::warn!("[texture] failed to load {}: {:?}", url, e),
            }
        });
    }
}

/// Fetch an image and let the browser decode it; read the pixels back
/// through an off-DOM 2D canvas.
async fn load_rgba(url: &str) -> anyhow::Result<(u32, u32, Vec<u8>)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("HTTP {}", resp.status());
    }
    let blob: web::Blob = JsFuture::from(resp.blob().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let bitmap: web::ImageBitmap =
        JsFuture::from(window.create_image_bitmap_with_blob(&blob).map_err(js_err)?)
            .await
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;

    let (width, height) = (bitmap.width(), bitmap.height());
    if width == 0 || height == 0 {
        anyhow::bail!("empty image");
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(js_err)?;
    ctx.draw_image_with_image_bitmap(&bitmap, 0.0, 0.0)
        .map_err(js_err)?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(js_err)?;
    bitmap.close();
    Ok((width, height, data.data().0))
}
