use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{MascotEvent, SceneState};
use crate::render;
use crate::textures::ImageQueue;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub images: ImageQueue,

    pub started: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        let elapsed_sec = (now - self.started).as_secs_f32();

        let loaded: Vec<_> = self.images.borrow_mut().drain(..).collect();

        let snapshot = {
            let mut scene = self.scene.borrow_mut();
            for img in &loaded {
                scene.texture_loaded(img.slot, img.width, img.height);
            }
            if let Some(MascotEvent::TextureSwapped(slot)) = scene.advance_frame(dt_sec, elapsed_sec)
            {
                log::debug!("[mascot] texture swapped to {:?}", slot);
            }
            scene.snapshot()
        };

        if let Some(g) = &mut self.gpu {
            for img in &loaded {
                g.upload_texture(img.slot, img.width, img.height, &img.rgba);
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&snapshot) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    tunnel_depths: [f32; 2],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, tunnel_depths).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
