use super::camera::Camera;
use super::choreography::{ScrollDriver, Viewport};
use super::mascot::{Mascot, MascotEvent, TextureSlot};
use super::scroll::SectionBounds;
use super::tunnel::Tunnel;
use fnv::FnvHashMap;
use glam::Mat4;

/// Everything the renderer needs from the scene for one frame.
#[derive(Clone, Debug)]
pub struct SceneSnapshot {
    pub view_proj: Mat4,
    pub tunnel_depths: [f32; 2],
    pub sprite_model: Mat4,
    pub sprite_texture: TextureSlot,
}

pub struct SceneState {
    pub camera: Camera,
    pub tunnel: Tunnel,
    pub mascot: Mascot,
    pub driver: ScrollDriver,
}

impl SceneState {
    pub fn new(viewport: Viewport, scrub_lag_sec: f32) -> Self {
        Self {
            camera: Camera::new(viewport.aspect()),
            tunnel: Tunnel::default(),
            mascot: Mascot::new(viewport.mascot_scale()),
            driver: ScrollDriver::with_defaults(scrub_lag_sec),
        }
    }

    /// Recompute everything that depends on viewport geometry and replay the
    /// current scroll offset against the new ranges. Idempotent.
    ///
    /// Returns the section ids that could not be found.
    pub fn resize(
        &mut self,
        viewport: Viewport,
        sections: &FnvHashMap<&'static str, SectionBounds>,
        scroll_y: f32,
    ) -> Vec<&'static str> {
        self.camera.set_aspect(viewport.aspect());
        self.mascot.set_base_scale(viewport.mascot_scale());
        let missing = self.driver.measure(viewport, sections);
        self.on_scroll(scroll_y);
        missing
    }

    /// Apply a scroll offset: new scrub targets plus any texture swaps.
    /// Returns how many swap sequences were started.
    pub fn on_scroll(&mut self, scroll_y: f32) -> usize {
        let mut started = 0;
        for slot in self.driver.on_scroll(scroll_y) {
            if self.mascot.request_swap(slot) {
                started += 1;
            }
        }
        started
    }

    /// One display frame: tunnel step, scrub smoothing, swap animation, bob.
    pub fn advance_frame(&mut self, dt_sec: f32, elapsed_sec: f32) -> Option<MascotEvent> {
        self.tunnel.advance_frame();
        self.driver.advance(dt_sec);
        self.mascot.set_pose(self.driver.pose());
        let event = self.mascot.advance(dt_sec);
        self.mascot.set_bob_time(elapsed_sec);
        event
    }

    pub fn texture_loaded(&mut self, slot: TextureSlot, width: u32, height: u32) {
        self.mascot.set_texture_size(slot, width, height);
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            view_proj: self.camera.view_projection(),
            tunnel_depths: self.tunnel.depths(),
            sprite_model: self.mascot.model_matrix(),
            sprite_texture: self.mascot.active_texture(),
        }
    }
}
