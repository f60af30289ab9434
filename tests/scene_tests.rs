// Host-side tests for the scene state stepped by the render loop.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod mascot {
        include!("../src/core/mascot.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod choreography {
        include!("../src/core/choreography.rs");
    }
    pub mod tunnel {
        include!("../src/core/tunnel.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::camera::Camera;
use crate::core::choreography::Viewport;
use crate::core::constants::*;
use crate::core::mascot::{MascotEvent, TextureSlot};
use crate::core::scene::SceneState;
use crate::core::scroll::SectionBounds;
use fnv::FnvHashMap;

const WIDE: Viewport = Viewport {
    width: 1600.0,
    height: 900.0,
};

fn sections() -> FnvHashMap<&'static str, SectionBounds> {
    let mut m = FnvHashMap::default();
    m.insert("services", SectionBounds { top: 900.0, height: 900.0 });
    m.insert("about", SectionBounds { top: 1800.0, height: 900.0 });
    m.insert("contact", SectionBounds { top: 2700.0, height: 900.0 });
    m
}

#[test]
fn camera_projection_uses_viewport_aspect() {
    let mut cam = Camera::new(WIDE.aspect());
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-5);
    assert!((cam.fovy_radians - CAMERA_FOV_DEG.to_radians()).abs() < 1e-6);
    // Points straight ahead land in the middle of clip space
    let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, -10.0, 1.0);
    assert!((clip.x / clip.w).abs() < 1e-5 && (clip.y / clip.w).abs() < 1e-5);

    cam.set_aspect(f32::NAN);
    assert_eq!(cam.aspect, 1.0);
    cam.set_aspect(0.0);
    assert_eq!(cam.aspect, 1.0);
}

#[test]
fn resize_is_idempotent() {
    let mut scene = SceneState::new(WIDE, 1.0);
    assert!(scene.resize(WIDE, &sections(), 1500.0).is_empty());
    scene.driver.settle();
    scene.advance_frame(0.0, 0.0);
    let first = scene.snapshot();
    for _ in 0..3 {
        scene.resize(WIDE, &sections(), 1500.0);
    }
    scene.driver.settle();
    scene.advance_frame(0.0, 0.0);
    let second = scene.snapshot();
    assert_eq!(first.view_proj, second.view_proj);
    assert_eq!(first.sprite_model, second.sprite_model);
    assert_eq!(first.sprite_texture, second.sprite_texture);
}

#[test]
fn narrow_resize_shrinks_mascot_and_updates_camera() {
    let mut scene = SceneState::new(WIDE, 1.0);
    scene.resize(WIDE, &sections(), 0.0);
    assert_eq!(scene.mascot.scale().y, 1.0);

    let narrow = Viewport {
        width: 400.0,
        height: 800.0,
    };
    scene.resize(narrow, &sections(), 0.0);
    assert!((scene.mascot.scale().y - MASCOT_MOBILE_SCALE).abs() < 1e-6);
    assert!((scene.camera.aspect - 0.5).abs() < 1e-6);
}

#[test]
fn scroll_starts_swap_and_frames_complete_it() {
    let mut scene = SceneState::new(WIDE, 1.0);
    scene.resize(WIDE, &sections(), 0.0);
    // about boundary: 1800 - 450
    assert_eq!(scene.on_scroll(1400.0), 1);
    assert_eq!(scene.on_scroll(1450.0), 0);

    let mut swapped = None;
    let mut t = 0.0;
    for _ in 0..60 {
        t += 1.0 / 60.0;
        if let Some(e) = scene.advance_frame(1.0 / 60.0, t) {
            swapped = Some(e);
        }
    }
    assert_eq!(swapped, Some(MascotEvent::TextureSwapped(TextureSlot::Pose)));
    assert_eq!(scene.snapshot().sprite_texture, TextureSlot::Pose);
}

#[test]
fn texture_load_updates_sprite_aspect() {
    let mut scene = SceneState::new(WIDE, 1.0);
    scene.texture_loaded(TextureSlot::Hero, 300, 150);
    let s = scene.mascot.scale();
    assert!((s.x - 2.0 * s.y).abs() < 1e-6);
}

#[test]
fn frames_move_tunnel_toward_camera() {
    let mut scene = SceneState::new(WIDE, 1.0);
    let before = scene.snapshot().tunnel_depths;
    scene.advance_frame(1.0 / 60.0, 1.0 / 60.0);
    let after = scene.snapshot().tunnel_depths;
    for i in 0..2 {
        assert!((after[i] - before[i] - TUNNEL_STEP_PER_FRAME).abs() < 1e-5);
    }
}

#[test]
fn mascot_follows_scroll_after_frames() {
    let mut scene = SceneState::new(WIDE, 1.0);
    scene.resize(WIDE, &sections(), 0.0);
    // services centered: 900 + 450 - 450
    scene.on_scroll(900.0);
    for i in 0..600 {
        scene.advance_frame(1.0 / 60.0, i as f32 / 60.0);
    }
    assert!((scene.mascot.pose().x + MASCOT_SIDE_OFFSET).abs() < 1e-3);
}
