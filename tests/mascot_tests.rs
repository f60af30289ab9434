// Host-side tests for the mascot swap sequence and aspect handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod mascot {
        include!("../src/core/mascot.rs");
    }
}

use crate::core::constants::*;
use crate::core::easing::Ease;
use crate::core::mascot::*;
use std::f32::consts::FRAC_PI_2;

const EPS: f32 = 1e-5;

#[test]
fn easing_endpoints() {
    for e in [
        Ease::QuadIn,
        Ease::BackOut {
            c: BACK_OUT_OVERSHOOT,
        },
    ] {
        assert!(e.apply(0.0).abs() < EPS, "{:?}", e);
        assert!((e.apply(1.0) - 1.0).abs() < EPS, "{:?}", e);
        assert!((e.apply(2.0) - 1.0).abs() < EPS, "{:?} not clamped", e);
    }
    assert!((Ease::QuadIn.apply(0.5) - 0.25).abs() < EPS);
    // Back-out overshoots before settling
    let peak = (1..100)
        .map(|i| Ease::BackOut { c: BACK_OUT_OVERSHOOT }.apply(i as f32 / 100.0))
        .fold(0.0f32, f32::max);
    assert!(peak > 1.05 && peak < 1.2);
}

#[test]
fn starts_idle_on_hero() {
    let m = Mascot::new(1.0);
    assert_eq!(m.active_texture(), TextureSlot::Hero);
    assert_eq!(m.phase(), SwapPhase::Idle);
    assert_eq!(m.rotation_y(), 0.0);
    assert_eq!(m.scale().x, m.scale().y);
}

#[test]
fn swapping_to_current_texture_is_a_no_op() {
    let mut m = Mascot::new(1.0);
    assert!(!m.request_swap(TextureSlot::Hero));
    assert_eq!(m.phase(), SwapPhase::Idle);
    assert_eq!(m.advance(1.0), None);
}

#[test]
fn swap_sequence_rotates_out_swaps_and_rotates_back() {
    let mut m = Mascot::new(1.0);
    assert!(m.request_swap(TextureSlot::Pose));

    assert_eq!(m.advance(0.1), None);
    assert_eq!(m.active_texture(), TextureSlot::Hero);
    let expected = FRAC_PI_2 * Ease::QuadIn.apply(0.1 / SWAP_OUT_SEC);
    assert!((m.rotation_y() - expected).abs() < 1e-4);

    // Crosses the edge-on angle: texture changes exactly here
    assert_eq!(
        m.advance(0.15),
        Some(MascotEvent::TextureSwapped(TextureSlot::Pose))
    );
    assert_eq!(m.active_texture(), TextureSlot::Pose);
    match m.phase() {
        SwapPhase::RotatingIn { elapsed } => assert!((elapsed - 0.05).abs() < 1e-4),
        other => panic!("unexpected phase {:?}", other),
    }
    assert!(m.rotation_y() > 0.0 && m.rotation_y() < FRAC_PI_2);

    assert_eq!(m.advance(SWAP_IN_SEC), None);
    assert_eq!(m.phase(), SwapPhase::Idle);
    assert_eq!(m.rotation_y(), 0.0);
}

#[test]
fn rotate_in_overshoots_past_face_on() {
    let mut m = Mascot::new(1.0);
    m.request_swap(TextureSlot::Thumbs);
    m.advance(SWAP_OUT_SEC);
    let mut min_rot = f32::MAX;
    // A few extra steps past the end absorb float drift
    for _ in 0..45 {
        m.advance(SWAP_IN_SEC / 40.0);
        min_rot = min_rot.min(m.rotation_y());
    }
    assert!(min_rot < 0.0);
    assert_eq!(m.phase(), SwapPhase::Idle);
}

#[test]
fn long_frame_finishes_whole_sequence() {
    let mut m = Mascot::new(1.0);
    m.request_swap(TextureSlot::Pose);
    assert_eq!(
        m.advance(1.0),
        Some(MascotEvent::TextureSwapped(TextureSlot::Pose))
    );
    assert_eq!(m.phase(), SwapPhase::Idle);
    assert_eq!(m.rotation_y(), 0.0);
}

#[test]
fn new_request_mid_flight_restarts_from_zero() {
    let mut m = Mascot::new(1.0);
    m.request_swap(TextureSlot::Pose);
    m.advance(0.15);
    assert!(m.rotation_y() > 0.0);

    assert!(m.request_swap(TextureSlot::Thumbs));
    assert_eq!(m.rotation_y(), 0.0);
    assert_eq!(m.intended_texture(), TextureSlot::Thumbs);
    // Same target again while pending is ignored
    assert!(!m.request_swap(TextureSlot::Thumbs));

    assert_eq!(
        m.advance(SWAP_OUT_SEC),
        Some(MascotEvent::TextureSwapped(TextureSlot::Thumbs))
    );
    assert_eq!(m.active_texture(), TextureSlot::Thumbs);
}

#[test]
fn reverting_while_rotating_in_is_honored() {
    let mut m = Mascot::new(1.0);
    m.request_swap(TextureSlot::Pose);
    m.advance(SWAP_OUT_SEC + 0.05);
    assert_eq!(m.active_texture(), TextureSlot::Pose);
    assert!(!m.request_swap(TextureSlot::Pose));
    assert!(m.request_swap(TextureSlot::Hero));
    m.advance(1.0);
    assert_eq!(m.active_texture(), TextureSlot::Hero);
}

#[test]
fn scale_follows_active_texture_aspect() {
    let mut m = Mascot::new(1.0);
    m.set_texture_size(TextureSlot::Hero, 200, 100);
    assert!((m.scale().x - 2.0 * m.scale().y).abs() < EPS);

    // Not-yet-loaded target counts as square
    m.request_swap(TextureSlot::Pose);
    m.advance(1.0);
    assert!((m.scale().x - m.scale().y).abs() < EPS);

    // Image arriving after the swap updates the live sprite
    m.set_texture_size(TextureSlot::Pose, 100, 200);
    assert!((m.scale().x - 0.5 * m.scale().y).abs() < EPS);
}

#[test]
fn loading_inactive_slot_leaves_scale_alone() {
    let mut m = Mascot::new(1.0);
    let before = m.scale();
    m.set_texture_size(TextureSlot::Thumbs, 300, 100);
    assert_eq!(m.scale(), before);
    assert_eq!(m.texture_aspect(TextureSlot::Thumbs), Some(3.0));

    m.request_swap(TextureSlot::Thumbs);
    m.advance(1.0);
    assert!((m.scale().x - 3.0 * m.scale().y).abs() < EPS);
}

#[test]
fn zero_sized_image_is_ignored() {
    let mut m = Mascot::new(1.0);
    m.set_texture_size(TextureSlot::Hero, 0, 100);
    assert_eq!(m.texture_aspect(TextureSlot::Hero), None);
}

#[test]
fn aspect_invariant_holds_under_pose_and_base_scale() {
    let mut m = Mascot::new(MASCOT_MOBILE_SCALE);
    m.set_texture_size(TextureSlot::Hero, 160, 100);
    m.set_pose(MascotPose {
        x: 0.0,
        y: 0.5,
        z: 0.0,
        size: 1.2,
    });
    let y = MASCOT_MOBILE_SCALE * 1.2;
    assert!((m.scale().y - y).abs() < EPS);
    assert!((m.scale().x - y * 1.6).abs() < EPS);

    m.set_base_scale(1.0);
    assert!((m.scale().y - 1.2).abs() < EPS);
    assert!((m.scale().x - 1.2 * 1.6).abs() < EPS);
}

#[test]
fn bob_is_bounded_and_added_to_pose() {
    let mut m = Mascot::new(1.0);
    m.set_pose(MascotPose {
        x: -5.0,
        y: 0.5,
        z: 0.0,
        size: 1.0,
    });
    for i in 0..200 {
        m.set_bob_time(i as f32 * 0.05);
        let p = m.render_position();
        assert_eq!(p.x, -5.0);
        assert!((p.y - 0.5).abs() <= MASCOT_BOB_AMPLITUDE + EPS);
    }
    m.set_bob_time(std::f32::consts::FRAC_PI_4);
    assert!((m.render_position().y - (0.5 + MASCOT_BOB_AMPLITUDE)).abs() < 1e-4);
}

#[test]
fn model_matrix_places_plane() {
    let mut m = Mascot::new(1.0);
    m.set_pose(MascotPose {
        x: 5.0,
        y: 0.0,
        z: 0.0,
        size: 1.0,
    });
    let corner = m.model_matrix().transform_point3(glam::Vec3::new(1.0, 1.0, 0.0));
    let half = MASCOT_PLANE_SIZE * 0.5;
    assert!((corner.x - (5.0 + half)).abs() < 1e-4);
    assert!((corner.y - half).abs() < 1e-4);
}

#[test]
fn asset_paths_are_distinct() {
    let paths: Vec<_> = TextureSlot::ALL.iter().map(|s| s.asset_path()).collect();
    assert_eq!(paths[0], "assets/mascote_1.png");
    assert_ne!(paths[0], paths[1]);
    assert_ne!(paths[1], paths[2]);
    for (i, s) in TextureSlot::ALL.iter().enumerate() {
        assert_eq!(s.index(), i);
    }
}
