// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_constants_are_within_reasonable_bounds() {
    assert!(SCRUB_LAG_SEC > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tunnel_wrap_leaves_segments_apart() {
    // The far bound sits behind the camera's view of the near bound, and the
    // starting depths are inside the wrap range.
    assert!(TUNNEL_FAR_BOUND < TUNNEL_NEAR_BOUND);
    for z in TUNNEL_START_Z {
        assert!(z >= TUNNEL_FAR_BOUND && z <= TUNNEL_NEAR_BOUND);
    }
    assert!(TUNNEL_STEP_PER_FRAME > 0.0);
    assert!(TUNNEL_STEP_PER_FRAME < TUNNEL_NEAR_BOUND - TUNNEL_FAR_BOUND);
    // Camera sits inside the pipe
    assert!(CAMERA_EYE.x.abs() < TUNNEL_RADIUS && CAMERA_EYE.y.abs() < TUNNEL_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn swap_timing_is_short_and_ordered() {
    assert!(SWAP_OUT_SEC > 0.0);
    assert!(SWAP_IN_SEC > SWAP_OUT_SEC);
    assert!(SWAP_OUT_SEC + SWAP_IN_SEC < 1.0);
    assert!((SWAP_EDGE_ON_RAD - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mascot_and_carousel_constants_are_positive() {
    assert!(MASCOT_PLANE_SIZE > 0.0);
    assert!(MASCOT_MOBILE_SCALE > 0.0 && MASCOT_MOBILE_SCALE < 1.0);
    assert!(MASCOT_BOB_AMPLITUDE > 0.0 && MASCOT_BOB_AMPLITUDE < MASCOT_PLANE_SIZE);
    assert!(MOBILE_BREAKPOINT_PX > 0.0);
    assert!(CAROUSEL_FALLBACK_SLIDE_WIDTH > 0.0);
    assert!(CAROUSEL_SPACING_PX >= 0.0);
    assert!(CAROUSEL_AUTOPLAY_MS > 0);
}

#[test]
fn light_colors_are_normalized() {
    for c in [AMBIENT_LIGHT, POINT_LIGHT_COLOR, TUNNEL_COLOR] {
        for v in c {
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
