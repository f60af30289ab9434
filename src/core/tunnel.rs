use super::constants::{
    TUNNEL_FAR_BOUND, TUNNEL_NEAR_BOUND, TUNNEL_START_Z, TUNNEL_STEP_PER_FRAME,
};

/// One cylindrical tunnel segment. Only its depth changes over time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunnelSegment {
    pub z: f32,
}

/// Two duplicate segments leapfrogging toward the camera.
///
/// Each frame both segments move `step` toward the viewer; a segment that
/// passes `near` is sent back to `far`, so the pair reads as an endless pipe.
#[derive(Clone, Debug)]
pub struct Tunnel {
    pub segments: [TunnelSegment; 2],
    pub step: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Tunnel {
    fn default() -> Self {
        Self {
            segments: TUNNEL_START_Z.map(|z| TunnelSegment { z }),
            step: TUNNEL_STEP_PER_FRAME,
            near: TUNNEL_NEAR_BOUND,
            far: TUNNEL_FAR_BOUND,
        }
    }
}

impl Tunnel {
    /// Advance every segment by one frame's step, wrapping past the near bound.
    pub fn advance_frame(&mut self) {
        for seg in &mut self.segments {
            seg.z += self.step;
            if seg.z > self.near {
                seg.z = self.far;
            }
        }
    }

    pub fn depths(&self) -> [f32; 2] {
        [self.segments[0].z, self.segments[1].z]
    }
}

/// Build the wireframe of an open cylinder centered on the origin with its
/// axis along Z, as a line list (pairs of points).
///
/// Edges match a triangulated grid: rings, longitudinal lines and one
/// diagonal per quad.
pub fn wireframe_cylinder(
    radius: f32,
    length: f32,
    radial_segments: u32,
    length_segments: u32,
) -> Vec<[f32; 3]> {
    let radial = radial_segments.max(3);
    let rows = length_segments.max(1);
    let point = |ring: u32, i: u32| -> [f32; 3] {
        let theta = (i % radial) as f32 / radial as f32 * std::f32::consts::TAU;
        let z = -length * 0.5 + length * ring as f32 / rows as f32;
        [radius * theta.sin(), radius * theta.cos(), z]
    };

    let mut lines = Vec::with_capacity(((rows + 1) * radial + rows * radial * 2) as usize * 2);
    for ring in 0..=rows {
        for i in 0..radial {
            lines.push(point(ring, i));
            lines.push(point(ring, i + 1));
        }
    }
    for ring in 0..rows {
        for i in 0..radial {
            lines.push(point(ring, i));
            lines.push(point(ring + 1, i));
            lines.push(point(ring, i));
            lines.push(point(ring + 1, i + 1));
        }
    }
    lines
}
