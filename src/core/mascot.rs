use super::constants::{
    BACK_OUT_OVERSHOOT, MASCOT_BOB_AMPLITUDE, MASCOT_BOB_RATE, MASCOT_PLANE_SIZE, SWAP_EDGE_ON_RAD,
    SWAP_IN_SEC, SWAP_OUT_SEC,
};
use super::easing::Ease;
use glam::{Mat4, Quat, Vec2, Vec3};

// Mascot sprite state and the rotate-swap-rotate sequence that hides texture
// changes behind the edge-on angle.

/// The three pre-loaded mascot images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Hero,
    Pose,
    Thumbs,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 3] = [TextureSlot::Hero, TextureSlot::Pose, TextureSlot::Thumbs];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            TextureSlot::Hero => 0,
            TextureSlot::Pose => 1,
            TextureSlot::Thumbs => 2,
        }
    }

    /// Image path relative to the page.
    pub fn asset_path(self) -> &'static str {
        match self {
            TextureSlot::Hero => "assets/mascote_1.png",
            TextureSlot::Pose => "assets/mascote_3.png",
            TextureSlot::Thumbs => "assets/mascote_0.png",
        }
    }
}

/// Where the sprite is in the texture swap sequence.
///
/// The swap itself is instantaneous and happens on the
/// `RotatingOut` → `RotatingIn` transition, when the plane is edge-on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwapPhase {
    Idle,
    RotatingOut { elapsed: f32, target: TextureSlot },
    RotatingIn { elapsed: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MascotEvent {
    TextureSwapped(TextureSlot),
}

/// Scroll-driven part of the mascot transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MascotPose {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Uniform size multiplier on top of the responsive base scale.
    pub size: f32,
}

impl Default for MascotPose {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            size: 1.0,
        }
    }
}

/// Flat textured plane with scroll-driven pose and aspect-corrected scale.
///
/// `scale().x` always equals `scale().y` times the active texture's
/// width/height ratio; an image that has not loaded yet counts as square.
#[derive(Clone, Debug)]
pub struct Mascot {
    pose: MascotPose,
    base_scale: f32,
    bob: f32,
    rotation_y: f32,
    scale: Vec2,
    active: TextureSlot,
    aspects: [Option<f32>; 3],
    phase: SwapPhase,
}

impl Default for Mascot {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Mascot {
    pub fn new(base_scale: f32) -> Self {
        let mut m = Self {
            pose: MascotPose::default(),
            base_scale,
            bob: 0.0,
            rotation_y: 0.0,
            scale: Vec2::ONE,
            active: TextureSlot::Hero,
            aspects: [None; 3],
            phase: SwapPhase::Idle,
        };
        m.refresh_scale();
        m
    }

    pub fn active_texture(&self) -> TextureSlot {
        self.active
    }

    pub fn phase(&self) -> SwapPhase {
        self.phase
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn pose(&self) -> MascotPose {
        self.pose
    }

    /// Texture the sprite is heading to: the pending swap target, if any.
    pub fn intended_texture(&self) -> TextureSlot {
        match self.phase {
            SwapPhase::RotatingOut { target, .. } => target,
            _ => self.active,
        }
    }

    pub fn set_pose(&mut self, pose: MascotPose) {
        self.pose = pose;
        self.refresh_scale();
    }

    /// Responsive scale (smaller on narrow viewports).
    pub fn set_base_scale(&mut self, base_scale: f32) {
        self.base_scale = base_scale;
        self.refresh_scale();
    }

    /// Record the loaded image size for a slot.
    pub fn set_texture_size(&mut self, slot: TextureSlot, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspects[slot.index()] = Some(width as f32 / height as f32);
        if slot == self.active {
            self.refresh_scale();
        }
    }

    pub fn texture_aspect(&self, slot: TextureSlot) -> Option<f32> {
        self.aspects[slot.index()]
    }

    /// Start a rotate-out/swap/rotate-in sequence toward `slot`.
    ///
    /// Returns false (and changes nothing) when `slot` is already the texture
    /// the sprite shows or is heading to. Otherwise any in-flight rotation is
    /// dropped and the sequence restarts from 0°.
    pub fn request_swap(&mut self, slot: TextureSlot) -> bool {
        if slot == self.intended_texture() {
            return false;
        }
        self.rotation_y = 0.0;
        self.phase = SwapPhase::RotatingOut {
            elapsed: 0.0,
            target: slot,
        };
        true
    }

    /// Advance the swap animation by `dt_sec`.
    pub fn advance(&mut self, dt_sec: f32) -> Option<MascotEvent> {
        let dt = dt_sec.max(0.0);
        let mut event = None;
        match self.phase {
            SwapPhase::Idle => {}
            SwapPhase::RotatingOut { elapsed, target } => {
                let elapsed = elapsed + dt;
                if elapsed < SWAP_OUT_SEC {
                    self.rotation_y = SWAP_EDGE_ON_RAD * Ease::QuadIn.apply(elapsed / SWAP_OUT_SEC);
                    self.phase = SwapPhase::RotatingOut { elapsed, target };
                } else {
                    self.active = target;
                    self.refresh_scale();
                    event = Some(MascotEvent::TextureSwapped(target));
                    self.enter_rotating_in(elapsed - SWAP_OUT_SEC);
                }
            }
            SwapPhase::RotatingIn { elapsed } => self.enter_rotating_in(elapsed + dt),
        }
        event
    }

    /// Idle vertical bob as a function of wall-clock seconds since start.
    pub fn set_bob_time(&mut self, elapsed_sec: f32) {
        self.bob = MASCOT_BOB_AMPLITUDE * (MASCOT_BOB_RATE * elapsed_sec).sin();
    }

    pub fn render_position(&self) -> Vec3 {
        Vec3::new(self.pose.x, self.pose.y + self.bob, self.pose.z)
    }

    /// Model matrix for the unit-sized plane (the plane size is folded in).
    pub fn model_matrix(&self) -> Mat4 {
        let half = MASCOT_PLANE_SIZE * 0.5;
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.scale.x * half, self.scale.y * half, 1.0),
            Quat::from_rotation_y(self.rotation_y),
            self.render_position(),
        )
    }

    fn enter_rotating_in(&mut self, elapsed: f32) {
        if elapsed >= SWAP_IN_SEC {
            self.rotation_y = 0.0;
            self.phase = SwapPhase::Idle;
            return;
        }
        let eased = Ease::BackOut {
            c: BACK_OUT_OVERSHOOT,
        }
        .apply(elapsed / SWAP_IN_SEC);
        self.rotation_y = SWAP_EDGE_ON_RAD * (1.0 - eased);
        self.phase = SwapPhase::RotatingIn { elapsed };
    }

    fn refresh_scale(&mut self) {
        let y = self.base_scale * self.pose.size;
        let aspect = self.aspects[self.active.index()].unwrap_or(1.0);
        self.scale = Vec2::new(y * aspect, y);
    }
}
