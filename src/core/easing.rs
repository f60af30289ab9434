/// Easing curves used by the timed mascot animations.
///
/// Only the curves the page needs; scroll scrubs stay linear in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    /// Quadratic ease-in.
    QuadIn,
    /// Overshoots past 1 and settles back, `c` controls the overshoot.
    BackOut { c: f32 },
}

impl Ease {
    /// Map normalized time `t` to eased progress. `t` is clamped to \[0, 1\];
    /// the result is exactly 0 at t=0 and 1 at t=1.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::QuadIn => t * t,
            Ease::BackOut { c } => {
                if t >= 1.0 {
                    return 1.0;
                }
                let c3 = c + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + c * u * u
            }
        }
    }
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
