// Frame smoothing and responsive tuning constants

// Scrubbed properties lag the scroll position by roughly this many seconds
pub const SCRUB_LAG_SEC: f32 = 1.0;

// Canvas backing store never exceeds this device pixel ratio
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Clamp for frame delta so a backgrounded tab does not jump animations
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Multisample count for the scene pass
pub const MSAA_SAMPLES: u32 = 4;
