use glam::Vec3;

// Scene layout shared by the core and the web frontend.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 5.0);

// Lights (rgb, intensity)
pub const AMBIENT_LIGHT: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
pub const POINT_LIGHT_COLOR: [f32; 4] = [0.0, 1.0, 0x9d as f32 / 255.0, 1.0];
pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);

// Tunnel geometry
pub const TUNNEL_RADIUS: f32 = 10.0;
pub const TUNNEL_LENGTH: f32 = 40.0;
pub const TUNNEL_RADIAL_SEGMENTS: u32 = 32;
pub const TUNNEL_LENGTH_SEGMENTS: u32 = 20;
pub const TUNNEL_COLOR: [f32; 4] = [0.0, 0x44 as f32 / 255.0, 1.0, 0.1];

// Tunnel motion: depth advances per frame and wraps from NEAR back to FAR
pub const TUNNEL_STEP_PER_FRAME: f32 = 0.1;
pub const TUNNEL_NEAR_BOUND: f32 = 10.0;
pub const TUNNEL_FAR_BOUND: f32 = -70.0;
pub const TUNNEL_START_Z: [f32; 2] = [-10.0, -50.0];

// Mascot plane
pub const MASCOT_PLANE_SIZE: f32 = 4.0;
pub const MASCOT_BOB_AMPLITUDE: f32 = 0.15;
pub const MASCOT_BOB_RATE: f32 = 2.0; // rad/s
pub const MASCOT_MOBILE_SCALE: f32 = 0.6;

// Texture swap ("pop") timing
pub const SWAP_OUT_SEC: f32 = 0.2;
pub const SWAP_IN_SEC: f32 = 0.35;
pub const SWAP_EDGE_ON_RAD: f32 = std::f32::consts::FRAC_PI_2;
pub const BACK_OUT_OVERSHOOT: f32 = 1.70158;

// Scroll choreography
// Viewports narrower than this keep the mascot centered and scaled down
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const MASCOT_SIDE_OFFSET: f32 = 5.0;
pub const CONTACT_LIFT_Y: f32 = 0.5;
pub const CONTACT_SCALE: f32 = 1.2;

// Carousel
pub const CAROUSEL_FALLBACK_SLIDE_WIDTH: f64 = 300.0;
pub const CAROUSEL_SPACING_PX: f64 = 50.0;
pub const CAROUSEL_AUTOPLAY_MS: u32 = 4000;
