pub mod camera;
pub mod carousel;
pub mod choreography;
pub mod constants;
pub mod easing;
pub mod mascot;
pub mod scene;
pub mod scroll;
pub mod tunnel;

pub use camera::*;
pub use carousel::*;
pub use choreography::*;
pub use constants::*;
pub use mascot::*;
pub use scene::*;
pub use tunnel::*;

// Shaders bundled as string constants
pub static TUNNEL_WGSL: &str = include_str!("../../shaders/tunnel.wgsl");
pub static SPRITE_WGSL: &str = include_str!("../../shaders/sprite.wgsl");
