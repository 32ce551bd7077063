pub mod constants;
pub mod geometry;
pub mod orientation;
pub mod pacing;
pub mod particles;
pub mod scene;
pub mod viewport;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static VECTORS_WGSL: &str = include_str!("../shaders/vectors.wgsl");

pub use constants::*;
pub use geometry::*;
pub use orientation::*;
pub use pacing::*;
pub use particles::*;
pub use scene::*;
pub use viewport::*;
