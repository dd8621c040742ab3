pub mod camera;
pub mod channel;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod palette;
pub mod particle;
pub mod renderer;
pub mod wave;

pub use camera::*;
pub use channel::*;
pub use constants::*;
pub use dataset::*;
pub use error::RippleError;
pub use grid::*;
pub use particle::*;
pub use renderer::*;

// Bundled assets
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
pub static BUNDLED_DATA_JSON: &str = include_str!("../assets/data.json");
