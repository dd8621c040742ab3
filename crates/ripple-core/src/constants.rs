use glam::Vec3;

// Shared tuning constants for the ripple surface and its front-ends.

// Grid resolution (points per side)
pub const RESOLUTION_MIN: u32 = 10;
pub const RESOLUTION_MAX: u32 = 100;
pub const RESOLUTION_DEFAULT: u32 = 100;
pub const RESOLUTION_STEP: u32 = 10; // coarse step for runtime adjustment

// Smallest resolution the grid builder accepts (spacing is 1 / (resolution - 1))
pub const GRID_BUILD_MIN: u32 = 2;

// Particle sizing
pub const POINT_SIZE: f32 = 0.1; // constant for every particle

// Quadrant colouring
pub const LEVEL_FLOOR: f32 = 0.3; // minimum intensity of a quadrant's dominant channel
pub const CHANNEL_LOW: f32 = 0.1; // value of the non-dominant channels

// Ripple shape: 0.5 + sin(FREQ * r2 - SPEED * t) / (DAMP_BASE + DAMP_SLOPE * r2)
pub const WAVE_BASE_HEIGHT: f32 = 0.5;
pub const WAVE_RADIAL_FREQ: f32 = 15.0 * std::f32::consts::PI;
pub const WAVE_TIME_SPEED: f32 = 2.0;
pub const WAVE_DAMP_BASE: f32 = 2.0;
pub const WAVE_DAMP_SLOPE: f32 = 100.0;

// Fixed camera looking down on the unit grid
pub const CAMERA_EYE: [f32; 3] = [1.55, 1.45, 0.5];
pub const CAMERA_TARGET: [f32; 3] = [0.5, 0.3, 0.5];
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.05;
pub const CAMERA_ZFAR: f32 = 20.0;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn camera_target_vec3() -> Vec3 {
    Vec3::from(CAMERA_TARGET)
}
