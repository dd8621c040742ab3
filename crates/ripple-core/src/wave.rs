use crate::constants::{
    WAVE_BASE_HEIGHT, WAVE_DAMP_BASE, WAVE_DAMP_SLOPE, WAVE_RADIAL_FREQ, WAVE_TIME_SPEED,
};

/// Surface height at grid position `(x, z)` in \[0, 1\]² after `time` seconds.
///
/// A radially symmetric ripple around the grid centre whose amplitude decays
/// with the squared distance. Periodic in `time` with period π.
#[inline]
pub fn height(x: f32, z: f32, time: f32) -> f32 {
    let dx = x - 0.5;
    let dz = z - 0.5;
    let r2 = dx * dx + dz * dz;
    WAVE_BASE_HEIGHT
        + (WAVE_RADIAL_FREQ * r2 - WAVE_TIME_SPEED * time).sin()
            / (WAVE_DAMP_BASE + WAVE_DAMP_SLOPE * r2)
}
