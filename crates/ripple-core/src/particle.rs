use crate::constants::POINT_SIZE;
use crate::grid::GridPoint;

/// Point record handed to a render sink. Laid out for direct upload as
/// per-instance vertex data (position, size, color: 32 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Particle {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

impl From<&GridPoint> for Particle {
    fn from(p: &GridPoint) -> Self {
        Self {
            position: p.position.to_array(),
            size: POINT_SIZE,
            color: p.color.to_array(),
        }
    }
}

/// Consumer of the finished point array, called once per tick.
pub trait ParticleSink {
    fn submit(&mut self, particles: &[Particle]);
}

impl ParticleSink for Vec<Particle> {
    fn submit(&mut self, particles: &[Particle]) {
        self.clear();
        self.extend_from_slice(particles);
    }
}
