//! Square point grid over the unit XZ plane.

use crate::constants::GRID_BUILD_MIN;
use crate::error::{Result, RippleError};
use glam::{Vec3, Vec4};

/// One surface point. `position.x`/`position.z` are fixed in \[0, 1\];
/// `position.y` and `color` are rewritten every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    pub position: Vec3,
    pub color: Vec4,
}

#[derive(Clone, Debug)]
pub struct Grid {
    resolution: u32,
    spacing: f32,
    points: Vec<GridPoint>,
}

impl Grid {
    /// Lay out `resolution * resolution` points, row-major: the point for
    /// row `x` and column `z` lives at index `x * resolution + z`.
    pub fn build(resolution: u32) -> Result<Self> {
        if resolution < GRID_BUILD_MIN {
            return Err(RippleError::InvalidResolution(resolution));
        }
        let spacing = 1.0 / (resolution - 1) as f32;
        let n = resolution as usize;
        let mut points = Vec::with_capacity(n * n);
        for x in 0..resolution {
            for z in 0..resolution {
                let p = Vec3::new(x as f32 * spacing, 0.0, z as f32 * spacing);
                // placeholder colour, overwritten by the first frame
                points.push(GridPoint {
                    position: p,
                    color: Vec4::new(p.x, 0.0, p.z, 1.0),
                });
            }
        }
        log::info!("built {resolution}x{resolution} grid ({} points)", points.len());
        Ok(Self {
            resolution,
            spacing,
            points,
        })
    }

    #[inline]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Centre row/column used for quadrant tests (integer half of the resolution).
    #[inline]
    pub fn middle(&self) -> u32 {
        self.resolution / 2
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(row, col)` of a flat index.
    #[inline]
    pub fn cell(&self, index: usize) -> (u32, u32) {
        let n = self.resolution as usize;
        ((index / n) as u32, (index % n) as u32)
    }

    #[inline]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    #[inline]
    pub fn points_mut(&mut self) -> &mut [GridPoint] {
        &mut self.points
    }
}
