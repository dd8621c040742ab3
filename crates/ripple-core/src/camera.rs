//! Camera description shared with the GPU front-end.
//!
//! Left-handed, matching the grid layout: seen from the default eye, low
//! rows sit at the top of the screen and low columns on the left.

use crate::constants::{
    camera_eye_vec3, camera_target_vec3, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR,
};
use glam::{Mat4, Vec3};

#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn looking_at_grid(aspect: f32) -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: camera_target_vec3(),
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_lh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space screen right and screen up, for camera-facing quads.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize();
        let right = self.up.cross(forward).normalize();
        (right, forward.cross(right))
    }
}
