use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::extensions::easing::lerp_vec3;

/// Perspective camera looking at a fixed point.
/// Y-up, right-handed, GL clip space (the convention the host's WebGL/WebGPU glue expects).
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub near: f32,
    pub far: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    /// xyz = eye position, w = vertical fov in degrees.
    pub position: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl Camera3D {
    pub const DEFAULT_NEAR: f32 = 0.01;
    pub const DEFAULT_FAR: f32 = 1000.0;

    pub fn new(position: Vec3, target: Vec3, fovy: f32) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fovy,
            near: Self::DEFAULT_NEAR,
            far: Self::DEFAULT_FAR,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy.to_radians(), aspect, self.near, self.far)
    }

    /// Combined projection × view for a viewport of `viewport` pixels.
    pub fn view_projection(&self, viewport: Vec2) -> Mat4 {
        self.projection_matrix(viewport.x / viewport.y) * self.view_matrix()
    }

    /// Project a world-space point to pixel coordinates (origin top-left, Y down).
    /// Returns `None` for points behind the camera.
    pub fn world_to_screen(&self, point: Vec3, viewport: Vec2) -> Option<Vec2> {
        let clip = self.view_projection(viewport) * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        ))
    }

    /// Move a fraction of the way toward `goal`. Same contract as item smoothing.
    pub fn follow(&mut self, goal: Vec3, smoothing: f32) {
        self.position = lerp_vec3(self.position, goal, smoothing);
    }

    pub fn uniform(&self, viewport: Vec2) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection(viewport).to_cols_array_2d(),
            position: [self.position.x, self.position.y, self.position.z, self.fovy],
        }
    }
}
