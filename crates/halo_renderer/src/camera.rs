//! Camera projection and per-pixel ray directions.

use halo_core::Scene;
use halo_math::{Mat4, Vec2, Vec3, Vec4};

const NEAR_PLANE: f32 = 0.001;
const FAR_PLANE: f32 = 1000.0;

/// Projection and view transforms for one render.
///
/// Built once per render from the scene camera and the image size, then
/// shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct Projection {
    pub width: u32,
    pub height: u32,
    position: Vec3,
    inverse_projection: Mat4,
    inverse_view: Mat4,
}

impl Projection {
    /// Create the transforms for a camera at `position` looking at `look_at`
    /// with a vertical field of view of `vfov` degrees.
    pub fn new(position: Vec3, look_at: Vec3, vfov: f32, width: u32, height: u32) -> Self {
        let aspect = width as f32 / height as f32;
        let projection = Mat4::perspective_rh(vfov.to_radians(), aspect, NEAR_PLANE, FAR_PLANE);
        let view = Mat4::look_at_rh(position, look_at, Vec3::Y);

        Self {
            width,
            height,
            position,
            inverse_projection: projection.inverse(),
            inverse_view: view.inverse(),
        }
    }

    /// Create the transforms for the scene's camera.
    pub fn from_scene(scene: &Scene, width: u32, height: u32) -> Self {
        Self::new(
            scene.camera_position,
            scene.camera_look_at,
            scene.camera_vfov,
            width,
            height,
        )
    }

    /// Origin shared by every camera ray.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World-space direction through pixel (x, y) offset by `jitter`.
    ///
    /// Row 0 is the top of the image. `jitter` is the sub-pixel offset in
    /// [0, 1) on each axis.
    pub fn ray_direction(&self, x: u32, y: u32, jitter: Vec2) -> Vec3 {
        // Flip so row 0 maps to the top pixel row, not one row past it
        let pixel = Vec2::new(x as f32, (self.height - 1 - y) as f32);
        let resolution = Vec2::new(self.width as f32, self.height as f32);
        let ndc = (pixel + jitter) / resolution * 2.0 - 1.0;

        let target = self.inverse_projection * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let view_dir = (target.truncate() / target.w).normalize();
        self.inverse_view.transform_vector3(view_dir).normalize()
    }

    /// Fill `out` with the direction of every pixel, row-major.
    ///
    /// The same `jitter` is applied to every pixel of the frame.
    pub fn ray_directions(&self, jitter: Vec2, out: &mut [Vec3]) {
        debug_assert_eq!(out.len(), (self.width * self.height) as usize);

        for y in 0..self.height {
            for x in 0..self.width {
                out[(y * self.width + x) as usize] = self.ray_direction(x, y, jitter);
            }
        }
    }
}
