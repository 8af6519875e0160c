// Re-export glam for convenience
pub use glam::*;

// Halo math types
mod ray;
pub use ray::Ray;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// View a slice of RGB vectors as a flat slice of channels.
#[inline]
pub fn as_channels(pixels: &[Vec3]) -> &[f32] {
    bytemuck::cast_slice(pixels)
}
