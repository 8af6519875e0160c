use crate::{reflect, Vec3};

/// A ray in 3D space with an origin and a direction.
///
/// Rays are mutated in place while a path is traced: after each bounce the
/// origin moves to the hit point and the direction is replaced by the
/// scattered one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Move the origin to `origin`, keeping the direction.
    #[inline]
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    /// Reverse the direction.
    #[inline]
    pub fn flip_direction(&mut self) {
        self.direction = -self.direction;
    }

    /// Mirror the direction about `normal`, perturb it by `offset` and
    /// renormalize.
    ///
    /// An `offset` of zero gives a perfect mirror bounce.
    pub fn reflect_with_offset(&mut self, normal: Vec3, offset: Vec3) {
        self.direction = (reflect(self.direction, normal) + offset).normalize();
    }

    /// True if the direction points into the hemisphere around `normal`.
    #[inline]
    pub fn is_on_hemisphere(&self, normal: Vec3) -> bool {
        self.direction.dot(normal) > 0.0
    }
}
