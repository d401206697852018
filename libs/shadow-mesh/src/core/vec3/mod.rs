//! Thin wrapper around `glam` shared across kernel modules.
//!
//! Mesh data stays in `f32` end to end because it is uploaded to 16-bit
//! indexed vertex buffers unchanged.

pub use glam::{Mat3, Mat4, Vec3};

/// Pushes `point` away from `light` by `distance` along the light-to-point ray.
///
/// A point coincident with the light has no direction and stays in place.
///
/// # Examples
/// ```
/// use shadow_mesh::{core::vec3::extrude_from_light, Vec3};
/// let p = extrude_from_light(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 3.0, 0.0), 10.0);
/// assert_eq!(p, Vec3::new(0.0, -9.0, 0.0));
/// ```
#[inline]
pub fn extrude_from_light(point: Vec3, light: Vec3, distance: f32) -> Vec3 {
    point + (point - light).normalize_or_zero() * distance
}

/// Bit-exact hashable key for a point.
///
/// Shadow-volume vertices derived from the same world position are bitwise
/// identical, so this key is enough to stitch and compare them.
///
/// # Examples
/// ```
/// use shadow_mesh::{core::vec3::bits_key, Vec3};
/// assert_eq!(bits_key(Vec3::ONE), bits_key(Vec3::new(1.0, 1.0, 1.0)));
/// ```
#[inline]
pub fn bits_key(v: Vec3) -> [u32; 3] {
    [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]
}
