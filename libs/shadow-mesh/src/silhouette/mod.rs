//! Lit/unlit face classification against a point light.

use crate::core::ds::Face;
use crate::core::vec3::Vec3;
use crate::core::world::WorldGeometry;

/// Unit geometric normal of a triangle, or zero for a degenerate one.
#[inline]
pub fn face_normal(corners: [Vec3; 3]) -> Vec3 {
    let [p0, p1, p2] = corners;
    (p1 - p0).cross(p2 - p0).normalize_or_zero()
}

/// True when `face` faces the light.
///
/// The light direction is taken from the first corner. Edge-on faces
/// (`dot == 0`) and degenerate faces are unlit.
#[inline]
pub fn facing_front(face: &Face, light: Vec3, world: &WorldGeometry<'_>) -> bool {
    let corners = world.face_corners(face);
    let to_light = (light - corners[0]).normalize_or_zero();
    face_normal(corners).dot(to_light) > 0.0
}

/// Classifies every face of a mesh for the current frame.
pub fn classify_faces(faces: &[Face], light: Vec3, world: &WorldGeometry<'_>) -> Vec<bool> {
    faces
        .iter()
        .map(|face| facing_front(face, light, world))
        .collect()
}

#[cfg(test)]
mod tests;
