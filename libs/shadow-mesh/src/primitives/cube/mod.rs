//! Box primitive with flat shading.

use super::{require_positive, MeshBuilder};
use crate::core::vec3::Vec3;
use crate::error::ShadowMeshResult;
use crate::mesh::SmMesh;

/// Corner positions of each side, counter-clockwise seen from outside.
///
/// Corner `i` sits at `+x` when bit 0 is set, `+y` for bit 1, `+z` for bit 2.
const SIDES: [(Vec3, [u32; 4]); 6] = [
    (Vec3::X, [1, 3, 7, 5]),
    (Vec3::NEG_X, [0, 4, 6, 2]),
    (Vec3::Y, [2, 6, 7, 3]),
    (Vec3::NEG_Y, [0, 1, 5, 4]),
    (Vec3::Z, [4, 5, 7, 6]),
    (Vec3::NEG_Z, [0, 2, 3, 1]),
];

/// Creates an axis-aligned box centred on the origin.
///
/// The 8 corners are shared positions; each side has its own 4 vertices
/// with the side's normal, giving 24 vertices and 12 triangles.
pub fn shaded_box(width: f32, height: f32, depth: f32) -> ShadowMeshResult<SmMesh> {
    build_box(width, height, depth, false)
}

/// Creates a box seen from inside, such as a room around the camera.
///
/// Same layout as [`shaded_box`] with every side wound and shaded toward
/// the centre.
pub fn room_box(width: f32, height: f32, depth: f32) -> ShadowMeshResult<SmMesh> {
    build_box(width, height, depth, true)
}

fn build_box(width: f32, height: f32, depth: f32, inward: bool) -> ShadowMeshResult<SmMesh> {
    require_positive("box width", width)?;
    require_positive("box height", height)?;
    require_positive("box depth", depth)?;

    let half = Vec3::new(width, height, depth) / 2.0;
    let mut builder = MeshBuilder::with_capacity(8, 24, 12);
    for i in 0..8u32 {
        let sign = |bit: u32| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
        builder.add_position(half * Vec3::new(sign(0), sign(1), sign(2)));
    }

    for (normal, corners) in SIDES {
        let normal = if inward { -normal } else { normal };
        let [a, b, c, d] = corners.map(|p| builder.add_vertex(p, normal));
        if inward {
            builder.add_triangle(a, c, b);
            builder.add_triangle(a, d, c);
        } else {
            builder.add_triangle(a, b, c);
            builder.add_triangle(a, c, d);
        }
    }

    builder.build()
}
