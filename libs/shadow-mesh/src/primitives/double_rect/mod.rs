//! Double-sided rectangle primitive.

use super::{require_positive, MeshBuilder};
use crate::core::vec3::Vec3;
use crate::error::ShadowMeshResult;
use crate::mesh::SmMesh;

/// Creates a `width × height` rectangle in the XY plane, centred on the
/// origin, with a front side facing +Z and a back side facing -Z.
///
/// Both sides share the same four positions. The front pair is recorded
/// first, so the shared diagonal belongs to the two front triangles and the
/// back side's copy of it is dropped from the adjacency. Every rim edge ends
/// up with one front and one back face.
pub fn double_rect(width: f32, height: f32) -> ShadowMeshResult<SmMesh> {
    require_positive("rectangle width", width)?;
    require_positive("rectangle height", height)?;

    let (w, h) = (width / 2.0, height / 2.0);
    let mut builder = MeshBuilder::with_capacity(4, 8, 4);
    let corners = [
        builder.add_position(Vec3::new(-w, -h, 0.0)),
        builder.add_position(Vec3::new(w, -h, 0.0)),
        builder.add_position(Vec3::new(w, h, 0.0)),
        builder.add_position(Vec3::new(-w, h, 0.0)),
    ];

    for &p in &corners {
        builder.add_vertex(p, Vec3::Z);
    }
    for p in [corners[0], corners[3], corners[2], corners[1]] {
        builder.add_vertex(p, Vec3::NEG_Z);
    }

    builder.add_triangle(0, 1, 2);
    builder.add_triangle(0, 2, 3);
    builder.add_triangle(4, 5, 6);
    builder.add_triangle(4, 6, 7);

    builder.build()
}
