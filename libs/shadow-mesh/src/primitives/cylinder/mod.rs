//! Cylinder primitive.

use ::config::constants::MIN_CYLINDER_SLICES;

use super::{require_positive, MeshBuilder};
use crate::core::vec3::Vec3;
use crate::error::{ShadowMeshError, ShadowMeshResult};
use crate::mesh::SmMesh;

/// Creates a closed cylinder along Y, centred on the origin.
///
/// Side rings run from `+height/2` down to `-height/2`. The caps use their
/// own rings of vertices (flat normals) that share positions with the
/// outermost side rings, plus one centre vertex each, so the mesh is closed
/// in position space.
///
/// # Arguments
/// * `stacks` - Number of side bands (at least 1).
/// * `slices` - Number of radial segments (at least 3).
/// * `height` - Total height.
/// * `radius` - Radius.
///
/// # Returns
/// * `Ok(SmMesh)` with `(stacks + 1) * slices + 2` positions and
///   `2 * stacks * slices + 2 * slices` triangles.
pub fn cylinder(stacks: u32, slices: u32, height: f32, radius: f32) -> ShadowMeshResult<SmMesh> {
    if stacks < 1 {
        return Err(ShadowMeshError::invalid_geometry("cylinder needs at least one stack"));
    }
    if slices < MIN_CYLINDER_SLICES {
        return Err(ShadowMeshError::invalid_geometry(format!(
            "cylinder needs at least {MIN_CYLINDER_SLICES} slices, got {slices}"
        )));
    }
    require_positive("cylinder height", height)?;
    require_positive("cylinder radius", radius)?;

    let rings = stacks + 1;
    let s = slices as usize;
    let mut builder = MeshBuilder::with_capacity(
        rings as usize * s + 2,
        rings as usize * s + 2 * s + 2,
        2 * stacks as usize * s + 2 * s,
    );

    let half = height / 2.0;
    let dy = height / stacks as f32;
    let step = std::f32::consts::TAU / slices as f32;
    let directions: Vec<Vec3> = (0..slices)
        .map(|j| {
            let (sin, cos) = (j as f32 * step).sin_cos();
            Vec3::new(cos, 0.0, sin)
        })
        .collect();

    // Side rings: position index == vertex index.
    for i in 0..rings {
        let y = half - i as f32 * dy;
        for &dir in &directions {
            let p = builder.add_position(Vec3::new(dir.x * radius, y, dir.z * radius));
            builder.add_vertex(p, dir);
        }
    }
    let top_center = builder.add_position(Vec3::new(0.0, half, 0.0));
    let bottom_center = builder.add_position(Vec3::new(0.0, -half, 0.0));

    let top = builder.vertex_positions.len() as u32;
    for j in 0..slices {
        builder.add_vertex(j, Vec3::Y);
    }
    let bottom = builder.vertex_positions.len() as u32;
    for j in 0..slices {
        builder.add_vertex(stacks * slices + j, Vec3::NEG_Y);
    }
    let tc = builder.add_vertex(top_center, Vec3::Y);
    let bc = builder.add_vertex(bottom_center, Vec3::NEG_Y);

    for i in 0..stacks {
        for j in 0..slices {
            let next = (j + 1) % slices;
            let a = i * slices + j;
            let b = i * slices + next;
            let c = (i + 1) * slices + j;
            let d = (i + 1) * slices + next;
            builder.add_triangle(a, b, d);
            builder.add_triangle(a, d, c);
        }
    }
    for j in 0..slices {
        let next = (j + 1) % slices;
        builder.add_triangle(tc, top + next, top + j);
    }
    for j in 0..slices {
        let next = (j + 1) % slices;
        builder.add_triangle(bc, bottom + j, bottom + next);
    }

    builder.build()
}
