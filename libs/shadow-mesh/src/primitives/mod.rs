//! Primitive geometry generators.
//!
//! Generators build positions and per-vertex normals directly and let
//! [`SmMesh::with_adjacency`] derive the edges.

use crate::core::ds::Face;
use crate::core::vec3::Vec3;
use crate::error::ShadowMeshResult;
use crate::mesh::SmMesh;

pub mod cube;
pub mod cylinder;
pub mod double_rect;

pub use cube::{room_box, shaded_box};
pub use cylinder::cylinder;
pub use double_rect::double_rect;

/// Construction buffers shared by the generators.
#[derive(Debug, Default)]
struct MeshBuilder {
    positions: Vec<Vec3>,
    vertex_positions: Vec<u32>,
    normals: Vec<Vec3>,
    faces: Vec<Face>,
}

impl MeshBuilder {
    fn with_capacity(positions: usize, vertices: usize, faces: usize) -> Self {
        Self {
            positions: Vec::with_capacity(positions),
            vertex_positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    fn add_position(&mut self, position: Vec3) -> u32 {
        self.positions.push(position);
        self.positions.len() as u32 - 1
    }

    fn add_vertex(&mut self, position: u32, normal: Vec3) -> u32 {
        self.vertex_positions.push(position);
        self.normals.push(normal);
        self.vertex_positions.len() as u32 - 1
    }

    fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push(Face::new(v0, v1, v2));
    }

    fn build(self) -> ShadowMeshResult<SmMesh> {
        SmMesh::with_adjacency(self.positions, self.vertex_positions, self.normals, self.faces)
    }
}

/// Rejects zero, negative and non-finite dimensions.
fn require_positive(name: &str, value: f32) -> ShadowMeshResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(crate::error::ShadowMeshError::invalid_geometry(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}
