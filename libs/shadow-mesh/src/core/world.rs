//! World-space view of a mesh for one frame.
//!
//! Only deduplicated positions are transformed; every vertex reads its world
//! position back through the vertex→position table, so all geometry derived
//! from one position in a frame is bitwise identical.

use crate::core::ds::{Face, Vertex};
use crate::core::vec3::{Mat3, Mat4, Vec3};

/// Positions and normals of a mesh transformed by a world matrix.
#[derive(Debug, Clone)]
pub struct WorldGeometry<'a> {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    vertex_positions: &'a [u32],
}

impl<'a> WorldGeometry<'a> {
    /// Transforms `positions` and the normals of `vertices` by `world`.
    ///
    /// Normals use the inverse transpose; a singular matrix falls back to the
    /// plain linear part.
    pub fn transform(
        positions: &[Vec3],
        vertices: &[Vertex],
        vertex_positions: &'a [u32],
        world: &Mat4,
    ) -> Self {
        let linear = Mat3::from_mat4(*world);
        let normal_matrix = if linear.determinant() != 0.0 {
            linear.inverse().transpose()
        } else {
            linear
        };

        Self {
            positions: positions.iter().map(|&p| world.transform_point3(p)).collect(),
            normals: vertices
                .iter()
                .map(|v| (normal_matrix * v.normal).normalize_or_zero())
                .collect(),
            vertex_positions,
        }
    }

    /// World position of a deduplicated position index.
    #[inline]
    pub fn position(&self, position: u32) -> Vec3 {
        self.positions[position as usize]
    }

    /// World position of a vertex.
    #[inline]
    pub fn vertex_position(&self, vertex: u32) -> Vec3 {
        self.position(self.vertex_positions[vertex as usize])
    }

    /// World normal of a vertex.
    #[inline]
    pub fn vertex_normal(&self, vertex: u32) -> Vec3 {
        self.normals[vertex as usize]
    }

    /// World vertex (position and normal).
    #[inline]
    pub fn vertex(&self, vertex: u32) -> Vertex {
        Vertex::new(self.vertex_position(vertex), self.vertex_normal(vertex))
    }

    /// World positions of the three corners of a face.
    #[inline]
    pub fn face_corners(&self, face: &Face) -> [Vec3; 3] {
        face.indices.map(|v| self.vertex_position(v))
    }

    /// Position indices of the three corners of a face.
    #[inline]
    pub fn face_positions(&self, face: &Face) -> [u32; 3] {
        face.position_indices(self.vertex_positions)
    }
}
