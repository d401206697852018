use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;

/// Sentinel for an edge side with no adjacent face (boundary edge).
pub const NO_FACE: u32 = u32::MAX;

/// A render vertex: position and normal, laid out for vertex buffers.
///
/// Several vertices may share one deduplicated position (hard edges, cap
/// rings). Shadow-volume vertices on extruded geometry carry a zero normal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vertex {
    /// Position in model or world space.
    pub position: Vec3,
    /// Unit normal, or zero where the normal has no meaning.
    pub normal: Vec3,
}

impl Vertex {
    /// Creates a new vertex.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }

    /// Creates a vertex with a zero normal.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            normal: Vec3::ZERO,
        }
    }
}

/// A triangle referencing three vertices.
///
/// The winding defines the outward side: `(b - a) × (c - a)` points out of
/// the solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    /// Vertex indices in winding order.
    pub indices: [u32; 3],
}

impl Face {
    /// Creates a new face.
    pub fn new(v0: u32, v1: u32, v2: u32) -> Self {
        Self {
            indices: [v0, v1, v2],
        }
    }

    /// Maps the vertex indices of this face to position indices.
    #[inline]
    pub fn position_indices(&self, vertex_positions: &[u32]) -> [u32; 3] {
        self.indices.map(|v| vertex_positions[v as usize])
    }

    /// Directed edges of the face in winding order.
    #[inline]
    pub fn directed_edges(corners: [u32; 3]) -> [(u32, u32); 3] {
        [
            (corners[0], corners[1]),
            (corners[1], corners[2]),
            (corners[2], corners[0]),
        ]
    }
}

/// An undirected edge between two positions with up to two adjacent faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// First position index.
    pub v0: u32,
    /// Second position index.
    pub v1: u32,
    /// First face that referenced the edge.
    pub face0: u32,
    /// Second face, or [`NO_FACE`] for a boundary edge.
    pub face1: u32,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(v0: u32, v1: u32, face0: u32, face1: u32) -> Self {
        Self { v0, v1, face0, face1 }
    }

    /// Creates an edge seen by a single face so far.
    pub fn open(v0: u32, v1: u32, face0: u32) -> Self {
        Self::new(v0, v1, face0, NO_FACE)
    }

    /// True when only one face references the edge.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.face1 == NO_FACE
    }

    /// Both adjacent faces, or `None` for a boundary edge.
    #[inline]
    pub fn faces(&self) -> Option<(u32, u32)> {
        (!self.is_boundary()).then_some((self.face0, self.face1))
    }
}
