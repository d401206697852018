//! Shadow-volume extrusion.
//!
//! A shadow volume is rebuilt from scratch each frame:
//!
//! 1. every face is classified lit or unlit against the light;
//! 2. every two-face edge whose faces disagree becomes a wall quad running
//!    from the edge to its copy pushed away from the light;
//! 3. lit faces become near caps and unlit faces become far caps (the face
//!    pushed away from the light).
//!
//! All output triangles are wound inward, so the volume is closed and every
//! directed edge has its reverse.

use std::collections::HashMap;

use ::config::constants::MAX_SHADOW_VERTICES;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::ds::{Edge, Face, Vertex};
use crate::core::vec3::{bits_key, extrude_from_light, Vec3};
use crate::core::world::WorldGeometry;
use crate::error::{ShadowMeshError, ShadowMeshResult};
use crate::silhouette::classify_faces;

/// Counts describing how a volume was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolumeStats {
    /// Edges whose adjacent faces disagree on being lit.
    pub silhouette_edges: usize,
    /// Lit faces emitted unchanged.
    pub near_caps: usize,
    /// Unlit faces emitted extruded.
    pub far_caps: usize,
}

impl VolumeStats {
    /// Vertex count of a volume with these counts.
    pub fn vertex_count(&self) -> usize {
        self.silhouette_edges * 4 + (self.near_caps + self.far_caps) * 3
    }

    /// Triangle count of a volume with these counts.
    pub fn triangle_count(&self) -> usize {
        self.silhouette_edges * 2 + self.near_caps + self.far_caps
    }
}

impl std::iter::Sum for VolumeStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, s| Self {
            silhouette_edges: acc.silhouette_edges + s.silhouette_edges,
            near_caps: acc.near_caps + s.near_caps,
            far_caps: acc.far_caps + s.far_caps,
        })
    }
}

/// GPU-ready shadow volume for one mesh and one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadowVolume {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
    stats: VolumeStats,
}

impl ShadowVolume {
    /// Vertex buffer.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// 16-bit index buffer, three indices per triangle.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Assembly counts.
    pub fn stats(&self) -> VolumeStats {
        self.stats
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when the volume has no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Triangles as position triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.vertices[tri[0] as usize].position,
                self.vertices[tri[1] as usize].position,
                self.vertices[tri[2] as usize].position,
            ]
        })
    }

    /// Counts directed edges (by exact position) that have no reverse edge.
    ///
    /// Zero means the volume is closed and consistently wound.
    pub fn unmatched_edge_count(&self) -> usize {
        let mut directed: HashMap<([u32; 3], [u32; 3]), i64> = HashMap::new();
        for [a, b, c] in self.triangles() {
            for (from, to) in [(a, b), (b, c), (c, a)] {
                *directed.entry((bits_key(from), bits_key(to))).or_insert(0) += 1;
            }
        }
        directed
            .iter()
            .map(|(&(from, to), &count)| {
                let reverse = directed.get(&(to, from)).copied().unwrap_or(0);
                (count - reverse).max(0) as usize
            })
            .sum()
    }

    fn push_vertex(&mut self, vertex: Vertex) -> u16 {
        let index = self.vertices.len() as u16;
        self.vertices.push(vertex);
        index
    }

    fn push_triangle(&mut self, base: u16, tri: [u16; 3]) {
        self.indices.extend(tri.map(|i| base + i));
    }
}

/// True when `v0 → v1` is one of the directed edges of the face `corners`.
///
/// # Examples
/// ```
/// use shadow_mesh::shadow_volume::is_edge_oriented;
/// assert!(is_edge_oriented(2, 0, [0, 1, 2]));
/// assert!(!is_edge_oriented(0, 2, [0, 1, 2]));
/// ```
#[inline]
pub fn is_edge_oriented(v0: u32, v1: u32, corners: [u32; 3]) -> bool {
    Face::directed_edges(corners).contains(&(v0, v1))
}

/// Builds the shadow volume of a mesh seen in world space.
///
/// Boundary edges never produce walls. Fails with
/// [`ShadowMeshError::IndexOverflow`] when the volume would need more
/// vertices than a 16-bit index buffer can address.
pub fn build_shadow_volume(
    world: &WorldGeometry<'_>,
    faces: &[Face],
    edges: &[Edge],
    light: Vec3,
    distance: f32,
) -> ShadowMeshResult<ShadowVolume> {
    let lit = classify_faces(faces, light, world);

    // Oriented along the unlit face.
    let silhouettes: Vec<(u32, u32)> = edges
        .iter()
        .filter_map(|edge| {
            let (f0, f1) = edge.faces()?;
            let (lit0, lit1) = (lit[f0 as usize], lit[f1 as usize]);
            if lit0 == lit1 {
                return None;
            }
            let back = if lit0 { f1 } else { f0 };
            let corners = world.face_positions(&faces[back as usize]);
            Some(if is_edge_oriented(edge.v0, edge.v1, corners) {
                (edge.v0, edge.v1)
            } else {
                (edge.v1, edge.v0)
            })
        })
        .collect();

    let near_caps = lit.iter().filter(|&&l| l).count();
    let stats = VolumeStats {
        silhouette_edges: silhouettes.len(),
        near_caps,
        far_caps: faces.len() - near_caps,
    };

    let count = stats.vertex_count();
    if count > MAX_SHADOW_VERTICES {
        return Err(ShadowMeshError::IndexOverflow {
            count,
            max: MAX_SHADOW_VERTICES,
        });
    }

    let mut volume = ShadowVolume {
        vertices: Vec::with_capacity(count),
        indices: Vec::with_capacity(stats.triangle_count() * 3),
        stats,
    };

    for (v0, v1) in silhouettes {
        let p0 = world.position(v0);
        let p1 = world.position(v1);
        let base = volume.push_vertex(Vertex::at(p0));
        volume.push_vertex(Vertex::at(p1));
        volume.push_vertex(Vertex::at(extrude_from_light(p1, light, distance)));
        volume.push_vertex(Vertex::at(extrude_from_light(p0, light, distance)));
        volume.push_triangle(base, [0, 2, 1]);
        volume.push_triangle(base, [0, 3, 2]);
    }

    for (face, &is_lit) in faces.iter().zip(&lit) {
        let mut corners = face.indices.map(|v| world.vertex(v));
        if !is_lit {
            for corner in &mut corners {
                *corner = Vertex::at(extrude_from_light(corner.position, light, distance));
            }
        }
        let base = volume.push_vertex(corners[0]);
        volume.push_vertex(corners[1]);
        volume.push_vertex(corners[2]);
        volume.push_triangle(base, [2, 1, 0]);
    }

    trace!(
        "shadow volume: {} silhouette edges, {} near caps, {} far caps",
        stats.silhouette_edges,
        stats.near_caps,
        stats.far_caps
    );
    Ok(volume)
}

#[cfg(test)]
mod tests;
