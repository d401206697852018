//! # Mesh Module
//!
//! Indexed triangle mesh with edge adjacency and a per-frame shadow volume.
//!
//! ## Structure
//!
//! - `positions` - deduplicated points, the space adjacency is built in
//! - `vertices` - render vertices (position + normal), many per position
//! - `faces` - triangles over vertices
//! - `edges` - undirected position pairs with their two faces
//!
//! Everything except the shadow volume is fixed once the mesh is built.
//!
//! ## Example
//!
//! ```rust
//! use shadow_mesh::{primitives::shaded_box, render::RecordingTarget, Mat4, Vec3};
//!
//! let mut cube = shaded_box(1.0, 1.0, 1.0).unwrap();
//! cube.generate_shadow_volume(Vec3::new(2.0, 3.0, 3.0), &Mat4::IDENTITY, 10.0)
//!     .unwrap();
//!
//! let mut target = RecordingTarget::default();
//! cube.render_shadow_volume(&mut target);
//! assert_eq!(target.calls().len(), 1);
//! ```

use ::config::constants::MAX_SHADOW_VERTICES;
use log::{debug, warn};

use crate::adjacency::{boundary_edge_count, build_edges};
use crate::core::ds::{Edge, Face, Vertex, NO_FACE};
use crate::core::vec3::{Mat4, Vec3};
use crate::core::world::WorldGeometry;
use crate::error::{ShadowMeshError, ShadowMeshResult};
use crate::filesystem::FileSystem;
use crate::format::{parse_mesh, write_mesh, MeshData};
use crate::render::DrawTarget;
use crate::shadow_volume::{build_shadow_volume, ShadowVolume};

// =============================================================================
// MESH STRUCT
// =============================================================================

/// Triangle mesh that can cast stencil shadows.
///
/// ## Example
///
/// ```rust
/// use shadow_mesh::primitives::cylinder;
///
/// let cyl = cylinder(1, 4, 2.0, 0.5).unwrap();
/// assert_eq!(cyl.face_count(), 16);
/// assert!(cyl.is_closed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SmMesh {
    positions: Vec<Vec3>,
    vertices: Vec<Vertex>,
    vertex_positions: Vec<u32>,
    faces: Vec<Face>,
    edges: Vec<Edge>,
    /// Face list flattened once for the lit pass.
    indices: Vec<u16>,
    shadow_volume: Option<ShadowVolume>,
}

impl SmMesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Builds a mesh and derives its edges from the faces.
    ///
    /// `vertex_positions[i]` and `normals[i]` describe vertex `i`.
    pub fn with_adjacency(
        positions: Vec<Vec3>,
        vertex_positions: Vec<u32>,
        normals: Vec<Vec3>,
        faces: Vec<Face>,
    ) -> ShadowMeshResult<Self> {
        validate_vertices(&positions, &vertex_positions, &normals)?;
        validate_faces(&faces, vertex_positions.len())?;
        let edges = build_edges(&faces, &vertex_positions);
        Self::assemble(positions, vertex_positions, normals, faces, edges)
    }

    /// Builds a mesh from a precomputed edge list.
    ///
    /// Edges are only range-checked, not compared against the faces.
    pub fn with_edges(
        positions: Vec<Vec3>,
        vertex_positions: Vec<u32>,
        normals: Vec<Vec3>,
        faces: Vec<Face>,
        edges: Vec<Edge>,
    ) -> ShadowMeshResult<Self> {
        validate_vertices(&positions, &vertex_positions, &normals)?;
        validate_faces(&faces, vertex_positions.len())?;
        validate_edges(&edges, positions.len(), faces.len())?;
        Self::assemble(positions, vertex_positions, normals, faces, edges)
    }

    fn assemble(
        positions: Vec<Vec3>,
        vertex_positions: Vec<u32>,
        normals: Vec<Vec3>,
        faces: Vec<Face>,
        edges: Vec<Edge>,
    ) -> ShadowMeshResult<Self> {
        if vertex_positions.len() > MAX_SHADOW_VERTICES {
            return Err(ShadowMeshError::IndexOverflow {
                count: vertex_positions.len(),
                max: MAX_SHADOW_VERTICES,
            });
        }

        let vertices: Vec<Vertex> = vertex_positions
            .iter()
            .zip(normals)
            .map(|(&p, normal)| Vertex::new(positions[p as usize], normal))
            .collect();
        // In range: every vertex index is below MAX_SHADOW_VERTICES.
        let indices = faces
            .iter()
            .flat_map(|f| f.indices)
            .map(|i| i as u16)
            .collect();

        debug!(
            "mesh built: {} positions, {} vertices, {} faces, {} edges ({} boundary)",
            positions.len(),
            vertices.len(),
            faces.len(),
            edges.len(),
            boundary_edge_count(&edges)
        );

        Ok(Self {
            positions,
            vertices,
            vertex_positions,
            faces,
            edges,
            indices,
            shadow_volume: None,
        })
    }

    // =========================================================================
    // LOADING
    // =========================================================================

    /// Parses a mesh from text.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use shadow_mesh::SmMesh;
    ///
    /// let mesh = SmMesh::load_str("3 0 0 0 1 0 0 0 1 0 \
    ///                              3 0 0 0 1 1 0 0 1 2 0 0 1 \
    ///                              1 0 1 2 \
    ///                              3 0 1 0 -1 1 2 0 -1 2 0 0 -1").unwrap();
    /// assert_eq!(mesh.face_count(), 1);
    /// assert!(!mesh.is_closed());
    /// ```
    pub fn load_str(text: &str) -> ShadowMeshResult<Self> {
        Self::from_data(parse_mesh(text)?)
    }

    /// Reads and parses a mesh file.
    pub fn load<F: FileSystem + ?Sized>(fs: &F, path: &str) -> ShadowMeshResult<Self> {
        let text = fs.read_to_string(path)?;
        let mesh = Self::load_str(&text)?;
        if !mesh.is_closed() {
            warn!(
                "{path}: {} boundary edges, shadow volume will not be closed",
                mesh.boundary_edge_count()
            );
        }
        Ok(mesh)
    }

    /// Builds a mesh from parsed arenas.
    pub fn from_data(data: MeshData) -> ShadowMeshResult<Self> {
        let MeshData {
            positions,
            vertex_positions,
            normals,
            faces,
            edges,
        } = data;
        Self::with_edges(positions, vertex_positions, normals, faces, edges)
    }

    /// Serializes the mesh in the text format read by [`SmMesh::load_str`].
    pub fn to_text(&self) -> String {
        write_mesh(
            &self.positions,
            &self.vertices,
            &self.vertex_positions,
            &self.faces,
            &self.edges,
        )
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Deduplicated positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Render vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Position index of every vertex.
    pub fn vertex_positions(&self) -> &[u32] {
        &self.vertex_positions
    }

    /// Triangles.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Lit-pass index buffer.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Number of render vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of edges with a single face.
    pub fn boundary_edge_count(&self) -> usize {
        boundary_edge_count(&self.edges)
    }

    /// True when every edge has two faces.
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }

    /// Volume from the last successful [`SmMesh::generate_shadow_volume`].
    pub fn shadow_volume(&self) -> Option<&ShadowVolume> {
        self.shadow_volume.as_ref()
    }

    // =========================================================================
    // PER-FRAME OPERATIONS
    // =========================================================================

    /// Positions and normals under `world`.
    pub fn world_geometry(&self, world: &Mat4) -> WorldGeometry<'_> {
        WorldGeometry::transform(&self.positions, &self.vertices, &self.vertex_positions, world)
    }

    /// Computes the shadow volume for a light without storing it.
    pub fn compute_shadow_volume(
        &self,
        light: Vec3,
        world: &Mat4,
        extrusion: f32,
    ) -> ShadowMeshResult<ShadowVolume> {
        if !(extrusion.is_finite() && extrusion > 0.0) {
            return Err(ShadowMeshError::invalid_geometry(format!(
                "extrusion distance must be positive and finite, got {extrusion}"
            )));
        }
        let geometry = self.world_geometry(world);
        build_shadow_volume(&geometry, &self.faces, &self.edges, light, extrusion)
    }

    /// Rebuilds the stored shadow volume, replacing the previous one.
    ///
    /// On failure the previous volume is discarded as well.
    pub fn generate_shadow_volume(
        &mut self,
        light: Vec3,
        world: &Mat4,
        extrusion: f32,
    ) -> ShadowMeshResult<&ShadowVolume> {
        self.shadow_volume = None;
        let volume = self.compute_shadow_volume(light, world, extrusion)?;
        Ok(&*self.shadow_volume.insert(volume))
    }

    /// Drops the stored shadow volume.
    pub fn clear_shadow_volume(&mut self) {
        self.shadow_volume = None;
    }

    /// Submits the lit mesh in model space under `world`.
    pub fn render<T: DrawTarget + ?Sized>(&self, target: &mut T, world: &Mat4) {
        if self.indices.is_empty() {
            return;
        }
        target.set_world_transform(world);
        target.draw_indexed(&self.vertices, &self.indices);
    }

    /// Submits the stored shadow volume, which is already in world space.
    ///
    /// Does nothing when no volume has been generated.
    pub fn render_shadow_volume<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        let Some(volume) = self.shadow_volume.as_ref().filter(|v| !v.is_empty()) else {
            return;
        };
        target.set_world_transform(&Mat4::IDENTITY);
        target.draw_indexed(volume.vertices(), volume.indices());
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

fn validate_vertices(positions: &[Vec3], vertex_positions: &[u32], normals: &[Vec3]) -> ShadowMeshResult<()> {
    if vertex_positions.len() != normals.len() {
        return Err(ShadowMeshError::InvalidTopology(format!(
            "{} vertex positions but {} normals",
            vertex_positions.len(),
            normals.len()
        )));
    }
    if let Some((vertex, &p)) = vertex_positions
        .iter()
        .enumerate()
        .find(|(_, &p)| p as usize >= positions.len())
    {
        return Err(ShadowMeshError::InvalidTopology(format!(
            "vertex {vertex} references position {p} of {}",
            positions.len()
        )));
    }
    Ok(())
}

fn validate_faces(faces: &[Face], vertex_count: usize) -> ShadowMeshResult<()> {
    for (index, face) in faces.iter().enumerate() {
        if face.indices.iter().any(|&v| v as usize >= vertex_count) {
            return Err(ShadowMeshError::InvalidTopology(format!(
                "face {index} {:?} references a vertex outside 0..{vertex_count}",
                face.indices
            )));
        }
    }
    Ok(())
}

fn validate_edges(edges: &[Edge], position_count: usize, face_count: usize) -> ShadowMeshResult<()> {
    for (index, edge) in edges.iter().enumerate() {
        let positions_ok = (edge.v0 as usize) < position_count && (edge.v1 as usize) < position_count;
        let faces_ok = (edge.face0 as usize) < face_count
            && (edge.face1 == NO_FACE || (edge.face1 as usize) < face_count);
        if !(positions_ok && faces_ok) {
            return Err(ShadowMeshError::InvalidTopology(format!(
                "edge {index} {edge:?} is out of range ({position_count} positions, {face_count} faces)"
            )));
        }
    }
    Ok(())
}
