//! Edge adjacency over deduplicated positions.
//!
//! Every face contributes its three directed edges. Edges are keyed by the
//! unordered pair of position indices so vertices that only differ in their
//! normal (hard edges, cap rings) still share one edge record.

use std::collections::HashMap;

use log::trace;

use crate::core::ds::{Edge, Face, NO_FACE};

/// Outcome of feeding one face-edge into the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    /// First face to reference the edge.
    Inserted,
    /// Second face to reference the edge.
    Completed,
    /// The edge already had two faces; the contribution was ignored.
    Dropped,
}

/// Undirected key for the edge between two positions.
#[inline]
pub fn edge_key(v0: u32, v1: u32) -> (u32, u32) {
    (v0.min(v1), v0.max(v1))
}

/// Insertion-ordered edge map used while building adjacency.
#[derive(Debug, Default, Clone)]
pub struct EdgeMap {
    lookup: HashMap<(u32, u32), usize>,
    edges: Vec<Edge>,
}

impl EdgeMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map sized for `edges` distinct edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            lookup: HashMap::with_capacity(edges),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Records that `face` uses the edge `v0 → v1`.
    ///
    /// The stored direction is the one seen first. A third face on the same
    /// edge is dropped.
    pub fn add_edge(&mut self, v0: u32, v1: u32, face: u32) -> EdgeInsert {
        let key = edge_key(v0, v1);
        match self.lookup.get(&key) {
            None => {
                self.lookup.insert(key, self.edges.len());
                self.edges.push(Edge::open(v0, v1, face));
                EdgeInsert::Inserted
            }
            Some(&slot) => {
                let edge = &mut self.edges[slot];
                if edge.face1 == NO_FACE {
                    edge.face1 = face;
                    EdgeInsert::Completed
                } else {
                    trace!(
                        "dropping face {face} on edge ({}, {}) already shared by faces {} and {}",
                        key.0,
                        key.1,
                        edge.face0,
                        edge.face1
                    );
                    EdgeInsert::Dropped
                }
            }
        }
    }

    /// Looks up the edge between two positions, in either direction.
    pub fn get(&self, v0: u32, v1: u32) -> Option<&Edge> {
        self.lookup
            .get(&edge_key(v0, v1))
            .map(|&slot| &self.edges[slot])
    }

    /// Number of distinct edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when no edge has been recorded.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in first-insertion order.
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// Builds the edge list of a mesh.
///
/// Faces are walked in order and each contributes `(a, b)`, `(b, c)`,
/// `(c, a)` in position space, so the result is deterministic for a given
/// face list. Every index in `faces` must be valid for `vertex_positions`.
pub fn build_edges(faces: &[Face], vertex_positions: &[u32]) -> Vec<Edge> {
    // Closed triangle meshes have 3F/2 edges.
    let mut map = EdgeMap::with_capacity(faces.len() * 3 / 2 + 1);
    let mut dropped = 0usize;

    for (face_index, face) in faces.iter().enumerate() {
        let corners = face.position_indices(vertex_positions);
        for (a, b) in Face::directed_edges(corners) {
            if map.add_edge(a, b, face_index as u32) == EdgeInsert::Dropped {
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        trace!("adjacency dropped {dropped} non-manifold edge contributions");
    }
    map.into_edges()
}

/// Number of edges with a single adjacent face.
pub fn boundary_edge_count(edges: &[Edge]) -> usize {
    edges.iter().filter(|e| e.is_boundary()).count()
}
