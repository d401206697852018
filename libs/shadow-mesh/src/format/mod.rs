//! Mesh text format.
//!
//! Four whitespace-separated sections, each a count followed by records:
//!
//! ```text
//! K   then K × `x y z`                  positions
//! L   then L × `posIndex nx ny nz`      vertices
//! M   then M × `i0 i1 i2`               triangles (vertex indices)
//! N   then N × `v0 v1 f0 f1`            edges (position and face indices)
//! ```
//!
//! Line breaks carry no meaning beyond token separation. `f1` may be `-1`
//! for a boundary edge. Edges are taken as given, not recomputed.

use std::str::FromStr;

use crate::core::ds::{Edge, Face, Vertex, NO_FACE};
use crate::core::vec3::Vec3;
use crate::error::{MeshSection, ParseError, ParseErrorKind};

/// Arenas read from mesh text, before they are assembled into a mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Deduplicated positions.
    pub positions: Vec<Vec3>,
    /// Position index of every vertex.
    pub vertex_positions: Vec<u32>,
    /// Normal of every vertex.
    pub normals: Vec<Vec3>,
    /// Triangles.
    pub faces: Vec<Face>,
    /// Edges.
    pub edges: Vec<Edge>,
}

struct Tokens<'a> {
    tokens: Vec<(usize, &'a str)>,
    cursor: usize,
    last_line: usize,
    section: MeshSection,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let tokens: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)))
            .collect();
        Self {
            tokens,
            cursor: 0,
            last_line: text.lines().count().max(1),
            section: MeshSection::PositionCount,
        }
    }

    fn error(&self, line: usize, kind: ParseErrorKind) -> ParseError {
        ParseError {
            line,
            section: self.section,
            kind,
        }
    }

    fn next_raw(&mut self) -> Result<(usize, &'a str), ParseError> {
        let token = self
            .tokens
            .get(self.cursor)
            .copied()
            .ok_or_else(|| self.error(self.last_line, ParseErrorKind::UnexpectedEof))?;
        self.cursor += 1;
        Ok(token)
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<(usize, T), ParseError> {
        let (line, token) = self.next_raw()?;
        token.parse().map(|value| (line, value)).map_err(|_| {
            self.error(
                line,
                ParseErrorKind::InvalidToken {
                    token: token.to_string(),
                    expected,
                },
            )
        })
    }

    fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    fn count(&mut self) -> Result<usize, ParseError> {
        self.next::<usize>("record count").map(|(_, n)| n)
    }

    fn float(&mut self) -> Result<f32, ParseError> {
        let (line, token) = self.next_raw()?;
        match token.parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.error(
                line,
                ParseErrorKind::InvalidToken {
                    token: token.to_string(),
                    expected: "finite number",
                },
            )),
        }
    }

    fn vec3(&mut self) -> Result<Vec3, ParseError> {
        Ok(Vec3::new(self.float()?, self.float()?, self.float()?))
    }

    /// Reads an index that must be below `len`.
    fn index(&mut self, len: usize) -> Result<u32, ParseError> {
        let (line, index) = self.next::<u32>("index")?;
        if (index as usize) < len {
            Ok(index)
        } else {
            Err(self.error(line, ParseErrorKind::IndexOutOfRange { index, len }))
        }
    }

    /// Reads a face index that may be `-1` for "no face".
    fn optional_face(&mut self, len: usize) -> Result<u32, ParseError> {
        if self.tokens.get(self.cursor).map(|&(_, t)| t) == Some("-1") {
            self.cursor += 1;
            return Ok(NO_FACE);
        }
        self.index(len)
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        self.section = MeshSection::Trailer;
        match self.tokens.get(self.cursor) {
            None => Ok(()),
            Some(&(line, token)) => Err(self.error(
                line,
                ParseErrorKind::TrailingData {
                    token: token.to_string(),
                },
            )),
        }
    }
}

/// Parses mesh text.
///
/// Fails on the first malformed token, premature end of input, index out of
/// range or trailing token, reporting the line and section.
///
/// # Examples
/// ```
/// use shadow_mesh::format::parse_mesh;
/// let text = "3\n0 0 0\n1 0 0\n0 1 0\n\
///             3\n0 0 0 1\n1 0 0 1\n2 0 0 1\n\
///             1\n0 1 2\n\
///             3\n0 1 0 -1\n1 2 0 -1\n2 0 0 -1\n";
/// let data = parse_mesh(text).unwrap();
/// assert_eq!(data.faces.len(), 1);
/// assert!(data.edges.iter().all(|e| e.is_boundary()));
/// ```
pub fn parse_mesh(text: &str) -> Result<MeshData, ParseError> {
    let mut tokens = Tokens::new(text);

    let k = tokens.count()?;
    tokens.section = MeshSection::Positions;
    let positions = (0..k).map(|_| tokens.vec3()).collect::<Result<Vec<_>, _>>()?;

    tokens.section = MeshSection::VertexCount;
    let l = tokens.count()?;
    tokens.section = MeshSection::Vertices;
    // Counts are untrusted; four tokens per vertex bound the reservation.
    let reserve = l.min(tokens.remaining() / 4);
    let mut vertex_positions = Vec::with_capacity(reserve);
    let mut normals = Vec::with_capacity(reserve);
    for _ in 0..l {
        vertex_positions.push(tokens.index(k)?);
        normals.push(tokens.vec3()?);
    }

    tokens.section = MeshSection::TriangleCount;
    let m = tokens.count()?;
    tokens.section = MeshSection::Triangles;
    let faces = (0..m)
        .map(|_| -> Result<Face, ParseError> {
            Ok(Face::new(tokens.index(l)?, tokens.index(l)?, tokens.index(l)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tokens.section = MeshSection::EdgeCount;
    let n = tokens.count()?;
    tokens.section = MeshSection::Edges;
    let edges = (0..n)
        .map(|_| -> Result<Edge, ParseError> {
            Ok(Edge::new(
                tokens.index(k)?,
                tokens.index(k)?,
                tokens.index(m)?,
                tokens.optional_face(m)?,
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tokens.finish()?;

    Ok(MeshData {
        positions,
        vertex_positions,
        normals,
        faces,
        edges,
    })
}

/// Writes mesh arenas in the text format read by [`parse_mesh`].
///
/// Floats use the shortest representation that reads back to the same value.
pub fn write_mesh(
    positions: &[Vec3],
    vertices: &[Vertex],
    vertex_positions: &[u32],
    faces: &[Face],
    edges: &[Edge],
) -> String {
    let mut out = format!("{}\n", positions.len());
    for p in positions {
        out.push_str(&format!("{} {} {}\n", p.x, p.y, p.z));
    }

    out.push_str(&format!("{}\n", vertices.len()));
    for (vertex, position) in vertices.iter().zip(vertex_positions) {
        let n = vertex.normal;
        out.push_str(&format!("{} {} {} {}\n", position, n.x, n.y, n.z));
    }

    out.push_str(&format!("{}\n", faces.len()));
    for face in faces {
        let [a, b, c] = face.indices;
        out.push_str(&format!("{a} {b} {c}\n"));
    }

    out.push_str(&format!("{}\n", edges.len()));
    for edge in edges {
        let face1 = if edge.is_boundary() {
            "-1".to_string()
        } else {
            edge.face1.to_string()
        };
        out.push_str(&format!("{} {} {} {}\n", edge.v0, edge.v1, edge.face0, face1));
    }

    out
}

#[cfg(test)]
mod tests;
