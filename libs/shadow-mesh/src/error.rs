//! # Error Types
//!
//! Error types for mesh construction, loading and shadow-volume generation.
//! All errors are explicit and provide clear debugging information.
//!
//! ## Error Policy
//!
//! - NO partial meshes when loading fails
//! - Non-manifold edge over-sharing is NOT an error (extra faces are dropped)
//! - Errors include context (line, section, counts) for debugging

use std::fmt;

use ::config::constants::ConfigError;
use thiserror::Error;

use crate::filesystem::FileSystemError;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building meshes or their shadow volumes.
///
/// ## Example
///
/// ```rust
/// use shadow_mesh::{ShadowMeshError, SmMesh};
///
/// match SmMesh::load_str("3\n0 0 0\n") {
///     Ok(_) => unreachable!("truncated mesh"),
///     Err(ShadowMeshError::Parse(err)) => eprintln!("Parse error: {}", err),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ShadowMeshError {
    /// The mesh text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The mesh file could not be read.
    #[error("Filesystem error: {0}")]
    FileSystem(#[from] FileSystemError),

    /// Generator parameters or mesh data describe unusable geometry.
    #[error("Geometry error: {message}")]
    InvalidGeometry {
        /// Description of the offending value
        message: String,
    },

    /// Index references between arenas are inconsistent.
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// A buffer needs more vertices than 16-bit indices can address.
    #[error("Buffer needs {count} vertices but 16-bit indices address at most {max}")]
    IndexOverflow {
        /// Number of vertices the buffer would hold
        count: usize,
        /// Largest addressable vertex count
        max: usize,
    },

    /// Rejected configuration values.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ShadowMeshError {
    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }
}

// =============================================================================
// PARSE ERRORS
// =============================================================================

/// Section of the mesh text format being read when a parse error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshSection {
    /// The `K` position count.
    PositionCount,
    /// The `x y z` position records.
    Positions,
    /// The `L` vertex count.
    VertexCount,
    /// The `posIndex nx ny nz` vertex records.
    Vertices,
    /// The `M` triangle count.
    TriangleCount,
    /// The `i0 i1 i2` triangle records.
    Triangles,
    /// The `N` edge count.
    EdgeCount,
    /// The `v0 v1 f0 f1` edge records.
    Edges,
    /// Anything after the last edge record.
    Trailer,
}

impl fmt::Display for MeshSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeshSection::PositionCount => "position count",
            MeshSection::Positions => "positions",
            MeshSection::VertexCount => "vertex count",
            MeshSection::Vertices => "vertices",
            MeshSection::TriangleCount => "triangle count",
            MeshSection::Triangles => "triangles",
            MeshSection::EdgeCount => "edge count",
            MeshSection::Edges => "edges",
            MeshSection::Trailer => "end of file",
        };
        f.write_str(name)
    }
}

/// What went wrong while reading a token.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// The input ended before the section was complete.
    #[error("unexpected end of file")]
    UnexpectedEof,

    /// A token could not be read as the expected type.
    #[error("expected {expected}, found `{token}`")]
    InvalidToken {
        /// The offending token
        token: String,
        /// Human readable name of the expected type
        expected: &'static str,
    },

    /// An index does not refer to an existing record.
    #[error("index {index} out of range for {len} records")]
    IndexOutOfRange {
        /// The offending index
        index: u32,
        /// Number of records that exist
        len: usize,
    },

    /// Tokens remain after the last edge record.
    #[error("unexpected trailing token `{token}`")]
    TrailingData {
        /// First token past the end
        token: String,
    },
}

/// Fatal error raised by the mesh text loader.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {kind} while reading {section}")]
pub struct ParseError {
    /// 1-based line of the offending token (last line for EOF).
    pub line: usize,
    /// Section being read.
    pub section: MeshSection,
    /// Failure detail.
    pub kind: ParseErrorKind,
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for shadow-mesh operations.
///
/// ## Example
///
/// ```rust
/// use shadow_mesh::{primitives::cylinder, ShadowMeshResult, SmMesh};
///
/// fn pillar() -> ShadowMeshResult<SmMesh> {
///     cylinder(1, 16, 3.0, 0.5)
/// }
/// # assert!(pillar().is_ok());
/// ```
pub type ShadowMeshResult<T> = Result<T, ShadowMeshError>;

// =============================================================================
// TESTS
// =============================================================================
