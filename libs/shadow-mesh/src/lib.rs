//! Shadow-volume geometry kernel for the manipulator scene.
//!
//! This crate keeps an index-based mesh representation (positions, vertices,
//! faces and edges in flat arenas) and derives a closed stencil shadow volume
//! from it every frame for a given point light and world transform.
//!
//! ## Example
//!
//! ```rust
//! use shadow_mesh::{primitives::double_rect, Mat4, Vec3};
//!
//! let mut mirror = double_rect(1.5, 1.0).unwrap();
//! let volume = mirror
//!     .generate_shadow_volume(Vec3::new(0.0, 0.0, 5.0), &Mat4::IDENTITY, 10.0)
//!     .unwrap();
//! assert_eq!(volume.stats().silhouette_edges, 4);
//! ```

pub mod adjacency;
pub mod config;
pub mod core;
pub mod error;
pub mod filesystem;
pub mod format;
pub mod kinematics;
pub mod mesh;
pub mod primitives;
pub mod render;
pub mod scene;
pub mod shadow_volume;
pub mod silhouette;

pub use crate::core::ds::{Edge, Face, Vertex, NO_FACE};
pub use crate::core::vec3::{Mat4, Vec3};
pub use error::{MeshSection, ParseError, ParseErrorKind, ShadowMeshError, ShadowMeshResult};
pub use mesh::SmMesh;
pub use render::DrawTarget;
pub use shadow_volume::{ShadowVolume, VolumeStats};
