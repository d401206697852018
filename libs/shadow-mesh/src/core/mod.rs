//! Core data structures and types for the shadow-mesh kernel.
//!
//! Includes vector aliases (`Vec3`, `Mat4`), the arena records (`Vertex`,
//! `Face`, `Edge`) and the per-frame world-space view of a mesh.

pub mod ds;
pub mod vec3;
pub mod world;
